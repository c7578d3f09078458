//! The life calendar tab: a week grid of the whole life or the current year.

use super::about_the_app::{self, AboutTheAppAction, AboutTheAppState};
use crate::app::effect::{Effect, EffectId};
use crate::app::environment::Environment;
use crate::life::Life;
use chrono::NaiveDate;
use futures::StreamExt;

pub const LIFE_ID: EffectId = EffectId("life_calendar.life");
pub const LIFE_EXPECTANCY_ID: EffectId = EffectId("life_calendar.life_expectancy");

pub const DEFAULT_CURRENT_YEAR_COLUMNS: u16 = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarType {
    #[default]
    Life,
    CurrentYear,
}

impl CalendarType {
    pub fn title(self) -> &'static str {
        match self {
            CalendarType::Life => "Life",
            CalendarType::CurrentYear => "Current Year",
        }
    }

    pub fn toggled(self) -> CalendarType {
        match self {
            CalendarType::Life => CalendarType::CurrentYear,
            CalendarType::CurrentYear => CalendarType::Life,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeCalendarState {
    pub life: Life,
    pub calendar_type: CalendarType,
    pub is_about_the_calendar_sheet_visible: bool,
    pub current_year_mode_column_count: u16,
}

impl LifeCalendarState {
    pub fn new(life: Life, current_year_mode_column_count: u16) -> Self {
        Self {
            life,
            calendar_type: CalendarType::default(),
            is_about_the_calendar_sheet_visible: false,
            current_year_mode_column_count: current_year_mode_column_count.max(1),
        }
    }

    pub fn about_the_app(&self) -> AboutTheAppState {
        AboutTheAppState {
            life: self.life,
            is_about_the_calendar_sheet_visible: self.is_about_the_calendar_sheet_visible,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifeCalendarAction {
    OnAppear,
    /// Stops the loads and subscriptions started by `OnAppear`.
    OnDisappear,
    LifeLoaded(Life),
    LifeExpectancyChanged(u32),
    CalendarTypeChanged(CalendarType),
    AboutLifeCalendarButtonTapped,
    CloseAboutTheCalendarSheet,
    AboutTheApp(AboutTheAppAction),
    TodayChanged(NaiveDate),
}

pub fn reduce(
    state: &mut LifeCalendarState,
    action: LifeCalendarAction,
    env: &Environment,
) -> Effect<LifeCalendarAction> {
    match action {
        LifeCalendarAction::OnAppear => {
            let birthday = env.settings.birthday();
            let life_expectancy = env.settings.life_expectancy();
            let today = (env.today)();
            let load = Effect::task(async move {
                LifeCalendarAction::LifeLoaded(Life::new(birthday, life_expectancy, today))
            })
            .cancellable(LIFE_ID);
            let changes = Effect::subscription(
                env.settings
                    .life_expectancy_changes()
                    .map(LifeCalendarAction::LifeExpectancyChanged),
            )
            .cancellable(LIFE_EXPECTANCY_ID);
            Effect::batch([load, changes])
        }
        LifeCalendarAction::OnDisappear => Effect::batch([
            Effect::cancel(LIFE_ID),
            Effect::cancel(LIFE_EXPECTANCY_ID),
        ]),
        LifeCalendarAction::LifeLoaded(life) => {
            state.life = life;
            Effect::none()
        }
        LifeCalendarAction::LifeExpectancyChanged(years) => {
            state.life.life_expectancy = years;
            Effect::none()
        }
        LifeCalendarAction::CalendarTypeChanged(calendar_type) => {
            state.calendar_type = calendar_type;
            Effect::none()
        }
        LifeCalendarAction::AboutLifeCalendarButtonTapped => {
            state.is_about_the_calendar_sheet_visible = true;
            Effect::none()
        }
        LifeCalendarAction::CloseAboutTheCalendarSheet => {
            state.is_about_the_calendar_sheet_visible = false;
            Effect::none()
        }
        LifeCalendarAction::AboutTheApp(action) => {
            let mut about = state.about_the_app();
            let effect = about_the_app::reduce(&mut about, action);
            state.is_about_the_calendar_sheet_visible = about.is_about_the_calendar_sheet_visible;
            effect.map(LifeCalendarAction::AboutTheApp)
        }
        LifeCalendarAction::TodayChanged(today) => {
            state.life.today = today;
            Effect::none()
        }
    }
}
