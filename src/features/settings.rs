//! The settings tab, composing the four preference features.

use super::birthday::{self, BirthdayAction, BirthdayState};
use super::life_expectancy::{self, LifeExpectancyAction, LifeExpectancyState};
use super::theme::{self, ThemeAction, ThemeState};
use super::weekly_notification::{self, WeeklyNotificationAction, WeeklyNotificationState};
use crate::app::effect::Effect;
use crate::app::environment::Environment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsRow {
    #[default]
    Birthday,
    LifeExpectancy,
    Theme,
    WeeklyNotification,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 4] = [
        SettingsRow::Birthday,
        SettingsRow::LifeExpectancy,
        SettingsRow::Theme,
        SettingsRow::WeeklyNotification,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SettingsRow::Birthday => "Birthday",
            SettingsRow::LifeExpectancy => "Life Expectancy",
            SettingsRow::Theme => "Theme",
            SettingsRow::WeeklyNotification => "Weekly Notification",
        }
    }

    fn moved(self, delta: isize) -> SettingsRow {
        let len = Self::ALL.len() as isize;
        let index = (self as isize + delta).clamp(0, len - 1);
        Self::ALL[index as usize]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsState {
    pub birthday: BirthdayState,
    pub life_expectancy: LifeExpectancyState,
    pub theme: ThemeState,
    pub weekly_notification: WeeklyNotificationState,
    pub selected_row: SettingsRow,
}

impl SettingsState {
    pub fn new(
        birthday: BirthdayState,
        life_expectancy: LifeExpectancyState,
        theme: ThemeState,
        weekly_notification: WeeklyNotificationState,
    ) -> Self {
        Self {
            birthday,
            life_expectancy,
            theme,
            weekly_notification,
            selected_row: SettingsRow::default(),
        }
    }

    /// True while a picker owns the keyboard.
    pub fn is_editing(&self) -> bool {
        self.birthday.is_date_picker_visible || self.life_expectancy.is_slider_visible
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    OnAppear,
    /// Stops the change subscription started by `OnAppear`.
    OnDisappear,
    RowSelected(isize),
    Birthday(BirthdayAction),
    LifeExpectancy(LifeExpectancyAction),
    Theme(ThemeAction),
    WeeklyNotification(WeeklyNotificationAction),
}

pub fn reduce(
    state: &mut SettingsState,
    action: SettingsAction,
    env: &Environment,
) -> Effect<SettingsAction> {
    match action {
        SettingsAction::OnAppear => Effect::batch([
            birthday::reduce(&mut state.birthday, BirthdayAction::OnAppear, env)
                .map(SettingsAction::Birthday),
            life_expectancy::reduce(
                &mut state.life_expectancy,
                LifeExpectancyAction::OnAppear,
                env,
            )
            .map(SettingsAction::LifeExpectancy),
            theme::reduce(&mut state.theme, ThemeAction::OnAppear, env).map(SettingsAction::Theme),
            weekly_notification::reduce(
                &mut state.weekly_notification,
                WeeklyNotificationAction::OnAppear,
                env,
            )
            .map(SettingsAction::WeeklyNotification),
        ]),
        SettingsAction::OnDisappear => life_expectancy::reduce(
            &mut state.life_expectancy,
            LifeExpectancyAction::OnDisappear,
            env,
        )
        .map(SettingsAction::LifeExpectancy),
        SettingsAction::RowSelected(delta) => {
            state.selected_row = state.selected_row.moved(delta);
            Effect::none()
        }
        SettingsAction::Birthday(action) => {
            birthday::reduce(&mut state.birthday, action, env).map(SettingsAction::Birthday)
        }
        SettingsAction::LifeExpectancy(action) => {
            life_expectancy::reduce(&mut state.life_expectancy, action, env)
                .map(SettingsAction::LifeExpectancy)
        }
        SettingsAction::Theme(action) => {
            theme::reduce(&mut state.theme, action, env).map(SettingsAction::Theme)
        }
        SettingsAction::WeeklyNotification(action) => {
            weekly_notification::reduce(&mut state.weekly_notification, action, env)
                .map(SettingsAction::WeeklyNotification)
        }
    }
}
