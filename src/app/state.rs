use crate::app::environment::Environment;
use crate::config::AppConfig;
use crate::features::birthday::BirthdayState;
use crate::features::life_calendar::LifeCalendarState;
use crate::features::life_expectancy::{LifeExpectancyState, ONBOARDING_IDS, SETTINGS_IDS};
use crate::features::life_goals::LifeGoalsState;
use crate::features::onboarding::OnboardingState;
use crate::features::settings::SettingsState;
use crate::features::theme::{ThemeKind, ThemeState};
use crate::features::weekly_notification::WeeklyNotificationState;
use crate::life::Life;

/// A top-level destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    LifeCalendar,
    LifeGoals,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::LifeCalendar, Tab::LifeGoals, Tab::Settings];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::LifeCalendar => "Life Calendar",
            Tab::LifeGoals => "Life Goals",
            Tab::Settings => "Settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::LifeCalendar => "calendar",
            Tab::LifeGoals => "flag",
            Tab::Settings => "gear",
        }
    }

    pub fn next(self) -> Tab {
        Self::ALL[(self.ordinal() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Self::ALL[(self.ordinal() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RootState {
    pub onboarding: OnboardingState,
    pub life_calendar: LifeCalendarState,
    pub life_goals: LifeGoalsState,
    pub settings: SettingsState,
    pub selected_tab: Option<Tab>,
    pub selected_tab_index: usize,
    pub path: Vec<Tab>,
    pub did_complete_onboarding: bool,
    pub show_week_numbers: bool,
}

impl RootState {
    /// Build the initial state from the values currently in the settings
    /// store.
    pub fn new(env: &Environment, config: &AppConfig) -> Self {
        let birthday = env.settings.birthday();
        let life_expectancy = env.settings.life_expectancy();
        let today = (env.today)();

        Self {
            onboarding: OnboardingState::new(
                BirthdayState::new(birthday),
                LifeExpectancyState::new(life_expectancy, ONBOARDING_IDS),
            ),
            life_calendar: LifeCalendarState::new(
                Life::new(birthday, life_expectancy, today),
                config.ui.current_year_columns,
            ),
            life_goals: LifeGoalsState::default(),
            settings: SettingsState::new(
                BirthdayState::new(birthday),
                LifeExpectancyState::new(life_expectancy, SETTINGS_IDS),
                ThemeState::new(env.settings.theme()),
                WeeklyNotificationState {
                    is_weekly_notification_enabled: env.settings.is_weekly_notification_enabled(),
                },
            ),
            selected_tab: Some(Tab::LifeCalendar),
            selected_tab_index: Tab::LifeCalendar.ordinal(),
            path: Vec::new(),
            did_complete_onboarding: env.settings.did_complete_onboarding(),
            show_week_numbers: config.ui.show_week_numbers,
        }
    }

    /// The accent follows the theme picked in settings.
    pub fn theme(&self) -> ThemeKind {
        self.settings.theme.selected_theme
    }
}
