use crate::app::state::Tab;
use crate::features::life_calendar::LifeCalendarAction;
use crate::features::life_goals::LifeGoalsAction;
use crate::features::onboarding::OnboardingAction;
use crate::features::settings::SettingsAction;

/// Every input the root reducer accepts: navigation plus the child
/// feature actions it routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Onboarding(OnboardingAction),
    LifeCalendar(LifeCalendarAction),
    LifeGoals(LifeGoalsAction),
    Settings(SettingsAction),
    /// Select a tab directly. `None` or the current tab only clears the path.
    TabChanged(Option<Tab>),
    /// Select a tab by ordinal. Out-of-range indices leave no tab selected.
    TabIndexChanged(usize),
    /// Replace the navigation path verbatim.
    PathChanged(Vec<Tab>),
}
