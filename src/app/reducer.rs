//! The root reducer: tab navigation plus routing of child feature actions.

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::environment::Environment;
use crate::app::state::{RootState, Tab};
use crate::features::onboarding::OnboardingAction;
use crate::features::{life_calendar, life_goals, onboarding, settings};
use tracing::{debug, warn};

pub fn reduce(state: &mut RootState, action: Action, env: &Environment) -> Effect<Action> {
    match action {
        Action::Onboarding(action) => {
            if action == OnboardingAction::FinishOnboarding {
                state.did_complete_onboarding = true;
            }
            onboarding::reduce(&mut state.onboarding, action, env).map(Action::Onboarding)
        }
        Action::LifeCalendar(action) => {
            life_calendar::reduce(&mut state.life_calendar, action, env).map(Action::LifeCalendar)
        }
        Action::LifeGoals(action) => {
            life_goals::reduce(&mut state.life_goals, action, env).map(Action::LifeGoals)
        }
        Action::Settings(action) => {
            settings::reduce(&mut state.settings, action, env).map(Action::Settings)
        }
        Action::TabChanged(tab) => {
            match tab {
                Some(tab) if Some(tab) != state.selected_tab => {
                    debug!(?tab, "tab changed");
                    state.selected_tab = Some(tab);
                    state.selected_tab_index = tab.ordinal();
                    state.path = vec![tab];
                }
                _ => state.path.clear(),
            }
            Effect::none()
        }
        Action::TabIndexChanged(index) => {
            if index != state.selected_tab_index {
                state.selected_tab_index = index;
                state.selected_tab = Tab::from_ordinal(index);
                if state.selected_tab.is_none() {
                    warn!(index, "tab index out of range; no tab selected");
                }
            }
            Effect::none()
        }
        Action::PathChanged(path) => {
            state.path = path;
            Effect::none()
        }
    }
}

/// The action a tab sends when it becomes visible.
pub fn on_appear(tab: Tab) -> Action {
    match tab {
        Tab::LifeCalendar => Action::LifeCalendar(life_calendar::LifeCalendarAction::OnAppear),
        Tab::LifeGoals => Action::LifeGoals(life_goals::LifeGoalsAction::OnAppear),
        Tab::Settings => Action::Settings(settings::SettingsAction::OnAppear),
    }
}

/// The action a tab receives when the user leaves it, if it holds any
/// long-lived effects.
pub fn on_disappear(tab: Tab) -> Option<Action> {
    match tab {
        Tab::LifeCalendar => Some(Action::LifeCalendar(
            life_calendar::LifeCalendarAction::OnDisappear,
        )),
        Tab::LifeGoals => None,
        Tab::Settings => Some(Action::Settings(settings::SettingsAction::OnDisappear)),
    }
}
