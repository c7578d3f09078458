//! First-run flow: introduction, birthday, life expectancy.

use super::birthday::{self, BirthdayAction, BirthdayState};
use super::life_expectancy::{self, LifeExpectancyAction, LifeExpectancyState};
use crate::app::effect::Effect;
use crate::app::environment::Environment;
use std::collections::BTreeMap;
use tracing::{info, warn};

pub const FINISHED_EVENT: &str = "onboarding.finished";

/// One line of the introduction screen.
pub struct About {
    pub symbol_name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ABOUTS: &[About] = &[
    About {
        symbol_name: "calendar",
        title: "Life Calendar",
        description: "Your whole life as a grid of weeks, one row per year.",
    },
    About {
        symbol_name: "flag",
        title: "Life Goals",
        description: "Keep track of the things you want to do while there are weeks left.",
    },
    About {
        symbol_name: "bell",
        title: "Weekly Reminder",
        description: "A gentle nudge each time another week goes by.",
    },
    About {
        symbol_name: "paintbrush",
        title: "Themes",
        description: "Pick the accent colour that suits you.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    About,
    Birthday,
    LifeExpectancy,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 3] = [
        OnboardingStep::About,
        OnboardingStep::Birthday,
        OnboardingStep::LifeExpectancy,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingState {
    pub step: OnboardingStep,
    pub birthday: BirthdayState,
    pub life_expectancy: LifeExpectancyState,
}

impl OnboardingState {
    pub fn new(birthday: BirthdayState, life_expectancy: LifeExpectancyState) -> Self {
        Self {
            step: OnboardingStep::About,
            birthday,
            life_expectancy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingAction {
    ContinueButtonTapped,
    BackButtonTapped,
    Birthday(BirthdayAction),
    LifeExpectancy(LifeExpectancyAction),
    FinishOnboarding,
}

pub fn reduce(
    state: &mut OnboardingState,
    action: OnboardingAction,
    env: &Environment,
) -> Effect<OnboardingAction> {
    match action {
        OnboardingAction::ContinueButtonTapped => match state.step {
            OnboardingStep::About => {
                state.step = OnboardingStep::Birthday;
                Effect::none()
            }
            OnboardingStep::Birthday => {
                state.step = OnboardingStep::LifeExpectancy;
                Effect::none()
            }
            OnboardingStep::LifeExpectancy => {
                let birthday = env.settings.update_birthday(state.birthday.birthday);
                let life_expectancy = env
                    .settings
                    .update_life_expectancy(state.life_expectancy.life_expectancy);
                Effect::task(async move {
                    if let Err(e) = birthday.await {
                        warn!(error = %format!("{:#}", e), "failed to persist birthday");
                    }
                    if let Err(e) = life_expectancy.await {
                        warn!(error = %format!("{:#}", e), "failed to persist life expectancy");
                    }
                    OnboardingAction::FinishOnboarding
                })
            }
        },
        OnboardingAction::BackButtonTapped => {
            state.step = match state.step {
                OnboardingStep::LifeExpectancy => OnboardingStep::Birthday,
                _ => OnboardingStep::About,
            };
            Effect::none()
        }
        OnboardingAction::Birthday(action) => {
            birthday::reduce(&mut state.birthday, action, env).map(OnboardingAction::Birthday)
        }
        OnboardingAction::LifeExpectancy(action) => {
            life_expectancy::reduce(&mut state.life_expectancy, action, env)
                .map(OnboardingAction::LifeExpectancy)
        }
        OnboardingAction::FinishOnboarding => {
            info!("onboarding finished");
            let write = env.settings.update_onboarding_completed(true);
            let analytics = env.analytics.clone();
            let mut payload = BTreeMap::new();
            payload.insert(
                "lifeExpectancy".to_string(),
                state.life_expectancy.life_expectancy.to_string(),
            );
            Effect::fire_and_forget(async move {
                if let Err(e) = write.await {
                    warn!(error = %format!("{:#}", e), "failed to persist onboarding completion");
                }
                analytics.send(FINISHED_EVENT, payload);
            })
        }
    }
}
