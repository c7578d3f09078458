//! The user's life expectancy and its slider.

use crate::app::effect::{Effect, EffectId};
use crate::app::environment::Environment;
use futures::StreamExt;
use tracing::warn;

pub const MIN_LIFE_EXPECTANCY: u32 = 20;
pub const MAX_LIFE_EXPECTANCY: u32 = 150;

/// Clamp a stored or configured value into the range the calendar can draw.
pub fn clamp_years(years: u32) -> u32 {
    years.clamp(MIN_LIFE_EXPECTANCY, MAX_LIFE_EXPECTANCY)
}

/// Effect ids for one embedding of this feature. Onboarding and settings
/// each own a copy so their writes and subscriptions never cancel each
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeExpectancyIds {
    /// Persisting a selection; a newer selection supersedes an older one.
    pub request: EffectId,
    /// The change subscription started by `OnAppear`.
    pub changes: EffectId,
}

pub const ONBOARDING_IDS: LifeExpectancyIds = LifeExpectancyIds {
    request: EffectId("onboarding.life_expectancy.request"),
    changes: EffectId("onboarding.life_expectancy.changes"),
};

pub const SETTINGS_IDS: LifeExpectancyIds = LifeExpectancyIds {
    request: EffectId("settings.life_expectancy.request"),
    changes: EffectId("settings.life_expectancy.changes"),
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeExpectancyState {
    pub life_expectancy: u32,
    pub is_slider_visible: bool,
    pub ids: LifeExpectancyIds,
}

impl LifeExpectancyState {
    pub fn new(life_expectancy: u32, ids: LifeExpectancyIds) -> Self {
        Self {
            life_expectancy,
            is_slider_visible: false,
            ids,
        }
    }

    /// The slider value moved by `delta`, kept within range.
    pub fn stepped(&self, delta: i64) -> u32 {
        (self.life_expectancy as i64 + delta)
            .clamp(MIN_LIFE_EXPECTANCY as i64, MAX_LIFE_EXPECTANCY as i64) as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifeExpectancyAction {
    /// The user released the slider; persists the value.
    LifeExpectancySelectionEnded(u32),
    /// The value changed. Local only.
    LifeExpectancyChanged(u32),
    IsSliderVisibleChanged,
    /// Subscribes to stored life expectancy changes.
    OnAppear,
    OnDisappear,
}

pub fn reduce(
    state: &mut LifeExpectancyState,
    action: LifeExpectancyAction,
    env: &Environment,
) -> Effect<LifeExpectancyAction> {
    match action {
        LifeExpectancyAction::LifeExpectancySelectionEnded(years) => {
            let write = env.settings.update_life_expectancy(years);
            Effect::task(async move {
                if let Err(e) = write.await {
                    warn!(error = %format!("{:#}", e), "failed to persist life expectancy");
                }
                LifeExpectancyAction::LifeExpectancyChanged(years)
            })
            .cancellable(state.ids.request)
        }
        LifeExpectancyAction::LifeExpectancyChanged(years) => {
            state.life_expectancy = years;
            Effect::none()
        }
        LifeExpectancyAction::IsSliderVisibleChanged => {
            state.is_slider_visible = !state.is_slider_visible;
            Effect::none()
        }
        LifeExpectancyAction::OnAppear => Effect::subscription(
            env.settings
                .life_expectancy_changes()
                .map(LifeExpectancyAction::LifeExpectancyChanged),
        )
        .cancellable(state.ids.changes),
        LifeExpectancyAction::OnDisappear => Effect::cancel(state.ids.changes),
    }
}
