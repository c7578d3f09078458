//! Accent theme selection.

use crate::app::effect::{Effect, EffectId};
use crate::app::environment::Environment;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const REQUEST_ID: EffectId = EffectId("theme.request");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Blue,
    Green,
    Orange,
    Pink,
    Purple,
    Red,
    Teal,
    Yellow,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 8] = [
        ThemeKind::Blue,
        ThemeKind::Green,
        ThemeKind::Orange,
        ThemeKind::Pink,
        ThemeKind::Purple,
        ThemeKind::Red,
        ThemeKind::Teal,
        ThemeKind::Yellow,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ThemeKind::Blue => "Blue",
            ThemeKind::Green => "Green",
            ThemeKind::Orange => "Orange",
            ThemeKind::Pink => "Pink",
            ThemeKind::Purple => "Purple",
            ThemeKind::Red => "Red",
            ThemeKind::Teal => "Teal",
            ThemeKind::Yellow => "Yellow",
        }
    }

    /// The neighbouring theme in [`ThemeKind::ALL`], wrapping around.
    pub fn cycled(self, delta: isize) -> ThemeKind {
        let len = Self::ALL.len() as isize;
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0) as isize;
        Self::ALL[(index + delta).rem_euclid(len) as usize]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    pub selected_theme: ThemeKind,
    pub themes: Vec<ThemeKind>,
}

impl ThemeState {
    pub fn new(selected_theme: ThemeKind) -> Self {
        Self {
            selected_theme,
            themes: ThemeKind::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeAction {
    /// The user picked a theme; persists it.
    ThemeChanged(ThemeKind),
    /// The stored theme was read. Local only.
    ThemeLoaded(ThemeKind),
    OnAppear,
}

pub fn reduce(state: &mut ThemeState, action: ThemeAction, env: &Environment) -> Effect<ThemeAction> {
    match action {
        ThemeAction::ThemeChanged(theme) => {
            state.selected_theme = theme;
            let write = env.settings.update_theme(theme);
            Effect::fire_and_forget(async move {
                if let Err(e) = write.await {
                    warn!(error = %format!("{:#}", e), "failed to persist theme");
                }
            })
            .cancellable(REQUEST_ID)
        }
        ThemeAction::ThemeLoaded(theme) => {
            state.selected_theme = theme;
            Effect::none()
        }
        ThemeAction::OnAppear => {
            let theme = env.settings.theme();
            Effect::task(async move { ThemeAction::ThemeLoaded(theme) })
        }
    }
}
