//! Picks the symbol shown next to a life goal.

use crate::app::effect::Effect;

/// Symbol names offered by the picker. Rendering maps each to a glyph.
pub const SYMBOLS: &[&str] = &[
    "flag",
    "star",
    "heart",
    "book",
    "airplane",
    "house",
    "figure.run",
    "graduationcap",
    "briefcase",
    "music.note",
    "camera",
    "leaf",
    "globe",
    "dumbbell",
    "paintbrush",
    "gift",
];

pub const DEFAULT_SYMBOL: &str = "flag";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolPickerState {
    pub symbol_name: String,
    pub is_sheet_visible: bool,
    pub highlighted: usize,
}

impl SymbolPickerState {
    pub fn new(symbol_name: impl Into<String>) -> Self {
        Self {
            symbol_name: symbol_name.into(),
            is_sheet_visible: false,
            highlighted: 0,
        }
    }

    pub fn highlighted_symbol(&self) -> &'static str {
        SYMBOLS.get(self.highlighted).copied().unwrap_or(DEFAULT_SYMBOL)
    }
}

impl Default for SymbolPickerState {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolPickerAction {
    ShowSheet,
    HideSheet,
    SymbolNameChanged(String),
    HighlightMoved(isize),
}

pub fn reduce(state: &mut SymbolPickerState, action: SymbolPickerAction) -> Effect<SymbolPickerAction> {
    match action {
        SymbolPickerAction::ShowSheet => {
            state.is_sheet_visible = true;
            state.highlighted = SYMBOLS
                .iter()
                .position(|s| *s == state.symbol_name)
                .unwrap_or(0);
        }
        SymbolPickerAction::HideSheet => {
            state.is_sheet_visible = false;
        }
        SymbolPickerAction::SymbolNameChanged(name) => {
            state.symbol_name = name;
        }
        SymbolPickerAction::HighlightMoved(delta) => {
            let len = SYMBOLS.len() as isize;
            state.highlighted = (state.highlighted as isize + delta).rem_euclid(len) as usize;
        }
    }
    Effect::none()
}
