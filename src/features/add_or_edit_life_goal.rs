//! The add/edit life goal form.
//!
//! Saving and cancelling are decided by the parent
//! [`life_goals`](super::life_goals) reducer; this reducer only edits the
//! draft.

use super::life_goals::{GoalDraft, LifeGoal};
use super::symbol_picker::{self, SymbolPickerAction, SymbolPickerState};
use super::text_field::{TextEdit, TextField};
use crate::app::effect::Effect;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalEditorMode {
    Add,
    Edit(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalField {
    Title,
    Details,
    Symbol,
}

impl GoalField {
    fn next(self) -> GoalField {
        match self {
            GoalField::Title => GoalField::Details,
            GoalField::Details => GoalField::Symbol,
            GoalField::Symbol => GoalField::Title,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOrEditLifeGoalState {
    pub mode: GoalEditorMode,
    pub title: TextField,
    pub details: TextField,
    pub focus: GoalField,
    pub symbol_picker: SymbolPickerState,
}

impl AddOrEditLifeGoalState {
    pub fn add() -> Self {
        Self {
            mode: GoalEditorMode::Add,
            title: TextField::default(),
            details: TextField::default(),
            focus: GoalField::Title,
            symbol_picker: SymbolPickerState::default(),
        }
    }

    pub fn edit(goal: &LifeGoal) -> Self {
        Self {
            mode: GoalEditorMode::Edit(goal.id),
            title: TextField::new(goal.title.clone()),
            details: TextField::new(goal.details.clone()),
            focus: GoalField::Title,
            symbol_picker: SymbolPickerState::new(goal.symbol_name.clone()),
        }
    }

    pub fn can_save(&self) -> bool {
        !self.title.is_blank()
    }

    pub fn draft(&self, timestamp: NaiveDateTime) -> GoalDraft {
        GoalDraft {
            id: match self.mode {
                GoalEditorMode::Add => None,
                GoalEditorMode::Edit(id) => Some(id),
            },
            title: self.title.text.trim().to_string(),
            details: self.details.text.trim().to_string(),
            symbol_name: self.symbol_picker.symbol_name.clone(),
            timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOrEditLifeGoalAction {
    TitleEdited(TextEdit),
    DetailsEdited(TextEdit),
    FocusNext,
    SymbolPicker(SymbolPickerAction),
    SaveButtonTapped,
    CancelButtonTapped,
}

pub fn reduce(
    state: &mut AddOrEditLifeGoalState,
    action: AddOrEditLifeGoalAction,
) -> Effect<AddOrEditLifeGoalAction> {
    match action {
        AddOrEditLifeGoalAction::TitleEdited(edit) => {
            state.title.apply(edit);
            Effect::none()
        }
        AddOrEditLifeGoalAction::DetailsEdited(edit) => {
            state.details.apply(edit);
            Effect::none()
        }
        AddOrEditLifeGoalAction::FocusNext => {
            state.focus = state.focus.next();
            Effect::none()
        }
        AddOrEditLifeGoalAction::SymbolPicker(action) => {
            symbol_picker::reduce(&mut state.symbol_picker, action)
                .map(AddOrEditLifeGoalAction::SymbolPicker)
        }
        AddOrEditLifeGoalAction::SaveButtonTapped | AddOrEditLifeGoalAction::CancelButtonTapped => {
            Effect::none()
        }
    }
}
