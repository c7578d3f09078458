//! The life goals list.

use super::add_or_edit_life_goal::{self, AddOrEditLifeGoalAction, AddOrEditLifeGoalState};
use crate::app::effect::{Effect, EffectId};
use crate::app::environment::Environment;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::future::Future;
use tracing::warn;

pub const FETCH_ID: EffectId = EffectId("life_goals.fetch");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeGoal {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub details: String,
    pub symbol_name: String,
    pub created_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<NaiveDateTime>,
}

impl LifeGoal {
    pub fn is_completed(&self) -> bool {
        self.finished_at.is_some()
    }
}

/// A goal as submitted by the form; `id` is `None` for new goals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalDraft {
    pub id: Option<u64>,
    pub title: String,
    pub details: String,
    pub symbol_name: String,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GoalFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl GoalFilter {
    pub fn title(self) -> &'static str {
        match self {
            GoalFilter::All => "All",
            GoalFilter::Active => "Active",
            GoalFilter::Completed => "Completed",
        }
    }

    pub fn next(self) -> GoalFilter {
        match self {
            GoalFilter::All => GoalFilter::Active,
            GoalFilter::Active => GoalFilter::Completed,
            GoalFilter::Completed => GoalFilter::All,
        }
    }

    fn matches(self, goal: &LifeGoal) -> bool {
        match self {
            GoalFilter::All => true,
            GoalFilter::Active => !goal.is_completed(),
            GoalFilter::Completed => goal.is_completed(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifeGoalsState {
    pub goals: Vec<LifeGoal>,
    pub selected: usize,
    pub filter: GoalFilter,
    pub is_add_life_goal_sheet_visible: bool,
    pub add_or_edit_life_goal: Option<AddOrEditLifeGoalState>,
}

impl LifeGoalsState {
    /// Goals passing the current filter, oldest first.
    pub fn visible_goals(&self) -> Vec<&LifeGoal> {
        let mut goals: Vec<_> = self.goals.iter().filter(|g| self.filter.matches(g)).collect();
        goals.sort_by_key(|g| (g.created_at, g.id));
        goals
    }

    pub fn selected_goal(&self) -> Option<&LifeGoal> {
        self.visible_goals().get(self.selected).copied()
    }

    pub fn completed_count(&self) -> usize {
        self.goals.iter().filter(|g| g.is_completed()).count()
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_goals().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifeGoalsAction {
    OnAppear,
    GoalsLoaded(Vec<LifeGoal>),
    AddButtonTapped,
    EditButtonTapped(u64),
    GoalCompletionToggled(u64),
    DeleteGoal(u64),
    SelectionMoved(isize),
    FilterChanged(GoalFilter),
    AddOrEditLifeGoal(AddOrEditLifeGoalAction),
}

pub fn reduce(
    state: &mut LifeGoalsState,
    action: LifeGoalsAction,
    env: &Environment,
) -> Effect<LifeGoalsAction> {
    match action {
        LifeGoalsAction::OnAppear => reload(env),
        LifeGoalsAction::GoalsLoaded(goals) => {
            state.goals = goals;
            state.clamp_selection();
            Effect::none()
        }
        LifeGoalsAction::AddButtonTapped => {
            state.add_or_edit_life_goal = Some(AddOrEditLifeGoalState::add());
            state.is_add_life_goal_sheet_visible = true;
            Effect::none()
        }
        LifeGoalsAction::EditButtonTapped(id) => {
            if let Some(goal) = state.goals.iter().find(|g| g.id == id) {
                state.add_or_edit_life_goal = Some(AddOrEditLifeGoalState::edit(goal));
                state.is_add_life_goal_sheet_visible = true;
            }
            Effect::none()
        }
        LifeGoalsAction::GoalCompletionToggled(id) => {
            let Some(goal) = state.goals.iter_mut().find(|g| g.id == id) else {
                return Effect::none();
            };
            goal.finished_at = match goal.finished_at {
                Some(_) => None,
                None => Some((env.now)()),
            };
            let completed = goal.is_completed();
            let write = env.goals.set_finished(id, goal.finished_at);
            state.clamp_selection();

            let analytics = env.analytics.clone();
            persist_then_reload(
                env,
                async move {
                    if let Err(e) = write.await {
                        warn!(id, error = %format!("{:#}", e), "failed to persist goal completion");
                    }
                    let mut payload = BTreeMap::new();
                    payload.insert("isCompleted".to_string(), completed.to_string());
                    analytics.send("life_goals.goal_completion_toggled", payload);
                },
            )
        }
        LifeGoalsAction::DeleteGoal(id) => {
            state.goals.retain(|g| g.id != id);
            state.clamp_selection();
            let write = env.goals.delete(id);
            let analytics = env.analytics.clone();
            persist_then_reload(env, async move {
                if let Err(e) = write.await {
                    warn!(id, error = %format!("{:#}", e), "failed to delete goal");
                }
                analytics.send_event("life_goals.goal_deleted");
            })
        }
        LifeGoalsAction::SelectionMoved(delta) => {
            let len = state.visible_goals().len();
            if len > 0 {
                state.selected = (state.selected as isize + delta).clamp(0, len as isize - 1) as usize;
            }
            Effect::none()
        }
        LifeGoalsAction::FilterChanged(filter) => {
            state.filter = filter;
            state.selected = 0;
            Effect::none()
        }
        LifeGoalsAction::AddOrEditLifeGoal(AddOrEditLifeGoalAction::CancelButtonTapped) => {
            close_sheet(state);
            Effect::none()
        }
        LifeGoalsAction::AddOrEditLifeGoal(AddOrEditLifeGoalAction::SaveButtonTapped) => {
            let Some(form) = state.add_or_edit_life_goal.as_ref() else {
                return Effect::none();
            };
            if !form.can_save() {
                return Effect::none();
            }
            let draft = form.draft((env.now)());
            let is_new = draft.id.is_none();
            close_sheet(state);

            let write = env.goals.save(draft);
            let analytics = env.analytics.clone();
            persist_then_reload(env, async move {
                match write.await {
                    Ok(goal) => {
                        let event = if is_new {
                            "life_goals.goal_added"
                        } else {
                            "life_goals.goal_edited"
                        };
                        let mut payload = BTreeMap::new();
                        payload.insert("symbolName".to_string(), goal.symbol_name);
                        analytics.send(event, payload);
                    }
                    Err(e) => warn!(error = %format!("{:#}", e), "failed to save goal"),
                }
            })
        }
        LifeGoalsAction::AddOrEditLifeGoal(action) => match state.add_or_edit_life_goal.as_mut() {
            Some(form) => add_or_edit_life_goal::reduce(form, action)
                .map(LifeGoalsAction::AddOrEditLifeGoal),
            None => Effect::none(),
        },
    }
}

fn close_sheet(state: &mut LifeGoalsState) {
    state.is_add_life_goal_sheet_visible = false;
    state.add_or_edit_life_goal = None;
}

/// The goals client applies a change as soon as it is called, so the
/// reload sees it right away. Flushing it to disk runs untagged so a later
/// reload never aborts it; reloads supersede each other.
fn persist_then_reload<F>(env: &Environment, persist: F) -> Effect<LifeGoalsAction>
where
    F: Future<Output = ()> + Send + 'static,
{
    Effect::batch([Effect::fire_and_forget(persist), reload(env)])
}

fn reload(env: &Environment) -> Effect<LifeGoalsAction> {
    let goals = env.goals.fetch();
    Effect::optional(async move {
        match goals.await {
            Ok(goals) => Some(LifeGoalsAction::GoalsLoaded(goals)),
            Err(e) => {
                warn!(error = %format!("{:#}", e), "failed to fetch goals");
                None
            }
        }
    })
    .cancellable(FETCH_ID)
}
