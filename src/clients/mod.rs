//! External collaborators injected into reducers through the
//! [`Environment`](crate::app::environment::Environment).
//!
//! Reducers only ever reach these through effects. Setters return boxed
//! futures so the write happens inside the effect body, off the dispatch
//! loop.

pub mod analytics;
pub mod file_store;
#[cfg(test)]
pub mod memory;

use crate::features::life_goals::{GoalDraft, LifeGoal};
use crate::features::theme::ThemeKind;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use futures::future::BoxFuture;
use futures::stream::BoxStream;
use std::collections::BTreeMap;

pub use analytics::TracingAnalytics;
pub use file_store::FileStore;

/// Key-value settings shared by every feature.
pub trait SettingsClient: Send + Sync {
    fn birthday(&self) -> NaiveDate;
    fn life_expectancy(&self) -> u32;
    fn theme(&self) -> ThemeKind;
    fn is_weekly_notification_enabled(&self) -> bool;
    fn did_complete_onboarding(&self) -> bool;

    fn update_birthday(&self, birthday: NaiveDate) -> BoxFuture<'static, Result<()>>;
    fn update_life_expectancy(&self, years: u32) -> BoxFuture<'static, Result<()>>;
    fn update_theme(&self, theme: ThemeKind) -> BoxFuture<'static, Result<()>>;
    fn update_weekly_notification(&self, enabled: bool) -> BoxFuture<'static, Result<()>>;
    fn update_onboarding_completed(&self, completed: bool) -> BoxFuture<'static, Result<()>>;

    /// Values written by [`update_life_expectancy`](Self::update_life_expectancy)
    /// after the call, in write order.
    fn life_expectancy_changes(&self) -> BoxStream<'static, u32>;
}

/// Persistence for life goals.
pub trait GoalsClient: Send + Sync {
    fn fetch(&self) -> BoxFuture<'static, Result<Vec<LifeGoal>>>;

    /// Insert a new goal when `draft.id` is `None`, otherwise update it.
    fn save(&self, draft: GoalDraft) -> BoxFuture<'static, Result<LifeGoal>>;

    fn set_finished(
        &self,
        id: u64,
        finished_at: Option<NaiveDateTime>,
    ) -> BoxFuture<'static, Result<()>>;

    fn delete(&self, id: u64) -> BoxFuture<'static, Result<()>>;
}

/// Fire-and-forget product analytics.
pub trait AnalyticsClient: Send + Sync {
    fn send(&self, event: &str, payload: BTreeMap<String, String>);

    fn send_event(&self, event: &str) {
        self.send(event, BTreeMap::new());
    }
}
