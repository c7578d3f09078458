//! In-memory collaborators that record every call, for reducer tests.

use super::{AnalyticsClient, GoalsClient, SettingsClient};
use crate::app::environment::Environment;
use crate::features::life_goals::{GoalDraft, LifeGoal};
use crate::features::theme::ThemeKind;
use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime};
use futures::future::BoxFuture;
use futures::stream::BoxStream;
use futures::{FutureExt, StreamExt};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

pub fn fixed_now() -> NaiveDateTime {
    fixed_today().and_hms_opt(9, 30, 0).unwrap()
}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsCall {
    Birthday(NaiveDate),
    LifeExpectancy(u32),
    Theme(ThemeKind),
    WeeklyNotification(bool),
    OnboardingCompleted(bool),
}

#[derive(Debug, Clone)]
struct Values {
    birthday: NaiveDate,
    life_expectancy: u32,
    theme: ThemeKind,
    weekly_notification: bool,
    onboarding_completed: bool,
}

pub struct MemorySettings {
    values: Mutex<Values>,
    calls: Mutex<Vec<SettingsCall>>,
    life_expectancy_tx: watch::Sender<u32>,
}

impl MemorySettings {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(80);
        Self {
            values: Mutex::new(Values {
                birthday: NaiveDate::from_ymd_opt(1990, 6, 1).unwrap(),
                life_expectancy: 80,
                theme: ThemeKind::default(),
                weekly_notification: false,
                onboarding_completed: false,
            }),
            calls: Mutex::new(Vec::new()),
            life_expectancy_tx: tx,
        }
    }

    pub fn calls(&self) -> Vec<SettingsCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_theme(&self, theme: ThemeKind) {
        self.values.lock().unwrap().theme = theme;
    }

    pub fn set_weekly_notification(&self, enabled: bool) {
        self.values.lock().unwrap().weekly_notification = enabled;
    }

    pub fn set_birthday(&self, birthday: NaiveDate) {
        self.values.lock().unwrap().birthday = birthday;
    }

    /// Push a change as if another device had written it.
    pub fn push_life_expectancy(&self, years: u32) {
        self.life_expectancy_tx.send_replace(years);
    }

    /// Apply and log `call` immediately, like the file store does.
    fn record(&self, call: SettingsCall) -> BoxFuture<'static, Result<()>> {
        {
            let mut v = self.values.lock().unwrap();
            match &call {
                SettingsCall::Birthday(d) => v.birthday = *d,
                SettingsCall::LifeExpectancy(y) => {
                    v.life_expectancy = *y;
                    self.life_expectancy_tx.send_replace(*y);
                }
                SettingsCall::Theme(t) => v.theme = *t,
                SettingsCall::WeeklyNotification(e) => v.weekly_notification = *e,
                SettingsCall::OnboardingCompleted(c) => v.onboarding_completed = *c,
            }
        }
        self.calls.lock().unwrap().push(call);
        async { Ok(()) }.boxed()
    }
}

impl SettingsClient for MemorySettings {
    fn birthday(&self) -> NaiveDate {
        self.values.lock().unwrap().birthday
    }

    fn life_expectancy(&self) -> u32 {
        self.values.lock().unwrap().life_expectancy
    }

    fn theme(&self) -> ThemeKind {
        self.values.lock().unwrap().theme
    }

    fn is_weekly_notification_enabled(&self) -> bool {
        self.values.lock().unwrap().weekly_notification
    }

    fn did_complete_onboarding(&self) -> bool {
        self.values.lock().unwrap().onboarding_completed
    }

    fn update_birthday(&self, birthday: NaiveDate) -> BoxFuture<'static, Result<()>> {
        self.record(SettingsCall::Birthday(birthday))
    }

    fn update_life_expectancy(&self, years: u32) -> BoxFuture<'static, Result<()>> {
        self.record(SettingsCall::LifeExpectancy(years))
    }

    fn update_theme(&self, theme: ThemeKind) -> BoxFuture<'static, Result<()>> {
        self.record(SettingsCall::Theme(theme))
    }

    fn update_weekly_notification(&self, enabled: bool) -> BoxFuture<'static, Result<()>> {
        self.record(SettingsCall::WeeklyNotification(enabled))
    }

    fn update_onboarding_completed(&self, completed: bool) -> BoxFuture<'static, Result<()>> {
        self.record(SettingsCall::OnboardingCompleted(completed))
    }

    fn life_expectancy_changes(&self) -> BoxStream<'static, u32> {
        let rx = self.life_expectancy_tx.subscribe();
        futures::stream::unfold(rx, |mut rx| async move {
            rx.changed().await.ok()?;
            let value = *rx.borrow_and_update();
            Some((value, rx))
        })
        .boxed()
    }
}

#[derive(Default)]
pub struct MemoryGoals {
    goals: Arc<Mutex<Vec<LifeGoal>>>,
}

impl MemoryGoals {
    pub fn with_goals(goals: Vec<LifeGoal>) -> Self {
        Self {
            goals: Arc::new(Mutex::new(goals)),
        }
    }

    pub fn snapshot(&self) -> Vec<LifeGoal> {
        self.goals.lock().unwrap().clone()
    }
}

impl GoalsClient for MemoryGoals {
    fn fetch(&self) -> BoxFuture<'static, Result<Vec<LifeGoal>>> {
        let goals = Arc::clone(&self.goals);
        async move { Ok(goals.lock().unwrap().clone()) }.boxed()
    }

    fn save(&self, draft: GoalDraft) -> BoxFuture<'static, Result<LifeGoal>> {
        let mut goals = self.goals.lock().unwrap();
        let result = match draft.id {
            Some(id) => match goals.iter_mut().find(|g| g.id == id) {
                Some(goal) => {
                    goal.title = draft.title;
                    goal.details = draft.details;
                    goal.symbol_name = draft.symbol_name;
                    Ok(goal.clone())
                }
                None => Err(anyhow!("goal {} not found", id)),
            },
            None => {
                let id = goals.iter().map(|g| g.id).max().unwrap_or(0) + 1;
                let goal = LifeGoal {
                    id,
                    title: draft.title,
                    details: draft.details,
                    symbol_name: draft.symbol_name,
                    created_at: draft.timestamp,
                    finished_at: None,
                };
                goals.push(goal.clone());
                Ok(goal)
            }
        };
        futures::future::ready(result).boxed()
    }

    fn set_finished(
        &self,
        id: u64,
        finished_at: Option<NaiveDateTime>,
    ) -> BoxFuture<'static, Result<()>> {
        if let Some(goal) = self.goals.lock().unwrap().iter_mut().find(|g| g.id == id) {
            goal.finished_at = finished_at;
        }
        async { Ok(()) }.boxed()
    }

    fn delete(&self, id: u64) -> BoxFuture<'static, Result<()>> {
        self.goals.lock().unwrap().retain(|g| g.id != id);
        async { Ok(()) }.boxed()
    }
}

#[derive(Default)]
pub struct RecordingAnalytics {
    events: Mutex<Vec<(String, BTreeMap<String, String>)>>,
}

impl RecordingAnalytics {
    pub fn events(&self) -> Vec<(String, BTreeMap<String, String>)> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_names(&self) -> Vec<String> {
        self.events().into_iter().map(|(name, _)| name).collect()
    }
}

impl AnalyticsClient for RecordingAnalytics {
    fn send(&self, event: &str, payload: BTreeMap<String, String>) {
        self.events
            .lock()
            .unwrap()
            .push((event.to_string(), payload));
    }
}

/// An [`Environment`] wired to in-memory fakes, with handles to inspect them.
pub struct TestEnv {
    pub env: Environment,
    pub settings: Arc<MemorySettings>,
    pub goals: Arc<MemoryGoals>,
    pub analytics: Arc<RecordingAnalytics>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_goals(Vec::new())
    }

    pub fn with_goals(goals: Vec<LifeGoal>) -> Self {
        let settings = Arc::new(MemorySettings::new());
        let goals = Arc::new(MemoryGoals::with_goals(goals));
        let analytics = Arc::new(RecordingAnalytics::default());
        let env = Environment {
            settings: settings.clone(),
            goals: goals.clone(),
            analytics: analytics.clone(),
            today: fixed_today,
            now: fixed_now,
        };
        Self {
            env,
            settings,
            goals,
            analytics,
        }
    }
}
