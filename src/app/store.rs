//! Owns the root state and runs the effects the reducer returns.

use crate::app::action::Action;
use crate::app::environment::Environment;
use crate::app::event::AppEvent;
use crate::app::reducer::{self, on_appear};
use crate::app::runtime::EffectRuntime;
use crate::app::state::RootState;
use tokio::sync::mpsc;
use tracing::{info, trace};

pub struct Store {
    pub state: RootState,
    env: Environment,
    runtime: EffectRuntime,
}

impl Store {
    pub fn new(
        state: RootState,
        env: Environment,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            state,
            env,
            runtime: EffectRuntime::new(event_tx),
        }
    }

    /// Reduce `action` and start its effect. Actions are processed one at a
    /// time; follow-ups arrive later through the event channel.
    pub fn send(&mut self, action: Action) {
        trace!(?action, "dispatch");
        let was_onboarded = self.state.did_complete_onboarding;
        let effect = reducer::reduce(&mut self.state, action, &self.env);
        self.runtime.run(effect);

        if !was_onboarded && self.state.did_complete_onboarding {
            info!("entering main tabs");
            if let Some(tab) = self.state.selected_tab {
                self.send(on_appear(tab));
            }
        }
    }

    /// The action that makes the current screen load its data.
    pub fn appear(&mut self) {
        if !self.state.did_complete_onboarding {
            return;
        }
        if let Some(tab) = self.state.selected_tab {
            self.send(on_appear(tab));
        }
    }

    pub fn shutdown(&mut self) {
        self.runtime.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Tab;
    use crate::clients::file_store::{FileStore, StoreDefaults};
    use crate::clients::memory::{fixed_now, fixed_today, RecordingAnalytics, TestEnv};
    use crate::clients::{GoalsClient, SettingsClient};
    use crate::config::AppConfig;
    use crate::features::life_calendar::LifeCalendarAction;
    use crate::features::life_goals::{GoalDraft, LifeGoalsAction};
    use crate::features::onboarding::OnboardingAction;
    use crate::features::settings::SettingsAction;
    use crate::features::weekly_notification::WeeklyNotificationAction;
    use std::path::Path;
    use std::sync::Arc;
    use std::time::Duration;

    fn defaults() -> StoreDefaults {
        StoreDefaults {
            birthday: fixed_today() - chrono::Months::new(12 * 30),
            life_expectancy: 80,
        }
    }

    fn file_env(dir: &Path) -> (Environment, Arc<FileStore>) {
        let files = Arc::new(FileStore::open(dir, defaults()).unwrap());
        let env = Environment {
            settings: files.clone(),
            goals: files.clone(),
            analytics: Arc::new(RecordingAnalytics::default()),
            today: fixed_today,
            now: fixed_now,
        };
        (env, files)
    }

    fn goal_draft(title: &str) -> GoalDraft {
        GoalDraft {
            id: None,
            title: title.to_string(),
            details: String::new(),
            symbol_name: "flag".to_string(),
            timestamp: fixed_now(),
        }
    }

    /// Let every spawned flush finish.
    async fn settle() {
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    async fn next_action(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> Action {
        loop {
            let event = tokio::time::timeout(Duration::from_secs(1), rx.recv())
                .await
                .unwrap()
                .unwrap();
            if let AppEvent::Action(action) = event {
                return action;
            }
        }
    }

    #[tokio::test]
    async fn test_effects_feed_back_through_channel() {
        let t = TestEnv::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let state = RootState::new(&t.env, &AppConfig::default());
        let mut store = Store::new(state, t.env.clone(), tx);

        store.send(Action::LifeCalendar(LifeCalendarAction::OnAppear));
        let action = next_action(&mut rx).await;
        assert!(matches!(
            action,
            Action::LifeCalendar(LifeCalendarAction::LifeLoaded(_))
        ));
        store.send(action);
        store.shutdown();
    }

    #[tokio::test]
    async fn test_finishing_onboarding_loads_selected_tab() {
        let t = TestEnv::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let state = RootState::new(&t.env, &AppConfig::default());
        assert_eq!(state.selected_tab, Some(Tab::LifeCalendar));
        let mut store = Store::new(state, t.env.clone(), tx);

        store.send(Action::Onboarding(OnboardingAction::FinishOnboarding));
        assert!(store.state.did_complete_onboarding);
        let action = next_action(&mut rx).await;
        assert!(matches!(
            action,
            Action::LifeCalendar(LifeCalendarAction::LifeLoaded(_))
        ));
        store.shutdown();
    }

    #[test]
    fn test_appear_waits_for_onboarding() {
        let t = TestEnv::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        let state = RootState::new(&t.env, &AppConfig::default());
        let mut store = Store::new(state, t.env.clone(), tx);
        let before = store.state.clone();
        store.appear();
        assert_eq!(store.state, before);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_quick_toggles_store_the_shown_value() {
        for _ in 0..25 {
            let dir = tempfile::tempdir().unwrap();
            let (env, files) = file_env(dir.path());
            let (tx, _rx) = mpsc::unbounded_channel();
            let state = RootState::new(&env, &AppConfig::default());
            let mut store = Store::new(state, env, tx);

            for _ in 0..3 {
                store.send(Action::Settings(SettingsAction::WeeklyNotification(
                    WeeklyNotificationAction::IsWeeklyNotificationChanged,
                )));
            }
            let shown = store.state.settings.weekly_notification.is_weekly_notification_enabled;
            assert!(shown);
            assert_eq!(files.is_weekly_notification_enabled(), shown);

            settle().await;
            let reopened = FileStore::open(dir.path(), defaults()).unwrap();
            assert_eq!(reopened.is_weekly_notification_enabled(), shown);
            store.shutdown();
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_back_to_back_goal_writes_all_survive() {
        for _ in 0..25 {
            let dir = tempfile::tempdir().unwrap();
            let (env, files) = file_env(dir.path());
            files.save(goal_draft("Marathon")).await.unwrap();
            files.save(goal_draft("Japan")).await.unwrap();
            files.save(goal_draft("Piano")).await.unwrap();

            let (tx, _rx) = mpsc::unbounded_channel();
            let mut state = RootState::new(&env, &AppConfig::default());
            state.life_goals.goals = files.fetch().await.unwrap();
            let mut store = Store::new(state, env, tx);

            store.send(Action::LifeGoals(LifeGoalsAction::DeleteGoal(1)));
            store.send(Action::LifeGoals(LifeGoalsAction::GoalCompletionToggled(3)));
            store.send(Action::LifeGoals(LifeGoalsAction::DeleteGoal(2)));
            assert_eq!(store.state.life_goals.goals.len(), 1);

            settle().await;
            let reopened = FileStore::open(dir.path(), defaults()).unwrap();
            let goals = reopened.fetch().await.unwrap();
            assert_eq!(goals.len(), 1);
            assert_eq!(goals[0].id, 3);
            assert_eq!(goals[0].finished_at, Some(fixed_now()));
            store.shutdown();
        }
    }
}
