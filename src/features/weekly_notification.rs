//! Opt-in for the weekly "another week passed" notification.

use crate::app::effect::Effect;
use crate::app::environment::Environment;
use std::collections::BTreeMap;
use tracing::warn;

pub const CHANGED_EVENT: &str = "weekly_notification.is_weekly_notification_changed";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyNotificationState {
    pub is_weekly_notification_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeeklyNotificationAction {
    /// Toggles the flag, persists it and reports it.
    IsWeeklyNotificationChanged,
    WeeklyNotificationLoaded(bool),
    OnAppear,
}

pub fn reduce(
    state: &mut WeeklyNotificationState,
    action: WeeklyNotificationAction,
    env: &Environment,
) -> Effect<WeeklyNotificationAction> {
    match action {
        WeeklyNotificationAction::IsWeeklyNotificationChanged => {
            state.is_weekly_notification_enabled = !state.is_weekly_notification_enabled;
            let enabled = state.is_weekly_notification_enabled;
            let write = env.settings.update_weekly_notification(enabled);
            let analytics = env.analytics.clone();
            Effect::fire_and_forget(async move {
                if let Err(e) = write.await {
                    warn!(error = %format!("{:#}", e), "failed to persist weekly notification");
                }
                let mut payload = BTreeMap::new();
                payload.insert(
                    "isWeeklyNotificationEnabled".to_string(),
                    enabled.to_string(),
                );
                analytics.send(CHANGED_EVENT, payload);
            })
        }
        WeeklyNotificationAction::WeeklyNotificationLoaded(enabled) => {
            state.is_weekly_notification_enabled = enabled;
            Effect::none()
        }
        WeeklyNotificationAction::OnAppear => {
            let enabled = env.settings.is_weekly_notification_enabled();
            Effect::task(async move { WeeklyNotificationAction::WeeklyNotificationLoaded(enabled) })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::memory::{SettingsCall, TestEnv};
    use crate::clients::SettingsClient;

    #[tokio::test]
    async fn test_double_toggle_persists_both_values_in_order() {
        let t = TestEnv::new();
        let mut state = WeeklyNotificationState::default();

        let first = reduce(
            &mut state,
            WeeklyNotificationAction::IsWeeklyNotificationChanged,
            &t.env,
        );
        let second = reduce(
            &mut state,
            WeeklyNotificationAction::IsWeeklyNotificationChanged,
            &t.env,
        );
        assert!(!state.is_weekly_notification_enabled);
        // Writes land in dispatch order, before either effect runs.
        assert_eq!(
            t.settings.calls(),
            vec![
                SettingsCall::WeeklyNotification(true),
                SettingsCall::WeeklyNotification(false)
            ]
        );
        assert!(!t.settings.is_weekly_notification_enabled());

        second.collect().await;
        first.collect().await;

        let events = t.analytics.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, CHANGED_EVENT);
        assert_eq!(
            events[0].1.get("isWeeklyNotificationEnabled").map(String::as_str),
            Some("false")
        );
        assert_eq!(
            events[1].1.get("isWeeklyNotificationEnabled").map(String::as_str),
            Some("true")
        );
    }

    #[tokio::test]
    async fn test_on_appear_reads_flag() {
        let t = TestEnv::new();
        t.settings.set_weekly_notification(true);
        let mut state = WeeklyNotificationState::default();
        let actions = reduce(&mut state, WeeklyNotificationAction::OnAppear, &t.env)
            .collect()
            .await;
        assert_eq!(
            actions,
            vec![WeeklyNotificationAction::WeeklyNotificationLoaded(true)]
        );
        reduce(&mut state, actions[0].clone(), &t.env);
        assert!(state.is_weekly_notification_enabled);
        assert!(t.settings.calls().is_empty());
    }
}
