use crate::clients::{AnalyticsClient, GoalsClient, SettingsClient};
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::sync::Arc;

/// Collaborators handed to every reducer.
#[derive(Clone)]
pub struct Environment {
    pub settings: Arc<dyn SettingsClient>,
    pub goals: Arc<dyn GoalsClient>,
    pub analytics: Arc<dyn AnalyticsClient>,
    pub today: fn() -> NaiveDate,
    pub now: fn() -> NaiveDateTime,
}

impl Environment {
    pub fn live(
        settings: Arc<dyn SettingsClient>,
        goals: Arc<dyn GoalsClient>,
        analytics: Arc<dyn AnalyticsClient>,
    ) -> Self {
        Self {
            settings,
            goals,
            analytics,
            today: local_today,
            now: local_now,
        }
    }
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
