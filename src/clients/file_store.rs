//! File-backed settings and goals.
//!
//! Settings live in `settings.toml` and goals in `goals.toml` under the
//! data directory. Both documents are held in memory. A change is applied
//! to memory when the update method is called, so changes land in call
//! order. The returned future only flushes the document to disk; flushes
//! are serialized and each writes the latest in-memory state.

use super::{GoalsClient, SettingsClient};
use crate::features::life_expectancy::clamp_years;
use crate::features::life_goals::{GoalDraft, LifeGoal};
use crate::features::theme::ThemeKind;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use futures::future::BoxFuture;
use futures::stream::BoxStream;
use futures::{FutureExt, StreamExt};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info};

const SETTINGS_FILE: &str = "settings.toml";
const GOALS_FILE: &str = "goals.toml";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize store: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("life goal {0} not found")]
    GoalNotFound(u64),
}

/// Values reported for settings the user has never written.
#[derive(Debug, Clone, Copy)]
pub struct StoreDefaults {
    pub birthday: NaiveDate,
    pub life_expectancy: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    life_expectancy: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<ThemeKind>,
    #[serde(default)]
    weekly_notification_enabled: bool,
    #[serde(default)]
    did_complete_onboarding: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredGoals {
    #[serde(default)]
    next_id: u64,
    #[serde(default)]
    goals: Vec<LifeGoal>,
}

struct Inner {
    settings_path: PathBuf,
    goals_path: PathBuf,
    defaults: StoreDefaults,
    settings: Mutex<StoredSettings>,
    goals: Mutex<StoredGoals>,
    write_lock: tokio::sync::Mutex<()>,
    life_expectancy_tx: watch::Sender<u32>,
}

#[derive(Clone)]
pub struct FileStore {
    inner: Arc<Inner>,
}

impl FileStore {
    pub fn open(data_dir: &Path, defaults: StoreDefaults) -> Result<Self, StoreError> {
        std::fs::create_dir_all(data_dir).map_err(|source| StoreError::CreateDir {
            path: data_dir.to_path_buf(),
            source,
        })?;
        let settings_path = data_dir.join(SETTINGS_FILE);
        let goals_path = data_dir.join(GOALS_FILE);
        let settings: StoredSettings = read_toml(&settings_path)?;
        let goals: StoredGoals = read_toml(&goals_path)?;
        info!(
            dir = %data_dir.display(),
            goals = goals.goals.len(),
            "opened store"
        );

        let defaults = StoreDefaults {
            life_expectancy: clamp_years(defaults.life_expectancy),
            ..defaults
        };
        let life_expectancy = settings
            .life_expectancy
            .map_or(defaults.life_expectancy, clamp_years);
        let (life_expectancy_tx, _) = watch::channel(life_expectancy);
        Ok(Self {
            inner: Arc::new(Inner {
                settings_path,
                goals_path,
                defaults,
                settings: Mutex::new(settings),
                goals: Mutex::new(goals),
                write_lock: tokio::sync::Mutex::new(()),
                life_expectancy_tx,
            }),
        })
    }

    /// Write both documents to disk.
    pub async fn flush(&self) -> Result<()> {
        self.flush_settings().await?;
        self.flush_goals().await
    }

    fn update_settings<F>(&self, apply: F) -> BoxFuture<'static, Result<()>>
    where
        F: FnOnce(&mut StoredSettings),
    {
        apply(&mut self.inner.settings());
        self.flush_settings()
    }

    fn update_goals<F, R>(&self, apply: F) -> BoxFuture<'static, Result<R>>
    where
        F: FnOnce(&mut StoredGoals) -> Result<R, StoreError>,
        R: Send + 'static,
    {
        let result = apply(&mut self.inner.goals());
        let flush = self.flush_goals();
        async move {
            let value = result?;
            flush.await?;
            Ok::<_, anyhow::Error>(value)
        }
        .boxed()
    }

    fn flush_settings(&self) -> BoxFuture<'static, Result<()>> {
        let inner = Arc::clone(&self.inner);
        async move {
            let _write = inner.write_lock.lock().await;
            let contents = {
                let settings = inner.settings();
                toml::to_string_pretty(&*settings).map_err(StoreError::from)?
            };
            write_file(&inner.settings_path, contents).await?;
            Ok::<_, anyhow::Error>(())
        }
        .boxed()
    }

    fn flush_goals(&self) -> BoxFuture<'static, Result<()>> {
        let inner = Arc::clone(&self.inner);
        async move {
            let _write = inner.write_lock.lock().await;
            let contents = {
                let goals = inner.goals();
                toml::to_string_pretty(&*goals).map_err(StoreError::from)?
            };
            write_file(&inner.goals_path, contents).await?;
            Ok::<_, anyhow::Error>(())
        }
        .boxed()
    }
}

impl Inner {
    fn settings(&self) -> MutexGuard<'_, StoredSettings> {
        self.settings.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn goals(&self) -> MutexGuard<'_, StoredGoals> {
        self.goals.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SettingsClient for FileStore {
    fn birthday(&self) -> NaiveDate {
        self.inner
            .settings()
            .birthday
            .unwrap_or(self.inner.defaults.birthday)
    }

    fn life_expectancy(&self) -> u32 {
        self.inner
            .settings()
            .life_expectancy
            .map_or(self.inner.defaults.life_expectancy, clamp_years)
    }

    fn theme(&self) -> ThemeKind {
        self.inner.settings().theme.unwrap_or_default()
    }

    fn is_weekly_notification_enabled(&self) -> bool {
        self.inner.settings().weekly_notification_enabled
    }

    fn did_complete_onboarding(&self) -> bool {
        self.inner.settings().did_complete_onboarding
    }

    fn update_birthday(&self, birthday: NaiveDate) -> BoxFuture<'static, Result<()>> {
        self.update_settings(move |s| s.birthday = Some(birthday))
    }

    fn update_life_expectancy(&self, years: u32) -> BoxFuture<'static, Result<()>> {
        let years = clamp_years(years);
        let flush = self.update_settings(move |s| s.life_expectancy = Some(years));
        self.inner.life_expectancy_tx.send_replace(years);
        flush
    }

    fn update_theme(&self, theme: ThemeKind) -> BoxFuture<'static, Result<()>> {
        self.update_settings(move |s| s.theme = Some(theme))
    }

    fn update_weekly_notification(&self, enabled: bool) -> BoxFuture<'static, Result<()>> {
        self.update_settings(move |s| s.weekly_notification_enabled = enabled)
    }

    fn update_onboarding_completed(&self, completed: bool) -> BoxFuture<'static, Result<()>> {
        self.update_settings(move |s| s.did_complete_onboarding = completed)
    }

    fn life_expectancy_changes(&self) -> BoxStream<'static, u32> {
        let rx = self.inner.life_expectancy_tx.subscribe();
        futures::stream::unfold(rx, |mut rx| async move {
            rx.changed().await.ok()?;
            let value = *rx.borrow_and_update();
            Some((value, rx))
        })
        .boxed()
    }
}

impl GoalsClient for FileStore {
    fn fetch(&self) -> BoxFuture<'static, Result<Vec<LifeGoal>>> {
        let inner = Arc::clone(&self.inner);
        async move {
            let mut goals = inner.goals().goals.clone();
            goals.sort_by_key(|g| (g.created_at, g.id));
            Ok(goals)
        }
        .boxed()
    }

    fn save(&self, draft: GoalDraft) -> BoxFuture<'static, Result<LifeGoal>> {
        self.update_goals(move |stored| match draft.id {
            Some(id) => {
                let goal = stored
                    .goals
                    .iter_mut()
                    .find(|g| g.id == id)
                    .ok_or(StoreError::GoalNotFound(id))?;
                goal.title = draft.title;
                goal.details = draft.details;
                goal.symbol_name = draft.symbol_name;
                debug!(id, "updated life goal");
                Ok(goal.clone())
            }
            None => {
                stored.next_id += 1;
                let goal = LifeGoal {
                    id: stored.next_id,
                    title: draft.title,
                    details: draft.details,
                    symbol_name: draft.symbol_name,
                    created_at: draft.timestamp,
                    finished_at: None,
                };
                debug!(id = goal.id, "inserted life goal");
                stored.goals.push(goal.clone());
                Ok(goal)
            }
        })
    }

    fn set_finished(
        &self,
        id: u64,
        finished_at: Option<NaiveDateTime>,
    ) -> BoxFuture<'static, Result<()>> {
        self.update_goals(move |stored| {
            let goal = stored
                .goals
                .iter_mut()
                .find(|g| g.id == id)
                .ok_or(StoreError::GoalNotFound(id))?;
            goal.finished_at = finished_at;
            Ok(())
        })
    }

    fn delete(&self, id: u64) -> BoxFuture<'static, Result<()>> {
        self.update_goals(move |stored| {
            let before = stored.goals.len();
            stored.goals.retain(|g| g.id != id);
            if stored.goals.len() == before {
                return Err(StoreError::GoalNotFound(id));
            }
            Ok(())
        })
    }
}

fn read_toml<T: DeserializeOwned + Default>(path: &Path) -> Result<T, StoreError> {
    if !path.exists() {
        return Ok(T::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

async fn write_file(path: &Path, contents: String) -> Result<(), StoreError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::life_expectancy::MAX_LIFE_EXPECTANCY;
    use crate::life::Life;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn defaults() -> StoreDefaults {
        StoreDefaults {
            birthday: date(1996, 6, 15),
            life_expectancy: 80,
        }
    }

    fn draft(title: &str) -> GoalDraft {
        GoalDraft {
            id: None,
            title: title.to_string(),
            details: String::new(),
            symbol_name: "flag".to_string(),
            timestamp: date(2024, 6, 15).and_hms_opt(12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_missing_files_yield_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path(), defaults()).unwrap();
        assert_eq!(store.birthday(), date(1996, 6, 15));
        assert_eq!(store.life_expectancy(), 80);
        assert_eq!(store.theme(), ThemeKind::default());
        assert!(!store.is_weekly_notification_enabled());
        assert!(!store.did_complete_onboarding());
    }

    #[tokio::test]
    async fn test_settings_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path(), defaults()).unwrap();
        store.update_birthday(date(1990, 1, 2)).await.unwrap();
        store.update_life_expectancy(92).await.unwrap();
        store.update_theme(ThemeKind::Teal).await.unwrap();
        store.update_weekly_notification(true).await.unwrap();
        store.update_onboarding_completed(true).await.unwrap();

        let reopened = FileStore::open(dir.path(), defaults()).unwrap();
        assert_eq!(reopened.birthday(), date(1990, 1, 2));
        assert_eq!(reopened.life_expectancy(), 92);
        assert_eq!(reopened.theme(), ThemeKind::Teal);
        assert!(reopened.is_weekly_notification_enabled());
        assert!(reopened.did_complete_onboarding());
    }

    #[tokio::test]
    async fn test_life_expectancy_changes_stream() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path(), defaults()).unwrap();
        let mut changes = store.life_expectancy_changes();

        store.update_life_expectancy(85).await.unwrap();
        assert_eq!(changes.next().await, Some(85));
        store.update_life_expectancy(70).await.unwrap();
        assert_eq!(changes.next().await, Some(70));
    }

    #[tokio::test]
    async fn test_goal_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path(), defaults()).unwrap();

        let first = store.save(draft("Run a marathon")).await.unwrap();
        let second = store.save(draft("Learn Rust")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        let mut edit = draft("Run two marathons");
        edit.id = Some(first.id);
        store.save(edit).await.unwrap();

        let finished = date(2024, 7, 1).and_hms_opt(8, 0, 0).unwrap();
        store.set_finished(second.id, Some(finished)).await.unwrap();
        store.delete(first.id).await.unwrap();
        assert!(store.delete(first.id).await.is_err());

        let reopened = FileStore::open(dir.path(), defaults()).unwrap();
        let goals = reopened.fetch().await.unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].title, "Learn Rust");
        assert_eq!(goals[0].finished_at, Some(finished));

        let third = reopened.save(draft("Visit Japan")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_changes_land_in_call_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path(), defaults()).unwrap();
        let first = store.update_weekly_notification(true);
        let second = store.update_weekly_notification(false);
        let third = store.update_weekly_notification(true);
        assert!(store.is_weekly_notification_enabled());

        // Flushes finishing out of order still leave the latest value on disk.
        third.await.unwrap();
        second.await.unwrap();
        first.await.unwrap();
        let reopened = FileStore::open(dir.path(), defaults()).unwrap();
        assert!(reopened.is_weekly_notification_enabled());
    }

    #[tokio::test]
    async fn test_goal_writes_apply_without_flush() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path(), defaults()).unwrap();
        store.save(draft("A")).await.unwrap();
        store.save(draft("B")).await.unwrap();

        let first = store.delete(1);
        let second = store.delete(2);
        assert!(store.fetch().await.unwrap().is_empty());
        drop(first);
        drop(second);

        store.flush().await.unwrap();
        let reopened = FileStore::open(dir.path(), defaults()).unwrap();
        assert!(reopened.fetch().await.unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_expectancy_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "life_expectancy = 100000000\n").unwrap();
        let store = FileStore::open(dir.path(), defaults()).unwrap();
        assert_eq!(store.life_expectancy(), MAX_LIFE_EXPECTANCY);
        let life = Life::new(store.birthday(), store.life_expectancy(), date(2024, 6, 15));
        assert_eq!(life.total_weeks(), MAX_LIFE_EXPECTANCY * 52);

        let other = tempfile::tempdir().unwrap();
        let huge = StoreDefaults {
            life_expectancy: u32::MAX,
            ..defaults()
        };
        let store = FileStore::open(other.path(), huge).unwrap();
        assert_eq!(store.life_expectancy(), MAX_LIFE_EXPECTANCY);
    }

    #[test]
    fn test_corrupt_settings_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "life_expectancy = [").unwrap();
        let err = FileStore::open(dir.path(), defaults()).err().unwrap();
        assert!(matches!(err, StoreError::Parse { .. }));
    }
}
