use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::fs;
use tracing::error;

use crate::models::GoalSet;

/// Default location of the goals file, under the platform data directory.
pub fn default_goals_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("platelog")
        .join("goals.json")
}

/// Local persistence for the user's goal set: one pretty-printed JSON file.
///
/// Loading never fails — a missing, unreadable, or corrupt file falls back
/// to the default goals so the app always starts.
#[derive(Debug, Clone)]
pub struct GoalStore {
    path: PathBuf,
}

impl GoalStore {
    pub fn new(path: PathBuf) -> Self {
        GoalStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> GoalSet {
        match fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(goals) => goals,
                Err(err) => {
                    error!("failed to parse goals file: {err}");
                    GoalSet::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => GoalSet::default(),
            Err(err) => {
                error!("failed to read goals file: {err}");
                GoalSet::default()
            }
        }
    }

    pub async fn save(&self, goals: GoalSet) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let payload = serde_json::to_vec_pretty(&goals).context("failed to serialize goals")?;
        fs::write(&self.path, payload)
            .await
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}
