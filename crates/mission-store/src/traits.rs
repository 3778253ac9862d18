use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mission_core::MissionResult;
use mission_domain::{Board, Mission};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current on-disk format.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Point-in-time copy of every board and mission, in store order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub boards: Vec<Board>,
    #[serde(default)]
    pub missions: Vec<Mission>,
}

impl StoreSnapshot {
    pub fn new(boards: Vec<Board>, missions: Vec<Mission>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            boards,
            missions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty() && self.missions.is_empty()
    }
}

/// Backend that can persist and restore a [`StoreSnapshot`].
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    async fn save(&self, snapshot: &StoreSnapshot) -> MissionResult<()>;

    async fn load(&self) -> MissionResult<StoreSnapshot>;

    async fn exists(&self) -> bool;

    fn path(&self) -> &Path;
}
