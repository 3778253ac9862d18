use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{PersistenceStore, StoreSnapshot, SNAPSHOT_VERSION};
use mission_core::{MissionError, MissionResult};
use std::path::{Path, PathBuf};

/// Snapshot kept as a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonSnapshotFile {
    path: PathBuf,
}

impl JsonSnapshotFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the snapshot if the file exists, otherwise `None`.
    pub async fn load_if_exists(&self) -> MissionResult<Option<StoreSnapshot>> {
        if !self.exists().await {
            return Ok(None);
        }
        self.load().await.map(Some)
    }
}

#[async_trait::async_trait]
impl PersistenceStore for JsonSnapshotFile {
    async fn save(&self, snapshot: &StoreSnapshot) -> MissionResult<()> {
        let json_bytes = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| MissionError::Serialization(e.to_string()))?;

        AtomicWriter::write_atomic(&self.path, &json_bytes).await?;

        tracing::info!(
            boards = snapshot.boards.len(),
            missions = snapshot.missions.len(),
            "Saved snapshot to {}",
            self.path.display()
        );
        Ok(())
    }

    async fn load(&self) -> MissionResult<StoreSnapshot> {
        let file_bytes = AtomicWriter::read_all(&self.path).await?;

        let snapshot: StoreSnapshot = serde_json::from_slice(&file_bytes)
            .map_err(|e| MissionError::Serialization(e.to_string()))?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(MissionError::Serialization(format!(
                "Unsupported snapshot version: {}",
                snapshot.version
            )));
        }

        tracing::info!(
            boards = snapshot.boards.len(),
            missions = snapshot.missions.len(),
            "Loaded snapshot from {}",
            self.path.display()
        );
        Ok(snapshot)
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
