use std::sync::Arc;

use mission_core::MissionResult;
use mission_domain::KanbanService;
use mission_store::{in_memory_service, snapshot_of, JsonSnapshotFile, PersistenceStore};
use tokio::sync::Mutex;

pub struct AppState {
    pub service: KanbanService,
    snapshot_file: Option<JsonSnapshotFile>,
    save_lock: Mutex<()>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Memory-only state.
    pub fn in_memory() -> Self {
        Self {
            service: in_memory_service(),
            snapshot_file: None,
            save_lock: Mutex::new(()),
        }
    }

    /// State backed by a snapshot file. An existing file is loaded first.
    pub async fn with_snapshot(file: JsonSnapshotFile) -> MissionResult<Self> {
        let service = in_memory_service();
        if let Some(snapshot) = file.load_if_exists().await? {
            service.restore(snapshot.boards, snapshot.missions)?;
        } else {
            tracing::info!("No snapshot at {}, starting empty", file.path().display());
        }
        Ok(Self {
            service,
            snapshot_file: Some(file),
            save_lock: Mutex::new(()),
        })
    }

    pub fn snapshot_file(&self) -> Option<&JsonSnapshotFile> {
        self.snapshot_file.as_ref()
    }

    /// Write the current stores to the snapshot file, if any.
    ///
    /// Failures are logged only; the mutation has already been applied.
    pub async fn persist(&self) {
        let Some(file) = &self.snapshot_file else {
            return;
        };
        let _guard = self.save_lock.lock().await;
        let result = match snapshot_of(&self.service) {
            Ok(snapshot) => file.save(&snapshot).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            tracing::error!("Failed to save snapshot to {}: {}", file.path().display(), e);
        }
    }
}
