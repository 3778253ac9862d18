pub mod memory;
pub mod store;
pub mod traits;

use std::sync::Arc;

use mission_domain::{Board, KanbanService, Mission};

pub use memory::InMemoryRepository;
pub use store::{AtomicWriter, JsonSnapshotFile};
pub use traits::{PersistenceStore, StoreSnapshot, SNAPSHOT_VERSION};

/// A service backed by two fresh in-memory stores.
pub fn in_memory_service() -> KanbanService {
    let boards: Arc<InMemoryRepository<Board>> = Arc::new(InMemoryRepository::new("board"));
    let missions: Arc<InMemoryRepository<Mission>> = Arc::new(InMemoryRepository::new("mission"));
    KanbanService::new(boards, missions)
}

/// Capture the current contents of `service`.
pub fn snapshot_of(service: &KanbanService) -> mission_core::MissionResult<StoreSnapshot> {
    Ok(StoreSnapshot::new(
        service.list_boards()?,
        service.list_missions()?,
    ))
}
