use crate::MissionResult;
use uuid::Uuid;

/// A record with a stable identity.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

/// Keyed collection of entities that preserves insertion order.
///
/// Receivers take `&self` so one store instance can be shared between
/// request handlers behind an `Arc`.
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert a new entity. Fails with `DuplicateKey` if the id is taken.
    fn add(&self, entity: T) -> MissionResult<()>;
    /// Fetch one entity, or `NotFound`.
    fn get_by_id(&self, id: Uuid) -> MissionResult<T>;
    /// All entities in insertion order.
    fn get_all(&self) -> MissionResult<Vec<T>>;
    /// Replace the entity with the same id in place, or `NotFound`.
    fn update(&self, entity: T) -> MissionResult<()>;
    /// Remove an entity, or `NotFound`.
    fn delete(&self, id: Uuid) -> MissionResult<()>;
    fn clear(&self) -> MissionResult<()>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
