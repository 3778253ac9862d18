use mission_core::{Entity, MissionError, MissionResult, Repository};
use parking_lot::RwLock;
use uuid::Uuid;

/// Ordered in-memory store.
///
/// Entities keep insertion order; `update` replaces in place. Each instance
/// is independent, so tests and servers can hold as many as they need.
pub struct InMemoryRepository<T> {
    kind: &'static str,
    data: RwLock<Vec<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    /// `kind` names the entity in not-found messages, e.g. "board".
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Swap the whole contents, keeping the order of `entities`.
    pub fn replace_all(&self, entities: Vec<T>) {
        *self.data.write() = entities;
    }

    fn position(data: &[T], id: Uuid) -> Option<usize> {
        data.iter().position(|e| e.id() == id)
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn add(&self, entity: T) -> MissionResult<()> {
        let mut data = self.data.write();
        if Self::position(&data, entity.id()).is_some() {
            return Err(MissionError::DuplicateKey(entity.id()));
        }
        data.push(entity);
        Ok(())
    }

    fn get_by_id(&self, id: Uuid) -> MissionResult<T> {
        self.data
            .read()
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or_else(|| MissionError::not_found(self.kind, id))
    }

    fn get_all(&self) -> MissionResult<Vec<T>> {
        Ok(self.data.read().clone())
    }

    fn update(&self, entity: T) -> MissionResult<()> {
        let mut data = self.data.write();
        match Self::position(&data, entity.id()) {
            Some(index) => {
                data[index] = entity;
                Ok(())
            }
            None => Err(MissionError::not_found(self.kind, entity.id())),
        }
    }

    fn delete(&self, id: Uuid) -> MissionResult<()> {
        let mut data = self.data.write();
        match Self::position(&data, id) {
            Some(index) => {
                data.remove(index);
                Ok(())
            }
            None => Err(MissionError::not_found(self.kind, id)),
        }
    }

    fn clear(&self) -> MissionResult<()> {
        self.data.write().clear();
        Ok(())
    }

    fn len(&self) -> usize {
        self.data.read().len()
    }
}
