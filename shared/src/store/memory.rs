use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use super::ResourceStore;
use crate::error::{Result, ServiceError};
use crate::models::Resource;

struct Entries<T> {
    values: HashMap<Uuid, T>,
    order: Vec<Uuid>, // insertion order of ids
}

/// Process-local implementation of ResourceStore.
///
/// Every operation holds the lock for its whole duration, so single-key
/// mutations are atomic. Read-modify-write sequences spanning several calls
/// are not, and the last writer wins.
pub struct MemoryStore<T> {
    entries: RwLock<Entries<T>>,
}

impl<T: Resource> MemoryStore<T> {
    /// Creates a new empty in-memory store
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Entries {
                values: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    /// Creates a new in-memory store with initial data, later duplicates replacing earlier ones
    pub fn with_data(initial_data: Vec<T>) -> Self {
        let mut values = HashMap::new();
        let mut order = Vec::new();
        for value in initial_data {
            let id = value.id();
            if values.insert(id, value).is_none() {
                order.push(id);
            }
        }

        Self {
            entries: RwLock::new(Entries { values, order }),
        }
    }

    fn not_found(id: &Uuid) -> ServiceError {
        ServiceError::NotFound(format!("{} not found: {}", T::KIND, id))
    }
}

impl<T: Resource> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Resource> ResourceStore<T> for MemoryStore<T> {
    async fn create(&self, value: T) -> Result<T> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ServiceError::InternalError("Failed to acquire write lock".into()))?;

        let id = value.id();
        if entries.values.contains_key(&id) {
            return Err(ServiceError::AlreadyExists(format!(
                "{} with ID {} already exists",
                T::KIND,
                id
            )));
        }

        entries.values.insert(id, value.clone());
        entries.order.push(id);
        tracing::debug!("Stored {} {}", T::KIND, id);
        Ok(value)
    }

    async fn get(&self, id: &Uuid) -> Result<T> {
        let entries = self
            .entries
            .read()
            .map_err(|_| ServiceError::InternalError("Failed to acquire read lock".into()))?;

        entries
            .values
            .get(id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn list(&self) -> Result<Vec<T>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| ServiceError::InternalError("Failed to acquire read lock".into()))?;

        Ok(entries
            .order
            .iter()
            .filter_map(|id| entries.values.get(id).cloned())
            .collect())
    }

    async fn update(&self, value: T) -> Result<T> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ServiceError::InternalError("Failed to acquire write lock".into()))?;

        let id = value.id();
        match entries.values.get_mut(&id) {
            Some(stored) => {
                *stored = value.clone();
                Ok(value)
            }
            None => Err(Self::not_found(&id)),
        }
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ServiceError::InternalError("Failed to acquire write lock".into()))?;

        if entries.values.remove(id).is_none() {
            return Err(Self::not_found(id));
        }
        entries.order.retain(|stored_id| stored_id != id);

        Ok(())
    }
}
