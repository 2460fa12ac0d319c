use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Resource;

// In-memory store implementation
pub mod memory;

/// ResourceStore trait defining the interface for per-resource storage implementations
#[async_trait]
pub trait ResourceStore<T: Resource>: Send + Sync + 'static {
    /// Inserts a new value; fails with `AlreadyExists` if its identifier is taken
    async fn create(&self, value: T) -> Result<T>;

    /// Gets a value by identifier
    async fn get(&self, id: &Uuid) -> Result<T>;

    /// Lists all values in insertion order
    async fn list(&self) -> Result<Vec<T>>;

    /// Replaces an existing value; fails with `NotFound` if it is absent
    async fn update(&self, value: T) -> Result<T>;

    /// Removes a value by identifier
    async fn delete(&self, id: &Uuid) -> Result<()>;
}
