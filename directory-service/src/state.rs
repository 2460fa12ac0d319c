use std::sync::Arc;

use directory_shared::{
    models::{AddressRead, EventRead, OrganizationRead, PersonRead},
    store::{memory::MemoryStore, ResourceStore},
};

/// One store per resource type, shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub addresses: Arc<dyn ResourceStore<AddressRead>>,
    pub persons: Arc<dyn ResourceStore<PersonRead>>,
    pub events: Arc<dyn ResourceStore<EventRead>>,
    pub organizations: Arc<dyn ResourceStore<OrganizationRead>>,
}

impl AppState {
    /// Fresh, empty process-local stores
    pub fn in_memory() -> Self {
        Self {
            addresses: Arc::new(MemoryStore::<AddressRead>::new()),
            persons: Arc::new(MemoryStore::<PersonRead>::new()),
            events: Arc::new(MemoryStore::<EventRead>::new()),
            organizations: Arc::new(MemoryStore::<OrganizationRead>::new()),
        }
    }
}
