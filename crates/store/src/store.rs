use crate::StoreError;
use minestatus_models::{Server, ServerStatus};

/// CRUD contract over saved server entries. The checker hands its result to
/// `update_status`; everything else is routine persistence consumed by the
/// presentation side.
///
/// A store handle is constructed explicitly and passed where needed; there
/// is no process-global instance.
#[async_trait::async_trait]
pub trait ServerStore: Send + Sync {
    /// All entries in insertion order.
    async fn list(&self) -> Result<Vec<Server>, StoreError>;

    async fn get(&self, id: i64) -> Result<Option<Server>, StoreError>;

    /// Inserts an entry, ignoring `server.id`; returns the assigned id.
    async fn insert(&self, server: Server) -> Result<i64, StoreError>;

    async fn update(&self, server: Server) -> Result<(), StoreError>;

    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// Merges a fresh check result into the stored entry.
    async fn update_status(&self, id: i64, status: ServerStatus) -> Result<(), StoreError>;

    async fn toggle_favorite(&self, id: i64) -> Result<(), StoreError>;
}
