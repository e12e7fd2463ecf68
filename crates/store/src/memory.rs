use crate::{ServerStore, StoreError};
use minestatus_models::{Server, ServerStatus};
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// In-memory [`ServerStore`]. A `BTreeMap` keyed by the assigned id keeps
/// `list` in insertion order since ids are monotonically increasing.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

struct Inner {
    servers: BTreeMap<i64, Server>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                servers: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ServerStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Server>, StoreError> {
        Ok(self.inner.read().servers.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Server>, StoreError> {
        Ok(self.inner.read().servers.get(&id).cloned())
    }

    async fn insert(&self, mut server: Server) -> Result<i64, StoreError> {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        server.id = id;
        tracing::debug!("Saved server entry {} ({})", id, server.name);
        inner.servers.insert(id, server);
        Ok(id)
    }

    async fn update(&self, server: Server) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        match inner.servers.get_mut(&server.id) {
            Some(existing) => {
                *existing = server;
                Ok(())
            }
            None => Err(StoreError::NotFound(server.id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        inner
            .servers
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn update_status(&self, id: i64, status: ServerStatus) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        match inner.servers.get_mut(&id) {
            Some(server) => {
                server.last_status = Some(status);
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    async fn toggle_favorite(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        match inner.servers.get_mut(&id) {
            Some(server) => {
                server.favorite = !server.favorite;
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minestatus_models::ServerEdition;

    fn entry(name: &str) -> Server {
        Server {
            id: 0,
            name: name.to_string(),
            address: format!("{name}.example.com"),
            port: 25565,
            edition: ServerEdition::Java,
            favorite: false,
            last_status: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_ids_and_list_keeps_order() {
        let store = MemoryStore::new();
        let a = store.insert(entry("alpha")).await.unwrap();
        let b = store.insert(entry("beta")).await.unwrap();
        assert!(a < b);

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[tokio::test]
    async fn get_update_delete_roundtrip() {
        let store = MemoryStore::new();
        let id = store.insert(entry("alpha")).await.unwrap();

        let mut server = store.get(id).await.unwrap().unwrap();
        server.port = 25566;
        store.update(server).await.unwrap();
        assert_eq!(store.get(id).await.unwrap().unwrap().port, 25566);

        store.delete(id).await.unwrap();
        assert!(store.get(id).await.unwrap().is_none());
        assert!(matches!(
            store.delete(id).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_status_merges_into_entry() {
        let store = MemoryStore::new();
        let id = store.insert(entry("alpha")).await.unwrap();

        store
            .update_status(id, ServerStatus::offline("Network error: reset".to_string()))
            .await
            .unwrap();

        let server = store.get(id).await.unwrap().unwrap();
        let status = server.last_status.unwrap();
        assert!(!status.online);
        assert_eq!(status.error.as_deref(), Some("Network error: reset"));

        assert!(matches!(
            store
                .update_status(999, ServerStatus::offline("x".to_string()))
                .await,
            Err(StoreError::NotFound(999))
        ));
    }

    #[tokio::test]
    async fn toggle_favorite_flips() {
        let store = MemoryStore::new();
        let id = store.insert(entry("alpha")).await.unwrap();
        store.toggle_favorite(id).await.unwrap();
        assert!(store.get(id).await.unwrap().unwrap().favorite);
        store.toggle_favorite(id).await.unwrap();
        assert!(!store.get(id).await.unwrap().unwrap().favorite);
    }
}
