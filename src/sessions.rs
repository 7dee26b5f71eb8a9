//! Session store — in-memory ownership of per-visitor walker and inquiry state.
//!
//! Each session's state is owned by exactly one entry; nothing is shared
//! between sessions and nothing is persisted.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::SessionError;

/// Map of session id to state, guarded by one lock.
pub struct SessionStore<T> {
    kind: &'static str,
    sessions: RwLock<HashMap<Uuid, T>>,
}

impl<T: Clone> SessionStore<T> {
    /// `kind` names the session type in logs and errors.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Store a new session and return its id.
    pub async fn insert(&self, state: T) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, state);
        debug!(kind = self.kind, session_id = %id, "Session opened");
        id
    }

    /// Snapshot of a session's state.
    pub async fn get(&self, id: Uuid) -> Result<T, SessionError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SessionError::NotFound { kind: self.kind, id })
    }

    /// Apply `f` to a session's state under the write lock.
    pub async fn update<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, SessionError> {
        let mut sessions = self.sessions.write().await;
        let state = sessions
            .get_mut(&id)
            .ok_or(SessionError::NotFound { kind: self.kind, id })?;
        Ok(f(state))
    }

    /// Drop a session, returning its final state.
    pub async fn remove(&self, id: Uuid) -> Result<T, SessionError> {
        let removed = self
            .sessions
            .write()
            .await
            .remove(&id)
            .ok_or(SessionError::NotFound { kind: self.kind, id })?;
        debug!(kind = self.kind, session_id = %id, "Session closed");
        Ok(removed)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_get_update_remove() {
        let store: SessionStore<u32> = SessionStore::new("counter");
        let id = store.insert(1).await;
        assert_eq!(store.get(id).await.unwrap(), 1);

        let doubled = store
            .update(id, |n| {
                *n *= 2;
                *n
            })
            .await
            .unwrap();
        assert_eq!(doubled, 2);
        assert_eq!(store.len().await, 1);

        assert_eq!(store.remove(id).await.unwrap(), 2);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn missing_session_is_not_found() {
        let store: SessionStore<String> = SessionStore::new("walk");
        let id = Uuid::new_v4();
        let err = store.get(id).await.unwrap_err();
        assert_eq!(err.to_string(), format!("walk session {id} not found"));
        assert!(store.update(id, |_| ()).await.is_err());
        assert!(store.remove(id).await.is_err());
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let store: SessionStore<Vec<u8>> = SessionStore::new("list");
        let a = store.insert(vec![]).await;
        let b = store.insert(vec![]).await;
        store.update(a, |v| v.push(1)).await.unwrap();
        assert_eq!(store.get(a).await.unwrap(), vec![1]);
        assert!(store.get(b).await.unwrap().is_empty());
    }
}
