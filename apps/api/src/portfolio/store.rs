//! `PortfolioStore` owns the live record.
//!
//! Dispatches are serialized by an async mutex. After each successful dispatch the
//! new record is published on a `watch` channel (the preview stream listens there)
//! and handed to the storage hook. Persistence failures are logged and ignored:
//! the in-memory record stays authoritative.

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, error};

use crate::models::portfolio::PortfolioData;
use crate::portfolio::actions::{apply, Action, StoreError};
use crate::portfolio::storage::{load_or_seed, PortfolioStorage};

#[derive(Clone)]
pub struct PortfolioStore {
    inner: Arc<Inner>,
}

struct Inner {
    /// Held for the duration of a dispatch, including the save.
    lock: Mutex<()>,
    tx: watch::Sender<Arc<PortfolioData>>,
    storage: Arc<dyn PortfolioStorage>,
}

impl PortfolioStore {
    /// Builds a store around an already-loaded record.
    pub fn new(initial: PortfolioData, storage: Arc<dyn PortfolioStorage>) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(initial));
        Self {
            inner: Arc::new(Inner {
                lock: Mutex::new(()),
                tx,
                storage,
            }),
        }
    }

    /// Loads the persisted record (or the seed) and builds a store around it.
    pub async fn open(storage: Arc<dyn PortfolioStorage>) -> Self {
        let initial = load_or_seed(storage.as_ref()).await;
        Self::new(initial, storage)
    }

    pub fn get(&self) -> Arc<PortfolioData> {
        self.inner.tx.borrow().clone()
    }

    /// Receiver that always holds the latest record.
    pub fn subscribe(&self) -> watch::Receiver<Arc<PortfolioData>> {
        self.inner.tx.subscribe()
    }

    pub async fn dispatch(&self, action: Action) -> Result<Arc<PortfolioData>, StoreError> {
        let _guard = self.inner.lock.lock().await;
        self.commit(action).await
    }

    /// Applies `action` only if `precondition` holds for the record as it is once
    /// the dispatch lock is held. Returns `Ok(None)` without applying otherwise.
    pub async fn dispatch_if<F>(
        &self,
        action: Action,
        precondition: F,
    ) -> Result<Option<Arc<PortfolioData>>, StoreError>
    where
        F: FnOnce(&PortfolioData) -> bool,
    {
        let _guard = self.inner.lock.lock().await;
        let current = self.get();
        if !precondition(current.as_ref()) {
            debug!("Skipped portfolio action '{}'", action.name());
            return Ok(None);
        }
        self.commit(action).await.map(Some)
    }

    /// Caller must hold `lock`.
    async fn commit(&self, action: Action) -> Result<Arc<PortfolioData>, StoreError> {
        let name = action.name();
        let is_reset = matches!(action, Action::Reset);
        let current = self.get();
        let next = Arc::new(apply(&current, action)?);

        self.inner.tx.send_replace(next.clone());
        debug!("Applied portfolio action '{name}'");

        let persisted = if is_reset {
            self.inner.storage.clear().await
        } else {
            self.inner.storage.save(&next).await
        };
        if let Err(e) = persisted {
            error!("Failed to persist portfolio after '{name}': {e}");
        }

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::ListKind;
    use crate::portfolio::actions::ProfilePatch;
    use crate::portfolio::seed::seed_portfolio;
    use crate::portfolio::storage::MemoryStorage;

    fn rename(name: &str) -> Action {
        Action::UpdateProfile(ProfilePatch {
            name: Some(name.to_string()),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_dispatch_persists_after_mutation() {
        let storage = Arc::new(MemoryStorage::new());
        let store = PortfolioStore::open(storage.clone()).await;

        store.dispatch(rename("Jane Doe")).await.unwrap();

        let blob = storage.snapshot().unwrap();
        let saved: PortfolioData = serde_json::from_str(&blob).unwrap();
        assert_eq!(saved.name, "Jane Doe");
        assert_eq!(store.get().name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_reset_clears_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let store = PortfolioStore::open(storage.clone()).await;

        store.dispatch(rename("Someone")).await.unwrap();
        assert!(storage.snapshot().is_some());

        store.dispatch(Action::Reset).await.unwrap();
        assert!(storage.snapshot().is_none());
        assert_eq!(*store.get(), seed_portfolio());
    }

    #[tokio::test]
    async fn test_storage_failure_keeps_new_state() {
        let store = PortfolioStore::open(Arc::new(MemoryStorage::failing())).await;
        let next = store.dispatch(rename("Still Here")).await.unwrap();
        assert_eq!(next.name, "Still Here");
        assert_eq!(store.get().name, "Still Here");
    }

    #[tokio::test]
    async fn test_rejected_action_changes_nothing() {
        let storage = Arc::new(MemoryStorage::new());
        let store = PortfolioStore::open(storage.clone()).await;
        let before = store.get();

        let result = store
            .dispatch(Action::RemoveItem {
                list: ListKind::Projects,
                id: "missing".to_string(),
            })
            .await;

        assert!(result.is_err());
        assert_eq!(store.get(), before);
        assert!(storage.snapshot().is_none());
    }

    #[tokio::test]
    async fn test_subscribers_see_each_change() {
        let store = PortfolioStore::open(Arc::new(MemoryStorage::new())).await;
        let mut rx = store.subscribe();

        store.dispatch(rename("First")).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().name, "First");

        store.dispatch(rename("Second")).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().name, "Second");
    }

    #[tokio::test]
    async fn test_dispatch_if_checks_current_record() {
        let storage = Arc::new(MemoryStorage::new());
        let store = PortfolioStore::open(storage.clone()).await;

        let skipped = store
            .dispatch_if(rename("Nope"), |data| data.name == "Someone Else")
            .await
            .unwrap();
        assert!(skipped.is_none());
        assert_eq!(store.get().name, seed_portfolio().name);
        assert!(storage.snapshot().is_none());

        let applied = store
            .dispatch_if(rename("Yes"), |data| data.name == seed_portfolio().name)
            .await
            .unwrap();
        assert_eq!(applied.unwrap().name, "Yes");
        assert_eq!(store.get().name, "Yes");
    }

    #[tokio::test]
    async fn test_concurrent_dispatches_are_serialized() {
        let store = PortfolioStore::open(Arc::new(MemoryStorage::new())).await;

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .dispatch(Action::AddItem {
                            list: ListKind::Achievements,
                        })
                        .await
                })
            })
            .collect();
        for h in handles {
            h.await.unwrap().unwrap();
        }

        assert_eq!(store.get().achievements.len(), 12);
    }
}
