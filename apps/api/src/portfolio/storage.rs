//! Persistence hook for the portfolio record.
//!
//! The whole record is stored as one JSON blob. `PortfolioStorage` is the seam:
//! `JsonFileStorage` in production, `MemoryStorage` in tests. Storage never
//! decides what the record looks like; `load_or_seed` repairs what it reads.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::portfolio::{normalize_section_order, PortfolioData};
use crate::portfolio::seed::seed_portfolio;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored portfolio is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Storage task failed: {0}")]
    Task(String),
}

#[async_trait]
pub trait PortfolioStorage: Send + Sync {
    /// Returns the raw stored blob, or `None` if nothing has been saved.
    async fn load(&self) -> Result<Option<String>, StorageError>;

    async fn save(&self, data: &PortfolioData) -> Result<(), StorageError>;

    async fn clear(&self) -> Result<(), StorageError>;
}

// ────────────────────────────────────────────────────────────────────────────
// JSON file
// ────────────────────────────────────────────────────────────────────────────

/// Stores the record in a single JSON file. Writes go to a temp file in the same
/// directory which is then renamed over the target, so a crash mid-write leaves
/// the previous blob intact.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StorageError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| StorageError::Io(e.error))?;
    Ok(())
}

#[async_trait]
impl PortfolioStorage for JsonFileStorage {
    async fn load(&self) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, data: &PortfolioData) -> Result<(), StorageError> {
        let blob = serde_json::to_vec_pretty(data)?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&path, &blob))
            .await
            .map_err(|e| StorageError::Task(e.to_string()))?
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    blob: std::sync::Mutex<Option<String>>,
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `blob` already stored.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: std::sync::Mutex::new(Some(blob.into())),
            fail_writes: false,
        }
    }

    /// Every `save` and `clear` fails. Used to check that the store keeps
    /// working when persistence is broken.
    pub fn failing() -> Self {
        Self {
            blob: std::sync::Mutex::new(None),
            fail_writes: true,
        }
    }

    pub fn snapshot(&self) -> Option<String> {
        self.blob.lock().map(|b| b.clone()).unwrap_or(None)
    }

    fn write_error() -> StorageError {
        StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "storage is read-only",
        ))
    }
}

#[cfg(test)]
#[async_trait]
impl PortfolioStorage for MemoryStorage {
    async fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.snapshot())
    }

    async fn save(&self, data: &PortfolioData) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(Self::write_error());
        }
        let blob = serde_json::to_string(data)?;
        if let Ok(mut guard) = self.blob.lock() {
            *guard = Some(blob);
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(Self::write_error());
        }
        if let Ok(mut guard) = self.blob.lock() {
            *guard = None;
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Startup load
// ────────────────────────────────────────────────────────────────────────────

/// Reads the stored record. Absent, unreadable or corrupt → the seed record.
/// A stored `sectionOrder` is repaired into a full permutation, and repeated
/// item ids within a list are replaced with fresh UUIDs.
pub async fn load_or_seed(storage: &dyn PortfolioStorage) -> PortfolioData {
    let blob = match storage.load().await {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            info!("No stored portfolio found, starting from seed");
            return seed_portfolio();
        }
        Err(e) => {
            warn!("Failed to read stored portfolio, starting from seed: {e}");
            return seed_portfolio();
        }
    };

    match serde_json::from_str::<PortfolioData>(&blob) {
        Ok(mut data) => {
            data.section_order = normalize_section_order(&data.section_order);
            let renamed = data.reassign_duplicate_ids(|| Uuid::new_v4().to_string());
            if renamed > 0 {
                warn!("Stored portfolio had {renamed} duplicate item id(s), assigned fresh ids");
            }
            data
        }
        Err(e) => {
            warn!("Stored portfolio is corrupt, starting from seed: {e}");
            seed_portfolio()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::{default_section_order, ListKind, SectionKey};
    use crate::portfolio::actions::Action;
    use crate::portfolio::PortfolioStore;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_load_or_seed_without_blob_returns_seed() {
        let storage = MemoryStorage::new();
        assert_eq!(load_or_seed(&storage).await, seed_portfolio());
    }

    #[tokio::test]
    async fn test_load_or_seed_with_corrupt_blob_returns_seed() {
        let storage = MemoryStorage::with_blob("{not json");
        assert_eq!(load_or_seed(&storage).await, seed_portfolio());
    }

    #[tokio::test]
    async fn test_round_trip_backfills_missing_section_order() {
        let mut value = serde_json::to_value(seed_portfolio()).unwrap();
        value["name"] = serde_json::json!("Stored Name");
        value.as_object_mut().unwrap().remove("sectionOrder");
        let storage = MemoryStorage::with_blob(value.to_string());

        let loaded = load_or_seed(&storage).await;
        assert_eq!(loaded.name, "Stored Name");
        assert_eq!(loaded.section_order, default_section_order());
    }

    #[tokio::test]
    async fn test_load_normalizes_partial_section_order() {
        let mut value = serde_json::to_value(seed_portfolio()).unwrap();
        value["sectionOrder"] = serde_json::json!(["education", "education", "skills"]);
        let storage = MemoryStorage::with_blob(value.to_string());

        let loaded = load_or_seed(&storage).await;
        assert_eq!(loaded.section_order[0], SectionKey::Education);
        assert_eq!(loaded.section_order[1], SectionKey::Skills);
        assert_eq!(loaded.section_order.len(), 7);
    }

    #[tokio::test]
    async fn test_load_reassigns_duplicate_item_ids() {
        let mut data = seed_portfolio();
        data.projects.push(data.projects[0].clone());
        data.achievements.push(data.achievements[1].clone());
        let storage = MemoryStorage::with_blob(serde_json::to_string(&data).unwrap());

        let loaded = load_or_seed(&storage).await;
        assert_eq!(loaded.duplicate_id(), None);
        assert_eq!(loaded.projects.len(), 3);
        assert_eq!(loaded.projects[0].id, "proj1");
        assert_ne!(loaded.projects[2].id, "proj1");
        assert_eq!(loaded.projects[2].name, loaded.projects[0].name);
        assert_eq!(loaded.achievements.len(), 3);
    }

    #[tokio::test]
    async fn test_removing_repaired_item_leaves_original() {
        let mut data = seed_portfolio();
        data.projects.push(data.projects[0].clone());
        let storage = Arc::new(MemoryStorage::with_blob(serde_json::to_string(&data).unwrap()));
        let store = PortfolioStore::open(storage).await;

        let next = store
            .dispatch(Action::RemoveItem {
                list: ListKind::Projects,
                id: "proj1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(next.projects.len(), 2);
        assert!(next.projects.iter().all(|p| p.id != "proj1"));
        assert_eq!(next.duplicate_id(), None);
    }

    #[tokio::test]
    async fn test_json_file_storage_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested").join("portfolio.json"));

        assert!(storage.load().await.unwrap().is_none());

        let mut data = seed_portfolio();
        data.name = "Jane Doe".to_string();
        storage.save(&data).await.unwrap();

        let loaded = load_or_seed(&storage).await;
        assert_eq!(loaded, data);

        storage.clear().await.unwrap();
        assert!(!storage.path().exists());
        // Clearing twice is fine.
        storage.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_failing_storage_reports_errors() {
        let storage = MemoryStorage::failing();
        assert!(storage.save(&seed_portfolio()).await.is_err());
        assert!(storage.clear().await.is_err());
    }
}
