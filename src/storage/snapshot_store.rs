//! Snapshot persistence
//!
//! [`SnapshotStore`] owns the single on-disk location of the ledger blob. The
//! contract is small: load the last-saved snapshot (or nothing), overwrite it
//! wholesale on save, and erase it on clear. A malformed file loads as
//! nothing, so startup always succeeds.

use std::path::PathBuf;

use crate::error::LedgerError;
use crate::models::Snapshot;

use super::file_io::{read_json_opt, remove_if_exists, write_json_atomic};

/// Persists the ledger snapshot to one fixed JSON file
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The backing file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the last-saved snapshot. `None` means no usable snapshot exists
    /// (absent file or malformed contents) and the caller should fall back to
    /// defaults.
    pub fn load(&self) -> Result<Option<Snapshot>, LedgerError> {
        read_json_opt(&self.path)
    }

    /// Overwrite the stored snapshot
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), LedgerError> {
        write_json_atomic(&self.path, snapshot)
    }

    /// Erase the stored snapshot entirely (distinct from saving an empty one)
    pub fn clear(&self) -> Result<(), LedgerError> {
        remove_if_exists(&self.path)
    }

    /// Whether a stored snapshot file is present
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, SnapshotStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path().join("trip.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_load_absent_is_none() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.load().unwrap().is_none());
        assert!(!store.exists());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let (_temp_dir, store) = create_test_store();

        let mut snapshot = Snapshot::default();
        snapshot.categories[2].budget = "100".into();
        snapshot.expenses.push(Expense {
            date: "2024-01-01".into(),
            category: "Food".into(),
            description: "lunch".into(),
            amount: 12.5,
        });

        store.save(&snapshot).unwrap();
        assert!(store.exists());

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_malformed_file_loads_as_none() {
        let (_temp_dir, store) = create_test_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{{{ definitely not json").unwrap();

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_clear_removes_file() {
        let (_temp_dir, store) = create_test_store();

        store.save(&Snapshot::default()).unwrap();
        assert!(store.exists());

        store.clear().unwrap();
        assert!(!store.exists());
        assert!(store.load().unwrap().is_none());

        // Clearing again is a no-op
        store.clear().unwrap();
    }
}
