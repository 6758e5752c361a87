//! Storage layer for tripledger
//!
//! JSON file storage with atomic writes. The whole ledger persists as one
//! snapshot blob under a single fixed path.

pub mod file_io;
pub mod snapshot_store;

pub use file_io::{read_json_opt, remove_if_exists, write_json_atomic};
pub use snapshot_store::SnapshotStore;
