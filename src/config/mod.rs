//! Configuration and path management for tripledger

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::{BudgetMode, Settings};
