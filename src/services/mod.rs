//! Service layer for tripledger
//!
//! Business logic on top of the storage layer. The ledger service is the
//! single source of truth for the trip's state.

pub mod ledger;

pub use ledger::Ledger;
