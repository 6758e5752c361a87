//! Core data models for tripledger
//!
//! This module contains the data structures that represent the trip budgeting
//! domain: categories, expenses, and the snapshot blob that persists them.

pub mod amount;
pub mod category;
pub mod expense;
pub mod snapshot;

pub use category::Category;
pub use expense::{Expense, ExpenseDraft, ExpenseValidationError};
pub use snapshot::Snapshot;
