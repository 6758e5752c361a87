//! Export functionality
//!
//! Writes the expense register out of the ledger for use in spreadsheets.

pub mod csv;

pub use csv::export_expenses_csv;
