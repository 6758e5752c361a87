//! Derived aggregates over a ledger snapshot
//!
//! Everything here is pure computation: totals, remaining balances, and the
//! spending breakdown are recomputed from the snapshot on every call and
//! never stored.

pub mod summary;

pub use summary::{
    category_remaining, chart_series, per_category_spent, remaining, total_budget, total_spent,
    CategoryRow, ChartSlice, LedgerSummary,
};
