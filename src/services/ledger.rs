//! The ledger service
//!
//! [`Ledger`] owns the snapshot and is the only writer to it. Readers get
//! `&Snapshot` and derive everything else; mutations go through the methods
//! here, each of which persists the snapshot before returning.
//!
//! Add and edit validate the same draft shape differently on purpose: an
//! incomplete add is dropped silently, while an incomplete edit comes back as
//! a user-facing validation error.

use crate::config::{BudgetMode, Settings};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Expense, ExpenseDraft, Snapshot};
use crate::storage::SnapshotStore;

/// Single source of truth for the trip's categories and expenses
pub struct Ledger {
    snapshot: Snapshot,
    store: SnapshotStore,
    settings: Settings,
}

impl Ledger {
    /// Open the ledger, loading the last-saved snapshot or falling back to
    /// the default category set when none is usable.
    pub fn open(store: SnapshotStore, settings: Settings) -> LedgerResult<Self> {
        let snapshot = store.load()?.unwrap_or_default();
        Ok(Self {
            snapshot,
            store,
            settings,
        })
    }

    /// The current snapshot (read-only; aggregates derive from this)
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The active settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The active budgeting mode
    pub fn mode(&self) -> BudgetMode {
        self.settings.budget_mode
    }

    fn persist(&self) -> LedgerResult<()> {
        self.store.save(&self.snapshot)
    }

    fn require_mode(&self, mode: BudgetMode, operation: &str) -> LedgerResult<()> {
        if self.settings.budget_mode == mode {
            Ok(())
        } else {
            Err(LedgerError::Validation(format!(
                "{} is not available in {:?} mode",
                operation, self.settings.budget_mode
            )))
        }
    }

    // Expense operations

    /// Add an expense from a draft. An incomplete draft (blank date, category,
    /// or amount, or an amount that isn't a number) is silently dropped and
    /// `Ok(false)` is returned; state and disk are untouched.
    pub fn add_expense(&mut self, draft: &ExpenseDraft) -> LedgerResult<bool> {
        let Some(expense) = draft.complete() else {
            return Ok(false);
        };

        self.snapshot.expenses.push(expense);
        self.persist()?;
        Ok(true)
    }

    /// Replace the expense at `index` with a validated draft. Unlike add,
    /// an incomplete draft here is a user-facing validation error.
    pub fn edit_expense(&mut self, index: usize, draft: &ExpenseDraft) -> LedgerResult<()> {
        if index >= self.snapshot.expenses.len() {
            return Err(LedgerError::expense_not_found(index));
        }

        let expense = draft
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.snapshot.expenses[index] = expense;
        self.persist()
    }

    /// Remove the expense at `index`, preserving the order of the rest.
    pub fn delete_expense(&mut self, index: usize) -> LedgerResult<Expense> {
        if index >= self.snapshot.expenses.len() {
            return Err(LedgerError::expense_not_found(index));
        }

        let removed = self.snapshot.expenses.remove(index);
        self.persist()?;
        Ok(removed)
    }

    // Category operations

    /// Look up a category position by exact name match
    pub fn find_category(&self, name: &str) -> Option<usize> {
        self.snapshot.find_category(name)
    }

    /// Overwrite the raw budget string of the category at `index`
    /// (per-category mode). Any input is accepted, including non-numeric;
    /// coercion to a number happens only at aggregation time.
    pub fn set_category_budget(&mut self, index: usize, raw: &str) -> LedgerResult<()> {
        self.require_mode(BudgetMode::PerCategory, "Setting a category budget")?;

        let category = self
            .snapshot
            .categories
            .get_mut(index)
            .ok_or_else(|| LedgerError::category_not_found(format!("#{}", index)))?;

        category.budget = raw.to_string();
        self.persist()
    }

    /// Append a new category (trip-wide mode, behind the custom-categories
    /// capability). Blank names and exact duplicates are silently ignored;
    /// returns whether a category was added.
    pub fn add_category(&mut self, name: &str) -> LedgerResult<bool> {
        self.require_mode(BudgetMode::TripWide, "Adding categories")?;
        if !self.settings.allow_custom_categories {
            return Err(LedgerError::Validation(
                "Adding categories is disabled; enable allow_custom_categories".into(),
            ));
        }

        let candidate = Category::new(name);
        if !candidate.has_valid_name() || self.find_category(name).is_some() {
            return Ok(false);
        }

        self.snapshot.categories.push(candidate);
        self.persist()?;
        Ok(true)
    }

    // Trip-level operations (trip-wide mode)

    /// Set the trip-wide budget as a raw string
    pub fn set_trip_budget(&mut self, raw: &str) -> LedgerResult<()> {
        self.require_mode(BudgetMode::TripWide, "Setting the trip budget")?;
        self.snapshot.budget = raw.to_string();
        self.persist()
    }

    /// Set the descriptive trip date bounds
    pub fn set_trip_dates(&mut self, start: &str, end: &str) -> LedgerResult<()> {
        self.require_mode(BudgetMode::TripWide, "Setting trip dates")?;
        self.snapshot.start_date = start.to_string();
        self.snapshot.end_date = end.to_string();
        self.persist()
    }

    // Reset

    /// Restore the default category set, clear all expenses and trip-level
    /// fields, and erase the stored snapshot. The caller is responsible for
    /// confirming with the user first.
    pub fn reset(&mut self) -> LedgerResult<()> {
        self.snapshot = Snapshot::default();
        self.store.clear()
    }
}
