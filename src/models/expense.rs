//! Expense model and draft validation
//!
//! An [`Expense`] is a confirmed record with a numeric amount. An
//! [`ExpenseDraft`] is the raw user input handed to add/edit; the two
//! operations validate it with different strictness: add silently ignores an
//! incomplete draft, while edit surfaces a validation error.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount;

/// A logged expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Calendar date in string form (non-empty, otherwise unvalidated)
    pub date: String,

    /// Category name this expense counts against (matched by exact string)
    pub category: String,

    /// Free-text description, optional
    #[serde(default)]
    pub description: String,

    /// Amount, always stored as a number
    pub amount: f64,
}

/// Raw user input for an expense, prior to validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

impl ExpenseDraft {
    /// Validate the draft, producing a confirmed [`Expense`] with the amount
    /// parsed to a number.
    pub fn validate(&self) -> Result<Expense, ExpenseValidationError> {
        if self.date.trim().is_empty() {
            return Err(ExpenseValidationError::MissingDate);
        }
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::MissingCategory);
        }
        if self.amount.trim().is_empty() {
            return Err(ExpenseValidationError::MissingAmount);
        }
        let amount = amount::parse_strict(&self.amount)
            .ok_or_else(|| ExpenseValidationError::AmountNotNumeric(self.amount.clone()))?;

        Ok(Expense {
            date: self.date.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            amount,
        })
    }

    /// Lenient form of [`validate`](Self::validate) used by the add path,
    /// which drops incomplete drafts without reporting why.
    pub fn complete(&self) -> Option<Expense> {
        self.validate().ok()
    }
}

/// Validation failures for expense drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingDate,
    MissingCategory,
    MissingAmount,
    AmountNotNumeric(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDate => write!(f, "Date is required"),
            Self::MissingCategory => write!(f, "Category is required"),
            Self::MissingAmount => write!(f, "Amount is required"),
            Self::AmountNotNumeric(raw) => write!(f, "Amount is not a number: '{}'", raw),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
