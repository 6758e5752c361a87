//! Category model
//!
//! A category is a spending bucket identified by name. Its budget is stored
//! as the raw string the user entered; numeric coercion happens only when
//! aggregates are computed, so an invalid budget simply counts as zero.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount;

/// A spending category with an optional budget cap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CategoryRepr")]
pub struct Category {
    /// Category name, unique within the active set
    pub name: String,

    /// Raw budget string; blank or non-numeric input coerces to 0 when summed
    #[serde(default)]
    pub budget: String,
}

/// Accepts both the object form and the bare-string form older trip-wide
/// blobs used for their category lists.
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryRepr {
    Named {
        name: String,
        #[serde(default, deserialize_with = "amount::de_string_or_number")]
        budget: String,
    },
    Bare(String),
}

impl From<CategoryRepr> for Category {
    fn from(repr: CategoryRepr) -> Self {
        match repr {
            CategoryRepr::Named { name, budget } => Self { name, budget },
            CategoryRepr::Bare(name) => Self {
                name,
                budget: String::new(),
            },
        }
    }
}

impl Category {
    /// Create a new category with a blank budget
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            budget: String::new(),
        }
    }

    /// Create a category with a preset budget string
    pub fn with_budget(name: impl Into<String>, budget: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            budget: budget.into(),
        }
    }

    /// The budget coerced to a number (blank/invalid treated as 0)
    pub fn budget_amount(&self) -> f64 {
        amount::coerce(&self.budget)
    }

    /// A category with no name is invalid
    pub fn has_valid_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// The default category set for a fresh trip
    pub fn default_set() -> Vec<Category> {
        [
            "Cruise",
            "Lodging",
            "Food",
            "Transportation",
            "Entertainment",
            "Shopping",
            "Misc",
        ]
        .into_iter()
        .map(Category::new)
        .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
