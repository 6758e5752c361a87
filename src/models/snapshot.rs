//! Snapshot: the unit of persistence
//!
//! A snapshot is the complete serializable state of one trip's ledger:
//! categories, expenses, and (in trip-wide mode) the overall budget and date
//! bounds. The blob layout uses camelCase keys and omits trip-level fields
//! when blank, so per-category snapshots contain only categories and
//! expenses.

use serde::{Deserialize, Serialize};

use super::amount;
use super::category::Category;
use super::expense::Expense;

/// Complete ledger state for one trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Trip start date, free text, descriptive only
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_date: String,

    /// Trip end date, free text, descriptive only
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end_date: String,

    /// Trip-wide budget as a raw string (older blobs may store a number)
    #[serde(
        default,
        deserialize_with = "amount::de_string_or_number",
        skip_serializing_if = "String::is_empty"
    )]
    pub budget: String,

    /// Active category set; a missing key falls back to the default set
    #[serde(default = "Category::default_set")]
    pub categories: Vec<Category>,

    /// Logged expenses in insertion order
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            start_date: String::new(),
            end_date: String::new(),
            budget: String::new(),
            categories: Category::default_set(),
            expenses: Vec::new(),
        }
    }
}

impl Snapshot {
    /// Look up a category position by exact name match
    pub fn find_category(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }

    /// The trip-wide budget coerced to a number (blank treated as 0)
    pub fn trip_budget_amount(&self) -> f64 {
        amount::coerce(&self.budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot() {
        let snapshot = Snapshot::default();
        assert_eq!(snapshot.categories.len(), 7);
        assert!(snapshot.expenses.is_empty());
        assert!(snapshot.budget.is_empty());
    }

    #[test]
    fn test_missing_categories_key_falls_back_to_defaults() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"expenses": []}"#).unwrap();
        assert_eq!(snapshot.categories.len(), 7);
    }

    #[test]
    fn test_blank_trip_fields_omitted_from_json() {
        let value = serde_json::to_value(Snapshot::default()).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("startDate"));
        assert!(!obj.contains_key("endDate"));
        assert!(!obj.contains_key("budget"));
        assert!(obj.contains_key("categories"));
        assert!(obj.contains_key("expenses"));
    }

    #[test]
    fn test_trip_wide_blob_round_trip() {
        let mut snapshot = Snapshot::default();
        snapshot.start_date = "2024-06-01".into();
        snapshot.end_date = "2024-06-14".into();
        snapshot.budget = "2500".into();
        snapshot.expenses.push(Expense {
            date: "2024-06-02".into(),
            category: "Food".into(),
            description: "dinner".into(),
            amount: 62.4,
        });

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("startDate"));

        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }

    #[test]
    fn test_legacy_trip_wide_blob() {
        // Older trip-wide blobs stored bare category names and a numeric budget
        let json = r#"{
            "startDate": "2024-06-01",
            "endDate": "2024-06-14",
            "budget": 2500,
            "categories": ["Food", "Lodging"],
            "expenses": [{"date": "2024-06-02", "category": "Food", "description": "", "amount": 30}]
        }"#;

        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.budget, "2500");
        assert_eq!(snapshot.trip_budget_amount(), 2500.0);
        assert_eq!(snapshot.categories.len(), 2);
        assert_eq!(snapshot.categories[0].name, "Food");
        assert_eq!(snapshot.expenses[0].amount, 30.0);
    }

    #[test]
    fn test_find_category_exact_match() {
        let snapshot = Snapshot::default();
        assert_eq!(snapshot.find_category("Food"), Some(2));
        assert_eq!(snapshot.find_category("food"), None);
        assert_eq!(snapshot.find_category("Flights"), None);
    }
}
