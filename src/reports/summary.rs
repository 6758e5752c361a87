//! Ledger summary report
//!
//! Pure aggregate functions over a snapshot plus a bundled [`LedgerSummary`]
//! for terminal display. Budget coercion follows one rule everywhere:
//! blank or unparseable numeric fields contribute 0, never an error.
//! Remaining balances may go negative; that is a display condition, not a
//! failure.

use crate::config::BudgetMode;
use crate::models::{Category, Snapshot};

/// Total budget for the trip.
///
/// Per-category mode sums every category's coerced budget; trip-wide mode
/// uses the single trip budget field.
pub fn total_budget(snapshot: &Snapshot, mode: BudgetMode) -> f64 {
    match mode {
        BudgetMode::PerCategory => snapshot
            .categories
            .iter()
            .map(Category::budget_amount)
            .sum(),
        BudgetMode::TripWide => snapshot.trip_budget_amount(),
    }
}

/// Sum of all expense amounts
pub fn total_spent(snapshot: &Snapshot) -> f64 {
    snapshot.expenses.iter().map(|e| e.amount).sum()
}

/// Budget minus spend; negative means the trip is over budget
pub fn remaining(snapshot: &Snapshot, mode: BudgetMode) -> f64 {
    total_budget(snapshot, mode) - total_spent(snapshot)
}

/// Sum of amounts of expenses whose category equals `name` (exact match)
pub fn per_category_spent(snapshot: &Snapshot, name: &str) -> f64 {
    snapshot
        .expenses
        .iter()
        .filter(|e| e.category == name)
        .map(|e| e.amount)
        .sum()
}

/// Category budget minus that category's spend (per-category mode)
pub fn category_remaining(snapshot: &Snapshot, category: &Category) -> f64 {
    category.budget_amount() - per_category_spent(snapshot, &category.name)
}

/// One slice of the spending-breakdown chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub name: String,
    pub value: f64,
}

/// Chart series: one slice per category with spend, zero-spend categories
/// excluded. Expenses whose category matches nothing contribute no slice.
pub fn chart_series(snapshot: &Snapshot) -> Vec<ChartSlice> {
    snapshot
        .categories
        .iter()
        .map(|c| ChartSlice {
            name: c.name.clone(),
            value: per_category_spent(snapshot, &c.name),
        })
        .filter(|slice| slice.value > 0.0)
        .collect()
}

/// Per-category breakdown row. `budget` and `remaining` are present only in
/// per-category mode; the textual breakdown includes zero-spend categories.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub name: String,
    pub budget: Option<f64>,
    pub spent: f64,
    pub remaining: Option<f64>,
}

/// All aggregates for one snapshot, bundled for display
#[derive(Debug, Clone)]
pub struct LedgerSummary {
    pub mode: BudgetMode,
    pub total_budget: f64,
    pub total_spent: f64,
    pub remaining: f64,
    pub rows: Vec<CategoryRow>,
    pub chart: Vec<ChartSlice>,
}

impl LedgerSummary {
    /// Compute every aggregate from the snapshot
    pub fn compute(snapshot: &Snapshot, mode: BudgetMode) -> Self {
        let rows = snapshot
            .categories
            .iter()
            .map(|c| {
                let spent = per_category_spent(snapshot, &c.name);
                let (budget, remaining) = match mode {
                    BudgetMode::PerCategory => (
                        Some(c.budget_amount()),
                        Some(category_remaining(snapshot, c)),
                    ),
                    BudgetMode::TripWide => (None, None),
                };
                CategoryRow {
                    name: c.name.clone(),
                    budget,
                    spent,
                    remaining,
                }
            })
            .collect();

        Self {
            mode,
            total_budget: total_budget(snapshot, mode),
            total_spent: total_spent(snapshot),
            remaining: remaining(snapshot, mode),
            rows,
            chart: chart_series(snapshot),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Trip Summary\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Budget: {}{:.2}\n",
            currency, self.total_budget
        ));
        output.push_str(&format!("Spent:        {}{:.2}\n", currency, self.total_spent));
        let over = if self.remaining < 0.0 {
            "  (over budget)"
        } else {
            ""
        };
        output.push_str(&format!(
            "Remaining:    {}{:.2}{}\n\n",
            currency, self.remaining, over
        ));

        // Textual breakdown: every category, including zero spend
        output.push_str("Category Spending\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for row in &self.rows {
            match (row.budget, row.remaining) {
                (Some(budget), Some(remaining)) => {
                    let flag = if remaining < 0.0 { " !" } else { "" };
                    output.push_str(&format!(
                        "  {:<18} spent {}{:>9.2}  budget {}{:>9.2}  remaining {}{:>9.2}{}\n",
                        row.name, currency, row.spent, currency, budget, currency, remaining, flag
                    ));
                }
                _ => {
                    output.push_str(&format!(
                        "  {:<18} spent {}{:>9.2}\n",
                        row.name, currency, row.spent
                    ));
                }
            }
        }

        // Bar chart over categories with spend
        output.push_str("\nSpending Breakdown\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.chart.is_empty() {
            output.push_str("  No spending yet.\n");
        } else {
            let max = self
                .chart
                .iter()
                .map(|s| s.value)
                .fold(f64::MIN, f64::max);
            for slice in &self.chart {
                let width = ((slice.value / max) * 30.0).round() as usize;
                output.push_str(&format!(
                    "  {:<18} {:<30} {}{:.2}\n",
                    slice.name,
                    "#".repeat(width.max(1)),
                    currency,
                    slice.value
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;

    fn expense(date: &str, category: &str, amount: f64) -> Expense {
        Expense {
            date: date.into(),
            category: category.into(),
            description: String::new(),
            amount,
        }
    }

    fn food_snapshot() -> Snapshot {
        // Default categories with {Food: 100} and one 40.00 Food expense
        let mut snapshot = Snapshot::default();
        let food = snapshot.find_category("Food").unwrap();
        snapshot.categories[food].budget = "100".into();
        snapshot.expenses.push(expense("2024-01-01", "Food", 40.0));
        snapshot
    }

    #[test]
    fn test_food_scenario() {
        let snapshot = food_snapshot();

        assert_eq!(per_category_spent(&snapshot, "Food"), 40.0);

        let food = &snapshot.categories[snapshot.find_category("Food").unwrap()];
        assert_eq!(category_remaining(&snapshot, food), 60.0);

        let chart = chart_series(&snapshot);
        assert!(chart.contains(&ChartSlice {
            name: "Food".into(),
            value: 40.0
        }));
    }

    #[test]
    fn test_total_budget_per_category_sums_coerced() {
        let mut snapshot = Snapshot::default();
        snapshot.categories[0].budget = "100".into();
        snapshot.categories[1].budget = "not a number".into();
        snapshot.categories[2].budget = "50.5".into();

        assert_eq!(total_budget(&snapshot, BudgetMode::PerCategory), 150.5);
    }

    #[test]
    fn test_total_budget_trip_wide() {
        let mut snapshot = Snapshot::default();
        snapshot.budget = "2500".into();
        snapshot.categories[0].budget = "999".into();

        assert_eq!(total_budget(&snapshot, BudgetMode::TripWide), 2500.0);

        snapshot.budget = String::new();
        assert_eq!(total_budget(&snapshot, BudgetMode::TripWide), 0.0);
    }

    #[test]
    fn test_total_spent_is_idempotent() {
        let snapshot = food_snapshot();
        assert_eq!(total_spent(&snapshot), total_spent(&snapshot));
        assert_eq!(total_spent(&snapshot), 40.0);
    }

    #[test]
    fn test_remaining_identity_including_negative() {
        let mut snapshot = food_snapshot();
        assert_eq!(remaining(&snapshot, BudgetMode::PerCategory), 60.0);

        snapshot.expenses.push(expense("2024-01-02", "Food", 90.0));
        let r = remaining(&snapshot, BudgetMode::PerCategory);
        assert_eq!(
            r,
            total_budget(&snapshot, BudgetMode::PerCategory) - total_spent(&snapshot)
        );
        assert!(r < 0.0);
    }

    #[test]
    fn test_chart_excludes_zero_spend_but_breakdown_keeps_it() {
        let snapshot = food_snapshot();

        let chart = chart_series(&snapshot);
        assert_eq!(chart.len(), 1);
        assert_eq!(chart[0].name, "Food");

        let summary = LedgerSummary::compute(&snapshot, BudgetMode::PerCategory);
        assert_eq!(summary.rows.len(), snapshot.categories.len());
        assert!(summary.rows.iter().any(|r| r.name == "Lodging" && r.spent == 0.0));
    }

    #[test]
    fn test_dangling_category_reference_contributes_no_slice() {
        let mut snapshot = Snapshot::default();
        snapshot
            .expenses
            .push(expense("2024-01-01", "Gone Category", 25.0));

        assert_eq!(total_spent(&snapshot), 25.0);
        assert!(chart_series(&snapshot).is_empty());
    }

    #[test]
    fn test_trip_wide_rows_have_no_budget_columns() {
        let mut snapshot = Snapshot::default();
        snapshot.budget = "500".into();
        snapshot.expenses.push(expense("2024-01-01", "Food", 40.0));

        let summary = LedgerSummary::compute(&snapshot, BudgetMode::TripWide);
        assert!(summary.rows.iter().all(|r| r.budget.is_none()));
        assert_eq!(summary.total_budget, 500.0);
        assert_eq!(summary.remaining, 460.0);
    }

    #[test]
    fn test_format_terminal_mentions_over_budget() {
        let mut snapshot = food_snapshot();
        snapshot.expenses.push(expense("2024-01-02", "Food", 500.0));

        let summary = LedgerSummary::compute(&snapshot, BudgetMode::PerCategory);
        let text = summary.format_terminal("$");
        assert!(text.contains("(over budget)"));
        assert!(text.contains("Food"));
    }

    #[test]
    fn test_format_terminal_empty_chart() {
        let summary = LedgerSummary::compute(&Snapshot::default(), BudgetMode::PerCategory);
        let text = summary.format_terminal("$");
        assert!(text.contains("No spending yet."));
    }
}
