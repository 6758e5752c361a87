//! Category display formatting

use crate::config::BudgetMode;
use crate::models::Category;

/// Format the category list. Per-category mode shows each budget column;
/// trip-wide mode lists names only.
pub fn format_category_list(categories: &[Category], mode: BudgetMode, currency: &str) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = String::new();

    match mode {
        BudgetMode::PerCategory => {
            output.push_str(&format!("{:<20} {:>12}\n", "Category", "Budget"));
            output.push_str(&"-".repeat(33));
            output.push('\n');
            for category in categories {
                let budget = if category.budget.trim().is_empty() {
                    "-".to_string()
                } else {
                    format!("{}{:.2}", currency, category.budget_amount())
                };
                output.push_str(&format!("{:<20} {:>12}\n", category.name, budget));
            }
        }
        BudgetMode::TripWide => {
            output.push_str("Categories:\n");
            for category in categories {
                output.push_str(&format!("  {}\n", category.name));
            }
        }
    }

    output
}
