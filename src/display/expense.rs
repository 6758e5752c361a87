//! Expense display formatting

use crate::models::Expense;

/// Format the expense register as a numbered table. Indexes shown here are
/// the ones `expense edit` and `expense delete` accept.
pub fn format_expense_list(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses logged yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<12} {:<18} {:<24} {:>10}\n",
        "#", "Date", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(74));
    output.push('\n');

    for (i, expense) in expenses.iter().enumerate() {
        output.push_str(&format!(
            "{:>4}  {:<12} {:<18} {:<24} {}{:>9.2}\n",
            i,
            expense.date,
            expense.category,
            truncate(&expense.description, 24),
            currency,
            expense.amount
        ));
    }

    output
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
