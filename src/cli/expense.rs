//! Expense CLI commands

use clap::Subcommand;

use crate::display::format_expense_list;
use crate::error::LedgerResult;
use crate::models::ExpenseDraft;
use crate::services::Ledger;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Log a new expense
    Add {
        /// Category name
        category: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// Expense date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Replace a logged expense (index from 'expense list')
    Edit {
        /// Expense index
        index: usize,
        /// Expense date
        #[arg(short, long)]
        date: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Amount
        #[arg(short, long)]
        amount: String,
        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Delete a logged expense by index
    Delete {
        /// Expense index
        index: usize,
    },

    /// List logged expenses
    List,
}

/// Handle an expense command
pub fn handle_expense_command(ledger: &mut Ledger, cmd: ExpenseCommands) -> LedgerResult<()> {
    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            date,
            description,
        } => {
            let draft = ExpenseDraft {
                date: date.unwrap_or_else(today),
                category,
                description,
                amount,
            };

            if ledger.add_expense(&draft)? {
                if let Some(expense) = ledger.snapshot().expenses.last() {
                    print_added(ledger, expense);
                }
            } else {
                println!("Nothing added (date, category, and a numeric amount are required).");
            }
        }

        ExpenseCommands::Edit {
            index,
            date,
            category,
            amount,
            description,
        } => {
            let draft = ExpenseDraft {
                date,
                category,
                description,
                amount,
            };
            ledger.edit_expense(index, &draft)?;
            println!("Expense #{} updated.", index);
        }

        ExpenseCommands::Delete { index } => {
            let removed = ledger.delete_expense(index)?;
            println!(
                "Deleted expense: {} | {} | {}{:.2}",
                removed.date,
                removed.category,
                ledger.settings().currency_symbol,
                removed.amount
            );
        }

        ExpenseCommands::List => {
            print!(
                "{}",
                format_expense_list(
                    &ledger.snapshot().expenses,
                    &ledger.settings().currency_symbol
                )
            );
        }
    }

    Ok(())
}

fn print_added(ledger: &Ledger, expense: &crate::models::Expense) {
    println!(
        "Added expense: {} | {} | {}{:.2}",
        expense.date,
        expense.category,
        ledger.settings().currency_symbol,
        expense.amount
    );
    if ledger.find_category(&expense.category).is_none() {
        println!(
            "Note: '{}' matches no category; it won't appear in the breakdown.",
            expense.category
        );
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
