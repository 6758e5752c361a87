//! Budget CLI commands (per-category mode)

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::{LedgerError, LedgerResult};
use crate::reports::LedgerSummary;
use crate::services::Ledger;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a category's budget
    Set {
        /// Category name
        category: String,
        /// Budget amount (stored as entered; non-numeric counts as 0)
        amount: String,
    },

    /// Show budgets and totals
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(ledger: &mut Ledger, cmd: BudgetCommands) -> LedgerResult<()> {
    match cmd {
        BudgetCommands::Set { category, amount } => {
            let index = ledger
                .find_category(&category)
                .ok_or_else(|| LedgerError::category_not_found(&category))?;
            ledger.set_category_budget(index, &amount)?;
            println!("Budget for '{}' set to '{}'.", category, amount);
        }

        BudgetCommands::Show => {
            let currency = ledger.settings().currency_symbol.clone();
            print!(
                "{}",
                format_category_list(&ledger.snapshot().categories, ledger.mode(), &currency)
            );
            let summary = LedgerSummary::compute(ledger.snapshot(), ledger.mode());
            println!(
                "\nTotal budget: {}{:.2}   Spent: {}{:.2}   Remaining: {}{:.2}",
                currency,
                summary.total_budget,
                currency,
                summary.total_spent,
                currency,
                summary.remaining
            );
        }
    }

    Ok(())
}
