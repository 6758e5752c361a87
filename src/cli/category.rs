//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::LedgerResult;
use crate::services::Ledger;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Add a new category (trip-wide mode, requires allow_custom_categories)
    Add {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(ledger: &mut Ledger, cmd: CategoryCommands) -> LedgerResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!(
                "{}",
                format_category_list(
                    &ledger.snapshot().categories,
                    ledger.mode(),
                    &ledger.settings().currency_symbol
                )
            );
        }

        CategoryCommands::Add { name } => {
            if ledger.add_category(&name)? {
                println!("Added category '{}'.", name);
            } else {
                println!("Category set unchanged (blank or duplicate name).");
            }
        }
    }

    Ok(())
}
