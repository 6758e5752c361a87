//! CLI command handlers
//!
//! Each noun gets its own subcommand enum and handler. Handlers dispatch user
//! intents to the ledger service and format results for the terminal.

pub mod budget;
pub mod category;
pub mod expense;
pub mod reset;
pub mod trip;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use reset::handle_reset_command;
pub use trip::{handle_trip_command, TripCommands};
