//! Display formatting for terminal output
//!
//! Plain-string formatting of expenses and categories for the CLI.

pub mod category;
pub mod expense;

pub use category::format_category_list;
pub use expense::format_expense_list;
