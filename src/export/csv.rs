//! CSV Export functionality
//!
//! Exports the expense register to CSV format.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Snapshot;

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(snapshot: &Snapshot, writer: &mut W) -> LedgerResult<()> {
    writeln!(writer, "Date,Category,Description,Amount")
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for expense in &snapshot.expenses {
        writeln!(
            writer,
            "{},{},{},{:.2}",
            escape_csv(&expense.date),
            escape_csv(&expense.category),
            escape_csv(&expense.description),
            expense.amount
        )
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a CSV field if needed
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
