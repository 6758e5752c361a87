//! Reset command
//!
//! Reset is two-phase: the handler asks for confirmation (unless `--yes` was
//! given) and only a confirmed answer reaches the ledger. Cancelling leaves
//! both memory and disk untouched.

use std::io::{self, BufRead, Write};

use crate::error::LedgerResult;
use crate::services::Ledger;

/// Handle the reset command
pub fn handle_reset_command(ledger: &mut Ledger, yes: bool) -> LedgerResult<()> {
    if !yes {
        let stdin = io::stdin();
        let mut input = String::new();
        print!(
            "This will delete all trip data from this device.\n\
             Are you sure you want to reset? [y/N] "
        );
        io::stdout().flush()?;
        stdin.lock().read_line(&mut input)?;

        if !is_affirmative(&input) {
            println!("Reset cancelled.");
            return Ok(());
        }
    }

    ledger.reset()?;
    println!("Ledger reset: default categories restored, all expenses cleared.");
    Ok(())
}

/// Only an explicit yes confirms; anything else cancels.
fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
