//! Trip-level CLI commands (trip-wide mode)

use clap::Subcommand;

use crate::error::LedgerResult;
use crate::services::Ledger;

/// Trip subcommands
#[derive(Subcommand)]
pub enum TripCommands {
    /// Set the overall trip budget
    Budget {
        /// Budget amount (stored as entered; non-numeric counts as 0)
        amount: String,
    },

    /// Set the descriptive trip date bounds
    Dates {
        /// Start date
        start: String,
        /// End date
        end: String,
    },

    /// Show trip-level fields
    Show,
}

/// Handle a trip command
pub fn handle_trip_command(ledger: &mut Ledger, cmd: TripCommands) -> LedgerResult<()> {
    match cmd {
        TripCommands::Budget { amount } => {
            ledger.set_trip_budget(&amount)?;
            println!("Trip budget set to '{}'.", amount);
        }

        TripCommands::Dates { start, end } => {
            ledger.set_trip_dates(&start, &end)?;
            println!("Trip dates set: {} to {}.", start, end);
        }

        TripCommands::Show => {
            let snapshot = ledger.snapshot();
            let or_unset = |s: &str| {
                if s.is_empty() {
                    "(unset)".to_string()
                } else {
                    s.to_string()
                }
            };
            println!("Start date: {}", or_unset(&snapshot.start_date));
            println!("End date:   {}", or_unset(&snapshot.end_date));
            println!("Budget:     {}", or_unset(&snapshot.budget));
        }
    }

    Ok(())
}
