//! LunaCycle - command-line cycle tracker
//!
//! Tracks a single anchor date (the start of the last recorded period) in a
//! small on-disk state file and derives the current cycle day, phase label,
//! and predicted next period from it.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod cycle;
pub mod store;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use cli::display::{render_status, UNSET_MESSAGE};
pub use cli::prompt::prompt_for_date;
pub use cycle::phase::{phase_for_day, CyclePhase};
pub use cycle::tracker::{
    cycle_day, next_period, parse_period_date, CycleSnapshot, CYCLE_LENGTH_DAYS,
};
pub use store::state::{default_data_dir, StateLoad, StateStore, TrackerState};
