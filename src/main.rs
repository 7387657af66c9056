//! LunaCycle - command-line cycle tracker
//!
//! CLI entry point: resolves the data directory, dispatches the subcommand,
//! and keeps stdout clean for the status line.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use lunacycle::cli::display;
use lunacycle::cli::prompt::prompt_for_date;
use lunacycle::cycle::tracker::{parse_period_date, CycleSnapshot};
use lunacycle::store::state::{default_data_dir, StateLoad, StateStore, TrackerState};

/// Command-line cycle tracker
///
/// Tracks the start date of your last period and reports the current cycle
/// day, phase, and predicted next period.
#[derive(Parser, Debug)]
#[command(name = "lunacycle", version, about)]
struct Cli {
    /// Directory for the state file (~/.lunacycle by default)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current cycle day, phase, and predicted next period
    Status,
    /// Record a period start and show the refreshed status
    Mark {
        /// Start date (YYYY-MM-DD); defaults to now when omitted
        #[arg(long)]
        date: Option<String>,
    },
    /// Interactively ask for the last period start date and record it
    Init,
}

/// Load the stored state and print the status for `now`.
///
/// Missing state renders the unset message; a corrupt state file additionally
/// gets a warning on stderr before being treated as unset.
fn run_status(store: &StateStore, now: DateTime<Utc>) -> Result<()> {
    let load = store.load().context("Failed to load tracker state")?;
    if load == StateLoad::Corrupt {
        display::print_corrupt_warning(store.state_path());
    }
    let snapshot = load
        .state()
        .map(|state| CycleSnapshot::compute(state.last_period, now));
    display::print_status(snapshot.as_ref());
    Ok(())
}

/// Overwrite the stored period start, then re-render the status. The display
/// refresh always follows the save so the two cannot drift apart.
fn mark_period_start(
    store: &StateStore,
    last_period: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<()> {
    store
        .save(&TrackerState { last_period })
        .context("Failed to save tracker state")?;
    let snapshot = CycleSnapshot::compute(last_period, now);
    display::print_status(Some(&snapshot));
    Ok(())
}

/// Record a period start from `--date`, or `now` when no date was given.
fn run_mark(store: &StateStore, date: Option<&str>, now: DateTime<Utc>) -> Result<()> {
    let last_period = date.map_or(Ok(now), parse_period_date)?;
    mark_period_start(store, last_period, now)
}

/// Ask for the last period start on stdin, then store it through the same
/// save path `mark` uses. Prompt and echo go to stderr.
fn run_init(store: &StateStore) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stderr();
    let last_period = prompt_for_date(&mut input, &mut output)?;
    // The prompt can sit open for a while; take "now" only once it answers
    // so the rendered cycle day matches an immediately following status.
    mark_period_start(store, last_period, Utc::now())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Open the state store, creating the data directory on first use
    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let store = StateStore::new(&data_dir)?;

    display::print_header();

    // No subcommand means status, so a bare `lunacycle` shows the cycle
    match cli.command.unwrap_or(Command::Status) {
        Command::Status => run_status(&store, Utc::now()),
        Command::Mark { date } => run_mark(&store, date.as_deref(), Utc::now()),
        Command::Init => run_init(&store),
    }
}
