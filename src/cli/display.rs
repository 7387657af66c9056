//! Terminal status display
//!
//! Renders the tracked cycle as human-readable terminal output. The status
//! message itself goes to stdout; headers, notes, and warnings go to stderr
//! so stdout remains clean for piping.

use std::path::Path;

use colored::Colorize;

use crate::cycle::tracker::CycleSnapshot;

/// Fixed message shown while no period start has been recorded.
pub const UNSET_MESSAGE: &str = "Run `lunacycle mark` to record your last period start.";

/// Build the one-line status message for the given snapshot.
///
/// Pure: the same snapshot always renders the same string. `None` renders
/// the fixed unset prompt.
#[must_use]
pub fn render_status(snapshot: Option<&CycleSnapshot>) -> String {
    snapshot.map_or_else(
        || UNSET_MESSAGE.to_string(),
        |snap| {
            format!(
                "Day {} — {} {}. Next period: {}",
                snap.day,
                snap.phase.label(),
                snap.phase.glyph(),
                snap.next_period.format("%a %b %d %Y")
            )
        },
    )
}

/// Print the tracker header at the start of a status render.
pub fn print_header() {
    eprintln!("\n{} {}", "===".bold().cyan(), "LunaCycle".bold().cyan());
    eprintln!("{}", "─".repeat(50).dimmed());
}

/// Print the status message, plus the phase care note when state is set.
pub fn print_status(snapshot: Option<&CycleSnapshot>) {
    println!("{}", render_status(snapshot));
    if let Some(snap) = snapshot {
        eprintln!("  {} {}", "Note:".dimmed(), snap.phase.care_note().dimmed());
    }
}

/// Warn that the state file existed but could not be read as state.
pub fn print_corrupt_warning(state_path: &Path) {
    eprintln!(
        "  {} Stored state in {} could not be read; treating it as unset.",
        "⚠".yellow().bold(),
        state_path.display()
    );
}
