//! CLI output and interaction
//!
//! Provides the human-readable terminal rendering of the tracked cycle and
//! the interactive first-run date prompt.

pub mod display;
pub mod prompt;

pub use display::render_status;
pub use prompt::prompt_for_date;
