//! Cycle phase classification
//!
//! Maps a cycle day to one of five phase labels via a fixed ascending
//! boundary table. The lookup is total: every integer day, including
//! negative ones, maps to exactly one phase.

use std::fmt;

/// One of the five phases of the tracked cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CyclePhase {
    /// Days 0-5 (and any negative day)
    Menstrual,
    /// Days 6-14
    Follicular,
    /// Days 15-17
    Ovulation,
    /// Days 18-28
    Luteal,
    /// Day 29 onwards
    NewCycleApproaching,
}

impl CyclePhase {
    /// Human-readable phase label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Menstrual => "Menstrual phase",
            Self::Follicular => "Follicular phase",
            Self::Ovulation => "Ovulation phase",
            Self::Luteal => "Luteal phase",
            Self::NewCycleApproaching => "New cycle approaching",
        }
    }

    /// Decorative glyph shown next to the label in terminal output.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Menstrual => "🩸",
            Self::Follicular => "🌱",
            Self::Ovulation => "🌼",
            Self::Luteal => "🌙",
            Self::NewCycleApproaching => "🔄",
        }
    }

    /// Short care note with typical symptoms and advice for the phase.
    #[must_use]
    pub const fn care_note(self) -> &'static str {
        match self {
            Self::Menstrual => {
                "Cramps, bloating, mood swings, and fatigue are common right now. \
                 Stay hydrated and get plenty of rest."
            }
            Self::Follicular => {
                "Energy and mood tend to pick up during the follicular phase. \
                 A good window for personal goals and self-care."
            }
            Self::Ovulation => {
                "Around ovulation some people notice heightened senses and feel \
                 more social and outgoing."
            }
            Self::Luteal => {
                "Breast tenderness, irritability, and food cravings are typical. \
                 A balanced diet and keeping stress low can take the edge off."
            }
            Self::NewCycleApproaching => {
                "A new cycle is due soon; a mix of symptoms from earlier phases \
                 can show up. Tracking how you feel makes the next cycle easier to read."
            }
        }
    }
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a cycle day into a phase.
///
/// Tiers are checked top-down with inclusive upper bounds, so the first
/// matching tier wins. Negative days satisfy `day <= 5` and land in
/// [`CyclePhase::Menstrual`].
#[must_use]
pub const fn phase_for_day(day: i64) -> CyclePhase {
    if day <= 5 {
        CyclePhase::Menstrual
    } else if day <= 14 {
        CyclePhase::Follicular
    } else if day <= 17 {
        CyclePhase::Ovulation
    } else if day <= 28 {
        CyclePhase::Luteal
    } else {
        CyclePhase::NewCycleApproaching
    }
}
