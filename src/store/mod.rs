//! Persistence
//!
//! This module provides the on-disk store for the tracked state.

pub mod state;

pub use state::{default_data_dir, StateLoad, StateStore, TrackerState};
