//! Cycle tracking domain
//!
//! This module handles cycle date arithmetic and phase classification.

pub mod phase;
pub mod tracker;
