//! Free-time math over a single day.
//!
//! This module provides:
//! - Gap detection: interval subtraction of busy slots from the day
//! - Availability: per-type upper bounds on how many sessions could fit

mod availability;
mod gap;

pub use availability::{availability, Availability};
pub use gap::{free_gaps, GapFinder, TimeGap};
