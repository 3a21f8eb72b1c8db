//! Per-type availability estimates.
//!
//! Answers "how many sessions of each type would fit if the whole remaining
//! free time were devoted to that type alone". An informational upper bound,
//! not a placement guarantee: the planner may still place fewer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::gap::free_gaps;
use crate::config::SchedulingConfiguration;
use crate::session::{BusyTimeSlot, SessionCounts, SessionType};

/// Free-time summary for a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    /// Total free minutes between `search_start` and the day end.
    pub available_minutes: i64,
    /// Independent upper bound per session type.
    pub possible_sessions: SessionCounts,
}

/// Compute free minutes and the per-type session fit counts.
///
/// Each type's count is summed per gap: a gap shorter than one session plus
/// its rest contributes nothing for that type, even when the day's total free
/// minutes would suggest otherwise. A short gap can still raise the count of
/// a shorter type.
pub fn availability(
    busy: &[BusyTimeSlot],
    search_start: DateTime<Utc>,
    day_end: DateTime<Utc>,
    config: &SchedulingConfiguration,
) -> Availability {
    let gaps = free_gaps(busy, search_start, day_end);
    let available_minutes: i64 = gaps.iter().map(|gap| gap.duration_minutes()).sum();

    let mut possible_sessions = SessionCounts::default();
    for session_type in SessionType::all() {
        let block = (config.duration_for(session_type) + config.rest_for(session_type)) as i64;
        let fits: i64 = gaps.iter().map(|gap| gap.duration_minutes() / block).sum();
        possible_sessions.add(session_type, fits as u32);
    }

    Availability {
        available_minutes,
        possible_sessions,
    }
}
