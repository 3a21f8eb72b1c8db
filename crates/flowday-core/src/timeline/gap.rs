//! Time gap detection between busy calendar slots.
//!
//! Subtracts a day's busy intervals from `[search_start, day_end)` and
//! returns the remaining free gaps in chronological order. Overlapping and
//! adjacent busy slots are coalesced by the sweep.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::BusyTimeSlot;

/// A contiguous free interval `[start, end)` on the target day.
///
/// Derived value; recomputed whenever availability is requested, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeGap {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl TimeGap {
    /// Create a new gap. Returns `None` for empty or inverted spans.
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Option<Self> {
        if end_time <= start_time {
            return None;
        }
        Some(Self {
            start_time,
            end_time,
        })
    }

    /// Get duration in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Check if this gap can hold a session of the given length.
    pub fn can_fit(&self, minutes: i64) -> bool {
        self.duration_minutes() >= minutes
    }
}

/// Detector for free gaps in a day's schedule.
pub struct GapFinder {
    /// Gaps shorter than this are discarded (in minutes).
    min_gap_minutes: i64,
}

impl GapFinder {
    /// Create a finder that reports every positive gap. Short gaps matter:
    /// flexible side placement can still use them.
    pub fn new() -> Self {
        Self { min_gap_minutes: 1 }
    }

    /// Set the minimum gap duration.
    pub fn with_min_gap(mut self, minutes: i64) -> Self {
        self.min_gap_minutes = minutes;
        self
    }

    /// Find free gaps between `search_start` and `day_end`.
    ///
    /// Busy slots may overlap each other and extend past either boundary;
    /// the sweep clips them to the search window.
    ///
    /// # Returns
    /// Gaps sorted by start time.
    pub fn find_gaps(
        &self,
        busy: &[BusyTimeSlot],
        search_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> Vec<TimeGap> {
        let mut sorted: Vec<&BusyTimeSlot> = busy
            .iter()
            .filter(|slot| slot.end_time > search_start && slot.start_time < day_end)
            .collect();
        sorted.sort_by_key(|slot| slot.start_time);

        let mut gaps = Vec::new();
        let mut cursor = search_start;

        for slot in sorted {
            if slot.start_time > cursor {
                if let Some(gap) = TimeGap::new(cursor, slot.start_time.min(day_end)) {
                    if gap.duration_minutes() >= self.min_gap_minutes {
                        gaps.push(gap);
                    }
                }
            }
            if slot.end_time > cursor {
                cursor = slot.end_time.min(day_end);
            }
        }

        if cursor < day_end {
            if let Some(gap) = TimeGap::new(cursor, day_end) {
                if gap.duration_minutes() >= self.min_gap_minutes {
                    gaps.push(gap);
                }
            }
        }

        gaps
    }
}

impl Default for GapFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to find gaps with default settings.
pub fn free_gaps(
    busy: &[BusyTimeSlot],
    search_start: DateTime<Utc>,
    day_end: DateTime<Utc>,
) -> Vec<TimeGap> {
    GapFinder::new().find_gaps(busy, search_start, day_end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, hour, minute, 0).unwrap()
    }

    fn slot(start: DateTime<Utc>, end: DateTime<Utc>) -> BusyTimeSlot {
        BusyTimeSlot::new("b", "Busy", start, end)
    }

    #[test]
    fn subtracts_busy_slots() {
        let busy = vec![
            slot(at(9, 0), at(10, 0)),
            slot(at(11, 0), at(11, 30)),
        ];
        let gaps = free_gaps(&busy, at(8, 0), at(18, 0));
        assert_eq!(
            gaps,
            vec![
                TimeGap::new(at(8, 0), at(9, 0)).unwrap(),
                TimeGap::new(at(10, 0), at(11, 0)).unwrap(),
                TimeGap::new(at(11, 30), at(18, 0)).unwrap(),
            ]
        );
    }

    #[test]
    fn empty_day_is_one_gap() {
        let gaps = free_gaps(&[], at(8, 0), at(18, 0));
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].duration_minutes(), 600);
    }

    #[test]
    fn overlapping_slots_are_coalesced() {
        let busy = vec![
            slot(at(9, 0), at(10, 30)),
            slot(at(10, 0), at(11, 0)),
            slot(at(11, 0), at(11, 30)),
        ];
        let gaps = free_gaps(&busy, at(8, 0), at(12, 0));
        assert_eq!(
            gaps,
            vec![
                TimeGap::new(at(8, 0), at(9, 0)).unwrap(),
                TimeGap::new(at(11, 30), at(12, 0)).unwrap(),
            ]
        );
    }

    #[test]
    fn slots_outside_window_are_ignored() {
        let busy = vec![
            slot(at(6, 0), at(7, 0)),
            slot(at(19, 0), at(20, 0)),
        ];
        let gaps = free_gaps(&busy, at(8, 0), at(18, 0));
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].start_time, at(8, 0));
    }

    #[test]
    fn slot_covering_window_start_clips_first_gap() {
        let busy = vec![slot(at(7, 30), at(8, 30))];
        let gaps = free_gaps(&busy, at(8, 0), at(10, 0));
        assert_eq!(gaps, vec![TimeGap::new(at(8, 30), at(10, 0)).unwrap()]);
    }

    #[test]
    fn fully_busy_window_has_no_gaps() {
        let busy = vec![slot(at(7, 0), at(19, 0))];
        assert!(free_gaps(&busy, at(8, 0), at(18, 0)).is_empty());
    }

    #[test]
    fn min_gap_filter() {
        let busy = vec![slot(at(8, 10), at(18, 0))];
        let finder = GapFinder::new().with_min_gap(15);
        assert!(finder.find_gaps(&busy, at(8, 0), at(18, 0)).is_empty());
    }

    #[test]
    fn zero_length_gap_is_rejected() {
        let start = at(9, 0);
        assert!(TimeGap::new(start, start).is_none());
        assert!(TimeGap::new(start, start - Duration::minutes(1)).is_none());
    }
}
