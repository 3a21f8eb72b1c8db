//! Counting sessions already present on the calendar.
//!
//! Events created by earlier runs carry a type hashtag in their notes
//! (`#work`, `#side`, `#plan`, `#deep`). Counting them lets aware-mode
//! scheduling work against the remaining daily quota instead of the full
//! target. Pure input normalization; the busy slots are fetched by the
//! calendar collaborator beforehand.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::session::{BusyTimeSlot, SessionCounts, SessionType};

/// Sessions recognized on the target day, by type, plus their titles.
///
/// Titles feed custom task-list consumption: a queued task title already on
/// the calendar is skipped rather than scheduled twice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExistingSessions {
    pub counts: SessionCounts,
    pub titles: HashSet<String>,
}

impl ExistingSessions {
    /// True when no session of any type was recognized.
    pub fn is_empty(&self) -> bool {
        self.counts.total() == 0
    }
}

/// Count hashtag-marked sessions among `busy` that start on `day`.
///
/// The hashtag is matched case-insensitively as a substring of the notes
/// field. A slot whose notes carry several hashtags counts toward each
/// matching type.
pub fn count_existing(busy: &[BusyTimeSlot], day: NaiveDate) -> ExistingSessions {
    let mut existing = ExistingSessions::default();

    for slot in busy {
        if slot.start_time.date_naive() != day {
            continue;
        }
        let notes = match &slot.notes {
            Some(notes) => notes.to_lowercase(),
            None => continue,
        };

        let mut matched = false;
        for session_type in SessionType::all() {
            if notes.contains(session_type.hashtag()) {
                existing.counts.add(session_type, 1);
                matched = true;
            }
        }
        if matched {
            existing.titles.insert(slot.title.clone());
        }
    }

    existing
}
