//! Session types and calendar-facing value objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Kind of session the engine can place on a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Work,
    Side,
    Planning,
    Deep,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Side => "side",
            Self::Planning => "planning",
            Self::Deep => "deep",
        }
    }

    /// Hashtag embedded in event notes so previously created sessions can be
    /// recognized on later runs. Matched case-insensitively as a substring.
    pub fn hashtag(&self) -> &'static str {
        match self {
            Self::Work => "#work",
            Self::Side => "#side",
            Self::Planning => "#plan",
            Self::Deep => "#deep",
        }
    }

    /// Default session length in minutes.
    pub fn default_duration_minutes(&self) -> u32 {
        match self {
            Self::Work => 45,
            Self::Side => 30,
            Self::Planning => 15,
            Self::Deep => 90,
        }
    }

    /// All session types, in display order.
    pub fn all() -> [SessionType; 4] {
        [Self::Work, Self::Side, Self::Planning, Self::Deep]
    }
}

/// Per-type session tally used for quotas, availability estimates and
/// schedule outcome reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCounts {
    pub work: u32,
    pub side: u32,
    pub planning: u32,
    pub deep: u32,
}

impl SessionCounts {
    pub fn get(&self, session_type: SessionType) -> u32 {
        match session_type {
            SessionType::Work => self.work,
            SessionType::Side => self.side,
            SessionType::Planning => self.planning,
            SessionType::Deep => self.deep,
        }
    }

    pub fn add(&mut self, session_type: SessionType, count: u32) {
        match session_type {
            SessionType::Work => self.work += count,
            SessionType::Side => self.side += count,
            SessionType::Planning => self.planning += count,
            SessionType::Deep => self.deep += count,
        }
    }

    pub fn total(&self) -> u32 {
        self.work + self.side + self.planning + self.deep
    }
}

/// A session placed by the engine, either projected (preview) or handed to
/// the calendar collaborator for materialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledSession {
    pub id: String,
    pub session_type: SessionType,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub calendar_name: String,
    /// Carries the type hashtag when written to the calendar.
    pub notes: Option<String>,
}

impl ScheduledSession {
    /// Create a new session.
    ///
    /// # Panics
    /// Panics if `end_time <= start_time`. Use [`try_new`](Self::try_new)
    /// for a non-panicking version.
    pub fn new(
        session_type: SessionType,
        title: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        calendar_name: impl Into<String>,
    ) -> Self {
        Self::try_new(session_type, title, start_time, end_time, calendar_name)
            .expect("ScheduledSession::new: end_time must be greater than start_time")
    }

    /// Create a new session, returning a Result.
    ///
    /// # Errors
    /// Returns an error if `end_time <= start_time`.
    pub fn try_new(
        session_type: SessionType,
        title: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        calendar_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if end_time <= start_time {
            return Err(ValidationError::InvalidTimeRange {
                start: start_time,
                end: end_time,
            });
        }
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            session_type,
            title: title.into(),
            start_time,
            end_time,
            calendar_name: calendar_name.into(),
            notes: None,
        })
    }

    /// Set the notes field.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Get duration in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Check if this session overlaps a time range.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_time < end && self.end_time > start
    }
}

/// An existing calendar event occupying time on the target day.
///
/// Treated as immutable input; the engine never mutates busy slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusyTimeSlot {
    pub id: String,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub notes: Option<String>,
    pub calendar_name: String,
}

impl BusyTimeSlot {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start_time,
            end_time,
            notes: None,
            calendar_name: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_calendar(mut self, calendar_name: impl Into<String>) -> Self {
        self.calendar_name = calendar_name.into();
        self
    }

    /// Get duration in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Check if this slot overlaps a time range.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_time < end && self.end_time > start
    }
}
