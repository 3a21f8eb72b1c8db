//! Scheduling configuration.
//!
//! The engine treats configuration as an immutable value passed per
//! invocation. Presets and UI layers own mutation; nothing in the core keeps
//! process-wide settings.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::pattern::SchedulePattern;
use crate::session::SessionType;

/// Deep session configuration.
///
/// Deep sessions are interleaved into the placed sequence after every
/// `inject_after_every` non-deep sessions rather than occupying a slot in the
/// work/side pattern itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeepSessionConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_deep_count")]
    pub session_count: u32,
    #[serde(default = "default_inject_after_every")]
    pub inject_after_every: u32,
    #[serde(default = "default_deep_name")]
    pub name: String,
    #[serde(default = "default_deep_duration")]
    pub duration_minutes: u32,
    #[serde(default = "default_rest")]
    pub rest_minutes: u32,
    #[serde(default = "default_calendar")]
    pub calendar_name: String,
}

impl Default for DeepSessionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            session_count: default_deep_count(),
            inject_after_every: default_inject_after_every(),
            name: default_deep_name(),
            duration_minutes: default_deep_duration(),
            rest_minutes: default_rest(),
            calendar_name: default_calendar(),
        }
    }
}

/// Target calendar per session type. Deep sessions carry their own calendar
/// on [`DeepSessionConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarMapping {
    #[serde(default = "default_calendar")]
    pub work: String,
    #[serde(default = "default_calendar")]
    pub side: String,
    #[serde(default = "default_calendar")]
    pub planning: String,
}

impl Default for CalendarMapping {
    fn default() -> Self {
        Self {
            work: default_calendar(),
            side: default_calendar(),
            planning: default_calendar(),
        }
    }
}

/// Aggregate engine input: counts, durations, rests, pattern parameters and
/// behavior flags for one day of scheduling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingConfiguration {
    #[serde(default = "default_work_count")]
    pub work_session_count: u32,
    #[serde(default = "default_side_count")]
    pub side_session_count: u32,
    #[serde(default = "default_work_name")]
    pub work_name: String,
    #[serde(default = "default_side_name")]
    pub side_name: String,
    #[serde(default = "default_work_duration")]
    pub work_duration_minutes: u32,
    #[serde(default = "default_side_duration")]
    pub side_duration_minutes: u32,
    #[serde(default = "default_rest")]
    pub work_rest_minutes: u32,
    #[serde(default = "default_rest")]
    pub side_rest_minutes: u32,

    /// Schedule one planning session at the head of the day.
    #[serde(default = "default_true")]
    pub schedule_planning: bool,
    #[serde(default = "default_planning_name")]
    pub planning_name: String,
    #[serde(default = "default_planning_duration")]
    pub planning_duration_minutes: u32,

    #[serde(default)]
    pub pattern: SchedulePattern,
    #[serde(default = "default_work_per_cycle")]
    pub work_per_cycle: u32,
    #[serde(default = "default_side_per_cycle")]
    pub side_per_cycle: u32,
    /// Custom-ratio pattern starts with a side turn.
    #[serde(default)]
    pub side_first: bool,

    /// Subtract sessions already on the calendar from the daily quota.
    #[serde(default = "default_true")]
    pub aware_of_existing: bool,
    /// Allow shortened side sessions when no gap fits a full one.
    #[serde(default = "default_true")]
    pub flexible_side_scheduling: bool,

    /// Draw session titles from the per-type task lists below.
    #[serde(default)]
    pub use_custom_tasks: bool,
    #[serde(default)]
    pub work_tasks: Vec<String>,
    #[serde(default)]
    pub side_tasks: Vec<String>,

    #[serde(default)]
    pub deep: DeepSessionConfig,
    #[serde(default)]
    pub calendars: CalendarMapping,
}

impl Default for SchedulingConfiguration {
    fn default() -> Self {
        Self {
            work_session_count: default_work_count(),
            side_session_count: default_side_count(),
            work_name: default_work_name(),
            side_name: default_side_name(),
            work_duration_minutes: default_work_duration(),
            side_duration_minutes: default_side_duration(),
            work_rest_minutes: default_rest(),
            side_rest_minutes: default_rest(),
            schedule_planning: true,
            planning_name: default_planning_name(),
            planning_duration_minutes: default_planning_duration(),
            pattern: SchedulePattern::default(),
            work_per_cycle: default_work_per_cycle(),
            side_per_cycle: default_side_per_cycle(),
            side_first: false,
            aware_of_existing: true,
            flexible_side_scheduling: true,
            use_custom_tasks: false,
            work_tasks: Vec::new(),
            side_tasks: Vec::new(),
            deep: DeepSessionConfig::default(),
            calendars: CalendarMapping::default(),
        }
    }
}

impl SchedulingConfiguration {
    /// Session length in minutes for a type.
    pub fn duration_for(&self, session_type: SessionType) -> u32 {
        match session_type {
            SessionType::Work => self.work_duration_minutes,
            SessionType::Side => self.side_duration_minutes,
            SessionType::Planning => self.planning_duration_minutes,
            SessionType::Deep => self.deep.duration_minutes,
        }
    }

    /// Mandatory rest in minutes after a session of a type.
    ///
    /// Planning has no rest setting of its own and shares the work rest.
    pub fn rest_for(&self, session_type: SessionType) -> u32 {
        match session_type {
            SessionType::Work | SessionType::Planning => self.work_rest_minutes,
            SessionType::Side => self.side_rest_minutes,
            SessionType::Deep => self.deep.rest_minutes,
        }
    }

    /// Generic display name for a type.
    pub fn name_for(&self, session_type: SessionType) -> &str {
        match session_type {
            SessionType::Work => &self.work_name,
            SessionType::Side => &self.side_name,
            SessionType::Planning => &self.planning_name,
            SessionType::Deep => &self.deep.name,
        }
    }

    /// Target calendar for a type.
    pub fn calendar_for(&self, session_type: SessionType) -> &str {
        match session_type {
            SessionType::Work => &self.calendars.work,
            SessionType::Side => &self.calendars.side,
            SessionType::Planning => &self.calendars.planning,
            SessionType::Deep => &self.deep.calendar_name,
        }
    }

    /// Deep session target for the day; zero when deep scheduling is off.
    pub fn deep_session_count(&self) -> u32 {
        if self.deep.enabled {
            self.deep.session_count
        } else {
            0
        }
    }

    /// Validate engine preconditions: positive durations, positive cycle
    /// sizes. Counts are unsigned and need no check.
    ///
    /// # Errors
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for session_type in SessionType::all() {
            if self.duration_for(session_type) == 0 {
                return Err(ValidationError::invalid_value(
                    "duration_minutes",
                    format!("{} session duration must be at least 1 minute", session_type.as_str()),
                ));
            }
        }
        if self.work_per_cycle == 0 {
            return Err(ValidationError::invalid_value(
                "work_per_cycle",
                "cycle size must be at least 1",
            ));
        }
        if self.side_per_cycle == 0 {
            return Err(ValidationError::invalid_value(
                "side_per_cycle",
                "cycle size must be at least 1",
            ));
        }
        if self.deep.enabled && self.deep.inject_after_every == 0 {
            return Err(ValidationError::invalid_value(
                "deep.inject_after_every",
                "injection cadence must be at least 1",
            ));
        }
        Ok(())
    }
}

// Default functions
fn default_work_count() -> u32 {
    4
}
fn default_side_count() -> u32 {
    2
}
fn default_work_name() -> String {
    "Work".to_string()
}
fn default_side_name() -> String {
    "Side".to_string()
}
fn default_planning_name() -> String {
    "Planning".to_string()
}
fn default_deep_name() -> String {
    "Deep focus".to_string()
}
fn default_work_duration() -> u32 {
    SessionType::Work.default_duration_minutes()
}
fn default_side_duration() -> u32 {
    SessionType::Side.default_duration_minutes()
}
fn default_planning_duration() -> u32 {
    SessionType::Planning.default_duration_minutes()
}
fn default_deep_duration() -> u32 {
    SessionType::Deep.default_duration_minutes()
}
fn default_rest() -> u32 {
    10
}
fn default_deep_count() -> u32 {
    1
}
fn default_inject_after_every() -> u32 {
    2
}
fn default_work_per_cycle() -> u32 {
    2
}
fn default_side_per_cycle() -> u32 {
    1
}
fn default_calendar() -> String {
    "Flowday".to_string()
}
fn default_true() -> bool {
    true
}
