//! # Flowday Core Library
//!
//! This library provides the scheduling engine for Flowday: it places a
//! configurable set of recurring sessions (work, side, planning, deep focus)
//! into the free gaps of a single day's calendar. The GUI and the calendar
//! backends are thin layers over this crate.
//!
//! ## Architecture
//!
//! - **Pattern**: Pure ordering of work/side tokens per the selected pattern
//! - **Timeline**: Free-gap subtraction and per-type availability estimates
//! - **Planner**: Greedy placement of the ordered sequence into the gaps
//! - **Existing**: Hashtag recognition of sessions already on the calendar
//! - **Preset**: Versioned snapshots of the scheduling configuration
//!
//! ## Key Components
//!
//! - [`SchedulePlanner`]: One-shot, pure schedule generation
//! - [`SchedulingConfiguration`]: Immutable per-invocation engine input
//! - [`CalendarIntegration`]: Trait the calendar collaborators implement

pub mod calendar;
pub mod config;
pub mod error;
pub mod existing;
pub mod pattern;
pub mod planner;
pub mod preset;
pub mod session;
pub mod timeline;

pub use calendar::CalendarIntegration;
pub use config::{CalendarMapping, DeepSessionConfig, SchedulingConfiguration};
pub use error::{CoreError, PresetError, Result, ValidationError};
pub use existing::{count_existing, ExistingSessions};
pub use pattern::SchedulePattern;
pub use planner::{ScheduleOutcome, SchedulePlanner, FLEXIBLE_SIDE_MIN_FRACTION};
pub use preset::{check_compatibility, Compatibility, Preset, PresetMetadata, PRESET_VERSION};
pub use session::{BusyTimeSlot, ScheduledSession, SessionCounts, SessionType};
pub use timeline::{availability, free_gaps, Availability, GapFinder, TimeGap};
