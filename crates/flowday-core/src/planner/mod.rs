//! Schedule placement engine.
//!
//! Walks the ordered session sequence against the day's free gaps and emits
//! concrete sessions with absolute times. The engine is a pure function of
//! its inputs: no shared state, no I/O, no clock reads. Calendar fetching and
//! persistence happen in the collaborator before and after a call, and the
//! caller is free to re-invoke on every configuration change.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SchedulingConfiguration;
use crate::error::CoreError;
use crate::existing::ExistingSessions;
use crate::session::{BusyTimeSlot, ScheduledSession, SessionCounts, SessionType};
use crate::timeline::free_gaps;

/// Smallest flexible side session, as a fraction of the configured side
/// duration. Tunable; the floor keeps shortened sessions worth sitting down
/// for.
pub const FLEXIBLE_SIDE_MIN_FRACTION: f64 = 0.5;

/// Result of one scheduling run.
///
/// "Nothing fits" and "quota already met" are both expected outcomes, not
/// errors. Callers compare `requested` against `placed` per type to build a
/// user-facing message, and check `quota_met` to tell an already-complete day
/// apart from a full calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Placed sessions, non-decreasing by start time.
    pub sessions: Vec<ScheduledSession>,
    /// Occurrences the engine attempted to place, after quota resolution.
    pub requested: SessionCounts,
    /// Occurrences that found room.
    pub placed: SessionCounts,
    /// Aware mode found every remaining work/side/deep quota at zero.
    pub quota_met: bool,
}

impl ScheduleOutcome {
    fn quota_met() -> Self {
        Self {
            sessions: Vec::new(),
            requested: SessionCounts::default(),
            placed: SessionCounts::default(),
            quota_met: true,
        }
    }

    /// Occurrences of a type that could not be placed anywhere.
    pub fn dropped(&self, session_type: SessionType) -> u32 {
        self.requested
            .get(session_type)
            .saturating_sub(self.placed.get(session_type))
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Draws session titles from a custom task list, skipping titles already on
/// the calendar, then falls back to the generic type name.
struct TitleQueue<'a> {
    titles: &'a [String],
    next_index: usize,
    existing: &'a ExistingSessions,
    fallback: &'a str,
}

impl<'a> TitleQueue<'a> {
    fn new(titles: &'a [String], existing: &'a ExistingSessions, fallback: &'a str) -> Self {
        Self {
            titles,
            next_index: 0,
            existing,
            fallback,
        }
    }

    fn next_title(&mut self) -> String {
        while self.next_index < self.titles.len() {
            let title = &self.titles[self.next_index];
            self.next_index += 1;
            if !self.existing.titles.contains(title) {
                return title.clone();
            }
        }
        self.fallback.to_string()
    }
}

/// Greedy single-day session placer.
///
/// Holds only a borrow of the configuration for the current invocation;
/// construct one per call site or reuse freely, results are identical for
/// identical inputs.
pub struct SchedulePlanner<'a> {
    config: &'a SchedulingConfiguration,
    day_end: Option<DateTime<Utc>>,
}

impl<'a> SchedulePlanner<'a> {
    pub fn new(config: &'a SchedulingConfiguration) -> Self {
        Self {
            config,
            day_end: None,
        }
    }

    /// Override the day-end boundary. Defaults to midnight after the start
    /// time's date.
    pub fn with_day_end(mut self, day_end: DateTime<Utc>) -> Self {
        self.day_end = Some(day_end);
        self
    }

    /// Generate the day's schedule.
    ///
    /// Walks the pattern-ordered sequence from `start_time`, placing each
    /// session into the earliest gap that holds it and advancing past the
    /// session plus its rest. Occurrences that fit nowhere are dropped, never
    /// deferred.
    ///
    /// # Errors
    /// Returns a validation error for zero durations or zero cycle sizes;
    /// expected conditions never error.
    pub fn generate_schedule(
        &self,
        start_time: DateTime<Utc>,
        busy: &[BusyTimeSlot],
        existing: &ExistingSessions,
        include_planning: bool,
    ) -> Result<ScheduleOutcome, CoreError> {
        self.config.validate()?;

        let config = self.config;
        let day_end = self.day_end.unwrap_or_else(|| end_of_day(start_time));

        // Quota resolution: aware mode schedules against what is left of the
        // daily targets.
        let work_target = config.work_session_count;
        let side_target = config.side_session_count;
        let deep_target = config.deep_session_count();
        let (work_left, side_left, deep_left) = if config.aware_of_existing {
            (
                work_target.saturating_sub(existing.counts.work),
                side_target.saturating_sub(existing.counts.side),
                deep_target.saturating_sub(existing.counts.deep),
            )
        } else {
            (work_target, side_target, deep_target)
        };

        if config.aware_of_existing
            && work_target + side_target + deep_target > 0
            && work_left == 0
            && side_left == 0
            && deep_left == 0
        {
            return Ok(ScheduleOutcome::quota_met());
        }

        let mut tokens: Vec<SessionType> = Vec::new();
        if include_planning && config.schedule_planning {
            tokens.push(SessionType::Planning);
        }
        tokens.extend(config.pattern.generate_order(
            work_left,
            side_left,
            config.work_per_cycle,
            config.side_per_cycle,
            config.side_first,
        ));

        let mut requested = SessionCounts::default();
        for token in &tokens {
            requested.add(*token, 1);
        }
        requested.add(SessionType::Deep, deep_left);

        let empty: &[String] = &[];
        let mut work_titles = TitleQueue::new(
            if config.use_custom_tasks {
                config.work_tasks.as_slice()
            } else {
                empty
            },
            existing,
            &config.work_name,
        );
        let mut side_titles = TitleQueue::new(
            if config.use_custom_tasks {
                config.side_tasks.as_slice()
            } else {
                empty
            },
            existing,
            &config.side_name,
        );

        let mut outcome = ScheduleOutcome {
            sessions: Vec::new(),
            requested,
            placed: SessionCounts::default(),
            quota_met: false,
        };

        let mut cursor = start_time;
        let mut deep_left = deep_left;
        let mut injection_counter = 0u32;

        for token in tokens {
            let title = match token {
                SessionType::Work => work_titles.next_title(),
                SessionType::Side => side_titles.next_title(),
                SessionType::Planning => config.planning_name.clone(),
                SessionType::Deep => config.deep.name.clone(),
            };
            if !self.place(token, title, &mut cursor, busy, day_end, &mut outcome) {
                continue;
            }

            // Deep sessions ride along after every N placed non-deep ones.
            injection_counter += 1;
            if deep_left > 0 && injection_counter >= config.deep.inject_after_every {
                injection_counter = 0;
                deep_left -= 1;
                self.place(
                    SessionType::Deep,
                    config.deep.name.clone(),
                    &mut cursor,
                    busy,
                    day_end,
                    &mut outcome,
                );
            }
        }

        Ok(outcome)
    }

    /// Project one ad hoc session of a type at or after `start_time`.
    ///
    /// Reuses the schedule gap search for a single occurrence; returns `None`
    /// when no slot exists before the day end.
    ///
    /// # Errors
    /// Returns a validation error for an invalid configuration.
    pub fn project_single_session(
        &self,
        session_type: SessionType,
        start_time: DateTime<Utc>,
        busy: &[BusyTimeSlot],
    ) -> Result<Option<ScheduledSession>, CoreError> {
        self.config.validate()?;
        let day_end = self.day_end.unwrap_or_else(|| end_of_day(start_time));

        let session = self
            .find_placement(session_type, start_time, busy, day_end)
            .map(|(start, duration)| {
                self.build_session(
                    session_type,
                    self.config.name_for(session_type).to_string(),
                    start,
                    duration,
                )
            });
        Ok(session)
    }

    /// Place one token at the cursor, pushing the session and advancing the
    /// cursor past the session and its rest on success.
    fn place(
        &self,
        token: SessionType,
        title: String,
        cursor: &mut DateTime<Utc>,
        busy: &[BusyTimeSlot],
        day_end: DateTime<Utc>,
        outcome: &mut ScheduleOutcome,
    ) -> bool {
        match self.find_placement(token, *cursor, busy, day_end) {
            Some((start, duration)) => {
                let session = self.build_session(token, title, start, duration);
                *cursor = session.end_time + Duration::minutes(self.config.rest_for(token) as i64);
                outcome.sessions.push(session);
                outcome.placed.add(token, 1);
                true
            }
            None => false,
        }
    }

    /// Find the earliest start at or after `cursor` where a session of this
    /// type fits, together with its (possibly reduced) duration in minutes.
    ///
    /// Gaps are recomputed from the live cursor so earlier placements are
    /// already excluded. When no gap holds a full side session and flexible
    /// side scheduling is on, the first gap of at least
    /// [`FLEXIBLE_SIDE_MIN_FRACTION`] of the configured duration is used
    /// instead, filled edge to edge.
    fn find_placement(
        &self,
        token: SessionType,
        cursor: DateTime<Utc>,
        busy: &[BusyTimeSlot],
        day_end: DateTime<Utc>,
    ) -> Option<(DateTime<Utc>, i64)> {
        let duration = self.config.duration_for(token) as i64;
        let gaps = free_gaps(busy, cursor, day_end);

        if let Some(gap) = gaps.iter().find(|gap| gap.can_fit(duration)) {
            return Some((gap.start_time, duration));
        }

        if token == SessionType::Side && self.config.flexible_side_scheduling {
            let min_minutes = flexible_side_minimum(duration);
            if let Some(gap) = gaps.iter().find(|gap| gap.duration_minutes() >= min_minutes) {
                return Some((gap.start_time, gap.duration_minutes().min(duration)));
            }
        }

        None
    }

    fn build_session(
        &self,
        token: SessionType,
        title: String,
        start: DateTime<Utc>,
        duration: i64,
    ) -> ScheduledSession {
        ScheduledSession::new(
            token,
            title,
            start,
            start + Duration::minutes(duration),
            self.config.calendar_for(token),
        )
        .with_notes(format!("Scheduled by Flowday {}", token.hashtag()))
    }
}

/// Smallest acceptable flexible side session in minutes.
fn flexible_side_minimum(duration: i64) -> i64 {
    ((duration as f64 * FLEXIBLE_SIDE_MIN_FRACTION).ceil() as i64).max(1)
}

/// Midnight after the start time's date.
fn end_of_day(start_time: DateTime<Utc>) -> DateTime<Utc> {
    (start_time.date_naive() + Duration::days(1))
        .and_time(NaiveTime::MIN)
        .and_utc()
}
