//! Integration tests for end-to-end schedule generation.
//!
//! These exercise the whole pipeline the desktop app drives: count existing
//! sessions from busy slots, resolve quotas, order the sequence and place it
//! into the day's gaps.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use flowday_core::{
    count_existing, BusyTimeSlot, ExistingSessions, SchedulePattern, SchedulePlanner,
    SchedulingConfiguration, SessionType,
};

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, hour, minute, 0).unwrap()
}

fn alternating_config() -> SchedulingConfiguration {
    SchedulingConfiguration {
        work_session_count: 2,
        side_session_count: 1,
        work_duration_minutes: 40,
        side_duration_minutes: 30,
        work_rest_minutes: 10,
        side_rest_minutes: 10,
        pattern: SchedulePattern::Alternating,
        work_per_cycle: 2,
        schedule_planning: false,
        aware_of_existing: true,
        flexible_side_scheduling: false,
        ..Default::default()
    }
}

#[test]
fn alternating_schedule_on_an_empty_day() {
    let config = alternating_config();
    let outcome = SchedulePlanner::new(&config)
        .generate_schedule(at(8, 0), &[], &ExistingSessions::default(), false)
        .unwrap();

    let placed: Vec<(SessionType, DateTime<Utc>, DateTime<Utc>)> = outcome
        .sessions
        .iter()
        .map(|s| (s.session_type, s.start_time, s.end_time))
        .collect();
    assert_eq!(
        placed,
        vec![
            (SessionType::Work, at(8, 0), at(8, 40)),
            (SessionType::Work, at(8, 50), at(9, 30)),
            (SessionType::Side, at(9, 40), at(10, 10)),
        ]
    );
    assert!(!outcome.quota_met);
    assert_eq!(outcome.dropped(SessionType::Work), 0);
}

#[test]
fn busy_slot_shifts_rather_than_overlaps() {
    let config = alternating_config();
    let busy = vec![BusyTimeSlot::new("1", "Standup", at(8, 30), at(9, 0))];
    let outcome = SchedulePlanner::new(&config)
        .generate_schedule(at(8, 0), &busy, &ExistingSessions::default(), false)
        .unwrap();

    // 08:00-08:40 would overlap the 08:30 meeting; the first work session
    // must land in the first gap that holds 40 minutes, after 09:00.
    assert_eq!(outcome.sessions[0].start_time, at(9, 0));
    assert_eq!(outcome.sessions[0].end_time, at(9, 40));
    for session in &outcome.sessions {
        for slot in &busy {
            assert!(
                !slot.overlaps(session.start_time, session.end_time),
                "session {} overlaps busy slot",
                session.title
            );
        }
    }
}

#[test]
fn sessions_never_overlap_each_other_or_busy_slots() {
    let mut config = alternating_config();
    config.work_session_count = 4;
    config.side_session_count = 3;
    config.flexible_side_scheduling = true;
    config.deep.enabled = true;
    config.deep.session_count = 2;

    let busy = vec![
        BusyTimeSlot::new("1", "Breakfast", at(8, 20), at(8, 50)),
        BusyTimeSlot::new("2", "Meeting", at(10, 0), at(11, 0)),
        BusyTimeSlot::new("3", "Lunch", at(12, 30), at(13, 30)),
        BusyTimeSlot::new("4", "Call", at(13, 0), at(13, 45)),
    ];
    let outcome = SchedulePlanner::new(&config)
        .generate_schedule(at(8, 0), &busy, &ExistingSessions::default(), true)
        .unwrap();

    let sessions = &outcome.sessions;
    assert!(!sessions.is_empty());
    for (i, a) in sessions.iter().enumerate() {
        for slot in &busy {
            assert!(!slot.overlaps(a.start_time, a.end_time));
        }
        for b in sessions.iter().skip(i + 1) {
            assert!(
                !a.overlaps(b.start_time, b.end_time),
                "{} overlaps {}",
                a.title,
                b.title
            );
        }
    }
    // Chronological by construction.
    for pair in sessions.windows(2) {
        assert!(pair[0].start_time <= pair[1].start_time);
    }
}

#[test]
fn identical_inputs_give_identical_schedules() {
    let config = alternating_config();
    let busy = vec![BusyTimeSlot::new("1", "Meeting", at(9, 0), at(10, 0))];
    let planner = SchedulePlanner::new(&config);

    let first = planner
        .generate_schedule(at(8, 0), &busy, &ExistingSessions::default(), true)
        .unwrap();
    let second = planner
        .generate_schedule(at(8, 0), &busy, &ExistingSessions::default(), true)
        .unwrap();

    let times = |outcome: &flowday_core::ScheduleOutcome| {
        outcome
            .sessions
            .iter()
            .map(|s| (s.session_type, s.start_time, s.end_time, s.title.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(times(&first), times(&second));
    assert_eq!(first.placed, second.placed);
}

#[test]
fn planning_session_leads_the_day() {
    let mut config = alternating_config();
    config.schedule_planning = true;
    config.planning_duration_minutes = 15;

    let outcome = SchedulePlanner::new(&config)
        .generate_schedule(at(8, 0), &[], &ExistingSessions::default(), true)
        .unwrap();
    assert_eq!(outcome.sessions[0].session_type, SessionType::Planning);
    assert_eq!(outcome.sessions[0].start_time, at(8, 0));
    assert_eq!(outcome.sessions[0].end_time, at(8, 15));
    // Work follows after the planning rest.
    assert_eq!(outcome.sessions[1].session_type, SessionType::Work);
    assert_eq!(outcome.sessions[1].start_time, at(8, 25));
}

#[test]
fn existing_hashtagged_sessions_reduce_the_quota() {
    let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let busy = vec![
        BusyTimeSlot::new("1", "Morning work", at(7, 0), at(7, 45))
            .with_notes("Scheduled by Flowday #work"),
        BusyTimeSlot::new("2", "Early side", at(7, 45), at(8, 0)).with_notes("#side"),
    ];
    let existing = count_existing(&busy, day);
    assert_eq!(existing.counts.work, 1);
    assert_eq!(existing.counts.side, 1);

    let config = alternating_config();
    let outcome = SchedulePlanner::new(&config)
        .generate_schedule(at(8, 0), &busy, &existing, false)
        .unwrap();
    // Two work targets minus one existing, one side minus one existing.
    assert_eq!(outcome.placed.work, 1);
    assert_eq!(outcome.placed.side, 0);
    assert_eq!(outcome.requested.side, 0);
    assert!(!outcome.quota_met);
}

#[test]
fn fully_met_quota_reports_quota_met_across_the_pipeline() {
    let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let busy = vec![
        BusyTimeSlot::new("1", "w1", at(7, 0), at(7, 40)).with_notes("#work"),
        BusyTimeSlot::new("2", "w2", at(9, 0), at(9, 40)).with_notes("#work"),
        BusyTimeSlot::new("3", "s1", at(11, 0), at(11, 30)).with_notes("#side"),
    ];
    let existing = count_existing(&busy, day);

    let config = alternating_config();
    let outcome = SchedulePlanner::new(&config)
        .generate_schedule(at(8, 0), &busy, &existing, false)
        .unwrap();
    assert!(outcome.quota_met);
    assert!(outcome.is_empty());
}

#[test]
fn generated_sessions_carry_their_hashtag() {
    let mut config = alternating_config();
    config.schedule_planning = true;
    config.deep.enabled = true;
    config.deep.session_count = 1;
    config.deep.inject_after_every = 2;

    let outcome = SchedulePlanner::new(&config)
        .generate_schedule(at(8, 0), &[], &ExistingSessions::default(), true)
        .unwrap();
    for session in &outcome.sessions {
        let notes = session.notes.as_deref().unwrap_or_default();
        assert!(
            notes.contains(session.session_type.hashtag()),
            "notes {:?} missing {}",
            notes,
            session.session_type.hashtag()
        );
    }
    // A second run over the materialized day recognizes every session.
    let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let as_busy: Vec<BusyTimeSlot> = outcome
        .sessions
        .iter()
        .map(|s| {
            BusyTimeSlot::new(s.id.clone(), s.title.clone(), s.start_time, s.end_time)
                .with_notes(s.notes.clone().unwrap_or_default())
        })
        .collect();
    let recognized = count_existing(&as_busy, day);
    assert_eq!(recognized.counts.work, outcome.placed.work);
    assert_eq!(recognized.counts.side, outcome.placed.side);
    assert_eq!(recognized.counts.deep, outcome.placed.deep);
    assert_eq!(recognized.counts.planning, outcome.placed.planning);
}

#[test]
fn sessions_target_their_mapped_calendars() {
    let mut config = alternating_config();
    config.calendars.work = "Job".to_string();
    config.calendars.side = "Projects".to_string();

    let outcome = SchedulePlanner::new(&config)
        .generate_schedule(at(8, 0), &[], &ExistingSessions::default(), false)
        .unwrap();
    for session in &outcome.sessions {
        let expected = match session.session_type {
            SessionType::Work => "Job",
            SessionType::Side => "Projects",
            _ => continue,
        };
        assert_eq!(session.calendar_name, expected);
    }
}
