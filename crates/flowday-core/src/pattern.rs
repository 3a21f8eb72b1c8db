//! Session ordering patterns.
//!
//! A pattern is a pure function from per-type target counts and cycle
//! parameters to an ordered sequence of work/side tokens. Every pattern
//! preserves the requested counts exactly; placement decides what actually
//! fits on the day.

use serde::{Deserialize, Serialize};

use crate::session::SessionType;

/// How work and side sessions are interleaved for the day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulePattern {
    /// Blocks of work sessions separated by single side sessions.
    #[default]
    Alternating,
    /// Like [`Alternating`](Self::Alternating), but each cycle starts with
    /// one side session.
    AlternatingReverse,
    /// All work sessions, then all side sessions.
    AllWorkFirst,
    /// All side sessions, then all work sessions.
    AllSideFirst,
    /// A leading block of side sessions, all work, then the remaining sides.
    SidesFirstAndLast,
    /// Independent per-cycle quotas for work and side turns.
    CustomRatio,
}

impl SchedulePattern {
    /// Build the ordered work/side token sequence for this pattern.
    ///
    /// The output always contains exactly `work_count` work tokens and
    /// `side_count` side tokens. Cycle sizes of zero are treated as one.
    pub fn generate_order(
        &self,
        work_count: u32,
        side_count: u32,
        work_per_cycle: u32,
        side_per_cycle: u32,
        side_first: bool,
    ) -> Vec<SessionType> {
        let work_per_cycle = work_per_cycle.max(1);
        let side_per_cycle = side_per_cycle.max(1);
        let mut order = Vec::with_capacity((work_count + side_count) as usize);
        let mut work_left = work_count;
        let mut side_left = side_count;

        match self {
            Self::AllWorkFirst => {
                push_n(&mut order, SessionType::Work, work_left);
                push_n(&mut order, SessionType::Side, side_left);
            }
            Self::AllSideFirst => {
                push_n(&mut order, SessionType::Side, side_left);
                push_n(&mut order, SessionType::Work, work_left);
            }
            Self::Alternating => {
                while work_left > 0 || side_left > 0 {
                    for _ in 0..work_per_cycle {
                        if work_left == 0 {
                            break;
                        }
                        order.push(SessionType::Work);
                        work_left -= 1;
                    }
                    if side_left > 0 {
                        order.push(SessionType::Side);
                        side_left -= 1;
                    }
                }
            }
            Self::AlternatingReverse => {
                while work_left > 0 || side_left > 0 {
                    if side_left > 0 {
                        order.push(SessionType::Side);
                        side_left -= 1;
                    }
                    for _ in 0..work_per_cycle {
                        if work_left == 0 {
                            break;
                        }
                        order.push(SessionType::Work);
                        work_left -= 1;
                    }
                }
            }
            Self::SidesFirstAndLast => {
                let leading = side_per_cycle.min(side_left);
                push_n(&mut order, SessionType::Side, leading);
                side_left -= leading;
                push_n(&mut order, SessionType::Work, work_left);
                push_n(&mut order, SessionType::Side, side_left);
            }
            Self::CustomRatio => {
                let mut side_turn = side_first;
                while work_left > 0 || side_left > 0 {
                    if side_turn {
                        // A turn with nothing left to emit flips straight back.
                        if side_left == 0 {
                            side_turn = false;
                            continue;
                        }
                        for _ in 0..side_per_cycle {
                            if side_left == 0 {
                                break;
                            }
                            order.push(SessionType::Side);
                            side_left -= 1;
                        }
                    } else {
                        if work_left == 0 {
                            side_turn = true;
                            continue;
                        }
                        for _ in 0..work_per_cycle {
                            if work_left == 0 {
                                break;
                            }
                            order.push(SessionType::Work);
                            work_left -= 1;
                        }
                    }
                    side_turn = !side_turn;
                }
            }
        }

        order
    }
}

fn push_n(order: &mut Vec<SessionType>, session_type: SessionType, count: u32) {
    for _ in 0..count {
        order.push(session_type);
    }
}
