use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Phase;

/// Every state change of the timer produces an Event.
/// Front ends log them; `pomo simulate --json` prints them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A work session began from Idle.
    PhaseStarted {
        phase: Phase,
        duration_secs: u64,
        work_sessions: u32,
        at: DateTime<Utc>,
    },
    /// A countdown reached zero and the next phase took over in the same tick.
    PhaseChanged {
        from: Phase,
        to: Phase,
        duration_secs: u64,
        work_sessions: u32,
        checkmarks: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        remaining_secs: u64,
        display: String,
        work_sessions: u32,
        checkmarks: u32,
        at: DateTime<Utc>,
    },
}
