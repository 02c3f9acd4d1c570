use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time view of one timer, as delivered to subscribers and printed
/// by the CLI `status` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub candidate_id: String,
    pub question_index: u32,
    pub elapsed_ms: u64,
    pub is_paused: bool,
    pub is_active: bool,
}

/// Every timer state change produces an Event.
/// The host layer (CLI, GUI) prints or forwards them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A timer began tracking, either fresh or restored from a persisted
    /// session within the one-hour validity window.
    TimerStarted {
        candidate_id: String,
        question_index: u32,
        restored: bool,
        elapsed_ms: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        elapsed_ms: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        elapsed_ms: u64,
        at: DateTime<Utc>,
    },
    /// Terminal transition; the persisted session entries are gone.
    TimerStopped {
        at: DateTime<Utc>,
    },
}
