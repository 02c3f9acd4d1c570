//! Per-question session timer.
//!
//! Tracks elapsed wall-clock time for one candidate/question pair and
//! persists it through a [`SessionStore`] so the session survives host
//! restarts (page reloads in the browser, process restarts for the CLI)
//! within a one-hour validity window.
//!
//! ## State transitions
//!
//! ```text
//! Running <-> Paused -> Stopped
//! ```
//!
//! Exactly one of {running, paused, stopped} holds at any time. While
//! running, elapsed time is computed live from the clock; while paused it is
//! the frozen snapshot taken at `pause()`; once stopped it reads as zero.
//!
//! There is no internal thread. The host drives periodic persistence by
//! calling `tick()` (usually through the registry's `tick_all()`).

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::events::{Event, TimerSnapshot};
use crate::storage::SessionStore;

/// How long a persisted session stays restorable, measured from the
/// session-start marker.
pub const SESSION_WINDOW_MS: u64 = 60 * 60 * 1000;

/// Default auto-save cadence.
pub const DEFAULT_AUTOSAVE_INTERVAL_MS: u64 = 10_000;

/// Identifies one candidate/question timer and derives its storage keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimerKey {
    pub candidate_id: String,
    pub question_index: u32,
}

impl TimerKey {
    pub fn new(candidate_id: &str, question_index: u32) -> Self {
        Self {
            candidate_id: candidate_id.to_string(),
            question_index,
        }
    }

    /// Key of the JSON state record.
    pub fn state_key(&self) -> String {
        format!("timer_state_{}_{}", self.candidate_id, self.question_index)
    }

    /// Key of the session-start marker (numeric-string ms timestamp).
    pub fn marker_key(&self) -> String {
        format!("session_start_{}_{}", self.candidate_id, self.question_index)
    }
}

/// Wire shape of the persisted state record. Field names match the
/// session-storage entries written by the web host.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedState {
    #[serde(rename = "elapsedTime")]
    elapsed_ms: u64,
    #[serde(rename = "isPaused")]
    is_paused: bool,
    #[serde(rename = "lastUpdated")]
    last_updated_ms: u64,
}

/// Handle returned by [`TimerManager::subscribe`]. Passing it to
/// `unsubscribe` removes that listener; unknown or already-removed handles
/// are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&TimerSnapshot)>;

/// Session timer for one candidate/question pair.
pub struct TimerManager {
    key: TimerKey,
    clock: Rc<dyn Clock>,
    store: Rc<dyn SessionStore>,
    /// Epoch-ms instant the current running interval is measured from.
    /// Not authoritative while paused or stopped.
    start_ms: Option<u64>,
    /// Elapsed time snapshotted at the last `pause()`. Authoritative only
    /// while paused.
    frozen_elapsed_ms: u64,
    is_paused: bool,
    is_active: bool,
    restored: bool,
    autosave_interval_ms: Option<u64>,
    next_autosave_at_ms: u64,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl TimerManager {
    /// Open the timer for `(candidate_id, question_index)`: restore the
    /// persisted session if one exists and is still inside the validity
    /// window, otherwise start fresh.
    ///
    /// Construction never fails. Corrupt records, unreadable storage and
    /// expired sessions all degrade to a fresh running timer.
    pub fn open(
        candidate_id: &str,
        question_index: u32,
        clock: Rc<dyn Clock>,
        store: Rc<dyn SessionStore>,
    ) -> Self {
        let mut manager = Self {
            key: TimerKey::new(candidate_id, question_index),
            clock,
            store,
            start_ms: None,
            frozen_elapsed_ms: 0,
            is_paused: false,
            is_active: false,
            restored: false,
            autosave_interval_ms: None,
            next_autosave_at_ms: 0,
            listeners: Vec::new(),
            next_listener_id: 0,
        };
        if !manager.load_state() {
            manager.start_fresh();
        }
        manager
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn candidate_id(&self) -> &str {
        &self.key.candidate_id
    }

    pub fn question_index(&self) -> u32 {
        self.key.question_index
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Whether construction restored a persisted session rather than
    /// starting fresh.
    pub fn was_restored(&self) -> bool {
        self.restored
    }

    /// Elapsed time in milliseconds.
    ///
    /// Zero once stopped; the frozen snapshot while paused; live
    /// `now - start` while running.
    pub fn elapsed_ms(&self) -> u64 {
        if !self.is_active {
            return 0;
        }
        let Some(start) = self.start_ms else {
            return 0;
        };
        if self.is_paused {
            return self.frozen_elapsed_ms;
        }
        self.clock.now_ms().saturating_sub(start)
    }

    /// Elapsed time as `M:SS`, truncated to whole seconds.
    pub fn formatted_time(&self) -> String {
        let total_secs = self.elapsed_ms() / 1000;
        format!("{}:{:02}", total_secs / 60, total_secs % 60)
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            candidate_id: self.key.candidate_id.clone(),
            question_index: self.key.question_index,
            elapsed_ms: self.elapsed_ms(),
            is_paused: self.is_paused,
            is_active: self.is_active,
        }
    }

    /// Build the start event for this session (fresh or restored).
    pub fn started_event(&self) -> Event {
        Event::TimerStarted {
            candidate_id: self.key.candidate_id.clone(),
            question_index: self.key.question_index,
            restored: self.restored,
            elapsed_ms: self.elapsed_ms(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Freeze elapsed time. No-op while already paused or stopped.
    pub fn pause(&mut self) -> Option<Event> {
        if self.is_paused || !self.is_active {
            return None;
        }
        self.frozen_elapsed_ms = self.elapsed_ms();
        self.is_paused = true;
        self.notify_listeners();
        Some(Event::TimerPaused {
            elapsed_ms: self.frozen_elapsed_ms,
            at: Utc::now(),
        })
    }

    /// Continue from the frozen elapsed time. No-op unless paused.
    pub fn resume(&mut self) -> Option<Event> {
        if !self.is_paused || !self.is_active {
            return None;
        }
        // Rebase the start instant so live reads continue from the frozen
        // offset.
        self.start_ms = Some(self.clock.now_ms().saturating_sub(self.frozen_elapsed_ms));
        self.is_paused = false;
        self.notify_listeners();
        Some(Event::TimerResumed {
            elapsed_ms: self.frozen_elapsed_ms,
            at: Utc::now(),
        })
    }

    /// Terminal transition: deactivate, drop both persisted entries, cancel
    /// auto-save. Idempotent; after the first call `elapsed_ms()` reads 0.
    /// The final elapsed value is discarded by contract.
    pub fn stop(&mut self) -> Option<Event> {
        if !self.is_active {
            return None;
        }
        self.is_active = false;
        self.is_paused = true;
        self.autosave_interval_ms = None;
        let _ = self.store.remove(&self.key.state_key());
        let _ = self.store.remove(&self.key.marker_key());
        self.notify_listeners();
        Some(Event::TimerStopped { at: Utc::now() })
    }

    /// Persist the current state record. Storage and serialization failures
    /// are suppressed; the timer keeps running in memory regardless. No-op
    /// once stopped, since that would resurrect the removed entries.
    pub fn save_state(&self) {
        if !self.is_active {
            return;
        }
        let record = PersistedState {
            elapsed_ms: self.elapsed_ms(),
            is_paused: self.is_paused,
            last_updated_ms: self.clock.now_ms(),
        };
        let Ok(json) = serde_json::to_string(&record) else {
            return;
        };
        let _ = self.store.set(&self.key.state_key(), &json);
    }

    /// Schedule periodic persistence every `interval_ms`, replacing any
    /// prior schedule. Saves fire from `tick()`, and only while running.
    pub fn start_auto_save(&mut self, interval_ms: u64) {
        self.autosave_interval_ms = Some(interval_ms);
        self.next_autosave_at_ms = self.clock.now_ms() + interval_ms;
    }

    /// Drive the auto-save schedule. Call periodically from the host loop.
    pub fn tick(&mut self) {
        let Some(interval) = self.autosave_interval_ms else {
            return;
        };
        if !self.is_active || self.is_paused {
            return;
        }
        let now = self.clock.now_ms();
        if now >= self.next_autosave_at_ms {
            self.save_state();
            self.next_autosave_at_ms = now + interval;
        }
    }

    /// Page-visibility hook, invoked by the registry fan-out: pause and
    /// persist when the page hides, resume when it shows again.
    pub fn handle_visibility_change(&mut self, hidden: bool) -> Option<Event> {
        if hidden {
            let event = self.pause();
            self.save_state();
            event
        } else {
            self.resume()
        }
    }

    // ── Subscriptions ────────────────────────────────────────────────

    /// Register a listener invoked with a state snapshot on every pause,
    /// resume and stop. Returns a handle for `unsubscribe`.
    pub fn subscribe(&mut self, listener: impl FnMut(&TimerSnapshot) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Unknown or already-removed handles are ignored.
    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(lid, _)| *lid != id);
    }

    fn notify_listeners(&mut self) {
        let snapshot = self.snapshot();
        for (_, listener) in self.listeners.iter_mut() {
            // A panicking listener must not starve the others or unwind
            // into the mutator that triggered notification.
            let _ = catch_unwind(AssertUnwindSafe(|| listener(&snapshot)));
        }
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Attempt to restore a persisted session. Returns false on any
    /// missing, corrupt or expired data; never errors outward.
    fn load_state(&mut self) -> bool {
        let Ok(Some(raw_state)) = self.store.get(&self.key.state_key()) else {
            return false;
        };
        let Ok(Some(raw_marker)) = self.store.get(&self.key.marker_key()) else {
            return false;
        };
        let Ok(record) = serde_json::from_str::<PersistedState>(&raw_state) else {
            return false;
        };
        let Ok(session_start_ms) = raw_marker.trim().parse::<u64>() else {
            return false;
        };
        let now = self.clock.now_ms();
        if now.saturating_sub(session_start_ms) >= SESSION_WINDOW_MS {
            return false;
        }
        // Rebase so `now - start` reproduces the persisted elapsed time
        // plus whatever accrues from here on.
        self.start_ms = Some(now.saturating_sub(record.elapsed_ms));
        self.frozen_elapsed_ms = record.elapsed_ms;
        self.is_paused = record.is_paused;
        self.is_active = true;
        self.restored = true;
        true
    }

    fn start_fresh(&mut self) {
        let now = self.clock.now_ms();
        self.start_ms = Some(now);
        self.frozen_elapsed_ms = 0;
        self.is_paused = false;
        self.is_active = true;
        self.restored = false;
        // Discard whatever stale record was there and mark the new session.
        let _ = self.store.remove(&self.key.state_key());
        let _ = self.store.set(&self.key.marker_key(), &now.to_string());
    }
}
