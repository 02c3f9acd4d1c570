//! Timer registry.
//!
//! One [`TimerManager`] per `(candidate_id, question_index)` key, plus the
//! single attachment point for page-level events that must fan out to every
//! live timer: visibility changes and before-unload saves.
//!
//! The registry is an explicitly constructed object the host passes around,
//! so tests (and multi-tenant hosts) can hold independent registries while
//! each one still guarantees "one timer per key".

use std::collections::HashMap;
use std::rc::Rc;

use super::manager::{ListenerId, TimerKey, TimerManager, DEFAULT_AUTOSAVE_INTERVAL_MS};
use crate::clock::Clock;
use crate::events::TimerSnapshot;
use crate::storage::SessionStore;

/// Registry of per-question session timers.
pub struct TimerRegistry {
    clock: Rc<dyn Clock>,
    store: Rc<dyn SessionStore>,
    autosave_interval_ms: u64,
    timers: HashMap<TimerKey, TimerManager>,
}

impl TimerRegistry {
    pub fn new(clock: Rc<dyn Clock>, store: Rc<dyn SessionStore>) -> Self {
        Self::with_autosave_interval(clock, store, DEFAULT_AUTOSAVE_INTERVAL_MS)
    }

    pub fn with_autosave_interval(
        clock: Rc<dyn Clock>,
        store: Rc<dyn SessionStore>,
        autosave_interval_ms: u64,
    ) -> Self {
        Self {
            clock,
            store,
            autosave_interval_ms,
            timers: HashMap::new(),
        }
    }

    /// Get the timer for a key, constructing (and scheduling auto-save for)
    /// it on first access. Repeated calls with the same key return the same
    /// instance, so subscriptions registered through one call survive the
    /// next.
    pub fn get_timer(&mut self, candidate_id: &str, question_index: u32) -> &mut TimerManager {
        let key = TimerKey::new(candidate_id, question_index);
        let clock = self.clock.clone();
        let store = self.store.clone();
        let interval = self.autosave_interval_ms;
        self.timers.entry(key).or_insert_with(|| {
            let mut manager = TimerManager::open(candidate_id, question_index, clock, store);
            manager.start_auto_save(interval);
            manager
        })
    }

    /// Get the timer for a key and subscribe `on_update` to its state
    /// changes in one step.
    pub fn init_timer(
        &mut self,
        candidate_id: &str,
        question_index: u32,
        on_update: impl FnMut(&TimerSnapshot) + 'static,
    ) -> ListenerId {
        self.get_timer(candidate_id, question_index)
            .subscribe(on_update)
    }

    /// Stop the timer for a key and forget it. Absent keys are a no-op.
    pub fn cleanup_timer(&mut self, candidate_id: &str, question_index: u32) {
        let key = TimerKey::new(candidate_id, question_index);
        if let Some(mut manager) = self.timers.remove(&key) {
            manager.stop();
        }
    }

    /// `M:SS` display string for a key, constructing the timer if needed.
    pub fn formatted_time(&mut self, candidate_id: &str, question_index: u32) -> String {
        self.get_timer(candidate_id, question_index).formatted_time()
    }

    /// Fan a visibility change out to every live timer. Hidden pauses and
    /// persists; visible resumes.
    pub fn handle_visibility_change(&mut self, hidden: bool) {
        for manager in self.timers.values_mut() {
            manager.handle_visibility_change(hidden);
        }
    }

    /// Persist every live timer. The before-unload analog: the host calls
    /// this when it is about to go away.
    pub fn save_all(&self) {
        for manager in self.timers.values() {
            manager.save_state();
        }
    }

    /// Drive every timer's auto-save schedule.
    pub fn tick_all(&mut self) {
        for manager in self.timers.values_mut() {
            manager.tick();
        }
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
