//! Cooperative single-threaded scheduler
//!
//! Deferred actions are plain data queued by due time. Recurring behaviour
//! (the spawner, each catchable's fall) is a chain of one-shot actions that
//! re-post themselves; nothing runs in the background.

use std::collections::BTreeMap;

use super::state::CatchableId;

/// A deferred unit of work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Attempt a spawn, then re-post the spawner
    Spawn,
    /// Advance one catchable by a single fall step
    Advance(CatchableId),
}

/// Virtual clock plus a queue of pending actions.
///
/// Ordering key is `(due_ms, seq)`: actions due at the same instant run in
/// the order they were posted.
#[derive(Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_seq: u64,
    queue: BTreeMap<(u64, u64), Action>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Queue an action to run at the current instant
    pub fn post_now(&mut self, action: Action) {
        self.post_delayed(action, 0);
    }

    /// Queue an action to run `delay_ms` after now
    pub fn post_delayed(&mut self, action: Action, delay_ms: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.insert((self.now_ms.saturating_add(delay_ms), seq), action);
    }

    /// Drop every pending action regardless of origin
    pub fn cancel_all(&mut self) {
        self.queue.clear();
    }

    /// Move the clock forward. Time never runs backwards.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Remove and return the earliest action that is due now, if any
    pub fn pop_due(&mut self) -> Option<Action> {
        self.pop_due_by(self.now_ms)
    }

    /// Remove the earliest action due at or before `limit_ms`, moving the
    /// clock to its due time so it observes the instant it was meant for.
    pub fn pop_due_by(&mut self, limit_ms: u64) -> Option<Action> {
        let (&(due, _), _) = self.queue.first_key_value()?;
        if due > limit_ms {
            return None;
        }
        self.advance_to(due);
        self.queue.pop_first().map(|(_, action)| action)
    }

    /// Number of pending actions
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Whether any pending action matches
    pub fn is_pending(&self, action: Action) -> bool {
        self.queue.values().any(|a| *a == action)
    }
}
