//! Host notifications
//!
//! The engine calls a [`GameListener`] synchronously at the point of each
//! mutation. Hosts implement only the callbacks they care about.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::CatchableId;

/// Why a catchable left the active set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalReason {
    /// Intercepted by the catcher (scored)
    Caught,
    /// Fell below the bottom of the field
    OffField,
    /// Frozen entity discarded on resume and recreated from the snapshot
    Replaced,
}

/// Lifecycle of a single catchable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CatchableEvent {
    Created { id: CatchableId, pos: Vec2 },
    Moved { id: CatchableId, pos: Vec2 },
    Removed { id: CatchableId, reason: RemovalReason },
}

impl CatchableEvent {
    pub fn id(&self) -> CatchableId {
        match *self {
            CatchableEvent::Created { id, .. }
            | CatchableEvent::Moved { id, .. }
            | CatchableEvent::Removed { id, .. } => id,
        }
    }
}

/// Observer of score, running state and catchable lifecycle
pub trait GameListener {
    fn on_score_changed(&mut self, _score: u32) {}

    /// Drives e.g. the visibility of a resume affordance
    fn on_running_changed(&mut self, _running: bool) {}

    fn on_catchable(&mut self, _event: CatchableEvent) {}
}

/// Listener that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullListener;

impl GameListener for NullListener {}

/// Any notification, flattened for recording
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Score(u32),
    Running(bool),
    Catchable(CatchableEvent),
}

/// Listener that records every notification in order
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// All catchable lifecycle events, in order
    pub fn catchable_events(&self) -> impl Iterator<Item = &CatchableEvent> {
        self.events.iter().filter_map(|e| match e {
            GameEvent::Catchable(ev) => Some(ev),
            _ => None,
        })
    }

    pub fn created(&self) -> usize {
        self.catchable_events()
            .filter(|e| matches!(e, CatchableEvent::Created { .. }))
            .count()
    }

    pub fn removed(&self, reason: RemovalReason) -> usize {
        self.catchable_events()
            .filter(|e| matches!(e, CatchableEvent::Removed { reason: r, .. } if *r == reason))
            .count()
    }

    /// Score values in the order they were reported
    pub fn scores(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GameEvent::Score(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    /// Running flag values in the order they were reported
    pub fn running_changes(&self) -> Vec<bool> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GameEvent::Running(r) => Some(*r),
                _ => None,
            })
            .collect()
    }
}

impl GameListener for EventLog {
    fn on_score_changed(&mut self, score: u32) {
        self.events.push(GameEvent::Score(score));
    }

    fn on_running_changed(&mut self, running: bool) {
        self.events.push(GameEvent::Running(running));
    }

    fn on_catchable(&mut self, event: CatchableEvent) {
        self.events.push(GameEvent::Catchable(event));
    }
}
