//! Pause-time capture of the positional state needed to resume

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Catcher position plus every in-flight catchable position.
///
/// Lives in memory only, from pause until the following resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub catcher_pos: Vec2,
    /// In creation order
    pub catchable_positions: Vec<Vec2>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            catcher_pos: state.catcher.pos,
            catchable_positions: state.catchables().iter().map(|c| c.pos).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.catchable_positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catchable_positions.is_empty()
    }
}
