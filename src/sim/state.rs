//! Game state and core simulation types
//!
//! Everything the engine mutates lives here: the play field, the catcher,
//! the active catchables and the score.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::settings::GameConfig;

/// Dimensions of the visible play area, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayField {
    pub width: u32,
    pub height: u32,
}

impl PlayField {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width_f(&self) -> f32 {
        self.width as f32
    }

    pub fn height_f(&self) -> f32 {
        self.height as f32
    }
}

/// Stable identity of a catchable. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CatchableId(pub u32);

impl std::fmt::Display for CatchableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The player's horizontal catcher (position is the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Catcher {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Catcher {
    /// Centered horizontally, `start_offset` above the bottom of the field
    pub fn new(field: &PlayField, config: &GameConfig) -> Self {
        let size = Vec2::new(config.catcher_width, config.catcher_height);
        let x = (field.width_f() / 2.0 - size.x / 2.0).max(0.0);
        let y = field.height_f() - config.catcher_start_offset;
        Self {
            pos: Vec2::new(x, y),
            size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Largest x that keeps the catcher fully inside the field
    pub fn max_x(&self, field_width: f32) -> f32 {
        (field_width - self.size.x).max(0.0)
    }

    /// Center the catcher under the pointer, clamped to the field.
    ///
    /// Out-of-range input is clamped, never rejected. A NaN pointer carries
    /// no position and leaves the catcher where it is.
    pub fn move_to(&mut self, pointer_x: f32, field_width: f32) {
        if pointer_x.is_nan() {
            return;
        }
        let target = pointer_x - self.size.x / 2.0;
        self.pos.x = target.clamp(0.0, self.max_x(field_width));
    }
}

/// A falling object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Catchable {
    pub id: CatchableId,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Catchable {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// One constant-velocity fall step
    pub fn fall(&mut self, speed: f32) {
        self.pos.y += speed;
    }
}

/// Monotonic catch counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score(u32);

impl Score {
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Count one catch and return the new value
    pub fn increment(&mut self) -> u32 {
        self.0 = self.0.saturating_add(1);
        self.0
    }
}

/// Complete mutable game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub field: PlayField,
    /// False until the first start, and while paused
    pub running: bool,
    pub score: Score,
    pub catcher: Catcher,
    /// Active catchables (sorted by id, i.e. creation order)
    catchables: Vec<Catchable>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    pub fn new(field: PlayField, config: &GameConfig) -> Self {
        Self {
            field,
            running: false,
            score: Score::default(),
            catcher: Catcher::new(&field, config),
            catchables: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> CatchableId {
        let id = CatchableId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Create a catchable at `pos` and add it to the active set
    pub fn spawn_catchable(&mut self, pos: Vec2, size: Vec2) -> Catchable {
        let id = self.next_entity_id();
        let catchable = Catchable { id, pos, size };
        // IDs are monotonic, so pushing keeps the set sorted
        self.catchables.push(catchable);
        catchable
    }

    pub fn catchables(&self) -> &[Catchable] {
        &self.catchables
    }

    pub fn catchable(&self, id: CatchableId) -> Option<&Catchable> {
        self.index_of(id).map(|i| &self.catchables[i])
    }

    pub fn catchable_mut(&mut self, id: CatchableId) -> Option<&mut Catchable> {
        let i = self.index_of(id)?;
        Some(&mut self.catchables[i])
    }

    /// Remove a catchable by id. Removed ids are never handed out again.
    pub fn remove_catchable(&mut self, id: CatchableId) -> Option<Catchable> {
        self.index_of(id).map(|i| self.catchables.remove(i))
    }

    /// Empty the active set, returning what was in it
    pub fn take_catchables(&mut self) -> Vec<Catchable> {
        std::mem::take(&mut self.catchables)
    }

    fn index_of(&self, id: CatchableId) -> Option<usize> {
        self.catchables.binary_search_by_key(&id, |c| c.id).ok()
    }
}
