//! Catcher - a falling-object catch game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (scheduler, spawner, motion, collision, pause/resume)
//! - `settings`: Tunable game constants, loadable from JSON

pub mod settings;
pub mod sim;

pub use settings::{ConfigError, GameConfig};
pub use sim::{Game, GameListener, PlayField};

/// Default game constants
pub mod consts {
    /// Fall step cadence (~60 steps per second)
    pub const TICK_MS: u64 = 16;
    /// Minimum time between two spawns
    pub const SPAWN_INTERVAL_MS: u64 = 1000;
    /// Delay before the spawner chain restarts after a resume
    pub const RESUME_SPAWN_DELAY_MS: u64 = 16;

    /// Catchable defaults
    pub const CATCHABLE_WIDTH: f32 = 100.0;
    pub const CATCHABLE_HEIGHT: f32 = 100.0;
    /// Units fallen per tick
    pub const CATCHABLE_SPEED: f32 = 10.0;

    /// Catcher defaults
    pub const CATCHER_WIDTH: f32 = 100.0;
    pub const CATCHER_HEIGHT: f32 = 100.0;
    /// Distance from the bottom of the field to the catcher's top edge
    pub const CATCHER_START_OFFSET: f32 = 50.0;
}
