//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Virtual clock only (advanced by the host)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod events;
pub mod scheduler;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Rect, catch_predicate, is_below_field};
pub use events::{CatchableEvent, EventLog, GameEvent, GameListener, NullListener, RemovalReason};
pub use scheduler::{Action, Scheduler};
pub use snapshot::Snapshot;
pub use spawner::Spawner;
pub use state::{Catchable, CatchableId, Catcher, GameState, PlayField, Score};
pub use tick::{Game, PointerEvent, PointerKind};
