//! Game engine and fixed-cadence tick dispatch
//!
//! The host owns the driving loop and calls [`Game::update`] with elapsed
//! time. Every deferred action that falls due inside that window runs in
//! due-time order, so timing is identical however the host slices time.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{catch_predicate, is_below_field};
use super::events::{CatchableEvent, GameListener, RemovalReason};
use super::scheduler::{Action, Scheduler};
use super::snapshot::Snapshot;
use super::spawner::Spawner;
use super::state::{Catchable, CatchableId, Catcher, GameState, PlayField};
use crate::settings::{ConfigError, GameConfig};

/// Kind of pointer event delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    /// Drag / move; the only kind that steers the catcher
    Move,
    Up,
}

/// A decoded pointer event (horizontal component only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f32,
}

impl PointerEvent {
    pub fn moved(x: f32) -> Self {
        Self {
            kind: PointerKind::Move,
            x,
        }
    }
}

/// The simulation: state, scheduler, spawner and host listener
#[derive(Debug)]
pub struct Game<L: GameListener> {
    config: GameConfig,
    seed: u64,
    state: GameState,
    scheduler: Scheduler,
    spawner: Spawner,
    rng: Pcg32,
    /// Present only between a pause and the following resume
    snapshot: Option<Snapshot>,
    listener: L,
}

impl<L: GameListener> Game<L> {
    /// Create a stopped game. The catcher is placed; nothing spawns until
    /// [`Game::start`].
    pub fn new(
        field: PlayField,
        config: GameConfig,
        seed: u64,
        listener: L,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(field, &config),
            scheduler: Scheduler::new(),
            spawner: Spawner::new(config.spawn_interval_ms),
            rng: Pcg32::seed_from_u64(seed),
            snapshot: None,
            seed,
            config,
            listener,
        })
    }

    // === Accessors ===

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn field(&self) -> PlayField {
        self.state.field
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn score(&self) -> u32 {
        self.state.score.get()
    }

    pub fn catcher(&self) -> &Catcher {
        &self.state.catcher
    }

    pub fn catchables(&self) -> &[Catchable] {
        self.state.catchables()
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    /// Pending pause snapshot, if paused after having run
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Current simulation time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    pub fn pending_actions(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }

    // === Entry points ===

    /// Begin play. Same as [`Game::resume`]: restores the pending snapshot
    /// if there is one, otherwise starts spawning immediately.
    pub fn start(&mut self) {
        self.resume();
    }

    /// Advance simulation time by `dt_ms`, running every action that falls due
    pub fn update(&mut self, dt_ms: u64) {
        let target = self.scheduler.now_ms().saturating_add(dt_ms);
        while let Some(action) = self.scheduler.pop_due_by(target) {
            self.run_action(action);
        }
        self.scheduler.advance_to(target);
    }

    /// Advance by one fall step
    pub fn on_tick(&mut self) {
        self.update(self.config.tick_ms);
    }

    /// Steer the catcher. Ignored while paused.
    pub fn on_pointer_move(&mut self, x: f32) {
        if !self.state.running {
            return;
        }
        let field_width = self.state.field.width_f();
        self.state.catcher.move_to(x, field_width);
    }

    /// Route a host pointer event; only drags move the catcher
    pub fn on_pointer(&mut self, event: PointerEvent) {
        if event.kind == PointerKind::Move {
            self.on_pointer_move(event.x);
        }
    }

    /// Freeze everything and remember where it was. No-op when not running.
    pub fn pause(&mut self) {
        if !self.state.running {
            return;
        }
        self.state.running = false;
        let snapshot = Snapshot::capture(&self.state);
        self.scheduler.cancel_all();
        log::info!(
            "Paused at {}ms (score {}, {} in flight)",
            self.now_ms(),
            self.score(),
            snapshot.len()
        );
        self.snapshot = Some(snapshot);
        self.listener.on_running_changed(false);
    }

    /// Restore the pause snapshot and restart every chain. No-op when running.
    pub fn resume(&mut self) {
        if self.state.running {
            return;
        }
        self.state.running = true;

        match self.snapshot.take() {
            Some(snapshot) => {
                self.state.catcher.pos = snapshot.catcher_pos;
                for frozen in self.state.take_catchables() {
                    self.listener.on_catchable(CatchableEvent::Removed {
                        id: frozen.id,
                        reason: RemovalReason::Replaced,
                    });
                }
                for pos in snapshot.catchable_positions {
                    self.create_catchable(pos);
                }
                self.scheduler
                    .post_delayed(Action::Spawn, self.config.resume_spawn_delay_ms);
                log::info!(
                    "Resumed at {}ms with {} in flight",
                    self.now_ms(),
                    self.state.catchables().len()
                );
            }
            None => {
                self.scheduler.post_now(Action::Spawn);
                log::info!("Started (seed {})", self.seed);
            }
        }

        self.listener.on_running_changed(true);
    }

    /// Drop a catchable at a specific position and start its fall.
    ///
    /// Returns `None` while paused.
    pub fn spawn_at(&mut self, pos: Vec2) -> Option<CatchableId> {
        if !self.state.running {
            return None;
        }
        Some(self.create_catchable(pos))
    }

    // === Scheduled actions ===

    fn run_action(&mut self, action: Action) {
        match action {
            Action::Spawn => self.spawn_tick(),
            Action::Advance(id) => self.advance_catchable(id),
        }
    }

    /// One link of the spawner chain
    fn spawn_tick(&mut self) {
        if !self.state.running {
            return;
        }
        if self.spawner.try_spawn(self.now_ms()) {
            let pos = self.random_spawn_pos();
            let id = self.create_catchable(pos);
            log::debug!("Spawned {} at x={:.1} ({}ms)", id, pos.x, self.now_ms());
        }
        self.scheduler
            .post_delayed(Action::Spawn, self.spawner.interval_ms());
    }

    /// Uniform x across the field, fully above the visible area
    fn random_spawn_pos(&mut self) -> Vec2 {
        let max_x = (self.state.field.width_f() - self.config.catchable_width).max(0.0);
        let x = if max_x > 0.0 {
            self.rng.random_range(0.0..=max_x)
        } else {
            0.0
        };
        Vec2::new(x, -self.config.catchable_height)
    }

    fn create_catchable(&mut self, pos: Vec2) -> CatchableId {
        let size = Vec2::new(self.config.catchable_width, self.config.catchable_height);
        let catchable = self.state.spawn_catchable(pos, size);
        self.listener.on_catchable(CatchableEvent::Created {
            id: catchable.id,
            pos,
        });
        self.scheduler.post_now(Action::Advance(catchable.id));
        catchable.id
    }

    /// One link of a catchable's fall chain: move, then resolve catch
    /// before off-field.
    fn advance_catchable(&mut self, id: CatchableId) {
        if !self.state.running {
            return;
        }
        let speed = self.config.catchable_speed;
        let Some(catchable) = self.state.catchable_mut(id) else {
            return;
        };
        catchable.fall(speed);
        let pos = catchable.pos;
        let rect = catchable.rect();
        self.listener.on_catchable(CatchableEvent::Moved { id, pos });

        if catch_predicate(rect, self.state.catcher.rect()) {
            self.state.remove_catchable(id);
            let score = self.state.score.increment();
            log::debug!("Caught {} (score {})", id, score);
            self.listener.on_score_changed(score);
            self.listener.on_catchable(CatchableEvent::Removed {
                id,
                reason: RemovalReason::Caught,
            });
            return;
        }

        if is_below_field(rect, self.state.field.height_f()) {
            self.state.remove_catchable(id);
            log::debug!("Lost {} below the field", id);
            self.listener.on_catchable(CatchableEvent::Removed {
                id,
                reason: RemovalReason::OffField,
            });
            return;
        }

        self.scheduler
            .post_delayed(Action::Advance(id), self.config.tick_ms);
    }
}
