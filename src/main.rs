//! Catcher entry point
//!
//! Headless host: drives the simulation with a fixed-step accumulator,
//! steers the catcher like a player dragging a finger, and logs what the
//! simulation reports.

use anyhow::{Context, Result};

use catcher::GameConfig;
use catcher::sim::{CatchableEvent, Game, GameListener, PlayField, PointerEvent, RemovalReason};

/// Host frame time (~60 Hz display)
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Maximum substeps per frame to prevent spiral of death
const MAX_SUBSTEPS: u32 = 8;
/// Session length in frames
const SESSION_FRAMES: u32 = 60 * 30;
/// Auto-pause window, in frames (as if the app lost focus)
const PAUSE_AT_FRAME: u32 = 60 * 10;
const RESUME_AT_FRAME: u32 = 60 * 12;

/// Listener standing in for the on-screen widgets
#[derive(Debug, Default)]
struct HostView {
    score: u32,
    resume_visible: bool,
    spawned: u32,
    caught: u32,
    missed: u32,
}

impl GameListener for HostView {
    fn on_score_changed(&mut self, score: u32) {
        self.score = score;
        log::info!("Score: {}", score);
    }

    fn on_running_changed(&mut self, running: bool) {
        self.resume_visible = !running;
        log::info!("Resume button {}", if running { "hidden" } else { "shown" });
    }

    fn on_catchable(&mut self, event: CatchableEvent) {
        match event {
            CatchableEvent::Created { id, pos } => {
                self.spawned += 1;
                log::debug!("Show {} at ({:.0}, {:.0})", id, pos.x, pos.y);
            }
            CatchableEvent::Moved { .. } => {}
            CatchableEvent::Removed { id, reason } => {
                match reason {
                    RemovalReason::Caught => self.caught += 1,
                    RemovalReason::OffField => self.missed += 1,
                    RemovalReason::Replaced => {}
                }
                log::debug!("Hide {} ({:?})", id, reason);
            }
        }
    }
}

/// Follow the catchable closest to the bottom
fn autopilot_target(game: &Game<HostView>) -> Option<f32> {
    game.catchables()
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|c| c.pos.x + c.size.x / 2.0)
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Catcher (headless) starting...");

    let config = GameConfig::default();
    log::debug!("Config: {}", config.to_json()?);

    let field = PlayField::new(400, 800);
    let seed = 0x5eed;
    let mut game =
        Game::new(field, config, seed, HostView::default()).context("invalid game config")?;
    let tick_ms = game.config().tick_ms as f64;

    game.start();

    let mut accumulator = 0.0;
    for frame in 0..SESSION_FRAMES {
        if frame == PAUSE_AT_FRAME {
            game.pause();
        }
        if frame == RESUME_AT_FRAME {
            game.resume();
        }

        if let Some(x) = autopilot_target(&game) {
            game.on_pointer(PointerEvent::moved(x));
        }

        accumulator += FRAME_MS;
        let mut substeps = 0;
        while accumulator >= tick_ms && substeps < MAX_SUBSTEPS {
            game.on_tick();
            accumulator -= tick_ms;
            substeps += 1;
        }
    }

    let view = game.listener();
    log::info!(
        "Session over: score {} ({} spawned, {} caught, {} missed, {} still falling, paused: {})",
        view.score,
        view.spawned,
        view.caught,
        view.missed,
        game.catchables().len(),
        view.resume_visible
    );
    println!("Final score: {}", game.score());
    Ok(())
}
