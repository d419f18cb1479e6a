use std::collections::HashMap;

use catcher::GameConfig;
use catcher::sim::*;
use glam::Vec2;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Tick(u64),
    Pause,
    Resume,
    Drag(f32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (1u64..=40).prop_map(Op::Tick),
        1 => Just(Op::Pause),
        1 => Just(Op::Resume),
        2 => (-2_000.0f32..3_000.0).prop_map(Op::Drag),
    ]
}

fn apply(game: &mut Game<EventLog>, op: &Op) {
    match *op {
        Op::Tick(dt) => game.update(dt),
        Op::Pause => game.pause(),
        Op::Resume => game.resume(),
        Op::Drag(x) => game.on_pointer(PointerEvent::moved(x)),
    }
}

fn sorted(mut positions: Vec<Vec2>) -> Vec<Vec2> {
    positions.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    positions
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn catcher_stays_in_bounds(
        field_width in 1u32..2_000,
        catcher_width in 1.0f32..500.0,
        pointer_x in prop::num::f32::ANY,
    ) {
        let config = GameConfig { catcher_width, ..Default::default() };
        let field = PlayField::new(field_width, 800);
        let mut catcher = Catcher::new(&field, &config);
        catcher.move_to(pointer_x, field.width_f());

        let max_x = (field.width_f() - catcher_width).max(0.0);
        prop_assert!(catcher.pos.x >= 0.0);
        prop_assert!(catcher.pos.x <= max_x);
    }

    #[test]
    fn spawns_never_closer_than_interval(
        interval in 50u64..2_000,
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 1..400),
    ) {
        let config = GameConfig { spawn_interval_ms: interval, ..Default::default() };
        let mut game = Game::new(PlayField::new(400, 800), config, seed, EventLog::new()).unwrap();
        game.start();

        // Each op covers less than one interval, so no spawn goes unobserved
        let mut spawn_times = Vec::new();
        for op in &ops {
            apply(&mut game, op);
            if let Some(t) = game.spawner().last_spawn_ms() {
                if spawn_times.last() != Some(&t) {
                    spawn_times.push(t);
                }
            }
        }

        for pair in spawn_times.windows(2) {
            prop_assert!(pair[1] - pair[0] >= interval);
        }
    }

    #[test]
    fn motion_and_score_invariants(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 1..400),
    ) {
        let mut game = Game::new(PlayField::new(400, 800), GameConfig::default(), seed, EventLog::new()).unwrap();
        game.start();
        let max_x = 400.0 - game.catcher().size.x;

        for op in &ops {
            let running = game.is_running();
            let score_before = game.score();
            let before: HashMap<CatchableId, Vec2> =
                game.catchables().iter().map(|c| (c.id, c.pos)).collect();

            apply(&mut game, op);

            prop_assert!(game.score() >= score_before);
            prop_assert!(game.catcher().pos.x >= 0.0 && game.catcher().pos.x <= max_x);

            if running {
                for c in game.catchables() {
                    if let Some(old) = before.get(&c.id) {
                        prop_assert!(c.pos.y >= old.y);
                        prop_assert_eq!(c.pos.x, old.x);
                    }
                }
            } else if !matches!(op, Op::Resume) {
                let after: HashMap<CatchableId, Vec2> =
                    game.catchables().iter().map(|c| (c.id, c.pos)).collect();
                prop_assert_eq!(&after, &before);
            }
        }

        // Exactly one point per caught catchable
        let log = game.listener();
        prop_assert_eq!(game.score() as usize, log.removed(RemovalReason::Caught));
        let scores = log.scores();
        for (i, s) in scores.iter().enumerate() {
            prop_assert_eq!(*s as usize, i + 1);
        }
    }

    #[test]
    fn pause_resume_round_trip(
        seed in any::<u64>(),
        ticks in 0usize..400,
        drag in 0.0f32..400.0,
    ) {
        let mut game = Game::new(PlayField::new(400, 800), GameConfig::default(), seed, EventLog::new()).unwrap();
        game.start();
        for _ in 0..ticks {
            game.on_tick();
        }
        game.on_pointer_move(drag);

        let catcher = game.catcher().pos;
        let positions = sorted(game.catchables().iter().map(|c| c.pos).collect());

        game.pause();
        game.resume();

        prop_assert_eq!(game.catcher().pos, catcher);
        let restored = sorted(game.catchables().iter().map(|c| c.pos).collect());
        prop_assert_eq!(restored, positions);
    }
}
