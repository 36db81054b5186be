//! Property tests for the physics invariants

use glam::Vec2;
use proptest::prelude::*;
use wall_pong::sim::{Ball, CollisionWorld, GamePhase, GameState, Paddle, WallSide, tick};
use wall_pong::{DirectionSignal, Game, Settings};

fn signal() -> impl Strategy<Value = DirectionSignal> {
    prop_oneof![
        Just(DirectionSignal::None),
        Just(DirectionSignal::Up),
        Just(DirectionSignal::Down),
    ]
}

fn playing_state(settings: &Settings) -> GameState {
    let mut state = GameState::new(settings);
    state.start_playing(settings, 0.0);
    state
}

proptest! {
    #[test]
    fn test_paddle_stays_in_arena(
        start_y in 0.0f32..1050.0,
        moves in prop::collection::vec((signal(), 0.0f32..3.0), 1..40),
    ) {
        let settings = Settings::default();
        let mut state = playing_state(&settings);
        let mut world = CollisionWorld::new(&settings);
        state.paddle.y = start_y;

        let mut now = 0.0;
        for (signal, dt) in moves {
            now += dt as f64;
            tick(&mut state, &mut world, signal, dt, &settings, now);
            prop_assert!(state.paddle.y >= 0.0);
            prop_assert!(state.paddle.y <= settings.paddle_max_y());
            if state.phase != GamePhase::Playing {
                break;
            }
        }
    }

    #[test]
    fn test_contacts_preserve_speed(
        x in 0.0f32..800.0,
        y in 0.0f32..1200.0,
        vx in -1000.0f32..1000.0,
        vy in -1000.0f32..1000.0,
        paddle_y in 0.0f32..1050.0,
    ) {
        let settings = Settings::default();
        let mut world = CollisionWorld::new(&settings);
        let mut paddle = Paddle::new(&settings);
        paddle.y = paddle_y;
        let mut ball = Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), settings.ball_radius);
        let before = ball.speed();

        world.step(&mut ball, &paddle);

        prop_assert!((ball.speed() - before).abs() <= before * 1e-6);
    }

    #[test]
    fn test_ball_never_leaves_through_a_wall(
        x in 40.0f32..740.0,
        y in 40.0f32..1160.0,
        vx in -1000.0f32..1000.0,
        vy in -1000.0f32..1000.0,
        dt in 0.0f32..300.0,
    ) {
        let settings = Settings::default();
        let mut state = playing_state(&settings);
        let mut world = CollisionWorld::new(&settings);
        state.ball.pos = Vec2::new(x, y);
        state.ball.vel = Vec2::new(vx, vy);

        tick(&mut state, &mut world, DirectionSignal::None, dt, &settings, dt as f64);

        let pos = state.ball.pos;
        if state.phase == GamePhase::GameOver {
            prop_assert!(pos.x > settings.width);
        } else {
            let walls = world.walls();
            let left = walls.iter().find(|w| w.side == WallSide::Left).unwrap();
            let bottom = walls.iter().find(|w| w.side == WallSide::Bottom).unwrap();
            let top = walls.iter().find(|w| w.side == WallSide::Top).unwrap();
            prop_assert!(pos.x >= left.rect.max_x());
            prop_assert!(pos.y >= bottom.rect.max_y());
            prop_assert!(pos.y <= top.rect.min_y());
        }
    }

    #[test]
    fn test_one_approach_scores_one_hit(
        x in 600.0f32..700.0,
        y in 540.0f32..610.0,
        vx in 300.0f32..800.0,
        vy in -30.0f32..30.0,
        dts in prop::collection::vec(1.0f32 / 120.0..1.0 / 60.0, 72),
    ) {
        let settings = Settings::default();
        let mut state = playing_state(&settings);
        let mut world = CollisionWorld::new(&settings);
        state.paddle.y = 500.0;
        state.ball.pos = Vec2::new(x, y);
        state.ball.vel = Vec2::new(vx, vy);

        let mut hits = 0;
        let mut now = 0.0;
        for dt in dts {
            now += dt as f64;
            let outcome = tick(&mut state, &mut world, DirectionSignal::None, dt, &settings, now);
            hits += outcome.paddle_hits;
        }

        // Ball reaches the face within half a second and has no time to come back
        prop_assert_eq!(hits, 1);
        prop_assert_eq!(state.score, 1);
        prop_assert!(state.ball.vel.x < 0.0);
        prop_assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_repeated_timestamp_is_idempotent(
        t in 4.0f64..8.0,
        touch in prop::option::of(0.0f64..1200.0),
    ) {
        let mut game = Game::default();
        game.on_frame(0.0);
        game.on_frame(4.0);
        if let Some(y) = touch {
            game.on_input_start(y);
        }
        game.on_frame(t);
        let ball = game.state().ball.clone();
        let paddle = game.paddle_rect();
        let phase = game.phase();

        game.on_frame(t);

        prop_assert_eq!(game.state().ball.pos, ball.pos);
        prop_assert_eq!(game.state().ball.vel, ball.vel);
        prop_assert_eq!(game.paddle_rect(), paddle);
        prop_assert_eq!(game.phase(), phase);
    }
}
