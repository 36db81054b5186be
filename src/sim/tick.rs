//! Playing-phase simulation tick
//!
//! Moves the paddle from the current direction signal, advances the ball in
//! equal substeps (resolving collisions and counting paddle hits after each
//! one), then checks whether the ball escaped through the open edge. A tick
//! covers at most [`max_tick_dt`]; a longer frame drops the excess.

use super::collision::{CollisionWorld, Contact};
use super::state::{GamePhase, GameState};
use crate::consts::MAX_SUBSTEPS;
use crate::platform::input::DirectionSignal;
use crate::settings::Settings;

/// What happened during one tick
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    /// Every contact resolved, in order
    pub contacts: Vec<Contact>,
    /// Paddle hits scored this tick
    pub paddle_hits: u32,
    /// The ball crossed the open edge
    pub escaped: bool,
}

/// Number of equal substeps needed so none is longer than `max_substep`
pub fn substep_count(dt: f32, max_substep: f32) -> u32 {
    if !(dt > 0.0) {
        return 0;
    }
    ((dt / max_substep).ceil() as u32).clamp(1, MAX_SUBSTEPS)
}

/// Longest time one tick simulates: `MAX_SUBSTEPS` substeps of `max_substep`
pub fn max_tick_dt(max_substep: f32) -> f32 {
    max_substep * MAX_SUBSTEPS as f32
}

/// Advance a Playing game by `dt` seconds
///
/// Does nothing outside Playing or for `dt <= 0` (including NaN). Score and
/// the GameOver transition are applied to `state` directly; `now` is the
/// frame timestamp used to stamp the transition.
pub fn tick(
    state: &mut GameState,
    world: &mut CollisionWorld,
    signal: DirectionSignal,
    dt: f32,
    settings: &Settings,
    now: f64,
) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if state.phase != GamePhase::Playing || !state.ball_in_play || !(dt > 0.0) {
        return outcome;
    }
    let max_dt = max_tick_dt(settings.max_substep);
    if dt > max_dt {
        log::warn!("Frame took {:.3}s; simulating only {:.3}s", dt, max_dt);
    }
    let dt = dt.min(max_dt);

    // Paddle moves once per tick with the whole frame time
    let delta_y = signal.sign() * settings.paddle_speed * dt;
    if delta_y != 0.0 {
        state.paddle.move_by(delta_y, settings.height);
    }

    let steps = substep_count(dt, settings.max_substep);
    let step_dt = dt / steps as f32;

    for _ in 0..steps {
        state.ball.advance(step_dt);

        let contacts = world.step(&mut state.ball, &state.paddle);
        for contact in &contacts {
            if contact.is_paddle_hit() {
                state.record_paddle_hit();
                outcome.paddle_hits += 1;
            }
        }
        outcome.contacts.extend(contacts);
    }

    if state.ball_escaped(settings) {
        state.end_game(now);
        outcome.escaped = true;
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameEvent;
    use glam::Vec2;

    fn playing() -> (Settings, GameState, CollisionWorld) {
        let settings = Settings::default();
        let mut state = GameState::new(&settings);
        state.start_playing(&settings, 0.0);
        state.drain_events();
        let world = CollisionWorld::new(&settings);
        (settings, state, world)
    }

    #[test]
    fn test_substep_count() {
        assert_eq!(substep_count(0.0, 0.01), 0);
        assert_eq!(substep_count(-1.0, 0.01), 0);
        assert_eq!(substep_count(f32::NAN, 0.01), 0);
        assert_eq!(substep_count(0.005, 0.01), 1);
        assert_eq!(substep_count(0.1, 1.0 / 120.0), 12);
        assert_eq!(substep_count(1.0e6, 0.01), MAX_SUBSTEPS);
        assert_eq!(substep_count(max_tick_dt(1.0 / 120.0), 1.0 / 120.0), MAX_SUBSTEPS);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let (settings, mut state, mut world) = playing();
        state.ball.pos = Vec2::new(400.0, 600.0);
        state.ball.vel = Vec2::new(-500.0, 500.0);
        state.paddle.y = 100.0;

        tick(&mut state, &mut world, DirectionSignal::Up, 120.0, &settings, 120.0);

        // Two seconds of travel at most, bounced around inside the walls
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.ball.pos.x >= 40.0 && state.ball.pos.x <= 740.0);
        assert!(state.ball.pos.y >= 40.0 && state.ball.pos.y <= 1160.0);
        assert_eq!(state.paddle.y, 1050.0);
    }

    #[test]
    fn test_escape_triggers_game_over() {
        let (settings, mut state, mut world) = playing();
        state.ball.pos = Vec2::new(790.0, 600.0);
        state.ball.vel = Vec2::new(500.0, 0.0);
        state.paddle.y = 0.0;

        let outcome = tick(&mut state, &mut world, DirectionSignal::None, 0.1, &settings, 5.0);

        assert!(outcome.escaped);
        assert!((state.ball.pos.x - 840.0).abs() < 0.01);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.ball_in_play);
    }

    #[test]
    fn test_no_advance_after_escape() {
        let (settings, mut state, mut world) = playing();
        state.ball.pos = Vec2::new(790.0, 300.0);
        state.ball.vel = Vec2::new(500.0, 0.0);
        tick(&mut state, &mut world, DirectionSignal::None, 0.1, &settings, 1.0);
        let frozen = state.ball.pos;

        let outcome = tick(&mut state, &mut world, DirectionSignal::Up, 0.1, &settings, 1.1);
        assert!(!outcome.escaped);
        assert_eq!(state.ball.pos, frozen);
    }

    #[test]
    fn test_paddle_hit_scores() {
        let (settings, mut state, mut world) = playing();
        state.paddle.y = 0.0;
        state.score = 4;
        state.ball.pos = Vec2::new(735.0, 75.0);
        state.ball.vel = Vec2::new(500.0, 200.0);

        let outcome = tick(&mut state, &mut world, DirectionSignal::None, 0.02, &settings, 1.0);

        assert_eq!(outcome.paddle_hits, 1);
        assert_eq!(state.score, 5);
        assert!(state.ball.vel.x < 0.0);
        assert_eq!(state.ball.vel.y, 200.0);
        assert!(state.events.contains(&GameEvent::ScoreChanged(5)));
    }

    #[test]
    fn test_paddle_follows_signal() {
        let (settings, mut state, mut world) = playing();
        state.paddle.y = 100.0;

        tick(&mut state, &mut world, DirectionSignal::Up, 1.0, &settings, 1.0);
        assert_eq!(state.paddle.y, 600.0);

        tick(&mut state, &mut world, DirectionSignal::Down, 0.5, &settings, 1.5);
        assert_eq!(state.paddle.y, 350.0);

        tick(&mut state, &mut world, DirectionSignal::None, 0.5, &settings, 2.0);
        assert_eq!(state.paddle.y, 350.0);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let (settings, mut state, mut world) = playing();
        let before = (state.ball.pos, state.ball.vel, state.paddle.y);

        let outcome = tick(&mut state, &mut world, DirectionSignal::Up, 0.0, &settings, 1.0);

        assert!(outcome.contacts.is_empty());
        assert_eq!((state.ball.pos, state.ball.vel, state.paddle.y), before);
    }

    #[test]
    fn test_not_playing_is_noop() {
        let settings = Settings::default();
        let mut state = GameState::new(&settings);
        let mut world = CollisionWorld::new(&settings);
        let before = state.ball.pos;

        tick(&mut state, &mut world, DirectionSignal::Up, 0.5, &settings, 1.0);

        assert_eq!(state.ball.pos, before);
        assert_eq!(state.paddle.y, settings.paddle_start_y());
    }
}
