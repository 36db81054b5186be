//! Wall Pong - a single-player paddle and ball arcade game
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, state machine, timers)
//! - `game`: Frame driver wiring timers, input and physics together
//! - `platform`: Input mapping and the browser binding
//! - `settings`: Data-driven arena and animation tuning

pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::{Game, Snapshot};
pub use platform::input::{DirectionSignal, InputState};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 1200.0;

    /// Paddle defaults - a vertical bar near the open right edge
    pub const RACKET_HEIGHT: f32 = 150.0;
    pub const PADDLE_SPEED: f32 = 500.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_START_X: f32 = 30.0;
    pub const BALL_START_VELOCITY: Vec2 = Vec2::new(-500.0, 500.0);

    /// Countdown shown before each game, one label per phase
    pub const COUNTDOWN_LABELS: [&str; 4] = ["3", "2", "1", "0"];
    pub const COUNTDOWN_FADE_IN: f64 = 0.5;
    pub const COUNTDOWN_FADE_OUT: f64 = 0.5;

    /// Game over label spin
    pub const GAME_OVER_TEXT: &str = "Game Over";
    pub const GAME_OVER_ROTATION_DURATION: f64 = 1.0;
    pub const GAME_OVER_ROTATIONS: u32 = 2;

    /// Longest ball substep (120 Hz) so a fast ball cannot skip a wall
    pub const MAX_SUBSTEP: f32 = 1.0 / 120.0;
    /// Cap on substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 240;
}
