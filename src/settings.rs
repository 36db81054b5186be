//! Game tuning and arena settings
//!
//! Defaults come from [`crate::consts`]. A host may override any subset of
//! fields with a JSON document; missing fields keep their defaults.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Error loading or validating settings
#[derive(Debug)]
pub enum SettingsError {
    /// Settings file could not be read
    Io(std::io::Error),
    /// Settings text is not valid JSON for [`Settings`]
    Parse(serde_json::Error),
    /// A value is out of range
    Invalid(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings: {}", e),
            SettingsError::Parse(e) => write!(f, "failed to parse settings: {}", e),
            SettingsError::Invalid(reason) => write!(f, "invalid settings: {}", reason),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Arena, entity and animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub width: f32,
    pub height: f32,

    // === Entities ===
    pub ball_radius: f32,
    /// Paddle height (its width is the ball radius)
    pub racket_height: f32,
    /// Paddle speed (units/second)
    pub paddle_speed: f32,
    pub ball_start: Vec2,
    pub ball_start_velocity: Vec2,

    // === Countdown ===
    /// Label shown in each countdown phase, in order
    pub countdown_labels: Vec<String>,
    pub countdown_fade_in: f64,
    pub countdown_fade_out: f64,

    // === Game over ===
    /// Duration of one full label rotation
    pub game_over_rotation_duration: f64,
    pub game_over_rotations: u32,

    // === Physics ===
    /// Longest ball substep; longer frames are split
    pub max_substep: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,

            ball_radius: BALL_RADIUS,
            racket_height: RACKET_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            ball_start: Vec2::new(BALL_START_X, ARENA_HEIGHT / 2.0),
            ball_start_velocity: BALL_START_VELOCITY,

            countdown_labels: COUNTDOWN_LABELS.iter().map(|s| s.to_string()).collect(),
            countdown_fade_in: COUNTDOWN_FADE_IN,
            countdown_fade_out: COUNTDOWN_FADE_OUT,

            game_over_rotation_duration: GAME_OVER_ROTATION_DURATION,
            game_over_rotations: GAME_OVER_ROTATIONS,

            max_substep: MAX_SUBSTEP,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Check that the arena can hold its walls, paddle and ball
    pub fn validate(&self) -> Result<(), SettingsError> {
        let finite = [
            self.width,
            self.height,
            self.ball_radius,
            self.racket_height,
            self.paddle_speed,
            self.max_substep,
        ]
        .iter()
        .all(|v| v.is_finite())
            && self.ball_start.is_finite()
            && self.ball_start_velocity.is_finite();
        if !finite {
            return Err(SettingsError::Invalid("values must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SettingsError::Invalid("arena size must be positive"));
        }
        if self.ball_radius <= 0.0 || self.width <= 2.0 * self.ball_radius {
            return Err(SettingsError::Invalid("ball radius does not fit the arena"));
        }
        if self.racket_height <= 0.0 || self.racket_height > self.height {
            return Err(SettingsError::Invalid("racket height does not fit the arena"));
        }
        if self.paddle_speed < 0.0 {
            return Err(SettingsError::Invalid("paddle speed must not be negative"));
        }
        if self.max_substep <= 0.0 {
            return Err(SettingsError::Invalid("max substep must be positive"));
        }
        if self.countdown_labels.is_empty() {
            return Err(SettingsError::Invalid("countdown needs at least one label"));
        }
        let durations = [
            self.countdown_fade_in,
            self.countdown_fade_out,
            self.game_over_rotation_duration,
        ];
        if !durations.iter().all(|d| d.is_finite()) {
            return Err(SettingsError::Invalid("durations must be finite"));
        }
        if !(self.countdown_fade_in >= 0.0 && self.countdown_fade_out >= 0.0) {
            return Err(SettingsError::Invalid("fade durations must not be negative"));
        }
        if self.countdown_phase_duration() <= 0.0 {
            return Err(SettingsError::Invalid("countdown phase must take time"));
        }
        if !(self.game_over_rotation_duration >= 0.0) {
            return Err(SettingsError::Invalid("rotation duration must not be negative"));
        }
        Ok(())
    }

    /// Duration of a single countdown phase (fade in + fade out)
    pub fn countdown_phase_duration(&self) -> f64 {
        self.countdown_fade_in + self.countdown_fade_out
    }

    /// Total countdown duration
    pub fn countdown_duration(&self) -> f64 {
        self.countdown_phase_duration() * self.countdown_labels.len() as f64
    }

    /// Total game over animation duration
    pub fn game_over_duration(&self) -> f64 {
        self.game_over_rotation_duration * self.game_over_rotations as f64
    }

    /// Highest legal paddle y
    pub fn paddle_max_y(&self) -> f32 {
        self.height - self.racket_height
    }

    /// Fixed paddle x (two ball radii from the open edge)
    pub fn paddle_x(&self) -> f32 {
        self.width - 2.0 * self.ball_radius
    }

    /// Paddle y at the start of a game
    pub fn paddle_start_y(&self) -> f32 {
        (self.height / 2.0).clamp(0.0, self.paddle_max_y())
    }
}
