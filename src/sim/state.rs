//! Game state and entity types
//!
//! The state machine (Countdown -> Playing -> GameOver -> Countdown) owns the
//! score, the ball and the paddle. Transitions queue [`GameEvent`]s for the
//! host to drain.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Circle, Rect};
use crate::settings::Settings;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// "3", "2", "1", "0" before each game; no physics
    Countdown,
    /// Active gameplay
    Playing,
    /// Ball escaped; label spins before the next countdown
    GameOver,
}

/// Notifications for the renderer/host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreChanged(u32),
    StateChanged(GamePhase),
    /// A countdown phase started showing this label
    CountdownPhase(String),
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Linear integration; velocity only changes on reflection
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    pub fn circle(&self) -> Circle {
        Circle::new(self.pos, self.radius)
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Fixed x of the paddle's left edge
    pub x: f32,
    /// Bottom edge; the only coordinate that moves
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(settings: &Settings) -> Self {
        Self {
            x: settings.paddle_x(),
            y: settings.paddle_start_y(),
            width: settings.ball_radius,
            height: settings.racket_height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Move vertically, clamped so the paddle stays inside the arena
    pub fn move_by(&mut self, delta_y: f32, arena_height: f32) {
        let max_y = (arena_height - self.height).max(0.0);
        self.y = (self.y + delta_y).clamp(0.0, max_y);
    }
}

/// Which side of the arena a wall closes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSide {
    Left,
    Top,
    Bottom,
}

/// A static wall; the right side has none (that is where the ball escapes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub side: WallSide,
    pub rect: Rect,
}

impl Wall {
    /// The three walls, each one ball radius thick
    pub fn arena_walls(settings: &Settings) -> [Wall; 3] {
        let (w, h, t) = (settings.width, settings.height, settings.ball_radius);
        [
            Wall {
                side: WallSide::Left,
                rect: Rect::new(0.0, 0.0, t, h),
            },
            Wall {
                side: WallSide::Bottom,
                rect: Rect::new(0.0, 0.0, w, t),
            },
            Wall {
                side: WallSide::Top,
                rect: Rect::new(0.0, h - t, w, t),
            },
        ]
    }
}

/// Centre label for the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    /// 0 = invisible, 1 = opaque
    pub opacity: f32,
    /// Radians
    pub rotation: f32,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u32,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Ball is only simulated and drawn while in play
    pub ball_in_play: bool,
    /// Index into the countdown labels (valid during Countdown)
    pub countdown_index: usize,
    /// When the current phase (or countdown step) began
    pub phase_started: f64,
    /// Events not yet drained by the host
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state, waiting for the first countdown
    pub fn new(settings: &Settings) -> Self {
        Self {
            phase: GamePhase::Countdown,
            score: 0,
            ball: Self::start_ball(settings),
            paddle: Paddle::new(settings),
            ball_in_play: false,
            countdown_index: 0,
            phase_started: 0.0,
            events: Vec::new(),
        }
    }

    fn start_ball(settings: &Settings) -> Ball {
        Ball::new(
            settings.ball_start,
            settings.ball_start_velocity,
            settings.ball_radius,
        )
    }

    fn set_phase(&mut self, phase: GamePhase, now: f64) {
        self.phase_started = now;
        if self.phase != phase {
            self.phase = phase;
            self.events.push(GameEvent::StateChanged(phase));
        }
    }

    fn set_score(&mut self, score: u32) {
        self.score = score;
        self.events.push(GameEvent::ScoreChanged(score));
    }

    /// Enter Countdown: reset score and entities, show the first label
    pub fn begin_countdown(&mut self, settings: &Settings, now: f64) {
        self.set_phase(GamePhase::Countdown, now);
        self.set_score(0);
        self.ball = Self::start_ball(settings);
        self.paddle = Paddle::new(settings);
        self.ball_in_play = false;
        self.show_countdown_phase(settings, 0, now);
        log::info!("Countdown started");
    }

    /// Switch to the countdown label at `index`
    pub fn show_countdown_phase(&mut self, settings: &Settings, index: usize, now: f64) {
        self.countdown_index = index;
        self.phase_started = now;
        if let Some(text) = settings.countdown_labels.get(index) {
            self.events.push(GameEvent::CountdownPhase(text.clone()));
        }
    }

    /// Countdown finished: put the ball in play
    pub fn start_playing(&mut self, settings: &Settings, now: f64) {
        self.ball = Self::start_ball(settings);
        self.ball_in_play = true;
        self.set_phase(GamePhase::Playing, now);
        log::info!("Playing");
    }

    /// Ball escaped: take it out of play
    pub fn end_game(&mut self, now: f64) {
        self.ball_in_play = false;
        self.set_phase(GamePhase::GameOver, now);
        log::info!("Game over with score {}", self.score);
    }

    /// Count one paddle contact
    pub fn record_paddle_hit(&mut self) {
        self.set_score(self.score + 1);
    }

    /// Has the ball crossed the open right edge?
    pub fn ball_escaped(&self, settings: &Settings) -> bool {
        self.ball.pos.x > settings.width
    }

    /// Label to draw in the arena centre at time `now`, if any
    pub fn label(&self, settings: &Settings, now: f64) -> Option<Label> {
        let elapsed = (now - self.phase_started).max(0.0);
        match self.phase {
            GamePhase::Countdown => {
                let text = settings.countdown_labels.get(self.countdown_index)?;
                Some(Label {
                    text: text.clone(),
                    opacity: countdown_opacity(
                        elapsed,
                        settings.countdown_fade_in,
                        settings.countdown_fade_out,
                    ),
                    rotation: 0.0,
                })
            }
            GamePhase::GameOver => {
                let turns = if settings.game_over_rotation_duration > 0.0 {
                    (elapsed / settings.game_over_rotation_duration)
                        .min(settings.game_over_rotations as f64)
                } else {
                    settings.game_over_rotations as f64
                };
                Some(Label {
                    text: crate::consts::GAME_OVER_TEXT.to_string(),
                    opacity: 1.0,
                    rotation: (turns * std::f64::consts::TAU) as f32,
                })
            }
            GamePhase::Playing => None,
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Fade in to fully opaque, then fade out
fn countdown_opacity(elapsed: f64, fade_in: f64, fade_out: f64) -> f32 {
    let alpha = if elapsed < fade_in {
        elapsed / fade_in
    } else if fade_out > 0.0 {
        1.0 - (elapsed - fade_in) / fade_out
    } else {
        0.0
    };
    alpha.clamp(0.0, 1.0) as f32
}
