//! Frame driver
//!
//! [`Game`] owns everything: settings, state machine, collision world, input
//! and the timer queue. The host calls [`Game::on_frame`] once per rendered
//! frame with its clock, forwards touches through the input methods, then
//! reads back state and drains events to draw.

use serde::Serialize;

use crate::platform::input::{DirectionSignal, InputState};
use crate::settings::Settings;
use crate::sim::{
    Ball, CollisionWorld, GameEvent, GamePhase, GameState, Label, Rect, TimerQueue, Wall, tick,
};

/// Actions the state machine schedules for later frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheduled {
    /// Show the countdown label with this index
    CountdownPhase(usize),
    /// Last countdown phase faded out; start playing
    CountdownDone,
    /// Game over spin finished; start the next countdown
    GameOverDone,
}

/// Ball as drawn by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub score_text: String,
    /// Absent while the ball is out of play
    pub ball: Option<BallView>,
    pub paddle: Rect,
    pub label: Option<Label>,
}

/// A whole game session
#[derive(Debug, Clone)]
pub struct Game {
    settings: Settings,
    state: GameState,
    world: CollisionWorld,
    input: InputState,
    timers: TimerQueue<Scheduled>,
    /// Set once the first frame has started the first countdown
    started: bool,
    /// Timestamp of the previous Playing frame; None right after entering Playing
    play_clock: Option<f64>,
    /// Timestamp of the latest frame
    now: f64,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let state = GameState::new(&settings);
        let world = CollisionWorld::new(&settings);
        Self {
            settings,
            state,
            world,
            input: InputState::new(),
            timers: TimerQueue::new(),
            started: false,
            play_clock: None,
            now: 0.0,
        }
    }

    /// Drive one frame at host time `now` (seconds)
    pub fn on_frame(&mut self, now: f64) {
        if !now.is_finite() {
            log::warn!("Ignoring frame with non-finite timestamp {}", now);
            return;
        }
        self.now = now;

        if !self.started {
            self.started = true;
            self.begin_countdown(now);
        }

        while let Some((deadline, action)) = self.timers.pop_due(now) {
            self.fire(action, deadline);
        }

        if self.state.phase != GamePhase::Playing {
            return;
        }

        // The first Playing frame only starts the clock
        if let Some(previous) = self.play_clock {
            let dt = (now - previous).max(0.0) as f32;
            let outcome = tick(
                &mut self.state,
                &mut self.world,
                self.input.signal(),
                dt,
                &self.settings,
                now,
            );
            if outcome.escaped {
                self.timers
                    .schedule(now + self.settings.game_over_duration(), Scheduled::GameOverDone);
            }
        }
        self.play_clock = Some(now);
    }

    /// A touch began at vertical coordinate `y`
    pub fn on_input_start(&mut self, y: f64) {
        self.input.begin(y, self.settings.height);
    }

    /// Several touches began together; the last one wins
    pub fn on_inputs_start(&mut self, ys: &[f64]) {
        self.input.begin_many(ys, self.settings.height);
    }

    /// Touches ended; the paddle stops
    pub fn on_input_end(&mut self) {
        self.input.end();
    }

    fn begin_countdown(&mut self, at: f64) {
        self.state.begin_countdown(&self.settings, at);
        self.world.reset();
        self.play_clock = None;

        let phase = self.settings.countdown_phase_duration();
        let phases = self.settings.countdown_labels.len();
        for index in 1..phases {
            self.timers
                .schedule(at + phase * index as f64, Scheduled::CountdownPhase(index));
        }
        self.timers
            .schedule(at + self.settings.countdown_duration(), Scheduled::CountdownDone);
    }

    /// Run a due timer; `at` is its deadline, used as the base for follow-ups
    fn fire(&mut self, action: Scheduled, at: f64) {
        match action {
            Scheduled::CountdownPhase(index) => {
                self.state.show_countdown_phase(&self.settings, index, at);
            }
            Scheduled::CountdownDone => {
                self.world.reset();
                self.play_clock = None;
                self.state.start_playing(&self.settings, at);
            }
            Scheduled::GameOverDone => self.begin_countdown(at),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Score label text
    pub fn score_text(&self) -> String {
        self.state.score.to_string()
    }

    /// The ball, while it is in play
    pub fn ball(&self) -> Option<&Ball> {
        self.state.ball_in_play.then_some(&self.state.ball)
    }

    pub fn paddle_rect(&self) -> Rect {
        self.state.paddle.rect()
    }

    /// Static walls; they never change, so query once
    pub fn walls(&self) -> &[Wall] {
        self.world.walls()
    }

    pub fn signal(&self) -> DirectionSignal {
        self.input.signal()
    }

    /// Centre label at the latest frame time
    pub fn label(&self) -> Option<Label> {
        self.state.label(&self.settings, self.now)
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase(),
            score: self.score(),
            score_text: self.score_text(),
            ball: self.ball().map(|b| BallView {
                x: b.pos.x,
                y: b.pos.y,
                radius: b.radius,
            }),
            paddle: self.paddle_rect(),
            label: self.label(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for scripted scenarios (tests, demos)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
