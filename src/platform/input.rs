//! Pointer/touch input mapping
//!
//! The host reports where a touch starts and when it ends. A touch in the
//! upper half of the arena moves the paddle up, the lower half moves it down.
//! The signal is sticky: it holds until the touch ends or a new one starts.

use serde::{Deserialize, Serialize};

/// Paddle direction intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DirectionSignal {
    #[default]
    None,
    /// Toward increasing y
    Up,
    /// Toward decreasing y
    Down,
}

impl DirectionSignal {
    /// -1, 0 or +1 along the y axis
    pub fn sign(self) -> f32 {
        match self {
            DirectionSignal::None => 0.0,
            DirectionSignal::Up => 1.0,
            DirectionSignal::Down => -1.0,
        }
    }
}

/// Latest direction signal, last write wins
#[derive(Debug, Clone, Default)]
pub struct InputState {
    signal: DirectionSignal,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) -> DirectionSignal {
        self.signal
    }

    /// A touch began at vertical coordinate `y` (arena units, y up)
    ///
    /// Exactly on the midpoint keeps the current signal. A non-finite
    /// coordinate clears it.
    pub fn begin(&mut self, y: f64, arena_height: f32) {
        if !y.is_finite() {
            log::warn!("Ignoring non-finite touch coordinate {}", y);
            self.signal = DirectionSignal::None;
            return;
        }
        let mid = arena_height as f64 / 2.0;
        if y > mid {
            self.signal = DirectionSignal::Up;
        } else if y < mid {
            self.signal = DirectionSignal::Down;
        }
    }

    /// Several touches began together; the last one processed wins
    pub fn begin_many(&mut self, ys: &[f64], arena_height: f32) {
        for &y in ys {
            self.begin(y, arena_height);
        }
    }

    /// All touches ended
    pub fn end(&mut self) {
        self.signal = DirectionSignal::None;
    }
}
