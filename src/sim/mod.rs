//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Time only enters as a frame delta or a timestamp
//! - Timed animations go through the timer queue
//! - Walls are resolved in a fixed order before the paddle

pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{Body, CollisionWorld, Contact};
pub use geometry::{Axis, Circle, Rect, intersects, reflect};
pub use state::{Ball, GameEvent, GamePhase, GameState, Label, Paddle, Wall, WallSide};
pub use tick::{TickOutcome, max_tick_dt, substep_count, tick};
pub use timer::TimerQueue;
