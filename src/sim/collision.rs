//! Collision detection and response
//!
//! The ball is the only dynamic body. Each step it is tested against the
//! three walls, then the paddle. An overlapping ball is pushed back onto the
//! surface and its velocity reflected along the surface normal.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Axis, Rect, intersects, reflect};
use super::state::{Ball, Paddle, Wall, WallSide};
use crate::settings::Settings;

/// What the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Body {
    Wall(WallSide),
    Paddle,
}

/// A contact resolved during one step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub body: Body,
    /// Axis the ball was reflected along
    pub axis: Axis,
    /// Whether velocity was actually reflected (ball was moving into the surface)
    pub reflected: bool,
}

impl Contact {
    /// A paddle contact that began this step (scores a point)
    pub fn is_paddle_hit(&self) -> bool {
        self.body == Body::Paddle
    }
}

/// Static walls plus contact memory for the paddle
#[derive(Debug, Clone)]
pub struct CollisionWorld {
    walls: [Wall; 3],
    /// Ball was touching the paddle at the end of the previous step
    paddle_touching: bool,
}

impl CollisionWorld {
    pub fn new(settings: &Settings) -> Self {
        Self {
            walls: Wall::arena_walls(settings),
            paddle_touching: false,
        }
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Forget contact history (new game)
    pub fn reset(&mut self) {
        self.paddle_touching = false;
    }

    /// Resolve all overlaps for this step, walls first, then the paddle
    ///
    /// Only the start of a paddle contact is reported, so a ball pressed
    /// against the paddle over several steps scores once.
    pub fn step(&mut self, ball: &mut Ball, paddle: &Paddle) -> Vec<Contact> {
        let mut contacts = Vec::new();

        for wall in &self.walls {
            if !intersects(&ball.circle(), &wall.rect) {
                continue;
            }
            let contact = resolve_wall(ball, wall);
            log::debug!("Ball hit {:?} wall at {:?}", wall.side, ball.pos);
            contacts.push(contact);
        }

        let paddle_rect = paddle.rect();
        if intersects(&ball.circle(), &paddle_rect) {
            let contact = resolve_paddle(ball, &paddle_rect);
            if !self.paddle_touching {
                log::debug!("Ball hit paddle at {:?}", ball.pos);
                contacts.push(contact);
            }
            self.paddle_touching = true;
        } else {
            self.paddle_touching = false;
        }

        contacts
    }
}

/// Reflect along `axis` only if the velocity points against `outward`
fn reflect_if_approaching(vel: Vec2, axis: Axis, outward: f32) -> (Vec2, bool) {
    let along = match axis {
        Axis::X => vel.x,
        Axis::Y => vel.y,
    };
    if along * outward < 0.0 {
        (reflect(vel, axis), true)
    } else {
        (vel, false)
    }
}

fn resolve_wall(ball: &mut Ball, wall: &Wall) -> Contact {
    let r = ball.radius;
    let (axis, outward) = match wall.side {
        WallSide::Left => {
            ball.pos.x = wall.rect.max_x() + r;
            (Axis::X, 1.0)
        }
        WallSide::Bottom => {
            ball.pos.y = wall.rect.max_y() + r;
            (Axis::Y, 1.0)
        }
        WallSide::Top => {
            ball.pos.y = wall.rect.min_y() - r;
            (Axis::Y, -1.0)
        }
    };
    let (vel, reflected) = reflect_if_approaching(ball.vel, axis, outward);
    ball.vel = vel;
    Contact {
        body: Body::Wall(wall.side),
        axis,
        reflected,
    }
}

/// The paddle reflects along X: leftward off its face, rightward off its back
fn resolve_paddle(ball: &mut Ball, rect: &Rect) -> Contact {
    let outward = if ball.pos.x <= rect.center().x {
        ball.pos.x = ball.pos.x.min(rect.min_x() - ball.radius);
        -1.0
    } else {
        // Already past the face; never pull an escaping ball back in
        ball.pos.x = ball.pos.x.max(rect.max_x() + ball.radius);
        1.0
    };
    let (vel, reflected) = reflect_if_approaching(ball.vel, Axis::X, outward);
    ball.vel = vel;
    Contact {
        body: Body::Paddle,
        axis: Axis::X,
        reflected,
    }
}
