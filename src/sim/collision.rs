//! Collision tests for the ball
//!
//! Block hits test only the ball's centre, with strict inequalities, so a
//! ball grazing a block with its radius does not clear it. Walls, paddle and
//! floor are tested against the tentative next position.

use glam::Vec2;

use super::layout::{Layout, Rect};
use super::state::Paddle;

/// Point strictly inside a rectangle (edges do not count)
#[inline]
pub fn point_in_rect_strict(point: Vec2, rect: &Rect) -> bool {
    point.x > rect.x && point.x < rect.right() && point.y > rect.y && point.y < rect.bottom()
}

/// Ball x within the paddle span `[x, x + width)`
#[inline]
pub fn paddle_covers(paddle: &Paddle, ball_x: f32) -> bool {
    ball_x >= paddle.x && ball_x < paddle.x + paddle.width
}

/// Next x would put the ball into a side wall
#[inline]
pub fn hits_side_wall(next_x: f32, radius: f32, layout: &Layout) -> bool {
    next_x > layout.canvas_width - radius || next_x < radius
}

/// Next y would put the ball into the ceiling
#[inline]
pub fn hits_ceiling(next_y: f32, radius: f32) -> bool {
    next_y < radius
}
