//! Block grid geometry
//!
//! Everything here is derived from the canvas size, the column count and the
//! message length. Collision and rendering both read block rectangles from
//! the same `Layout` so they can never disagree about where a block is.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Canvas and block grid geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub columns: usize,
    pub rows: usize,
    pub block_width: f32,
    pub block_height: f32,
    /// Gap between neighbouring blocks
    pub padding: f32,
    pub offset_top: f32,
    pub offset_left: f32,
}

/// Rows needed to give every message character its own block
pub fn row_count(message_len: usize, columns: usize) -> usize {
    if columns == 0 {
        return 0;
    }
    message_len.div_ceil(columns)
}

impl Layout {
    pub fn new(canvas_width: f32, canvas_height: f32, columns: usize, message_len: usize) -> Self {
        Self {
            canvas_width,
            canvas_height,
            columns,
            rows: row_count(message_len, columns),
            block_width: canvas_width / columns as f32 - BLOCK_WIDTH_INSET,
            block_height: canvas_height / BLOCK_HEIGHT_DIVISOR,
            padding: BLOCK_PADDING,
            offset_top: BLOCK_OFFSET_TOP,
            offset_left: BLOCK_OFFSET_LEFT,
        }
    }

    /// Total grid cells (including overflow cells in the last row)
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Rectangle of the block at (row, col)
    pub fn block_rect(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            col as f32 * (self.block_width + self.padding) + self.offset_left,
            row as f32 * (self.block_height + self.padding) + self.offset_top,
            self.block_width,
            self.block_height,
        )
    }

    pub fn paddle_width(&self) -> f32 {
        self.canvas_width * PADDLE_WIDTH_FRACTION
    }

    /// Top edge of the paddle
    pub fn paddle_top(&self) -> f32 {
        self.canvas_height - PADDLE_HEIGHT - PADDLE_GAP
    }

    /// Rightmost legal paddle x
    pub fn paddle_max_x(&self) -> f32 {
        self.canvas_width - self.paddle_width()
    }

    /// Ball centre y beyond which the paddle is consulted
    pub fn paddle_line(&self) -> f32 {
        self.canvas_height - BALL_RADIUS - PADDLE_HEIGHT - PADDLE_GAP
    }

    /// Ball centre y beyond which the ball is lost
    pub fn floor_line(&self) -> f32 {
        self.canvas_height - BALL_RADIUS
    }

    /// Ball spawn point
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(self.canvas_width / 2.0, self.canvas_height - BALL_START_LIFT)
    }

    /// Ball launch velocity: rightward and upward, scaled to the canvas
    pub fn ball_start_velocity(&self, speed_divisor: f32) -> Vec2 {
        Vec2::new(
            self.canvas_width / speed_divisor,
            -self.canvas_height / speed_divisor,
        )
    }
}
