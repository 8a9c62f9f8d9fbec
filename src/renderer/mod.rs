//! Rendering module
//!
//! The paint pass only reads `GameState` and talks to a `DrawSurface`. On web
//! the surface is a 2D canvas context; headless runs and tests record the
//! draw calls instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;

use crate::consts::BALL_RADIUS;
use crate::sim::{GameState, Rect};

/// Colors for game elements (CSS color strings)
pub mod colors {
    pub const BLOCK: &str = "#39f";
    pub const BALL: &str = "#fa0";
    pub const PADDLE: &str = "#0fa";
}

/// Minimal 2D drawing context
pub trait DrawSurface {
    /// Set the fill color used by subsequent fills
    fn set_fill(&mut self, color: &str);
    fn clear_rect(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
}

/// Paint one frame: clear, then blocks, ball and paddle
pub fn render(state: &GameState, surface: &mut impl DrawSurface) {
    let layout = &state.layout;
    surface.clear_rect(Rect::new(
        0.0,
        0.0,
        layout.canvas_width,
        layout.canvas_height,
    ));

    surface.set_fill(colors::BLOCK);
    for block in state.blocks.iter().filter(|b| b.is_live()) {
        surface.fill_rect(state.block_rect(block));
    }

    surface.set_fill(colors::BALL);
    surface.fill_circle(state.ball.pos, BALL_RADIUS);

    surface.set_fill(colors::PADDLE);
    surface.fill_rect(state.paddle.rect(layout));
}
