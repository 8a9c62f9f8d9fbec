//! Reveal Breakout - a breakout game that spells out a hidden message
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (layout, physics, reveal tracking)
//! - `renderer`: Drawing-surface abstraction and the per-frame paint pass
//! - `platform`: Input intents and the adapters that feed them
//! - `settings`: Configuration presets, persisted in LocalStorage on web

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Preset, Settings};

/// Game configuration constants
pub mod consts {
    /// Ball radius in canvas pixels
    pub const BALL_RADIUS: f32 = 10.0;
    /// Ball spawn height above the canvas bottom
    pub const BALL_START_LIFT: f32 = 40.0;

    /// Paddle height in canvas pixels
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Gap between the paddle and the canvas bottom
    pub const PADDLE_GAP: f32 = 5.0;
    /// Paddle width as a fraction of canvas width
    pub const PADDLE_WIDTH_FRACTION: f32 = 0.25;
    /// Paddle movement per frame while an intent is held
    pub const PADDLE_STEP: f32 = 10.0;

    /// Canvas height as a fraction of canvas width
    pub const CANVAS_ASPECT: f32 = 0.8;

    /// Block grid geometry
    pub const BLOCK_WIDTH_INSET: f32 = 8.0;
    pub const BLOCK_HEIGHT_DIVISOR: f32 = 13.0;
    pub const BLOCK_PADDING: f32 = 6.0;
    pub const BLOCK_OFFSET_TOP: f32 = 24.0;
    pub const BLOCK_OFFSET_LEFT: f32 = 10.0;

    /// Delay between the final block clear and the win notification
    pub const WIN_DELAY_MS: u32 = 100;

    /// Glyph shown for characters that have not been revealed yet
    pub const PLACEHOLDER: char = '＿';

    /// Nominal frame duration used by the native driver (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}
