//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches the DOM or a
//! drawing surface:
//! - One `step` per display frame, no wall-clock time
//! - Stable iteration order (row-major over the block grid)
//! - Input arrives as a plain `InputState` value

pub mod collision;
pub mod layout;
pub mod reveal;
pub mod state;
pub mod tick;

pub use collision::{paddle_covers, point_in_rect_strict};
pub use layout::{Layout, Rect, row_count};
pub use state::{Ball, Block, BlockStatus, GameEvent, GameState, GameStatus, Paddle};
pub use tick::{StepOutcome, step};
