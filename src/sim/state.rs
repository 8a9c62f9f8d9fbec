//! Game state and core simulation types
//!
//! One `GameState` holds everything a frame reads or writes. It is created
//! once and brought back to its starting configuration with `reset()`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::{Layout, Rect};
use crate::consts::*;
use crate::settings::Settings;

/// Whether the frame loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Active gameplay
    Playing,
    /// Terminal state (won or lost), waiting for a reset
    Over,
}

/// Block lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockStatus {
    Active,
    Cleared,
}

/// One grid cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub row: usize,
    pub col: usize,
    pub status: BlockStatus,
    /// Message position revealed by this block. `None` for overflow cells in
    /// the last row, which are never drawn or hit.
    pub char_index: Option<usize>,
}

impl Block {
    /// Active and carrying a character
    pub fn is_live(&self) -> bool {
        self.status == BlockStatus::Active && self.char_index.is_some()
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// The player's paddle (fixed size and height, horizontal position only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
}

impl Paddle {
    pub fn rect(&self, layout: &Layout) -> Rect {
        Rect::new(self.x, layout.paddle_top(), self.width, PADDLE_HEIGHT)
    }
}

/// Things that happened during a step, drained by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    BlockCleared {
        row: usize,
        col: usize,
        char_index: usize,
    },
    /// The last block went down; a win is pending
    AllCleared,
    /// Ball passed the paddle
    BallLost,
    /// Pending win was declared after the delay
    Won,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Grid and canvas geometry
    pub layout: Layout,
    /// Hidden message, one entry per block
    pub message: Vec<char>,
    /// Revealed buffer (placeholder until the matching block clears)
    pub revealed: Vec<char>,
    /// Row-major grid cells
    pub blocks: Vec<Block>,
    pub ball: Ball,
    pub paddle: Paddle,
    pub status: GameStatus,
    /// Set when the grid empties, consumed by `declare_win`
    pub win_pending: bool,
    /// Frames stepped since the last reset
    pub frame: u64,
    /// Ball speed divisor from settings
    speed_divisor: f32,
    /// Pending events (not part of the game's visible state)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game sized to the given canvas
    pub fn new(settings: &Settings, canvas_width: f32, canvas_height: f32) -> Self {
        let message: Vec<char> = settings.message.chars().collect();
        let layout = Layout::new(
            canvas_width,
            canvas_height,
            settings.column_count,
            message.len(),
        );
        let paddle_width = layout.paddle_width();

        let mut state = Self {
            layout,
            revealed: Vec::new(),
            message,
            blocks: Vec::new(),
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
            },
            paddle: Paddle {
                x: 0.0,
                width: paddle_width,
            },
            status: GameStatus::Playing,
            win_pending: false,
            frame: 0,
            speed_divisor: settings.ball_speed_divisor,
            events: Vec::new(),
        };
        state.reset();
        state
    }

    /// Put ball, paddle, blocks and revealed buffer back to their start values
    pub fn reset(&mut self) {
        self.ball.pos = self.layout.ball_start();
        self.ball.vel = self.layout.ball_start_velocity(self.speed_divisor);
        self.paddle.x = (self.layout.canvas_width - self.paddle.width) / 2.0;

        let columns = self.layout.columns;
        let message_len = self.message.len();
        self.blocks.clear();
        self.blocks.extend((0..self.layout.cell_count()).map(|index| {
            let char_index = (index < message_len).then_some(index);
            Block {
                row: index / columns,
                col: index % columns,
                status: if char_index.is_some() {
                    BlockStatus::Active
                } else {
                    BlockStatus::Cleared
                },
                char_index,
            }
        }));

        self.revealed = vec![PLACEHOLDER; message_len];
        self.status = GameStatus::Playing;
        self.win_pending = false;
        self.frame = 0;
        self.events.clear();
    }

    /// Rectangle of a block
    pub fn block_rect(&self, block: &Block) -> Rect {
        self.layout.block_rect(block.row, block.col)
    }

    /// Block at (row, col)
    pub fn block(&self, row: usize, col: usize) -> Option<&Block> {
        if col >= self.layout.columns {
            return None;
        }
        self.blocks.get(row * self.layout.columns + col)
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(message: &str) -> GameState {
        let settings = Settings::default().with_message(message);
        GameState::new(&settings, 700.0, 560.0)
    }

    #[test]
    fn test_reset_positions() {
        let state = state_with("HELLO WORLD");
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.ball.pos, Vec2::new(350.0, 520.0));
        assert!(state.ball.vel.x > 0.0 && state.ball.vel.y < 0.0);
        assert_eq!(state.paddle.width, 175.0);
        assert_eq!(state.paddle.x, (700.0 - 175.0) / 2.0);
    }

    #[test]
    fn test_sixty_characters_on_seven_columns() {
        let message: String = std::iter::repeat('あ').take(60).collect();
        let state = state_with(&message);
        assert_eq!(state.layout.rows, 9);
        assert_eq!(state.blocks.len(), 63);

        let last_row: Vec<_> = (0..7).filter_map(|c| state.block(8, c)).collect();
        let occupied = last_row.iter().filter(|b| b.char_index.is_some()).count();
        assert_eq!(occupied, 4);
        assert!(last_row[4..].iter().all(|b| !b.is_live()));
    }

    #[test]
    fn test_revealed_counts_chars_not_bytes() {
        let state = state_with("よろしく");
        assert_eq!(state.revealed, vec![PLACEHOLDER; 4]);
        assert_eq!(state.blocks.iter().filter(|b| b.is_live()).count(), 4);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut state = state_with("ABCDEFGH");
        state.ball.pos = Vec2::new(1.0, 1.0);
        state.paddle.x = 0.0;
        state.blocks[3].status = BlockStatus::Cleared;
        state.revealed[3] = 'D';
        state.status = GameStatus::Over;
        state.win_pending = true;
        state.events.push(GameEvent::BallLost);

        state.reset();

        assert_eq!(state.status, GameStatus::Playing);
        assert!(!state.win_pending);
        assert!(state.events.is_empty());
        assert!(state.blocks.iter().filter(|b| b.char_index.is_some()).all(|b| b.is_live()));
        assert!(state.revealed.iter().all(|&c| c == PLACEHOLDER));
        assert_eq!(state.ball.pos, state.layout.ball_start());
    }

    #[test]
    fn test_block_lookup_out_of_range() {
        let state = state_with("ABC");
        assert!(state.block(0, 2).is_some());
        assert!(state.block(0, 7).is_none());
        assert!(state.block(1, 0).is_none());
    }
}
