//! Reveal tracking and win detection

use super::state::{BlockStatus, GameEvent, GameState, GameStatus};

impl GameState {
    /// Expose the message character at `char_index` (ignored if out of range)
    pub fn reveal(&mut self, char_index: usize) {
        if let (Some(slot), Some(&ch)) = (
            self.revealed.get_mut(char_index),
            self.message.get(char_index),
        ) {
            *slot = ch;
        }
    }

    /// Revealed buffer as display text
    pub fn revealed_text(&self) -> String {
        self.revealed.iter().collect()
    }

    /// Full hidden message
    pub fn message_text(&self) -> String {
        self.message.iter().collect()
    }

    /// True when no block is left standing
    pub fn is_all_cleared(&self) -> bool {
        self.blocks.iter().all(|b| b.status == BlockStatus::Cleared)
    }

    /// Clear the block at `index` in the grid, reveal its character and arm
    /// the pending win if it was the last one. No-op for cleared blocks.
    pub fn clear_block(&mut self, index: usize) {
        let Some(block) = self.blocks.get_mut(index) else {
            return;
        };
        if block.status == BlockStatus::Cleared {
            return;
        }
        block.status = BlockStatus::Cleared;
        let (row, col, char_index) = (block.row, block.col, block.char_index);

        if let Some(char_index) = char_index {
            self.reveal(char_index);
            log::debug!("Cleared block ({}, {}) -> {}", row, col, self.revealed_text());
            self.events.push(GameEvent::BlockCleared {
                row,
                col,
                char_index,
            });
        }

        if !self.win_pending && self.is_all_cleared() {
            self.win_pending = true;
            self.events.push(GameEvent::AllCleared);
        }
    }

    /// Finish a pending win: status becomes Over and the message is returned
    /// for the completion notification. Returns `None` if no win is pending,
    /// so a stale timer after a reset does nothing.
    pub fn declare_win(&mut self) -> Option<String> {
        if !self.win_pending {
            return None;
        }
        self.win_pending = false;
        self.status = GameStatus::Over;
        self.events.push(GameEvent::Won);
        log::info!("Message complete: {}", self.message_text());
        Some(self.message_text())
    }
}
