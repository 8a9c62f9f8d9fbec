//! Movement intents
//!
//! Keyboard keys and the on-screen arrow buttons both end up as press/release
//! calls on `InputState`. The state is level-triggered: an intent stays on
//! until its release arrives.

/// Paddle movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Map a `KeyboardEvent.key` value. Older browsers report `"Left"`/`"Right"`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Direction::Left),
            "ArrowRight" | "Right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// DOM id of the on-screen button for this direction
    pub fn affordance_id(&self) -> &'static str {
        match self {
            Direction::Left => "touch-left",
            Direction::Right => "touch-right",
        }
    }
}

/// Held movement intents, read once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn press(&mut self, dir: Direction) {
        self.set(dir, true);
    }

    pub fn release(&mut self, dir: Direction) {
        self.set(dir, false);
    }

    /// Release everything (on reset or focus loss)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    /// Key-down handler. Returns true if the key was a movement key.
    pub fn key_down(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(dir) => {
                self.press(dir);
                true
            }
            None => false,
        }
    }

    /// Key-up handler. Returns true if the key was a movement key.
    pub fn key_up(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(dir) => {
                self.release(dir);
                true
            }
            None => false,
        }
    }
}
