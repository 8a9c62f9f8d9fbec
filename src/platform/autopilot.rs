//! Demo/idle player: holds whichever intent keeps the paddle under the ball

use crate::consts::PADDLE_STEP;
use crate::sim::GameState;

use super::input::InputState;

/// Tracks the ball with the paddle centre
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Distance from the paddle centre that is close enough to stop
    pub dead_zone: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            dead_zone: PADDLE_STEP / 2.0,
        }
    }
}

impl Autopilot {
    /// Intents for the coming frame
    pub fn intents(&self, state: &GameState) -> InputState {
        let center = state.paddle.x + state.paddle.width / 2.0;
        let target = state.ball.pos.x;
        InputState {
            left: target < center - self.dead_zone,
            right: target > center + self.dead_zone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{GameEvent, StepOutcome, step};
    use glam::Vec2;

    fn new_state(message: &str) -> GameState {
        let settings = Settings::default().with_message(message);
        GameState::new(&settings, 700.0, 560.0)
    }

    #[test]
    fn test_intents_follow_ball() {
        let mut state = new_state("ABC");
        let pilot = Autopilot::default();

        state.ball.pos = Vec2::new(50.0, 300.0);
        assert_eq!(pilot.intents(&state), InputState { left: true, right: false });

        state.ball.pos = Vec2::new(650.0, 300.0);
        assert_eq!(pilot.intents(&state), InputState { left: false, right: true });

        state.ball.pos = Vec2::new(state.paddle.x + state.paddle.width / 2.0 + 1.0, 300.0);
        assert_eq!(pilot.intents(&state), InputState::default());
    }

    #[test]
    fn test_autopilot_never_loses_ball() {
        let mut state = new_state("ぼくのなまえはやすこうちといいます。よろしくおねがいします");
        let pilot = Autopilot::default();

        for _ in 0..5000 {
            let input = pilot.intents(&state);
            if step(&mut state, &input) == StepOutcome::Halt {
                break;
            }
        }
        assert!(!state.drain_events().contains(&GameEvent::BallLost));
    }
}
