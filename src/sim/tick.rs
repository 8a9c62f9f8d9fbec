//! Per-frame simulation step
//!
//! `step` advances the game by exactly one display frame. The driver calls
//! it once per animation frame and stops scheduling frames as soon as it
//! returns `StepOutcome::Halt`.

use super::collision::{hits_ceiling, hits_side_wall, paddle_covers, point_in_rect_strict};
use super::state::{GameEvent, GameState, GameStatus};
use crate::consts::*;
use crate::platform::InputState;

/// Whether the frame loop should be re-armed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Halt,
}

/// Advance the game state by one frame
pub fn step(state: &mut GameState, input: &InputState) -> StepOutcome {
    if state.status != GameStatus::Playing {
        return StepOutcome::Halt;
    }
    state.frame += 1;

    collide_blocks(state);

    // Walls, paddle and floor against the tentative next position
    let next = state.ball.pos + state.ball.vel;
    if hits_side_wall(next.x, BALL_RADIUS, &state.layout) {
        state.ball.vel.x = -state.ball.vel.x;
    }
    if hits_ceiling(next.y, BALL_RADIUS) {
        state.ball.vel.y = -state.ball.vel.y;
    } else if next.y > state.layout.paddle_line() {
        if paddle_covers(&state.paddle, state.ball.pos.x) {
            state.ball.vel.y = -state.ball.vel.y;
        } else if next.y > state.layout.floor_line() {
            state.status = GameStatus::Over;
            state.events.push(GameEvent::BallLost);
            log::info!(
                "Ball lost at x={:.1} after {} frames ({})",
                state.ball.pos.x,
                state.frame,
                state.revealed_text()
            );
            return StepOutcome::Halt;
        }
    }

    state.ball.pos += state.ball.vel;

    move_paddle(state, input);

    match state.status {
        GameStatus::Playing => StepOutcome::Continue,
        GameStatus::Over => StepOutcome::Halt,
    }
}

/// Test the ball centre against every live block in row-major order.
/// Each hit flips dy on its own, so two hits in one frame cancel out.
fn collide_blocks(state: &mut GameState) {
    for index in 0..state.blocks.len() {
        let block = &state.blocks[index];
        if !block.is_live() {
            continue;
        }
        let rect = state.block_rect(block);
        if point_in_rect_strict(state.ball.pos, &rect) {
            state.ball.vel.y = -state.ball.vel.y;
            state.clear_block(index);
        }
    }
}

/// Move the paddle one step. Right wins when both intents are held, unless
/// the paddle is already against the right wall.
fn move_paddle(state: &mut GameState, input: &InputState) {
    let max_x = state.layout.paddle_max_x();
    let paddle = &mut state.paddle;
    if input.right && paddle.x < max_x {
        paddle.x = (paddle.x + PADDLE_STEP).min(max_x);
    } else if input.left && paddle.x > 0.0 {
        paddle.x = (paddle.x - PADDLE_STEP).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::BlockStatus;
    use glam::Vec2;

    const LEFT: InputState = InputState {
        left: true,
        right: false,
    };
    const RIGHT: InputState = InputState {
        left: false,
        right: true,
    };
    const BOTH: InputState = InputState {
        left: true,
        right: true,
    };

    fn new_state(message: &str) -> GameState {
        let settings = Settings::default().with_message(message);
        GameState::new(&settings, 700.0, 560.0)
    }

    #[test]
    fn test_free_flight_moves_ball() {
        let mut state = new_state("ABCDEFG");
        let start = state.ball.pos;
        let vel = state.ball.vel;
        assert_eq!(step(&mut state, &InputState::default()), StepOutcome::Continue);
        assert_eq!(state.ball.pos, start + vel);
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_block_hit_flips_dy_and_reveals() {
        let mut state = new_state("ABCDEFG");
        let rect = state.layout.block_rect(0, 1);
        state.ball.pos = Vec2::new(rect.x + rect.w / 2.0, rect.y + rect.h / 2.0);
        state.ball.vel = Vec2::new(1.0, -2.0);

        step(&mut state, &InputState::default());

        assert_eq!(state.ball.vel.y, 2.0);
        assert_eq!(state.blocks[1].status, BlockStatus::Cleared);
        assert_eq!(state.revealed_text(), "＿B＿＿＿＿＿");
    }

    #[test]
    fn test_ball_on_block_edge_does_not_collide() {
        let mut state = new_state("ABCDEFG");
        let rect = state.layout.block_rect(0, 0);
        state.ball.pos = Vec2::new(rect.x, rect.y + rect.h / 2.0);
        state.ball.vel = Vec2::new(0.0, -1.0);

        step(&mut state, &InputState::default());

        assert!(state.blocks.iter().all(|b| b.is_live()));
        assert_eq!(state.ball.vel.y, -1.0);
    }

    #[test]
    fn test_double_hit_cancels_dy() {
        let mut state = new_state("ABCDEFGHIJKLMN");
        // Negative padding makes rows 0 and 1 overlap
        state.layout.padding = -20.0;
        let row1 = state.layout.block_rect(1, 3);
        state.ball.pos = Vec2::new(row1.x + 30.0, row1.y + 4.0);
        state.ball.vel = Vec2::new(0.0, -3.0);
        assert!(point_in_rect_strict(state.ball.pos, &state.layout.block_rect(0, 3)));

        step(&mut state, &InputState::default());

        assert_eq!(state.blocks[3].status, BlockStatus::Cleared);
        assert_eq!(state.blocks[10].status, BlockStatus::Cleared);
        assert_eq!(state.ball.vel.y, -3.0);
    }

    #[test]
    fn test_side_wall_bounce() {
        let mut state = new_state("A");
        state.ball.pos = Vec2::new(685.0, 300.0);
        state.ball.vel = Vec2::new(7.0, 1.0);
        step(&mut state, &InputState::default());
        assert_eq!(state.ball.vel.x, -7.0);
        assert_eq!(state.ball.pos, Vec2::new(678.0, 301.0));
    }

    #[test]
    fn test_ceiling_bounce() {
        let mut state = new_state("A");
        state.ball.pos = Vec2::new(600.0, 12.0);
        state.ball.vel = Vec2::new(1.0, -5.0);
        step(&mut state, &InputState::default());
        assert_eq!(state.ball.vel.y, 5.0);
    }

    #[test]
    fn test_paddle_bounce() {
        let mut state = new_state("A");
        let line = state.layout.paddle_line();
        state.ball.pos = Vec2::new(state.paddle.x + 10.0, line - 2.0);
        state.ball.vel = Vec2::new(1.0, 5.0);
        assert_eq!(step(&mut state, &InputState::default()), StepOutcome::Continue);
        assert_eq!(state.ball.vel.y, -5.0);
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn test_miss_between_paddle_line_and_floor_keeps_playing() {
        let mut state = new_state("A");
        state.paddle.x = 0.0;
        let line = state.layout.paddle_line();
        state.ball.pos = Vec2::new(600.0, line - 1.0);
        state.ball.vel = Vec2::new(0.0, 3.0);
        assert_eq!(step(&mut state, &InputState::default()), StepOutcome::Continue);
        assert_eq!(state.ball.pos.y, line + 2.0);
    }

    #[test]
    fn test_ball_lost_halts_until_reset() {
        let mut state = new_state("A");
        state.paddle.x = 0.0;
        let floor = state.layout.floor_line();
        state.ball.pos = Vec2::new(600.0, floor - 1.0);
        state.ball.vel = Vec2::new(2.0, 5.0);
        let frozen = state.ball.pos;

        assert_eq!(step(&mut state, &RIGHT), StepOutcome::Halt);
        assert_eq!(state.status, GameStatus::Over);
        assert_eq!(state.ball.pos, frozen);
        assert_eq!(state.paddle.x, 0.0);
        assert_eq!(state.drain_events(), vec![GameEvent::BallLost]);

        for _ in 0..5 {
            assert_eq!(step(&mut state, &RIGHT), StepOutcome::Halt);
        }
        assert_eq!(state.ball.pos, frozen);
        assert_eq!(state.paddle.x, 0.0);

        state.reset();
        assert_eq!(step(&mut state, &InputState::default()), StepOutcome::Continue);
    }

    #[test]
    fn test_paddle_clamped_left() {
        let mut state = new_state("A");
        state.paddle.x = 0.0;
        step(&mut state, &LEFT);
        assert_eq!(state.paddle.x, 0.0);

        state.paddle.x = 4.0;
        step(&mut state, &LEFT);
        assert_eq!(state.paddle.x, 0.0);
    }

    #[test]
    fn test_paddle_clamped_right() {
        let mut state = new_state("A");
        let max_x = state.layout.paddle_max_x();
        state.paddle.x = max_x - 3.0;
        step(&mut state, &RIGHT);
        assert_eq!(state.paddle.x, max_x);
    }

    #[test]
    fn test_right_intent_wins_tie() {
        let mut state = new_state("A");
        let start = state.paddle.x;
        step(&mut state, &BOTH);
        assert_eq!(state.paddle.x, start + PADDLE_STEP);

        // Against the right wall the left branch gets its turn
        let max_x = state.layout.paddle_max_x();
        state.paddle.x = max_x;
        step(&mut state, &BOTH);
        assert_eq!(state.paddle.x, max_x - PADDLE_STEP);
    }

    #[test]
    fn test_last_block_arms_win_but_keeps_playing() {
        let mut state = new_state("A");
        let rect = state.layout.block_rect(0, 0);
        state.ball.pos = Vec2::new(rect.x + 5.0, rect.y + 5.0);
        state.ball.vel = Vec2::new(1.0, -1.0);

        assert_eq!(step(&mut state, &InputState::default()), StepOutcome::Continue);
        assert!(state.win_pending);
        assert_eq!(state.status, GameStatus::Playing);

        assert!(state.declare_win().is_some());
        assert_eq!(step(&mut state, &InputState::default()), StepOutcome::Halt);
    }
}
