//! Serve placement and service alternation

use log::debug;

use crate::consts::*;

use super::state::{MatchState, Player};

/// Put the ball in play from the active player's paddle.
///
/// The ball drops a fixed offset in front of the serving paddle at that
/// paddle's height with a flat horizontal velocity; any return angle comes
/// entirely from the stroke that answers it.
pub fn serve(state: &mut MatchState) {
    state.rally = 0;
    state.ball.vel.y = 0.0;
    state.ball.active = true;

    match state.active_player {
        Player::One => {
            state.ball.pos.x = state.paddle_a.pos.x + SERVE_OFFSET;
            state.ball.pos.y = state.paddle_a.pos.y;
            state.ball.vel.x = -BALL_SPEED;
        }
        Player::Two => {
            state.ball.pos.x = state.paddle_b.pos.x - SERVE_OFFSET;
            state.ball.pos.y = state.paddle_b.pos.y;
            state.ball.vel.x = BALL_SPEED;
        }
    }
    debug!("player {:?} serves", state.active_player);
}

/// Hand service to the other player. Called exactly once per scored point,
/// immediately after the score increment, never otherwise.
pub fn switch_service(state: &mut MatchState) {
    state.active_player = state.active_player.opponent();
}
