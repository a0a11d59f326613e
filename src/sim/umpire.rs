//! Out-of-bounds scoring and win detection

use log::info;

use crate::consts::*;

use super::service::switch_service;
use super::state::{MatchState, Player, Scene};

/// End the point when the ball leaves the court horizontally.
///
/// Exiting past the right edge scores for Player One, past the left edge
/// for Player Two; the two cannot happen in the same tick. Scoring freezes
/// the ball where it stopped, increments the scorer's tally, and hands
/// service to the other player.
pub fn check_out_of_bounds(state: &mut MatchState) -> Option<Player> {
    let scorer = if state.ball.pos.x > SCREEN_WIDTH {
        Player::One
    } else if state.ball.pos.x < 0.0 {
        Player::Two
    } else {
        return None;
    };

    state.ball.active = false;
    state.score[scorer.index()] += 1;
    switch_service(state);
    info!(
        "point to player {:?}, score {}-{}",
        scorer, state.score[0], state.score[1]
    );
    Some(scorer)
}

/// Move to the win scene the instant either score passes the threshold.
///
/// Runs every Play tick regardless of ball activity, so the decisive point
/// and the win land in the same tick and no further scoring can occur.
pub fn check_win(state: &mut MatchState) -> Option<Player> {
    if state.score[0] <= WIN_THRESHOLD && state.score[1] <= WIN_THRESHOLD {
        return None;
    }

    let winner = if state.score[0] > state.score[1] {
        Player::One
    } else {
        Player::Two
    };
    state.winner = Some(winner);
    state.ball.active = false;
    state.scene = Scene::Win;
    info!(
        "player {:?} wins {}-{}",
        winner, state.score[0], state.score[1]
    );
    Some(winner)
}
