//! Per-tick scene dispatch
//!
//! The external scheduler calls [`tick`] exactly once per display refresh
//! with a fresh input snapshot. Inputs are handled first, exactly as
//! sampled, then the active scene's behavior runs; the returned
//! [`TickOutput`] is everything collaborators get to see.

use glam::Vec2;
use log::info;

use crate::consts::*;

use super::physics::{Contact, advance_ball};
use super::service::serve;
use super::state::{MatchState, Player, Scene};
use super::umpire::{check_out_of_bounds, check_win};

/// Held-control snapshot for a single tick.
///
/// The caller maps whatever devices it owns onto these six controls before
/// the tick; the simulation never re-samples mid-tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub paddle_a_up: bool,
    pub paddle_a_down: bool,
    pub paddle_b_up: bool,
    pub paddle_b_down: bool,
    pub serve: bool,
    pub confirm: bool,
}

/// Discrete audio signal, fire-and-forget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Wall or paddle contact
    Hit,
    /// Match decided
    Win,
}

/// What the renderer should draw for the frame that just ran
#[derive(Debug, Clone, PartialEq)]
pub enum RenderIntent {
    Title {
        heading: &'static str,
        tagline: &'static str,
    },
    Play {
        score: [u8; 2],
        paddle_a: Vec2,
        paddle_b: Vec2,
        /// Present only while the ball is in play
        ball: Option<Vec2>,
    },
    Win {
        winner: Player,
    },
}

/// Result of one tick: a render intent plus at most one of each cue
#[derive(Debug, Clone)]
pub struct TickOutput {
    pub render: RenderIntent,
    pub cues: Vec<Cue>,
}

/// Advance the match by one frame.
pub fn tick(state: &mut MatchState, input: &InputSnapshot) -> TickOutput {
    let mut cues = Vec::new();

    // Input phase. Gameplay controls only land in Play; the terminal
    // scenes honor nothing but confirm, which starts a fresh match.
    match state.scene {
        Scene::Play => apply_play_inputs(state, input),
        Scene::Title | Scene::Win => {
            if input.confirm {
                state.reinitialize();
                state.scene = Scene::Play;
                info!("match started");
            }
        }
    }

    // Scene behavior for this frame.
    let render = match state.scene {
        Scene::Title => RenderIntent::Title {
            heading: TITLE_HEADING,
            tagline: TITLE_TAGLINE,
        },
        Scene::Play => {
            update(state, &mut cues);
            RenderIntent::Play {
                score: state.score,
                paddle_a: state.paddle_a.pos,
                paddle_b: state.paddle_b.pos,
                ball: state.ball.active.then_some(state.ball.pos),
            }
        }
        Scene::Win => RenderIntent::Win {
            // Invariant: winner is always set while the scene is Win.
            winner: state.winner.unwrap_or(Player::One),
        },
    };

    TickOutput { render, cues }
}

/// Directional triggers move the paddles (up wins over down per side,
/// clamped travel); serve is honored only while the ball is down.
fn apply_play_inputs(state: &mut MatchState, input: &InputSnapshot) {
    if input.paddle_a_up {
        state.paddle_a.move_up();
    } else if input.paddle_a_down {
        state.paddle_a.move_down();
    }

    if input.paddle_b_up {
        state.paddle_b.move_up();
    } else if input.paddle_b_down {
        state.paddle_b.move_down();
    }

    if input.serve && !state.ball.active {
        serve(state);
    }
}

/// One Play-scene step: physics and collision while the ball is in play,
/// then bounds umpiring, then the unconditional win check.
fn update(state: &mut MatchState, cues: &mut Vec<Cue>) {
    if state.ball.active {
        if let Some(contact) = advance_ball(
            &mut state.ball,
            &state.paddle_a,
            &state.paddle_b,
        ) {
            if contact == Contact::Paddle {
                state.rally += 1;
            }
            cues.push(Cue::Hit);
        }
        check_out_of_bounds(state);
    }

    if check_win(state).is_some() {
        cues.push(Cue::Win);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirm() -> InputSnapshot {
        InputSnapshot {
            confirm: true,
            ..InputSnapshot::default()
        }
    }

    #[test]
    fn title_ignores_gameplay_inputs() {
        let mut state = MatchState::new();
        let input = InputSnapshot {
            paddle_a_up: true,
            paddle_b_down: true,
            serve: true,
            ..InputSnapshot::default()
        };

        let before = state.clone();
        let out = tick(&mut state, &input);

        assert_eq!(state, before);
        assert!(matches!(out.render, RenderIntent::Title { .. }));
        assert!(out.cues.is_empty());
    }

    #[test]
    fn confirm_on_title_starts_a_fresh_match() {
        let mut state = MatchState::new();

        let out = tick(&mut state, &confirm());

        assert_eq!(state.scene, Scene::Play);
        assert_eq!(state.score, [0, 0]);
        assert!(!state.ball.active);
        assert!(state.winner.is_none());
        // The confirm frame already runs (and renders) the play scene.
        assert!(matches!(out.render, RenderIntent::Play { ball: None, .. }));
    }

    #[test]
    fn win_scene_reports_the_winner_until_confirmed() {
        let mut state = MatchState::new();
        state.scene = Scene::Win;
        state.winner = Some(Player::Two);
        state.score = [4, 10];

        let out = tick(&mut state, &InputSnapshot::default());
        assert_eq!(
            out.render,
            RenderIntent::Win {
                winner: Player::Two
            }
        );
        assert_eq!(state.scene, Scene::Win);

        tick(&mut state, &confirm());
        assert_eq!(state.scene, Scene::Play);
        assert_eq!(state.score, [0, 0]);
        assert!(state.winner.is_none());
    }

    #[test]
    fn serve_only_fires_while_the_ball_is_down() {
        let mut state = MatchState::new();
        state.scene = Scene::Play;

        let input = InputSnapshot {
            serve: true,
            ..InputSnapshot::default()
        };
        tick(&mut state, &input);
        assert!(state.ball.active);
        let vel = state.ball.vel;

        // Ball already in play: the held serve trigger must not re-place it.
        tick(&mut state, &input);
        assert_eq!(state.ball.vel, vel);
    }

    #[test]
    fn paddle_triggers_move_and_up_wins_over_down() {
        let mut state = MatchState::new();
        state.scene = Scene::Play;
        let y = state.paddle_a.pos.y;

        let input = InputSnapshot {
            paddle_a_up: true,
            paddle_a_down: true,
            paddle_b_down: true,
            ..InputSnapshot::default()
        };
        tick(&mut state, &input);

        assert_eq!(state.paddle_a.pos.y, y - PADDLE_SPEED);
        assert_eq!(state.paddle_b.pos.y, y + PADDLE_SPEED);
    }

    #[test]
    fn paddle_contact_bumps_the_rally_and_cues_a_hit() {
        let mut state = MatchState::new();
        state.scene = Scene::Play;
        state.ball.active = true;
        state.ball.pos = Vec2::new(state.paddle_b.pos.x - 5.0, state.paddle_b.pos.y);
        state.ball.vel = Vec2::new(BALL_SPEED, 0.0);

        let out = tick(&mut state, &InputSnapshot::default());

        assert_eq!(state.rally, 1);
        assert!(out.cues.contains(&Cue::Hit));
        assert!(!out.cues.contains(&Cue::Win));
    }

    #[test]
    fn wall_contact_cues_a_hit_without_touching_the_rally() {
        let mut state = MatchState::new();
        state.scene = Scene::Play;
        state.ball.active = true;
        state.ball.pos = Vec2::new(400.0, 1.0);
        state.ball.vel = Vec2::new(BALL_SPEED, -2.0);

        let out = tick(&mut state, &InputSnapshot::default());

        assert_eq!(state.rally, 0);
        assert!(out.cues.contains(&Cue::Hit));
    }
}
