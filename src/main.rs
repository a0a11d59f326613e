//! Ping headless driver
//!
//! Drives the simulation from outside the way a real front end would: one
//! tick per frame, inputs sampled before each tick, render intents and
//! audio cues consumed after. No window, no sound device; the match plays
//! itself with scripted paddles and the log is the spectator stand.

use log::{debug, info};

use ping::consts::*;
use ping::sim::{Cue, InputSnapshot, MatchState, RenderIntent, Scene, tick};

/// Give up on a match that somehow never ends (ten minutes at 60 Hz)
const TICK_LIMIT: u32 = 60 * 60 * 10;

/// Paddle A aims off-center by this much to put angle on its returns
const AIM_OFFSET: f32 = 15.0;

fn main() {
    env_logger::init();

    let mut state = MatchState::new();
    info!("ping starting");

    for _ in 0..TICK_LIMIT {
        let input = script_input(&state);
        let out = tick(&mut state, &input);

        for cue in &out.cues {
            match cue {
                Cue::Hit => debug!("blip"),
                Cue::Win => info!("fanfare"),
            }
        }

        if let RenderIntent::Win { winner } = out.render {
            println!(
                "player {winner:?} takes the match {}-{}",
                state.score[0], state.score[1]
            );
            return;
        }
    }

    println!(
        "no winner after {TICK_LIMIT} ticks, score {}-{}",
        state.score[0], state.score[1]
    );
}

/// Stand-in for input polling: confirm through the title screen, serve
/// whenever the ball is down, and play both paddles.
///
/// Paddle A chases the ball with a deliberate off-center aim so its returns
/// carry an angle; paddle B never moves. The asymmetry decides the match.
fn script_input(state: &MatchState) -> InputSnapshot {
    let mut input = InputSnapshot::default();

    match state.scene {
        Scene::Title => input.confirm = true,
        Scene::Win => {}
        Scene::Play => {
            if !state.ball.active {
                input.serve = true;
            }

            let target = state.ball.pos.y + AIM_OFFSET;
            if state.paddle_a.pos.y > target + PADDLE_SPEED {
                input.paddle_a_up = true;
            } else if state.paddle_a.pos.y < target - PADDLE_SPEED {
                input.paddle_a_down = true;
            }
        }
    }

    input
}
