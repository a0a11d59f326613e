//! Per-tick ball movement: wall reflection, paddle resolution, integration

use crate::consts::*;

use super::collision::paddle_return_vel_y;
use super::state::{Ball, Paddle};

/// What the ball touched this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Wall,
    Paddle,
}

/// True when the ball's top or bottom edge has crossed the court's
/// vertical bounds
#[inline]
pub fn hitting_walls(ball: &Ball) -> bool {
    ball.pos.y - Ball::HALF.y < 0.0 || ball.pos.y + Ball::HALF.y > SCREEN_HEIGHT
}

/// Advance an in-play ball by one tick.
///
/// Wall reflection and paddle collision are alternatives within a tick: a
/// ball touching both only reflects off the wall. The position always
/// integrates by one velocity step afterwards, whatever was resolved.
pub fn advance_ball(ball: &mut Ball, paddle_a: &Paddle, paddle_b: &Paddle) -> Option<Contact> {
    let contact = if hitting_walls(ball) {
        ball.vel.y = -ball.vel.y;
        Some(Contact::Wall)
    } else {
        resolve_paddles(ball, paddle_a, paddle_b)
    };

    ball.pos += ball.vel;
    contact
}

/// Resolve paddle contact for both paddles, tested independently.
///
/// Each contact sets the return angle from its own strike offset and nudges
/// the ball outward by half a paddle width. When both paddles register in
/// the same tick, both positional corrections apply but `vel.x` is negated
/// exactly once, as a shared post-step.
fn resolve_paddles(ball: &mut Ball, paddle_a: &Paddle, paddle_b: &Paddle) -> Option<Contact> {
    let hit_a = ball.aabb().overlaps(&paddle_a.aabb());
    let hit_b = ball.aabb().overlaps(&paddle_b.aabb());

    if hit_a {
        ball.vel.y = paddle_return_vel_y(paddle_a.pos.y, ball.pos.y);
        ball.pos.x += PADDLE_WIDTH / 2.0;
    }
    if hit_b {
        ball.vel.y = paddle_return_vel_y(paddle_b.pos.y, ball.pos.y);
        ball.pos.x -= PADDLE_WIDTH / 2.0;
    }

    if hit_a || hit_b {
        ball.vel.x = -ball.vel.x;
        Some(Contact::Paddle)
    } else {
        None
    }
}
