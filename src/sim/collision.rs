//! Axis-aligned collision detection and the paddle-return rule

use glam::Vec2;

use crate::consts::*;

/// An axis-aligned box given by its center and half-extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Closed-interval overlap test: the boxes' projections must overlap on
    /// both axes, and touching edges count as colliding.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let gap = (self.center - other.center).abs();
        let reach = self.half + other.half;
        gap.cmple(reach).all()
    }
}

/// Vertical return velocity for a ball struck at `ball_y` by a paddle
/// centered at `paddle_y`.
///
/// The return angle is proportional to how far off paddle-center the ball
/// hit; a dead-center strike returns flat.
#[inline]
pub fn paddle_return_vel_y(paddle_y: f32, ball_y: f32) -> f32 {
    BALL_SPEED * (paddle_y - ball_y) / DEFLECT_DIVISOR
}
