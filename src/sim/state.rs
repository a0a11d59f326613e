//! Match state and core simulation types
//!
//! Everything the engine mutates over the course of a match lives in the
//! single [`MatchState`] aggregate. There is exactly one owner and one
//! writer; collaborators only ever see the per-tick output.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// Current scene of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scene {
    /// Title screen, waiting for confirm
    Title,
    /// Active match
    Play,
    /// Match decided, waiting for confirm to rematch
    Win,
}

/// Player identity; also addresses the score board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Score board slot for this player
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// The other player
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// false = out of play, frozen at its rest point
    pub active: bool,
}

impl Ball {
    /// Half-extents of the square ball
    pub const HALF: Vec2 = Vec2::new(BALL_DIAMETER / 2.0, BALL_DIAMETER / 2.0);

    /// Bounding box at the current position
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Self::HALF)
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            vel: Vec2::ZERO,
            active: false,
        }
    }
}

/// A player's paddle. x is fixed per side; only y ever moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
}

impl Paddle {
    /// Half-extents of the paddle
    pub const HALF: Vec2 = Vec2::new(PADDLE_WIDTH / 2.0, PADDLE_HEIGHT / 2.0);
    /// Paddle centers stay inside the court by half a paddle height
    pub const Y_MIN: f32 = PADDLE_HEIGHT / 2.0;
    pub const Y_MAX: f32 = SCREEN_HEIGHT - PADDLE_HEIGHT / 2.0;

    pub fn new(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, SCREEN_HEIGHT / 2.0),
        }
    }

    /// Bounding box at the current position
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Self::HALF)
    }

    /// One step toward the top edge, clamped to the court
    pub fn move_up(&mut self) {
        self.pos.y = (self.pos.y - PADDLE_SPEED).clamp(Self::Y_MIN, Self::Y_MAX);
    }

    /// One step toward the bottom edge, clamped to the court
    pub fn move_down(&mut self) {
        self.pos.y = (self.pos.y + PADDLE_SPEED).clamp(Self::Y_MIN, Self::Y_MAX);
    }
}

/// Complete match state: the single mutable aggregate owned by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub scene: Scene,
    /// Who serves the next point
    pub active_player: Player,
    /// Points per player, indexed by [`Player::index`]
    pub score: [u8; 2],
    /// Paddle contacts in the current point (informational)
    pub rally: u32,
    /// Set exactly once, the tick the win condition is first met
    pub winner: Option<Player>,
    pub ball: Ball,
    /// Left paddle, Player One
    pub paddle_a: Paddle,
    /// Right paddle, Player Two
    pub paddle_b: Paddle,
}

impl MatchState {
    /// Fresh state on the title screen
    pub fn new() -> Self {
        Self {
            scene: Scene::Title,
            active_player: Player::One,
            score: [0, 0],
            rally: 0,
            winner: None,
            ball: Ball::default(),
            paddle_a: Paddle::new(PADDLE_WIDTH),
            paddle_b: Paddle::new(SCREEN_WIDTH - PADDLE_WIDTH),
        }
    }

    /// Reset every match variable to its starting value
    pub fn reinitialize(&mut self) {
        *self = Self::new();
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
