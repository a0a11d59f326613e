//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display refresh, no delta-time scaling
//! - Input arrives as a per-tick snapshot, never polled
//! - No rendering, audio, or platform dependencies

pub mod collision;
pub mod physics;
pub mod service;
pub mod state;
pub mod tick;
pub mod umpire;

pub use collision::{Aabb, paddle_return_vel_y};
pub use physics::{Contact, advance_ball, hitting_walls};
pub use service::{serve, switch_service};
pub use state::{Ball, MatchState, Paddle, Player, Scene};
pub use tick::{Cue, InputSnapshot, RenderIntent, TickOutput, tick};
