//! Ping - a two-player video tennis simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (scenes, physics, collisions, scoring)
//!
//! Rendering, audio playback, input polling, and frame scheduling are
//! external collaborators. The caller samples its input devices into an
//! [`sim::InputSnapshot`], calls [`sim::tick`] exactly once per display
//! refresh, and consumes the returned render intent and audio cues. The
//! simulation itself never blocks, polls, or draws.

pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Court width in world units
    pub const SCREEN_WIDTH: f32 = 800.0;
    /// Court height in world units
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;
    /// Paddle travel per tick
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Ball edge length (the ball is a square, classic style)
    pub const BALL_DIAMETER: f32 = 5.0;
    /// Horizontal ball speed per tick
    pub const BALL_SPEED: f32 = 4.0;

    /// First score strictly above this wins the match
    pub const WIN_THRESHOLD: u8 = 9;

    /// Divisor applied to the strike offset when computing the paddle
    /// return angle. Tuned by feel, not derived.
    pub const DEFLECT_DIVISOR: f32 = 10.0;
    /// How far in front of the serving paddle the ball drops
    pub const SERVE_OFFSET: f32 = BALL_DIAMETER * 3.0;

    /// Title screen text
    pub const TITLE_HEADING: &str = "PING";
    pub const TITLE_TAGLINE: &str = "THE STATE OF THE ART VIDEO TENNIS EXPERIENCE!";
}
