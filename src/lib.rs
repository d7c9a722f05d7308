//! Rally Pong - mouse-driven Pong against a reactive NPC
//!
//! Core modules:
//! - `sim`: Simulation (entity state, collisions, NPC, per-tick update)
//! - `input`: Pointer/keyboard events and gameplay commands
//! - `renderer`: Stateless draw pass over an opaque 2D canvas
//! - `hud`: Score and timer display sinks
//! - `platform`: Clock and fixed-interval scheduling
//! - `game`: Lifecycle wiring of the above

pub mod game;
pub mod hud;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use game::{Game, MatchSummary};
pub use hud::{DisplaySink, HudReadout};
pub use input::{Command, InputEvent, InputQueue};

/// Axis-aligned playfield rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Border {
    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }
}

/// Game configuration constants
pub mod consts {
    use super::Border;

    /// Tick interval in milliseconds (~60 Hz)
    pub const TICK_INTERVAL_MS: f64 = 1000.0 / 60.0;
    /// Maximum ticks run by one scheduler poll before re-anchoring
    pub const MAX_CATCHUP_TICKS: u32 = 8;

    /// Match length
    pub const GAME_DURATION_SECS: f64 = 90.0;

    /// Logical playfield (scoring edges left/right, bounce edges top/bottom)
    pub const BORDER: Border = Border {
        left: 0.0,
        top: 0.0,
        right: 640.0,
        bottom: 480.0,
    };

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 75.0;
    pub const PADDLE_START_Y: f32 = 200.0;
    pub const PLAYER_PADDLE_X: f32 = 10.0;
    pub const NPC_PADDLE_X: f32 = BORDER.right - 30.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_MIN_RADIUS: f32 = 5.0;
    pub const BALL_MAX_RADIUS: f32 = 50.0;
    pub const BALL_RADIUS_STEP: f32 = 5.0;
    pub const BALL_BASE_SPEED: f32 = 3.0;
    pub const BALL_START_VELOCITY: (f32, f32) = (3.0, 2.0);
    /// Per-axis speed cap after a paddle hit
    pub const BALL_MAX_SPEED: f32 = 12.0;
    /// Speed boost when ball hits a paddle (multiplicative)
    pub const PADDLE_BOOST: f32 = 1.05;
    /// Vertical velocity added for an edge hit (scaled by hit offset)
    pub const MAX_DEFLECTION: f32 = 5.0;

    /// NPC tracking
    pub const NPC_SPEED: f32 = 3.0;
    pub const NPC_DEAD_ZONE: f32 = 15.0;
    pub const NPC_FREEZE_MS: f64 = 2000.0;
}

/// True when `value` lies in the closed range `[min, max]`
#[inline]
pub fn is_in_bounds(value: f32, min: f32, max: f32) -> bool {
    value >= min && value <= max
}

/// Clamp a velocity component to `[-max, max]`, keeping its sign
#[inline]
pub fn clamp_axis(value: f32, max: f32) -> f32 {
    if value.abs() > max {
        max.copysign(value)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_in_bounds_inclusive() {
        assert!(is_in_bounds(200.0, 200.0, 275.0));
        assert!(is_in_bounds(275.0, 200.0, 275.0));
        assert!(!is_in_bounds(199.9, 200.0, 275.0));
    }

    #[test]
    fn test_clamp_axis_keeps_sign() {
        assert_eq!(clamp_axis(15.0, 12.0), 12.0);
        assert_eq!(clamp_axis(-15.0, 12.0), -12.0);
        assert_eq!(clamp_axis(-4.0, 12.0), -4.0);
    }

    #[test]
    fn test_border_center() {
        assert_eq!(consts::BORDER.center_x(), 320.0);
        assert_eq!(consts::BORDER.center_y(), 240.0);
    }
}
