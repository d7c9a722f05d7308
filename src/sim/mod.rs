//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! time enters as a millisecond timestamp, randomness from the session's
//! seeded RNG.

pub mod collision;
pub mod npc;
pub mod state;
pub mod tick;

pub use collision::{check_paddle_collision, hit_offset, increase_ball_speed};
pub use npc::track_ball;
pub use state::{Ball, GamePhase, GameSession, GameState, Mouse, Paddle, Side, Winner};
pub use tick::{TickOutcome, tick};
