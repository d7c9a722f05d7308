//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameSession`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Clock running, all mutation allowed
    Running,
    /// Timer reached zero (terminal)
    Ended,
}

/// Which paddle a player controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Npc,
}

/// Match result by strict score comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Npc,
    Tie,
}

impl Winner {
    pub fn decide(player_score: u32, npc_score: u32) -> Self {
        match player_score.cmp(&npc_score) {
            std::cmp::Ordering::Greater => Winner::Player,
            std::cmp::Ordering::Less => Winner::Npc,
            std::cmp::Ordering::Equal => Winner::Tie,
        }
    }

    /// Caption shown under "GAME OVER"
    pub fn caption(&self) -> &'static str {
        match self {
            Winner::Player => "Player Win!",
            Winner::Npc => "NPC Win!",
            Winner::Tie => "It's a Tie!",
        }
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Launch speed used by every reset
    pub base_speed: f32,
    pub color: &'static str,
}

impl Ball {
    pub fn new(vertical_sign: f32) -> Self {
        let (vx, vy) = BALL_START_VELOCITY;
        Self {
            pos: Vec2::new(BORDER.center_x(), BORDER.center_y()),
            vel: Vec2::new(vx, vy * vertical_sign.signum()),
            radius: BALL_RADIUS,
            base_speed: BALL_BASE_SPEED,
            color: "#f97f04",
        }
    }

    pub fn grow(&mut self) {
        self.radius = (self.radius + BALL_RADIUS_STEP).min(BALL_MAX_RADIUS);
    }

    pub fn shrink(&mut self) {
        self.radius = (self.radius - BALL_RADIUS_STEP).max(BALL_MIN_RADIUS);
    }

    /// One Euler step
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Ball speed (vector magnitude)
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// A paddle; x is fixed, y is the top edge
#[derive(Debug, Clone)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: &'static str,
}

impl Paddle {
    pub fn player() -> Self {
        Self {
            side: Side::Player,
            x: PLAYER_PADDLE_X,
            y: PADDLE_START_Y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            color: "Red",
        }
    }

    pub fn npc() -> Self {
        Self {
            side: Side::Npc,
            x: NPC_PADDLE_X,
            y: PADDLE_START_Y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            color: "Yellow",
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Place the paddle so its center sits at `y`
    pub fn center_on(&mut self, y: f32) {
        self.y = y - self.height / 2.0;
    }

    /// Keep the paddle inside `[BORDER.top, BORDER.bottom - height]`
    pub fn clamp_to_field(&mut self) {
        if self.y < BORDER.top {
            self.y = BORDER.top;
        }
        if self.y + self.height > BORDER.bottom {
            self.y = BORDER.bottom - self.height;
        }
    }

    /// Left-half paddles face right (their hit edge is `x + width`)
    pub fn faces_right(&self) -> bool {
        self.x < BORDER.right / 2.0
    }
}

/// Scores and countdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player_score: u32,
    pub npc_score: u32,
    /// Seconds left, floored at 0
    pub time_remaining: f64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            player_score: 0,
            npc_score: 0,
            time_remaining: GAME_DURATION_SECS,
        }
    }
}

impl GameState {
    pub fn winner(&self) -> Winner {
        Winner::decide(self.player_score, self.npc_score)
    }
}

/// Last observed pointer position in playfield coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Mouse {
    pub x: f32,
    pub y: f32,
}

/// Complete mutable state of one match
#[derive(Debug, Clone)]
pub struct GameSession {
    pub ball: Ball,
    pub player: Paddle,
    pub npc: Paddle,
    pub state: GameState,
    pub mouse: Mouse,
    pub phase: GamePhase,
    /// Wall-clock start of the match (ms)
    pub started_at_ms: f64,
    /// NPC tracking is suspended while `now < npc_frozen_until_ms`
    pub npc_frozen_until_ms: f64,
    /// Ticks completed
    pub ticks: u64,
    rng: Pcg32,
}

impl GameSession {
    /// Create a session that starts its countdown at `started_at_ms`
    pub fn new(seed: u64, started_at_ms: f64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let vertical_sign = if rng.random::<f32>() > 0.5 {
            1.0
        } else {
            -1.0
        };
        Self {
            ball: Ball::new(vertical_sign),
            player: Paddle::player(),
            npc: Paddle::npc(),
            state: GameState::default(),
            mouse: Mouse::default(),
            phase: GamePhase::Running,
            started_at_ms,
            npc_frozen_until_ms: 0.0,
            ticks: 0,
            rng,
        }
    }

    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    pub fn is_npc_frozen(&self, now_ms: f64) -> bool {
        now_ms < self.npc_frozen_until_ms
    }

    /// Suspend NPC tracking for [`NPC_FREEZE_MS`] from `at_ms` (re-arms, never stacks)
    pub fn freeze_npc(&mut self, at_ms: f64) {
        self.npc_frozen_until_ms = at_ms + NPC_FREEZE_MS;
    }

    /// Snap the player paddle onto the ball and move the pointer with it
    pub fn auto_aim(&mut self) {
        self.player.center_on(self.ball.pos.y);
        self.mouse.y = self.ball.pos.y;
    }

    /// Recenter the ball and launch it within ±45° of horizontal
    pub fn reset_ball(&mut self) {
        self.ball.pos = Vec2::new(BORDER.center_x(), BORDER.center_y());

        let angle = (self.rng.random::<f32>() - 0.5) * std::f32::consts::FRAC_PI_2;
        let direction = if self.rng.random::<f32>() > 0.5 {
            1.0
        } else {
            -1.0
        };
        let speed = self.ball.base_speed;

        self.ball.vel = Vec2::new(angle.cos() * speed * direction, angle.sin() * speed);
    }

    /// Seconds since the match started at `now_ms`
    pub fn elapsed_secs(&self, now_ms: f64) -> f64 {
        (now_ms - self.started_at_ms) / 1000.0
    }
}
