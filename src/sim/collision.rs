//! Ball vs paddle collision response
//!
//! A hit needs three things: the ball center within the paddle's vertical
//! span, the ball's leading edge at or past the paddle's facing edge, and the
//! ball moving toward the paddle. The direction gate keeps a receding ball
//! from re-triggering while it still overlaps the paddle.

use super::state::{Ball, Paddle};
use crate::consts::{BALL_MAX_SPEED, MAX_DEFLECTION, PADDLE_BOOST};
use crate::{clamp_axis, is_in_bounds};

/// Check the ball against one paddle and resolve the hit.
///
/// Returns true if the ball was deflected.
pub fn check_paddle_collision(ball: &mut Ball, paddle: &Paddle) -> bool {
    if !is_in_bounds(ball.pos.y, paddle.y, paddle.y + paddle.height) {
        return false;
    }

    let hit = if paddle.faces_right() {
        ball.pos.x - ball.radius <= paddle.x + paddle.width && ball.vel.x < 0.0
    } else {
        ball.pos.x + ball.radius >= paddle.x && ball.vel.x > 0.0
    };

    if hit {
        deflect(ball, paddle);
    }
    hit
}

/// Offset of the ball from the paddle center, -1 (top edge) to 1 (bottom edge)
pub fn hit_offset(ball_y: f32, paddle: &Paddle) -> f32 {
    (ball_y - paddle.center_y()) / (paddle.height / 2.0)
}

fn deflect(ball: &mut Ball, paddle: &Paddle) {
    let offset = hit_offset(ball.pos.y, paddle);

    ball.vel.x = -ball.vel.x;
    // Deflection accumulates across hits; only the speed cap bounds it
    ball.vel.y += offset * MAX_DEFLECTION;

    increase_ball_speed(ball);
}

/// Boost both components, then cap each axis independently
pub fn increase_ball_speed(ball: &mut Ball) {
    ball.vel *= PADDLE_BOOST;
    ball.vel.x = clamp_axis(ball.vel.x, BALL_MAX_SPEED);
    ball.vel.y = clamp_axis(ball.vel.y, BALL_MAX_SPEED);
}
