//! NPC paddle controller
//!
//! Fixed-step chase with a dead-zone around the paddle center. Bounded speed
//! makes it lag fast balls, so it can be beaten.

use super::state::Paddle;
use crate::consts::{NPC_DEAD_ZONE, NPC_SPEED};

/// Step the paddle one tick toward `target_y`, then clamp it to the field
pub fn track_ball(paddle: &mut Paddle, target_y: f32) {
    let center = paddle.center_y();

    if target_y < center - NPC_DEAD_ZONE {
        paddle.y -= NPC_SPEED;
    } else if target_y > center + NPC_DEAD_ZONE {
        paddle.y += NPC_SPEED;
    }

    paddle.clamp_to_field();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BORDER;

    #[test]
    fn test_moves_up_toward_ball() {
        let mut paddle = Paddle::npc();
        track_ball(&mut paddle, 100.0);
        assert_eq!(paddle.y, 197.0);
    }

    #[test]
    fn test_moves_down_toward_ball() {
        let mut paddle = Paddle::npc();
        track_ball(&mut paddle, 400.0);
        assert_eq!(paddle.y, 203.0);
    }

    #[test]
    fn test_holds_inside_dead_zone() {
        let mut paddle = Paddle::npc();
        // Center is 237.5; 15 either side holds
        track_ball(&mut paddle, 252.5);
        track_ball(&mut paddle, 222.5);
        assert_eq!(paddle.y, 200.0);
    }

    #[test]
    fn test_clamped_to_field() {
        let mut paddle = Paddle::npc();
        paddle.y = 1.0;
        track_ball(&mut paddle, 0.0);
        assert_eq!(paddle.y, BORDER.top);

        paddle.y = BORDER.bottom - paddle.height - 1.0;
        track_ball(&mut paddle, BORDER.bottom);
        assert_eq!(paddle.y, BORDER.bottom - paddle.height);
    }
}
