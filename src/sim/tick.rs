//! Fixed-cadence simulation tick
//!
//! One call advances the match by one frame. Time only enters through
//! `now_ms`, so tests can drive the countdown without real waiting.

use super::collision::check_paddle_collision;
use super::npc::track_ball;
use super::state::{GamePhase, GameSession, Side};
use crate::consts::*;
use crate::input::InputQueue;

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Normal frame
    Advanced,
    /// Timer hit zero during this frame (the frame still ran to completion)
    Ended,
    /// Match was already over; nothing changed
    Halted,
}

/// Advance the session by one tick at wall-clock time `now_ms`
pub fn tick(session: &mut GameSession, input: &mut InputQueue, now_ms: f64) -> TickOutcome {
    if session.is_ended() {
        return TickOutcome::Halted;
    }

    input.apply_all(session);

    let just_ended = update_timer(session, now_ms);

    session.ball.advance();

    // Player paddle is not clamped to the field
    session.player.center_on(session.mouse.y);

    if !session.is_npc_frozen(now_ms) {
        track_ball(&mut session.npc, session.ball.pos.y);
    }

    // Player first, then NPC
    for paddle in [&session.player, &session.npc] {
        if check_paddle_collision(&mut session.ball, paddle) {
            let vel = session.ball.vel;
            log::debug!("{:?} return, vel=({:.2}, {:.2})", paddle.side, vel.x, vel.y);
        }
    }

    check_for_scoring(session);
    keep_ball_on_pitch(session);

    session.ticks += 1;

    if just_ended {
        TickOutcome::Ended
    } else {
        TickOutcome::Advanced
    }
}

/// Recompute the countdown; returns true on the Running -> Ended transition.
///
/// The countdown only moves down, even if the host clock steps backwards.
fn update_timer(session: &mut GameSession, now_ms: f64) -> bool {
    let elapsed = session.elapsed_secs(now_ms);
    let remaining = (GAME_DURATION_SECS - elapsed).clamp(0.0, GAME_DURATION_SECS);
    session.state.time_remaining = session.state.time_remaining.min(remaining);

    if session.state.time_remaining <= 0.0 && session.phase == GamePhase::Running {
        session.phase = GamePhase::Ended;
        log::info!(
            "Time up: player {} - npc {}",
            session.state.player_score,
            session.state.npc_score
        );
        return true;
    }
    false
}

/// Award a point once the ball is fully past a side edge
fn check_for_scoring(session: &mut GameSession) {
    let ball = &session.ball;
    let scorer = if ball.pos.x + ball.radius < BORDER.left {
        session.state.npc_score += 1;
        Side::Npc
    } else if ball.pos.x - ball.radius > BORDER.right {
        session.state.player_score += 1;
        Side::Player
    } else {
        return;
    };

    log::debug!(
        "{:?} scores: {} - {}",
        scorer,
        session.state.player_score,
        session.state.npc_score
    );
    session.reset_ball();
}

/// Bounce off top and bottom walls (no positional correction)
fn keep_ball_on_pitch(session: &mut GameSession) {
    let ball = &mut session.ball;
    if ball.pos.y - ball.radius <= BORDER.top || ball.pos.y + ball.radius >= BORDER.bottom {
        ball.vel.y = -ball.vel.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;
    use glam::Vec2;

    const START: f64 = 10_000.0;

    fn session() -> (GameSession, InputQueue) {
        (GameSession::new(12345, START), InputQueue::new())
    }

    #[test]
    fn test_timer_counts_down() {
        let (mut s, mut q) = session();
        tick(&mut s, &mut q, START + 1_500.0);
        assert!((s.state.time_remaining - 88.5).abs() < 1e-9);

        let before = s.state.time_remaining;
        tick(&mut s, &mut q, START + 2_000.0);
        assert!(s.state.time_remaining <= before);
    }

    #[test]
    fn test_game_ends_once() {
        let (mut s, mut q) = session();
        let outcome = tick(&mut s, &mut q, START + 90_000.0);
        assert_eq!(outcome, TickOutcome::Ended);
        assert_eq!(s.phase, GamePhase::Ended);
        assert_eq!(s.state.time_remaining, 0.0);

        let ticks = s.ticks;
        let ball = s.ball.pos;
        for i in 1..5 {
            let outcome = tick(&mut s, &mut q, START + 90_000.0 + i as f64 * 16.0);
            assert_eq!(outcome, TickOutcome::Halted);
        }
        assert_eq!(s.ticks, ticks);
        assert_eq!(s.ball.pos, ball);
    }

    #[test]
    fn test_ending_tick_still_moves_ball() {
        let (mut s, mut q) = session();
        let before = s.ball.pos;
        tick(&mut s, &mut q, START + 95_000.0);
        assert_eq!(s.ball.pos, before + Vec2::new(3.0, s.ball.vel.y));
    }

    #[test]
    fn test_npc_scores_when_ball_leaves_left() {
        let (mut s, mut q) = session();
        // Keep the player paddle far from the ball's path
        q.push(InputEvent::PointerMove { x: 0.0, y: 0.0 });
        s.ball.pos = Vec2::new(5.0, 240.0);
        s.ball.vel = Vec2::new(-3.0, 0.0);

        let mut now = START;
        while s.state.npc_score == 0 {
            now += TICK_INTERVAL_MS;
            tick(&mut s, &mut q, now);
            assert!(s.ticks < 20, "ball never scored");
        }
        assert_eq!(s.state.npc_score, 1);
        assert_eq!(s.state.player_score, 0);
        assert_eq!(s.ball.pos, Vec2::new(320.0, 240.0));
        assert!((s.ball.speed() - BALL_BASE_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_player_scores_when_ball_leaves_right() {
        let (mut s, mut q) = session();
        s.npc.y = 0.0;
        s.freeze_npc(START);
        s.ball.pos = Vec2::new(655.0, 400.0);
        s.ball.vel = Vec2::new(3.0, 0.0);

        tick(&mut s, &mut q, START + 16.0);
        assert_eq!(s.state.player_score, 1);
        assert_eq!(s.state.npc_score, 0);
        assert_eq!(s.ball.pos, Vec2::new(320.0, 240.0));
    }

    #[test]
    fn test_player_paddle_follows_pointer_unclamped() {
        let (mut s, mut q) = session();
        q.push(InputEvent::PointerMove { x: 100.0, y: 10.0 });
        tick(&mut s, &mut q, START);
        assert_eq!(s.player.y, 10.0 - 37.5);
    }

    #[test]
    fn test_player_paddle_return() {
        let (mut s, mut q) = session();
        // Paddle spans 200..275
        q.push(InputEvent::PointerMove { x: 20.0, y: 237.5 });
        s.ball.pos = Vec2::new(43.0, 230.0);
        s.ball.vel = Vec2::new(-3.0, 0.0);

        tick(&mut s, &mut q, START);
        assert!(s.ball.vel.x > 0.0);
        assert!(s.ball.vel.x.abs() <= BALL_MAX_SPEED);
    }

    #[test]
    fn test_wall_bounce_inverts_y() {
        let (mut s, mut q) = session();
        s.ball.pos = Vec2::new(320.0, 12.0);
        s.ball.vel = Vec2::new(1.0, -3.0);
        tick(&mut s, &mut q, START);
        assert_eq!(s.ball.vel.y, 3.0);
        // No positional correction
        assert_eq!(s.ball.pos.y, 9.0);
    }

    #[test]
    fn test_wall_bounce_off_bottom() {
        let (mut s, mut q) = session();
        s.ball.pos = Vec2::new(320.0, 468.0);
        s.ball.vel = Vec2::new(1.0, 3.0);
        tick(&mut s, &mut q, START);
        assert_eq!(s.ball.vel.y, -3.0);
        assert_eq!(s.ball.pos.y, 471.0);
    }

    #[test]
    fn test_timer_ignores_clock_stepping_back() {
        let (mut s, mut q) = session();
        tick(&mut s, &mut q, START + 1_000.0);
        let after_one_second = s.state.time_remaining;

        tick(&mut s, &mut q, START - 2_000.0);
        assert_eq!(s.state.time_remaining, after_one_second);
        assert!(s.state.time_remaining <= GAME_DURATION_SECS);
        assert_eq!(s.phase, GamePhase::Running);

        tick(&mut s, &mut q, START + 1_500.0);
        assert!((s.state.time_remaining - 88.5).abs() < 1e-9);
    }

    #[test]
    fn test_timer_never_exceeds_duration_before_start() {
        let (mut s, mut q) = session();
        tick(&mut s, &mut q, START - 5_000.0);
        assert_eq!(s.state.time_remaining, GAME_DURATION_SECS);
    }

    #[test]
    fn test_freeze_holds_npc_for_window() {
        let (mut s, mut q) = session();
        q.push(InputEvent::KeyDown {
            key: "l".into(),
            at_ms: START,
        });
        // Ball parked below the NPC dead-zone
        s.ball.pos = Vec2::new(320.0, 450.0);
        s.ball.vel = Vec2::new(0.0, 0.0);
        s.ball.radius = 5.0;

        let mut now = START;
        while now < START + NPC_FREEZE_MS {
            tick(&mut s, &mut q, now);
            assert_eq!(s.npc.y, 200.0);
            now += TICK_INTERVAL_MS;
        }

        tick(&mut s, &mut q, START + NPC_FREEZE_MS);
        assert_eq!(s.npc.y, 203.0);
    }

    #[test]
    fn test_keys_ignored_after_end() {
        let (mut s, mut q) = session();
        tick(&mut s, &mut q, START + 90_000.0);
        q.push(InputEvent::KeyDown {
            key: "+".into(),
            at_ms: START + 91_000.0,
        });
        tick(&mut s, &mut q, START + 91_000.0);
        assert_eq!(s.ball.radius, BALL_RADIUS);
    }

    #[test]
    fn test_scores_never_both_in_one_tick() {
        let (mut s, mut q) = session();
        let mut now = START;
        for _ in 0..5_000 {
            let before = (s.state.player_score, s.state.npc_score);
            now += TICK_INTERVAL_MS;
            tick(&mut s, &mut q, now);
            let gained = (s.state.player_score - before.0) + (s.state.npc_score - before.1);
            assert!(gained <= 1);
            assert!(
                s.state.time_remaining >= 0.0 && s.state.time_remaining <= GAME_DURATION_SECS
            );
        }
    }
}
