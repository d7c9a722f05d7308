//! Per-frame draw pass

use super::{Canvas, TextAlign, TextBaseline, TextStyle, colors};
use crate::sim::{Ball, GameSession, GameState, Paddle};

/// Draw the whole frame: pitch, ball, paddles, HUD, game-over overlay
pub fn draw<C: Canvas + ?Sized>(session: &GameSession, canvas: &mut C) {
    let (w, h) = canvas.size();
    canvas.clear_rect(0.0, 0.0, w, h);

    draw_pitch(canvas);
    draw_ball(canvas, &session.ball);
    draw_paddle(canvas, &session.player);
    draw_paddle(canvas, &session.npc);

    draw_timer(canvas, &session.state);
    draw_scores(canvas, &session.state);

    if session.is_ended() {
        draw_game_over(canvas, &session.state);
    }
}

fn draw_pitch<C: Canvas + ?Sized>(canvas: &mut C) {
    let (w, h) = canvas.size();
    canvas.fill_rect(0.0, 0.0, w, h, colors::PITCH);
    canvas.fill_rect(w * 0.5 - 2.0, 0.0, 4.0, h, colors::CENTER_LINE);
}

fn draw_ball<C: Canvas + ?Sized>(canvas: &mut C, ball: &Ball) {
    canvas.fill_circle(
        ball.pos.x as f64,
        ball.pos.y as f64,
        ball.radius as f64,
        ball.color,
    );
}

fn draw_paddle<C: Canvas + ?Sized>(canvas: &mut C, paddle: &Paddle) {
    canvas.fill_rect(
        paddle.x as f64,
        paddle.y as f64,
        paddle.width as f64,
        paddle.height as f64,
        paddle.color,
    );
}

fn draw_timer<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState) {
    let (w, _) = canvas.size();
    let style = TextStyle::new(colors::TEXT, "20px monospace")
        .align(TextAlign::Right)
        .baseline(TextBaseline::Top);

    canvas.save();
    canvas.fill_text(
        &format!("Time: {} s", state.time_remaining.ceil() as u32),
        w - 20.0,
        20.0,
        &style,
    );
    canvas.restore();
}

fn draw_scores<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState) {
    let (w, h) = canvas.size();
    let font_px = (h * 0.12).floor() as u32;
    let padding_top = (h * 0.05).floor();
    let style = TextStyle::new(colors::TEXT, format!("{}px Arial", font_px))
        .align(TextAlign::Center)
        .baseline(TextBaseline::Top)
        .shadow(colors::TEXT_SHADOW, 6.0);

    let player = state.player_score.to_string();
    let npc = state.npc_score.to_string();

    canvas.save();
    canvas.fill_text(&player, w * 0.25, padding_top, &style);
    canvas.fill_text(&npc, w * 0.75, padding_top, &style);
    canvas.restore();
}

fn draw_game_over<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState) {
    let (w, h) = canvas.size();
    canvas.fill_rect(0.0, 0.0, w, h, colors::GAME_OVER_PANEL);

    let title = TextStyle::new(colors::TEXT, "48px Arial").align(TextAlign::Center);
    canvas.fill_text("GAME OVER", w / 2.0, h / 2.0, &title);

    let caption = TextStyle::new(colors::TEXT, "24px Arial").align(TextAlign::Center);
    canvas.fill_text(state.winner().caption(), w / 2.0, h / 2.0 + 50.0, &caption);
}
