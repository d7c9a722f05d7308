//! Match lifecycle
//!
//! [`Game`] owns the session and the host-facing collaborators. The host
//! feeds it input events, and a [`FixedInterval`](crate::platform::FixedInterval)
//! drives it through the [`Tick`] trait until the match ends.

use serde::{Deserialize, Serialize};

use crate::hud::{self, DisplaySink};
use crate::input::{InputEvent, InputQueue};
use crate::platform::{Flow, Tick};
use crate::renderer::{self, Canvas};
use crate::sim::{self, GameSession, TickOutcome, Winner};

/// Final result, logged as JSON when the match ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub player_score: u32,
    pub npc_score: u32,
    pub winner: Winner,
    pub elapsed_secs: f64,
    pub ticks: u64,
}

impl MatchSummary {
    pub fn from_session(session: &GameSession, now_ms: f64) -> Self {
        Self {
            player_score: session.state.player_score,
            npc_score: session.state.npc_score,
            winner: session.state.winner(),
            elapsed_secs: session.elapsed_secs(now_ms),
            ticks: session.ticks,
        }
    }
}

pub struct Game<C: Canvas, S: DisplaySink> {
    session: GameSession,
    input: InputQueue,
    canvas: C,
    sink: S,
    summary: Option<MatchSummary>,
}

impl<C: Canvas, S: DisplaySink> Game<C, S> {
    pub fn new(session: GameSession, canvas: C, sink: S) -> Self {
        Self {
            session,
            input: InputQueue::new(),
            canvas,
            sink,
            summary: None,
        }
    }

    /// Initial HUD refresh before the first tick
    pub fn start(&mut self) {
        log::info!(
            "Match started: {:.0}s on the clock",
            self.session.state.time_remaining
        );
        hud::refresh(&self.session.state, &mut self.sink);
    }

    /// Accept a host event. After the match ends pointer moves are still
    /// recorded and keys are dropped.
    pub fn handle_event(&mut self, event: InputEvent) {
        if !self.session.is_ended() {
            self.input.push(event);
            return;
        }
        match event {
            InputEvent::PointerMove { x, y } => {
                self.session.mouse.x = x;
                self.session.mouse.y = y;
            }
            InputEvent::KeyDown { key, .. } => {
                log::trace!("Ignoring key {:?} after game over", key);
            }
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn summary(&self) -> Option<&MatchSummary> {
        self.summary.as_ref()
    }

    fn finish(&mut self, now_ms: f64) {
        self.input.clear();
        let summary = MatchSummary::from_session(&self.session, now_ms);
        match serde_json::to_string(&summary) {
            Ok(json) => log::info!("Game over: {}", json),
            Err(e) => log::warn!("Could not serialize match summary: {}", e),
        }
        self.summary = Some(summary);
    }
}

impl<C: Canvas, S: DisplaySink> Tick for Game<C, S> {
    fn tick(&mut self, now_ms: f64) -> Flow {
        let outcome = sim::tick(&mut self.session, &mut self.input, now_ms);
        if outcome == TickOutcome::Halted {
            return Flow::Stop;
        }

        renderer::draw(&self.session, &mut self.canvas);
        hud::refresh(&self.session.state, &mut self.sink);

        if outcome == TickOutcome::Ended {
            self.finish(now_ms);
            Flow::Stop
        } else {
            Flow::Continue
        }
    }
}
