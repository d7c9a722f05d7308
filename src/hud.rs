//! Score and timer display sinks
//!
//! Refreshed after every tick and once at start-up.

use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// Values shown in the three HUD labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudReadout {
    pub player_score: u32,
    pub npc_score: u32,
    /// Whole seconds left, rounded up
    pub seconds_remaining: u32,
}

impl HudReadout {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            player_score: state.player_score,
            npc_score: state.npc_score,
            seconds_remaining: state.time_remaining.max(0.0).ceil() as u32,
        }
    }
}

/// Destination for the HUD labels
pub trait DisplaySink {
    fn show(&mut self, readout: &HudReadout);
}

/// Logs the readout whenever it changes
#[derive(Debug, Default)]
pub struct LogSink {
    last: Option<HudReadout>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&HudReadout> {
        self.last.as_ref()
    }
}

impl DisplaySink for LogSink {
    fn show(&mut self, readout: &HudReadout) {
        if self.last.as_ref() != Some(readout) {
            log::debug!(
                "HUD player={} npc={} time={}",
                readout.player_score,
                readout.npc_score,
                readout.seconds_remaining
            );
            self.last = Some(*readout);
        }
    }
}

/// Push the current state to a sink
pub fn refresh<S: DisplaySink + ?Sized>(state: &GameState, sink: &mut S) {
    sink.show(&HudReadout::from_state(state));
}
