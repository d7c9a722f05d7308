//! Input adapter
//!
//! Host event handlers push [`InputEvent`]s between ticks; the tick drains
//! them before doing anything else.

use std::collections::VecDeque;

use crate::sim::GameSession;

/// A raw event from the host
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer position relative to the playfield origin
    PointerMove { x: f32, y: f32 },
    /// Key identifier as reported by the host, with the time it was observed
    KeyDown { key: String, at_ms: f64 },
}

/// Gameplay commands bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `l`: suspend NPC tracking for two seconds
    FreezeNpc,
    /// `c`: snap the player paddle onto the ball
    AutoAim,
    /// `+` / `=`
    GrowBall,
    /// `-` / `_`
    ShrinkBall,
}

impl Command {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "l" => Some(Command::FreezeNpc),
            "c" => Some(Command::AutoAim),
            "+" | "=" => Some(Command::GrowBall),
            "-" | "_" => Some(Command::ShrinkBall),
            _ => None,
        }
    }

    /// Apply the command as of `at_ms`
    pub fn apply(self, session: &mut GameSession, at_ms: f64) {
        match self {
            Command::FreezeNpc => session.freeze_npc(at_ms),
            Command::AutoAim => session.auto_aim(),
            Command::GrowBall => session.ball.grow(),
            Command::ShrinkBall => session.ball.shrink(),
        }
    }
}

/// Events waiting for the next tick, in arrival order
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Apply every pending event to the session
    pub fn apply_all(&mut self, session: &mut GameSession) {
        while let Some(event) = self.events.pop_front() {
            match event {
                InputEvent::PointerMove { x, y } => {
                    session.mouse.x = x;
                    session.mouse.y = y;
                }
                InputEvent::KeyDown { key, at_ms } => match Command::from_key(&key) {
                    Some(command) => {
                        log::debug!("Command {:?} at {:.0} ms", command, at_ms);
                        command.apply(session, at_ms);
                    }
                    None => log::trace!("Unbound key {:?}", key),
                },
            }
        }
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
