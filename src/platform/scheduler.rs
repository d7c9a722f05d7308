//! Fixed-interval tick scheduling
//!
//! The host calls [`FixedInterval::poll`] whenever it gets control (a
//! `setInterval` callback in the browser, a sleep loop natively). Cancellation
//! is one-way: once the token is cancelled no further ticks run.

use std::cell::Cell;
use std::rc::Rc;

use super::clock::Clock;
use crate::consts::MAX_CATCHUP_TICKS;

/// Whether the ticking target wants to keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Something driven once per interval
pub trait Tick {
    fn tick(&mut self, now_ms: f64) -> Flow;
}

/// Shared one-way stop flag
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Runs a [`Tick`] target every `interval_ms` of clock time
pub struct FixedInterval<C: Clock> {
    clock: C,
    interval_ms: f64,
    next_due_ms: f64,
    token: CancellationToken,
}

impl<C: Clock> FixedInterval<C> {
    /// First tick falls due one interval after creation
    pub fn new(clock: C, interval_ms: f64) -> Self {
        let next_due_ms = clock.now_ms() + interval_ms;
        Self {
            clock,
            interval_ms,
            next_due_ms,
            token: CancellationToken::new(),
        }
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Run every tick that has fallen due. Returns the number of ticks run.
    pub fn poll<T: Tick + ?Sized>(&mut self, target: &mut T) -> u32 {
        let mut ran = 0;
        while !self.token.is_cancelled() && self.clock.now_ms() >= self.next_due_ms {
            if ran == MAX_CATCHUP_TICKS {
                // Too far behind: drop the backlog
                log::warn!("Tick backlog dropped after {} catch-up ticks", ran);
                self.next_due_ms = self.clock.now_ms() + self.interval_ms;
                break;
            }

            self.next_due_ms += self.interval_ms;
            ran += 1;

            if target.tick(self.clock.now_ms()) == Flow::Stop {
                self.token.cancel();
            }
        }
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ManualClock;

    struct Counter {
        ticks: u32,
        stop_after: u32,
    }

    impl Tick for Counter {
        fn tick(&mut self, _now_ms: f64) -> Flow {
            self.ticks += 1;
            if self.ticks >= self.stop_after {
                Flow::Stop
            } else {
                Flow::Continue
            }
        }
    }

    #[test]
    fn test_ticks_once_per_interval() {
        let clock = ManualClock::new(0.0);
        let mut sched = FixedInterval::new(clock.clone(), 10.0);
        let mut counter = Counter {
            ticks: 0,
            stop_after: u32::MAX,
        };

        assert_eq!(sched.poll(&mut counter), 0);
        clock.advance(10.0);
        assert_eq!(sched.poll(&mut counter), 1);
        clock.advance(5.0);
        assert_eq!(sched.poll(&mut counter), 0);
        clock.advance(25.0);
        assert_eq!(sched.poll(&mut counter), 3);
        assert_eq!(counter.ticks, 4);
    }

    #[test]
    fn test_stop_cancels_for_good() {
        let clock = ManualClock::new(0.0);
        let mut sched = FixedInterval::new(clock.clone(), 10.0);
        let token = sched.token();
        let mut counter = Counter {
            ticks: 0,
            stop_after: 2,
        };

        clock.advance(100.0);
        assert_eq!(sched.poll(&mut counter), 2);
        assert!(token.is_cancelled());

        clock.advance(100.0);
        assert_eq!(sched.poll(&mut counter), 0);
        assert_eq!(counter.ticks, 2);
    }

    #[test]
    fn test_backlog_is_bounded() {
        let clock = ManualClock::new(0.0);
        let mut sched = FixedInterval::new(clock.clone(), 10.0);
        let mut counter = Counter {
            ticks: 0,
            stop_after: u32::MAX,
        };

        clock.advance(10_000.0);
        assert_eq!(sched.poll(&mut counter), MAX_CATCHUP_TICKS);
        // Re-anchored: nothing due until another interval passes
        assert_eq!(sched.poll(&mut counter), 0);
        clock.advance(10.0);
        assert_eq!(sched.poll(&mut counter), 1);
    }

    #[test]
    fn test_external_cancel() {
        let clock = ManualClock::new(0.0);
        let mut sched = FixedInterval::new(clock.clone(), 10.0);
        let mut counter = Counter {
            ticks: 0,
            stop_after: u32::MAX,
        };
        sched.token().cancel();
        clock.advance(50.0);
        assert_eq!(sched.poll(&mut counter), 0);
        assert!(sched.is_cancelled());
    }
}
