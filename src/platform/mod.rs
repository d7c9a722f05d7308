//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (wall clock vs. manually advanced clock)
//! - Tick cadence and its one-way cancellation

pub mod clock;
pub mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::{CancellationToken, FixedInterval, Flow, Tick};
