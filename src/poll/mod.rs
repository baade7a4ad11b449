// src/poll/mod.rs
//
// Periodic fetch loop: a timer, a one-at-a-time guard, and a sink.
// Driven from the display thread by calling `tick` with the current time.

mod controller;
mod executor;
mod timer;

pub use controller::{PollController, PollState, PollStats, Waker};
pub use executor::{Executor, InlineExecutor, Job, ThreadExecutor};
pub use timer::IntervalTimer;

// User-visible log lines
pub const MSG_STARTED: &str = "Operation started.";
pub const MSG_STOPPED: &str = "Operation stopped.";
pub const MSG_FETCHED: &str = "Fetched price: ";
pub const MSG_ERROR: &str = "Error: ";
