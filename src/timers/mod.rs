//! Countdown timers for recipe steps.
//!
//! [`TimerEngine`] is the state machine, [`TimerDriver`] is the one clock that
//! ticks it, and [`CompletionSignal`] is where expiries are delivered.

mod driver;
mod engine;
mod signal;

pub use self::driver::{TimerDriver, TimerHandle};
pub use self::engine::{
    RunningTimer, TimerEngine, TimerState, MAX_TIMER_MINUTES, MIN_TIMER_MINUTES,
};
pub use self::signal::{ChannelSignal, CompletionSignal, LogSignal, TimerEvent};

/// Render seconds as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
