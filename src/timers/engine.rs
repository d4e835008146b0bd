use indexmap::IndexMap;
use log::{debug, info};
use serde::Serialize;

use super::signal::{CompletionSignal, LogSignal};

/// Smallest base duration a timer can have, in minutes.
pub const MIN_TIMER_MINUTES: u32 = 1;
/// Largest base duration a timer can have (12 hours), in minutes.
pub const MAX_TIMER_MINUTES: u32 = 720;

/// Lifecycle state derived from a timer's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerState {
    /// Paused or not yet started, time left.
    Idle,
    /// Counting down.
    Running,
    /// Reached zero. Needs a reset before it can run again.
    Expired,
}

/// One countdown in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunningTimer {
    pub label: String,
    pub base_minutes: u32,
    pub remaining_seconds: u32,
    pub running: bool,
    /// True while the completion alert of this timer is active.
    pub alerting: bool,
}

impl RunningTimer {
    fn new(label: String, minutes: u32) -> Self {
        let base_minutes = clamp_minutes(minutes);
        Self {
            label,
            base_minutes,
            remaining_seconds: base_minutes * 60,
            running: false,
            alerting: false,
        }
    }

    pub fn state(&self) -> TimerState {
        if self.remaining_seconds == 0 {
            TimerState::Expired
        } else if self.running {
            TimerState::Running
        } else {
            TimerState::Idle
        }
    }

    /// Fraction of the base duration already elapsed, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        let total = f64::from(self.base_minutes * 60);
        1.0 - f64::from(self.remaining_seconds) / total
    }
}

fn clamp_minutes(minutes: u32) -> u32 {
    minutes.clamp(MIN_TIMER_MINUTES, MAX_TIMER_MINUTES)
}

/// Registry of named countdown timers.
///
/// Timers are keyed by label and kept in insertion order. Operations on
/// unknown labels are no-ops. The engine does not keep time itself: a clock
/// (see [`TimerDriver`](super::TimerDriver)) calls [`TimerEngine::tick`] once
/// per second.
pub struct TimerEngine {
    timers: IndexMap<String, RunningTimer>,
    signal: Box<dyn CompletionSignal>,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TimerEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerEngine")
            .field("timers", &self.timers)
            .finish_non_exhaustive()
    }
}

impl TimerEngine {
    /// Engine that reports expiries to the log.
    pub fn new() -> Self {
        Self::with_signal(LogSignal)
    }

    pub fn with_signal(signal: impl CompletionSignal + 'static) -> Self {
        Self {
            timers: IndexMap::new(),
            signal: Box::new(signal),
        }
    }

    /// Register a paused timer. Returns `false` when the label already exists.
    ///
    /// `minutes` is clamped to `1..=720`.
    pub fn start(&mut self, minutes: u32, label: &str) -> bool {
        if self.timers.contains_key(label) {
            debug!("Timer '{}' already exists, not starting another", label);
            return false;
        }
        let timer = RunningTimer::new(label.to_string(), minutes);
        info!("Added timer '{}' ({} min)", label, timer.base_minutes);
        self.timers.insert(label.to_string(), timer);
        true
    }

    /// Pause a running timer or resume an idle one. Expired timers stay put.
    pub fn toggle(&mut self, label: &str) {
        let Some(timer) = self.timers.get_mut(label) else {
            return;
        };
        if timer.state() == TimerState::Expired {
            debug!("Timer '{}' has expired, reset it first", label);
            return;
        }
        timer.running = !timer.running;
        debug!(
            "Timer '{}' {}",
            label,
            if timer.running { "resumed" } else { "paused" }
        );
    }

    /// Back to the full base duration, paused.
    pub fn reset(&mut self, label: &str) {
        let Some(timer) = self.timers.get_mut(label) else {
            return;
        };
        timer.remaining_seconds = timer.base_minutes * 60;
        timer.running = false;
        Self::silence(self.signal.as_mut(), timer);
    }

    /// Change the base duration; elapsed progress is discarded.
    pub fn set_base_minutes(&mut self, label: &str, minutes: u32) {
        let Some(timer) = self.timers.get_mut(label) else {
            return;
        };
        timer.base_minutes = clamp_minutes(minutes);
        timer.remaining_seconds = timer.base_minutes * 60;
        Self::silence(self.signal.as_mut(), timer);
    }

    pub fn remove(&mut self, label: &str) {
        if let Some(mut timer) = self.timers.shift_remove(label) {
            Self::silence(self.signal.as_mut(), &mut timer);
            info!("Removed timer '{}'", label);
        }
    }

    /// Drop every timer and stop every alert.
    pub fn stop_all(&mut self) {
        for (_, mut timer) in self.timers.drain(..) {
            Self::silence(self.signal.as_mut(), &mut timer);
        }
        debug!("All timers stopped");
    }

    /// Advance every running timer by one second.
    ///
    /// Returns the labels of the timers that expired on this tick; each of
    /// them has fired its completion signal exactly once.
    pub fn tick(&mut self) -> Vec<String> {
        let mut expired = Vec::new();
        for timer in self.timers.values_mut() {
            if !timer.running || timer.remaining_seconds == 0 {
                continue;
            }
            timer.remaining_seconds -= 1;
            if timer.remaining_seconds == 0 {
                timer.running = false;
                timer.alerting = true;
                self.signal.fire(timer);
                expired.push(timer.label.clone());
            }
        }
        expired
    }

    /// Snapshot of all timers in insertion order.
    pub fn timers(&self) -> Vec<RunningTimer> {
        self.timers.values().cloned().collect()
    }

    pub fn get(&self, label: &str) -> Option<&RunningTimer> {
        self.timers.get(label)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Number of timers whose completion alert is still active.
    pub fn active_alerts(&self) -> usize {
        self.timers.values().filter(|t| t.alerting).count()
    }

    fn silence(signal: &mut dyn CompletionSignal, timer: &mut RunningTimer) {
        if timer.alerting {
            timer.alerting = false;
            signal.silence(&timer.label);
        }
    }
}
