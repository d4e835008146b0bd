use log::info;
use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

use super::RunningTimer;

/// Receives completion alerts from a [`TimerEngine`](super::TimerEngine).
///
/// `fire` is called exactly once when a timer expires. `silence` is called
/// when an active alert is stopped (reset, removal, stop-all).
pub trait CompletionSignal: Send {
    fn fire(&mut self, timer: &RunningTimer);

    fn silence(&mut self, _label: &str) {}
}

/// Writes expiries to the log.
#[derive(Debug, Default)]
pub struct LogSignal;

impl CompletionSignal for LogSignal {
    fn fire(&mut self, timer: &RunningTimer) {
        info!(
            "Timer '{}' finished after {} minutes",
            timer.label, timer.base_minutes
        );
    }

    fn silence(&mut self, label: &str) {
        info!("Timer '{}' alert stopped", label);
    }
}

/// Event published by [`ChannelSignal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TimerEvent {
    Expired { label: String },
    Silenced { label: String },
}

/// Forwards alerts to a tokio channel, for UIs that play a sound or show a banner.
#[derive(Debug, Clone)]
pub struct ChannelSignal {
    tx: UnboundedSender<TimerEvent>,
}

impl ChannelSignal {
    pub fn new(tx: UnboundedSender<TimerEvent>) -> Self {
        Self { tx }
    }
}

impl CompletionSignal for ChannelSignal {
    fn fire(&mut self, timer: &RunningTimer) {
        // A dropped receiver just means nobody is listening any more.
        let _ = self.tx.send(TimerEvent::Expired {
            label: timer.label.clone(),
        });
    }

    fn silence(&mut self, label: &str) {
        let _ = self.tx.send(TimerEvent::Silenced {
            label: label.to_string(),
        });
    }
}
