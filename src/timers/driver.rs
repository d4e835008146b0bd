use log::{debug, info, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::{RunningTimer, TimerEngine};

/// Cloneable access to an engine shared with a [`TimerDriver`].
///
/// Every call takes the engine lock, so user actions and clock ticks are
/// applied one after another.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    engine: Arc<Mutex<TimerEngine>>,
}

impl TimerHandle {
    pub fn new(engine: TimerEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, TimerEngine> {
        // Engine state stays consistent between calls, so a poisoned lock is still usable.
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn start(&self, minutes: u32, label: &str) -> bool {
        self.lock().start(minutes, label)
    }

    pub fn toggle(&self, label: &str) {
        self.lock().toggle(label)
    }

    pub fn reset(&self, label: &str) {
        self.lock().reset(label)
    }

    pub fn set_base_minutes(&self, label: &str, minutes: u32) {
        self.lock().set_base_minutes(label, minutes)
    }

    pub fn remove(&self, label: &str) {
        self.lock().remove(label)
    }

    pub fn stop_all(&self) {
        self.lock().stop_all()
    }

    pub fn tick(&self) -> Vec<String> {
        self.lock().tick()
    }

    /// Snapshot of all timers in insertion order.
    pub fn timers(&self) -> Vec<RunningTimer> {
        self.lock().timers()
    }

    pub fn get(&self, label: &str) -> Option<RunningTimer> {
        self.lock().get(label).cloned()
    }

    pub fn active_alerts(&self) -> usize {
        self.lock().active_alerts()
    }
}

/// The shared clock of a timer engine.
///
/// One tokio task ticks the engine at a fixed period (one second in
/// production). Must be created inside a tokio runtime. Dropping the driver
/// aborts the task; [`TimerDriver::shutdown`] also stops every timer and waits
/// for the task to finish.
#[derive(Debug)]
pub struct TimerDriver {
    handle: TimerHandle,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl TimerDriver {
    pub fn spawn(engine: TimerEngine, period: Duration) -> Self {
        Self::spawn_with_handle(TimerHandle::new(engine), period)
    }

    pub fn spawn_with_handle(handle: TimerHandle, period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();
        let clock = handle.clone();

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            debug!("Timer clock started ({:?} period)", period);

            loop {
                tokio::select! {
                    biased;
                    _ = &mut shutdown_rx => break,
                    _ = ticker.tick() => {
                        let expired = clock.tick();
                        if !expired.is_empty() {
                            info!("Expired: {}", expired.join(", "));
                        }
                    }
                }
            }
            debug!("Timer clock stopped");
        });

        Self {
            handle,
            shutdown_tx: Some(shutdown_tx),
            task: Some(task),
        }
    }

    pub fn handle(&self) -> TimerHandle {
        self.handle.clone()
    }

    /// Stop every timer, silence every alert and end the clock task.
    ///
    /// No tick runs after this returns.
    pub async fn shutdown(mut self) {
        self.handle.stop_all();
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!("Timer clock task ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for TimerDriver {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
