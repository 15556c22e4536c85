//! Background scheduler that periodically runs the deadline sweep.

use super::TaskService;
use crate::task::ports::TaskRepository;
use mockable::Clock;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Shortest accepted sweep interval; `tokio` rejects a zero period.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Spawns the deadline sweep loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeadlineSweepScheduler;

impl DeadlineSweepScheduler {
    /// Starts sweeping on the current `tokio` runtime.
    ///
    /// The first sweep runs one `interval` after this call and then every
    /// `interval` until the returned handle is shut down. Ticks missed while
    /// a slow sweep is running are skipped, not replayed.
    #[must_use]
    pub fn spawn<R, C>(service: TaskService<R, C>, interval: Duration) -> DeadlineSweepHandle
    where
        R: TaskRepository + 'static,
        C: Clock + Send + Sync + 'static,
    {
        let period = interval.max(MIN_INTERVAL);
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let join = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            info!(interval = ?period, "deadline sweep scheduled");

            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    _ = ticker.tick() => {
                        service.update_task_statuses().await;
                    }
                }
            }
            debug!("deadline sweep stopped");
        });

        DeadlineSweepHandle { cancel, join }
    }
}

/// Handle for stopping a running deadline sweep loop.
#[derive(Debug)]
pub struct DeadlineSweepHandle {
    cancel: CancellationToken,
    join: JoinHandle<()>,
}

impl DeadlineSweepHandle {
    /// Returns `true` once the loop has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Stops the loop and waits for it to exit.
    ///
    /// A sweep already in progress is allowed to finish first.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        if let Err(err) = self.join.await {
            warn!(error = %err, "deadline sweep task ended abnormally");
        }
    }
}
