//! Background poll worker
//!
//! One tokio task owns the authenticate-fetch-replace cycle. Cycle failures
//! are logged and leave the cached calendar untouched; the loop runs until a
//! stop signal arrives, which is observed during the inter-cycle wait.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::time::Duration;

use crate::cache::{TempoCache, TempoCalendar};
use crate::config::Config;
use crate::error::Result;
use crate::logging::get_logger;
use crate::rte::auth::TokenProvider;
use crate::rte::client::TempoApiClient;

/// Worker lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    /// Poll loop is active
    Running,
    /// Stop signal observed, loop is winding down
    Stopping,
    /// Loop has exited
    Stopped,
}

/// Background worker that keeps the Tempo calendar cache fresh
pub struct PollWorker {
    token_provider: TokenProvider,
    api: TempoApiClient,
    cache: Arc<TempoCache>,
    poll_interval: Duration,
    logger: crate::logging::StructuredLogger,
    state_tx: watch::Sender<WorkerState>,
    stop_rx: mpsc::UnboundedReceiver<()>,
    handle: WorkerHandle,
}

/// Clone-able handle to a running worker. The handle is the single shared
/// instance that both sensor and calendar registration surfaces receive;
/// there is no ambient global registry.
#[derive(Clone)]
pub struct WorkerHandle {
    cache: Arc<TempoCache>,
    state_rx: watch::Receiver<WorkerState>,
    stop_tx: mpsc::UnboundedSender<()>,
}

impl PollWorker {
    /// Create a worker from configuration. The cache starts empty.
    pub fn new(config: &Config) -> Result<Self> {
        let cache = Arc::new(TempoCache::new());
        let (state_tx, state_rx) = watch::channel(WorkerState::Running);
        let (stop_tx, stop_rx) = mpsc::unbounded_channel();

        let handle = WorkerHandle {
            cache: cache.clone(),
            state_rx,
            stop_tx,
        };

        Ok(Self {
            token_provider: TokenProvider::new(&config.api)?,
            api: TempoApiClient::new(&config.api)?,
            cache,
            poll_interval: Duration::from_secs(config.poll_interval_secs),
            logger: get_logger("worker"),
            state_tx,
            stop_rx,
            handle,
        })
    }

    /// Start the poll loop on a background task and return immediately
    pub fn spawn(self) -> WorkerHandle {
        let handle = self.handle.clone();
        tokio::spawn(self.run());
        handle
    }

    async fn run(mut self) {
        self.logger.info("Tempo poll worker started");

        loop {
            match self.poll_cycle().await {
                Ok(count) => {
                    self.logger
                        .info(&format!("Tempo calendar refreshed: {} days", count));
                }
                Err(e) => {
                    // Keep the last known good calendar and try again next cycle
                    self.logger.error(&format!("Poll cycle failed: {}", e));
                }
            }

            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {}
                _ = self.stop_rx.recv() => {
                    self.state_tx.send(WorkerState::Stopping).ok();
                    self.logger.info("Stop signal received");
                    break;
                }
            }
        }

        self.state_tx.send(WorkerState::Stopped).ok();
        self.logger.info("Tempo poll worker stopped");
    }

    /// One authenticate-fetch-replace cycle. Returns the number of days in
    /// the fresh calendar.
    async fn poll_cycle(&self) -> Result<usize> {
        let token = self.token_provider.fetch_token().await?;
        let days = self.api.fetch_tempo_days(&token).await?;
        let count = days.len();
        self.cache.replace(days);
        Ok(count)
    }
}

impl WorkerHandle {
    /// Current calendar snapshot for presentation adapters
    pub fn snapshot(&self) -> Arc<TempoCalendar> {
        self.cache.snapshot()
    }

    /// Current worker lifecycle state
    pub fn state(&self) -> WorkerState {
        *self.state_rx.borrow()
    }

    /// Signal the worker to stop. The loop exits during its current wait
    /// without running another cycle.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(());
    }

    /// Wait until the worker has fully stopped
    pub async fn stopped(&self) {
        let mut rx = self.state_rx.clone();
        // Returns Err only if the sender is gone, which also means the loop exited
        let _ = rx.wait_for(|s| *s == WorkerState::Stopped).await;
    }
}
