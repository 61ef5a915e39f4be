use crate::config::WatchConfig;
use crate::domain::ports::{Pipeline, Sleeper};
use async_trait::async_trait;
use std::time::Duration;

/// Production sleeper backed by the tokio timer.
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Outer polling loop: run one cycle, sleep, repeat. A failed cycle switches
/// to the shorter backoff interval; there is no retry cap and the loop only
/// stops with the process.
pub struct Watcher<P, S> {
    pipeline: P,
    sleeper: S,
    poll_interval: Duration,
    error_backoff: Duration,
}

impl<P, S> Watcher<P, S>
where
    P: Pipeline,
    S: Sleeper,
{
    pub fn new(pipeline: P, sleeper: S, config: &WatchConfig) -> Self {
        Self {
            pipeline,
            sleeper,
            poll_interval: Duration::from_secs(config.poll_interval_seconds),
            error_backoff: Duration::from_secs(config.error_backoff_seconds),
        }
    }

    /// Run one cycle and decide how long to sleep before the next.
    pub async fn tick(&self) -> Duration {
        match self.pipeline.run_cycle().await {
            Ok(report) => {
                tracing::info!(
                    "Cycle complete: {} found, {} new, {} delivered",
                    report.found,
                    report.new_listings,
                    report.delivered
                );
                self.poll_interval
            }
            Err(e) => {
                tracing::error!("Cycle failed: {}", e);
                self.error_backoff
            }
        }
    }

    pub async fn run(&self) {
        tracing::info!("Watch loop started");
        loop {
            let delay = self.tick().await;
            tracing::debug!("Sleeping {:?} until next cycle", delay);
            self.sleeper.sleep(delay).await;
        }
    }
}
