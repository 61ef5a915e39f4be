use crate::domain::model::{CycleReport, RawListing, SeenSet};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Fully-rendered page markup. Opaque as far as the pipeline is concerned;
/// only the extractor looks inside.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    html: String,
}

impl RenderedPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

/// Turns a URL into a rendered page. A failure here is recoverable: the
/// current cycle is abandoned and retried on the next tick.
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn render(&self, url: &str) -> Result<RenderedPage>;
}

/// Result of running the extractor over one rendered page.
#[derive(Debug, Default)]
pub struct Extraction {
    pub listings: Vec<RawListing>,
    /// Elements that did not have the expected shape and were skipped.
    pub skipped: usize,
}

/// Site-specific extraction. A malformed element is skipped, never fatal.
pub trait Extractor: Send + Sync {
    fn extract(&self, page: &RenderedPage) -> Extraction;
}

/// Sends one text message to the configured recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<()>;
}

/// Persistent set of already-reported titles.
#[async_trait]
pub trait SeenStore: Send + Sync {
    /// Load the persisted set, initializing it on first run.
    async fn load(&self) -> Result<SeenSet>;

    /// Atomically overwrite the persisted set. Callers always replace the
    /// whole set; there is no merge operation.
    async fn replace(&self, set: &SeenSet) -> Result<()>;
}

/// One full render→extract→filter→dedup→notify pass.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn run_cycle(&self) -> Result<CycleReport>;
}

/// Injected so the watch loop is testable without real delays.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
