use crate::config::WatchConfig;
use crate::core::filter;
use crate::domain::model::{CycleReport, RejectReason, SeenSet};
use crate::domain::ports::{Extractor, Notifier, Pipeline, Renderer, SeenStore};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Orchestrates one polling cycle: render the page, extract listings, filter
/// by price, compare against the persisted seen-set, deliver what is new and
/// replace the set.
pub struct WatchPipeline<R, E, N, S> {
    renderer: R,
    extractor: E,
    notifier: N,
    store: S,
    config: WatchConfig,
}

impl<R, E, N, S> WatchPipeline<R, E, N, S>
where
    R: Renderer,
    E: Extractor,
    N: Notifier,
    S: SeenStore,
{
    pub fn new(renderer: R, extractor: E, notifier: N, store: S, config: WatchConfig) -> Self {
        Self {
            renderer,
            extractor,
            notifier,
            store,
            config,
        }
    }
}

#[async_trait]
impl<R, E, N, S> Pipeline for WatchPipeline<R, E, N, S>
where
    R: Renderer,
    E: Extractor,
    N: Notifier,
    S: SeenStore,
{
    async fn run_cycle(&self) -> Result<CycleReport> {
        let mut report = CycleReport::default();

        let page = match self.renderer.render(&self.config.source_url).await {
            Ok(page) => page,
            Err(e) => {
                // Recoverable: the seen-set is untouched, so the next tick
                // retries from the same state.
                tracing::error!("Failed to render {}: {}", self.config.source_url, e);
                report.aborted = true;
                return Ok(report);
            }
        };

        let extraction = self.extractor.extract(&page);
        report.found = extraction.listings.len();
        report.skipped_elements = extraction.skipped;
        tracing::info!(
            "Found {} listings ({} malformed elements skipped)",
            report.found,
            report.skipped_elements
        );

        let seen = match self.store.load().await {
            Ok(seen) => seen,
            Err(e) => {
                // Fall back to an empty set; worst case is a duplicate
                // notification, never a crash.
                tracing::error!("Failed to load seen titles: {}", e);
                SeenSet::new()
            }
        };
        tracing::info!("Loaded {} seen titles", seen.len());

        let mut processed_this_cycle = SeenSet::new();
        let mut pending = Vec::new();

        for raw in &extraction.listings {
            match filter::qualify(raw, self.config.min_price, self.config.max_price) {
                Ok(listing) => {
                    tracing::debug!("Processing listing: {} at {}", listing.title, listing.price);
                    report.qualified += 1;
                    processed_this_cycle.insert(listing.title.clone());
                    if !seen.contains(&listing.title) {
                        pending.push(listing.notification_text());
                    }
                }
                Err(RejectReason::MalformedPrice) => {
                    report.rejected += 1;
                    tracing::warn!(
                        "Malformed price '{}' for listing: {}",
                        raw.price_text,
                        raw.title
                    );
                }
                Err(RejectReason::OutOfRange { price }) => {
                    report.rejected += 1;
                    tracing::debug!("Price {} out of range for listing: {}", price, raw.title);
                }
            }
        }

        report.new_listings = pending.len();

        // The page lists the newest listing first; reversing delivery makes it
        // the most recent message in the chat. Best-effort: a failed send is
        // logged and the rest still go out.
        for text in pending.iter().rev() {
            match self.notifier.notify(text).await {
                Ok(()) => report.delivered += 1,
                Err(e) => tracing::error!("Failed to deliver notification: {}", e),
            }
        }

        // Undelivered listings are still folded in here, so they will not be
        // retried next cycle.
        self.store.replace(&processed_this_cycle).await?;

        Ok(report)
    }
}
