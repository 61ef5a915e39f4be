pub mod filter;
pub mod pipeline;
pub mod watcher;

pub use crate::domain::model::{CycleReport, QualifyingListing, RawListing, RejectReason, SeenSet};
pub use crate::domain::ports::{Extractor, Notifier, Pipeline, Renderer, SeenStore, Sleeper};
pub use crate::utils::error::Result;
