use std::collections::HashSet;

/// One listing as it appears on the page, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListing {
    pub title: String,
    pub price_text: String,
    pub url: String,
}

/// A listing whose price parsed cleanly and fell inside the configured range.
/// Dedup identity is `title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifyingListing {
    pub title: String,
    pub price_text: String,
    pub url: String,
    pub price: u64,
}

impl QualifyingListing {
    /// Message body for one new listing.
    pub fn notification_text(&self) -> String {
        format!(
            "На Kwork появилась новая задача!\n\nНазвание: {}\nЦена: {} ₽\nСсылка: {}",
            self.title, self.price_text, self.url
        )
    }
}

/// Why a listing did not qualify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Price text contained no digits.
    MalformedPrice,
    /// Parsed fine but fell outside the configured range.
    OutOfRange { price: u64 },
}

/// Titles reported as of the end of the last successful cycle.
pub type SeenSet = HashSet<String>;

/// Line written on first-run initialization so a never-created store is
/// distinguishable from an empty page observed last cycle.
pub const FIRST_RUN_SENTINEL: &str = "Start";

/// Counts from one polling cycle, for logging and tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub found: usize,
    pub skipped_elements: usize,
    pub qualified: usize,
    pub rejected: usize,
    pub new_listings: usize,
    pub delivered: usize,
    /// True when the renderer failed and the cycle ended before touching the
    /// store.
    pub aborted: bool,
}
