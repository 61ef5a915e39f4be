pub mod credentials;

use crate::utils::error::{Result, WatchError};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;

/// Kwork programming category.
pub const DEFAULT_SOURCE_URL: &str = "https://kwork.ru/projects?fc=41";

#[derive(Debug, Clone, Parser)]
#[command(name = "kwork-watch")]
#[command(about = "Watches the Kwork project feed and reports new listings to Telegram")]
pub struct WatchConfig {
    /// Listing page to poll.
    #[arg(long, default_value = DEFAULT_SOURCE_URL)]
    pub source_url: String,

    /// Seconds between successful polling cycles.
    #[arg(long, default_value = "600")]
    pub poll_interval_seconds: u64,

    /// Seconds to wait before retrying after a failed cycle.
    #[arg(long, default_value = "120")]
    pub error_backoff_seconds: u64,

    /// Lowest qualifying price, inclusive.
    #[arg(long, default_value = "500")]
    pub min_price: u64,

    /// Highest qualifying price, inclusive.
    #[arg(long, default_value = "100000")]
    pub max_price: u64,

    /// File holding the titles already reported.
    #[arg(long, default_value = "lastOrder.log")]
    pub state_path: String,

    /// TOML file with the bot token and chat id.
    #[arg(long, default_value = "credentials.toml")]
    pub credentials_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for WatchConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source_url", &self.source_url)?;
        validate_positive_number("poll_interval_seconds", self.poll_interval_seconds, 1)?;
        validate_positive_number("error_backoff_seconds", self.error_backoff_seconds, 1)?;

        if self.min_price > self.max_price {
            return Err(WatchError::Config {
                message: format!(
                    "min_price ({}) must not exceed max_price ({})",
                    self.min_price, self.max_price
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
impl WatchConfig {
    pub fn for_tests() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            poll_interval_seconds: 600,
            error_backoff_seconds: 120,
            min_price: 500,
            max_price: 100_000,
            state_path: "lastOrder.log".to_string(),
            credentials_path: "credentials.toml".to_string(),
            verbose: false,
        }
    }
}
