pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{FileSeenStore, HttpRenderer, KworkExtractor, TelegramNotifier};
pub use crate::config::{credentials::Credentials, WatchConfig};
pub use crate::core::{
    pipeline::WatchPipeline,
    watcher::{TokioSleeper, Watcher},
};
pub use crate::domain::ports::Pipeline;
pub use crate::utils::error::{Result, WatchError};
