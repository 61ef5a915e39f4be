// Adapters layer: concrete implementations for the external systems the core
// talks to through ports (http fetch, markup extraction, telegram, file store).

pub mod extractor;
pub mod notifier;
pub mod renderer;
pub mod store;

pub use extractor::KworkExtractor;
pub use notifier::TelegramNotifier;
pub use renderer::HttpRenderer;
pub use store::FileSeenStore;
