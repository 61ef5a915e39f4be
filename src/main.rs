use clap::Parser;
use kwork_watch::utils::{logger, validation::Validate};
use kwork_watch::{
    Credentials, FileSeenStore, HttpRenderer, KworkExtractor, TelegramNotifier, TokioSleeper,
    WatchConfig, WatchPipeline, Watcher,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = WatchConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting kwork-watch");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let credentials = Credentials::load_or_bootstrap(&config.credentials_path)?;

    let client = reqwest::Client::new();
    let renderer = HttpRenderer::new(client.clone());
    let extractor = KworkExtractor::new()?;
    let notifier = TelegramNotifier::new(client, credentials.bot_token, credentials.chat_id);
    let store = FileSeenStore::new(&config.state_path);

    let pipeline = WatchPipeline::new(renderer, extractor, notifier, store, config.clone());
    let watcher = Watcher::new(pipeline, TokioSleeper, &config);

    println!("Kwork watch started!");
    let worker = tokio::spawn(async move { watcher.run().await });
    worker.await?;

    Ok(())
}
