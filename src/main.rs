use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_tui::application::{CatalogState, LoadDetailUseCase, PokedexService};
use pokedex_tui::infrastructure::{
    AppConfig, CliArgs, MemoryResponseCache, PokeApiClient, StorageManager,
};
use pokedex_tui::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app() -> Result<App> {
    dotenvy::dotenv().ok();
    let args = CliArgs::parse();

    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(
        version = pokedex_tui::VERSION,
        base_url = %config.api.base_url,
        "Starting {}",
        pokedex_tui::NAME
    );

    let client = PokeApiClient::with_base_url(config.api.base_url.clone(), config.api.timeout())?;
    let service = PokedexService::new(Arc::new(client), Arc::new(MemoryResponseCache::new()));

    let catalog = CatalogState::new(service.clone()).with_page_size(config.catalog.page_size);
    let detail_use_case = LoadDetailUseCase::new(service, config.catalog.language.clone());

    Ok(App::new(catalog, detail_use_case, config.catalog.initial_limit))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
