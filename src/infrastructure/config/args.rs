use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pokedex",
    version,
    about = "A terminal Pokédex browser for the public PokéAPI",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// PokéAPI base URL.
    #[arg(long, value_name = "URL", env = "POKEDEX_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Number of Pokémon loaded at startup.
    #[arg(long, value_name = "N")]
    pub initial_limit: Option<u32>,

    /// Rows per list page.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,

    /// Language code for descriptions (e.g. en, es, ja).
    #[arg(long, value_name = "CODE")]
    pub language: Option<String>,
}
