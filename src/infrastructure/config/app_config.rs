//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::args::CliArgs;
use crate::infrastructure::pokeapi::POKEAPI_BASE;

pub(super) const APP_NAME: &str = "pokedex-tui";
pub(super) const APP_QUALIFIER: &str = "dev";
pub(super) const APP_ORGANIZATION: &str = "pokedex-tui";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from TOML and overridden by CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Remote API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Catalog browsing settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the PokéAPI v2 endpoints.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Catalog browsing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Number of Pokémon loaded at startup.
    #[serde(default = "default_initial_limit")]
    pub initial_limit: u32,

    /// Rows per list page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Language code for descriptions and genus labels.
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            initial_limit: default_initial_limit(),
            page_size: default_page_size(),
            language: default_language(),
        }
    }
}

fn default_base_url() -> String {
    POKEAPI_BASE.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_initial_limit() -> u32 {
    151
}

const fn default_page_size() -> usize {
    20
}

fn default_language() -> String {
    "en".to_string()
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(base_url) = args.base_url {
            self.api.base_url = base_url;
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.api.timeout_secs = timeout_secs;
        }
        if let Some(initial_limit) = args.initial_limit {
            self.catalog.initial_limit = initial_limit;
        }
        if let Some(page_size) = args.page_size {
            self.catalog.page_size = usize::try_from(page_size).unwrap_or(usize::MAX);
        }
        if let Some(language) = args.language {
            self.catalog.language = language;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("pokedex.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            api: ApiConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}
