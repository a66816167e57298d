use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::domain::entities::page::DEFAULT_PAGE_SIZE;

pub const ENV_GRAPHQL_URL: &str = "TCGMARKET_GRAPHQL_URL";
pub const ENV_GRAPHQL_WS_URL: &str = "TCGMARKET_GRAPHQL_WS_URL";
pub const ENV_GAME: &str = "TCGMARKET_GAME";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub graphql_http_url: String,
    pub graphql_ws_url: String,
    pub default_game: String,
    pub page_size: i64,
    pub similar_cards_limit: i64,
    pub request_timeout_ms: u64,
    pub live_listing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graphql_http_url: "http://localhost:8080/v1/graphql".to_string(),
            graphql_ws_url: "ws://localhost:8080/v1/graphql".to_string(),
            default_game: "LOTR".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            similar_cards_limit: 6,
            request_timeout_ms: 10_000,
            live_listing: true,
        }
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "tcgmarket", "tcgmarket")
        .ok_or_else(|| anyhow!("unable to resolve config directory"))?;
    Ok(project_dirs.config_dir().join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = default_config_path()?;
        Self::load_from(&path, |name| std::env::var(name).ok())
    }

    pub fn load_from<F>(path: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if path.is_file() {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<Config>(&text)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        } else {
            log::debug!("no config file at {}, using defaults", path.display());
            Config::default()
        };

        if let Some(url) = env(ENV_GRAPHQL_URL) {
            config.graphql_http_url = url;
        }
        if let Some(url) = env(ENV_GRAPHQL_WS_URL) {
            config.graphql_ws_url = url;
        }
        if let Some(game) = env(ENV_GAME) {
            config.default_game = game;
        }

        if config.page_size <= 0 {
            anyhow::bail!("page_size must be greater than zero")
        }
        Ok(config)
    }
}
