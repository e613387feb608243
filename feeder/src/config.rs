use std::env;

use crate::domain::entities::{default_repositories, RepositorySpec};
use crate::error::ConfigError;
use crate::feed::FeedFormat;

pub const DEFAULT_GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const DEFAULT_MAX_ITEMS: u32 = 30;
/// GitHub caps `first:` on connections at 100
const MAX_ITEMS_LIMIT: u32 = 100;

#[derive(Clone)]
pub struct Config {
    pub github_token: String,
    pub github_graphql_url: String,
    /// Directory receiving one `<id>.xml` per repository
    pub output_dir: String,
    pub feed_format: FeedFormat,
    /// Number of tags requested per repository
    pub max_items: u32,
    /// Set when the `DEBUG` env var is present
    pub debug: bool,
    pub repositories: Vec<RepositorySpec>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("github_token", &"<redacted>")
            .field("github_graphql_url", &self.github_graphql_url)
            .field("output_dir", &self.output_dir)
            .field("feed_format", &self.feed_format)
            .field("max_items", &self.max_items)
            .field("debug", &self.debug)
            .field("repositories", &self.repositories.len())
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let github_token = lookup("GRAPHQL_API_GITHUB_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingVar("GRAPHQL_API_GITHUB_TOKEN"))?;

        let feed_format = match lookup("FEED_FORMAT") {
            Some(value) => value.parse::<FeedFormat>().map_err(|_| ConfigError::Invalid {
                var: "FEED_FORMAT",
                value,
            })?,
            None => FeedFormat::default(),
        };

        let max_items = match lookup("FEED_MAX_ITEMS") {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(n) if (1..=MAX_ITEMS_LIMIT).contains(&n) => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "FEED_MAX_ITEMS",
                        value,
                    })
                }
            },
            None => DEFAULT_MAX_ITEMS,
        };

        Ok(Self {
            github_token,
            github_graphql_url: lookup("GITHUB_GRAPHQL_URL")
                .unwrap_or_else(|| DEFAULT_GITHUB_GRAPHQL_URL.to_string()),
            output_dir: lookup("FEED_OUTPUT_DIR").unwrap_or_else(|| "rss".to_string()),
            feed_format,
            max_items,
            debug: lookup("DEBUG").is_some(),
            repositories: default_repositories(),
        })
    }

    /// Default tracing filter when `RUST_LOG` is not set
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}
