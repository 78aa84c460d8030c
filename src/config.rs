use crate::github::client::DEFAULT_API_URL;
use anyhow::{Result, anyhow};
use std::path::PathBuf;

/// Configuration keys enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    RepoToken,
    Repository,
    EventPath,
    ApiUrl,
    OutputPath,
}

impl ConfigKey {
    /// Environment variables consulted for this key, in priority order.
    pub fn env_vars(&self) -> &'static [&'static str] {
        match self {
            ConfigKey::RepoToken => &["INPUT_REPO-TOKEN", "GITHUB_TOKEN"],
            ConfigKey::Repository => &["GITHUB_REPOSITORY"],
            ConfigKey::EventPath => &["GITHUB_EVENT_PATH"],
            ConfigKey::ApiUrl => &["GITHUB_API_URL"],
            ConfigKey::OutputPath => &["GITHUB_OUTPUT"],
        }
    }

    /// Get all config keys
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::RepoToken,
            ConfigKey::Repository,
            ConfigKey::EventPath,
            ConfigKey::ApiUrl,
            ConfigKey::OutputPath,
        ]
    }
}

/// Settings for one run, as provided by the workflow runner.
#[derive(Clone, PartialEq)]
pub struct Config {
    pub token: String,
    pub repository: String,
    pub event_path: PathBuf,
    pub api_url: String,
    pub output_path: Option<PathBuf>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"***")
            .field("repository", &self.repository)
            .field("event_path", &self.event_path)
            .field("api_url", &self.api_url)
            .field("output_path", &self.output_path)
            .finish()
    }
}

fn lookup_key<F>(key: ConfigKey, lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    key.env_vars()
        .iter()
        .filter_map(|name| lookup(*name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

fn require_key<F>(key: ConfigKey, lookup: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup_key(key, lookup).ok_or_else(|| {
        anyhow!(
            "Missing required configuration: set {}",
            key.env_vars().join(" or ")
        )
    })
}

/// Builds a [`Config`] from a variable lookup.
///
/// Empty or whitespace-only values count as unset. Returns an `Err` naming
/// the variable when a required key is missing.
pub fn parse_config<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(Config {
        token: require_key(ConfigKey::RepoToken, &lookup)?,
        repository: require_key(ConfigKey::Repository, &lookup)?,
        event_path: PathBuf::from(require_key(ConfigKey::EventPath, &lookup)?),
        api_url: lookup_key(ConfigKey::ApiUrl, &lookup)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        output_path: lookup_key(ConfigKey::OutputPath, &lookup).map(PathBuf::from),
    })
}

/// Reads the configuration from the process environment.
pub fn load_from_env() -> Result<Config> {
    parse_config(|name| std::env::var(name).ok())
}
