//! Configuration loader and path helpers.
//!
//! Uses Figment to merge built-in defaults, `config.toml`, `config.<env>.toml`
//! and `APP_*` env vars into typed [`Settings`]. The relevance floor, blend
//! weights and gating thresholds are constants of the engine, not settings.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};

pub struct Config {
    figment: Figment,
    base_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_from(Path::new("."), &env_name)
    }

    /// Loads `config.toml` and `config.<env>.toml` from `base_dir`, then `APP_*`
    /// variables (`__` separates nesting, e.g. `APP_SEARCH__TOP_K`).
    pub fn load_from(base_dir: &Path, env_name: &str) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(base_dir.join("config.toml")));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(base_dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base_dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base_dir.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment, base_dir: base_dir.to_path_buf() };
        config.validate_for_env(env_name)?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{}': {}", key, e)))
    }

    pub fn settings(&self) -> Result<Settings> {
        self.figment
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Dataset location with `~`/`$VAR` expanded, relative to the config directory.
    pub fn dataset_path(&self) -> Result<PathBuf> {
        let settings = self.settings()?;
        Ok(resolve_with_base(&self.base_dir, &settings.data.dataset_path))
    }

    fn validate_for_env(&self, env: &str) -> Result<()> {
        let settings = self.settings()?;
        if settings.search.top_k == 0 {
            return Err(Error::InvalidConfig("search.top_k must be at least 1".to_string()));
        }
        match env {
            "prod" | "production" => {
                if settings.fallback.show_errors {
                    return Err(Error::InvalidConfig(
                        "fallback.show_errors must be disabled in production".to_string(),
                    ));
                }
            }
            "dev" | "development" => {}
            "test" | "testing" => {}
            _ => {}
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub data: DataSettings,
    pub search: SearchSettings,
    pub fallback: FallbackSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub dataset_path: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self { dataset_path: "data/medical_data.json".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub top_k: usize,
    pub mode: SearchMode,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { top_k: 3, mode: SearchMode::Tfidf }
    }
}

/// Which ranker answers queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Tfidf,
    Keyword,
}

impl FromStr for SearchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "tfidf" | "tf-idf" => Ok(SearchMode::Tfidf),
            "keyword" => Ok(SearchMode::Keyword),
            other => Err(Error::InvalidConfig(format!("unknown search mode '{}'", other))),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Tfidf => f.write_str("tfidf"),
            SearchMode::Keyword => f.write_str("keyword"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackSettings {
    pub use_local_only: bool,
    pub show_errors: bool,
}

impl Default for FallbackSettings {
    fn default() -> Self {
        Self { use_local_only: true, show_errors: false }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { filter: "info".to_string() }
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
