//! Service configuration. Precedence: CLI > env > config file > defaults.
//! The CLI layer is applied by the binary on top of `AppConfig::load`.

use crate::errors::DbError;
use crate::todo::builder::DEFAULT_SORT_KEY;
use crate::todo::{CategoryMatch, QueryOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BIND: &str = "127.0.0.1:4567";
pub const DEFAULT_CONFIG_FILE: &str = "todolite.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind: String,
    pub seed_file: Option<PathBuf>,
    /// Mount point for the todo routes, e.g. `/api`. Empty mounts them at the root.
    pub api_prefix: String,
    pub default_sort_key: String,
    pub category_match: CategoryMatch,
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
    pub log_retention: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            seed_file: None,
            api_prefix: String::new(),
            default_sort_key: DEFAULT_SORT_KEY.to_string(),
            category_match: CategoryMatch::default(),
            log_dir: None,
            log_level: "info".to_string(),
            log_retention: 7,
        }
    }
}

/// One configuration layer; unset fields leave the layer below untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
    pub bind: Option<String>,
    pub seed_file: Option<PathBuf>,
    pub api_prefix: Option<String>,
    pub default_sort_key: Option<String>,
    pub category_match: Option<CategoryMatch>,
    pub log_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_retention: Option<u32>,
}

impl ConfigLayer {
    /// # Errors
    /// `DbError::Config` when the TOML is malformed or names an unknown key.
    pub fn from_toml_str(s: &str) -> Result<Self, DbError> {
        toml::from_str(s).map_err(|e| DbError::Config(e.to_string()))
    }

    /// Reads `TODOLITE_*` variables:
    /// - TODOLITE_BIND
    /// - TODOLITE_SEED
    /// - TODOLITE_API_PREFIX
    /// - TODOLITE_SORT_KEY
    /// - TODOLITE_CATEGORY_MATCH
    /// - TODOLITE_LOG_DIR
    /// - TODOLITE_LOG_LEVEL
    /// - TODOLITE_LOG_RETENTION
    ///
    /// # Errors
    /// `DbError::Config` for an unparseable category match or retention.
    pub fn from_env() -> Result<Self, DbError> {
        let var = |k: &str| std::env::var(k).ok();
        let category_match = var("TODOLITE_CATEGORY_MATCH")
            .map(|s| s.parse::<CategoryMatch>().map_err(DbError::Config))
            .transpose()?;
        let log_retention = var("TODOLITE_LOG_RETENTION")
            .map(|s| {
                s.parse::<u32>()
                    .map_err(|e| DbError::Config(format!("TODOLITE_LOG_RETENTION: {e}")))
            })
            .transpose()?;
        Ok(Self {
            bind: var("TODOLITE_BIND"),
            seed_file: var("TODOLITE_SEED").map(PathBuf::from),
            api_prefix: var("TODOLITE_API_PREFIX"),
            default_sort_key: var("TODOLITE_SORT_KEY"),
            category_match,
            log_dir: var("TODOLITE_LOG_DIR").map(PathBuf::from),
            log_level: var("TODOLITE_LOG_LEVEL"),
            log_retention,
        })
    }
}

impl AppConfig {
    /// Defaults, then the config file (if any), then the environment.
    ///
    /// The file is `explicit` when given, else `$TODOLITE_CONFIG`, else `./todolite.toml`
    /// when it exists. A named file that is missing is an error.
    ///
    /// # Errors
    /// `DbError::Config`/`DbError::Io` for missing or malformed config sources.
    pub fn load(explicit: Option<&Path>) -> Result<Self, DbError> {
        let mut cfg = Self::default();
        if let Some(path) = locate(explicit) {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| DbError::Config(format!("{}: {e}", path.display())))?;
            cfg.merge(ConfigLayer::from_toml_str(&text)?);
            log::debug!("loaded config from {}", path.display());
        }
        cfg.merge(ConfigLayer::from_env()?);
        Ok(cfg)
    }

    /// Overlays every field `layer` sets.
    pub fn merge(&mut self, layer: ConfigLayer) {
        if let Some(v) = layer.bind { self.bind = v; }
        if let Some(v) = layer.seed_file { self.seed_file = Some(v); }
        if let Some(v) = layer.api_prefix { self.api_prefix = v; }
        if let Some(v) = layer.default_sort_key { self.default_sort_key = v; }
        if let Some(v) = layer.category_match { self.category_match = v; }
        if let Some(v) = layer.log_dir { self.log_dir = Some(v); }
        if let Some(v) = layer.log_level { self.log_level = v; }
        if let Some(v) = layer.log_retention { self.log_retention = v; }
    }

    #[must_use]
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            default_sort_key: self.default_sort_key.clone(),
            category_match: self.category_match,
        }
    }
}

fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    if let Ok(p) = std::env::var("TODOLITE_CONFIG") {
        return Some(PathBuf::from(p));
    }
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    local.exists().then_some(local)
}
