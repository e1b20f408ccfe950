//! Configuration for a generation run.
//!
//! Everything is resolved relative to an explicit base directory (the
//! working directory when run from the CLI):
//! 1. Credentials from `<base>/.env` (`PRETALX_TOKEN`, `API_URL`)
//! 2. Optional settings from `<base>/.pretalx-md.yaml`
//! 3. Defaults (`content/`, fixed page date)
//!
//! A missing `.env` is not an error: the run proceeds with empty
//! credentials and fails at the API instead.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::adapters::Credentials;
use crate::domain::ContentCategory;
use crate::render::DEFAULT_DATE;

/// Credentials file name
pub const ENV_FILE: &str = ".env";

/// Settings file name
pub const CONFIG_FILE: &str = ".pretalx-md.yaml";

/// Format of the front-matter `Date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

const TOKEN_KEY: &str = "PRETALX_TOKEN";
const API_URL_KEY: &str = "API_URL";

/// Raw settings file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: Option<String>,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub front_matter: FrontMatterConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Content directory (relative to the base directory)
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrontMatterConfig {
    /// Value of the `Date` field on every page
    pub date: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Directory the run is anchored to
    pub base_dir: PathBuf,
    /// Root of the generated pages
    pub content_dir: PathBuf,
    /// API credentials
    pub credentials: Credentials,
    /// Date stamped on every page
    pub front_matter_date: String,
    /// Path to the settings file (if found)
    pub config_file: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Output directory for a category
    pub fn content_dir_for(&self, category: ContentCategory) -> PathBuf {
        self.content_dir.join(category.dir_name())
    }
}

/// Read credentials from an env file without touching the process environment.
///
/// Lines that do not parse are skipped with a warning.
pub fn load_credentials(path: &Path) -> Result<Credentials> {
    if !path.is_file() {
        debug!(path = %path.display(), "No credentials file, using empty credentials");
        return Ok(Credentials::default());
    }

    let mut credentials = Credentials::default();
    let entries = dotenvy::from_path_iter(path)
        .with_context(|| format!("Failed to read credentials file: {}", path.display()))?;

    for entry in entries {
        let (key, value) = match entry {
            Ok(pair) => pair,
            Err(e) => {
                warn!(path = %path.display(), "Skipping unparsable credentials line: {}", e);
                continue;
            }
        };
        match key.as_str() {
            TOKEN_KEY => credentials.token = value,
            API_URL_KEY => credentials.api_url = value,
            _ => {}
        }
    }

    Ok(credentials)
}

/// Load and parse the settings file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the base directory
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Check that a configured date matches the front-matter date format
fn validate_date(date: &str) -> Result<()> {
    NaiveDateTime::parse_from_str(date, DATE_FORMAT)
        .with_context(|| format!("Invalid front matter date '{}', expected YYYY-MM-DD HH:MM", date))?;
    Ok(())
}

/// Load configuration anchored at `base_dir`
pub fn load_config(base_dir: &Path) -> Result<ResolvedConfig> {
    let credentials = load_credentials(&base_dir.join(ENV_FILE))?;

    let config_path = base_dir.join(CONFIG_FILE);
    let config_file = config_path.is_file().then_some(config_path);

    let (content_dir, front_matter_date) = if let Some(ref path) = config_file {
        let config = load_config_file(path)?;

        let content_dir = config
            .paths
            .content
            .as_deref()
            .map(|p| resolve_path(base_dir, p))
            .unwrap_or_else(|| base_dir.join("content"));

        let date = config
            .front_matter
            .date
            .unwrap_or_else(|| DEFAULT_DATE.to_string());
        validate_date(&date)?;

        (content_dir, date)
    } else {
        (base_dir.join("content"), DEFAULT_DATE.to_string())
    };

    Ok(ResolvedConfig {
        base_dir: base_dir.to_path_buf(),
        content_dir,
        credentials,
        front_matter_date,
        config_file,
    })
}
