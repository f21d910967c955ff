//! Config file loading.
//!
//! `~/.config/jobdeck/config.toml`, with environment overrides for the
//! two values people change most:
//!
//! ```toml
//! [api]
//! base_url = "https://jobs.example"
//! token = "..."
//!
//! [ui]
//! ascii_only = false
//! ```

use std::path::PathBuf;
use std::{env, fs};

use serde::Deserialize;

pub const BASE_URL_ENV: &str = "JOBDECK_API_BASE_URL";
pub const TOKEN_ENV: &str = "JOBDECK_API_TOKEN";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Default, Deserialize)]
pub struct JobdeckConfig {
    pub api: Option<ApiSection>,
    pub ui: Option<UiSection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub token: Option<String>,
}

impl ApiSection {
    // The token never reaches the log; only its presence does.
    fn masked_token(&self) -> &'static str {
        if self.token.is_some() { "[REDACTED]" } else { "None" }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UiSection {
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

impl JobdeckConfig {
    /// `~/.config/jobdeck/config.toml` (platform equivalent via `dirs`).
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jobdeck").join("config.toml"))
    }

    /// Load the config file if one exists. A missing file is `Ok(None)`;
    /// an unreadable or unparseable file is an error worth surfacing.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path).map(Some),
            _ => Ok(None),
        }
    }

    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        if let Some(api) = &config.api {
            tracing::debug!(
                base_url = api.base_url.as_deref(),
                token = api.masked_token(),
                "Loaded api config"
            );
        }
        Ok(config)
    }

    /// Base URL, with the env var winning over the file and a localhost
    /// default when neither is set.
    #[must_use]
    pub fn base_url(&self) -> String {
        env::var(BASE_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.api.as_ref().and_then(|api| api.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Bearer token, env var winning over the file.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        env::var(TOKEN_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.api.as_ref().and_then(|api| api.token.clone()))
    }

    #[must_use]
    pub fn ascii_only(&self) -> bool {
        self.ui.as_ref().is_some_and(|ui| ui.ascii_only)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::{ConfigError, JobdeckConfig};

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_sections_from_file() {
        let (_dir, path) = write_config(
            "[api]\nbase_url = \"https://jobs.example\"\ntoken = \"tok\"\n\n[ui]\nascii_only = true\n",
        );
        let config = JobdeckConfig::load_from(&path).unwrap();
        assert_eq!(
            config.api.as_ref().unwrap().base_url.as_deref(),
            Some("https://jobs.example")
        );
        assert!(config.ascii_only());
    }

    #[test]
    fn parse_failure_carries_the_path() {
        let (_dir, path) = write_config("[api\nbroken");
        let err = JobdeckConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let (_dir, path) = write_config("");
        let config = JobdeckConfig::load_from(&path).unwrap();
        // Env vars may be set by the harness; only assert the file side.
        assert!(config.api.is_none());
        assert!(!config.ascii_only());
    }
}
