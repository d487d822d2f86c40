//! Startup configuration: optional RON file, then environment overrides.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use castbot_engine::FetchSettings;
use log::LevelFilter;
use ron::extensions::Extensions;
use serde::Deserialize;

use super::logging::LogDestination;

const CONFIG_PATH_VAR: &str = "CASTBOT_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "castbot.ron";
const DEFAULT_PAUSE_MS: u64 = 1000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("missing required setting `{0}`")]
    Missing(&'static str),
    #[error("invalid value {value:?} for `{key}`")]
    Invalid { key: &'static str, value: String },
}

/// Values as written in the RON file; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    token: Option<String>,
    authorized_user_id: Option<u64>,
    pause_ms: Option<u64>,
    request_timeout_secs: Option<u64>,
    log_level: Option<String>,
    log_destination: Option<LogDestination>,
}

#[derive(Clone)]
pub struct BotConfig {
    pub token: String,
    pub authorized_user_id: u64,
    pub pause: Duration,
    pub request_timeout: Duration,
    pub log_level: LevelFilter,
    pub log_destination: LogDestination,
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"<redacted>")
            .field("authorized_user_id", &self.authorized_user_id)
            .field("pause", &self.pause)
            .field("request_timeout", &self.request_timeout)
            .field("log_level", &self.log_level)
            .field("log_destination", &self.log_destination)
            .finish()
    }
}

impl BotConfig {
    /// Reads the config file named by `CASTBOT_CONFIG` (default
    /// `castbot.ron`, silently skipped when absent) and applies environment
    /// overrides. Call after `.env` has been loaded.
    ///
    /// Returns the config together with the file path that was read, if any.
    /// Logging is not up yet, so reporting the source is left to the caller.
    pub fn load() -> Result<(Self, Option<PathBuf>), ConfigError> {
        let path = std::env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        let file = read_file(&path)?;
        let source = file.is_some().then_some(path);
        let config = Self::resolve(file.unwrap_or_default(), |key| std::env::var(key).ok())?;
        Ok((config, source))
    }

    pub fn resolve(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let env = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        let token = env("CASTBOT_TOKEN")
            .or_else(|| env("TELOXIDE_TOKEN"))
            .or(file.token)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::Missing("token"))?;

        let authorized_user_id = match env("CASTBOT_AUTHORIZED_USER_ID") {
            Some(raw) => parse_number("authorized_user_id", &raw)?,
            None => file
                .authorized_user_id
                .ok_or(ConfigError::Missing("authorized_user_id"))?,
        };

        let pause_ms = match env("CASTBOT_PAUSE_MS") {
            Some(raw) => parse_number("pause_ms", &raw)?,
            None => file.pause_ms.unwrap_or(DEFAULT_PAUSE_MS),
        };

        let request_timeout_secs = match env("CASTBOT_REQUEST_TIMEOUT_SECS") {
            Some(raw) => parse_number("request_timeout_secs", &raw)?,
            None => file
                .request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let log_level = match env("CASTBOT_LOG_LEVEL").or(file.log_level) {
            Some(raw) => castbot_logging::parse_level(&raw).ok_or(ConfigError::Invalid {
                key: "log_level",
                value: raw,
            })?,
            None => LevelFilter::Info,
        };

        let log_destination = match env("CASTBOT_LOG_DESTINATION") {
            Some(raw) => raw.parse().map_err(|()| ConfigError::Invalid {
                key: "log_destination",
                value: raw,
            })?,
            None => file.log_destination.unwrap_or_default(),
        };

        Ok(Self {
            token,
            authorized_user_id,
            pause: Duration::from_millis(pause_ms),
            request_timeout: Duration::from_secs(request_timeout_secs),
            log_level,
            log_destination,
        })
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: self.request_timeout,
            ..FetchSettings::default()
        }
    }
}

/// `Ok(None)` when the file does not exist.
fn read_file(path: &Path) -> Result<Option<FileConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::Options::default()
        .with_default_extension(Extensions::IMPLICIT_SOME)
        .from_str(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
}

fn parse_number(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}
