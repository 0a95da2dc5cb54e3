use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;

use crate::bitrix::{parse_webhook_url, StageError};

/// Webhook used when nothing else is configured
pub const DEFAULT_WEBHOOK: &str = "https://hartzell.app/rest/1/jp689g5yfvre9pvd";

/// Environment variable overriding the webhook base URL
pub const WEBHOOK_ENV: &str = "STAGEHAND_WEBHOOK";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the webhook URL came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookSource {
    Flag,
    Env,
    ConfigFile,
    Default,
}

/// Resolved runtime settings
#[derive(Debug, Clone)]
pub struct Config {
    pub webhook: String,
    pub webhook_source: WebhookSource,
    pub timeout: Duration,
}

/// Values read from the rc file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RcFile {
    pub webhook: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl RcFile {
    /// Parse `key=value` lines; blank lines, `#` comments and unknown keys are skipped
    pub fn parse(contents: &str) -> Self {
        let mut rc = RcFile::default();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "webhook.url" if !value.is_empty() => rc.webhook = Some(value.to_string()),
                "webhook.timeout" => rc.timeout_secs = value.parse().ok(),
                _ => {}
            }
        }
        rc
    }

    /// Load the rc file; a missing file is an empty config
    pub fn load(path: &Path) -> Result<Self, StageError> {
        if !path.exists() {
            return Ok(RcFile::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| StageError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&contents))
    }
}

impl Config {
    /// Get the configuration file path (`~/.stagehand/rc`)
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".stagehand").join("rc"))
    }

    /// Resolve settings: flag, then environment, then rc file, then the built-in default
    pub fn resolve(flag: Option<&str>) -> Result<Self, StageError> {
        let rc = match Self::config_path() {
            Some(path) => RcFile::load(&path)?,
            None => RcFile::default(),
        };
        let env = std::env::var(WEBHOOK_ENV).ok();
        Self::from_sources(flag, env.as_deref(), rc)
    }

    /// Combine already-gathered sources and validate the winning webhook
    pub fn from_sources(flag: Option<&str>, env: Option<&str>, rc: RcFile) -> Result<Self, StageError> {
        let non_empty = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string);

        let (webhook, webhook_source) = if let Some(url) = non_empty(flag) {
            (url, WebhookSource::Flag)
        } else if let Some(url) = non_empty(env) {
            (url, WebhookSource::Env)
        } else if let Some(url) = rc.webhook {
            (url, WebhookSource::ConfigFile)
        } else {
            (DEFAULT_WEBHOOK.to_string(), WebhookSource::Default)
        };

        parse_webhook_url(&webhook)?;
        debug!("Using webhook from {:?}", webhook_source);

        Ok(Config {
            webhook,
            webhook_source,
            timeout: Duration::from_secs(rc.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        })
    }
}
