//! Editor configuration, read from TOML.
//!
//! ```toml
//! [caret]
//! blink = true
//! blink_interval_ms = 500
//! visible = true
//! ```
//!
//! Every key is optional; missing keys take the defaults shown above.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BLINK_INTERVAL_MS: u64 = 500;

/// Half-period of the caret blink.
pub const CARET_BLINK_INTERVAL: Duration = Duration::from_millis(DEFAULT_BLINK_INTERVAL_MS);

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EditorConfig {
    pub caret: CaretConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CaretConfig {
    pub blink: bool,
    pub blink_interval_ms: u64,
    /// Whether the caret starts out visible.
    pub visible: bool,
}

impl Default for CaretConfig {
    fn default() -> Self {
        Self {
            blink: true,
            blink_interval_ms: DEFAULT_BLINK_INTERVAL_MS,
            visible: true,
        }
    }
}

impl CaretConfig {
    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms)
    }
}

impl EditorConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(source)?;
        config.sanitize();
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(target: "edit.config", "loading editor config from {}", path.display());
        Self::from_toml_str(&source)
    }

    fn sanitize(&mut self) {
        if self.caret.blink_interval_ms == 0 {
            log::warn!(
                target: "edit.config",
                "caret.blink_interval_ms = 0 is not usable, using {DEFAULT_BLINK_INTERVAL_MS}"
            );
            self.caret.blink_interval_ms = DEFAULT_BLINK_INTERVAL_MS;
        }
    }
}
