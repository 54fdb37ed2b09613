//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of ZiForm.
//! The ZiForm project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # ZiForm Configuration Module
//!
//! Configuration for the compiler, the HTTP transport and the logger.
//! Everything has a default; a config file or JSON blob only needs to name
//! the values it changes.
//!
//! ```yaml
//! fallback_submit_label: Send
//! http:
//!   timeout_secs: 10
//!   base_url: https://forms.example.com
//! log:
//!   level: debug
//!   json: false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, ZiError};

/// Suffix that marks a schema link and is cut from its path to form the
/// submission endpoint.
pub const DEFAULT_SCHEMA_SUFFIX: &str = ".json";

pub const DEFAULT_SUBMIT_LABEL: &str = "Submit";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiHttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Resolves relative endpoints such as `/f` before sending.
    pub base_url: Option<String>,
}

impl Default for ZiHttpConfig {
    fn default() -> Self {
        ZiHttpConfig {
            timeout_secs: 30,
            user_agent: format!("ZiForm/{}", env!("CARGO_PKG_VERSION")),
            base_url: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiLogConfig {
    pub level: String,
    /// One JSON object per line instead of plain text.
    pub json: bool,
}

impl Default for ZiLogConfig {
    fn default() -> Self {
        ZiLogConfig {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl ZiLogConfig {
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.level.to_ascii_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" | "warning" => log::LevelFilter::Warn,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Info,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiFormConfig {
    pub schema_suffix: String,
    pub fallback_submit_label: String,
    pub http: ZiHttpConfig,
    pub log: ZiLogConfig,
}

impl Default for ZiFormConfig {
    fn default() -> Self {
        ZiFormConfig {
            schema_suffix: DEFAULT_SCHEMA_SUFFIX.to_string(),
            fallback_submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
            http: ZiHttpConfig::default(),
            log: ZiLogConfig::default(),
        }
    }
}

impl ZiFormConfig {
    /// Loads a config file, picking the format from its extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let builder: ZiFormConfigBuilder = match extension.as_str() {
            "json" => serde_json::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            other => {
                return Err(ZiError::config(format!(
                    "unsupported config format '{}' for {}",
                    other,
                    path.display()
                )))
            }
        };
        Ok(builder.build())
    }
}

/// All-optional mirror of [`ZiFormConfig`]; missing values fall back to
/// the defaults.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ZiFormConfigBuilder {
    pub schema_suffix: Option<String>,
    pub fallback_submit_label: Option<String>,
    pub http: Option<ZiHttpConfigBuilder>,
    pub log: Option<ZiLogConfigBuilder>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ZiHttpConfigBuilder {
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ZiLogConfigBuilder {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl ZiFormConfigBuilder {
    pub fn build(self) -> ZiFormConfig {
        let base = ZiFormConfig::default();
        let http = self.http.unwrap_or_default();
        let log = self.log.unwrap_or_default();
        ZiFormConfig {
            schema_suffix: self
                .schema_suffix
                .filter(|s| !s.is_empty())
                .unwrap_or(base.schema_suffix),
            fallback_submit_label: self
                .fallback_submit_label
                .unwrap_or(base.fallback_submit_label),
            http: ZiHttpConfig {
                timeout_secs: http.timeout_secs.unwrap_or(base.http.timeout_secs),
                user_agent: http.user_agent.unwrap_or(base.http.user_agent),
                base_url: http.base_url.or(base.http.base_url),
            },
            log: ZiLogConfig {
                level: log.level.unwrap_or(base.log.level),
                json: log.json.unwrap_or(base.log.json),
            },
        }
    }

    /// Builds from a JSON blob. An unreadable blob yields the defaults.
    pub fn from_json(value: &Value) -> ZiFormConfig {
        let builder: ZiFormConfigBuilder =
            serde_json::from_value(value.clone()).unwrap_or_else(|e| {
                log::warn!("ignoring unreadable config: {}", e);
                ZiFormConfigBuilder::default()
            });
        builder.build()
    }
}
