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

//! # ZiForm Logging Module
//!
//! A small stdout backend for the `log` facade. Hosts that already install
//! their own logger can skip this entirely; ZiForm itself only ever talks to
//! the `log` macros.

use std::sync::OnceLock;

use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::config::ZiLogConfig;

static LOGGER: OnceLock<ZiLogger> = OnceLock::new();

#[derive(Debug)]
pub struct ZiLogger {
    level: log::LevelFilter,
    json: bool,
}

impl ZiLogger {
    #[allow(non_snake_case)]
    pub fn new(config: &ZiLogConfig) -> Self {
        ZiLogger {
            level: config.level_filter(),
            json: config.json,
        }
    }

    /// Installs the global logger. Safe to call multiple times; the first
    /// call wins.
    pub fn init(config: &ZiLogConfig) {
        let logger = LOGGER.get_or_init(|| ZiLogger::new(config));
        if log::set_logger(logger).is_ok() {
            log::set_max_level(logger.level);
        }
    }

    pub fn format(&self, record: &log::Record) -> String {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        if self.json {
            to_json(record, &timestamp).to_string()
        } else {
            format!(
                "{} {:<5} {}: {}",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            )
        }
    }
}

fn to_json(record: &log::Record, timestamp: &str) -> Value {
    json!({
        "timestamp": timestamp,
        "level": record.level().as_str(),
        "target": record.target(),
        "message": record.args().to_string(),
    })
}

impl log::Log for ZiLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            println!("{}", self.format(record));
        }
    }

    fn flush(&self) {}
}
