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

//! # ZiForm Error Module
//!
//! This module defines the error types used throughout ZiForm for consistent
//! error handling and reporting.
//!
//! ## Error Categories
//!
//! - **Transport**: The network layer failed to deliver a request
//! - **Http**: The server answered with a non-success status
//! - **Schema**: The fetched form document is malformed
//! - **Rule**: A visibility rule string could not be decoded
//! - **Submission**: The form refused to start a submission
//! - **Url**: A schema link or endpoint could not be resolved
//! - **Config**: Configuration could not be loaded
//! - **Serde**: Serialization/deserialization errors
//! - **Io**: Filesystem errors
//!
//! Only a subset of these ever reaches a caller. Rule errors are recovered by
//! the compiler, which logs them and keeps going.
//!
//! ## Usage
//!
//! ```rust
//! use ziform::errors::{Result, ZiError};
//!
//! fn require_id(id: Option<&str>) -> Result<&str> {
//!     id.ok_or_else(|| ZiError::schema("field is missing an id"))
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout ZiForm.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Canonical error enumeration for ZiForm.
#[derive(Debug, Error, Serialize, Deserialize, PartialEq)]
pub enum ZiError {
    /// The transport could not complete a request.
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote endpoint answered with a non-success status.
    #[error("http status {status}: {body}")]
    Http { status: u16, body: String },

    /// Errors caused by a malformed form definition document.
    #[error("schema error: {message}")]
    Schema { message: String },

    /// A visibility rule string could not be decoded.
    #[error("rule error: {message}")]
    Rule { message: String },

    /// The submit state machine rejected the request.
    #[error("submission rejected: {message}")]
    Submission { message: String },

    /// A link or endpoint could not be turned into a URL.
    #[error("url error: {0}")]
    Url(String),

    /// Configuration loading failures.
    #[error("config error: {message}")]
    Config { message: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors originating from the filesystem.
    #[error("io error: {0}")]
    Io(String),
}

impl From<io::Error> for ZiError {
    fn from(err: io::Error) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZiError {
    fn from(err: serde_json::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for ZiError {
    fn from(err: serde_yaml::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl From<url::ParseError> for ZiError {
    fn from(err: url::ParseError) -> Self {
        ZiError::Url(err.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for ZiError {
    fn from(err: reqwest::Error) -> Self {
        ZiError::Transport(err.to_string())
    }
}

impl ZiError {
    /// Helper to construct schema errors.
    pub fn schema<T: Into<String>>(message: T) -> Self {
        ZiError::Schema {
            message: message.into(),
        }
    }

    /// Helper to construct rule errors.
    pub fn rule<T: Into<String>>(message: T) -> Self {
        ZiError::Rule {
            message: message.into(),
        }
    }

    /// Helper to construct submission errors.
    pub fn submission<T: Into<String>>(message: T) -> Self {
        ZiError::Submission {
            message: message.into(),
        }
    }

    /// Helper to construct config errors.
    pub fn config<T: Into<String>>(message: T) -> Self {
        ZiError::Config {
            message: message.into(),
        }
    }

    /// Helper to construct HTTP status errors.
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        ZiError::Http {
            status,
            body: body.into(),
        }
    }
}
