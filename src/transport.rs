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

//! # ZiForm Transport Module
//!
//! The network seam. The engine needs exactly two requests: a GET for the
//! schema document and a JSON POST for the submission. [`ZiTransport`]
//! abstracts both so hosts can plug in their own client; [`ZiHttpTransport`]
//! is the reqwest-backed default.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::Result;

/// Status and body of a completed request.
#[derive(Clone, Debug, PartialEq)]
pub struct ZiResponse {
    pub status: u16,
    pub body: String,
}

impl ZiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait ZiTransport: Send + Sync {
    /// Fetches `url` and decodes the body as JSON.
    async fn get_json(&self, url: &str) -> Result<Value>;

    /// Posts `body` as JSON with caching disabled and reads the response
    /// body to completion.
    async fn post_json(&self, url: &str, body: &Value) -> Result<ZiResponse>;
}

#[cfg(feature = "http")]
pub use self::http::ZiHttpTransport;

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use async_trait::async_trait;
    use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
    use reqwest::Client;
    use serde_json::Value;
    use url::Url;

    use super::{ZiResponse, ZiTransport};
    use crate::config::ZiHttpConfig;
    use crate::errors::{Result, ZiError};

    #[derive(Clone, Debug)]
    pub struct ZiHttpTransport {
        http: Client,
        base_url: Option<Url>,
    }

    impl ZiHttpTransport {
        #[allow(non_snake_case)]
        pub fn new(config: &ZiHttpConfig) -> Result<Self> {
            let http = Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .user_agent(config.user_agent.clone())
                .build()?;

            let base_url = config.base_url.as_deref().map(Url::parse).transpose()?;

            Ok(Self { http, base_url })
        }

        /// Absolute URLs pass through; relative ones need a base URL.
        pub fn resolve(&self, url: &str) -> Result<Url> {
            match Url::parse(url) {
                Ok(absolute) => Ok(absolute),
                Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base_url {
                    Some(base) => Ok(base.join(url)?),
                    None => Err(ZiError::Url(format!(
                        "relative url {} needs a configured base_url",
                        url
                    ))),
                },
                Err(e) => Err(e.into()),
            }
        }
    }

    #[async_trait]
    impl ZiTransport for ZiHttpTransport {
        async fn get_json(&self, url: &str) -> Result<Value> {
            let url = self.resolve(url)?;
            let response = self.http.get(url.clone()).send().await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ZiError::http(status.as_u16(), body));
            }

            response
                .json::<Value>()
                .await
                .map_err(|e| ZiError::schema(format!("{} is not a JSON document: {}", url, e)))
        }

        async fn post_json(&self, url: &str, body: &Value) -> Result<ZiResponse> {
            let url = self.resolve(url)?;
            let response = self
                .http
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .header(CACHE_CONTROL, "no-cache")
                .body(serde_json::to_vec(body)?)
                .send()
                .await?;

            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(ZiResponse { status, body })
        }
    }

}
