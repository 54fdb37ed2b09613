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

//! # ZiForm Tests - Entry Point
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test entry
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use ziform::{
    Result, ZiBlock, ZiBlockNode, ZiEntryPoint, ZiError, ZiFormConfigBuilder, ZiLink,
    ZiPageContext, ZiResponse, ZiSubmissionController, ZiSubmitOutcome, ZiTransport,
};

/// Serves canned documents by URL and records every request.
#[derive(Default)]
struct StaticSite {
    documents: HashMap<String, Value>,
    fetched: Mutex<Vec<String>>,
    posted: Mutex<Vec<String>>,
}

impl StaticSite {
    fn serving(url: &str, document: Value) -> Self {
        let mut site = Self::default();
        site.documents.insert(url.to_string(), document);
        site
    }

    fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl ZiTransport for StaticSite {
    async fn get_json(&self, url: &str) -> Result<Value> {
        self.fetched.lock().unwrap().push(url.to_string());
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| ZiError::http(404, "not found"))
    }

    async fn post_json(&self, url: &str, _body: &Value) -> Result<ZiResponse> {
        self.posted.lock().unwrap().push(url.to_string());
        Ok(ZiResponse {
            status: 200,
            body: String::new(),
        })
    }
}

fn contact_schema() -> Value {
    json!({"data": [
        {"id": "email", "label": "Email", "inputType": "email", "required": "x"},
        {"id": "send", "inputType": "submit", "label": "Send"}
    ]})
}

fn block_with_link(text: &str, href: &str) -> ZiBlock {
    ZiBlock::new(vec![
        ZiBlockNode::Text("Get in touch".into()),
        ZiBlockNode::Link(ZiLink {
            text: text.into(),
            href: href.into(),
        }),
    ])
}

/// The schema link is replaced by the compiled form, whose endpoint is the
/// schema location without its suffix.
#[tokio::test]
async fn test_decorate_replaces_link_with_form() {
    let site = StaticSite::serving("https://site.example/forms/contact.json", contact_schema());
    let page = ZiPageContext::new("https://site.example/about/team").unwrap();
    let mut block = block_with_link(
        "/forms/contact.json",
        "https://site.example/forms/contact.json",
    );

    let decorated = ZiEntryPoint::new()
        .decorate(&mut block, &page, &site)
        .await
        .unwrap();

    assert!(decorated);
    assert_eq!(site.fetched(), vec!["https://site.example/forms/contact.json"]);
    assert_eq!(block.nodes.len(), 2);
    assert_eq!(block.nodes[0], ZiBlockNode::Text("Get in touch".into()));
    assert!(matches!(block.nodes[1], ZiBlockNode::Form(_)));

    let form = block.form().unwrap();
    assert_eq!(form.action(), "/forms/contact");
    assert_eq!(form.endpoint(), "https://site.example/forms/contact");
    assert!(form.wrapper("form-email-wrapper").is_some());
}

#[tokio::test]
async fn test_decorated_form_submits_to_derived_endpoint() {
    let site = StaticSite::serving("https://cdn.example/content/contact.json", contact_schema());
    let page = ZiPageContext::new("https://site.example/about/team")
        .unwrap()
        .with_base_url("https://cdn.example/content/page")
        .unwrap();
    let mut block = block_with_link("./contact.json", "ignored");

    ZiEntryPoint::new()
        .decorate(&mut block, &page, &site)
        .await
        .unwrap();

    let form = block.form_mut().unwrap();
    form.set_value("email", "ann@example.com");
    let outcome = ZiSubmissionController::new(&site)
        .click_default(form)
        .await
        .unwrap();

    assert!(matches!(outcome, ZiSubmitOutcome::Submitted { .. }));
    assert_eq!(
        site.posted.lock().unwrap().clone(),
        vec!["https://cdn.example/content/contact"]
    );
}

#[tokio::test]
async fn test_block_without_schema_link_is_untouched() {
    let site = StaticSite::default();
    let page = ZiPageContext::new("https://site.example/").unwrap();
    let mut block = block_with_link("Read more", "https://site.example/more.html");
    let before = block.clone();

    let decorated = ZiEntryPoint::new()
        .decorate(&mut block, &page, &site)
        .await
        .unwrap();

    assert!(!decorated);
    assert_eq!(block, before);
    assert!(site.fetched().is_empty());
}

#[tokio::test]
async fn test_fetch_failure_leaves_block_as_is() {
    let site = StaticSite::default();
    let page = ZiPageContext::new("https://site.example/").unwrap();
    let mut block = block_with_link("/missing.json", "https://site.example/missing.json");
    let before = block.clone();

    let err = ZiEntryPoint::new()
        .decorate(&mut block, &page, &site)
        .await
        .unwrap_err();

    assert_eq!(err, ZiError::http(404, "not found"));
    assert_eq!(block, before);
}

#[tokio::test]
async fn test_malformed_document_is_a_schema_error() {
    let site = StaticSite::serving("https://site.example/f.json", json!({"data": 3}));
    let page = ZiPageContext::new("https://site.example/").unwrap();
    let mut block = block_with_link("/f.json", "https://site.example/f.json");

    let err = ZiEntryPoint::new()
        .decorate(&mut block, &page, &site)
        .await
        .unwrap_err();
    assert!(matches!(err, ZiError::Schema { .. }));
}

/// A configured suffix changes both which links are picked up and what is
/// cut from the endpoint.
#[tokio::test]
async fn test_configured_schema_suffix() {
    let config = ZiFormConfigBuilder::from_json(&json!({"schema_suffix": ".form.json"}));
    let site = StaticSite::serving("https://site.example/contact.form.json", contact_schema());
    let page = ZiPageContext::new("https://site.example/").unwrap();
    let mut block = ZiBlock::new(vec![
        ZiBlockNode::Link(ZiLink {
            text: "/data.json".into(),
            href: "https://site.example/data.json".into(),
        }),
        ZiBlockNode::Link(ZiLink {
            text: "/contact.form.json".into(),
            href: "https://site.example/contact.form.json".into(),
        }),
    ]);

    let decorated = ZiEntryPoint::from_config(&config)
        .decorate(&mut block, &page, &site)
        .await
        .unwrap();

    assert!(decorated);
    assert!(matches!(block.nodes[0], ZiBlockNode::Link(_)));
    assert_eq!(block.form().unwrap().action(), "/contact");
}
