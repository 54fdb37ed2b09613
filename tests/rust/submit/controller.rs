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

//! # ZiForm Tests - Submission Controller
//!
//! Drives the submit flow against an in-memory transport that records every
//! request and answers with a canned status.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test submit
//! ```

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use ziform::{
    Result, ZiError, ZiFormCompiler, ZiFormDocument, ZiRenderedForm, ZiResponse,
    ZiSubmissionController, ZiSubmitOutcome, ZiSubmitState, ZiTransport,
};

struct RecordingTransport {
    status: Mutex<u16>,
    posts: Mutex<Vec<(String, Value)>>,
}

impl RecordingTransport {
    fn answering(status: u16) -> Self {
        Self {
            status: Mutex::new(status),
            posts: Mutex::new(Vec::new()),
        }
    }

    fn set_status(&self, status: u16) {
        *self.status.lock().unwrap() = status;
    }

    fn posts(&self) -> Vec<(String, Value)> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ZiTransport for RecordingTransport {
    async fn get_json(&self, url: &str) -> Result<Value> {
        Err(ZiError::Transport(format!("unexpected fetch of {}", url)))
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<ZiResponse> {
        self.posts
            .lock()
            .unwrap()
            .push((url.to_string(), body.clone()));
        Ok(ZiResponse {
            status: *self.status.lock().unwrap(),
            body: "ok".to_string(),
        })
    }
}

fn contact_form() -> ZiRenderedForm {
    let document = ZiFormDocument::from_value(json!({"data": [
        {"id": "name", "inputType": "text", "required": "x"},
        {"id": "go", "inputType": "submit", "label": "Go"}
    ]}))
    .unwrap();
    ZiFormCompiler::new().compile(&document, "/f.json")
}

fn go_button_disabled(form: &ZiRenderedForm) -> bool {
    form.wrapper("form-go-wrapper").unwrap().children[0]
        .as_button()
        .unwrap()
        .disabled
}

/// Empty required field blocks the click; filling it sends
/// `POST /f {"data":{"name":"Ann"}}`.
#[tokio::test]
async fn test_end_to_end_contact_form() {
    let transport = RecordingTransport::answering(200);
    let controller = ZiSubmissionController::new(&transport);
    let mut form = contact_form();
    assert_eq!(form.action(), "/f");

    let outcome = controller.click(&mut form, "form-go-wrapper").await.unwrap();
    assert_eq!(
        outcome,
        ZiSubmitOutcome::Blocked {
            invalid: vec!["name".to_string()]
        }
    );
    assert!(transport.posts().is_empty());
    assert!(!go_button_disabled(&form));
    assert_eq!(form.state(), ZiSubmitState::Idle);

    form.set_value("name", "Ann");
    let outcome = controller.click(&mut form, "form-go-wrapper").await.unwrap();

    let posts = transport.posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].0, "/f");
    assert_eq!(posts[0].1.to_string(), r#"{"data":{"name":"Ann"}}"#);

    match outcome {
        ZiSubmitOutcome::Submitted { payload, redirect } => {
            assert_eq!(payload["name"], "Ann");
            assert!(redirect.is_none());
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(go_button_disabled(&form));
    assert_eq!(form.state(), ZiSubmitState::Done);
}

#[tokio::test]
async fn test_redirect_is_reported_after_submit() {
    let transport = RecordingTransport::answering(201);
    let controller = ZiSubmissionController::new(&transport);
    let document = ZiFormDocument::from_value(json!({"data": [
        {"id": "mail"},
        {"inputType": "submit", "label": "Send", "redirect": "/thanks"}
    ]}))
    .unwrap();
    let mut form = ZiFormCompiler::new().compile(&document, "https://site.example/forms/news.json");

    let outcome = controller.click_default(&mut form).await.unwrap();
    assert_eq!(
        outcome,
        ZiSubmitOutcome::Submitted {
            payload: [("mail".to_string(), String::new())].into_iter().collect(),
            redirect: Some("/thanks".to_string()),
        }
    );
    assert_eq!(transport.posts()[0].0, "https://site.example/forms/news");
}

/// A completed form refuses to send again, and a disabled button ignores
/// clicks.
#[tokio::test]
async fn test_resubmission_is_rejected() {
    let transport = RecordingTransport::answering(200);
    let controller = ZiSubmissionController::new(&transport);
    let mut form = contact_form();
    form.set_value("name", "Ann");

    controller.submit(&mut form).await.unwrap();
    let err = controller.submit(&mut form).await.unwrap_err();
    assert!(matches!(err, ZiError::Submission { .. }));
    assert_eq!(transport.posts().len(), 1);

    let mut clicked = contact_form();
    clicked.set_value("name", "Ann");
    controller.click(&mut clicked, "form-go-wrapper").await.unwrap();
    let again = controller.click(&mut clicked, "form-go-wrapper").await.unwrap();
    assert_eq!(again, ZiSubmitOutcome::Ignored);
    assert_eq!(transport.posts().len(), 2);
}

/// Non-success statuses surface as `Http` errors; the button comes back so
/// the user can retry, and a retry from `Failed` goes through.
#[tokio::test]
async fn test_http_failure_is_surfaced_and_retryable() {
    let transport = RecordingTransport::answering(503);
    let controller = ZiSubmissionController::new(&transport);
    let mut form = contact_form();
    form.set_value("name", "Ann");

    let err = controller.click(&mut form, "form-go-wrapper").await.unwrap_err();
    assert_eq!(err, ZiError::http(503, "ok"));
    assert_eq!(form.state(), ZiSubmitState::Failed);
    assert!(!go_button_disabled(&form));

    transport.set_status(200);
    let outcome = controller.click(&mut form, "form-go-wrapper").await.unwrap();
    assert!(matches!(outcome, ZiSubmitOutcome::Submitted { .. }));
    assert_eq!(form.state(), ZiSubmitState::Done);
    assert_eq!(transport.posts().len(), 2);
}

#[tokio::test]
async fn test_unknown_button_is_ignored() {
    let transport = RecordingTransport::answering(200);
    let controller = ZiSubmissionController::new(&transport);
    let mut form = contact_form();
    form.set_value("name", "Ann");

    let outcome = controller.click(&mut form, "form-name-wrapper").await.unwrap();
    assert_eq!(outcome, ZiSubmitOutcome::Ignored);
    assert!(transport.posts().is_empty());
}

/// Required checkboxes must be ticked and unchecked ones stay out of the
/// submitted payload.
#[tokio::test]
async fn test_checkbox_payload_on_submit() {
    let transport = RecordingTransport::answering(200);
    let controller = ZiSubmissionController::new(&transport);
    let document = ZiFormDocument::from_value(json!({"data": [
        {"id": "terms", "inputType": "checkbox", "required": "true"},
        {"id": "news", "inputType": "checkbox"}
    ]}))
    .unwrap();
    let mut form = ZiFormCompiler::new().compile(&document, "/signup.json");

    let blocked = controller.click_default(&mut form).await.unwrap();
    assert_eq!(
        blocked,
        ZiSubmitOutcome::Blocked {
            invalid: vec!["terms".to_string()]
        }
    );

    form.set_checked("terms", true);
    controller.click_default(&mut form).await.unwrap();
    assert_eq!(
        transport.posts()[0],
        ("/signup".to_string(), json!({"data": {"terms": "on"}}))
    );
}

/// An id-less heading and an id-less submit share the field id
/// `form--wrapper`; the click still reaches the button.
#[tokio::test]
async fn test_idless_heading_does_not_shadow_submit() {
    let transport = RecordingTransport::answering(200);
    let controller = ZiSubmissionController::new(&transport);
    let document = ZiFormDocument::from_value(json!({"data": [
        {"inputType": "heading", "label": "Contact us"},
        {"id": "mail"},
        {"inputType": "submit", "label": "Send"}
    ]}))
    .unwrap();
    let mut form = ZiFormCompiler::new().compile(&document, "/contact.json");
    assert_eq!(form.submit_field_id(), Some("form--wrapper"));

    let outcome = controller.click_default(&mut form).await.unwrap();
    assert!(matches!(outcome, ZiSubmitOutcome::Submitted { .. }));
    assert_eq!(transport.posts().len(), 1);
    assert_eq!(transport.posts()[0].0, "/contact");

    let button = form.tree().wrappers()[2].children[0].as_button().unwrap();
    assert!(button.disabled);
}

/// A field with id `submit` owns the wrapper `form-submit-wrapper` too; the
/// synthesized button after it must still be clickable.
#[tokio::test]
async fn test_field_named_submit_does_not_shadow_fallback_button() {
    let transport = RecordingTransport::answering(200);
    let controller = ZiSubmissionController::new(&transport);
    let document = ZiFormDocument::from_value(json!({"data": [
        {"id": "submit", "label": "Submission notes"}
    ]}))
    .unwrap();
    let mut form = ZiFormCompiler::new().compile(&document, "/notes.json");
    assert_eq!(form.tree().len(), 2);

    form.set_value("submit", "late");
    let outcome = controller
        .click(&mut form, ziform::FALLBACK_SUBMIT_FIELD_ID)
        .await
        .unwrap();
    assert!(matches!(outcome, ZiSubmitOutcome::Submitted { .. }));
    assert_eq!(
        transport.posts()[0],
        ("/notes".to_string(), json!({"data": {"submit": "late"}}))
    );
}
