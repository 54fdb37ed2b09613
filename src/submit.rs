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

//! # ZiForm Submission Module
//!
//! Posts a form's payload to its endpoint as `{ "data": payload }`.
//!
//! ## Submit State
//!
//! Each form tracks a [`ZiSubmitState`]:
//!
//! ```text
//! Idle ──submit──▶ Submitting ──2xx──▶ Done
//!                      │
//!                      └──error/non-2xx──▶ Failed ──submit──▶ Submitting
//! ```
//!
//! A submit is refused while `Submitting` and after `Done`; nothing is sent
//! in either case.
//!
//! ## Click Flow
//!
//! [`ZiSubmissionController::click`] is what a submit button does: an invalid
//! form is left to the host's validation UI, a valid one has the button
//! disabled, gets submitted, and reports the button's redirect. A failed
//! submission enables the button again.

use crate::errors::{Result, ZiError};
use crate::form::{ZiRenderedForm, ZiSubmitState};
use crate::payload::{ZiEnvelope, ZiPayload};
use crate::transport::ZiTransport;

#[derive(Clone, Debug, PartialEq)]
pub enum ZiSubmitOutcome {
    /// Required fields are missing; no payload was built and nothing sent.
    Blocked { invalid: Vec<String> },
    /// The button was disabled or missing, so the click did nothing.
    Ignored,
    /// The payload was delivered. The host navigates to `redirect` if set.
    Submitted {
        payload: ZiPayload,
        redirect: Option<String>,
    },
}

pub struct ZiSubmissionController<'a> {
    transport: &'a dyn ZiTransport,
}

impl<'a> ZiSubmissionController<'a> {
    pub fn new(transport: &'a dyn ZiTransport) -> Self {
        Self { transport }
    }

    /// Builds the payload, posts it and returns what was sent.
    pub async fn submit(&self, form: &mut ZiRenderedForm) -> Result<ZiPayload> {
        match form.state {
            ZiSubmitState::Submitting => {
                return Err(ZiError::submission("a submission is already in progress"))
            }
            ZiSubmitState::Done => return Err(ZiError::submission("form was already submitted")),
            ZiSubmitState::Idle | ZiSubmitState::Failed => {}
        }
        form.state = ZiSubmitState::Submitting;

        let payload = form.payload();
        let endpoint = form.endpoint();
        let body = serde_json::to_value(ZiEnvelope { data: &payload })?;

        log::info!("submitting {} fields to {}", payload.len(), endpoint);

        match self.transport.post_json(&endpoint, &body).await {
            Ok(response) if response.is_success() => {
                form.state = ZiSubmitState::Done;
                Ok(payload)
            }
            Ok(response) => {
                form.state = ZiSubmitState::Failed;
                log::warn!("submission to {} answered {}", endpoint, response.status);
                Err(ZiError::http(response.status, response.body))
            }
            Err(e) => {
                form.state = ZiSubmitState::Failed;
                log::warn!("submission to {} failed: {}", endpoint, e);
                Err(e)
            }
        }
    }

    /// Clicks the submit button in the wrapper `field_id`.
    pub async fn click(
        &self,
        form: &mut ZiRenderedForm,
        field_id: &str,
    ) -> Result<ZiSubmitOutcome> {
        let redirect = match form.submit_button_mut(field_id) {
            Some(button) if !button.disabled => button.redirect.clone(),
            _ => return Ok(ZiSubmitOutcome::Ignored),
        };

        if !form.check_validity() {
            let invalid = form.tree.invalid_controls();
            log::debug!("submission blocked by required fields {:?}", invalid);
            return Ok(ZiSubmitOutcome::Blocked { invalid });
        }

        set_disabled(form, field_id, true);
        match self.submit(form).await {
            Ok(payload) => Ok(ZiSubmitOutcome::Submitted { payload, redirect }),
            Err(e) => {
                set_disabled(form, field_id, false);
                Err(e)
            }
        }
    }

    /// Clicks the first submit button of the form.
    pub async fn click_default(&self, form: &mut ZiRenderedForm) -> Result<ZiSubmitOutcome> {
        let Some(field_id) = form.submit_field_id().map(str::to_string) else {
            return Ok(ZiSubmitOutcome::Ignored);
        };
        self.click(form, &field_id).await
    }
}

fn set_disabled(form: &mut ZiRenderedForm, field_id: &str, disabled: bool) {
    if let Some(button) = form.submit_button_mut(field_id) {
        button.disabled = disabled;
    }
}
