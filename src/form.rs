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

//! # ZiForm Rendered Form Module
//!
//! [`ZiRenderedForm`] is the owned result of compilation: the UI tree, the
//! rules bound to its wrappers, the submission endpoint and the submit state.
//!
//! Every edit operation fires the form-level change event, which re-runs the
//! rule engine over the whole payload. Edits that do not change anything do
//! not fire it.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::payload::{build_payload, ZiPayload};
use crate::rules::{apply_rules, ZiBoundRule};
use crate::ui::{ZiButton, ZiElement, ZiFieldWrapper, ZiFormTree};

/// Lifecycle of one form's submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZiSubmitState {
    #[default]
    Idle,
    Submitting,
    Done,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiRenderedForm {
    /// Path the payload is posted to, as recorded on the form element.
    pub(crate) action: String,
    /// Absolute schema location, when the compiler was given one.
    pub(crate) source: Option<Url>,
    pub(crate) tree: ZiFormTree,
    pub(crate) rules: Vec<ZiBoundRule>,
    pub(crate) warnings: Vec<String>,
    pub(crate) state: ZiSubmitState,
}

impl ZiRenderedForm {
    pub fn action(&self) -> &str {
        &self.action
    }

    /// The action resolved against the schema's origin when that is known,
    /// otherwise the bare action.
    pub fn endpoint(&self) -> String {
        match &self.source {
            Some(source) => source
                .join(&self.action)
                .map(|u| u.to_string())
                .unwrap_or_else(|_| self.action.clone()),
            None => self.action.clone(),
        }
    }

    pub fn tree(&self) -> &ZiFormTree {
        &self.tree
    }

    pub fn rules(&self) -> &[ZiBoundRule] {
        &self.rules
    }

    /// Rules dropped while compiling, one message each.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn state(&self) -> ZiSubmitState {
        self.state
    }

    pub fn wrapper(&self, field_id: &str) -> Option<&ZiFieldWrapper> {
        self.tree.wrapper(field_id)
    }

    pub fn is_visible(&self, field_id: &str) -> Option<bool> {
        self.tree.wrapper(field_id).map(|w| !w.hidden)
    }

    pub fn payload(&self) -> ZiPayload {
        build_payload(&self.tree)
    }

    pub fn check_validity(&self) -> bool {
        self.tree.check_validity()
    }

    /// Types `value` into the control with `id` (or picks the option with
    /// that value on a select). When ids collide the last control is edited,
    /// matching the payload. Returns whether the control changed.
    pub fn set_value(&mut self, id: &str, value: &str) -> bool {
        let changed = self
            .tree
            .control_mut(id)
            .map(|c| c.set_value(value))
            .unwrap_or(false);
        if changed {
            self.notify_change();
        }
        changed
    }

    pub fn set_checked(&mut self, id: &str, checked: bool) -> bool {
        let changed = self
            .tree
            .control_mut(id)
            .map(|c| c.set_checked(checked))
            .unwrap_or(false);
        if changed {
            self.notify_change();
        }
        changed
    }

    /// The form-level change event.
    pub fn notify_change(&mut self) {
        apply_rules(&mut self.tree, &self.rules);
    }

    /// Field id of the first wrapper holding a submit button.
    pub fn submit_field_id(&self) -> Option<&str> {
        self.tree
            .wrappers()
            .iter()
            .find(|w| w.has_submit())
            .map(|w| w.field_id.as_str())
    }

    pub(crate) fn submit_button_mut(&mut self, field_id: &str) -> Option<&mut ZiButton> {
        self.tree.submit_wrapper_mut(field_id).and_then(|w| {
            w.children.iter_mut().find_map(|e| match e {
                ZiElement::Button(b) if b.submit => Some(b),
                _ => None,
            })
        })
    }
}
