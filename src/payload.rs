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

//! # ZiForm Payload Module
//!
//! Reads the live state of a form tree into the flat id→value mapping that
//! rules are evaluated against and that gets submitted.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::ui::ZiFormTree;

/// Flat mapping from field id to its current string value.
pub type ZiPayload = BTreeMap<String, String>;

/// Request body wrapper: `{ "data": payload }`.
#[derive(Clone, Debug, Serialize)]
pub struct ZiEnvelope<'a> {
    pub data: &'a ZiPayload,
}

/// Builds the payload of `tree`.
///
/// Only wrappers of a data-carrying kind are read. Checkboxes contribute only
/// when checked. Every other control with a non-empty id contributes its
/// value, empty or not. A later control with a colliding id overwrites an
/// earlier one.
pub fn build_payload(tree: &ZiFormTree) -> ZiPayload {
    let mut payload = ZiPayload::new();
    let controls = tree
        .wrappers()
        .iter()
        .filter(|w| w.kind.carries_data())
        .flat_map(|w| w.controls());
    for control in controls {
        if control.id.is_empty() {
            continue;
        }
        if control.is_checkbox() && !control.is_checked() {
            continue;
        }
        payload.insert(control.id.clone(), control.value.clone());
    }
    payload
}
