//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of ZiForm.
//! The ZiForm project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! you may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # ZiForm Compiler Module
//!
//! Compiles a [`ZiFormDocument`] into a [`ZiRenderedForm`]:
//!
//! 1. The submission action is the schema location's path cut at the schema
//!    suffix (`/forms/contact.json` → `/forms/contact`).
//! 2. Each descriptor becomes one wrapper, in document order, addressed by
//!    its synthetic field id.
//! 3. Rule strings are decoded and bound to their wrapper. A rule that fails
//!    to decode is logged and dropped; the rest of the form still compiles.
//! 4. A form without any submit field gets a default submit button in a
//!    wrapper of its own.
//! 5. Rules run once before the form is handed back, so its initial
//!    visibility is already correct.

use url::Url;

use crate::config::{ZiFormConfig, DEFAULT_SCHEMA_SUFFIX, DEFAULT_SUBMIT_LABEL};
use crate::errors::Result;
use crate::form::{ZiRenderedForm, ZiSubmitState};
use crate::renderer::{
    create_button, create_heading, create_input, create_label, create_select, create_text_area,
};
use crate::rules::{apply_rules, parse_rule, ZiBoundRule};
use crate::schema::{ZiFieldDescriptor, ZiFieldKind, ZiFormDocument};
use crate::ui::{ZiFieldWrapper, ZiFormTree};

/// Field id of the wrapper holding a synthesized submit button.
pub const FALLBACK_SUBMIT_FIELD_ID: &str = "form-submit-wrapper";

#[derive(Clone, Debug)]
pub struct ZiFormCompiler {
    schema_suffix: String,
    fallback_submit_label: String,
}

impl Default for ZiFormCompiler {
    fn default() -> Self {
        Self {
            schema_suffix: DEFAULT_SCHEMA_SUFFIX.to_string(),
            fallback_submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
        }
    }
}

impl ZiFormCompiler {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ZiFormConfig) -> Self {
        Self {
            schema_suffix: config.schema_suffix.clone(),
            fallback_submit_label: config.fallback_submit_label.clone(),
        }
    }

    pub fn with_fallback_submit_label(mut self, label: impl Into<String>) -> Self {
        self.fallback_submit_label = label.into();
        self
    }

    /// Parses `source_text` as a form document and compiles it.
    pub fn compile_json(&self, source_text: &str, source_url: &str) -> Result<ZiRenderedForm> {
        let document = ZiFormDocument::from_json_str(source_text)?;
        Ok(self.compile(&document, source_url))
    }

    pub fn compile(&self, document: &ZiFormDocument, source_url: &str) -> ZiRenderedForm {
        let (action, source) = derive_action(source_url, &self.schema_suffix);
        let mut tree = ZiFormTree::new();
        let mut rules = Vec::new();
        let mut warnings = Vec::new();
        let mut has_submit = false;

        for fd in &document.data {
            let kind = fd.kind();
            let field_id = fd.field_id();
            has_submit |= kind == ZiFieldKind::Submit;

            tree.push(build_wrapper(fd, kind, &field_id));

            if let Some(rule_text) = fd.rules.as_deref() {
                match parse_rule(rule_text) {
                    Ok(rule) => rules.push(ZiBoundRule {
                        field_id: field_id.clone(),
                        rule,
                    }),
                    Err(e) => {
                        log::warn!("dropping rule on {}: {}", field_id, e);
                        warnings.push(format!("{}: {}", field_id, e));
                    }
                }
            }
        }

        if !has_submit {
            let mut wrapper = ZiFieldWrapper::new(FALLBACK_SUBMIT_FIELD_ID, ZiFieldKind::Submit);
            wrapper.append(create_button(
                &ZiFieldDescriptor::default().with_label(self.fallback_submit_label.clone()),
            ));
            tree.push(wrapper);
        }

        apply_rules(&mut tree, &rules);

        log::debug!(
            "compiled form for {} with {} wrappers and {} rules",
            action,
            tree.len(),
            rules.len()
        );

        ZiRenderedForm {
            action,
            source,
            tree,
            rules,
            warnings,
            state: ZiSubmitState::Idle,
        }
    }
}

fn build_wrapper(fd: &ZiFieldDescriptor, kind: ZiFieldKind, field_id: &str) -> ZiFieldWrapper {
    let mut wrapper = ZiFieldWrapper::new(field_id, kind);
    match kind {
        ZiFieldKind::Select => {
            wrapper.append(create_label(fd));
            wrapper.append(create_select(fd));
        }
        ZiFieldKind::Heading => wrapper.append(create_heading(fd)),
        ZiFieldKind::Checkbox => {
            wrapper.append(create_input(fd));
            wrapper.append(create_label(fd));
        }
        ZiFieldKind::TextArea => {
            wrapper.append(create_label(fd));
            wrapper.append(create_text_area(fd));
        }
        ZiFieldKind::Submit => wrapper.append(create_button(fd)),
        ZiFieldKind::Text => {
            wrapper.append(create_label(fd));
            wrapper.append(create_input(fd));
        }
    }
    wrapper
}

/// Splits a schema location into the form action and, when the location is
/// an absolute URL, the URL itself.
pub fn derive_action(source_url: &str, suffix: &str) -> (String, Option<Url>) {
    let (path, source) = match Url::parse(source_url) {
        Ok(url) if !url.cannot_be_a_base() => (url.path().to_string(), Some(url)),
        _ => {
            let end = source_url.find(&['?', '#'][..]).unwrap_or(source_url.len());
            (source_url[..end].to_string(), None)
        }
    };

    let action = match path.find(suffix) {
        Some(idx) if !suffix.is_empty() => path[..idx].to_string(),
        _ => path,
    };
    (action, source)
}
