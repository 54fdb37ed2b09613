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

//! # ZiForm Schema Module
//!
//! Data structures for the form definition document: an ordered list of field
//! descriptors wrapped in a `{ "data": [...] }` envelope.
//!
//! ## Leniency
//!
//! Documents are usually exported from spreadsheets, so every string slot
//! also accepts numbers and booleans (stringified) and treats `null` as
//! absent. Unknown keys are ignored.
//!
//! ```json
//! {
//!   "data": [
//!     {"id": "name", "label": "Name", "required": "x"},
//!     {"id": "topic", "label": "Topic", "inputType": "select", "enum": "Sales, Support"},
//!     {"label": "Send", "inputType": "submit", "redirect": "/thanks"}
//!   ]
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::{Result, ZiError};

/// Closed set of field kinds a descriptor can render as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZiFieldKind {
    Text,
    Select,
    Checkbox,
    TextArea,
    Heading,
    Submit,
}

impl ZiFieldKind {
    /// Total mapping from the `inputType` string. Anything unrecognised is a
    /// plain text input.
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type {
            "select" => ZiFieldKind::Select,
            "checkbox" => ZiFieldKind::Checkbox,
            "text-area" => ZiFieldKind::TextArea,
            "heading" => ZiFieldKind::Heading,
            "submit" => ZiFieldKind::Submit,
            _ => ZiFieldKind::Text,
        }
    }

    /// Whether elements of this kind can ever contribute to a payload.
    pub fn carries_data(&self) -> bool {
        !matches!(self, ZiFieldKind::Heading | ZiFieldKind::Submit)
    }
}

/// One entry of the form definition document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZiFieldDescriptor {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub label: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub input_type: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub placeholder: Option<String>,

    /// Truthy marker, `"x"` or `"true"`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub required: Option<String>,

    /// Comma-separated option labels for selects.
    #[serde(default, rename = "enum", deserialize_with = "lenient_string")]
    pub options: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub view_type: Option<String>,

    /// Serialized visibility rule, decoded by the compiler.
    #[serde(default, deserialize_with = "lenient_string")]
    pub rules: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub redirect: Option<String>,
}

impl ZiFieldDescriptor {
    #[allow(non_snake_case)]
    pub fn new(id: impl Into<String>, input_type: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            input_type: Some(input_type.into()),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_required(mut self, marker: impl Into<String>) -> Self {
        self.required = Some(marker.into());
        self
    }

    pub fn with_options(mut self, options: impl Into<String>) -> Self {
        self.options = Some(options.into());
        self
    }

    pub fn with_view_type(mut self, view_type: impl Into<String>) -> Self {
        self.view_type = Some(view_type.into());
        self
    }

    pub fn with_rules(mut self, rules: impl Into<String>) -> Self {
        self.rules = Some(rules.into());
        self
    }

    pub fn with_redirect(mut self, redirect: impl Into<String>) -> Self {
        self.redirect = Some(redirect.into());
        self
    }

    /// The declared input type, defaulting to `"text"`.
    pub fn input_type(&self) -> &str {
        match self.input_type.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => "text",
        }
    }

    pub fn kind(&self) -> ZiFieldKind {
        ZiFieldKind::from_input_type(self.input_type())
    }

    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    /// Required for either truthy spelling.
    pub fn is_required(&self) -> bool {
        matches!(self.required.as_deref(), Some("x") | Some("true"))
    }

    /// Selects only honour the `"x"` spelling.
    pub fn is_required_strict(&self) -> bool {
        self.required.as_deref() == Some("x")
    }

    /// Trimmed option labels from the comma-separated `enum` string.
    pub fn option_labels(&self) -> Vec<String> {
        match self.options.as_deref() {
            Some(raw) => raw.split(',').map(|o| o.trim().to_string()).collect(),
            None => Vec::new(),
        }
    }

    /// Wrapper class qualifier: ` form-{viewType}` or empty.
    pub fn style_qualifier(&self) -> String {
        match self.view_type.as_deref() {
            Some(view) if !view.is_empty() => format!(" form-{}", view),
            _ => String::new(),
        }
    }

    /// Synthetic id addressing this field's wrapper.
    pub fn field_id(&self) -> String {
        format!("form-{}-wrapper{}", self.id(), self.style_qualifier())
    }
}

/// The fetched form definition document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZiFormDocument {
    #[serde(default)]
    pub data: Vec<ZiFieldDescriptor>,
}

impl ZiFormDocument {
    #[allow(non_snake_case)]
    pub fn new(data: Vec<ZiFieldDescriptor>) -> Self {
        Self { data }
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source)
            .map_err(|e| ZiError::schema(format!("invalid form document: {}", e)))
    }

    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| ZiError::schema(format!("invalid form document: {}", e)))
    }
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}
