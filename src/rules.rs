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

//! # ZiForm Rule Engine Module
//!
//! Visibility rules are embedded in field descriptors as JSON strings:
//!
//! ```json
//! {"type": "visible", "condition": {"key": "contact", "operator": "eq", "value": "phone"}}
//! ```
//!
//! [`parse_rule`] decodes one into a [`ZiVisibilityRule`]. Rule types and
//! operators this engine does not know decode into `Unsupported` variants
//! rather than failing, so documents written for newer engines still load.
//!
//! [`apply_rules`] re-evaluates every bound rule from scratch against the
//! full current payload. There is no diffing and no caching.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, ZiError};
use crate::payload::build_payload;
use crate::ui::ZiFormTree;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ZiCondition {
    /// `payload[key]` equals `value`. Only string values can ever match.
    Eq { key: String, value: Value },
    Unsupported { key: String, operator: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ZiVisibilityRule {
    Visible(ZiCondition),
    Unsupported { rule_type: String },
}

/// A rule bound to the wrapper it governs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiBoundRule {
    pub field_id: String,
    pub rule: ZiVisibilityRule,
}

#[derive(Deserialize)]
struct RawRule {
    #[serde(rename = "type")]
    rule_type: String,
    condition: RawCondition,
}

#[derive(Deserialize)]
struct RawCondition {
    key: String,
    operator: String,
    #[serde(default)]
    value: Value,
}

/// Decodes a serialized visibility rule.
pub fn parse_rule(source: &str) -> Result<ZiVisibilityRule> {
    let raw: RawRule = serde_json::from_str(source)
        .map_err(|e| ZiError::rule(format!("invalid rule {}: {}", source, e)))?;

    if raw.rule_type != "visible" {
        return Ok(ZiVisibilityRule::Unsupported {
            rule_type: raw.rule_type,
        });
    }

    let RawCondition {
        key,
        operator,
        value,
    } = raw.condition;
    let condition = match operator.as_str() {
        "eq" => ZiCondition::Eq { key, value },
        _ => ZiCondition::Unsupported { key, operator },
    };
    Ok(ZiVisibilityRule::Visible(condition))
}

/// Re-evaluates every rule against the current payload of `tree` and toggles
/// the governed wrappers.
pub fn apply_rules(tree: &mut ZiFormTree, rules: &[ZiBoundRule]) {
    if rules.is_empty() {
        return;
    }
    let payload = build_payload(tree);

    for bound in rules {
        let (key, expected) = match &bound.rule {
            ZiVisibilityRule::Visible(ZiCondition::Eq { key, value }) => (key, value),
            other => {
                log::debug!("skipping unsupported rule on {}: {:?}", bound.field_id, other);
                continue;
            }
        };

        let visible = match (payload.get(key), expected) {
            (Some(actual), Value::String(expected)) => actual == expected,
            _ => false,
        };

        match tree.wrapper_mut(&bound.field_id) {
            Some(wrapper) => wrapper.hidden = !visible,
            None => log::debug!("rule targets unknown wrapper {}", bound.field_id),
        }
    }
}
