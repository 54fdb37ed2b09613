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

//! # ZiForm Core Library
//!
//! ZiForm turns a declarative field-schema document into an interactive form,
//! keeps conditionally visible fields in sync while values change, and
//! submits the collected values to the form's endpoint.
//!
//! ## Module Overview
//!
//! - **schema**: Field descriptors and the form definition document
//! - **ui**: Abstract UI tree the compiled form lives in
//! - **renderer**: One descriptor to UI elements
//! - **compiler**: Document to rendered form, rule binding
//! - **payload**: Live form state to the submitted id→value mapping
//! - **rules**: Visibility rule decoding and evaluation
//! - **form**: The rendered form, its edit operations and submit state
//! - **submit**: Submission flow and submit button behaviour
//! - **entry**: Page block decoration
//! - **transport**: Network seam and the reqwest transport
//! - **markup**: HTML rendition of a rendered form
//! - **config**, **logging**, **errors**: Ambient plumbing
//!
//! ## Quick Start
//!
//! ```rust
//! use ziform::{ZiFormCompiler, ZiFormDocument};
//!
//! let document = ZiFormDocument::from_json_str(r#"{"data": [
//!     {"id": "contact", "inputType": "select", "enum": "email, phone"},
//!     {"id": "phone", "label": "Phone",
//!      "rules": "{\"type\":\"visible\",\"condition\":{\"key\":\"contact\",\"operator\":\"eq\",\"value\":\"phone\"}}"}
//! ]}"#)?;
//!
//! let mut form = ZiFormCompiler::new().compile(&document, "/forms/callback.json");
//! assert_eq!(form.action(), "/forms/callback");
//! assert_eq!(form.is_visible("form-phone-wrapper"), Some(false));
//!
//! form.set_value("contact", "phone");
//! assert_eq!(form.is_visible("form-phone-wrapper"), Some(true));
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return `Result<T, ZiError>`. Malformed rules never
//! fail a compile; they are logged and reported through
//! [`ZiRenderedForm::warnings`].

pub mod errors;
pub mod config;
pub mod logging;
pub mod schema;
pub mod ui;
pub mod renderer;
pub mod payload;
pub mod rules;
pub mod form;
pub mod compiler;
pub mod transport;
pub mod submit;
pub mod entry;
pub mod markup;

pub use errors::{Result, ZiError};
pub use config::{ZiFormConfig, ZiFormConfigBuilder, ZiHttpConfig, ZiLogConfig};
pub use logging::ZiLogger;
pub use schema::{ZiFieldDescriptor, ZiFieldKind, ZiFormDocument};
pub use ui::{
    ZiButton, ZiControl, ZiControlKind, ZiElement, ZiFieldWrapper, ZiFormTree, ZiHeading,
    ZiLabel, ZiSelectOption,
};
pub use payload::{build_payload, ZiEnvelope, ZiPayload};
pub use rules::{apply_rules, parse_rule, ZiBoundRule, ZiCondition, ZiVisibilityRule};
pub use form::{ZiRenderedForm, ZiSubmitState};
pub use compiler::{derive_action, ZiFormCompiler, FALLBACK_SUBMIT_FIELD_ID};
pub use transport::{ZiResponse, ZiTransport};
#[cfg(feature = "http")]
pub use transport::ZiHttpTransport;
pub use submit::{ZiSubmissionController, ZiSubmitOutcome};
pub use entry::{resolve_schema_link, ZiBlock, ZiBlockNode, ZiEntryPoint, ZiLink, ZiPageContext};
pub use markup::render_form;
