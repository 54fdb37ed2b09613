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

//! # ZiForm Field Renderer Module
//!
//! Turns one [`ZiFieldDescriptor`] into UI elements. Every function here is
//! pure construction; wiring the elements into wrappers and forms is the
//! compiler's job.
//!
//! ## Required Markers
//!
//! Text inputs, text areas, checkboxes and labels treat both `"x"` and
//! `"true"` as required. Selects only honour `"x"`; forms in the wild depend
//! on that difference, so it is kept.

use crate::schema::ZiFieldDescriptor;
use crate::ui::{
    ZiButton, ZiControl, ZiControlKind, ZiElement, ZiHeading, ZiLabel, ZiSelectOption,
    CHECKBOX_DEFAULT_VALUE,
};

/// Choice control with an optional disabled, pre-selected placeholder.
pub fn create_select(fd: &ZiFieldDescriptor) -> ZiElement {
    let mut options = Vec::new();
    if let Some(placeholder) = fd.placeholder.as_deref().filter(|p| !p.is_empty()) {
        options.push(ZiSelectOption {
            label: placeholder.to_string(),
            value: placeholder.to_string(),
            disabled: true,
            selected: true,
        });
    }
    for label in fd.option_labels() {
        options.push(ZiSelectOption {
            value: label.clone(),
            label,
            disabled: false,
            selected: false,
        });
    }

    let value = options
        .iter()
        .find(|o| o.selected)
        .or_else(|| options.first())
        .map(|o| o.value.clone())
        .unwrap_or_default();

    ZiElement::Control(ZiControl {
        id: fd.id().to_string(),
        kind: ZiControlKind::Select { options },
        value,
        placeholder: fd.placeholder.clone(),
        required: fd.is_required_strict(),
    })
}

/// Single-line input. Also builds checkboxes, which carry no placeholder.
pub fn create_input(fd: &ZiFieldDescriptor) -> ZiElement {
    let input_type = fd.input_type();
    if input_type == "checkbox" {
        return ZiElement::Control(ZiControl {
            id: fd.id().to_string(),
            kind: ZiControlKind::Checkbox { checked: false },
            value: CHECKBOX_DEFAULT_VALUE.to_string(),
            placeholder: None,
            required: fd.is_required(),
        });
    }

    ZiElement::Control(ZiControl {
        id: fd.id().to_string(),
        kind: ZiControlKind::Input {
            input_type: input_type.to_string(),
        },
        value: String::new(),
        placeholder: Some(fd.placeholder.clone().unwrap_or_default()),
        required: fd.is_required(),
    })
}

pub fn create_text_area(fd: &ZiFieldDescriptor) -> ZiElement {
    ZiElement::Control(ZiControl {
        id: fd.id().to_string(),
        kind: ZiControlKind::TextArea,
        value: String::new(),
        placeholder: Some(fd.placeholder.clone().unwrap_or_default()),
        required: fd.is_required(),
    })
}

pub fn create_label(fd: &ZiFieldDescriptor) -> ZiElement {
    ZiElement::Label(ZiLabel {
        target: fd.id().to_string(),
        text: fd.label().to_string(),
        required: fd.is_required(),
    })
}

pub fn create_heading(fd: &ZiFieldDescriptor) -> ZiElement {
    ZiElement::Heading(ZiHeading {
        text: fd.label().to_string(),
    })
}

/// Submit control. The click flow lives in [`crate::submit`].
pub fn create_button(fd: &ZiFieldDescriptor) -> ZiElement {
    ZiElement::Button(ZiButton {
        label: fd.label().to_string(),
        redirect: fd.redirect.clone().filter(|r| !r.is_empty()),
        submit: true,
        disabled: false,
    })
}
