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

//! # ZiForm UI Tree Module
//!
//! An abstract model of the page surface a compiled form occupies. The tree
//! is an ordered list of field wrappers; each wrapper holds the label,
//! control, heading or button elements of one field.
//!
//! The model keeps exactly the state the engine reads or writes: control
//! values, checked flags, selected options, required markers, wrapper
//! visibility and button disabled state. Rendering it to a real surface is
//! the host's concern (see [`crate::markup`] for a plain HTML rendition).
//!
//! ## Validity
//!
//! [`ZiFormTree::check_validity`] mirrors native constraint validation for
//! the `required` attribute. Hidden wrappers are still validated, as a page
//! that hides fields through a CSS class would.
//!
//! A required select is stricter than a browser: while its disabled
//! placeholder option is selected it is invalid, even though that option
//! carries the placeholder text as a non-empty value.

use serde::{Deserialize, Serialize};

use crate::schema::ZiFieldKind;

/// Class added to wrappers that a visibility rule has hidden.
pub const HIDDEN_CLASS: &str = "hidden";

/// Generic marker class carried by every wrapper.
pub const WRAPPER_CLASS: &str = "field-wrapper";

/// Value a checkbox reports when it has no explicit value.
pub const CHECKBOX_DEFAULT_VALUE: &str = "on";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiSelectOption {
    pub label: String,
    pub value: String,
    pub disabled: bool,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ZiControlKind {
    /// Single-line input; `input_type` is the declared `type` attribute.
    Input { input_type: String },
    Checkbox { checked: bool },
    Select { options: Vec<ZiSelectOption> },
    TextArea,
}

/// An input-capable element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiControl {
    pub id: String,
    pub kind: ZiControlKind,
    pub value: String,
    pub placeholder: Option<String>,
    pub required: bool,
}

impl ZiControl {
    pub fn is_checkbox(&self) -> bool {
        matches!(self.kind, ZiControlKind::Checkbox { .. })
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.kind, ZiControlKind::Checkbox { checked: true })
    }

    /// Satisfies the `required` constraint, or carries none. A select
    /// showing its disabled placeholder does not.
    pub fn is_valid(&self) -> bool {
        if !self.required {
            return true;
        }
        match &self.kind {
            ZiControlKind::Checkbox { checked } => *checked,
            ZiControlKind::Select { options } => options
                .iter()
                .find(|o| o.selected)
                .map(|o| !o.disabled && !o.value.is_empty())
                .unwrap_or(false),
            ZiControlKind::Input { .. } | ZiControlKind::TextArea => !self.value.is_empty(),
        }
    }

    /// Sets the current value. A select only accepts the value of one of its
    /// enabled options. Returns whether the control changed.
    pub fn set_value(&mut self, value: &str) -> bool {
        match &mut self.kind {
            ZiControlKind::Select { options } => {
                let Some(idx) = options.iter().position(|o| o.value == value && !o.disabled) else {
                    return false;
                };
                if options[idx].selected {
                    return false;
                }
                for (i, option) in options.iter_mut().enumerate() {
                    option.selected = i == idx;
                }
                self.value = value.to_string();
                true
            }
            _ => {
                if self.value == value {
                    return false;
                }
                self.value = value.to_string();
                true
            }
        }
    }

    /// Toggles a checkbox. No-op for other controls.
    pub fn set_checked(&mut self, checked: bool) -> bool {
        match &mut self.kind {
            ZiControlKind::Checkbox { checked: current } if *current != checked => {
                *current = checked;
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiLabel {
    /// Id of the control this label is bound to.
    pub target: String,
    pub text: String,
    pub required: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiHeading {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiButton {
    pub label: String,
    pub redirect: Option<String>,
    pub submit: bool,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ZiElement {
    Label(ZiLabel),
    Control(ZiControl),
    Heading(ZiHeading),
    Button(ZiButton),
}

impl ZiElement {
    pub fn as_control(&self) -> Option<&ZiControl> {
        match self {
            ZiElement::Control(control) => Some(control),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&ZiLabel> {
        match self {
            ZiElement::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_button(&self) -> Option<&ZiButton> {
        match self {
            ZiElement::Button(button) => Some(button),
            _ => None,
        }
    }
}

/// Container holding one field's elements; the unit visibility rules target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiFieldWrapper {
    pub field_id: String,
    pub kind: ZiFieldKind,
    pub hidden: bool,
    pub children: Vec<ZiElement>,
}

impl ZiFieldWrapper {
    #[allow(non_snake_case)]
    pub fn new(field_id: impl Into<String>, kind: ZiFieldKind) -> Self {
        Self {
            field_id: field_id.into(),
            kind,
            hidden: false,
            children: Vec::new(),
        }
    }

    pub fn append(&mut self, element: ZiElement) {
        self.children.push(element);
    }

    pub fn class_list(&self) -> Vec<String> {
        let mut classes: Vec<String> = self
            .field_id
            .split_whitespace()
            .map(str::to_string)
            .collect();
        classes.push(WRAPPER_CLASS.to_string());
        if self.hidden {
            classes.push(HIDDEN_CLASS.to_string());
        }
        classes
    }

    pub fn class_name(&self) -> String {
        self.class_list().join(" ")
    }

    pub fn controls(&self) -> impl Iterator<Item = &ZiControl> {
        self.children.iter().filter_map(ZiElement::as_control)
    }

    pub fn has_submit(&self) -> bool {
        self.children
            .iter()
            .filter_map(ZiElement::as_button)
            .any(|b| b.submit)
    }
}

/// Ordered wrappers of one form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZiFormTree {
    wrappers: Vec<ZiFieldWrapper>,
}

impl ZiFormTree {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, wrapper: ZiFieldWrapper) {
        self.wrappers.push(wrapper);
    }

    pub fn wrappers(&self) -> &[ZiFieldWrapper] {
        &self.wrappers
    }

    pub fn len(&self) -> usize {
        self.wrappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty()
    }

    /// First wrapper with the given synthetic field id.
    pub fn wrapper(&self, field_id: &str) -> Option<&ZiFieldWrapper> {
        self.wrappers.iter().find(|w| w.field_id == field_id)
    }

    pub fn wrapper_mut(&mut self, field_id: &str) -> Option<&mut ZiFieldWrapper> {
        self.wrappers.iter_mut().find(|w| w.field_id == field_id)
    }

    /// First wrapper with the given field id that holds a submit button.
    /// Id-less headings and buttons share `form--wrapper`, so a plain id
    /// lookup can land on a heading.
    pub fn submit_wrapper_mut(&mut self, field_id: &str) -> Option<&mut ZiFieldWrapper> {
        self.wrappers
            .iter_mut()
            .find(|w| w.field_id == field_id && w.has_submit())
    }

    /// Every control in document order.
    pub fn controls(&self) -> impl Iterator<Item = &ZiControl> {
        self.wrappers.iter().flat_map(|w| w.controls())
    }

    /// Last control carrying `id`, the one whose value the payload reports.
    pub fn control(&self, id: &str) -> Option<&ZiControl> {
        self.controls().filter(|c| c.id == id).last()
    }

    pub fn control_mut(&mut self, id: &str) -> Option<&mut ZiControl> {
        self.wrappers
            .iter_mut()
            .rev()
            .flat_map(|w| w.children.iter_mut().rev())
            .find_map(|e| match e {
                ZiElement::Control(c) if c.id == id => Some(c),
                _ => None,
            })
    }

    pub fn buttons(&self) -> impl Iterator<Item = &ZiButton> {
        self.wrappers
            .iter()
            .flat_map(|w| w.children.iter().filter_map(ZiElement::as_button))
    }

    /// All required constraints hold.
    pub fn check_validity(&self) -> bool {
        self.controls().all(ZiControl::is_valid)
    }

    /// Ids of controls failing their constraint, in document order.
    pub fn invalid_controls(&self) -> Vec<String> {
        self.controls()
            .filter(|c| !c.is_valid())
            .map(|c| c.id.clone())
            .collect()
    }
}
