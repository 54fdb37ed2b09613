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

//! # ZiForm Markup Module
//!
//! HTML rendition of a compiled form, for server-side hosts and snapshots.
//! The output is a `<form data-action="...">` holding one `<div>` per
//! wrapper, classed with the wrapper's field id, `field-wrapper` and, when a
//! rule hides it, `hidden`. All text and attribute values are escaped.

use crate::form::ZiRenderedForm;
use crate::ui::{ZiControl, ZiControlKind, ZiElement, ZiFieldWrapper};

pub fn render_form(form: &ZiRenderedForm) -> String {
    let mut out = format!("<form data-action=\"{}\">", escape(form.action()));
    for wrapper in form.tree().wrappers() {
        render_wrapper(&mut out, wrapper);
    }
    out.push_str("</form>");
    out
}

fn render_wrapper(out: &mut String, wrapper: &ZiFieldWrapper) {
    out.push_str(&format!("<div class=\"{}\">", escape(&wrapper.class_name())));
    for element in &wrapper.children {
        match element {
            ZiElement::Label(label) => {
                let class = if label.required { " class=\"required\"" } else { "" };
                out.push_str(&format!(
                    "<label for=\"{}\"{}>{}</label>",
                    escape(&label.target),
                    class,
                    escape(&label.text)
                ));
            }
            ZiElement::Heading(heading) => {
                out.push_str(&format!("<h3>{}</h3>", escape(&heading.text)));
            }
            ZiElement::Button(button) => {
                let disabled = if button.disabled { " disabled" } else { "" };
                out.push_str(&format!(
                    "<button class=\"button\"{}>{}</button>",
                    disabled,
                    escape(&button.label)
                ));
            }
            ZiElement::Control(control) => render_control(out, control),
        }
    }
    out.push_str("</div>");
}

fn render_control(out: &mut String, control: &ZiControl) {
    let required = if control.required { " required=\"required\"" } else { "" };
    let placeholder = control
        .placeholder
        .as_deref()
        .map(|p| format!(" placeholder=\"{}\"", escape(p)))
        .unwrap_or_default();
    let id = escape(&control.id);

    let html = match &control.kind {
        ZiControlKind::Input { input_type } => format!(
            "<input type=\"{}\" id=\"{}\" value=\"{}\"{}{}>",
            escape(input_type),
            id,
            escape(&control.value),
            placeholder,
            required
        ),
        ZiControlKind::Checkbox { checked } => {
            let checked = if *checked { " checked" } else { "" };
            format!("<input type=\"checkbox\" id=\"{}\"{}{}>", id, checked, required)
        }
        ZiControlKind::TextArea => format!(
            "<textarea id=\"{}\"{}{}>{}</textarea>",
            id,
            placeholder,
            required,
            escape(&control.value)
        ),
        ZiControlKind::Select { options } => {
            let mut select = format!("<select id=\"{}\"{}>", id, required);
            for option in options {
                select.push_str(&format!(
                    "<option value=\"{}\"{}{}>{}</option>",
                    escape(&option.value),
                    if option.selected { " selected" } else { "" },
                    if option.disabled { " disabled" } else { "" },
                    escape(&option.label)
                ));
            }
            select.push_str("</select>");
            select
        }
    };
    out.push_str(&html);
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
