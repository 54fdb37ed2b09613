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

//! # ZiForm Entry Point Module
//!
//! Decorates a page block: finds the link to a form document, resolves it,
//! fetches and compiles the document, and puts the compiled form where the
//! link was.
//!
//! ## Link Resolution
//!
//! The link's text decides how it is resolved:
//!
//! - `/forms/contact.json` is appended to the page origin
//! - `./contact.json` and `../contact.json` are resolved against the page's
//!   base URL
//! - anything else uses the link's own, already resolved, href

use serde::{Deserialize, Serialize};
use url::Url;

use crate::compiler::ZiFormCompiler;
use crate::config::ZiFormConfig;
use crate::errors::Result;
use crate::form::ZiRenderedForm;
use crate::schema::ZiFormDocument;
use crate::transport::ZiTransport;

/// Location of the page hosting a block.
#[derive(Clone, Debug, PartialEq)]
pub struct ZiPageContext {
    pub url: Url,
    /// Base URL for relative references; the page URL unless overridden.
    pub base_url: Url,
}

impl ZiPageContext {
    pub fn new(page_url: &str) -> Result<Self> {
        let url = Url::parse(page_url)?;
        Ok(Self {
            base_url: url.clone(),
            url,
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = Url::parse(base_url)?;
        Ok(self)
    }

    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiLink {
    pub text: String,
    /// The link target as the page already resolved it.
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ZiBlockNode {
    Text(String),
    Link(ZiLink),
    Form(Box<ZiRenderedForm>),
}

/// A page container holding a schema link before decoration and the
/// compiled form after.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZiBlock {
    pub nodes: Vec<ZiBlockNode>,
}

impl ZiBlock {
    #[allow(non_snake_case)]
    pub fn new(nodes: Vec<ZiBlockNode>) -> Self {
        Self { nodes }
    }

    pub fn form(&self) -> Option<&ZiRenderedForm> {
        self.nodes.iter().find_map(|n| match n {
            ZiBlockNode::Form(form) => Some(form.as_ref()),
            _ => None,
        })
    }

    pub fn form_mut(&mut self) -> Option<&mut ZiRenderedForm> {
        self.nodes.iter_mut().find_map(|n| match n {
            ZiBlockNode::Form(form) => Some(form.as_mut()),
            _ => None,
        })
    }
}

#[derive(Clone, Debug)]
pub struct ZiEntryPoint {
    compiler: ZiFormCompiler,
    schema_suffix: String,
}

impl Default for ZiEntryPoint {
    fn default() -> Self {
        Self::from_config(&ZiFormConfig::default())
    }
}

impl ZiEntryPoint {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ZiFormConfig) -> Self {
        Self {
            compiler: ZiFormCompiler::from_config(config),
            schema_suffix: config.schema_suffix.clone(),
        }
    }

    /// Index of the first link pointing at a form document.
    pub fn find_schema_link(&self, block: &ZiBlock) -> Option<usize> {
        block.nodes.iter().position(|n| match n {
            ZiBlockNode::Link(link) => link.href.ends_with(&self.schema_suffix),
            _ => false,
        })
    }

    /// Replaces the block's schema link with the compiled form. Returns
    /// `false` when the block has no such link.
    pub async fn decorate(
        &self,
        block: &mut ZiBlock,
        page: &ZiPageContext,
        transport: &dyn ZiTransport,
    ) -> Result<bool> {
        let Some(idx) = self.find_schema_link(block) else {
            return Ok(false);
        };
        let ZiBlockNode::Link(link) = &block.nodes[idx] else {
            return Ok(false);
        };

        let location = resolve_schema_link(link, page)?;
        log::debug!("loading form document {}", location);

        let document = ZiFormDocument::from_value(transport.get_json(location.as_str()).await?)?;
        let form = self.compiler.compile(&document, location.as_str());

        block.nodes[idx] = ZiBlockNode::Form(Box::new(form));
        Ok(true)
    }
}

/// Resolves a schema link to an absolute location.
pub fn resolve_schema_link(link: &ZiLink, page: &ZiPageContext) -> Result<Url> {
    let text = link.text.trim();
    if text.starts_with('/') {
        Ok(Url::parse(&format!("{}{}", page.origin(), text))?)
    } else if text.starts_with("./") || text.starts_with("../") {
        Ok(page.base_url.join(text)?)
    } else {
        Ok(Url::parse(&link.href)?)
    }
}
