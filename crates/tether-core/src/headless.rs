//! A [`Host`] without a browser: records every call and answers dialogs from a script.
//!
//! Used by the test suites and by the gallery demo to drive widgets end to end.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::HostError;
use crate::host::{Asset, Host, NodeRef};
use crate::markup;
use crate::{ScopeId, View, WidgetError};

pub const HIGHLIGHT_ENGINE: &str = "highlight";
pub const TYPESET_ENGINE: &str = "katex";

#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    LoadAsset(Asset),
    Alert(String),
    Confirm(String),
    WriteText { node: NodeRef, text: String },
    Highlight { node: NodeRef, language: String },
    TypesetInit { node: NodeRef },
    TypesetUpdate { node: NodeRef, source: String },
    Rerender { node: NodeRef, html: String },
    Failure { scope: ScopeId, message: String },
}

#[derive(Debug, Default)]
pub struct HeadlessHost {
    calls: RefCell<Vec<HostCall>>,
    answers: RefCell<VecDeque<bool>>,
    default_answer: Cell<bool>,
    missing: RefCell<HashSet<String>>,
    failing_engines: RefCell<HashSet<String>>,
    failing_assets: RefCell<HashSet<String>>,
    content: RefCell<HashMap<NodeRef, String>>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the answer for the next confirmation dialog.
    pub fn answer_confirm(&self, answer: bool) {
        self.answers.borrow_mut().push_back(answer);
    }

    /// Answer used once the queue is empty (initially `false`).
    pub fn set_default_answer(&self, answer: bool) {
        self.default_answer.set(answer);
    }

    /// Makes every node with this name unresolvable.
    pub fn remove_node(&self, name: &str) {
        self.missing.borrow_mut().insert(name.to_string());
    }

    pub fn fail_engine(&self, engine: &str) {
        self.failing_engines.borrow_mut().insert(engine.to_string());
    }

    pub fn fail_asset(&self, path: &str) {
        self.failing_assets.borrow_mut().insert(path.to_string());
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    pub fn take_calls(&self) -> Vec<HostCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn alerts(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                HostCall::Alert(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                HostCall::Failure { message, .. } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    /// Current markup of a node written through `write_text` or `rerender`.
    pub fn content(&self, node: &NodeRef) -> Option<String> {
        self.content.borrow().get(node).cloned()
    }

    fn record(&self, call: HostCall) {
        log::trace!("headless: {call:?}");
        self.calls.borrow_mut().push(call);
    }

    fn resolve(&self, node: &NodeRef) -> Result<(), HostError> {
        if self.missing.borrow().contains(&node.name) {
            return Err(HostError::MissingNode {
                scope: node.scope,
                name: node.name.clone(),
            });
        }
        Ok(())
    }

    fn engine(&self, engine: &str, node: &NodeRef) -> Result<(), HostError> {
        self.resolve(node)?;
        if self.failing_engines.borrow().contains(engine) {
            return Err(HostError::Engine {
                engine: engine.to_string(),
                message: format!("could not process {node}"),
            });
        }
        Ok(())
    }
}

impl Host for HeadlessHost {
    fn load_asset(&self, asset: &Asset) -> Result<(), HostError> {
        if self.failing_assets.borrow().contains(&asset.path) {
            return Err(HostError::AssetLoad {
                path: asset.path.clone(),
                reason: "not found".to_string(),
            });
        }
        self.record(HostCall::LoadAsset(asset.clone()));
        Ok(())
    }

    fn alert(&self, text: &str) -> Result<(), HostError> {
        self.record(HostCall::Alert(text.to_string()));
        Ok(())
    }

    fn confirm(&self, text: &str) -> Result<bool, HostError> {
        self.record(HostCall::Confirm(text.to_string()));
        let answer = self.answers.borrow_mut().pop_front();
        Ok(answer.unwrap_or(self.default_answer.get()))
    }

    fn write_text(&self, node: &NodeRef, text: &str) -> Result<(), HostError> {
        self.resolve(node)?;
        self.content
            .borrow_mut()
            .insert(node.clone(), markup::escape(text));
        self.record(HostCall::WriteText {
            node: node.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn highlight(&self, node: &NodeRef, language: &str) -> Result<(), HostError> {
        self.engine(HIGHLIGHT_ENGINE, node)?;
        self.record(HostCall::Highlight {
            node: node.clone(),
            language: language.to_string(),
        });
        Ok(())
    }

    fn typeset_init(&self, container: &NodeRef) -> Result<(), HostError> {
        self.engine(TYPESET_ENGINE, container)?;
        self.record(HostCall::TypesetInit {
            node: container.clone(),
        });
        Ok(())
    }

    fn typeset_update(&self, container: &NodeRef, source: &str) -> Result<(), HostError> {
        self.engine(TYPESET_ENGINE, container)?;
        self.content
            .borrow_mut()
            .insert(container.clone(), markup::escape(source));
        self.record(HostCall::TypesetUpdate {
            node: container.clone(),
            source: source.to_string(),
        });
        Ok(())
    }

    fn rerender(&self, node: &NodeRef, view: &View) -> Result<(), HostError> {
        self.resolve(node)?;
        let html = markup::to_html(view);
        self.content.borrow_mut().insert(node.clone(), html.clone());
        self.record(HostCall::Rerender {
            node: node.clone(),
            html,
        });
        Ok(())
    }

    fn report_failure(&self, scope: ScopeId, error: &WidgetError) {
        self.record(HostCall::Failure {
            scope,
            message: error.to_string(),
        });
    }
}
