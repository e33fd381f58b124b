//! The boundary to the browser side.
//!
//! Everything a hook does to the page goes through [`Host`]: loading assets,
//! native dialogs, writing into a node, and driving the external typesetting
//! and highlighting engines. The rendering engine and the transport behind it
//! are the host's business.

use std::fmt;
use std::rc::Rc;

use crate::error::HostError;
use crate::{ScopeId, View, WidgetError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Script,
    Stylesheet,
}

/// A script or stylesheet that must be loaded before a scope's import hook runs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Asset {
    pub kind: AssetKind,
    pub path: String,
}

impl Asset {
    pub fn script(path: impl Into<String>) -> Self {
        Self {
            kind: AssetKind::Script,
            path: path.into(),
        }
    }

    pub fn stylesheet(path: impl Into<String>) -> Self {
        Self {
            kind: AssetKind::Stylesheet,
            path: path.into(),
        }
    }

    /// Infers the kind from the extension: `.css` is a stylesheet, anything else a script.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.ends_with(".css") {
            Self::stylesheet(path)
        } else {
            Self::script(path)
        }
    }
}

/// A named node inside one scope's rendered template.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub scope: ScopeId,
    pub name: String,
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.scope, self.name)
    }
}

pub trait Host {
    fn load_asset(&self, asset: &Asset) -> Result<(), HostError>;

    /// Native, blocking alert.
    fn alert(&self, text: &str) -> Result<(), HostError>;
    /// Native, blocking confirmation; returns the user's answer.
    fn confirm(&self, text: &str) -> Result<bool, HostError>;

    /// Replaces the text content of `node`.
    fn write_text(&self, node: &NodeRef, text: &str) -> Result<(), HostError>;
    /// Runs the syntax highlighter over `node`.
    fn highlight(&self, node: &NodeRef, language: &str) -> Result<(), HostError>;
    /// Prepares the typesetting engine on `container`.
    fn typeset_init(&self, container: &NodeRef) -> Result<(), HostError>;
    /// Typesets `source` into a container prepared by `typeset_init`.
    fn typeset_update(&self, container: &NodeRef, source: &str) -> Result<(), HostError>;
    /// Replaces the content of `node` with a freshly rendered fragment.
    fn rerender(&self, node: &NodeRef, view: &View) -> Result<(), HostError>;

    /// A hook failed; the host should show the scope as broken.
    fn report_failure(&self, scope: ScopeId, error: &WidgetError);
}

/// What an import or change hook receives: the host, narrowed to one scope.
#[derive(Clone)]
pub struct ViewHandle {
    scope: ScopeId,
    host: Rc<dyn Host>,
}

impl fmt::Debug for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewHandle")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl ViewHandle {
    pub fn new(scope: ScopeId, host: Rc<dyn Host>) -> Self {
        Self { scope, host }
    }

    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    pub fn host(&self) -> &dyn Host {
        &*self.host
    }

    pub fn node(&self, name: &str) -> NodeRef {
        NodeRef {
            scope: self.scope,
            name: name.to_string(),
        }
    }

    pub fn alert(&self, text: &str) -> Result<(), HostError> {
        self.host.alert(text)
    }

    pub fn confirm(&self, text: &str) -> Result<bool, HostError> {
        self.host.confirm(text)
    }

    pub fn write_text(&self, node: &str, text: &str) -> Result<(), HostError> {
        self.host.write_text(&self.node(node), text)
    }

    pub fn highlight(&self, node: &str, language: &str) -> Result<(), HostError> {
        self.host.highlight(&self.node(node), language)
    }

    pub fn typeset_init(&self, container: &str) -> Result<(), HostError> {
        self.host.typeset_init(&self.node(container))
    }

    pub fn typeset_update(&self, container: &str, source: &str) -> Result<(), HostError> {
        self.host.typeset_update(&self.node(container), source)
    }

    pub fn rerender(&self, node: &str, view: &View) -> Result<(), HostError> {
        self.host.rerender(&self.node(node), view)
    }
}
