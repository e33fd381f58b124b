use std::panic::{AssertUnwindSafe, catch_unwind};

use thiserror::Error;

use crate::{ScopeId, View};

/// Failures raised by the host while executing a view hook.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("scope {scope}: no node named `{name}`")]
    MissingNode { scope: ScopeId, name: String },
    #[error("failed to load asset `{path}`: {reason}")]
    AssetLoad { path: String, reason: String },
    #[error("{engine} failed: {message}")]
    Engine { engine: String, message: String },
}

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error(transparent)]
    Host(#[from] HostError),
    #[error("no state entry named `{0}`")]
    Unbound(String),
    #[error("state entry `{name}` holds {found}, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("state entry `{0}` is a plain value, not an observable")]
    NotObservable(String),
    #[error("`{0}` is already bound in this scope")]
    AlreadyBound(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("scope {0} failed to attach earlier")]
    ScopeFailed(ScopeId),
    #[error("scope {0} was disposed")]
    ScopeDisposed(ScopeId),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = WidgetError> = std::result::Result<T, E>;

pub struct ErrorInfo {
    pub message: String,
    pub component: String,
}

/// Renders `content`, replacing it with `fallback` if it panics.
///
/// Hosts wrap each mounted widget in one of these so a broken layout shows
/// up as a failed region instead of taking the page down.
pub fn error_boundary(
    component: &str,
    fallback: impl Fn(ErrorInfo) -> View,
    content: impl FnOnce() -> View,
) -> View {
    match catch_unwind(AssertUnwindSafe(content)) {
        Ok(view) => view,
        Err(err) => {
            let message = if let Some(s) = err.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = err.downcast_ref::<&str>() {
                s.to_string()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("{component}: layout panicked: {message}");

            fallback(ErrorInfo {
                message,
                component: component.to_string(),
            })
        }
    }
}
