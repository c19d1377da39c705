// File: src/error.rs
// Purpose: Error types for view resolution

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// A view template whose `${...}` expressions cannot be evaluated
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("unterminated expression starting at byte {position}")]
    Unterminated { position: usize },

    #[error("empty expression at byte {position}")]
    Empty { position: usize },

    #[error("invalid segment '{segment}' in expression '{expression}'")]
    InvalidSegment { expression: String, segment: String },

    #[error("'{path}' is not an object in expression '{expression}'")]
    NotAnObject { expression: String, path: String },
}

/// Failures while forwarding, including or redirecting a request
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("unable to redirect while evaluating expression '{template}' (key {key})")]
    Expression {
        key: String,
        template: String,
        #[source]
        source: ExpressionError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("dispatch failed: {0}")]
    Dispatch(String),

    #[error("response already committed")]
    Committed,
}

/// The single error surfaced by page results.
///
/// Callers never need to tell an I/O failure from a dispatch failure; the
/// underlying cause stays reachable through [`ResultError::cause`].
#[derive(Debug, thiserror::Error)]
#[error("unable to resolve result view: {source}")]
pub struct ResultError {
    #[from]
    source: DispatchError,
}

impl ResultError {
    pub fn cause(&self) -> &DispatchError {
        &self.source
    }
}

impl IntoResponse for ResultError {
    fn into_response(self) -> Response {
        tracing::error!("View resolution failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
    }
}

/// Raised when a call on a controller proxy fails to resolve its view.
///
/// The action was named successfully; resolving it did not.
#[derive(Debug, thiserror::Error)]
#[error("proxied call to {method} failed")]
pub struct ProxyInvocationError {
    method: String,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl ProxyInvocationError {
    pub fn new(
        method: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            method: method.into(),
            source: source.into(),
        }
    }

    /// `Type::action` of the intercepted call
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The resolution error, when the call went through a page result
    pub fn result_error(&self) -> Option<&ResultError> {
        self.source.downcast_ref::<ResultError>()
    }
}
