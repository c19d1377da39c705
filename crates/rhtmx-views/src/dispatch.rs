// File: src/dispatch.rs
// Purpose: Forward, include and redirect writes on the current response

use crate::error::DispatchError;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Mutex;

/// Header telling the view layer which template to render
pub const FORWARD_HEADER: &str = "x-forward-path";

/// Header telling the view layer which fragment to include
pub const INCLUDE_HEADER: &str = "x-include-path";

/// Performs the actual dispatch for a page result
pub trait Dispatcher: Send + Sync {
    /// Server-side forward to `path`
    fn forward(&self, path: &str) -> Result<(), DispatchError>;

    /// Server-side include of `path`
    fn include(&self, path: &str) -> Result<(), DispatchError>;

    /// Client redirect to `location`
    fn send_redirect(&self, location: &str) -> Result<(), DispatchError>;
}

/// What a request was dispatched to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    Forward(String),
    Include(String),
    Redirect(String),
}

impl Dispatched {
    fn header(&self) -> (HeaderName, &str) {
        match self {
            Dispatched::Forward(path) => (HeaderName::from_static(FORWARD_HEADER), path),
            Dispatched::Include(path) => (HeaderName::from_static(INCLUDE_HEADER), path),
            Dispatched::Redirect(location) => (header::LOCATION, location),
        }
    }
}

impl IntoResponse for Dispatched {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        let (name, target) = self.header();
        if let Ok(value) = HeaderValue::from_str(target) {
            if matches!(self, Dispatched::Redirect(_)) {
                headers.insert("hx-redirect", value.clone());
            }
            headers.insert(name, value);
        }

        let status = match self {
            Dispatched::Redirect(_) => StatusCode::FOUND,
            _ => StatusCode::OK,
        };
        (status, headers).into_response()
    }
}

/// Records the single dispatch of one request.
///
/// A second write is rejected with [`DispatchError::Committed`].
#[derive(Debug, Default)]
pub struct ResponseSlot {
    outcome: Mutex<Option<Dispatched>>,
}

impl ResponseSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded dispatch, if any
    pub fn outcome(&self) -> Option<Dispatched> {
        self.outcome.lock().ok().and_then(|slot| slot.clone())
    }

    pub fn is_committed(&self) -> bool {
        self.outcome().is_some()
    }

    fn commit(&self, dispatched: Dispatched) -> Result<(), DispatchError> {
        let (_, target) = dispatched.header();
        HeaderValue::from_str(target).map_err(|_| {
            DispatchError::Dispatch(format!("invalid dispatch target {:?}", target))
        })?;

        let mut slot = self
            .outcome
            .lock()
            .map_err(|_| DispatchError::Dispatch("response slot poisoned".to_string()))?;
        if slot.is_some() {
            return Err(DispatchError::Committed);
        }

        tracing::trace!(?dispatched, "Response committed");
        *slot = Some(dispatched);
        Ok(())
    }
}

impl Dispatcher for ResponseSlot {
    fn forward(&self, path: &str) -> Result<(), DispatchError> {
        if path.is_empty() {
            return Err(DispatchError::Dispatch("empty forward path".to_string()));
        }
        self.commit(Dispatched::Forward(path.to_string()))
    }

    fn include(&self, path: &str) -> Result<(), DispatchError> {
        self.commit(Dispatched::Include(path.to_string()))
    }

    fn send_redirect(&self, location: &str) -> Result<(), DispatchError> {
        self.commit(Dispatched::Redirect(location.to_string()))
    }
}

impl IntoResponse for ResponseSlot {
    fn into_response(self) -> Response {
        match self.outcome.into_inner().ok().flatten() {
            Some(dispatched) => dispatched.into_response(),
            None => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_single_outcome() {
        let slot = ResponseSlot::new();
        assert!(!slot.is_committed());
        slot.forward("/pages/clients/list.rhtmx").unwrap();
        assert_eq!(
            slot.outcome(),
            Some(Dispatched::Forward("/pages/clients/list.rhtmx".into()))
        );
    }

    #[test]
    fn test_second_write_is_rejected() {
        let slot = ResponseSlot::new();
        slot.send_redirect("/home").unwrap();
        assert!(matches!(slot.forward("/other"), Err(DispatchError::Committed)));
        assert_eq!(slot.outcome(), Some(Dispatched::Redirect("/home".into())));
    }

    #[test]
    fn test_invalid_target_is_rejected() {
        let slot = ResponseSlot::new();
        assert!(matches!(
            slot.send_redirect("/bad\nlocation"),
            Err(DispatchError::Dispatch(_))
        ));
        assert!(matches!(slot.forward(""), Err(DispatchError::Dispatch(_))));
        assert!(!slot.is_committed());
    }

    #[test]
    fn test_redirect_response() {
        let slot = ResponseSlot::new();
        slot.send_redirect("/dashboard").unwrap();
        let resp = slot.into_response();
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get("location").unwrap(), "/dashboard");
        assert!(resp.headers().contains_key("hx-redirect"));
    }

    #[test]
    fn test_forward_response() {
        let resp = Dispatched::Forward("/pages/a.rhtmx".into()).into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(FORWARD_HEADER).unwrap(), "/pages/a.rhtmx");
        assert!(!resp.headers().contains_key("location"));
    }

    #[test]
    fn test_include_response() {
        let resp = Dispatched::Include("/pages/a.rhtmx".into()).into_response();
        assert_eq!(resp.headers().get(INCLUDE_HEADER).unwrap(), "/pages/a.rhtmx");
    }

    #[test]
    fn test_empty_slot_response() {
        let resp = ResponseSlot::new().into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}
