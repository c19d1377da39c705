// File: src/request_context.rs
// Purpose: Request-scoped state visible to view expressions

use crate::value::Value;
use axum::http::{HeaderMap, Method};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Source of variables for `${...}` expressions
pub trait VariableContext {
    /// Resolve the first segment of an expression path
    fn variable(&self, name: &str) -> Option<Value>;
}

impl VariableContext for HashMap<String, Value> {
    fn variable(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// Request context handed to page results and view expressions
#[derive(Clone)]
pub struct RequestContext {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    pub method: Method,

    /// Request path
    pub path: String,

    /// Query parameters from URL (?key=value)
    pub query: QueryParams,

    /// Form data from POST/PUT requests
    pub form: FormData,

    /// Request headers
    pub headers: HeaderMap,

    /// Parsed cookies
    pub cookies: HashMap<String, String>,

    /// Values the controller action left for the view
    attributes: HashMap<String, Value>,
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish()
    }
}

impl RequestContext {
    pub fn new(
        method: Method,
        path: impl Into<String>,
        query: QueryParams,
        form: FormData,
        headers: HeaderMap,
    ) -> Self {
        let cookies = Self::parse_cookies(&headers);
        Self {
            method,
            path: path.into(),
            query,
            form,
            headers,
            cookies,
            attributes: HashMap::new(),
        }
    }

    /// Parse cookies from the Cookie header
    fn parse_cookies(headers: &HeaderMap) -> HashMap<String, String> {
        let mut cookies = HashMap::new();

        for header in headers.get_all("cookie") {
            let Ok(raw) = header.to_str() else {
                continue;
            };
            for cookie in raw.split(';') {
                if let Some((key, value)) = cookie.trim().split_once('=') {
                    cookies.insert(key.to_string(), value.to_string());
                }
            }
        }

        cookies
    }

    /// Bare GET request for `path`, mostly useful in tests
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(
            Method::GET,
            path,
            QueryParams::default(),
            FormData::new(),
            HeaderMap::new(),
        )
    }

    /// Builder-style variant of [`RequestContext::set_attribute`]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Get a header value
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// Get a cookie value
    pub fn get_cookie(&self, name: &str) -> Option<&String> {
        self.cookies.get(name)
    }
}

impl VariableContext for RequestContext {
    // Attributes, then query parameters, then form fields, then cookies.
    fn variable(&self, name: &str) -> Option<Value> {
        self.attributes
            .get(name)
            .cloned()
            .or_else(|| self.query.get(name).map(|v| Value::String(v.clone())))
            .or_else(|| self.form.get(name).map(|v| Value::String(v.clone())))
            .or_else(|| self.get_cookie(name).map(|v| Value::String(v.clone())))
    }
}

/// Query parameters from URL
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    params: HashMap<String, String>,
}

impl QueryParams {
    /// Create from HashMap
    pub fn new(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    /// Parse a raw query string such as `page=2&q=hello%20world`
    pub fn parse(raw: &str) -> Self {
        let params = raw
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .map(|(k, v)| (decode(k), decode(v)))
            .collect();
        Self { params }
    }

    /// Get a query parameter value
    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }

    /// Check if a parameter exists
    pub fn has(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.clone(),
    }
}

/// Form data from POST/PUT requests
#[derive(Debug, Clone, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    /// Create empty form data
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from form fields with automatic trimming
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k, v.trim().to_string()))
            .collect();
        Self { fields }
    }

    /// Create from a JSON object body
    pub fn from_json(json: JsonValue) -> Self {
        let fields = match json {
            JsonValue::Object(map) => map
                .into_iter()
                .map(|(key, value)| match value {
                    JsonValue::String(s) => (key, s.trim().to_string()),
                    other => (key, other.to_string()),
                })
                .collect(),
            _ => HashMap::new(),
        };
        Self { fields }
    }

    /// Get a form field value
    pub fn get(&self, key: &str) -> Option<&String> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
