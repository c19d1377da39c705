// File: src/method_info.rs
// Purpose: Per-request record of the action that just ran

use crate::resource::ResourceMethod;

/// Result name used when the action does not set one
pub const DEFAULT_RESULT: &str = "ok";

/// The executed action and the result name it produced
#[derive(Debug, Clone)]
pub struct MethodInfo {
    resource_method: ResourceMethod,
    result: String,
}

impl MethodInfo {
    pub fn new(resource_method: ResourceMethod) -> Self {
        Self {
            resource_method,
            result: DEFAULT_RESULT.to_string(),
        }
    }

    /// Set the result name, e.g. `"success"` or `"invalid"`
    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = result.into();
        self
    }

    pub fn resource_method(&self) -> &ResourceMethod {
        &self.resource_method
    }

    pub fn result(&self) -> &str {
        &self.result
    }
}
