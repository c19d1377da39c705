// File: src/resource.rs
// Purpose: Identity of controller types and their actions

use std::fmt;

/// A controller type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceClass {
    type_name: String,
    component: Option<String>,
    legacy: bool,
}

impl ResourceClass {
    /// `type_name` may be a full path (`app::ClientsController`); only the last
    /// segment is kept.
    pub fn new(type_name: impl AsRef<str>) -> Self {
        let type_name = type_name.as_ref();
        let simple = type_name.rsplit("::").next().unwrap_or(type_name);
        Self {
            type_name: simple.to_string(),
            component: None,
            legacy: false,
        }
    }

    /// Tag the type as part of the legacy component family
    pub fn legacy(mut self, legacy: bool) -> Self {
        self.legacy = legacy;
        self
    }

    /// Explicit component name, overriding the one derived from the type name
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn component(&self) -> Option<&str> {
        self.component.as_deref()
    }

    pub fn is_legacy(&self) -> bool {
        self.legacy
    }
}

/// An action method on a controller
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionMethod {
    name: String,
    logic: Option<String>,
}

impl ActionMethod {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logic: None,
        }
    }

    /// Action whose logic name differs from its method name
    pub fn named(name: impl Into<String>, logic: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logic: Some(logic.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn logic(&self) -> Option<&str> {
        self.logic.as_deref()
    }
}

/// A controller type together with one of its actions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceMethod {
    resource: ResourceClass,
    method: ActionMethod,
}

impl ResourceMethod {
    pub fn new(resource: ResourceClass, method: ActionMethod) -> Self {
        Self { resource, method }
    }

    /// Resource method for an action of controller `C`
    pub fn instance_for<C: crate::proxy::Controller>(method: ActionMethod) -> Self {
        Self::new(C::resource(), method)
    }

    pub fn resource(&self) -> &ResourceClass {
        &self.resource
    }

    pub fn method(&self) -> &ActionMethod {
        &self.method
    }
}

impl fmt::Display for ResourceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.resource.type_name, self.method.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name_keeps_last_segment() {
        let class = ResourceClass::new("app::controllers::ClientsController");
        assert_eq!(class.type_name(), "ClientsController");
        assert!(!class.is_legacy());
        assert_eq!(class.component(), None);
    }

    #[test]
    fn test_builder() {
        let class = ResourceClass::new("ClientsLogic")
            .legacy(true)
            .with_component("clients");
        assert!(class.is_legacy());
        assert_eq!(class.component(), Some("clients"));
    }

    #[test]
    fn test_display() {
        let method = ResourceMethod::new(
            ResourceClass::new("ClientsController"),
            ActionMethod::named("list_all", "list"),
        );
        assert_eq!(method.to_string(), "ClientsController::list_all");
        assert_eq!(method.method().logic(), Some("list"));
    }
}
