// File: src/naming.rs
// Purpose: Naming policy for legacy components and their logics

use crate::key::KEY_SEPARATOR;
use crate::resource::{ActionMethod, ResourceClass};

/// Decides which controllers use the legacy views mapping and how their
/// components and logics are named in its keys.
pub trait LegacyNaming: Send + Sync {
    fn is_legacy(&self, resource: &ResourceClass) -> bool;

    fn component_name(&self, resource: &ResourceClass) -> String;

    fn logic_name(&self, method: &ActionMethod) -> String;
}

/// Convention-based naming.
///
/// Legacy membership is the tag on [`ResourceClass`]. Unless given
/// explicitly, `ClientsController` and `ClientsLogic` are both named
/// `clients`, and a logic is named after its method.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionNaming;

impl LegacyNaming for ConventionNaming {
    fn is_legacy(&self, resource: &ResourceClass) -> bool {
        resource.is_legacy()
    }

    fn component_name(&self, resource: &ResourceClass) -> String {
        match resource.component() {
            Some(explicit) => {
                warn_on_separator("component", explicit);
                explicit.to_string()
            }
            None => default_component_name(resource),
        }
    }

    fn logic_name(&self, method: &ActionMethod) -> String {
        match method.logic() {
            Some(explicit) => {
                warn_on_separator("logic", explicit);
                explicit.to_string()
            }
            None => method.name().to_string(),
        }
    }
}

/// Component name derived from the type name alone
pub fn default_component_name(resource: &ResourceClass) -> String {
    let name = resource.type_name();
    let stem = ["Controller", "Logic"]
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix).filter(|s| !s.is_empty()))
        .unwrap_or(name);
    lowercase_first(stem)
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

// Keys are not escaped, so a separator inside a name makes them ambiguous.
fn warn_on_separator(kind: &str, name: &str) {
    if name.contains(KEY_SEPARATOR) {
        tracing::warn!(kind, name, "legacy name contains the key separator");
    }
}
