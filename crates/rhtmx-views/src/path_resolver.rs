// File: src/path_resolver.rs
// Purpose: Convention-based default view paths

use crate::config::PathsConfig;
use crate::naming::default_component_name;
use crate::resource::ResourceMethod;

/// Maps an action to the view rendered when nothing overrides it
pub trait PathResolver: Send + Sync {
    fn path_for(&self, method: &ResourceMethod) -> String;
}

/// `{prefix}/{component}/{action}.{extension}`, e.g.
/// `ClientsController::list` -> `/pages/clients/list.rhtmx`
#[derive(Debug, Clone)]
pub struct ConventionPathResolver {
    prefix: String,
    extension: String,
}

impl ConventionPathResolver {
    pub fn new(prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        let prefix: String = prefix.into();
        let extension: String = extension.into();
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn from_config(config: &PathsConfig) -> Self {
        Self::new(config.prefix.clone(), config.extension.clone())
    }
}

impl Default for ConventionPathResolver {
    fn default() -> Self {
        Self::from_config(&PathsConfig::default())
    }
}

impl PathResolver for ConventionPathResolver {
    fn path_for(&self, method: &ResourceMethod) -> String {
        format!(
            "{}/{}/{}.{}",
            self.prefix,
            default_component_name(method.resource()),
            method.method().name(),
            self.extension
        )
    }
}
