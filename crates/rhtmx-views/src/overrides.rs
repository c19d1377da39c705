// File: src/overrides.rs
// Purpose: Lookup of configured view paths by legacy key

use crate::config::ViewsConfig;
use std::collections::HashMap;

/// Read-only mapping from legacy key to view path template.
///
/// Shared by every request; implementations must tolerate concurrent reads.
pub trait OverrideLookup: Send + Sync {
    fn forward_for(&self, key: &str) -> Option<String>;
}

impl OverrideLookup for HashMap<String, String> {
    fn forward_for(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// The views mapping, fixed once loaded
#[derive(Debug, Clone, Default)]
pub struct ViewsMapping {
    entries: HashMap<String, String>,
}

impl ViewsMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn from_config(config: &ViewsConfig) -> Self {
        Self::from_entries(config.overrides.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl OverrideLookup for ViewsMapping {
    fn forward_for(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
