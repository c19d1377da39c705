// File: src/log.rs
// Purpose: Diagnostic records emitted while resolving overridden views

use tracing::Level;

/// Receives the optional debug record of a resolved override.
///
/// Never influences how a view is resolved.
pub trait DiagnosticLog: Send + Sync {
    fn debug_enabled(&self) -> bool;

    fn override_resolved(&self, key: &str, template: &str, result: &str);
}

/// Writes through `tracing` at DEBUG level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl DiagnosticLog for TracingLog {
    fn debug_enabled(&self) -> bool {
        tracing::enabled!(Level::DEBUG)
    }

    fn override_resolved(&self, key: &str, template: &str, result: &str) {
        tracing::debug!(key, template, result, "overridden view found");
    }
}
