//! Domain errors raised by host and companion-service calls.
//!
//! All errors use `thiserror`-derived enums with structured context so the
//! dispatcher and the host bindings can inspect the failure
//! programmatically. The coordinator never retries: the host's own
//! broadcast cycle is the retry channel.

use glance_types::InstanceId;
use thiserror::Error;

/// Companion-service entry points that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOperation {
    /// Starting the service when the first instance is placed.
    Start,
    /// Stopping the service when the last instance is removed.
    Stop,
    /// Releasing per-instance resources after a deletion.
    ReleaseResources,
}

impl ServiceOperation {
    /// Returns the canonical lowercase name of the operation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::ReleaseResources => "release-resources",
        }
    }
}

impl std::fmt::Display for ServiceOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors arising from calls into the host widget manager or the
/// companion service.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host manager could not enumerate the placed instances.
    #[error("host manager could not enumerate widget instances: {message}")]
    ListInstances {
        /// Human-readable failure description from the host.
        message: String,
    },

    /// The host refused a data-changed notification for one instance.
    #[error("data-changed notification for instance {instance} refused: {message}")]
    NotifyFailed {
        /// Instance whose notification failed.
        instance: InstanceId,
        /// Human-readable failure description from the host.
        message: String,
    },

    /// The host rejected a view descriptor for one instance.
    #[error("descriptor for instance {instance} rejected by host: {message}")]
    ApplyFailed {
        /// Instance whose descriptor was rejected.
        instance: InstanceId,
        /// Human-readable failure description from the host.
        message: String,
    },

    /// A companion-service entry point failed.
    #[error("companion service {operation} failed: {message}")]
    Service {
        /// Entry point that failed.
        operation: ServiceOperation,
        /// Human-readable failure description from the service.
        message: String,
    },
}
