//! Trait seams over the host widget manager and the companion service.
//!
//! The production implementations live with the platform bindings; the
//! coordinator only sees these traits. Test code implements them with
//! recording stubs or `mockall` doubles so lifecycle behaviour can be
//! verified without a real host.

use std::collections::BTreeSet;

use glance_types::InstanceId;

use crate::descriptor::{ViewDescriptor, ViewRegion};
use crate::error::HostError;

/// Host-side widget manager: enumerates placed instances and performs the
/// actual redraws.
pub trait WidgetManager {
    /// Returns the ids of every currently placed instance.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::ListInstances`] if the host cannot enumerate
    /// its instances.
    fn instance_ids(&self) -> Result<BTreeSet<InstanceId>, HostError>;

    /// Tells the host that the list data behind `region` changed for
    /// `instance`, forcing it to re-pull rows through the adapter
    /// reference instead of reusing a stale cached render.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::NotifyFailed`] if the host refuses the
    /// notification for this instance.
    fn notify_data_changed(
        &self,
        instance: InstanceId,
        region: ViewRegion,
    ) -> Result<(), HostError>;

    /// Pushes a descriptor to the host, which performs the redraw.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::ApplyFailed`] if the host rejects the
    /// descriptor for this instance.
    fn apply_descriptor(
        &self,
        instance: InstanceId,
        descriptor: &ViewDescriptor,
    ) -> Result<(), HostError>;
}

/// The background service that produces bookmark thumbnails and serves
/// list rows per instance. Start and stop are idempotent at the host
/// level: starting a running service or stopping a stopped one is a no-op
/// there.
pub trait CompanionService {
    /// Starts the service. Issued only when the first instance is placed.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Service`] if the host cannot start the
    /// service.
    fn start(&self) -> Result<(), HostError>;

    /// Stops the service. Issued only when the last instance is removed.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Service`] if the host cannot stop the
    /// service.
    fn stop(&self) -> Result<(), HostError>;

    /// Releases per-instance resources (cached adapters, thumbnails) for
    /// exactly `instances`. Must not stop the service: other instances
    /// may still be placed, and the disable signal fires independently.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Service`] if the service cannot release the
    /// resources.
    fn release_resources(&self, instances: &BTreeSet<InstanceId>) -> Result<(), HostError>;
}
