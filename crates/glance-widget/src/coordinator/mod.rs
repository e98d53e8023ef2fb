//! Stateless lifecycle coordinator for the bookmark widget.
//!
//! The [`WidgetCoordinator`] owns the two host seams and exposes one
//! operation per lifecycle event. It keeps no per-instance state: every
//! operation is a pure function of the event payload, and any bookkeeping
//! lives in the companion service.

use std::collections::BTreeSet;

use glance_types::InstanceId;
use tracing::warn;

use crate::descriptor::{ViewDescriptor, ViewRegion};
use crate::error::HostError;
use crate::host::{CompanionService, WidgetManager};

/// Tracing target for coordinator operations.
pub(crate) const COORDINATOR_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::coordinator");

/// Routes lifecycle events to the companion service and the host
/// rendering layer.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
///
/// use glance_types::InstanceId;
/// use glance_widget::{
///     CompanionService, HostError, ViewDescriptor, ViewRegion, WidgetCoordinator,
///     WidgetManager,
/// };
///
/// struct NullManager;
///
/// impl WidgetManager for NullManager {
///     fn instance_ids(&self) -> Result<BTreeSet<InstanceId>, HostError> {
///         Ok(BTreeSet::new())
///     }
///     fn notify_data_changed(
///         &self,
///         _instance: InstanceId,
///         _region: ViewRegion,
///     ) -> Result<(), HostError> {
///         Ok(())
///     }
///     fn apply_descriptor(
///         &self,
///         _instance: InstanceId,
///         _descriptor: &ViewDescriptor,
///     ) -> Result<(), HostError> {
///         Ok(())
///     }
/// }
///
/// struct NullService;
///
/// impl CompanionService for NullService {
///     fn start(&self) -> Result<(), HostError> {
///         Ok(())
///     }
///     fn stop(&self) -> Result<(), HostError> {
///         Ok(())
///     }
///     fn release_resources(
///         &self,
///         _instances: &BTreeSet<InstanceId>,
///     ) -> Result<(), HostError> {
///         Ok(())
///     }
/// }
///
/// let coordinator = WidgetCoordinator::new(NullManager, NullService);
/// coordinator.on_enabled().expect("service starts");
/// coordinator.on_updated(&BTreeSet::from([InstanceId::new(5)]));
/// ```
#[derive(Debug)]
pub struct WidgetCoordinator<M, S> {
    manager: M,
    service: S,
}

impl<M, S> WidgetCoordinator<M, S> {
    /// Creates a coordinator over the given host seams.
    #[must_use]
    pub const fn new(manager: M, service: S) -> Self {
        Self { manager, service }
    }

    /// Returns a reference to the widget manager seam.
    #[must_use]
    pub const fn manager(&self) -> &M {
        &self.manager
    }

    /// Returns a reference to the companion-service seam.
    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }
}

impl<M: WidgetManager, S: CompanionService> WidgetCoordinator<M, S> {
    /// Handles placement of the first instance by starting the companion
    /// service.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Service`] if the host cannot start the
    /// service.
    pub fn on_enabled(&self) -> Result<(), HostError> {
        self.service.start()
    }

    /// Handles removal of the last instance by stopping the companion
    /// service. This is the sole stop trigger; deletions never stop the
    /// service.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Service`] if the host cannot stop the
    /// service.
    pub fn on_disabled(&self) -> Result<(), HostError> {
        self.service.stop()
    }

    /// Handles removal of one or more instances while others may remain.
    /// The companion service releases cached adapters and thumbnails for
    /// exactly `instances`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Service`] if the service cannot release the
    /// resources.
    pub fn on_deleted(&self, instances: &BTreeSet<InstanceId>) -> Result<(), HostError> {
        self.service.release_resources(instances)
    }

    /// Handles the host's normal update cycle for `instances`.
    ///
    /// A failure for one instance is logged and does not stop the
    /// remaining instances from being updated; the host's next broadcast
    /// is the retry channel.
    pub fn on_updated(&self, instances: &BTreeSet<InstanceId>) {
        for &instance in instances {
            if let Err(error) = self.update_instance(instance) {
                warn!(
                    target: COORDINATOR_TARGET,
                    instance = %instance,
                    error = %error,
                    "widget update failed, continuing with remaining instances"
                );
            }
        }
    }

    /// Handles the bookmark refresh signal by updating every instance
    /// currently placed. Equivalent to [`Self::on_updated`] over
    /// [`WidgetManager::instance_ids`] evaluated at call time.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::ListInstances`] if the host cannot enumerate
    /// its instances; per-instance update failures are logged, not
    /// returned.
    pub fn on_custom_refresh(&self) -> Result<(), HostError> {
        let instances = self.manager.instance_ids()?;
        self.on_updated(&instances);
        Ok(())
    }

    fn update_instance(&self, instance: InstanceId) -> Result<(), HostError> {
        let descriptor = ViewDescriptor::for_instance(instance);
        self.manager
            .notify_data_changed(instance, ViewRegion::BookmarkList)?;
        self.manager.apply_descriptor(instance, &descriptor)
    }
}
