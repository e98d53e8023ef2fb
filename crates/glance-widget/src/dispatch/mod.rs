//! Broadcast routing for widget lifecycle events.
//!
//! This module is the single entry point through which every host
//! broadcast reaches the coordinator. Each known [`BroadcastAction`] has
//! one branch; the bookmark refresh signal is intercepted before the
//! default routing path because it carries no instance metadata, which
//! that path would otherwise discard. Unrecognised actions are handed
//! back for the host's own default handling.

use std::collections::BTreeSet;

use glance_types::{Broadcast, BroadcastAction, InstanceId};
use tracing::debug;

use crate::coordinator::WidgetCoordinator;
use crate::error::HostError;
use crate::host::{CompanionService, WidgetManager};

/// Tracing target for dispatch operations.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// Result of routing one host broadcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The broadcast was routed to a coordinator operation.
    Handled(BroadcastAction),
    /// A known action arrived without the instance metadata it requires.
    Discarded(BroadcastAction),
    /// The action is not part of the widget vocabulary; the host's
    /// default handling applies.
    Forwarded,
}

/// Routes host broadcasts to the [`WidgetCoordinator`].
#[derive(Debug)]
pub struct BroadcastDispatcher<M, S> {
    coordinator: WidgetCoordinator<M, S>,
}

impl<M, S> BroadcastDispatcher<M, S> {
    /// Creates a dispatcher around the given coordinator.
    #[must_use]
    pub const fn new(coordinator: WidgetCoordinator<M, S>) -> Self {
        Self { coordinator }
    }

    /// Returns a reference to the wrapped coordinator.
    #[must_use]
    pub const fn coordinator(&self) -> &WidgetCoordinator<M, S> {
        &self.coordinator
    }
}

impl<M: WidgetManager, S: CompanionService> BroadcastDispatcher<M, S> {
    /// Routes one broadcast.
    ///
    /// # Errors
    ///
    /// Returns the [`HostError`] raised by the coordinator operation the
    /// broadcast routed to. Per-instance update failures never surface
    /// here; the coordinator logs them and continues.
    pub fn receive(&self, broadcast: &Broadcast) -> Result<DispatchOutcome, HostError> {
        let Ok(action) = broadcast.action().parse::<BroadcastAction>() else {
            debug!(
                target: DISPATCH_TARGET,
                action = broadcast.action(),
                "forwarding unrecognised broadcast to host default handling"
            );
            return Ok(DispatchOutcome::Forwarded);
        };

        match action {
            // Intercepted ahead of the metadata check: the refresh signal
            // never carries instance ids.
            BroadcastAction::BookmarkRefresh => {
                self.coordinator.on_custom_refresh()?;
                Ok(DispatchOutcome::Handled(action))
            }
            BroadcastAction::Update => self.route_with_instances(broadcast, action, |ids| {
                self.coordinator.on_updated(ids);
                Ok(())
            }),
            BroadcastAction::Deleted => self.route_with_instances(broadcast, action, |ids| {
                self.coordinator.on_deleted(ids)
            }),
            BroadcastAction::Enabled => {
                self.coordinator.on_enabled()?;
                Ok(DispatchOutcome::Handled(action))
            }
            BroadcastAction::Disabled => {
                self.coordinator.on_disabled()?;
                Ok(DispatchOutcome::Handled(action))
            }
        }
    }

    fn route_with_instances<F>(
        &self,
        broadcast: &Broadcast,
        action: BroadcastAction,
        handle: F,
    ) -> Result<DispatchOutcome, HostError>
    where
        F: FnOnce(&BTreeSet<InstanceId>) -> Result<(), HostError>,
    {
        let Some(raw_ids) = broadcast.instance_ids() else {
            debug!(
                target: DISPATCH_TARGET,
                action = %action,
                "discarding broadcast without instance metadata"
            );
            return Ok(DispatchOutcome::Discarded(action));
        };
        let instances: BTreeSet<InstanceId> = raw_ids.iter().copied().collect();
        handle(&instances)?;
        Ok(DispatchOutcome::Handled(action))
    }
}
