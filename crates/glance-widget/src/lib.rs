//! Lifecycle coordination for the Glance home-screen bookmark widget.
//!
//! The crate is the glue layer between the host widget runtime and the
//! companion service that produces bookmark thumbnails. It owns no state
//! and no threads: the host delivers one broadcast at a time, the
//! [`BroadcastDispatcher`] resolves it to a lifecycle operation, and the
//! [`WidgetCoordinator`] translates that operation into companion-service
//! commands and per-instance [`ViewDescriptor`]s.
//!
//! # Architecture
//!
//! Everything interesting happens behind two trait seams. The
//! [`WidgetManager`] is the host's rendering surface: it enumerates placed
//! instances, accepts data-changed notifications, and performs redraws
//! from descriptors. The [`CompanionService`] is the background process
//! serving list rows; the coordinator only ever starts it, stops it, or
//! asks it to release per-instance resources. Production implementations
//! live with the platform bindings; tests substitute doubles.
//!
//! One routing rule is load-bearing: the bookmark refresh broadcast
//! carries no instance metadata, so it is intercepted ahead of the default
//! routing path, which discards metadata-less broadcasts. On refresh the
//! coordinator asks the manager for the full instance set itself.
//!
//! # Example
//!
//! ```rust,no_run
//! use glance_types::{Broadcast, BroadcastAction};
//! use glance_widget::{BroadcastDispatcher, WidgetCoordinator};
//! # use std::collections::BTreeSet;
//! # use glance_types::InstanceId;
//! # use glance_widget::{CompanionService, HostError, ViewDescriptor, ViewRegion, WidgetManager};
//! # struct HostManager;
//! # impl WidgetManager for HostManager {
//! #     fn instance_ids(&self) -> Result<BTreeSet<InstanceId>, HostError> { Ok(BTreeSet::new()) }
//! #     fn notify_data_changed(&self, _: InstanceId, _: ViewRegion) -> Result<(), HostError> { Ok(()) }
//! #     fn apply_descriptor(&self, _: InstanceId, _: &ViewDescriptor) -> Result<(), HostError> { Ok(()) }
//! # }
//! # struct ThumbnailService;
//! # impl CompanionService for ThumbnailService {
//! #     fn start(&self) -> Result<(), HostError> { Ok(()) }
//! #     fn stop(&self) -> Result<(), HostError> { Ok(()) }
//! #     fn release_resources(&self, _: &BTreeSet<InstanceId>) -> Result<(), HostError> { Ok(()) }
//! # }
//!
//! let dispatcher = BroadcastDispatcher::new(WidgetCoordinator::new(
//!     HostManager,
//!     ThumbnailService,
//! ));
//!
//! // The host delivers broadcasts; the dispatcher routes them.
//! let refresh = Broadcast::new(BroadcastAction::BookmarkRefresh.to_string());
//! let _outcome = dispatcher.receive(&refresh)?;
//! # Ok::<(), glance_widget::HostError>(())
//! ```

pub mod coordinator;
pub mod descriptor;
pub mod dispatch;
pub mod error;
pub mod host;

#[cfg(test)]
mod tests;

pub use self::coordinator::WidgetCoordinator;
pub use self::descriptor::{ViewDescriptor, ViewRegion};
pub use self::dispatch::{BroadcastDispatcher, DispatchOutcome};
pub use self::error::{HostError, ServiceOperation};
pub use self::host::{CompanionService, WidgetManager};
