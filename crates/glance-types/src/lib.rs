//! Shared vocabulary for the Glance home-screen bookmark widget.
//!
//! The host platform, the broadcast dispatcher, and the widget lifecycle
//! coordinator all speak in terms of the types defined here: opaque
//! per-instance [`InstanceId`]s assigned by the host, typed addressing
//! values ([`ActionRef`]) that the host resolves into click and adapter
//! targets, and the enumerated broadcast vocabulary ([`BroadcastAction`])
//! that names every lifecycle signal the widget reacts to.
//!
//! The crate is deliberately small and dependency-light so both sides of
//! the host boundary can depend on it without pulling in the coordinator.

mod action;
mod broadcast;
mod instance;

pub use self::action::{ActionRef, ActionRole};
pub use self::broadcast::{Broadcast, BroadcastAction, BroadcastActionParseError};
pub use self::instance::InstanceId;
