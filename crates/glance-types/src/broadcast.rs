//! Lifecycle broadcast vocabulary shared by dispatcher and coordinator.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::instance::InstanceId;

/// Enumerated action names for every lifecycle signal the widget handles.
///
/// Defined once so the host-side dispatcher and the coordinator can never
/// drift apart on the wire strings; there is no runtime mutability.
///
/// # Example
///
/// ```
/// use glance_types::BroadcastAction;
///
/// let action: BroadcastAction = "glance.widget.update".parse().expect("known action");
/// assert_eq!(action, BroadcastAction::Update);
/// assert_eq!(action.to_string(), "glance.widget.update");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
pub enum BroadcastAction {
    /// Normal host update cycle for a given set of instances.
    #[serde(rename = "glance.widget.update")]
    #[strum(serialize = "glance.widget.update")]
    Update,
    /// First instance of the widget was placed.
    #[serde(rename = "glance.widget.enabled")]
    #[strum(serialize = "glance.widget.enabled")]
    Enabled,
    /// Last instance of the widget was removed.
    #[serde(rename = "glance.widget.disabled")]
    #[strum(serialize = "glance.widget.disabled")]
    Disabled,
    /// One or more instances were removed while others may remain.
    #[serde(rename = "glance.widget.deleted")]
    #[strum(serialize = "glance.widget.deleted")]
    Deleted,
    /// Bookmark data changed; refresh every placed instance. This signal
    /// carries no instance metadata, so the host's default dispatch path
    /// cannot deliver it.
    #[serde(rename = "glance.bookmark.refresh")]
    #[strum(serialize = "glance.bookmark.refresh")]
    BookmarkRefresh,
}

/// Errors encountered while parsing a [`BroadcastAction`] from text.
pub type BroadcastActionParseError = strum::ParseError;

/// Raw lifecycle broadcast as delivered by the host.
///
/// The action is an arbitrary string at this point; only the dispatcher
/// decides whether it names a [`BroadcastAction`]. Instance-id metadata is
/// optional because some senders (notably the bookmark refresh signal)
/// omit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Broadcast {
    action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instance_ids: Option<Vec<InstanceId>>,
}

impl Broadcast {
    /// Creates a broadcast without instance metadata.
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            instance_ids: None,
        }
    }

    /// Creates a broadcast carrying the instances it concerns.
    #[must_use]
    pub fn with_instances(action: impl Into<String>, instance_ids: Vec<InstanceId>) -> Self {
        Self {
            action: action.into(),
            instance_ids: Some(instance_ids),
        }
    }

    /// Raw action string as sent by the host.
    #[must_use]
    pub const fn action(&self) -> &str {
        self.action.as_str()
    }

    /// Instance ids attached to the broadcast, when present.
    #[must_use]
    pub fn instance_ids(&self) -> Option<&[InstanceId]> {
        self.instance_ids.as_deref()
    }
}
