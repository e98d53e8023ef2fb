//! Opaque identifier for one placed widget instance.

use serde::{Deserialize, Serialize};

/// Identifier the host assigns when the user places a copy of the widget.
///
/// The value is opaque to the coordinator: it is only ever received from
/// the host, threaded through addressing values, and handed back. Ids are
/// orderable so instance sets iterate deterministically.
///
/// # Example
///
/// ```
/// use glance_types::InstanceId;
///
/// let id = InstanceId::new(5);
/// assert_eq!(id.get(), 5);
/// assert_eq!(id.to_string(), "5");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct InstanceId(u32);

impl InstanceId {
    /// Wraps a raw host-assigned id.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw id for handing back to the host.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
