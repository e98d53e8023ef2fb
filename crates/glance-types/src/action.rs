//! Typed addressing values resolved by the host platform.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::instance::InstanceId;

/// Role an addressing value plays once the host resolves it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ActionRole {
    /// Opens the main browser application.
    Launch,
    /// Host pulls list rows for one instance through the companion service.
    ListAdapter,
    /// Template the host fills in when a list row is clicked.
    ItemClick,
}

/// Opaque addressing value `{role, instance}` constructed by the
/// coordinator and resolved by the host platform and companion service.
///
/// The coordinator never parses one of these back; it only builds them.
/// Instance-parameterised refs for different instances never compare
/// equal, so adapter references cannot collide across placed widgets.
///
/// # Example
///
/// ```
/// use glance_types::{ActionRef, InstanceId};
///
/// let adapter = ActionRef::list_adapter(InstanceId::new(5));
/// assert_ne!(adapter, ActionRef::list_adapter(InstanceId::new(7)));
/// assert_eq!(adapter.to_string(), "glance://widget/list-adapter?instance=5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionRef {
    role: ActionRole,
    instance: Option<InstanceId>,
}

impl ActionRef {
    /// Ref that opens the browser; shared by every instance.
    #[must_use]
    pub const fn launch() -> Self {
        Self {
            role: ActionRole::Launch,
            instance: None,
        }
    }

    /// Ref the host uses to pull list rows for `instance`.
    #[must_use]
    pub const fn list_adapter(instance: InstanceId) -> Self {
        Self {
            role: ActionRole::ListAdapter,
            instance: Some(instance),
        }
    }

    /// Click template routing row clicks from `instance` back to the
    /// companion service.
    #[must_use]
    pub const fn item_click(instance: InstanceId) -> Self {
        Self {
            role: ActionRole::ItemClick,
            instance: Some(instance),
        }
    }

    /// Role of this ref.
    #[must_use]
    pub const fn role(self) -> ActionRole {
        self.role
    }

    /// Instance the ref is parameterised by, if any.
    #[must_use]
    pub const fn instance(self) -> Option<InstanceId> {
        self.instance
    }
}

impl std::fmt::Display for ActionRef {
    /// Canonical URI form handed to the host, e.g.
    /// `glance://widget/list-adapter?instance=5`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "glance://widget/{}", self.role)?;
        if let Some(instance) = self.instance {
            write!(f, "?instance={instance}")?;
        }
        Ok(())
    }
}
