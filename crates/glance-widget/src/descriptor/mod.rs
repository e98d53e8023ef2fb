//! Per-instance view descriptors pushed to the host renderer.

use glance_types::{ActionRef, InstanceId};
use serde::{Deserialize, Serialize};

/// Sub-views of the widget layout a notification or action can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewRegion {
    /// The shortcut button that opens the browser.
    AppShortcut,
    /// The scrolling bookmark thumbnail list.
    BookmarkList,
}

/// Value object describing what the host should render for one instance.
///
/// The click action is shared by every instance; the adapter reference and
/// item-click template are parameterised by the instance id so the host
/// never confuses the list data of two placed widgets.
///
/// # Example
///
/// ```
/// use glance_types::InstanceId;
/// use glance_widget::ViewDescriptor;
///
/// let descriptor = ViewDescriptor::for_instance(InstanceId::new(5));
/// assert_eq!(descriptor.list_adapter().instance(), Some(InstanceId::new(5)));
/// assert_eq!(descriptor.click_action().instance(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewDescriptor {
    click_action: ActionRef,
    list_adapter: ActionRef,
    item_template: ActionRef,
}

impl ViewDescriptor {
    /// Builds the descriptor for one placed instance.
    #[must_use]
    pub const fn for_instance(instance: InstanceId) -> Self {
        Self {
            click_action: ActionRef::launch(),
            list_adapter: ActionRef::list_adapter(instance),
            item_template: ActionRef::item_click(instance),
        }
    }

    /// Action fired when the shortcut button is clicked.
    #[must_use]
    pub const fn click_action(&self) -> &ActionRef {
        &self.click_action
    }

    /// Reference the host pulls list rows through.
    #[must_use]
    pub const fn list_adapter(&self) -> &ActionRef {
        &self.list_adapter
    }

    /// Template filled in per row when a list item is clicked.
    #[must_use]
    pub const fn item_template(&self) -> &ActionRef {
        &self.item_template
    }
}
