//! Crate-level end-to-end tests and shared recording stubs.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

use glance_types::{Broadcast, BroadcastAction, InstanceId};

use crate::coordinator::WidgetCoordinator;
use crate::descriptor::{ViewDescriptor, ViewRegion};
use crate::dispatch::{BroadcastDispatcher, DispatchOutcome};
use crate::error::HostError;
use crate::host::{CompanionService, WidgetManager};

/// Widget manager stub that records every call and answers enumeration
/// from a fixed instance set.
#[derive(Default)]
pub(crate) struct RecordingManager {
    pub(crate) placed: BTreeSet<InstanceId>,
    pub(crate) notified: RefCell<Vec<(InstanceId, ViewRegion)>>,
    pub(crate) applied: RefCell<Vec<(InstanceId, ViewDescriptor)>>,
}

impl RecordingManager {
    pub(crate) fn with_placed(raw: &[u32]) -> Self {
        Self {
            placed: raw.iter().copied().map(InstanceId::new).collect(),
            ..Self::default()
        }
    }
}

impl WidgetManager for RecordingManager {
    fn instance_ids(&self) -> Result<BTreeSet<InstanceId>, HostError> {
        Ok(self.placed.clone())
    }

    fn notify_data_changed(
        &self,
        instance: InstanceId,
        region: ViewRegion,
    ) -> Result<(), HostError> {
        self.notified.borrow_mut().push((instance, region));
        Ok(())
    }

    fn apply_descriptor(
        &self,
        instance: InstanceId,
        descriptor: &ViewDescriptor,
    ) -> Result<(), HostError> {
        self.applied.borrow_mut().push((instance, descriptor.clone()));
        Ok(())
    }
}

/// Companion-service stub counting lifecycle commands.
#[derive(Default)]
pub(crate) struct RecordingService {
    pub(crate) starts: Cell<u32>,
    pub(crate) stops: Cell<u32>,
    pub(crate) released: RefCell<Vec<BTreeSet<InstanceId>>>,
}

impl CompanionService for RecordingService {
    fn start(&self) -> Result<(), HostError> {
        self.starts.set(self.starts.get() + 1);
        Ok(())
    }

    fn stop(&self) -> Result<(), HostError> {
        self.stops.set(self.stops.get() + 1);
        Ok(())
    }

    fn release_resources(&self, instances: &BTreeSet<InstanceId>) -> Result<(), HostError> {
        self.released.borrow_mut().push(instances.clone());
        Ok(())
    }
}

pub(crate) fn ids(raw: &[u32]) -> Vec<InstanceId> {
    raw.iter().copied().map(InstanceId::new).collect()
}

#[test]
fn full_widget_lifecycle_end_to_end() {
    let dispatcher = BroadcastDispatcher::new(WidgetCoordinator::new(
        RecordingManager::with_placed(&[5, 7]),
        RecordingService::default(),
    ));

    // Placement, a normal update cycle, a bookmark refresh, a partial
    // deletion, then removal of the last instance.
    let placed = Broadcast::new(BroadcastAction::Enabled.to_string());
    let update = Broadcast::with_instances(BroadcastAction::Update.to_string(), ids(&[5, 7]));
    let refresh = Broadcast::new(BroadcastAction::BookmarkRefresh.to_string());
    let deleted = Broadcast::with_instances(BroadcastAction::Deleted.to_string(), ids(&[5]));
    let disabled = Broadcast::new(BroadcastAction::Disabled.to_string());

    for broadcast in [&placed, &update, &refresh, &deleted, &disabled] {
        let outcome = dispatcher.receive(broadcast).expect("broadcast routes");
        assert!(matches!(outcome, DispatchOutcome::Handled(_)));
    }

    let manager = dispatcher.coordinator().manager();
    let service = dispatcher.coordinator().service();

    // One update cycle plus one refresh over the same two instances.
    assert_eq!(manager.notified.borrow().len(), 4);
    assert_eq!(manager.applied.borrow().len(), 4);
    assert!(
        manager
            .notified
            .borrow()
            .iter()
            .all(|(_, region)| *region == ViewRegion::BookmarkList)
    );
    assert_eq!(service.starts.get(), 1);
    assert_eq!(service.stops.get(), 1);
    assert_eq!(
        service.released.borrow().as_slice(),
        &[BTreeSet::from([InstanceId::new(5)])]
    );
}

#[test]
fn descriptors_reaching_the_host_are_instance_parameterised() {
    let dispatcher = BroadcastDispatcher::new(WidgetCoordinator::new(
        RecordingManager::default(),
        RecordingService::default(),
    ));

    let update = Broadcast::with_instances(BroadcastAction::Update.to_string(), ids(&[5, 7]));
    dispatcher.receive(&update).expect("update routes");

    let applied = dispatcher.coordinator().manager().applied.borrow();
    assert_eq!(applied.len(), 2);
    for (instance, descriptor) in applied.iter() {
        assert_eq!(descriptor.list_adapter().instance(), Some(*instance));
        assert_eq!(descriptor.item_template().instance(), Some(*instance));
    }
}
