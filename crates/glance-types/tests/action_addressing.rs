//! Behaviour of typed addressing values across widget instances.

use rstest::rstest;

use glance_types::{ActionRef, ActionRole, InstanceId};

#[test]
fn launch_ref_is_shared_across_instances() {
    let launch = ActionRef::launch();
    assert_eq!(launch.role(), ActionRole::Launch);
    assert_eq!(launch.instance(), None);
    assert_eq!(launch, ActionRef::launch());
}

#[rstest]
#[case(InstanceId::new(5), InstanceId::new(7))]
#[case(InstanceId::new(0), InstanceId::new(1))]
fn adapter_refs_never_collide_across_instances(
    #[case] first: InstanceId,
    #[case] second: InstanceId,
) {
    assert_ne!(
        ActionRef::list_adapter(first),
        ActionRef::list_adapter(second)
    );
    assert_ne!(
        ActionRef::list_adapter(first).to_string(),
        ActionRef::list_adapter(second).to_string()
    );
}

#[test]
fn item_click_ref_carries_its_instance() {
    let id = InstanceId::new(42);
    let template = ActionRef::item_click(id);
    assert_eq!(template.role(), ActionRole::ItemClick);
    assert_eq!(template.instance(), Some(id));
}

#[rstest]
#[case(ActionRef::launch(), "glance://widget/launch")]
#[case(
    ActionRef::list_adapter(InstanceId::new(5)),
    "glance://widget/list-adapter?instance=5"
)]
#[case(
    ActionRef::item_click(InstanceId::new(9)),
    "glance://widget/item-click?instance=9"
)]
fn canonical_uri_form(#[case] action_ref: ActionRef, #[case] expected: &str) {
    assert_eq!(action_ref.to_string(), expected);
}

#[test]
fn roles_parse_from_kebab_case() {
    let role: ActionRole = "list-adapter".parse().expect("known role");
    assert_eq!(role, ActionRole::ListAdapter);
}
