use super::*;

#[test]
fn new_guard_is_mounted() {
    assert!(MountGuard::new().is_mounted());
}

#[test]
fn unmount_is_visible_through_clones() {
    let guard = MountGuard::new();
    let task_view = guard.clone();
    guard.unmount();
    assert!(!task_view.is_mounted());
}

#[test]
fn install_clears_flag_when_owner_is_cleaned_up() {
    let owner = leptos::prelude::Owner::new();
    let guard = owner.with(MountGuard::install);
    assert!(guard.is_mounted());
    owner.cleanup();
    assert!(!guard.is_mounted());
}
