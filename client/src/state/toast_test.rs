use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.error("Failed to fetch reports");
    let b = state.push(ToastLevel::Info, "Saved");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].level, ToastLevel::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.error("one");
    let b = state.error("two");
    state.dismiss(a);
    assert_eq!(state.items.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn oldest_toast_is_evicted_at_capacity() {
    let mut state = ToastState::default();
    for i in 0..=MAX_VISIBLE_TOASTS {
        state.error(format!("toast {i}"));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE_TOASTS);
    assert_eq!(state.items[0].message, "toast 1");
}

#[test]
fn level_maps_to_css_modifier() {
    assert_eq!(ToastLevel::Error.css_modifier(), "toast--error");
    assert_eq!(ToastLevel::Info.css_modifier(), "toast--info");
}
