use super::*;

#[test]
fn push_assigns_increasing_ids_in_order() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "one");
    let second = state.push(ToastKind::Success, "two");
    assert!(second > first);
    assert_eq!(state.toasts.iter().map(|t| t.message.as_str()).collect::<Vec<_>>(), vec!["one", "two"]);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "one");
    let second = state.push(ToastKind::Info, "two");

    assert!(state.dismiss(first));
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_twice_is_harmless() {
    let mut state = ToastState::default();
    let id = state.push(ToastKind::Info, "one");
    assert!(state.dismiss(id));
    assert!(!state.dismiss(id));
    assert!(state.toasts.is_empty());
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = ToastState::default();
    let id = state.push(ToastKind::Info, "one");
    state.dismiss(id);
    assert_ne!(state.push(ToastKind::Info, "two"), id);
}

#[test]
fn push_notice_copies_kind_and_message() {
    let mut state = ToastState::default();
    state.push_notice(Notice { kind: ToastKind::Success, message: "done" });
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
    assert_eq!(state.toasts[0].message, "done");
    assert_eq!(state.toasts[0].kind.class(), "toast--success");
}
