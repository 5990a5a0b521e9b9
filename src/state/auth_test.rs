use super::*;

fn make_user() -> User {
    User {
        id: "u1".to_owned(),
        email: "alice@example.com".to_owned(),
        username: "alice".to_owned(),
        display_name: "Alice".to_owned(),
        avatar_url: None,
    }
}

#[test]
fn auth_state_default_is_anonymous_and_settled() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn bootstrapping_state_is_loading() {
    let state = AuthState::bootstrapping();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn resolve_sets_user_and_clears_loading() {
    let mut state = AuthState::bootstrapping();
    state.resolve(Some(make_user()));
    assert!(!state.loading);
    assert_eq!(state.user.map(|u| u.display_name).as_deref(), Some("Alice"));
}

#[test]
fn resolve_with_none_leaves_anonymous() {
    let mut state = AuthState::bootstrapping();
    state.resolve(None);
    assert!(!state.loading);
    assert!(state.user.is_none());
}
