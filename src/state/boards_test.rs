use super::*;

fn make_board(id: &str) -> Board {
    Board {
        id: id.to_owned(),
        name: format!("Board {id}"),
        description: None,
        thumbnail_url: None,
        created_by: None,
    }
}

#[test]
fn boards_state_default_empty() {
    let state = BoardsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(!state.create_pending);
    assert!(state.error.is_none());
}

#[test]
fn set_loaded_replaces_items_and_clears_flags() {
    let mut state = BoardsState {
        loading: true,
        error: Some("old".to_owned()),
        ..BoardsState::default()
    };
    state.set_loaded(vec![make_board("a"), make_board("b")]);
    assert_eq!(state.items.len(), 2);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn push_created_prepends_without_duplicates() {
    let mut state = BoardsState::default();
    state.set_loaded(vec![make_board("a"), make_board("b")]);
    state.create_pending = true;
    state.push_created(make_board("b"));
    let ids: Vec<&str> = state.items.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert!(!state.create_pending);
}

#[test]
fn fail_records_error_and_clears_pending() {
    let mut state = BoardsState {
        loading: true,
        create_pending: true,
        ..BoardsState::default()
    };
    state.fail("request failed with status 500");
    assert!(!state.loading);
    assert!(!state.create_pending);
    assert_eq!(state.error.as_deref(), Some("request failed with status 500"));
}
