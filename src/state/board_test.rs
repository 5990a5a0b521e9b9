use super::*;
use crate::net::types::ElementType;
use crate::state::text_editor::TextCommit;

fn make_element(id: &str, z_index: i32) -> BoardElement {
    BoardElement {
        id: id.to_owned(),
        board_id: "b-1".to_owned(),
        element_type: ElementType::Text,
        position_x: 0.0,
        position_y: 0.0,
        width: 100.0,
        height: 40.0,
        rotation: 0.0,
        z_index,
        style: serde_json::json!({}),
        properties: serde_json::json!({"text": "a"}),
        version: 1,
    }
}

fn state_with(elements: &[BoardElement]) -> BoardState {
    let mut state = BoardState::default();
    for element in elements {
        state.upsert_element(element.clone());
    }
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn board_state_default_is_empty() {
    let state = BoardState::default();
    assert!(state.board_id.is_none());
    assert!(state.elements.is_empty());
    assert!(!state.editor.is_open());
    assert!(!state.loading);
}

#[test]
fn reset_for_switches_board_and_clears_elements() {
    let mut state = state_with(&[make_element("e-1", 0)]);
    state.error = Some("boom".to_owned());
    state.reset_for("b-2");
    assert_eq!(state.board_id.as_deref(), Some("b-2"));
    assert!(state.elements.is_empty());
    assert!(state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// update_element
// =============================================================

#[test]
fn update_element_replaces_on_some() {
    let mut state = state_with(&[make_element("e-1", 0)]);
    let changed = state.update_element("e-1", |current| {
        let mut next = current.clone();
        next.position_x = 42.0;
        Some(next)
    });
    assert!(changed);
    assert!((state.elements["e-1"].position_x - 42.0).abs() < f64::EPSILON);
}

#[test]
fn update_element_none_means_no_change() {
    let original = make_element("e-1", 0);
    let mut state = state_with(&[original.clone()]);
    let changed = state.update_element("e-1", |_| None);
    assert!(!changed);
    assert_eq!(state.elements["e-1"], original);
}

#[test]
fn update_element_unknown_id_is_ignored() {
    let mut state = state_with(&[make_element("e-1", 0)]);
    let mut called = false;
    let changed = state.update_element("missing", |current| {
        called = true;
        Some(current.clone())
    });
    assert!(!changed);
    assert!(!called);
    assert_eq!(state.elements.len(), 1);
}

#[test]
fn update_element_keeps_map_key_authoritative() {
    let mut state = state_with(&[make_element("e-1", 0)]);
    state.update_element("e-1", |current| {
        let mut next = current.clone();
        next.id = "renamed".to_owned();
        Some(next)
    });
    assert_eq!(state.elements["e-1"].id, "e-1");
    assert!(!state.elements.contains_key("renamed"));
}

#[test]
fn update_element_with_text_commit() {
    let mut state = state_with(&[make_element("e-1", 0)]);
    let commit = TextCommit {
        element_id: "e-1".to_owned(),
        text: "edited".to_owned(),
    };
    assert!(state.update_element("e-1", |el| commit.apply(el)));
    assert_eq!(state.elements["e-1"].text(), "edited");
    assert!(!state.update_element("e-1", |el| commit.apply(el)));
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn sorted_elements_orders_by_z_then_id() {
    let state = state_with(&[
        make_element("c", 1),
        make_element("b", 0),
        make_element("a", 1),
    ]);
    let ids: Vec<String> = state.sorted_elements().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn next_z_index_starts_at_zero_and_stacks_on_top() {
    assert_eq!(BoardState::default().next_z_index(), 0);
    let state = state_with(&[make_element("a", 3), make_element("b", 7)]);
    assert_eq!(state.next_z_index(), 8);
}

// =============================================================
// ElementUpdater
// =============================================================

#[test]
fn element_updater_writes_change_into_signal() {
    let board = RwSignal::new(state_with(&[make_element("e-1", 0)]));
    let updater = ElementUpdater::new(board);
    let changed = updater.apply("e-1", |e| {
        let mut next = e.clone();
        next.z_index = 7;
        Some(next)
    });
    assert!(changed);
    assert_eq!(board.with_untracked(|s| s.elements["e-1"].z_index), 7);
}

#[test]
fn element_updater_reports_no_change() {
    let board = RwSignal::new(state_with(&[make_element("e-1", 0)]));
    let updater = ElementUpdater::new(board);
    assert!(!updater.apply("e-1", |_| None));
    assert!(!updater.apply("missing", |e| Some(e.clone())));
    assert_eq!(board.with_untracked(|s| s.elements["e-1"].z_index), 0);
}
