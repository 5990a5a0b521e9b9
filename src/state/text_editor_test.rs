use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_element(id: &str, element_type: ElementType) -> BoardElement {
    BoardElement {
        id: id.to_owned(),
        board_id: "b-1".to_owned(),
        element_type,
        position_x: 0.0,
        position_y: 0.0,
        width: 220.0,
        height: 160.0,
        rotation: 0.0,
        z_index: 0,
        style: serde_json::json!({}),
        properties: serde_json::json!({"text": "draft"}),
        version: 5,
    }
}

fn open_state(id: &str) -> TextEditorState {
    let element = make_element(id, ElementType::Text);
    let mut state = TextEditorState::default();
    state.open(OpenTextEditor::for_element(&element, 12.0, 34.0).unwrap());
    state
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn default_state_is_closed_without_element() {
    let state = TextEditorState::default();
    assert!(!state.is_open());
    assert!(state.element_id().is_none());
    assert!(state.editor().is_none());
}

#[test]
fn open_state_always_has_element_id() {
    let state = open_state("e-1");
    assert!(state.is_open());
    assert_eq!(state.element_id(), Some("e-1"));
}

#[test]
fn every_transition_keeps_open_implies_element() {
    let mut state = open_state("e-1");
    let check = |s: &TextEditorState| assert_eq!(s.is_open(), s.element_id().is_some());

    check(&state);
    state.set_value("typing");
    check(&state);
    state.move_to(50.0, 60.0);
    check(&state);
    let _ = state.commit();
    check(&state);
    state.set_value("ignored");
    check(&state);
    state.move_to(1.0, 1.0);
    check(&state);
    state.cancel();
    check(&state);
}

#[test]
fn set_value_and_move_update_open_editor() {
    let mut state = open_state("e-1");
    state.set_value("hello world");
    state.move_to(100.0, 200.0);
    let editor = state.editor().unwrap();
    assert_eq!(editor.value, "hello world");
    assert!((editor.x - 100.0).abs() < f64::EPSILON);
    assert!((editor.y - 200.0).abs() < f64::EPSILON);
}

#[test]
fn closed_editor_ignores_mutations() {
    let mut state = TextEditorState::default();
    state.set_value("nope");
    state.move_to(1.0, 2.0);
    assert_eq!(state, TextEditorState::Closed);
}

#[test]
fn commit_returns_text_and_closes() {
    let mut state = open_state("e-1");
    state.set_value("final");
    let commit = state.commit().unwrap();
    assert_eq!(
        commit,
        TextCommit {
            element_id: "e-1".to_owned(),
            text: "final".to_owned(),
        }
    );
    assert!(!state.is_open());
}

#[test]
fn commit_on_closed_editor_is_none() {
    let mut state = TextEditorState::default();
    assert!(state.commit().is_none());
}

#[test]
fn cancel_closes_without_commit() {
    let mut state = open_state("e-1");
    state.cancel();
    assert_eq!(state, TextEditorState::Closed);
    assert!(state.commit().is_none());
}

#[test]
fn reopening_retargets_editor() {
    let mut state = open_state("e-1");
    let other = make_element("e-2", ElementType::StickyNote);
    state.open(OpenTextEditor::for_element(&other, 0.0, 0.0).unwrap());
    assert_eq!(state.element_id(), Some("e-2"));
}

// =============================================================
// Seeding from elements
// =============================================================

#[test]
fn for_element_text_uses_defaults() {
    let element = make_element("e-1", ElementType::Text);
    let editor = OpenTextEditor::for_element(&element, 1.0, 2.0).unwrap();
    assert_eq!(editor.kind, EditorKind::Text);
    assert_eq!(editor.value, "draft");
    assert!((editor.font_size - DEFAULT_FONT_SIZE).abs() < f64::EPSILON);
    assert_eq!(editor.color, DEFAULT_TEXT_COLOR);
}

#[test]
fn for_element_sticky_note_carries_background_and_size() {
    let mut element = make_element("e-1", ElementType::StickyNote);
    element.style = serde_json::json!({
        "backgroundColor": "#bbf7d0",
        "fontSize": 20.0,
        "color": "#111111",
    });
    let editor = OpenTextEditor::for_element(&element, 0.0, 0.0).unwrap();
    assert_eq!(
        editor.kind,
        EditorKind::StickyNote {
            background: "#bbf7d0".to_owned(),
            width: 220.0,
            height: 160.0,
        }
    );
    assert!((editor.font_size - 20.0).abs() < f64::EPSILON);
    assert_eq!(editor.color, "#111111");
}

#[test]
fn for_element_sticky_note_default_background() {
    let element = make_element("e-1", ElementType::StickyNote);
    let editor = OpenTextEditor::for_element(&element, 0.0, 0.0).unwrap();
    match editor.kind {
        EditorKind::StickyNote { background, .. } => assert_eq!(background, DEFAULT_STICKY_BACKGROUND),
        EditorKind::Text => panic!("expected sticky note editor"),
    }
}

#[test]
fn for_element_rejects_invalid_font_size() {
    let mut element = make_element("e-1", ElementType::Text);
    element.style = serde_json::json!({"fontSize": -4.0});
    let editor = OpenTextEditor::for_element(&element, 0.0, 0.0).unwrap();
    assert!((editor.font_size - DEFAULT_FONT_SIZE).abs() < f64::EPSILON);
}

#[test]
fn for_element_refuses_non_text_elements() {
    for kind in [ElementType::Shape, ElementType::Image, ElementType::Connector] {
        let element = make_element("e-1", kind);
        assert!(OpenTextEditor::for_element(&element, 0.0, 0.0).is_none());
    }
}

// =============================================================
// Applying commits
// =============================================================

#[test]
fn apply_writes_text_and_keeps_version() {
    let element = make_element("e-1", ElementType::Text);
    let commit = TextCommit {
        element_id: "e-1".to_owned(),
        text: "updated".to_owned(),
    };
    let next = commit.apply(&element).unwrap();
    assert_eq!(next.text(), "updated");
    assert_eq!(next.version, element.version);
}

#[test]
fn apply_unchanged_text_is_no_change() {
    let element = make_element("e-1", ElementType::Text);
    let commit = TextCommit {
        element_id: "e-1".to_owned(),
        text: "draft".to_owned(),
    };
    assert!(commit.apply(&element).is_none());
}

#[test]
fn apply_other_element_is_no_change() {
    let element = make_element("e-2", ElementType::Text);
    let commit = TextCommit {
        element_id: "e-1".to_owned(),
        text: "updated".to_owned(),
    };
    assert!(commit.apply(&element).is_none());
}

#[test]
fn apply_replaces_non_object_properties() {
    let mut element = make_element("e-1", ElementType::Text);
    element.properties = serde_json::Value::Null;
    let commit = TextCommit {
        element_id: "e-1".to_owned(),
        text: "fresh".to_owned(),
    };
    let next = commit.apply(&element).unwrap();
    assert_eq!(next.properties, serde_json::json!({"text": "fresh"}));
}

#[test]
fn text_patch_request_carries_expected_version_and_properties() {
    let mut element = make_element("e-1", ElementType::Text);
    element.properties = serde_json::json!({"text": "new"});
    let req = text_patch_request(&element, 5);
    assert_eq!(req.expected_version, 5);
    assert_eq!(req.properties, Some(serde_json::json!({"text": "new"})));
    assert!(req.position_x.is_none());
}
