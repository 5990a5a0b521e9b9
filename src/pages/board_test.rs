use super::*;

#[test]
fn draft_text_element_has_placeholder_text() {
    let element = draft_element("e-1".to_owned(), "b-1", ElementType::Text, 0);
    assert_eq!(element.id, "e-1");
    assert_eq!(element.board_id, "b-1");
    assert_eq!(element.text(), "Text");
    assert!((element.position_x - 80.0).abs() < f64::EPSILON);
    assert_eq!(element.version, 0);
}

#[test]
fn draft_sticky_note_is_square_with_background() {
    let element = draft_element("e-1".to_owned(), "b-1", ElementType::StickyNote, 2);
    assert!((element.width - 200.0).abs() < f64::EPSILON);
    assert!((element.height - 200.0).abs() < f64::EPSILON);
    assert_eq!(element.style_str("backgroundColor"), Some(DEFAULT_STICKY_BACKGROUND));
    assert_eq!(element.text(), "");
    assert_eq!(element.z_index, 2);
}

#[test]
fn draft_elements_cascade_and_wrap() {
    let first = draft_element("a".to_owned(), "b", ElementType::Text, 1);
    let second = draft_element("b".to_owned(), "b", ElementType::Text, 2);
    let wrapped = draft_element("c".to_owned(), "b", ElementType::Text, CASCADE_SLOTS + 1);
    assert!((second.position_x - first.position_x - CASCADE_STEP).abs() < f64::EPSILON);
    assert!((wrapped.position_x - first.position_x).abs() < f64::EPSILON);
}

#[test]
fn draft_elements_open_in_text_editor() {
    for kind in [ElementType::Text, ElementType::StickyNote] {
        let element = draft_element("e".to_owned(), "b", kind, 0);
        assert!(OpenTextEditor::for_element(&element, 0.0, 0.0).is_some());
    }
}

#[test]
fn create_request_mirrors_element() {
    let element = draft_element("e-1".to_owned(), "b-1", ElementType::StickyNote, 0);
    let request = create_request(&element);
    assert_eq!(request.id.as_deref(), Some("e-1"));
    assert_eq!(request.element_type, ElementType::StickyNote);
    assert_eq!(request.properties, Some(element.properties.clone()));
    assert_eq!(request.style, Some(element.style.clone()));
}
