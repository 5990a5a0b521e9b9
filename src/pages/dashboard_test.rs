use super::*;

#[test]
fn validate_board_name_trims_input() {
    assert_eq!(
        validate_board_name("  Roadmap  "),
        Ok(CreateBoardRequest {
            name: "Roadmap".to_owned(),
            description: None,
        })
    );
}

#[test]
fn validate_board_name_requires_value() {
    assert_eq!(validate_board_name("   "), Err("Board name is required."));
}

#[test]
fn validate_board_name_limits_length() {
    let long = "x".repeat(MAX_BOARD_NAME_CHARS + 1);
    assert_eq!(validate_board_name(&long), Err("Board name is too long."));
    let max = "y".repeat(MAX_BOARD_NAME_CHARS);
    assert!(validate_board_name(&max).is_ok());
}
