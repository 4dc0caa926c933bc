//! Unit tests for diagnostics.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::{Token, TokenKind};
use crate::{Position, MK_TOKEN};

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter, Position::new(3, 7, 1));

    assert_eq!(error.to_string(), "3:7 error: Unexpected character.");
    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
}

#[test]
fn test_error_display_at_end_of_file() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: String::from("end of file"),
            message: String::from("Expect expression."),
        },
        Position::eof(12),
    );

    assert_eq!(
        error.to_string(),
        "line: 12, error: end of file, Expect expression."
    );
}

#[test]
fn test_error_at_token_uses_token_span() {
    let token = MK_TOKEN!(TokenKind::Identifier, String::from("name"), 4, 9, 4);
    let error = Error::at_token(ErrorImpl::InvalidAssignmentTarget, &token);

    assert_eq!(*error.get_position(), Position::new(4, 9, 4));
    assert_eq!(error.get_message(), "Invalid assignment target.");
}

#[test]
fn test_error_at_eof_token_has_no_column() {
    let token = MK_TOKEN!(TokenKind::EOF, String::new(), 8, 0, 0);
    let error = Error::unexpected(&token, "Expect \")\" after expression.");

    assert!(error.get_position().is_eof());
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "found end of file"),
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_unexpected_token_names_found_token() {
    let token = MK_TOKEN!(TokenKind::CloseParen, String::from(")"), 1, 6, 1);
    let error = Error::unexpected(&token, "Expect expression.");

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.to_string(), "1:6 error: Expect expression.");
    assert_eq!(error.get_tip().to_string(), "found `)`");
}

#[test]
fn test_indentation_messages() {
    let kind = Error::new(
        ErrorImpl::WrongIndentationKind { expected: "tabs" },
        Position::new(2, 1, 4),
    );
    let depth = Error::new(
        ErrorImpl::IndentationDepth {
            expected: String::from("2 tabs"),
        },
        Position::new(5, 1, 1),
    );

    assert_eq!(kind.get_message(), "Expect indentation using tabs.");
    assert_eq!(depth.get_message(), "Expect 2 tabs of indentation.");
    assert!(matches!(depth.get_tip(), ErrorTip::None));
}

#[test]
fn test_cast_spacing_messages() {
    let left = Error::new(ErrorImpl::CastLeftSpacing, Position::new(1, 10, 3));
    let right = Error::new(ErrorImpl::CastRightSpacing, Position::new(1, 14, 1));

    assert_eq!(left.get_message(), "No spaces allowed between \"|\" and type.");
    assert_eq!(right.get_message(), "No spaces allowed between type and \"|\".");
    assert_eq!(left.get_tip().to_string(), right.get_tip().to_string());
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
