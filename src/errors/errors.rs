use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::Token, lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Reports `error_impl` at the span of `token`.
    pub fn at_token(error_impl: ErrorImpl, token: &Token) -> Self {
        Error::new(error_impl, token.position())
    }

    /// Shorthand for an [`ErrorImpl::UnexpectedToken`] at `token`.
    pub fn unexpected(token: &Token, message: &str) -> Self {
        Error::at_token(
            ErrorImpl::UnexpectedToken {
                token: describe(token),
                message: message.to_string(),
            },
            token,
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter => "UnexpectedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::MixedIndentation => "MixedIndentation",
            ErrorImpl::WrongIndentationKind { .. } => "WrongIndentationKind",
            ErrorImpl::IndentationDepth { .. } => "IndentationDepth",
            ErrorImpl::IncorrectIndentation => "IncorrectIndentation",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::InvalidAssignmentTarget => "InvalidAssignmentTarget",
            ErrorImpl::CastLeftSpacing => "CastLeftSpacing",
            ErrorImpl::CastRightSpacing => "CastRightSpacing",
            ErrorImpl::EmptyInstance => "EmptyInstance",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("close the string with `\"`"))
            }
            ErrorImpl::MixedIndentation => ErrorTip::Suggestion(String::from(
                "indent each line with tabs only or with spaces only",
            )),
            ErrorImpl::WrongIndentationKind { .. } => ErrorTip::Suggestion(String::from(
                "the first indented line of the file fixes the indentation style",
            )),
            ErrorImpl::IndentationDepth { .. } => ErrorTip::None,
            ErrorImpl::IncorrectIndentation => ErrorTip::Suggestion(String::from(
                "this line is indented deeper than the block it belongs to",
            )),
            ErrorImpl::UnexpectedToken { token, .. } => {
                ErrorTip::Suggestion(format!("found {}", token))
            }
            ErrorImpl::InvalidAssignmentTarget => ErrorTip::Suggestion(String::from(
                "only variables and fields can be assigned to",
            )),
            ErrorImpl::CastLeftSpacing | ErrorImpl::CastRightSpacing => {
                ErrorTip::Suggestion(String::from("write casts as `|Type|value`"))
            }
            ErrorImpl::EmptyInstance => ErrorTip::None,
        }
    }
}

/// `"<line>:<column> error: <message>"`, or an end-of-file form when the
/// error was detected at the end of the input.
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.position.is_eof() {
            write!(
                f,
                "line: {}, error: end of file, {}",
                self.position.line, self.internal_error
            )
        } else {
            write!(
                f,
                "{}:{} error: {}",
                self.position.line, self.position.column, self.internal_error
            )
        }
    }
}

impl std::error::Error for Error {}

/// Human readable name of what the parser actually found.
fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::EOF => String::from("end of file"),
        TokenKind::Newline => String::from("end of line"),
        TokenKind::TabsIndent | TokenKind::SpacesIndent => String::from("indentation"),
        _ => format!("`{}`", token.lexeme),
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Unexpected character.")]
    UnexpectedCharacter,
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Indentation must not have both tabs and spaces.")]
    MixedIndentation,
    #[error("Expect indentation using {expected}.")]
    WrongIndentationKind { expected: &'static str },
    #[error("Expect {expected} of indentation.")]
    IndentationDepth { expected: String },
    #[error("Incorrect indentation.")]
    IncorrectIndentation,
    #[error("{message}")]
    UnexpectedToken { token: String, message: String },
    #[error("Invalid assignment target.")]
    InvalidAssignmentTarget,
    #[error("No spaces allowed between \"|\" and type.")]
    CastLeftSpacing,
    #[error("No spaces allowed between type and \"|\".")]
    CastRightSpacing,
    #[error("Instance must have at least one field.")]
    EmptyInstance,
}
