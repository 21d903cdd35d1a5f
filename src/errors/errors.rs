use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    context: Option<String>,
}

/// Which stage rejected the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Lexical,
    Grammar,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            context: None,
        }
    }

    /// Attaches a prefix explaining where in the grammar the error happened.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn class(&self) -> ErrorClass {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacters { .. } | ErrorImpl::SpaceIndentation => {
                ErrorClass::Lexical
            }
            _ => ErrorClass::Grammar,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacters { .. } => "UnexpectedCharacters",
            ErrorImpl::SpaceIndentation => "SpaceIndentation",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedValue { .. } => "ExpectedValue",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::TrailingTokens { .. } => "TrailingTokens",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SpaceIndentation => {
                ErrorTip::Suggestion(String::from("indent with tab characters only"))
            }
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Dedent,
                found: TokenKind::PropertyName,
            } => ErrorTip::Suggestion(String::from(
                "the previous property has no trailing `;`, so it closed the block; did you miss a semicolon?",
            )),
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Indent,
                ..
            } => ErrorTip::Suggestion(String::from(
                "properties must be indented one tab deeper than their selector",
            )),
            ErrorImpl::ExpectedValue { found } => ErrorTip::Suggestion(format!(
                "`{}` cannot be used as a property value",
                found
            )),
            _ => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(context) = &self.context {
            write!(f, "{}: ", context)?;
        }

        if self.position.column == 0 {
            write!(
                f,
                "{} - error at the beginning of line: {}",
                self.internal_error, self.position.line
            )
        } else {
            write!(
                f,
                "{} - error at line: {}, column: {}",
                self.internal_error, self.position.line, self.position.column
            )
        }
    }
}

impl std::error::Error for Error {}

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
    #[error("Unexpected token `{fragment}`")]
    UnexpectedCharacters { fragment: String },
    #[error("Indentation must use tabs only")]
    SpaceIndentation,
    #[error("Expected {expected}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("Expected property value")]
    ExpectedValue { found: TokenKind },
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("Expected end of input")]
    TrailingTokens { found: TokenKind },
}
