use std::fmt::Display;

use crate::Position;

/// Kinds a property value may take.
pub const VALUE_KINDS: [TokenKind; 8] = [
    TokenKind::Id,
    TokenKind::Hex,
    TokenKind::Int,
    TokenKind::Px,
    TokenKind::Rem,
    TokenKind::Text,
    TokenKind::Url,
    TokenKind::Perc,
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    PropertyName,
    Id,
    Operator,
    Comma,
    Semicolon,
    Important,

    // Values
    Hex,
    Int,
    Px,
    Rem,
    Text,
    Url,
    Perc,

    // Structure
    Newline,
    Indent,
    Dedent,
    End,

    // Matched but never emitted
    Space,
    Comment,
    Indentation,
}

impl TokenKind {
    /// Name used in diagnostics, e.g. `PROPERTY_NAME`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::PropertyName => "PROPERTY_NAME",
            TokenKind::Id => "ID",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Important => "IMPORTANT",
            TokenKind::Hex => "HEX",
            TokenKind::Int => "INT",
            TokenKind::Px => "PX",
            TokenKind::Rem => "REM",
            TokenKind::Text => "TEXT",
            TokenKind::Url => "URL",
            TokenKind::Perc => "PERC",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::End => "END",
            TokenKind::Space => "SPACE",
            TokenKind::Comment => "COMMENT",
            TokenKind::Indentation => "INDENTATION",
        }
    }

    /// Whether the lexer drops tokens of this kind instead of emitting them.
    pub fn is_ignored(&self) -> bool {
        matches!(
            self,
            TokenKind::Space | TokenKind::Comment | TokenKind::Indentation
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} {} {:?}",
            self.position.line, self.position.column, self.kind, self.value
        )
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
