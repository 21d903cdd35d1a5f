//! Utility macros for the validator.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates an anchored lexer pattern for one token kind
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$position` - Where the token starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), Position::new(1, 0));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a lexer pattern anchored at the start of the remaining input.
///
/// The optional third argument is a veto: when it returns true for the
/// character right after the match, the match is discarded and the lexer
/// moves on to the next pattern.
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(TokenKind::Id, "[a-z]+", |next| next.is_ascii_digit())
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($kind:expr, $regex:literal) => {
        RegexPattern {
            kind: $kind,
            regex: Regex::new(concat!("^(?:", $regex, ")")).unwrap(),
            veto: None,
        }
    };
    ($kind:expr, $regex:literal, $veto:expr) => {
        RegexPattern {
            kind: $kind,
            regex: Regex::new(concat!("^(?:", $regex, ")")).unwrap(),
            veto: Some($veto as Veto),
        }
    };
}
