//! Unit tests for the parser module.
//!
//! - Selector forms and groups
//! - Property values and tails
//! - The early end of a block after a property without semicolon
//! - Error positions and context messages

use crate::errors::errors::{ErrorClass, ErrorImpl};
use crate::lexer::lexer::tokenize;
use crate::lexer::tokens::{Token, TokenKind};
use crate::{Position, MK_TOKEN};

use super::parser::{parse, Parser};
use super::rules::{parse_program, parse_property};

fn check(source: &str) -> Result<(), crate::errors::errors::Error> {
    parse(tokenize(source).unwrap())
}

fn token(kind: TokenKind, line: usize, column: usize) -> Token {
    MK_TOKEN!(kind, String::new(), Position::new(line, column))
}

#[test]
fn test_parse_single_entry() {
    assert!(check("div\n\tcolor: #fff;\n\tsize: 12px\n").is_ok());
}

#[test]
fn test_parse_empty_document() {
    assert!(check("").is_ok());
    assert!(check("\n\n").is_ok());
}

#[test]
fn test_parse_descendant_selector() {
    assert!(check("nav ul li\n\tmargin: 0;\n").is_ok());
}

#[test]
fn test_parse_combinator_selector() {
    assert!(check(".a > .b\n\tcolor: red\n").is_ok());
    assert!(check(".a + .b\n\tcolor: red\n").is_ok());
}

#[test]
fn test_parse_combinator_requires_right_side() {
    let error = check(".a >\n\tcolor: red\n").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Id,
            found: TokenKind::Newline
        }
    );
}

#[test]
fn test_parse_selector_group_on_one_line() {
    assert!(check("div, span\n\tcolor: #fff;\n").is_ok());
}

#[test]
fn test_parse_selector_group_across_lines() {
    assert!(check("h, p,\nli,\n.note\n\tcolor: blue;\n").is_ok());
}

#[test]
fn test_parse_long_selector_group() {
    let mut source = "a,\n".repeat(20_000);
    source.push_str("a\n\tcolor: red;\n");

    assert!(check(&source).is_ok());
}

#[test]
fn test_parse_trailing_comma_rejected() {
    let error = check("div,\n\tcolor: blue;\n").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Id,
            found: TokenKind::Indent
        }
    );
}

#[test]
fn test_parse_all_value_kinds() {
    let source = "body\n\ta: red;\n\tb: #000;\n\tc: 4;\n\td: 1px;\n\te: 2rem;\n\tf: \"x\";\n\tg: url(a.png);\n\th: 50%\n";
    assert!(check(source).is_ok());
}

#[test]
fn test_parse_important() {
    assert!(check("p\n\tcolor: red !important;\n\tmargin: 0\n").is_ok());
}

#[test]
fn test_parse_shorthand_tail() {
    assert!(check("div\n\tborder: 1px solid #fff;\n").is_ok());
}

#[test]
fn test_parse_shorthand_requires_hex() {
    let error = check("div\n\tborder: 1px solid red;\n").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Hex,
            found: TokenKind::Id
        }
    );
    assert_eq!(error.get_position(), &Position::new(2, 19));
}

#[test]
fn test_parse_shorthand_only_after_px() {
    let error = check("div\n\tborder: 1em solid #fff;\n").unwrap_err();

    assert_eq!(error.get_context(), Some("After property newline must be present"));
}

#[test]
fn test_parse_missing_value() {
    let error = check("div\n\tcolor: ;\n").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::ExpectedValue {
            found: TokenKind::Semicolon
        }
    );
    assert_eq!(
        error.to_string(),
        "Expected property value - error at line: 2, column: 8"
    );
}

#[test]
fn test_parse_property_without_semicolon_ends_block() {
    let error = check("div\n\tcolor: #fff\n\tsize: 12px;\n").unwrap_err();

    assert_eq!(error.class(), ErrorClass::Grammar);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Dedent,
            found: TokenKind::PropertyName
        }
    );
    assert_eq!(error.get_position(), &Position::new(3, 1));
    assert_eq!(
        error.to_string(),
        "Expected DEDENT - error at line: 3, column: 1"
    );
}

#[test]
fn test_parse_missing_indentation() {
    let error = check("div\ncolor: red;\n").unwrap_err();

    assert_eq!(
        error.to_string(),
        "After select block indentation must be present: Expected INDENT - error at the beginning of line: 2"
    );
}

#[test]
fn test_parse_missing_newline_after_selector() {
    let error = check("div color: red;\n").unwrap_err();

    assert_eq!(
        error.get_context(),
        Some("After select block newline must be present")
    );
    assert_eq!(error.get_position(), &Position::new(1, 4));
}

#[test]
fn test_parse_missing_newline_at_end_of_input() {
    let error = check("div\n\tcolor: red;").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::Newline,
            found: TokenKind::Dedent
        }
    );
    assert_eq!(
        error.get_context(),
        Some("After property newline must be present")
    );
}

#[test]
fn test_parse_nested_block_rejected() {
    let error = check("div\n\tcolor: red;\n\t\tmargin: 0;\n").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            expected: TokenKind::PropertyName,
            found: TokenKind::Indent
        }
    );
}

#[test]
fn test_parse_several_entries_with_blank_lines() {
    let source = "div\n\tcolor: red;\n\n\np\n\tmargin: 0\n\n";
    let tokens = tokenize(source).unwrap();
    let mut parser = Parser::new(tokens);

    assert_eq!(parse_program(&mut parser).unwrap(), 2);
    assert!(parser.end_reached());
    assert!(!parser.has_tokens());
}

#[test]
fn test_parse_property_reports_semicolon() {
    let tokens = tokenize("a: 1;\nb: 2\n").unwrap();
    let mut parser = Parser::new(tokens);

    assert!(parse_property(&mut parser).unwrap());
    assert!(!parse_property(&mut parser).unwrap());
    assert_eq!(parser.current_token_kind().unwrap(), TokenKind::End);
}

#[test]
fn test_parse_unexpected_end_of_input() {
    let tokens = vec![
        token(TokenKind::Id, 1, 0),
        token(TokenKind::Newline, 1, 3),
    ];
    let error = parse(tokens).unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnexpectedEndOfInput);
    assert_eq!(error.get_position(), &Position::new(1, 3));
}

#[test]
fn test_parse_tokens_after_end() {
    let tokens = vec![
        token(TokenKind::End, 1, 0),
        token(TokenKind::Id, 2, 0),
    ];
    let error = parse(tokens).unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::TrailingTokens {
            found: TokenKind::Id
        }
    );
}

#[test]
fn test_parse_indent_balance_of_accepted_documents() {
    let sources = [
        "div\n\tcolor: #fff;\n\tsize: 12px\n",
        "div, span\n\tcolor: #fff;\n",
        ".a > .b\n\tcolor: red\n",
        "div\n\tborder: 1px solid #fff;\n",
        "a\n\tb: 1;\n\nc,\nd\n\te: 2px\n",
    ];

    for source in sources {
        let tokens = tokenize(source).unwrap();
        let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
        let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();

        assert_eq!(indents, dedents, "source {:?}", source);
        assert!(parse(tokens).is_ok(), "source {:?}", source);
    }
}
