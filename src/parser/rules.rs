//! One function per grammar production.
//!
//! ```text
//! program    := (entry | NEWLINE)* END
//! entry      := select NEWLINE INDENT properties DEDENT NEWLINE*
//! select     := ID (OPERATOR ID | ID*) (COMMA NEWLINE? select)?
//! properties := property*
//! property   := PROPERTY_NAME value (IMPORTANT | PX ID HEX)? (SEMICOLON NEWLINE | NEWLINE)
//! ```
//!
//! A property that ends without a semicolon also ends its block, so any
//! property after it is reported as a missing DEDENT.

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Consumes the whole stream and returns the number of entries seen.
pub fn parse_program(parser: &mut Parser) -> Result<usize, Error> {
    let mut entries = 0;

    while !parser.end_reached() {
        match parser.current_token_kind()? {
            TokenKind::Newline | TokenKind::End => {
                parser.advance()?;
            }
            _ => {
                parse_entry(parser)?;
                entries += 1;
            }
        }
    }

    if parser.has_tokens() {
        let token = parser.current_token()?;
        return Err(Error::new(
            ErrorImpl::TrailingTokens { found: token.kind },
            token.position,
        ));
    }

    Ok(entries)
}

pub fn parse_entry(parser: &mut Parser) -> Result<(), Error> {
    let start = parser.current_token()?.position;

    parse_select(parser)?;
    parser.expect_error(
        TokenKind::Newline,
        Some("After select block newline must be present"),
    )?;
    parser.expect_error(
        TokenKind::Indent,
        Some("After select block indentation must be present"),
    )?;
    let properties = parse_properties(parser)?;
    parser.expect(TokenKind::Dedent)?;

    while parser.current_token_kind()? == TokenKind::Newline {
        parser.advance()?;
    }

    debug!(line = start.line, properties, "entry accepted");
    Ok(())
}

/// Parses a selector group: one selector, then another after each comma.
///
/// Groups of any length are parsed in a single stack frame.
pub fn parse_select(parser: &mut Parser) -> Result<(), Error> {
    loop {
        parser.expect(TokenKind::Id)?;

        if parser.current_token_kind()? == TokenKind::Operator {
            parser.advance()?;
            parser.expect(TokenKind::Id)?;
        } else {
            while parser.current_token_kind()? == TokenKind::Id {
                parser.advance()?;
            }
        }

        if parser.current_token_kind()? != TokenKind::Comma {
            return Ok(());
        }

        parser.advance()?;
        if parser.current_token_kind()? == TokenKind::Newline {
            parser.advance()?;
        }
    }
}

/// Returns how many properties were consumed.
pub fn parse_properties(parser: &mut Parser) -> Result<usize, Error> {
    let mut count = 0;

    while parser.current_token_kind()? != TokenKind::Dedent {
        let continues = parse_property(parser)?;
        count += 1;
        if !continues {
            break;
        }
    }

    Ok(count)
}

/// Parses one declaration. Returns false when it had no trailing semicolon,
/// which closes the property list.
pub fn parse_property(parser: &mut Parser) -> Result<bool, Error> {
    parser.expect(TokenKind::PropertyName)?;
    let value_kind = parser.expect_value()?;

    let next = parser.current_token_kind()?;
    if next == TokenKind::Important {
        parser.advance()?;
    } else if value_kind == TokenKind::Px && next == TokenKind::Id {
        // <length> <style> <color>, as in `border: 1px solid #fff`
        parser.advance()?;
        parser.expect(TokenKind::Hex)?;
    }

    let terminated = parser.current_token_kind()? == TokenKind::Semicolon;
    if terminated {
        parser.advance()?;
    }
    parser.expect_error(
        TokenKind::Newline,
        Some("After property newline must be present"),
    )?;

    Ok(terminated)
}
