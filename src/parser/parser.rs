//! Grammar checker over the lexer's token stream.
//!
//! The checker never builds a tree: grammar nesting lives only in the call
//! stack of the functions in `rules`. Tokens are consumed strictly left to
//! right with one token of lookahead, and the first mismatch aborts the run.

use tracing::info;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, VALUE_KINDS},
    Position,
};

use super::rules::parse_program;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to check
    tokens: Vec<Token>,
    /// Index of the next token to consume; never moves backwards
    pos: usize,
    /// Set once the `End` token has been consumed
    end_reached: bool,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            end_reached: false,
        }
    }

    /// Returns the current token without advancing.
    ///
    /// Running out of tokens before `End` has been consumed is an error.
    pub fn current_token(&self) -> Result<&Token, Error> {
        self.tokens
            .get(self.pos)
            .ok_or_else(|| Error::new(ErrorImpl::UnexpectedEndOfInput, self.last_position()))
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Result<TokenKind, Error> {
        Ok(self.current_token()?.kind)
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Result<&Token, Error> {
        let index = self.pos;
        if index >= self.tokens.len() {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput,
                self.last_position(),
            ));
        }

        self.pos += 1;
        if self.tokens[index].kind == TokenKind::End {
            self.end_reached = true;
        }
        Ok(&self.tokens[index])
    }

    /// Consumes a token of the given kind, with an optional context prefix
    /// for the error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        context: Option<&str>,
    ) -> Result<&Token, Error> {
        let token = self.current_token()?;
        if token.kind != expected_kind {
            let error = Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: token.kind,
                },
                token.position,
            );
            return Err(match context {
                Some(context) => error.with_context(context),
                None => error,
            });
        }

        self.advance()
    }

    /// Consumes a token of the given kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<&Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Consumes any value token and returns its kind.
    pub fn expect_value(&mut self) -> Result<TokenKind, Error> {
        let token = self.current_token()?;
        if !token.is_one_of_many(&VALUE_KINDS) {
            return Err(Error::new(
                ErrorImpl::ExpectedValue { found: token.kind },
                token.position,
            ));
        }

        Ok(self.advance()?.kind)
    }

    pub fn end_reached(&self) -> bool {
        self.end_reached
    }

    /// Whether tokens remain after the cursor.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    fn last_position(&self) -> Position {
        self.tokens
            .last()
            .map(|token| token.position)
            .unwrap_or_default()
    }
}

/// Checks a token stream against the grammar.
///
/// Succeeds only when consumption ends exactly on the `End` token.
pub fn parse(tokens: Vec<Token>) -> Result<(), Error> {
    let mut parser = Parser::new(tokens);
    let entries = parse_program(&mut parser)?;

    info!(entries, "grammar accepted");
    Ok(())
}
