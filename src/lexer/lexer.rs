use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_PATTERN, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

/// Rejects a match based on the character that follows it.
pub type Veto = fn(char) -> bool;

pub struct RegexPattern {
    kind: TokenKind,
    regex: Regex,
    veto: Option<Veto>,
}

impl RegexPattern {
    /// Length in bytes of the match at the start of `input`, if any.
    fn match_len(&self, input: &str) -> Option<usize> {
        let found = self.regex.find(input)?;
        let next = input[found.end()..].chars().next();

        match (self.veto, next) {
            (Some(veto), Some(next)) if veto(next) => None,
            _ => Some(found.end()),
        }
    }
}

fn hex_veto(next: char) -> bool {
    next.is_ascii_alphabetic() || next == '-' || next == '_'
}

fn id_veto(next: char) -> bool {
    next.is_ascii_digit()
}

lazy_static! {
    /// Patterns in priority order: the first one matching wins. Specific
    /// value forms must stay ahead of `Id`, which would otherwise shadow them.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        MK_PATTERN!(TokenKind::PropertyName, r"[a-zA-Z\-]+:"),
        MK_PATTERN!(TokenKind::Text, r#""[^"\n]*""#),
        MK_PATTERN!(TokenKind::Hex, r"#[0-9a-fA-F]+", hex_veto),
        MK_PATTERN!(TokenKind::Px, r"[0-9]+px"),
        MK_PATTERN!(TokenKind::Rem, r"[0-9]+r?em"),
        MK_PATTERN!(TokenKind::Perc, r"[0-9]+%"),
        MK_PATTERN!(TokenKind::Int, r"[0-9]+"),
        MK_PATTERN!(TokenKind::Url, r"url\([0-9a-zA-Z?=_:;./\-]+\)"),
        MK_PATTERN!(TokenKind::Operator, r"[+>~]"),
        MK_PATTERN!(TokenKind::Id, r"\*|[#.]*[a-zA-Z._]*:*[a-zA-Z._\-]+", id_veto),
        MK_PATTERN!(TokenKind::Important, r"!important"),
        MK_PATTERN!(TokenKind::Comment, r"//[^\n]*"),
        MK_PATTERN!(TokenKind::Semicolon, r";"),
        MK_PATTERN!(TokenKind::Comma, r","),
        MK_PATTERN!(TokenKind::Space, r" +"),
        MK_PATTERN!(TokenKind::Newline, r"\n"),
        MK_PATTERN!(TokenKind::Indentation, r"\t+"),
    ];
}

/// What the indentation logic sees at the start of a line.
enum LineStart<'a> {
    Token(TokenKind, &'a str),
    EndOfInput,
}

/// State for a single tokenization run.
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    indent_level: usize,
    /// True right after the tab run that opens a line.
    after_indentation: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            column: 0,
            indent_level: 0,
            after_indentation: false,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn push(&mut self, kind: TokenKind, value: String) {
        trace!(kind = %kind, value = %value, line = self.line, column = self.column, "token");
        self.tokens.push(MK_TOKEN!(kind, value, self.position()));
    }

    /// Finds the highest-priority pattern matching at the current position.
    fn next_match(&self) -> Result<(TokenKind, &'a str), Error> {
        let remainder = self.remainder();

        for pattern in PATTERNS.iter() {
            if let Some(len) = pattern.match_len(remainder) {
                return Ok((pattern.kind, &remainder[..len]));
            }
        }

        let fragment = remainder.split('\n').next().unwrap_or_default().to_string();
        Err(Error::new(
            ErrorImpl::UnexpectedCharacters { fragment },
            self.position(),
        ))
    }

    /// Emits INDENT/DEDENT tokens for the line that starts with `start`.
    fn handle_indentation(&mut self, start: LineStart) {
        match start {
            LineStart::Token(TokenKind::Indentation, tabs) => {
                let depth = tabs.chars().filter(|c| *c == '\t').count();

                if depth > self.indent_level {
                    debug!(line = self.line, from = self.indent_level, to = depth, "indent");
                    while self.indent_level < depth {
                        self.push(TokenKind::Indent, String::from("indent"));
                        self.indent_level += 1;
                    }
                } else if depth < self.indent_level {
                    self.dedent_to(depth);
                }
            }
            _ => self.dedent_to(0),
        }
    }

    fn dedent_to(&mut self, depth: usize) {
        if self.indent_level > depth {
            debug!(line = self.line, from = self.indent_level, to = depth, "dedent");
        }

        while self.indent_level > depth {
            self.push(TokenKind::Dedent, String::from("dedent"));
            self.indent_level -= 1;
        }
    }

    fn step(&mut self) -> Result<(), Error> {
        let (kind, value) = self.next_match()?;

        if kind == TokenKind::Space && (self.column == 0 || self.after_indentation) {
            return Err(Error::new(ErrorImpl::SpaceIndentation, self.position()));
        }

        self.after_indentation = false;
        if self.column == 0 {
            self.handle_indentation(LineStart::Token(kind, value));
            self.after_indentation = kind == TokenKind::Indentation;
        }

        if !kind.is_ignored() {
            self.push(kind, value.to_string());
        }

        if kind == TokenKind::Newline {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += value.chars().count();
        }
        self.pos += value.len();

        Ok(())
    }

    fn finish(mut self) -> Vec<Token> {
        self.handle_indentation(LineStart::EndOfInput);
        self.push(TokenKind::End, String::new());
        self.tokens
    }
}

/// Converts a whole document into its token stream, ending with `End`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        lex.step()?;
    }

    let tokens = lex.finish();
    debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}
