//! Lexical analysis module.
//!
//! This module contains the lexer that converts a style sheet into a
//! stream of tokens for the grammar checker. It handles:
//!
//! - Tokenization using a fixed priority list of regex patterns
//! - INDENT/DEDENT synthesis from leading tab runs
//! - The tabs-only indentation rule
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
