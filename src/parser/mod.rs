//! Grammar checker for tab-indented style sheets.
//!
//! This module consumes the token stream produced by the lexer and decides
//! whether it forms a valid document. It handles:
//!
//! - Selector lines, including combinators and comma-joined groups
//! - Indented property blocks
//! - Property values, `!important` and the `<px> <id> <hex>` shorthand
//! - Positional errors for the first violation

pub mod parser;
pub mod rules;

#[cfg(test)]
mod tests;
