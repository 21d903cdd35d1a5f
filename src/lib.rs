#![allow(clippy::module_inception)]

use std::fmt::Display;

use tracing::info;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// 1-based line and 0-based column of a token's first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Runs the lexer and the grammar checker over a whole document.
pub fn validate(source: &str) -> Result<(), Error> {
    let tokens = lexer::lexer::tokenize(source)?;
    parser::parser::parse(tokens)?;
    info!("document accepted");
    Ok(())
}

/// Returns the text of a 1-based line, without its terminator.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    source.split('\n').nth(line.checked_sub(1)?)
}

/// Formats an error the way the command line prints it:
///
/// ```text
/// Error: UnexpectedToken (tip)
/// -> style.tss
///   |
/// 3 | 	size: 12px;
///   | ^
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let position = error.get_position();
    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let Some(line_text) = get_line(source, position.line) else {
        return out;
    };

    // Tabs are shown as single spaces so the caret lines up.
    let shown = line_text.replace('\t', " ");
    out.push_str(&format!("{} | {}\n", line_string, shown.trim_end()));

    let arrows = position.column + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}
