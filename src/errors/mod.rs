//! Error types for the validator.
//!
//! - Error structure with source position and optional context
//! - Lexical and grammar error variants
//! - Tips for common authoring mistakes

pub mod errors;
