//! Errors raised while parsing docu comments.
//!
//! Line numbers are 1-based and relative to the text handed to the parser.

use thiserror::Error;

/// A docu comment block that does not follow the expected layout.
///
/// The whole block is rejected; there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("line {line}: missing description")]
    MissingDescription { line: usize },

    #[error("line {line}: missing separator: expected a blank line after the description")]
    MissingSeparator { line: usize },

    #[error("line {line}: malformed param line: `{text}` (expected `@param <name> <description>`)")]
    MalformedParam { line: usize, text: String },

    #[error("line {line}: malformed return line: `{text}` (expected `@return <description>`)")]
    MalformedReturn { line: usize, text: String },

    #[error("line {line}: duplicate return line (first @return on line {first})")]
    DuplicateReturn { line: usize, first: usize },

    #[error("line {line}: unexpected line: `{text}`")]
    UnexpectedLine { line: usize, text: String },
}

impl FormatError {
    /// Line the error was detected on.
    pub fn line(&self) -> usize {
        match self {
            Self::MissingDescription { line }
            | Self::MissingSeparator { line }
            | Self::MalformedParam { line, .. }
            | Self::MalformedReturn { line, .. }
            | Self::DuplicateReturn { line, .. }
            | Self::UnexpectedLine { line, .. } => *line,
        }
    }
}
