//! Fatal errors raised while reading, parsing or querying an HRML input
//!
//! Lookup misses are not errors: they surface as [`Answer::NotFound`](super::Answer::NotFound).

use std::fmt;
use thiserror::Error;

/// Input section a line number refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Markup,
    Query,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Markup => f.write_str("markup"),
            Section::Query => f.write_str("query"),
        }
    }
}

/// Errors that abort a run
///
/// Line numbers are 1-based and relative to their section.
#[derive(Debug, Error)]
pub enum HrmlError {
    #[error("Invalid header {line:?}: expected two line counts \"N Q\"")]
    InvalidHeader { line: String },

    #[error("Input ended early: expected {expected} {section} lines, found {found}")]
    Truncated {
        section: Section,
        expected: usize,
        found: usize,
    },

    #[error("Closing tag found without opening tag at markup line {line_no}: {line:?}")]
    ClosingTagWithoutOpen { line_no: usize, line: String },

    #[error("Mismatched closing tag at markup line {line_no}: expected </{expected}>, found </{found}>")]
    MismatchedClosingTag {
        line_no: usize,
        expected: String,
        found: String,
    },

    #[error("Duplicate tag <{name}> at markup line {line_no}")]
    DuplicateSibling { line_no: usize, name: String },

    #[error("Invalid query format at query line {line_no}: {query:?}")]
    MalformedQuery { line_no: usize, query: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
