//! HRML processing pipeline
//!
//! Input flows through these stages:
//!
//! 1. [`input`] splits the raw text into a header, `N` markup lines and `Q` query lines.
//! 2. [`parser`] drives an open-tag state machine over the markup lines and builds a [`TagTree`].
//! 3. [`query`] resolves `tag1.tag2~attribute` lookups against the finished tree.
//!
//! Diagnostics are injected through the [`Diagnostics`] trait rather than a global logger,
//! and default to a no-op sink.
//!
//! ```text
//! 4 3
//! <tag1 value = "HelloWorld">
//! <tag2 name = "Name1">
//! </tag2>
//! </tag1>
//! tag1.tag2~name      -> Name1
//! tag1~name           -> Not Found!
//! tag1~value          -> HelloWorld
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod formats;
pub mod input;
pub mod lines;
pub mod parser;
pub mod query;
pub mod snapshot;
pub mod tree;

pub use diagnostics::{CollectingDiagnostics, Diagnostics, NullDiagnostics, TracingDiagnostics};
pub use error::HrmlError;
pub use input::Input;
pub use parser::{CloseTagPolicy, DocumentParser, DuplicatePolicy, ParsedDocument, ParserOptions};
pub use query::{Answer, Query, QueryResolver, NOT_FOUND};
pub use tree::{Tag, TagId, TagTree};

/// Run the full protocol over `text`: parse the markup section, then answer every query.
///
/// Fails on the first fatal error; in that case no answers are returned.
pub fn process(
    text: &str,
    options: ParserOptions,
    diagnostics: &dyn Diagnostics,
) -> Result<Vec<Answer>, HrmlError> {
    let input = Input::parse(text)?;
    let document = DocumentParser::new()
        .with_options(options)
        .with_diagnostics(diagnostics)
        .parse(&input.markup)?;

    QueryResolver::new(&document.tree)
        .with_diagnostics(diagnostics)
        .answer_all(&input.queries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "4 3\n\
        <tag1 value = \"HelloWorld\">\n\
        <tag2 name = \"Name1\">\n\
        </tag2>\n\
        </tag1>\n\
        tag1.tag2~name\n\
        tag1~name\n\
        tag1~value\n";

    #[test]
    fn test_process_sample() {
        let answers = process(SAMPLE, ParserOptions::default(), &NullDiagnostics).unwrap();
        let lines: Vec<String> = answers.iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["Name1", "Not Found!", "HelloWorld"]);
    }

    #[test]
    fn test_process_stops_on_malformed_query() {
        let text = "2 2\n<a x=\"1\">\n</a>\na~x\na.x\n";
        let err = process(text, ParserOptions::default(), &NullDiagnostics).unwrap_err();
        assert!(matches!(err, HrmlError::MalformedQuery { line_no: 2, .. }));
    }
}
