//! Attribute queries
//!
//! A query line reads `tag1.tag2.tagN~attribute`. The path is resolved from the root tags
//! downwards; a missing segment or attribute is a soft miss reported as [`NOT_FOUND`], while a
//! line that does not split into exactly one path and one attribute aborts the batch.

use super::diagnostics::{Diagnostics, NullDiagnostics};
use super::error::HrmlError;
use super::tree::TagTree;
use std::fmt;

/// Text printed for a query that matches nothing
pub const NOT_FOUND: &str = "Not Found!";

static NULL_DIAGNOSTICS: NullDiagnostics = NullDiagnostics;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    path: Vec<String>,
    attribute: String,
}

impl Query {
    pub fn new<I, S>(path: I, attribute: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            attribute: attribute.to_string(),
        }
    }

    /// Parse `path~attribute`; `None` unless the line holds exactly two `~` fields.
    ///
    /// A trailing empty field is not counted, so `a~` and `~` are malformed while `a.~x`
    /// addresses `a`.
    pub fn parse(line: &str) -> Option<Self> {
        let fields = tokenize(line, '~');
        let [path, attribute] = fields.as_slice() else {
            return None;
        };
        Some(Self::new(tokenize(path, '.'), attribute))
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }
}

/// Split on `delimiter`, dropping one empty field at the end
fn tokenize(text: &str, delimiter: char) -> Vec<&str> {
    let mut fields: Vec<&str> = text.split(delimiter).collect();
    if fields.last() == Some(&"") {
        fields.pop();
    }
    fields
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}", self.path.join("."), self.attribute)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Value(String),
    NotFound,
}

impl Answer {
    pub fn value(&self) -> Option<&str> {
        match self {
            Answer::Value(value) => Some(value),
            Answer::NotFound => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Value(value) => f.write_str(value),
            Answer::NotFound => f.write_str(NOT_FOUND),
        }
    }
}

pub struct QueryResolver<'a> {
    tree: &'a TagTree,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> QueryResolver<'a> {
    pub fn new(tree: &'a TagTree) -> Self {
        Self {
            tree,
            diagnostics: &NULL_DIAGNOSTICS,
        }
    }

    pub fn with_diagnostics(mut self, diagnostics: &'a dyn Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn resolve(&self, query: &Query) -> Answer {
        self.tree
            .lookup(query.path(), self.diagnostics)
            .and_then(|id| self.tree.tag(id).attribute(query.attribute()))
            .map_or(Answer::NotFound, |value| Answer::Value(value.to_string()))
    }

    /// Answer every query line, stopping at the first malformed one
    pub fn answer_all<I, S>(&self, lines: I) -> Result<Vec<Answer>, HrmlError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| {
                let line = line.as_ref();
                let query = Query::parse(line).ok_or_else(|| HrmlError::MalformedQuery {
                    line_no: index + 1,
                    query: line.to_string(),
                })?;
                Ok(self.resolve(&query))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hrml::parser::parse_document;

    fn tree() -> TagTree {
        parse_document([
            r#"<tag1 value = "HelloWorld">"#,
            r#"<tag2 name = "Name1">"#,
            "</tag2>",
            "</tag1>",
        ])
        .unwrap()
        .tree
    }

    #[test]
    fn test_parse_query() {
        let query = Query::parse("tag1.tag2~name").unwrap();
        assert_eq!(query.path(), ["tag1", "tag2"]);
        assert_eq!(query.attribute(), "name");
        assert_eq!(query.to_string(), "tag1.tag2~name");
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        assert_eq!(Query::parse("tag1.name"), None);
        assert_eq!(Query::parse("tag1~name~more"), None);
        assert_eq!(Query::parse(""), None);
        assert_eq!(Query::parse("a~"), None);
        assert_eq!(Query::parse("~"), None);
    }

    #[test]
    fn test_parse_drops_trailing_empty_segment() {
        let query = Query::parse("a.~x").unwrap();
        assert_eq!(query.path(), ["a"]);
        assert_eq!(query.attribute(), "x");

        let query = Query::parse("~x").unwrap();
        assert!(query.path().is_empty());
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("a.b", '.'), vec!["a", "b"]);
        assert_eq!(tokenize("a.", '.'), vec!["a"]);
        assert_eq!(tokenize("a..b", '.'), vec!["a", "", "b"]);
        assert!(tokenize("", '.').is_empty());
    }

    #[test]
    fn test_resolve() {
        let tree = tree();
        let resolver = QueryResolver::new(&tree);
        let answer = |line: &str| resolver.resolve(&Query::parse(line).unwrap());

        assert_eq!(answer("tag1.tag2~name"), Answer::Value("Name1".into()));
        assert_eq!(answer("tag1~name"), Answer::NotFound);
        assert_eq!(answer("tag1~value"), Answer::Value("HelloWorld".into()));
        assert_eq!(answer("tag2~name"), Answer::NotFound);
        assert_eq!(answer("tag1.tag3.tag2~name"), Answer::NotFound);
    }

    #[test]
    fn test_answer_display() {
        assert_eq!(Answer::Value("x".into()).to_string(), "x");
        assert_eq!(Answer::NotFound.to_string(), "Not Found!");
        assert_eq!(Answer::NotFound.value(), None);
    }

    #[test]
    fn test_answer_all_aborts_on_malformed_line() {
        let tree = tree();
        let err = QueryResolver::new(&tree)
            .answer_all(["tag1~value", "tag1-value", "tag1~value"])
            .unwrap_err();
        assert!(matches!(err, HrmlError::MalformedQuery { line_no: 2, .. }));
    }
}
