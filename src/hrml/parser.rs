//! Document parser
//!
//! Builds a [`TagTree`] from markup lines with an explicit state machine:
//!
//! - `Idle`: no tag is open. An opening tag becomes a root; anything else is fatal.
//! - `Inside { stack }`: the innermost open tag is the cursor. An opening tag becomes its
//!   child and is pushed; a closing tag pops it, moving the cursor to the closed tag's parent.
//!   Unrecognized lines only produce a warning.
//!
//! Tags still open at end of input are accepted and reported in [`ParsedDocument::unclosed`].

use super::diagnostics::{Diagnostics, NullDiagnostics};
use super::error::HrmlError;
use super::lines::{self, MarkupLine};
use super::tree::{TagId, TagTree};
use serde::Deserialize;

static NULL_DIAGNOSTICS: NullDiagnostics = NullDiagnostics;

/// How a closing tag's name is checked against the innermost open tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloseTagPolicy {
    /// Any closing tag pops the innermost open tag
    #[default]
    Lenient,
    /// The closing name must match the innermost open tag
    Strict,
}

/// What happens when a tag reuses the name of an existing sibling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// The new tag replaces the earlier one
    #[default]
    Overwrite,
    /// The parse fails with [`HrmlError::DuplicateSibling`]
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    pub close_tags: CloseTagPolicy,
    pub duplicate_siblings: DuplicatePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenTag {
    name: String,
    id: TagId,
}

#[derive(Debug, Default)]
enum ParseState {
    #[default]
    Idle,
    Inside { stack: Vec<OpenTag> },
}

impl ParseState {
    fn top(&self) -> Option<&OpenTag> {
        match self {
            ParseState::Idle => None,
            ParseState::Inside { stack } => stack.last(),
        }
    }

    /// Where the next opened tag goes; `None` means at the root
    fn cursor(&self) -> Option<TagId> {
        self.top().map(|open| open.id)
    }

    fn push(&mut self, open: OpenTag) {
        match self {
            ParseState::Idle => *self = ParseState::Inside { stack: vec![open] },
            ParseState::Inside { stack } => stack.push(open),
        }
    }

    fn pop(&mut self) -> Option<OpenTag> {
        let ParseState::Inside { stack } = self else {
            return None;
        };
        let popped = stack.pop();
        if stack.is_empty() {
            *self = ParseState::Idle;
        }
        popped
    }

    /// Names of still-open tags, outermost first
    fn into_unclosed(self) -> Vec<String> {
        match self {
            ParseState::Idle => Vec::new(),
            ParseState::Inside { stack } => stack.into_iter().map(|open| open.name).collect(),
        }
    }
}

/// Result of a parse
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub tree: TagTree,
    /// Tags left open at end of input, outermost first
    pub unclosed: Vec<String>,
}

impl ParsedDocument {
    pub fn is_well_formed(&self) -> bool {
        self.unclosed.is_empty()
    }
}

pub struct DocumentParser<'a> {
    options: ParserOptions,
    diagnostics: &'a dyn Diagnostics,
}

impl Default for DocumentParser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser<'static> {
    pub fn new() -> Self {
        Self {
            options: ParserOptions::default(),
            diagnostics: &NULL_DIAGNOSTICS,
        }
    }
}

impl<'a> DocumentParser<'a> {
    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_diagnostics<'b>(self, diagnostics: &'b dyn Diagnostics) -> DocumentParser<'b> {
        DocumentParser {
            options: self.options,
            diagnostics,
        }
    }

    /// Parse every line of `lines` as markup
    pub fn parse<I, S>(&self, lines: I) -> Result<ParsedDocument, HrmlError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = TagTree::new();
        let mut state = ParseState::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let line_no = index + 1;

            match lines::classify(line) {
                MarkupLine::Open { name, rest } => {
                    self.open_tag(&mut tree, &mut state, name, rest, line_no)?;
                }
                _ if state.top().is_none() => {
                    return Err(HrmlError::ClosingTagWithoutOpen {
                        line_no,
                        line: line.to_string(),
                    });
                }
                MarkupLine::Close { name } => self.close_tag(&mut state, name, line_no)?,
                MarkupLine::Other => {
                    self.diagnostics
                        .warning(&format!("No tag found for the line called {}", line));
                }
            }
        }

        Ok(ParsedDocument {
            tree,
            unclosed: state.into_unclosed(),
        })
    }

    fn open_tag(
        &self,
        tree: &mut TagTree,
        state: &mut ParseState,
        name: &str,
        rest: &str,
        line_no: usize,
    ) -> Result<(), HrmlError> {
        let parent = state.cursor();
        if self.options.duplicate_siblings == DuplicatePolicy::Reject
            && tree.child_of(parent, name).is_some()
        {
            return Err(HrmlError::DuplicateSibling {
                line_no,
                name: name.to_string(),
            });
        }

        let id = match parent {
            Some(parent) => tree.insert_child(parent, name),
            None => tree.insert_root(name),
        };
        self.diagnostics.info(&format!("Tag created: {}", name));
        state.push(OpenTag {
            name: name.to_string(),
            id,
        });

        let tag = tree.tag_mut(id);
        let mut found = false;
        for (key, value) in lines::attributes(rest) {
            tag.set_attribute(key, value);
            self.diagnostics.info(&format!(
                "Attribute called {} is created with value of {}",
                key, value
            ));
            found = true;
        }
        if !found {
            self.diagnostics
                .warning(&format!("No attribute found for the tag called {}", name));
        }

        Ok(())
    }

    fn close_tag(
        &self,
        state: &mut ParseState,
        name: &str,
        line_no: usize,
    ) -> Result<(), HrmlError> {
        if self.options.close_tags == CloseTagPolicy::Strict {
            if let Some(open) = state.top() {
                if open.name != name {
                    return Err(HrmlError::MismatchedClosingTag {
                        line_no,
                        expected: open.name.clone(),
                        found: name.to_string(),
                    });
                }
            }
        }

        state.pop();
        self.diagnostics.info(&format!("Tag closed: {}", name));
        Ok(())
    }
}

/// Parse with default options and no diagnostics
pub fn parse_document<I, S>(lines: I) -> Result<ParsedDocument, HrmlError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DocumentParser::new().parse(lines)
}
