//! Markup line classification
//!
//! Every markup line is one of:
//!
//! - an opening tag: `<name` anywhere in the line, optionally followed by attributes
//! - a closing tag: `</name>` anywhere in the line
//! - anything else
//!
//! Opening tags are checked first. Attribute assignments take the form `key = "value"` or
//! `key = 'value'`; whitespace around `=` is ignored and a value may contain any character
//! except the quote that delimits it. Tag and attribute names are ASCII letters, digits and
//! underscores.

use once_cell::sync::Lazy;
use regex::Regex;

static OPEN_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<([A-Za-z0-9_]+)").unwrap());

static CLOSE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"</([A-Za-z0-9_]+)>").unwrap());

static ATTRIBUTE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([A-Za-z0-9_]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupLine<'a> {
    /// Opening tag; `rest` is the text after the tag name, where attributes live
    Open { name: &'a str, rest: &'a str },
    Close { name: &'a str },
    Other,
}

pub fn classify(line: &str) -> MarkupLine<'_> {
    if let Some(name) = OPEN_TAG_REGEX.captures(line).and_then(|caps| caps.get(1)) {
        return MarkupLine::Open {
            name: name.as_str(),
            rest: &line[name.end()..],
        };
    }

    match CLOSE_TAG_REGEX.captures(line).and_then(|caps| caps.get(1)) {
        Some(name) => MarkupLine::Close {
            name: name.as_str(),
        },
        None => MarkupLine::Other,
    }
}

/// Attribute assignments in `text`, left to right
pub fn attributes(text: &str) -> impl Iterator<Item = (&str, &str)> {
    ATTRIBUTE_REGEX.captures_iter(text).map(|caps| {
        let key = caps.get(1).map_or("", |m| m.as_str());
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map_or("", |m| m.as_str());
        (key, value)
    })
}
