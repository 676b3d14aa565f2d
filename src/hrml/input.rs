//! Input protocol
//!
//! ```text
//! N Q            <- header: markup line count, query line count
//! <markup>       <- N lines
//! <query>        <- Q lines
//! ```
//!
//! Lines after the last query are ignored. `\r\n` line endings are accepted.

use super::error::{HrmlError, Section};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input<'a> {
    pub markup: Vec<&'a str>,
    pub queries: Vec<&'a str>,
}

impl<'a> Input<'a> {
    pub fn parse(text: &'a str) -> Result<Self, HrmlError> {
        let mut lines = text.lines();
        let header = lines.next().unwrap_or_default();
        let (markup_count, query_count) =
            parse_header(header).ok_or_else(|| HrmlError::InvalidHeader {
                line: header.to_string(),
            })?;

        let markup = take_section(&mut lines, Section::Markup, markup_count)?;
        let queries = take_section(&mut lines, Section::Query, query_count)?;
        Ok(Self { markup, queries })
    }
}

fn parse_header(line: &str) -> Option<(usize, usize)> {
    let mut counts = line.split_whitespace().map(str::parse::<usize>);
    match (counts.next(), counts.next(), counts.next()) {
        (Some(Ok(markup)), Some(Ok(queries)), None) => Some((markup, queries)),
        _ => None,
    }
}

fn take_section<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    section: Section,
    expected: usize,
) -> Result<Vec<&'a str>, HrmlError> {
    let taken: Vec<&str> = lines.take(expected).collect();
    if taken.len() < expected {
        return Err(HrmlError::Truncated {
            section,
            expected,
            found: taken.len(),
        });
    }
    Ok(taken)
}
