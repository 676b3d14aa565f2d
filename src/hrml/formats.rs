//! Output formats
//!
//! - `answers`: one line per query, the default
//! - `treeviz`: the parsed tag tree drawn with box connectors
//! - `json`: the [`DocumentSnapshot`](super::snapshot::DocumentSnapshot) as pretty JSON

pub mod json;
pub mod treeviz;

pub use json::to_json_str;
pub use treeviz::to_treeviz_str;

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Answers,
    Treeviz,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["answers", "treeviz", "json"];
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "answers" => Ok(OutputFormat::Answers),
            "treeviz" => Ok(OutputFormat::Treeviz),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown format '{}' (available: {})",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Answers => "answers",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}
