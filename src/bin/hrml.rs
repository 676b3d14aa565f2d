//! Command-line interface for hrml
//! Reads an HRML input (header, markup lines, query lines) and prints one answer per query.
//!
//! Usage:
//!   hrml [`<path>`] [-l `<level>`] [--strict] [--config `<file>`] [--emit `<format>`]
//!
//! Input is read from stdin when no path is given. Diagnostics go to stderr so that stdout
//! only carries answers.

use clap::{Arg, ArgAction, Command};
use hrml::hrml::config::{HrmlConfig, LogLevel, Loader};
use hrml::hrml::formats::{self, OutputFormat};
use hrml::hrml::{
    DocumentParser, HrmlError, Input, ParserOptions, QueryResolver, TracingDiagnostics,
};
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("hrml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse an HRML document and answer attribute queries")
        .arg(
            Arg::new("path")
                .help("Path to the input file (reads stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .short('l')
                .help("Diagnostics verbosity")
                .value_parser(["off", "w", "warning", "i", "info"]),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Require closing tags to match the innermost open tag")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("emit")
                .long("emit")
                .short('e')
                .help("What to print: query answers, or the parsed tree")
                .value_parser(OutputFormat::NAMES)
                .default_value("answers"),
        )
        .get_matches();

    let config = load_config(
        matches.get_one::<String>("config"),
        matches.get_one::<String>("log-level"),
        matches.get_flag("strict"),
    )
    .unwrap_or_else(|e| {
        eprintln!("{}", HrmlError::from(e));
        std::process::exit(1);
    });
    init_logging(config.log.level);

    let source = read_source(matches.get_one::<String>("path")).unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    });

    let format = matches
        .get_one::<String>("emit")
        .and_then(|name| name.parse::<OutputFormat>().ok())
        .unwrap_or_default();

    let output = execute(&source, ParserOptions::from(&config.parser), format)
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        });

    print!("{}", output);
}

fn load_config(
    path: Option<&String>,
    level: Option<&String>,
    strict: bool,
) -> Result<HrmlConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    if let Some(level) = level {
        loader = loader.set_override("log.level", level.as_str())?;
    }
    if strict {
        loader = loader.set_override("parser.close_tags", "strict")?;
    }
    loader.build()
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over the configured level.
fn init_logging(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn read_source(path: Option<&String>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn execute(source: &str, options: ParserOptions, format: OutputFormat) -> Result<String, HrmlError> {
    let diagnostics = TracingDiagnostics;
    let input = Input::parse(source)?;
    let document = DocumentParser::new()
        .with_options(options)
        .with_diagnostics(&diagnostics)
        .parse(&input.markup)?;

    if !document.is_well_formed() {
        tracing::warn!(
            target: "hrml",
            "Unclosed tags at end of input: {}",
            document.unclosed.join(", ")
        );
    }

    match format {
        OutputFormat::Answers => {
            let answers = QueryResolver::new(&document.tree)
                .with_diagnostics(&diagnostics)
                .answer_all(&input.queries)?;
            Ok(answers.iter().map(|answer| format!("{}\n", answer)).collect())
        }
        OutputFormat::Treeviz => Ok(formats::to_treeviz_str(&document.tree)),
        OutputFormat::Json => Ok(formats::to_json_str(&document.tree)? + "\n"),
    }
}
