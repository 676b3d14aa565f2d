//! Injected logging capability
//!
//! The parser and resolver report advisory conditions (tags without attributes, unrecognized
//! lines, missing path segments) through [`Diagnostics`]. Callers pick the sink:
//!
//! - [`NullDiagnostics`]: drops everything, the default
//! - [`TracingDiagnostics`]: forwards to `tracing` under the `hrml` target
//! - [`CollectingDiagnostics`]: keeps messages in memory, for tests

use std::cell::RefCell;

/// Sink for informational and warning messages
pub trait Diagnostics {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn warning(&self, message: &str) {
        (**self).warning(message)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn info(&self, _message: &str) {}

    fn warning(&self, _message: &str) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn info(&self, message: &str) {
        tracing::info!(target: "hrml", "{}", message);
    }

    fn warning(&self, message: &str) {
        tracing::warn!(target: "hrml", "{}", message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// Records every message with its severity, in emission order
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    entries: RefCell<Vec<(Severity, String)>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries.borrow().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.with_severity(Severity::Info)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.with_severity(Severity::Warning)
    }

    fn with_severity(&self, severity: Severity) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn info(&self, message: &str) {
        self.entries
            .borrow_mut()
            .push((Severity::Info, message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.entries
            .borrow_mut()
            .push((Severity::Warning, message.to_string()));
    }
}
