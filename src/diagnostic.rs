//! Diagnostic types and the sink checks report through.

use serde::{Deserialize, Serialize};

/// Severity level for diagnostics
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message
    Info,
    /// Warning - potential issue
    #[default]
    Warning,
    /// Error - definite problem
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" | "hint" | "note" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" | "err" => Ok(Severity::Error),
            _ => Err(()),
        }
    }
}

/// Source code location
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (0-based)
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A lint finding, enriched by the engine with check identity, resolved
/// message text, and effective severity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Id of the check that produced this finding
    pub check: String,
    /// Message key as reported by the check (e.g. "covariant.equals")
    pub message_key: String,
    /// Resolved message text
    pub message: String,
    /// Effective severity
    pub severity: Severity,
    /// Where the finding points
    pub location: Location,
}

impl Diagnostic {
    pub fn new(
        check: &str,
        message_key: &str,
        message: &str,
        severity: Severity,
        location: Location,
    ) -> Self {
        Self {
            check: check.to_string(),
            message_key: message_key.to_string(),
            message: message.to_string(),
            severity,
            location,
        }
    }
}

/// Emission primitive exposed to checks.
///
/// Checks report raw findings only: a position and a message key. Message
/// text resolution, severity, and any suppression or formatting happen
/// downstream, outside the check.
pub trait DiagnosticSink {
    fn report(&mut self, line: usize, column: usize, message_key: &str);
}

/// A raw finding as reported by a check, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub line: usize,
    pub column: usize,
    pub message_key: String,
}

/// Sink that buffers findings for later enrichment.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    findings: Vec<Finding>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn report(&mut self, line: usize, column: usize, message_key: &str) {
        self.findings.push(Finding {
            line,
            column,
            message_key: message_key.to_string(),
        });
    }
}
