use std::fmt;

use serde::Serialize;

/// Category of a recoverable per-line problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Field count or field type does not match the line's grammar
    Format,
    /// Line appears where the document structure does not allow it
    Structural,
    /// A header key was set more than once; the last value was kept
    DuplicateHeaderKey,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Format => write!(f, "format"),
            DiagnosticKind::Structural => write!(f, "structural"),
            DiagnosticKind::DuplicateHeaderKey => write!(f, "duplicate header key"),
        }
    }
}

/// One recoverable problem found while parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based line number in the input
    pub line: usize,
    /// Problem category
    pub kind: DiagnosticKind,
    /// Human-readable description
    pub message: String,
}

impl Diagnostic {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            kind: DiagnosticKind::Format,
            message: message.into(),
        }
    }

    pub(crate) fn structural(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            kind: DiagnosticKind::Structural,
            message: message.into(),
        }
    }

    pub(crate) fn duplicate_header_key(line: usize, key: &str) -> Self {
        Self {
            line,
            kind: DiagnosticKind::DuplicateHeaderKey,
            message: format!("header key '{}' repeated, keeping the later value", key),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: [{}] {}", self.line, self.kind, self.message)
    }
}
