//! Builder for the run-level header.

use std::collections::HashSet;

use super::diagnostics::Diagnostic;
use super::fields::{key_value, parse_field};
use super::models::Header;

/// Accumulates `H` lines into a [`Header`]
#[derive(Debug, Default)]
pub struct HeaderBuilder {
    header: Header,
    seen: HashSet<String>,
}

impl HeaderBuilder {
    /// Create a builder for an empty header
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one `H` line.
    ///
    /// Lines without a value or with an unparseable integer leave the field
    /// unset and record a format diagnostic. A key set twice keeps the later
    /// value and records a duplicate-key diagnostic.
    pub fn apply(&mut self, line_no: usize, line: &str, diagnostics: &mut Vec<Diagnostic>) {
        let (key, value) = key_value(line);
        if key.is_empty() {
            diagnostics.push(Diagnostic::format(line_no, "header line without a key"));
            return;
        }
        if value.is_empty() {
            diagnostics.push(Diagnostic::format(
                line_no,
                format!("header key '{}' has no value", key),
            ));
            return;
        }

        if let Err(message) = self.set(key, value) {
            diagnostics.push(Diagnostic::format(line_no, message));
            return;
        }
        if !self.seen.insert(key.to_string()) {
            diagnostics.push(Diagnostic::duplicate_header_key(line_no, key));
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let h = &mut self.header;
        let text = || Some(value.to_string());
        match key {
            "AcquisitionMethod" => h.acquisition_method = text(),
            "Comments" => h.comments = text(),
            "CreationDate" => h.creation_date = text(),
            "DataType" => h.data_type = text(),
            "Extractor" => h.extractor = text(),
            "ExtractorOptions" => h.extractor_options = text(),
            "ExtractorVersion" => h.extractor_version = text(),
            "FirstScan" => h.first_scan = Some(parse_field(key, value)?),
            "InstrumentType" => h.instrument_type = text(),
            "IsolationWindow" => h.isolation_window = text(),
            "LastScan" => h.last_scan = Some(parse_field(key, value)?),
            "ScanType" => h.scan_type = text(),
            _ => {
                h.extra.insert(key.to_string(), value.to_string());
            }
        }
        Ok(())
    }

    /// Finish and return the header
    pub fn build(self) -> Header {
        self.header
    }
}
