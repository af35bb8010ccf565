//! # MS2 Parser Module
//!
//! Parses the MS2 text format for tandem mass spectrometry data into an
//! in-memory [`Ms2Document`].
//!
//! ## MS2 Structure
//!
//! ```text
//! H  key  value            (run header, before the first scan)
//! S  first  second  precursor_mz
//! I  key  value            (scan attributes)
//! Z  charge  mass          (one line per reported charge state)
//! mass  intensity          (peaks, one per line)
//! S  ...
//! ```
//!
//! ## Error Model
//!
//! Only I/O failures and configured input limits abort a parse. Malformed or
//! out-of-place lines are skipped and reported as [`Diagnostic`]s on the
//! returned document, so one bad line never costs the rest of the file.

mod classifier;
mod config;
mod diagnostics;
mod error;
mod fields;
mod header;
mod models;
mod parser;
mod scan;
mod summary;


pub use classifier::{classify, LineKind};
pub use config::ParserConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::Ms2Error;
pub use header::HeaderBuilder;
pub use models::{ChargeState, Header, Ms2Document, PeakMap, Scan};
pub use parser::{parse, parse_reader, parse_with_config, Ms2Parser};
pub use scan::ScanBuilder;
pub use summary::Ms2Summary;
