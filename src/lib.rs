//! # ms2parse - MS2 Tandem Mass Spectrometry Parser
//!
//! `ms2parse` reads the MS2 text format, a line-oriented format for storing
//! MS/MS spectra: one run-level header followed by scan records, each with
//! precursor metadata and a list of (mass, intensity) peaks.
//!
//! ## Key Features
//!
//! - **Single Pass**: Lines are classified by their leading tag and assembled
//!   into scans by an explicit state machine, with no lookahead.
//!
//! - **Typed Records**: Every documented header and scan key has a typed field;
//!   unrecognized keys are preserved as strings rather than dropped.
//!
//! - **Recoverable Diagnostics**: Malformed or out-of-place lines never abort a
//!   parse. They are reported with their line number alongside the document.
//!
//! - **Bounded Input**: Optional line and byte caps for untrusted files.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! let doc = ms2parse::parse("run01.ms2")?;
//!
//! println!("Created: {:?}", doc.header.creation_date);
//! for scan in &doc.scans {
//!     println!(
//!         "scan {:?}: precursor {:?}, charge {:?}, {} peaks",
//!         scan.first_scan,
//!         scan.precursor_mz,
//!         scan.charge(),
//!         scan.data.len()
//!     );
//! }
//! for diagnostic in &doc.diagnostics {
//!     eprintln!("{}", diagnostic);
//! }
//! # Ok::<(), ms2parse::Ms2Error>(())
//! ```
//!
//! ## Format
//!
//! | Tag | Fields |
//! |-----|--------|
//! | `H` | key, value |
//! | `S` | first scan, second scan, precursor m/z |
//! | `I` | key, value |
//! | `Z` | charge, mass |
//! | digit | mass, intensity |

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod ms2;

pub use ms2::{
    classify, parse, parse_reader, parse_with_config, Diagnostic, DiagnosticKind, Header,
    LineKind, Ms2Document, Ms2Error, Ms2Parser, ParserConfig, Scan,
};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::ms2::{
        classify, parse, parse_reader, parse_with_config, ChargeState, Diagnostic,
        DiagnosticKind, Header, HeaderBuilder, LineKind, Ms2Document, Ms2Error, Ms2Parser,
        Ms2Summary, ParserConfig, PeakMap, Scan, ScanBuilder,
    };
}
