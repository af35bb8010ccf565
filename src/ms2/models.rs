//! Data models for parsed MS2 documents
//!
//! These models hold the typed result of a parse: one [`Header`], the scans
//! in file order, and the recoverable diagnostics collected along the way.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use serde::{Serialize, Serializer};

use super::diagnostics::Diagnostic;
use super::summary::Ms2Summary;

/// A fully parsed MS2 file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ms2Document {
    /// Run-level metadata from `H` lines
    pub header: Header,

    /// Scans in order of appearance
    pub scans: Vec<Scan>,

    /// Recoverable per-line problems, in line order
    pub diagnostics: Vec<Diagnostic>,
}

impl Ms2Document {
    /// Whether any line was malformed or out of place
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Total number of peaks across all scans
    pub fn peak_count(&self) -> usize {
        self.scans.iter().map(|s| s.data.len()).sum()
    }

    /// Compute run summary statistics
    pub fn summary(&self) -> Ms2Summary {
        Ms2Summary::from_document(self)
    }
}

/// Run-level metadata
///
/// Every documented key has a typed field; anything else lands in
/// [`extra`](Header::extra).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Header {
    /// `AcquisitionMethod`
    pub acquisition_method: Option<String>,
    /// `Comments`
    pub comments: Option<String>,
    /// `CreationDate`, kept verbatim
    pub creation_date: Option<String>,
    /// `DataType` (e.g. "Centroid")
    pub data_type: Option<String>,
    /// `Extractor`
    pub extractor: Option<String>,
    /// `ExtractorOptions`
    pub extractor_options: Option<String>,
    /// `ExtractorVersion`
    pub extractor_version: Option<String>,
    /// `FirstScan`
    pub first_scan: Option<u32>,
    /// `InstrumentType`
    pub instrument_type: Option<String>,
    /// `IsolationWindow`
    pub isolation_window: Option<String>,
    /// `LastScan`
    pub last_scan: Option<u32>,
    /// `ScanType`
    pub scan_type: Option<String>,
    /// Unrecognized keys
    pub extra: BTreeMap<String, String>,
}

/// One charge state reported on a `Z` line
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChargeState {
    /// Precursor charge
    pub charge: i32,
    /// Singly protonated precursor mass for this charge
    pub mass: f64,
}

/// One MS/MS spectrum
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scan {
    /// First scan number from the `S` line
    pub first_scan: Option<u32>,
    /// Second scan number from the `S` line
    pub second_scan: Option<u32>,
    /// Precursor m/z from the `S` line
    pub precursor_mz: Option<f64>,

    /// Retention time (`RetTime` / `RTime`)
    pub ret_time: Option<f64>,
    /// `IonInjectionTime`
    pub ion_injection_time: Option<f64>,
    /// `PrecursorInt`
    pub precursor_int: Option<f64>,
    /// `PrecursorScan`
    pub precursor_scan: Option<u32>,
    /// `PrecursorFile`
    pub precursor_file: Option<String>,
    /// `ActivationType` (CID, HCD, ETD, ...)
    pub activation_type: Option<String>,
    /// Per-scan `InstrumentType`, overriding the header value
    pub instrument_type: Option<String>,
    /// Unrecognized `I` keys
    pub extra: BTreeMap<String, String>,

    /// Charge states in the order their `Z` lines appeared
    pub charge_states: Vec<ChargeState>,

    /// Peaks keyed by mass
    pub data: PeakMap,
}

impl Scan {
    /// Charge from the last `Z` line, if any
    pub fn charge(&self) -> Option<i32> {
        self.charge_states.last().map(|z| z.charge)
    }

    /// Mass from the last `Z` line, if any
    pub fn mass(&self) -> Option<f64> {
        self.charge_states.last().map(|z| z.mass)
    }

    /// Instrument type for this scan, falling back to the run header
    pub fn instrument_type_or<'a>(&'a self, header: &'a Header) -> Option<&'a str> {
        self.instrument_type
            .as_deref()
            .or(header.instrument_type.as_deref())
    }
}

/// Mass to intensity mapping; a repeated mass overwrites the earlier intensity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeakMap {
    peaks: BTreeMap<OrderedFloat<f64>, f64>,
}

impl PeakMap {
    /// Create an empty peak map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a peak, returning the intensity it replaced
    pub fn insert(&mut self, mass: f64, intensity: f64) -> Option<f64> {
        self.peaks.insert(OrderedFloat(mass), intensity)
    }

    /// Intensity at exactly this mass
    pub fn get(&self, mass: f64) -> Option<f64> {
        self.peaks.get(&OrderedFloat(mass)).copied()
    }

    /// Number of distinct masses
    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    /// Whether no peaks were recorded
    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    /// Iterate `(mass, intensity)` pairs in ascending mass order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.peaks.iter().map(|(mass, intensity)| (mass.0, *intensity))
    }

    /// Most intense peak as `(mass, intensity)`
    pub fn base_peak(&self) -> Option<(f64, f64)> {
        self.iter().max_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Sum of all intensities
    pub fn total_ion_current(&self) -> f64 {
        self.peaks.values().sum()
    }
}

impl FromIterator<(f64, f64)> for PeakMap {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut map = PeakMap::new();
        for (mass, intensity) in iter {
            map.insert(mass, intensity);
        }
        map
    }
}

// JSON object keys must be strings, so peaks go out as `[[mass, intensity], ...]`.
impl Serialize for PeakMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
