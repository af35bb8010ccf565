use std::fmt;

use serde::Serialize;

use super::models::Ms2Document;

/// Summary statistics for a parsed MS2 document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ms2Summary {
    /// Number of scans
    pub scan_count: usize,
    /// Total number of peaks across all scans
    pub peak_count: usize,
    /// Minimum precursor m/z, or `None` if no scan reported one
    pub min_precursor_mz: Option<f64>,
    /// Maximum precursor m/z, or `None` if no scan reported one
    pub max_precursor_mz: Option<f64>,
    /// Minimum retention time, or `None` if no scan reported one
    pub min_ret_time: Option<f64>,
    /// Maximum retention time, or `None` if no scan reported one
    pub max_ret_time: Option<f64>,
    /// Mean number of peaks per scan
    pub mean_peaks_per_scan: f64,
    /// Number of recoverable diagnostics
    pub diagnostic_count: usize,
}

impl Ms2Summary {
    pub(crate) fn from_document(doc: &Ms2Document) -> Self {
        let peak_count = doc.peak_count();
        let (min_precursor_mz, max_precursor_mz) =
            min_max(doc.scans.iter().filter_map(|s| s.precursor_mz));
        let (min_ret_time, max_ret_time) = min_max(doc.scans.iter().filter_map(|s| s.ret_time));

        #[allow(clippy::cast_precision_loss)]
        let mean_peaks_per_scan = if doc.scans.is_empty() {
            0.0
        } else {
            peak_count as f64 / doc.scans.len() as f64
        };

        Self {
            scan_count: doc.scans.len(),
            peak_count,
            min_precursor_mz,
            max_precursor_mz,
            min_ret_time,
            max_ret_time,
            mean_peaks_per_scan,
            diagnostic_count: doc.diagnostics.len(),
        }
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (Option<f64>, Option<f64>) {
    values.fold((None, None), |(lo, hi), v| {
        (
            Some(lo.map_or(v, |l: f64| l.min(v))),
            Some(hi.map_or(v, |h: f64| h.max(v))),
        )
    })
}

impl fmt::Display for Ms2Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parsed {} scans ({} peaks, {:.1} per scan) with {} diagnostics",
            self.scan_count, self.peak_count, self.mean_peaks_per_scan, self.diagnostic_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ms2::models::Scan;

    fn scan(precursor_mz: f64, ret_time: Option<f64>, peaks: &[(f64, f64)]) -> Scan {
        Scan {
            precursor_mz: Some(precursor_mz),
            ret_time,
            data: peaks.iter().copied().collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_summary_two_scans() {
        let doc = Ms2Document {
            scans: vec![
                scan(500.25, Some(5.5), &[(100.0, 1.0), (200.0, 2.0), (300.0, 3.0)]),
                scan(600.5, Some(6.0), &[(150.0, 4.0)]),
            ],
            ..Default::default()
        };

        let summary = doc.summary();
        assert_eq!(summary.scan_count, 2);
        assert_eq!(summary.peak_count, 4);
        assert_eq!(summary.min_precursor_mz, Some(500.25));
        assert_eq!(summary.max_precursor_mz, Some(600.5));
        assert_eq!(summary.min_ret_time, Some(5.5));
        assert_eq!(summary.max_ret_time, Some(6.0));
        assert!((summary.mean_peaks_per_scan - 2.0).abs() < f64::EPSILON);
        assert_eq!(
            summary.to_string(),
            "Parsed 2 scans (4 peaks, 2.0 per scan) with 0 diagnostics"
        );
    }

    #[test]
    fn test_summary_skips_missing_ret_time() {
        let doc = Ms2Document {
            scans: vec![scan(400.0, None, &[(50.0, 1.0)])],
            ..Default::default()
        };

        let summary = doc.summary();
        assert_eq!(summary.min_precursor_mz, Some(400.0));
        assert!(summary.min_ret_time.is_none());
        assert!(summary.max_ret_time.is_none());
    }

    #[test]
    fn test_summary_empty() {
        let summary = Ms2Document::default().summary();
        assert_eq!(summary.scan_count, 0);
        assert_eq!(summary.peak_count, 0);
        assert!(summary.min_precursor_mz.is_none());
        assert_eq!(summary.mean_peaks_per_scan, 0.0);
    }
}
