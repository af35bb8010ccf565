use anyhow::{Context, Result};
use std::path::PathBuf;

use ms2parse::{Header, ParserConfig};

/// Display information about an MS2 file
pub fn run(file: PathBuf, config: &ParserConfig) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let doc = ms2parse::parse_with_config(&file, config).context("Failed to parse MS2 file")?;
    let summary = doc.summary();

    println!("MS2 File Information");
    println!("====================");
    println!("File: {}", file.display());
    println!();

    println!("Header:");
    for (key, value) in header_fields(&doc.header) {
        println!("  {}: {}", key, value);
    }
    println!();

    println!("Statistics:");
    println!("  Scans: {}", summary.scan_count);
    println!("  Peaks: {}", summary.peak_count);
    println!("  Mean peaks per scan: {:.1}", summary.mean_peaks_per_scan);
    if let (Some(lo), Some(hi)) = (summary.min_precursor_mz, summary.max_precursor_mz) {
        println!("  Precursor m/z range: {:.4} - {:.4}", lo, hi);
    }
    if let (Some(lo), Some(hi)) = (summary.min_ret_time, summary.max_ret_time) {
        println!("  Retention time range: {:.2} - {:.2}", lo, hi);
    }
    println!("  Diagnostics: {}", summary.diagnostic_count);

    Ok(())
}

/// Header entries that are set, in file-format key names
fn header_fields(header: &Header) -> Vec<(String, String)> {
    let typed = [
        ("AcquisitionMethod", header.acquisition_method.clone()),
        ("Comments", header.comments.clone()),
        ("CreationDate", header.creation_date.clone()),
        ("DataType", header.data_type.clone()),
        ("Extractor", header.extractor.clone()),
        ("ExtractorOptions", header.extractor_options.clone()),
        ("ExtractorVersion", header.extractor_version.clone()),
        ("FirstScan", header.first_scan.map(|v| v.to_string())),
        ("InstrumentType", header.instrument_type.clone()),
        ("IsolationWindow", header.isolation_window.clone()),
        ("LastScan", header.last_scan.map(|v| v.to_string())),
        ("ScanType", header.scan_type.clone()),
    ];

    typed
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
        .chain(header.extra.iter().map(|(k, v)| (k.clone(), v.clone())))
        .collect()
}
