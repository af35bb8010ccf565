use anyhow::Result;
use log::info;
use std::fmt;
use std::path::PathBuf;

#[cfg(feature = "colorized_output")]
use console::style;

use ms2parse::{Diagnostic, DiagnosticKind, ParserConfig};

/// Diagnostics found in one MS2 file
struct CheckReport {
    file_path: String,
    scan_count: usize,
    diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }

    fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Format the report with colors (requires console feature)
    fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();

            output.push_str(&format!("{}\n", style("MS2 Check Report").bold().cyan()));
            output.push_str(&format!("{}\n", style("================").cyan()));
            output.push_str(&format!("{}: {}\n", style("File").bold(), self.file_path));
            output.push_str(&format!("{}: {}\n\n", style("Scans").bold(), self.scan_count));

            for diagnostic in &self.diagnostics {
                let kind = match diagnostic.kind {
                    DiagnosticKind::Format | DiagnosticKind::Structural => {
                        style(diagnostic.kind.to_string()).red()
                    }
                    DiagnosticKind::DuplicateHeaderKey => {
                        style(diagnostic.kind.to_string()).yellow()
                    }
                };
                output.push_str(&format!(
                    "{} [{}] {}\n",
                    style(format!("line {}:", diagnostic.line)).bold(),
                    kind,
                    diagnostic.message
                ));
            }

            output.push('\n');
            output.push_str(&format!(
                "{}: {} format, {} structural, {} duplicate header keys\n",
                style("Summary").bold(),
                style(self.count(DiagnosticKind::Format)).red(),
                style(self.count(DiagnosticKind::Structural)).red(),
                style(self.count(DiagnosticKind::DuplicateHeaderKey)).yellow()
            ));

            if self.is_clean() {
                output.push_str(&format!("{}\n", style("Check PASSED").green().bold()));
            } else {
                output.push_str(&format!("{}\n", style("Check FAILED").red().bold()));
            }

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MS2 Check Report")?;
        writeln!(f, "================")?;
        writeln!(f, "File: {}", self.file_path)?;
        writeln!(f, "Scans: {}", self.scan_count)?;
        writeln!(f)?;

        for diagnostic in &self.diagnostics {
            writeln!(f, "{}", diagnostic)?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Summary: {} format, {} structural, {} duplicate header keys",
            self.count(DiagnosticKind::Format),
            self.count(DiagnosticKind::Structural),
            self.count(DiagnosticKind::DuplicateHeaderKey)
        )?;

        if self.is_clean() {
            writeln!(f, "Check PASSED")
        } else {
            writeln!(f, "Check FAILED")
        }
    }
}

/// Report every diagnostic in an MS2 file
pub fn run(file: PathBuf, config: &ParserConfig) -> Result<()> {
    info!("MS2 Check");
    info!("=========");
    info!("File: {}", file.display());

    match ms2parse::parse_with_config(&file, config) {
        Ok(doc) => {
            let report = CheckReport {
                file_path: file.display().to_string(),
                scan_count: doc.scans.len(),
                diagnostics: doc.diagnostics,
            };
            println!("{}", report.format_colored());

            // Exit with error code if any line was defective
            if !report.is_clean() {
                std::process::exit(1);
            }

            Ok(())
        }
        Err(e) => {
            eprintln!("Check error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(text: &str) -> CheckReport {
        let doc = ms2parse::parse_reader(text.as_bytes(), &ParserConfig::default()).unwrap();
        CheckReport {
            file_path: "test.ms2".to_string(),
            scan_count: doc.scans.len(),
            diagnostics: doc.diagnostics,
        }
    }

    #[test]
    fn test_clean_report() {
        let report = report("H\tCreationDate\t4/13/2009\nS\t1\t1\t100.0\n50.0 1.0\n");
        assert!(report.is_clean());
        let text = report.to_string();
        assert!(text.contains("Scans: 1"));
        assert!(text.contains("Check PASSED"));
    }

    #[test]
    fn test_failed_report_counts_kinds() {
        let report = report("50.0 1.0\nH\tA\t1\nH\tA\t2\nS\t1\t1\t100.0\nZ\tx\t1.0\n");
        assert_eq!(report.count(DiagnosticKind::Structural), 1);
        assert_eq!(report.count(DiagnosticKind::DuplicateHeaderKey), 1);
        assert_eq!(report.count(DiagnosticKind::Format), 1);

        let text = report.to_string();
        assert!(text.contains("line 1: [structural] peak line before any scan"));
        assert!(text.contains("Summary: 1 format, 1 structural, 1 duplicate header keys"));
        assert!(text.contains("Check FAILED"));
    }
}
