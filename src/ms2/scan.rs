//! Builder for a single scan record.

use super::classifier::LineKind;
use super::diagnostics::Diagnostic;
use super::fields::{after_tag, key_value, parse_field, parse_finite, require};
use super::models::{ChargeState, Scan};

/// Accumulates the lines of one scan, from its `S` line to the next
#[derive(Debug, Default)]
pub struct ScanBuilder {
    scan: Scan,
}

impl ScanBuilder {
    /// Open a scan from its `S` line.
    ///
    /// A scan is always opened, even when the line is malformed; the
    /// fields that could not be read stay unset.
    pub fn start(line_no: usize, line: &str, diagnostics: &mut Vec<Diagnostic>) -> Self {
        let mut scan = Scan::default();
        if let Err(message) = read_start_fields(&mut scan, line) {
            diagnostics.push(Diagnostic::format(line_no, message));
        }
        Self { scan }
    }

    /// Apply an `I`, `Z` or peak line to this scan.
    pub fn apply(
        &mut self,
        line_no: usize,
        kind: LineKind,
        line: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let result = match kind {
            LineKind::Info => self.apply_info(line),
            LineKind::Charge => self.apply_charge(line),
            LineKind::Peak => self.apply_peak(line),
            LineKind::Header | LineKind::ScanStart | LineKind::Ignored => Ok(()),
        };
        if let Err(message) = result {
            diagnostics.push(Diagnostic::format(line_no, message));
        }
    }

    fn apply_info(&mut self, line: &str) -> Result<(), String> {
        let (key, value) = key_value(line);
        if key.is_empty() {
            return Err("info line without a key".to_string());
        }
        if value.is_empty() {
            return Err(format!("info key '{}' has no value", key));
        }

        let s = &mut self.scan;
        let text = || Some(value.to_string());
        match key {
            "RetTime" | "RTime" => s.ret_time = Some(parse_finite(key, value)?),
            "IonInjectionTime" => s.ion_injection_time = Some(parse_finite(key, value)?),
            "PrecursorInt" => s.precursor_int = Some(parse_finite(key, value)?),
            "PrecursorScan" => s.precursor_scan = Some(parse_field(key, value)?),
            "PrecursorFile" => s.precursor_file = text(),
            "ActivationType" => s.activation_type = text(),
            "InstrumentType" => s.instrument_type = text(),
            _ => {
                s.extra.insert(key.to_string(), value.to_string());
            }
        }
        Ok(())
    }

    fn apply_charge(&mut self, line: &str) -> Result<(), String> {
        let mut fields = after_tag(line).split_whitespace();
        let charge = parse_field("Charge", require(&mut fields, "Charge")?)?;
        let mass = parse_finite("Mass", require(&mut fields, "Mass")?)?;
        self.scan.charge_states.push(ChargeState { charge, mass });
        Ok(())
    }

    fn apply_peak(&mut self, line: &str) -> Result<(), String> {
        let mut fields = line.split_whitespace();
        let mass = parse_finite("peak mass", require(&mut fields, "peak mass")?)?;
        let intensity = parse_finite("peak intensity", require(&mut fields, "peak intensity")?)?;
        self.scan.data.insert(mass, intensity);
        Ok(())
    }

    /// Seal the scan
    pub fn build(self) -> Scan {
        self.scan
    }
}

fn read_start_fields(scan: &mut Scan, line: &str) -> Result<(), String> {
    let mut fields = after_tag(line).split_whitespace();
    scan.first_scan = Some(parse_field("FirstScan", require(&mut fields, "FirstScan")?)?);
    scan.second_scan = Some(parse_field("SecondScan", require(&mut fields, "SecondScan")?)?);
    scan.precursor_mz = Some(parse_finite("PrecursorMZ", require(&mut fields, "PrecursorMZ")?)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ms2::classifier::classify;

    fn build(start: &str, lines: &[&str]) -> (Scan, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let mut builder = ScanBuilder::start(1, start, &mut diagnostics);
        for (i, line) in lines.iter().enumerate() {
            builder.apply(i + 2, classify(line), line, &mut diagnostics);
        }
        (builder.build(), diagnostics)
    }

    #[test]
    fn test_start_line() {
        let (scan, diagnostics) = build("S\t000006\t000006\t405.58749", &[]);
        assert!(diagnostics.is_empty());
        assert_eq!(scan.first_scan, Some(6));
        assert_eq!(scan.second_scan, Some(6));
        assert_eq!(scan.precursor_mz, Some(405.58749));
        assert!(scan.data.is_empty());
    }

    #[test]
    fn test_malformed_start_line_still_opens_scan() {
        let (scan, diagnostics) = build("S\t12\tabc\t500.0", &["100.0 1.0"]);
        assert_eq!(scan.first_scan, Some(12));
        assert_eq!(scan.second_scan, None);
        assert_eq!(scan.precursor_mz, None);
        assert_eq!(scan.data.len(), 1);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 1);
        assert!(diagnostics[0].message.contains("SecondScan"));

        let (scan, diagnostics) = build("S", &[]);
        assert_eq!(scan.first_scan, None);
        assert_eq!(diagnostics[0].message, "missing FirstScan field");
    }

    #[test]
    fn test_info_lines() {
        let (scan, diagnostics) = build(
            "S\t1\t1\t500.0",
            &[
                "I\tRetTime\t0.03",
                "I\tIonInjectionTime\t12.5",
                "I\tPrecursorInt\t1.5e6",
                "I\tPrecursorScan\t3",
                "I\tPrecursorFile\trun01.ms1",
                "I\tActivationType\tCID",
                "I\tInstrumentType\tITMS",
                "I\tNativeID\tcontrollerType=0 controllerNumber=1 scan=1",
            ],
        );

        assert!(diagnostics.is_empty());
        assert_eq!(scan.ret_time, Some(0.03));
        assert_eq!(scan.ion_injection_time, Some(12.5));
        assert_eq!(scan.precursor_int, Some(1.5e6));
        assert_eq!(scan.precursor_scan, Some(3));
        assert_eq!(scan.precursor_file.as_deref(), Some("run01.ms1"));
        assert_eq!(scan.activation_type.as_deref(), Some("CID"));
        assert_eq!(scan.instrument_type.as_deref(), Some("ITMS"));
        assert_eq!(
            scan.extra.get("NativeID").map(String::as_str),
            Some("controllerType=0 controllerNumber=1 scan=1")
        );
    }

    #[test]
    fn test_rtime_alias() {
        let (scan, _) = build("S\t1\t1\t500.0", &["I\tRTime\t5.50"]);
        assert_eq!(scan.ret_time, Some(5.5));
    }

    #[test]
    fn test_bad_info_value_not_applied() {
        let (scan, diagnostics) =
            build("S\t1\t1\t500.0", &["I\tRetTime\tsoon", "I\tShort"]);
        assert_eq!(scan.ret_time, None);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].line, 2);
        assert_eq!(diagnostics[1].line, 3);
    }

    #[test]
    fn test_multiple_charge_states_kept() {
        let (scan, diagnostics) =
            build("S\t1\t1\t500.0", &["Z\t2\t999.49", "Z\t3\t1498.73"]);
        assert!(diagnostics.is_empty());
        assert_eq!(
            scan.charge_states,
            vec![
                ChargeState { charge: 2, mass: 999.49 },
                ChargeState { charge: 3, mass: 1498.73 },
            ]
        );
        assert_eq!(scan.charge(), Some(3));
    }

    #[test]
    fn test_malformed_charge_lines() {
        let (scan, diagnostics) = build("S\t1\t1\t500.0", &["Z", "Z\t2", "Z\tx\t100.0"]);
        assert!(scan.charge_states.is_empty());
        assert_eq!(diagnostics.len(), 3);
        assert_eq!(diagnostics[0].message, "missing Charge field");
        assert_eq!(diagnostics[1].message, "missing Mass field");
        assert_eq!(diagnostics[2].message, "invalid Charge value 'x'");
    }

    #[test]
    fn test_peaks_last_write_wins() {
        let (scan, diagnostics) = build(
            "S\t1\t1\t500.0",
            &["308.8282 15.6", "308.8282\t15.6", "390.5037 12.6", "390.5037 99.0"],
        );
        assert!(diagnostics.is_empty());
        assert_eq!(scan.data.len(), 2);
        assert_eq!(scan.data.get(308.8282), Some(15.6));
        assert_eq!(scan.data.get(390.5037), Some(99.0));
    }

    #[test]
    fn test_peak_extra_columns_ignored() {
        let (scan, diagnostics) = build("S\t1\t1\t500.0", &["100.0 200.0 2 0.98"]);
        assert!(diagnostics.is_empty());
        assert_eq!(scan.data.get(100.0), Some(200.0));
    }

    #[test]
    fn test_malformed_peaks() {
        let (scan, diagnostics) = build("S\t1\t1\t500.0", &["100.0", "1bad 5.0", "100.0 x"]);
        assert!(scan.data.is_empty());
        assert_eq!(diagnostics.len(), 3);
        assert_eq!(diagnostics[0].message, "missing peak intensity field");
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let (scan, diagnostics) = build(
            "S\t1\t1\tinf",
            &["I\tRetTime\tinf", "Z\t2\tNaN", "100.0 NaN", "1e999 5.0", "200.0 7.0"],
        );
        assert_eq!(scan.precursor_mz, None);
        assert_eq!(scan.ret_time, None);
        assert!(scan.charge_states.is_empty());
        assert_eq!(scan.data.len(), 1);
        assert_eq!(scan.data.get(200.0), Some(7.0));

        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "invalid PrecursorMZ value 'inf'",
                "invalid RetTime value 'inf'",
                "invalid Mass value 'NaN'",
                "invalid peak intensity value 'NaN'",
                "invalid peak mass value '1e999'",
            ]
        );
    }
}
