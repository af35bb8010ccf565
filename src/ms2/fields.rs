//! Field splitting and coercion shared by the record builders.

use std::str::FromStr;

/// Everything after the one-character tag.
pub(super) fn after_tag(line: &str) -> &str {
    // Tags are ASCII, so byte 1 is always a char boundary.
    line.get(1..).unwrap_or("")
}

/// Split the body of an `H` or `I` line into key and value.
///
/// The value is the rest of the line after the key, trimmed, so values made
/// of several whitespace-separated fragments come back as one string.
pub(super) fn key_value(line: &str) -> (&str, &str) {
    let body = after_tag(line).trim();
    match body.split_once(char::is_whitespace) {
        Some((key, value)) => (key, value.trim()),
        None => (body, ""),
    }
}

/// Coerce one field, describing the failure for a diagnostic.
pub(super) fn parse_field<T: FromStr>(name: &str, raw: &str) -> Result<T, String> {
    raw.parse().map_err(|_| format!("invalid {} value '{}'", name, raw))
}

/// Coerce a float field, rejecting `inf`, `NaN` and overflowing literals.
pub(super) fn parse_finite(name: &str, raw: &str) -> Result<f64, String> {
    match parse_field::<f64>(name, raw)? {
        v if v.is_finite() => Ok(v),
        _ => Err(format!("invalid {} value '{}'", name, raw)),
    }
}

/// Next positional field, or a "missing" description.
pub(super) fn require<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    name: &str,
) -> Result<&'a str, String> {
    fields.next().ok_or_else(|| format!("missing {} field", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value_tabs_and_spaces() {
        assert_eq!(key_value("H\tCreationDate\t4/13/2009"), ("CreationDate", "4/13/2009"));
        assert_eq!(key_value("H  CreationDate  4/13/2009"), ("CreationDate", "4/13/2009"));
        assert_eq!(key_value("I\tRetTime\t0.03\r"), ("RetTime", "0.03"));
    }

    #[test]
    fn test_key_value_rejoins_fragments() {
        assert_eq!(
            key_value("H\tExtractorOptions\tMS2/MS1  -c 1"),
            ("ExtractorOptions", "MS2/MS1  -c 1")
        );
    }

    #[test]
    fn test_key_value_missing_value() {
        assert_eq!(key_value("H\tIsolationWindow"), ("IsolationWindow", ""));
        assert_eq!(key_value("H"), ("", ""));
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field::<u32>("FirstScan", "000006"), Ok(6));
        assert_eq!(
            parse_field::<f64>("Mass", "abc"),
            Err("invalid Mass value 'abc'".to_string())
        );
    }

    #[test]
    fn test_parse_finite() {
        assert_eq!(parse_finite("RetTime", "0.03"), Ok(0.03));
        assert_eq!(parse_finite("RetTime", "1.5e6"), Ok(1.5e6));
        for raw in ["inf", "-inf", "NaN", "1e999", "infinity"] {
            assert_eq!(
                parse_finite("RetTime", raw),
                Err(format!("invalid RetTime value '{}'", raw))
            );
        }
    }
}
