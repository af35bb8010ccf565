//! Line classification by leading tag character.

/// Kind of an MS2 line, decided solely by its first character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `H` - run-level header line
    Header,
    /// `S` - start of a new scan
    ScanStart,
    /// `I` - key/value scan attribute
    Info,
    /// `Z` - charge state line
    Charge,
    /// Leading digit - one (mass, intensity) peak
    Peak,
    /// Anything else, including blank lines
    Ignored,
}

/// Classify a single line with its terminator already removed.
pub fn classify(line: &str) -> LineKind {
    match line.as_bytes().first() {
        Some(b'H') => LineKind::Header,
        Some(b'S') => LineKind::ScanStart,
        Some(b'I') => LineKind::Info,
        Some(b'Z') => LineKind::Charge,
        Some(b) if b.is_ascii_digit() => LineKind::Peak,
        _ => LineKind::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(classify("H\tCreationDate\t4/13/2009"), LineKind::Header);
        assert_eq!(classify("S\t000006\t000006\t405.58749"), LineKind::ScanStart);
        assert_eq!(classify("I\tRetTime\t0.03"), LineKind::Info);
        assert_eq!(classify("Z\t7\t2833.0688"), LineKind::Charge);
        assert_eq!(classify("308.8282 15.6"), LineKind::Peak);
        assert_eq!(classify("0.5 1.0"), LineKind::Peak);
    }

    #[test]
    fn test_ignored_lines() {
        assert_eq!(classify(""), LineKind::Ignored);
        assert_eq!(classify("# comment"), LineKind::Ignored);
        assert_eq!(classify("D\tseq\tPEPTIDE"), LineKind::Ignored);
        assert_eq!(classify(" 308.8 15.6"), LineKind::Ignored);
        assert_eq!(classify("h\tlowercase"), LineKind::Ignored);
    }
}
