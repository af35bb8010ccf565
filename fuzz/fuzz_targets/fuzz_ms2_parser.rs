#![no_main]

use libfuzzer_sys::fuzz_target;
use ms2parse::{parse_reader, Ms2Error, ParserConfig};

fuzz_target!(|data: &[u8]| {
    // In-memory input never fails to read, so only a limit can stop the parse;
    // it must never panic.
    let config = ParserConfig::new().with_max_lines(100_000);
    match parse_reader(data, &config) {
        Ok(doc) => {
            // Every decodable S line opens exactly one scan
            let s_lines = data
                .split(|&b| b == b'\n')
                .filter(|line| line.first() == Some(&b'S') && std::str::from_utf8(line).is_ok())
                .count();
            assert_eq!(doc.scans.len(), s_lines);
        }
        Err(Ms2Error::Io { .. }) | Err(Ms2Error::LimitExceeded(_)) => {}
    }
});
