//! Single-pass driver that assembles classified lines into a document.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, info, warn};

use super::classifier::{classify, LineKind};
use super::config::ParserConfig;
use super::diagnostics::Diagnostic;
use super::error::Ms2Error;
use super::header::HeaderBuilder;
use super::models::{Ms2Document, Scan};
use super::scan::ScanBuilder;

/// Label used in I/O errors for sources without a path
const READER_SOURCE: &str = "<reader>";

/// Where the driver is in the document
#[derive(Debug, Default)]
pub(crate) enum ParserState {
    /// Nothing but ignored lines seen so far
    #[default]
    AwaitingHeader,
    /// Header lines seen, no scan opened yet
    InHeader,
    /// A scan is open and collecting lines
    InScan(ScanBuilder),
}

impl ParserState {
    /// Seal the open scan, if any.
    ///
    /// This is the only place a scan leaves the state machine. It runs on
    /// every `S` line and once at end of input.
    pub(crate) fn seal(&mut self) -> Option<Scan> {
        match std::mem::take(self) {
            ParserState::InScan(builder) => Some(builder.build()),
            other => {
                *self = other;
                None
            }
        }
    }

    fn open_scan(&mut self) -> Option<&mut ScanBuilder> {
        match self {
            ParserState::InScan(builder) => Some(builder),
            _ => None,
        }
    }
}

/// Line-at-a-time MS2 parser
///
/// Feed lines in file order with [`feed_line`](Ms2Parser::feed_line) and call
/// [`finish`](Ms2Parser::finish) at end of input.
///
/// ```
/// use ms2parse::Ms2Parser;
///
/// let mut parser = Ms2Parser::new();
/// for line in ["H\tCreationDate\t4/13/2009", "S\t1\t1\t500.0", "100.0\t20.0"] {
///     parser.feed_line(line)?;
/// }
/// let doc = parser.finish();
/// assert_eq!(doc.scans.len(), 1);
/// # Ok::<(), ms2parse::Ms2Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Ms2Parser {
    config: ParserConfig,
    state: ParserState,
    header: HeaderBuilder,
    scans: Vec<Scan>,
    diagnostics: Vec<Diagnostic>,
    lines_read: usize,
    bytes_read: u64,
}

impl Ms2Parser {
    /// Create a parser with no input limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Number of lines fed so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Feed the next line of input.
    ///
    /// A trailing `\n` or `\r\n` is stripped, but still counts towards
    /// `max_bytes`. Only a configured limit makes this fail; problems with
    /// the line itself become diagnostics.
    pub fn feed_line(&mut self, line: &str) -> Result<(), Ms2Error> {
        self.advance(line.len())?;
        let line = line.trim_end_matches(['\n', '\r']);

        let line_no = self.lines_read;
        let before = self.diagnostics.len();
        let kind = classify(line);

        match kind {
            LineKind::Header => {
                if matches!(self.state, ParserState::InScan(_)) {
                    self.diagnostics
                        .push(Diagnostic::structural(line_no, "header line after scan data"));
                } else {
                    self.state = ParserState::InHeader;
                }
                self.header.apply(line_no, line, &mut self.diagnostics);
            }
            LineKind::ScanStart => {
                self.seal_open_scan();
                let builder = ScanBuilder::start(line_no, line, &mut self.diagnostics);
                self.state = ParserState::InScan(builder);
            }
            LineKind::Info | LineKind::Charge | LineKind::Peak => match self.state.open_scan() {
                Some(builder) => builder.apply(line_no, kind, line, &mut self.diagnostics),
                None => self.diagnostics.push(Diagnostic::structural(
                    line_no,
                    format!("{} line before any scan", kind_name(kind)),
                )),
            },
            LineKind::Ignored => {}
        }

        for diagnostic in &self.diagnostics[before..] {
            warn!("{}", diagnostic);
        }
        Ok(())
    }

    /// Feed a raw line that may not be valid UTF-8.
    ///
    /// Undecodable lines are skipped with a format diagnostic.
    fn feed_raw(&mut self, raw: &[u8]) -> Result<(), Ms2Error> {
        match std::str::from_utf8(raw) {
            Ok(line) => self.feed_line(line),
            Err(_) => {
                self.advance(raw.len())?;
                let diagnostic = Diagnostic::format(self.lines_read, "invalid UTF-8");
                warn!("{}", diagnostic);
                self.diagnostics.push(diagnostic);
                Ok(())
            }
        }
    }

    fn advance(&mut self, len: usize) -> Result<(), Ms2Error> {
        self.lines_read += 1;
        self.bytes_read += len as u64;
        self.check_limits()
    }

    /// Bytes the reader may still hand over: the remaining budget plus one,
    /// so a line that crosses the cap is cut short and trips the limit.
    fn read_budget(&self) -> Option<u64> {
        self.config
            .max_bytes
            .map(|max| max.saturating_sub(self.bytes_read).saturating_add(1))
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &ParserState {
        &self.state
    }

    fn check_limits(&self) -> Result<(), Ms2Error> {
        if let Some(max) = self.config.max_lines {
            if self.lines_read > max {
                return Err(Ms2Error::LimitExceeded(format!("more than {} lines", max)));
            }
        }
        if let Some(max) = self.config.max_bytes {
            if self.bytes_read > max {
                return Err(Ms2Error::LimitExceeded(format!("more than {} bytes", max)));
            }
        }
        Ok(())
    }

    fn seal_open_scan(&mut self) {
        if let Some(scan) = self.state.seal() {
            debug!("Sealed scan {:?} with {} peaks", scan.first_scan, scan.data.len());
            self.scans.push(scan);
        }
    }

    /// Seal the last scan and return the document
    pub fn finish(mut self) -> Ms2Document {
        self.seal_open_scan();
        Ms2Document {
            header: self.header.build(),
            scans: self.scans,
            diagnostics: self.diagnostics,
        }
    }
}

fn kind_name(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Header => "header",
        LineKind::ScanStart => "scan start",
        LineKind::Info => "info",
        LineKind::Charge => "charge",
        LineKind::Peak => "peak",
        LineKind::Ignored => "ignored",
    }
}

/// Parse an MS2 file into memory.
///
/// # Errors
///
/// Returns [`Ms2Error::Io`] if the file cannot be opened or read.
pub fn parse(path: impl AsRef<Path>) -> Result<Ms2Document, Ms2Error> {
    parse_with_config(path, &ParserConfig::default())
}

/// Parse an MS2 file with input limits.
///
/// # Errors
///
/// Returns [`Ms2Error::Io`] if the file cannot be opened or read, and
/// [`Ms2Error::LimitExceeded`] if a configured limit is reached.
pub fn parse_with_config(
    path: impl AsRef<Path>,
    config: &ParserConfig,
) -> Result<Ms2Document, Ms2Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Ms2Error::io(path, e))?;
    let doc = read_document(BufReader::new(file), config, path)?;
    info!("{}: {}", path.display(), doc.summary());
    Ok(doc)
}

/// Parse MS2 text from any buffered reader.
///
/// # Errors
///
/// Returns [`Ms2Error::Io`] if reading fails, and
/// [`Ms2Error::LimitExceeded`] if a configured limit is reached. Lines that
/// are not valid UTF-8 are reported as diagnostics.
pub fn parse_reader<R: BufRead>(reader: R, config: &ParserConfig) -> Result<Ms2Document, Ms2Error> {
    read_document(reader, config, Path::new(READER_SOURCE))
}

fn read_document<R: BufRead>(
    mut reader: R,
    config: &ParserConfig,
    path: &Path,
) -> Result<Ms2Document, Ms2Error> {
    let mut parser = Ms2Parser::with_config(config.clone());
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = match parser.read_budget() {
            Some(budget) => (&mut reader).take(budget).read_until(b'\n', &mut buf),
            None => reader.read_until(b'\n', &mut buf),
        }
        .map_err(|e| Ms2Error::io(path, e))?;
        if read == 0 {
            break;
        }
        parser.feed_raw(&buf)?;
    }
    Ok(parser.finish())
}
