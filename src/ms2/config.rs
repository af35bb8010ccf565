/// Configuration for parsing MS2 input
///
/// Limits are off by default. Setting them bounds memory and time spent on
/// hostile or runaway input, since the whole document is held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of lines to read
    pub max_lines: Option<usize>,
    /// Maximum number of bytes to read, counting one terminator per line
    pub max_bytes: Option<u64>,
}

impl ParserConfig {
    /// Create a configuration with no limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of lines read
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    /// Cap the number of bytes read
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }
}
