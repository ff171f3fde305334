//! Configuration for extraction and proofreading.

/// File extensions the extractor accepts (lowercase, with leading dot).
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".pdf", ".docx", ".doc"];

/// Default upload limit: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Proofreader configuration.
#[derive(Debug, Clone)]
pub struct ProofreaderConfig {
    /// Maximum accepted file size in bytes.
    pub max_file_size: u64,

    /// Sentences with more words than this get a length suggestion.
    pub long_sentence_words: usize,

    /// Sentences with more connectors than this get a simplification suggestion.
    pub max_conjunctions: usize,
}

impl Default for ProofreaderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ProofreaderConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            long_sentence_words: 25,
            max_conjunctions: 3,
        }
    }

    /// Read overrides from the environment.
    ///
    /// Only `PROOFREAD_MAX_FILE_SIZE` (bytes) is honoured; unparsable values
    /// are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(raw) = std::env::var("PROOFREAD_MAX_FILE_SIZE") {
            match raw.trim().parse::<u64>() {
                Ok(size) => config.max_file_size = size,
                Err(e) => log::warn!("Ignoring PROOFREAD_MAX_FILE_SIZE={:?}: {}", raw, e),
            }
        }
        config
    }

    /// Set the maximum accepted file size.
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Set the long-sentence word threshold.
    pub fn with_long_sentence_words(mut self, words: usize) -> Self {
        self.long_sentence_words = words;
        self
    }

    /// Set the connector-count threshold.
    pub fn with_max_conjunctions(mut self, count: usize) -> Self {
        self.max_conjunctions = count;
        self
    }
}
