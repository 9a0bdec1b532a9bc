//! Parsing options and configuration.

use super::CleanupOptions;

/// Options for reading converter output.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Whether to split off the leading metadata paragraphs
    pub extract_metadata: bool,

    /// Whether to process batches of documents in parallel
    pub parallel: bool,

    /// Text cleanup applied before splitting
    pub cleanup: CleanupOptions,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (recover from malformed structure).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Enable or disable metadata extraction.
    pub fn with_metadata(mut self, extract: bool) -> Self {
        self.extract_metadata = extract;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = cleanup;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            extract_metadata: true,
            parallel: true,
            cleanup: CleanupOptions::default(),
        }
    }
}

/// Error handling mode for structural errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Abort the document on unknown list markers or duplicate footnotes
    #[default]
    Strict,
    /// Log the problem and keep going
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .lenient()
            .with_metadata(false)
            .sequential();

        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(!options.extract_metadata);
        assert!(!options.parallel);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(options.parallel);
        assert!(options.extract_metadata);
        assert!(options.cleanup.decode_entities);
    }
}
