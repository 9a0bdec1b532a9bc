//! Text cleanup applied to converter output before restructuring.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Minimal cleanup: whitespace collapsing and entity decoding only
    Minimal,
    /// Standard cleanup: everything, including Unicode NFC normalization
    #[default]
    Standard,
}

/// Options for text cleanup.
#[derive(Debug, Clone)]
pub struct CleanupOptions {
    /// Replace `<strong> </strong>` (bold whitespace) with a plain space
    pub remove_empty_bold: bool,

    /// Collapse every whitespace run into a single space
    pub collapse_whitespace: bool,

    /// Decode HTML entities (`&amp;`, `&nbsp;`, numeric references)
    pub decode_entities: bool,

    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            remove_empty_bold: true,
            collapse_whitespace: true,
            decode_entities: true,
            normalize_unicode: false,
            remove_replacement_char: false,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            remove_empty_bold: true,
            collapse_whitespace: true,
            decode_entities: true,
            normalize_unicode: true,
            remove_replacement_char: true,
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Text cleanup pipeline.
#[derive(Debug, Clone)]
pub struct CleanupPipeline {
    options: CleanupOptions,
    whitespace_regex: Regex,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self {
            options,
            whitespace_regex: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Process text through the cleanup pipeline.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.remove_empty_bold {
            result = result.replace("<strong> </strong>", " ");
        }

        // Whitespace runs are collapsed before entities are decoded, so a
        // decoded `&nbsp;` survives as a non-breaking space.
        if self.options.collapse_whitespace {
            result = self.whitespace_regex.replace_all(&result, " ").into_owned();
        }

        if self.options.decode_entities {
            result = html_escape::decode_html_entities(&result).into_owned();
        }

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.remove_replacement_char {
            result = result.replace('\u{FFFD}', "");
        }

        result
    }
}

impl Default for CleanupPipeline {
    fn default() -> Self {
        Self::new(CleanupOptions::default())
    }
}
