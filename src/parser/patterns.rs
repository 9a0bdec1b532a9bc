//! Compiled pattern set shared by the pipeline stages.

use regex::Regex;

/// Metadata labels matched at the start of a document, in order.
pub(crate) const METADATA_LABELS: [&str; 5] =
    ["Titel", "Jaar", "Omschrijving", "Categorie", "Afkomstig uit"];

/// Regular expressions used across one pipeline run.
///
/// Compiled once per pipeline and passed by reference to every stage.
#[derive(Debug, Clone)]
pub struct Patterns {
    /// Leading ordinal marker: `1)`, `IV.`, `b)`, `[3]`, followed by whitespace
    pub(crate) ordered_list: Regex,

    /// A fragment that is wholly bold, optionally followed by dots/spaces
    pub(crate) strong_heading: Regex,

    /// Terminal punctuation, optionally followed by one whitespace character
    pub(crate) terminal_punctuation: Regex,

    /// In-body footnote reference: ` 12)` + punctuation, or `[12]`
    pub(crate) footnote_reference: Regex,

    /// `src` attribute of an image tag
    pub(crate) image_source: Regex,

    /// Leading metadata paragraphs, one per label
    pub(crate) metadata_fields: Vec<Regex>,

    /// The `Tekst:` separator paragraph
    pub(crate) text_marker: Regex,
}

impl Patterns {
    /// Compile the pattern set.
    pub fn new() -> Self {
        Self {
            ordered_list: Regex::new(r"^(?:([0-9]+|[IVX]+|[a-z])[).]|\[([0-9]+)\])\s").unwrap(),
            strong_heading: Regex::new(r"^<strong>.+</strong>[.\s]*$").unwrap(),
            terminal_punctuation: Regex::new(r"[.!?]\s?$").unwrap(),
            footnote_reference: Regex::new(r" ([0-9]{1,3})\)([\s.,])|\[([0-9]+)\]").unwrap(),
            image_source: Regex::new(r#"src="([^"]+)""#).unwrap(),
            metadata_fields: METADATA_LABELS
                .iter()
                .map(|label| {
                    Regex::new(&format!(r"(?i)^<p>{}: ([^<]+)</p>", regex::escape(label))).unwrap()
                })
                .collect(),
            text_marker: Regex::new(r"(?i)<p>Tekst:\s?</p>").unwrap(),
        }
    }

    /// Check if text starts with an ordinal list marker.
    pub fn is_list_start(&self, text: &str) -> bool {
        self.ordered_list.is_match(text)
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}
