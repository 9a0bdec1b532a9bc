//! Document-level types.

use super::{Block, FootnoteReport};
use serde::{Deserialize, Serialize};

/// A restructured document: metadata plus the tagged output blocks.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Metadata extracted from the leading paragraphs
    pub metadata: Metadata,

    /// Output blocks in document order
    pub blocks: Vec<Block>,

    /// Footnote linking outcome
    pub footnotes: FootnoteReport,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the document has no output blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Render every block as one HTML line.
    pub fn lines(&self) -> Vec<String> {
        self.blocks.iter().map(Block::to_html).collect()
    }

    /// Iterate over heading texts.
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Heading { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Publication metadata carried in the leading paragraphs of a document.
///
/// Serialized with the labels used in the source documents; missing fields
/// are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Publication title (`Titel:`)
    #[serde(rename = "titel")]
    pub title: String,

    /// Publication year (`Jaar:`)
    #[serde(rename = "jaar")]
    pub year: String,

    /// Short description (`Omschrijving:`)
    #[serde(rename = "omschrijving")]
    pub description: String,

    /// Category (`Categorie:`)
    #[serde(rename = "categorie")]
    pub category: String,

    /// Provenance (`Afkomstig uit:`)
    #[serde(rename = "afkomstig uit")]
    pub provenance: String,
}

impl Metadata {
    /// Check if no field was found.
    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_empty())
    }

    /// Field labels and values, in source order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("Titel", self.title.as_str()),
            ("Jaar", self.year.as_str()),
            ("Omschrijving", self.description.as_str()),
            ("Categorie", self.category.as_str()),
            ("Afkomstig uit", self.provenance.as_str()),
        ]
    }
}
