//! Rendering result with metadata and statistics.

use crate::model::{Block, Document, Metadata};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered HTML
    pub content: String,

    /// Document metadata
    pub metadata: Metadata,

    /// Reflow statistics
    pub stats: ReflowStats,
}

impl RenderResult {
    /// Render a document into a result.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            content: super::to_html(doc),
            metadata: doc.metadata.clone(),
            stats: ReflowStats::from_document(doc),
        }
    }
}

/// Statistics collected while restructuring a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflowStats {
    /// Number of headings, title included
    pub heading_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of ordered lists opened, nested levels included
    pub list_count: u32,

    /// Number of list items
    pub list_item_count: u32,

    /// Number of images
    pub image_count: u32,

    /// Footnotes found in the trailing list
    pub footnotes_found: u32,

    /// Footnote references turned into links
    pub footnotes_linked: u32,

    /// Footnotes skipped over by a later reference
    pub footnotes_skipped: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,
}

impl ReflowStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a processed document.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();
        for block in &doc.blocks {
            match block {
                Block::Heading { text, .. } => {
                    stats.heading_count += 1;
                    stats.count_text(text);
                }
                Block::Paragraph(text) => {
                    stats.paragraph_count += 1;
                    stats.count_text(text);
                }
                Block::ListStart => stats.list_count += 1,
                Block::ListItem(item) => {
                    stats.list_item_count += 1;
                    stats.count_text(&item.text);
                }
                Block::Image(_) => stats.image_count += 1,
                Block::ListEnd | Block::Raw(_) => {}
            }
        }

        stats.footnotes_found = doc.footnotes.found as u32;
        stats.footnotes_linked = doc.footnotes.linked as u32;
        stats.footnotes_skipped = doc.footnotes.skipped as u32;
        stats
    }

    /// Add word counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ReflowStats) {
        self.heading_count += other.heading_count;
        self.paragraph_count += other.paragraph_count;
        self.list_count += other.list_count;
        self.list_item_count += other.list_item_count;
        self.image_count += other.image_count;
        self.footnotes_found += other.footnotes_found;
        self.footnotes_linked += other.footnotes_linked;
        self.footnotes_skipped += other.footnotes_skipped;
        self.word_count += other.word_count;
    }
}
