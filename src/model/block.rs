//! Tagged output blocks.

use super::ListItem;

/// Inline style applied to rewritten images.
const IMAGE_STYLE: &str = "max-width:100%; height:auto;";

/// One line of restructured output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A heading (level 1 for the title, 2 for section headings)
    Heading {
        /// Heading level
        level: u8,
        /// Heading text
        text: String,
    },

    /// An ordinary paragraph
    Paragraph(String),

    /// Opens an ordered-list level
    ListStart,

    /// Closes an ordered-list level
    ListEnd,

    /// An ordered-list entry
    ListItem(ListItem),

    /// An embedded image
    Image(Image),

    /// Markup that was already structured upstream, passed through unchanged
    Raw(String),
}

impl Block {
    /// Create a heading block.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level: level.clamp(1, 6),
            text: text.into(),
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(text.into())
    }

    /// Render this block as one line of HTML.
    pub fn to_html(&self) -> String {
        match self {
            Block::Heading { level, text } => format!("<h{level}>{text}</h{level}>"),
            Block::Paragraph(text) => format!("<p>{text}</p>"),
            Block::ListStart => "<ol>".to_string(),
            Block::ListEnd => "</ol>".to_string(),
            Block::ListItem(item) => {
                let id = item
                    .anchor
                    .as_ref()
                    .map(|anchor| format!("id=\"{anchor}\" "))
                    .unwrap_or_default();
                format!(
                    "<li {id}value=\"{}\" style=\"list-style-type:{}\">{}</li>",
                    item.value,
                    item.style.css_name(),
                    item.text
                )
            }
            Block::Image(image) => image.to_html(),
            Block::Raw(markup) => markup.clone(),
        }
    }
}

/// An embedded image and, once rewritten, its publish path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// The `<img>` tag as produced by the upstream converter
    pub tag: String,

    /// Resolved publish path, set by the image rewriter
    pub resolved: Option<String>,
}

impl Image {
    /// Create an image from its original tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            resolved: None,
        }
    }

    /// Render the image, linked and responsive when a path was resolved.
    pub fn to_html(&self) -> String {
        match self.resolved {
            Some(ref url) => format!(
                "<a href=\"{url}\" target=\"_blank\"><img src=\"{url}\" style=\"{IMAGE_STYLE}\" /></a>"
            ),
            None => self.tag.clone(),
        }
    }
}
