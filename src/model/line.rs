//! Fragment and line types produced by the first two pipeline stages.

/// A raw paragraph-sized chunk of the input, before merging.
///
/// Fragments borrow from the cleaned input text. An empty fragment is a
/// paragraph-boundary artifact and acts as a flush signal for the merger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Position of the fragment in the document (0-based)
    pub index: usize,

    /// Raw fragment text, possibly containing inline markup
    pub text: &'a str,
}

impl<'a> Fragment<'a> {
    /// Create a new fragment.
    pub fn new(index: usize, text: &'a str) -> Self {
        Self { index, text }
    }

    /// Check if the fragment carries no content.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Fragment text with emphasis tags removed and surrounding whitespace trimmed.
    ///
    /// Used for neighbour lookups, where emphasis never matters.
    pub fn plain(&self) -> String {
        self.text.replace("<em>", "").replace("</em>", "").trim().to_string()
    }
}

/// A semantically complete unit produced by the line merger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// The first line of the document, title-cased
    Title(String),

    /// A bold or all-caps standalone line, title-cased
    Heading(String),

    /// An assembled sentence or phrase, possibly wrapped in `<em>`
    Text(String),

    /// A single `<img>` tag
    Image(String),
}

impl Line {
    /// Get the line content.
    pub fn as_str(&self) -> &str {
        match self {
            Line::Title(s) | Line::Heading(s) | Line::Text(s) | Line::Image(s) => s,
        }
    }

    /// Check if this line is an image.
    pub fn is_image(&self) -> bool {
        matches!(self, Line::Image(_))
    }

    /// Check if this line is a title or heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Line::Title(_) | Line::Heading(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_plain() {
        let fragment = Fragment::new(3, " <em>Some words</em> ");
        assert_eq!(fragment.plain(), "Some words");
        assert!(!fragment.is_empty());
        assert!(Fragment::new(0, "  ").is_empty());
    }

    #[test]
    fn test_line_kinds() {
        assert!(Line::Image("<img src=\"a.png\" />".into()).is_image());
        assert!(Line::Title("Title".into()).is_heading());
        assert!(!Line::Text("text".into()).is_heading());
        assert_eq!(Line::Heading("Intro".into()).as_str(), "Intro");
    }
}
