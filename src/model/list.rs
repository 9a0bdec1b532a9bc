//! Ordered-list types: numbering styles, items and the nesting context.

use serde::{Deserialize, Serialize};

/// Roman numerals recognized as list markers.
const ROMAN_NUMERALS: [(&str, u32); 15] = [
    ("I", 1),
    ("II", 2),
    ("III", 3),
    ("IV", 4),
    ("V", 5),
    ("VI", 6),
    ("VII", 7),
    ("VIII", 8),
    ("IX", 9),
    ("X", 10),
    ("XI", 11),
    ("XII", 12),
    ("XIII", 13),
    ("XIV", 14),
    ("XV", 15),
];

/// Number style for ordered lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberStyle {
    /// 1, 2, 3, ...
    #[default]
    Decimal,
    /// I, II, III, ...
    UpperRoman,
    /// a, b, c, ...
    LowerAlpha,
}

impl NumberStyle {
    /// CSS `list-style-type` value for this style.
    pub fn css_name(&self) -> &'static str {
        match self {
            NumberStyle::Decimal => "decimal",
            NumberStyle::UpperRoman => "upper-roman",
            NumberStyle::LowerAlpha => "lower-alpha",
        }
    }

    /// Classify a list marker and resolve its numeric value.
    ///
    /// Returns `None` for markers that match no known style, including
    /// Roman numerals beyond XV.
    pub fn from_marker(marker: &str) -> Option<(NumberStyle, u32)> {
        if marker.is_empty() {
            return None;
        }

        if marker.chars().all(|c| c.is_ascii_digit()) {
            // Digit runs too long for u32 saturate instead of failing.
            let value = marker.parse().unwrap_or(u32::MAX);
            return Some((NumberStyle::Decimal, value));
        }

        if marker.chars().all(|c| matches!(c, 'I' | 'V' | 'X')) {
            return ROMAN_NUMERALS
                .iter()
                .find(|(numeral, _)| *numeral == marker)
                .map(|&(_, n)| (NumberStyle::UpperRoman, n));
        }

        let mut chars = marker.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                let n = (c.to_ascii_lowercase() as u32) - ('a' as u32) + 1;
                Some((NumberStyle::LowerAlpha, n))
            }
            _ => None,
        }
    }
}

/// A tagged ordered-list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Resolved numeric index (decimal regardless of source notation)
    pub value: u32,

    /// Numbering style
    pub style: NumberStyle,

    /// Visible content, marker stripped
    pub text: String,

    /// Anchor id, set when the item is a footnote target
    pub anchor: Option<String>,
}

impl ListItem {
    /// Create a new list item without an anchor.
    pub fn new(value: u32, style: NumberStyle, text: impl Into<String>) -> Self {
        Self {
            value,
            style,
            text: text.into(),
            anchor: None,
        }
    }

    /// Check if this item was claimed as a footnote.
    pub fn is_footnote(&self) -> bool {
        self.anchor.is_some()
    }
}

/// What the tagger must emit when entering an item of a given style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTransition {
    /// A new (possibly nested) list level was opened
    Open,
    /// The item continues the innermost level
    Continue,
    /// This many inner levels were closed to return to a parent level
    Close(usize),
}

/// Stack of currently open ordered-list levels.
///
/// The depth always equals the number of open `<ol>` blocks and the top of
/// the stack is the style of the innermost one.
#[derive(Debug, Clone, Default)]
pub struct ListContext {
    stack: Vec<NumberStyle>,
}

impl ListContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open list levels.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Check if no list is open.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Style of the innermost open level.
    pub fn top(&self) -> Option<NumberStyle> {
        self.stack.last().copied()
    }

    /// Check if a style is open at any depth.
    pub fn contains(&self, style: NumberStyle) -> bool {
        self.stack.contains(&style)
    }

    /// Enter an item of the given style, updating the stack.
    pub fn enter(&mut self, style: NumberStyle) -> ListTransition {
        match self.top() {
            Some(top) if top == style => ListTransition::Continue,
            Some(_) if self.contains(style) => {
                let mut closed = 0;
                while self.top() != Some(style) {
                    self.stack.pop();
                    closed += 1;
                }
                ListTransition::Close(closed)
            }
            _ => {
                self.stack.push(style);
                ListTransition::Open
            }
        }
    }

    /// Close every open level, returning how many were closed.
    pub fn close_all(&mut self) -> usize {
        let depth = self.stack.len();
        self.stack.clear();
        depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_classification() {
        assert_eq!(
            NumberStyle::from_marker("12"),
            Some((NumberStyle::Decimal, 12))
        );
        assert_eq!(
            NumberStyle::from_marker("XIV"),
            Some((NumberStyle::UpperRoman, 14))
        );
        assert_eq!(
            NumberStyle::from_marker("c"),
            Some((NumberStyle::LowerAlpha, 3))
        );
        assert_eq!(
            NumberStyle::from_marker("i"),
            Some((NumberStyle::LowerAlpha, 9))
        );
        assert_eq!(NumberStyle::from_marker("XX"), None);
        assert_eq!(NumberStyle::from_marker("ab"), None);
        assert_eq!(NumberStyle::from_marker(""), None);
    }

    #[test]
    fn test_long_digit_marker_saturates() {
        assert_eq!(
            NumberStyle::from_marker("12345678901"),
            Some((NumberStyle::Decimal, u32::MAX))
        );
    }

    #[test]
    fn test_css_names() {
        assert_eq!(NumberStyle::Decimal.css_name(), "decimal");
        assert_eq!(NumberStyle::UpperRoman.css_name(), "upper-roman");
        assert_eq!(NumberStyle::LowerAlpha.css_name(), "lower-alpha");
    }

    #[test]
    fn test_context_nesting() {
        let mut context = ListContext::new();
        assert_eq!(context.enter(NumberStyle::UpperRoman), ListTransition::Open);
        assert_eq!(context.enter(NumberStyle::LowerAlpha), ListTransition::Open);
        assert_eq!(context.depth(), 2);
        assert_eq!(context.enter(NumberStyle::LowerAlpha), ListTransition::Continue);
        assert_eq!(context.enter(NumberStyle::UpperRoman), ListTransition::Close(1));
        assert_eq!(context.depth(), 1);
        assert_eq!(context.top(), Some(NumberStyle::UpperRoman));
    }

    #[test]
    fn test_context_returns_to_outermost() {
        let mut context = ListContext::new();
        context.enter(NumberStyle::Decimal);
        context.enter(NumberStyle::LowerAlpha);
        context.enter(NumberStyle::UpperRoman);
        assert_eq!(context.enter(NumberStyle::Decimal), ListTransition::Close(2));
        assert_eq!(context.depth(), 1);
        assert_eq!(context.close_all(), 1);
        assert!(context.is_empty());
    }
}
