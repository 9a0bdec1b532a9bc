//! List and heading tagging.

use crate::error::{Error, Result};
use crate::model::{Block, Image, Line, ListContext, ListItem, ListTransition, NumberStyle};
use crate::parser::{ErrorMode, Patterns};

/// Prefixes of lines the upstream converter already structured.
const STRUCTURED_PREFIXES: [&str; 4] = ["<ul", "<ol", "<li", "<h"];

/// Convert merged lines into tagged blocks.
///
/// Ordered-list levels are tracked in a [`ListContext`]; every level opened
/// here is closed again before the function returns.
pub fn tag_lines(lines: Vec<Line>, patterns: &Patterns, mode: ErrorMode) -> Result<Vec<Block>> {
    let mut tagger = Tagger::new(patterns, mode);
    for line in lines {
        tagger.push(line)?;
    }
    Ok(tagger.finish())
}

struct Tagger<'p> {
    patterns: &'p Patterns,
    mode: ErrorMode,
    context: ListContext,
    out: Vec<Block>,
}

impl<'p> Tagger<'p> {
    fn new(patterns: &'p Patterns, mode: ErrorMode) -> Self {
        Self {
            patterns,
            mode,
            context: ListContext::new(),
            out: Vec::new(),
        }
    }

    fn push(&mut self, line: Line) -> Result<()> {
        match line {
            // Headings leave the list stack as it is.
            Line::Title(text) => self.out.push(Block::heading(1, text)),
            Line::Heading(text) => self.out.push(Block::heading(2, text)),
            Line::Image(tag) => {
                // Images cannot nest inside a list.
                self.close_lists();
                self.out.push(Block::Image(Image::new(tag)));
            }
            Line::Text(text) => self.push_text(text)?,
        }
        Ok(())
    }

    fn push_text(&mut self, text: String) -> Result<()> {
        if STRUCTURED_PREFIXES.iter().any(|p| text.starts_with(p)) {
            self.out.push(Block::Raw(text));
            return Ok(());
        }

        if let Some(caps) = self.patterns.ordered_list.captures(&text) {
            let marker = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());

            match NumberStyle::from_marker(marker) {
                Some((style, value)) => {
                    let body = text[caps[0].len()..].to_string();
                    self.enter_list(style);
                    self.out
                        .push(Block::ListItem(ListItem::new(value, style, body)));
                    return Ok(());
                }
                None if self.mode == ErrorMode::Lenient => {
                    log::warn!("Unknown list type '{}', keeping line as paragraph", marker);
                }
                None => return Err(Error::UnknownListMarker(marker.to_string())),
            }
        }

        self.close_lists();
        self.out.push(Block::Paragraph(text));
        Ok(())
    }

    fn enter_list(&mut self, style: NumberStyle) {
        match self.context.enter(style) {
            ListTransition::Open => self.out.push(Block::ListStart),
            ListTransition::Continue => {}
            ListTransition::Close(levels) => {
                self.out.extend(std::iter::repeat(Block::ListEnd).take(levels));
            }
        }
    }

    fn close_lists(&mut self) {
        let levels = self.context.close_all();
        self.out
            .extend(std::iter::repeat(Block::ListEnd).take(levels));
    }

    fn finish(mut self) -> Vec<Block> {
        self.close_lists();
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(lines: Vec<Line>) -> Vec<String> {
        let patterns = Patterns::new();
        tag_lines(lines, &patterns, ErrorMode::Strict)
            .unwrap()
            .iter()
            .map(Block::to_html)
            .collect()
    }

    fn text(s: &str) -> Line {
        Line::Text(s.to_string())
    }

    #[test]
    fn test_decimal_list_closed_before_paragraph() {
        let html = tag(vec![
            Line::Title("Title".to_string()),
            text("1) First item."),
            text("2) Second item."),
            text("Plain text."),
        ]);

        assert_eq!(
            html,
            vec![
                "<h1>Title</h1>",
                "<ol>",
                "<li value=\"1\" style=\"list-style-type:decimal\">First item.</li>",
                "<li value=\"2\" style=\"list-style-type:decimal\">Second item.</li>",
                "</ol>",
                "<p>Plain text.</p>",
            ]
        );
    }

    #[test]
    fn test_mixed_styles_nest() {
        let html = tag(vec![text("I) One"), text("a) Sub"), text("II) Two")]);

        assert_eq!(
            html,
            vec![
                "<ol>",
                "<li value=\"1\" style=\"list-style-type:upper-roman\">One</li>",
                "<ol>",
                "<li value=\"1\" style=\"list-style-type:lower-alpha\">Sub</li>",
                "</ol>",
                "<li value=\"2\" style=\"list-style-type:upper-roman\">Two</li>",
                "</ol>",
            ]
        );
    }

    #[test]
    fn test_heading_keeps_list_levels() {
        let html = tag(vec![
            text("I) One"),
            Line::Heading("Mid Heading".to_string()),
            text("a) Sub"),
            text("II) Two"),
        ]);

        assert_eq!(
            html,
            vec![
                "<ol>",
                "<li value=\"1\" style=\"list-style-type:upper-roman\">One</li>",
                "<h2>Mid Heading</h2>",
                "<ol>",
                "<li value=\"1\" style=\"list-style-type:lower-alpha\">Sub</li>",
                "</ol>",
                "<li value=\"2\" style=\"list-style-type:upper-roman\">Two</li>",
                "</ol>",
            ]
        );
    }

    #[test]
    fn test_oversized_decimal_marker() {
        let html = tag(vec![text("12345678901) Big item.")]);
        assert_eq!(
            html[1],
            format!(
                "<li value=\"{}\" style=\"list-style-type:decimal\">Big item.</li>",
                u32::MAX
            )
        );
    }

    #[test]
    fn test_bracketed_marker_is_decimal() {
        let html = tag(vec![text("[4] Cited work")]);
        assert_eq!(
            html[1],
            "<li value=\"4\" style=\"list-style-type:decimal\">Cited work</li>"
        );
    }

    #[test]
    fn test_source_numbering_kept() {
        let html = tag(vec![text("3. Three"), text("1. One")]);
        assert!(html[1].contains("value=\"3\""));
        assert!(html[2].contains("value=\"1\""));
    }

    #[test]
    fn test_image_closes_open_lists() {
        let html = tag(vec![
            text("1) One"),
            text("a) Sub"),
            Line::Image("<img src=\"a.png\" />".to_string()),
        ]);
        assert_eq!(&html[4..], &["</ol>", "</ol>", "<img src=\"a.png\" />"]);
    }

    #[test]
    fn test_structured_lines_pass_through() {
        let html = tag(vec![text("<ul><li>bullet</li></ul>")]);
        assert_eq!(html, vec!["<ul><li>bullet</li></ul>"]);
    }

    #[test]
    fn test_lists_closed_at_end() {
        let html = tag(vec![text("1) One"), text("a) Sub")]);
        assert_eq!(html.iter().filter(|l| *l == "<ol>").count(), 2);
        assert_eq!(html.iter().filter(|l| *l == "</ol>").count(), 2);
    }

    #[test]
    fn test_unknown_marker_is_fatal() {
        let patterns = Patterns::new();
        let result = tag_lines(vec![text("XX) Twenty")], &patterns, ErrorMode::Strict);
        assert!(matches!(result, Err(Error::UnknownListMarker(m)) if m == "XX"));
    }

    #[test]
    fn test_unknown_marker_lenient() {
        let patterns = Patterns::new();
        let blocks = tag_lines(vec![text("XX) Twenty")], &patterns, ErrorMode::Lenient).unwrap();
        assert_eq!(blocks, vec![Block::paragraph("XX) Twenty")]);
    }

    #[test]
    fn test_depth_matches_open_blocks() {
        let patterns = Patterns::new();
        let blocks = tag_lines(
            vec![
                text("1) a"),
                text("a) b"),
                text("I) c"),
                text("2) d"),
                text("plain"),
            ],
            &patterns,
            ErrorMode::Strict,
        )
        .unwrap();

        let mut depth: i32 = 0;
        for block in &blocks {
            match block {
                Block::ListStart => depth += 1,
                Block::ListEnd => depth -= 1,
                _ => {}
            }
            assert!(depth >= 0);
        }
        assert_eq!(depth, 0);
    }
}
