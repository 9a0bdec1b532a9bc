//! Footnote linking.
//!
//! Footnotes are the trailing run of decimal list items at the end of a
//! document. Linking happens in two passes over the tagged blocks:
//!
//! 1. [`collect_footnotes`] walks backwards from the end, anchors every
//!    footnote item and records its body in a [`FootnoteTable`].
//! 2. [`resolve_references`] walks forwards and replaces reference markers
//!    (` 3)` or `[3]`) with links, consuming footnotes in ascending order.

use crate::error::{Error, Result};
use crate::model::{footnote_anchor, Block, FootnoteReport, FootnoteTable, NumberStyle};
use crate::parser::{ErrorMode, Patterns};

/// How many footnotes a reference may skip over.
pub const MAX_SKIPPED_FOOTNOTES: u32 = 3;

/// Run both footnote passes over the blocks.
pub fn link_footnotes(
    blocks: &mut [Block],
    patterns: &Patterns,
    mode: ErrorMode,
) -> Result<FootnoteReport> {
    let table = collect_footnotes(blocks, mode)?;
    Ok(resolve_references(blocks, table, patterns))
}

/// Backward pass: anchor the trailing decimal list items and collect their bodies.
///
/// Closing list delimiters at the very end are skipped; the scan stops at
/// the first block that is not a decimal list item.
pub fn collect_footnotes(blocks: &mut [Block], mode: ErrorMode) -> Result<FootnoteTable> {
    let mut table = FootnoteTable::new();

    let trailing = blocks
        .iter_mut()
        .rev()
        .skip_while(|block| matches!(block, Block::ListEnd));

    for block in trailing {
        let item = match block {
            Block::ListItem(item) if item.style == NumberStyle::Decimal && !item.text.is_empty() => {
                item
            }
            _ => break,
        };

        if !table.insert(item.value, item.text.as_str()) {
            if mode == ErrorMode::Lenient {
                log::warn!("Duplicate footnote {}, ignoring earlier items", item.value);
                break;
            }
            return Err(Error::DuplicateFootnote(item.value));
        }
        item.anchor = Some(footnote_anchor(item.value));
    }

    log::debug!("Found {} footnotes", table.len());
    Ok(table)
}

/// Forward pass: replace reference markers with links to their footnotes.
///
/// Footnote items themselves and raw markup are not scanned.
pub fn resolve_references(
    blocks: &mut [Block],
    mut table: FootnoteTable,
    patterns: &Patterns,
) -> FootnoteReport {
    let mut report = FootnoteReport {
        found: table.len(),
        ..Default::default()
    };

    for block in blocks.iter_mut() {
        if table.is_empty() {
            break;
        }

        let text = match block {
            Block::Heading { text, .. } | Block::Paragraph(text) => text,
            Block::ListItem(item) if !item.is_footnote() => &mut item.text,
            _ => continue,
        };

        if let Some(linked) = link_text(text, &mut table, patterns, &mut report) {
            *text = linked;
        }
    }

    report.unreferenced = report.found - report.linked - report.skipped;
    report
}

/// Rewrite the references in one text. Returns `None` when nothing changed.
fn link_text(
    text: &str,
    table: &mut FootnoteTable,
    patterns: &Patterns,
    report: &mut FootnoteReport,
) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;

    for caps in patterns.footnote_reference.captures_iter(text) {
        let (number, prefix, suffix) = match (caps.get(1), caps.get(3)) {
            (Some(number), _) => (number, " ", caps.get(2).map_or("", |m| m.as_str())),
            (None, Some(number)) => (number, " ", ""),
            _ => continue,
        };
        let Ok(index) = number.as_str().parse::<u32>() else {
            continue;
        };
        let Some(body) = resolve(index, table, report) else {
            continue;
        };

        let whole = &caps[0];
        let start = caps.get(0).map_or(0, |m| m.start());
        out.push_str(&text[copied..start]);
        out.push_str(prefix);
        out.push_str(&footnote_link(index, &body));
        out.push_str(suffix);
        copied = start + whole.len();
    }

    if copied == 0 {
        return None;
    }
    out.push_str(&text[copied..]);
    Some(out)
}

/// Consume the footnote a reference points at, applying the skip tolerance.
fn resolve(index: u32, table: &mut FootnoteTable, report: &mut FootnoteReport) -> Option<String> {
    let min = table.min_index()?;
    if index > min && index - min <= MAX_SKIPPED_FOOTNOTES {
        for skipped in table.discard_below(index) {
            log::debug!("Skipping footnote {}", skipped);
            report.skipped += 1;
        }
    }

    let body = table.take(index)?;
    report.linked += 1;
    Some(body)
}

fn footnote_link(index: u32, body: &str) -> String {
    format!(
        "<a href=\"#{}\" title=\"{}\">[{}]</a>",
        footnote_anchor(index),
        html_escape::encode_double_quoted_attribute(body),
        index
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ListItem;

    fn footnote(value: u32, text: &str) -> Block {
        Block::ListItem(ListItem::new(value, NumberStyle::Decimal, text))
    }

    fn with_footnotes(body: &[&str], notes: &[(u32, &str)]) -> Vec<Block> {
        let mut blocks: Vec<Block> = body.iter().map(|t| Block::paragraph(*t)).collect();
        blocks.push(Block::ListStart);
        blocks.extend(notes.iter().map(|(n, t)| footnote(*n, t)));
        blocks.push(Block::ListEnd);
        blocks
    }

    fn link(blocks: &mut [Block]) -> FootnoteReport {
        let patterns = Patterns::new();
        link_footnotes(blocks, &patterns, ErrorMode::Strict).unwrap()
    }

    #[test]
    fn test_collect_trailing_run_only() {
        let mut blocks = vec![
            Block::ListStart,
            footnote(1, "body list"),
            Block::ListEnd,
            Block::paragraph("Text."),
            Block::ListStart,
            footnote(1, "Note one"),
            footnote(2, "Note two"),
            Block::ListEnd,
        ];

        let table = collect_footnotes(&mut blocks, ErrorMode::Strict).unwrap();
        assert_eq!(table.indices(), vec![1, 2]);
        assert!(matches!(&blocks[1], Block::ListItem(item) if item.anchor.is_none()));
        assert!(
            matches!(&blocks[5], Block::ListItem(item) if item.anchor.as_deref() == Some("footnote-1"))
        );
    }

    #[test]
    fn test_non_decimal_items_are_not_footnotes() {
        let mut blocks = vec![
            Block::ListStart,
            Block::ListItem(ListItem::new(1, NumberStyle::LowerAlpha, "alpha")),
            Block::ListEnd,
        ];
        let table = collect_footnotes(&mut blocks, ErrorMode::Strict).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_duplicate_footnote_is_fatal() {
        let mut blocks = with_footnotes(&["Text."], &[(1, "a"), (1, "b")]);
        let result = collect_footnotes(&mut blocks, ErrorMode::Strict);
        assert!(matches!(result, Err(Error::DuplicateFootnote(1))));
    }

    #[test]
    fn test_duplicate_footnote_lenient() {
        let mut blocks = with_footnotes(&["Text."], &[(1, "a"), (1, "b")]);
        let table = collect_footnotes(&mut blocks, ErrorMode::Lenient).unwrap();
        assert_eq!(table.indices(), vec![1]);
    }

    #[test]
    fn test_reference_linked() {
        let mut blocks = with_footnotes(&["See note 1) for details."], &[(1, "The source")]);
        let report = link(&mut blocks);

        assert_eq!(
            blocks[0],
            Block::paragraph(
                "See note <a href=\"#footnote-1\" title=\"The source\">[1]</a> for details."
            )
        );
        assert_eq!(report.linked, 1);
        assert_eq!(report.unreferenced, 0);
    }

    #[test]
    fn test_bracket_reference_linked() {
        let mut blocks = with_footnotes(&["A claim[1]."], &[(1, "Proof")]);
        link(&mut blocks);
        assert_eq!(
            blocks[0],
            Block::paragraph("A claim <a href=\"#footnote-1\" title=\"Proof\">[1]</a>.")
        );
    }

    #[test]
    fn test_tolerance_skips_missing_references() {
        let mut blocks = with_footnotes(
            &["see note 3) for details."],
            &[(1, "one"), (2, "two"), (3, "three")],
        );
        let report = link(&mut blocks);

        assert_eq!(
            blocks[0],
            Block::paragraph(
                "see note <a href=\"#footnote-3\" title=\"three\">[3]</a> for details."
            )
        );
        assert_eq!(report.skipped, 2);
        assert_eq!(report.linked, 1);
        // Skipped footnotes stay in the list.
        assert_eq!(blocks.iter().filter(|b| matches!(b, Block::ListItem(_))).count(), 3);
    }

    #[test]
    fn test_tolerance_upper_bound() {
        let mut blocks = with_footnotes(
            &["See 4) here."],
            &[(1, "one"), (2, "two"), (3, "three"), (4, "four")],
        );
        let report = link(&mut blocks);

        assert_eq!(
            blocks[0],
            Block::paragraph("See <a href=\"#footnote-4\" title=\"four\">[4]</a> here.")
        );
        assert_eq!(report.found, 4);
        assert_eq!(report.skipped, MAX_SKIPPED_FOOTNOTES as usize);
        assert_eq!(report.linked, 1);
        assert_eq!(report.unreferenced, 0);
    }

    #[test]
    fn test_gap_beyond_tolerance_left_unchanged() {
        let mut blocks = with_footnotes(&["see note 5) here."], &[(1, "one"), (5, "five")]);
        let report = link(&mut blocks);

        assert_eq!(blocks[0], Block::paragraph("see note 5) here."));
        assert_eq!(report.linked, 0);
        assert_eq!(report.unreferenced, 2);
    }

    #[test]
    fn test_no_footnotes_marker_unchanged() {
        let mut blocks = vec![Block::paragraph("see note 3) for details.")];
        let report = link(&mut blocks);
        assert_eq!(blocks[0], Block::paragraph("see note 3) for details."));
        assert_eq!(report, FootnoteReport::default());
    }

    #[test]
    fn test_consumption_strictly_increasing() {
        let mut blocks = with_footnotes(
            &["First 1) and again 1) then 2), back to 1)."],
            &[(1, "one"), (2, "two")],
        );
        let report = link(&mut blocks);

        let Block::Paragraph(text) = &blocks[0] else {
            panic!("Expected paragraph");
        };
        assert_eq!(text.matches("#footnote-1").count(), 1);
        assert_eq!(text.matches("#footnote-2").count(), 1);
        assert!(text.ends_with("back to 1)."));
        assert_eq!(report.linked, 2);
    }

    #[test]
    fn test_references_span_lines() {
        let mut blocks = with_footnotes(&["One 1) here.", "Two 2) there."], &[(1, "a"), (2, "b")]);
        link(&mut blocks);
        assert!(matches!(&blocks[0], Block::Paragraph(t) if t.contains("#footnote-1")));
        assert!(matches!(&blocks[1], Block::Paragraph(t) if t.contains("#footnote-2")));
    }

    #[test]
    fn test_title_attribute_escaped() {
        let mut blocks = with_footnotes(&["Quote 1) here."], &[(1, "He said \"no\"")]);
        link(&mut blocks);
        assert!(matches!(&blocks[0], Block::Paragraph(t) if t.contains("title=\"He said &quot;no&quot;\"")));
    }
}
