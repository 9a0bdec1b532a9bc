//! Line merging: reassemble paragraph fragments into complete lines.
//!
//! The upstream converter splits paragraphs at arbitrary points: mid
//! sentence, at hyphenated line breaks, around images. [`LineMerger`] walks
//! the fragments once, left to right, and decides at each fragment whether
//! the line in progress is complete.

use crate::model::{Fragment, Line};

use super::Patterns;

/// Neighbouring fragments, emphasis removed and trimmed.
#[derive(Debug, Clone, Copy)]
struct Neighbors<'a> {
    previous: Option<&'a str>,
    next: Option<&'a str>,
    is_last: bool,
}

/// Single-pass accumulator turning fragments into lines.
pub struct LineMerger<'p> {
    patterns: &'p Patterns,
    out: Vec<Line>,
    pieces: Vec<String>,
    images: Vec<String>,
    emphasis: bool,
}

impl<'p> LineMerger<'p> {
    /// Create a merger using the given patterns.
    pub fn new(patterns: &'p Patterns) -> Self {
        Self {
            patterns,
            out: Vec::new(),
            pieces: Vec::new(),
            images: Vec::new(),
            emphasis: false,
        }
    }

    /// Merge all fragments of a document into lines.
    pub fn merge(mut self, fragments: &[Fragment<'_>]) -> Vec<Line> {
        let plain: Vec<String> = fragments.iter().map(Fragment::plain).collect();

        for (pos, fragment) in fragments.iter().enumerate() {
            let neighbors = Neighbors {
                previous: pos.checked_sub(1).map(|p| plain[p].as_str()),
                next: plain.get(pos + 1).map(String::as_str),
                is_last: pos + 1 == fragments.len(),
            };
            self.push(fragment, neighbors);
        }
        self.flush();

        log::debug!(
            "Merged {} fragments into {} lines",
            fragments.len(),
            self.out.len()
        );
        self.out
    }

    fn push(&mut self, fragment: &Fragment<'_>, neighbors: Neighbors<'_>) {
        let mut text = fragment.text.trim();
        if text.is_empty() {
            self.flush();
            return;
        }

        let emphasized = is_wrapped(text, "<em>", "</em>");
        if emphasized {
            text = text["<em>".len()..text.len() - "</em>".len()].trim();
            if text.is_empty() {
                self.flush();
                return;
            }
        }

        if is_image(text) {
            self.images.push(text.to_string());
            if self.pieces.is_empty() {
                self.flush();
            }
            return;
        }

        let is_title = fragment.index == 0;
        let is_heading = !is_title
            && !neighbors.is_last
            && (self.patterns.strong_heading.is_match(text) || is_uppercase_text(text));
        let is_list_start = self.patterns.is_list_start(text);

        if is_title || is_heading || is_list_start {
            self.flush();
        }

        if is_title || is_heading {
            let heading = title_case(&text.replace("<strong>", "").replace("</strong>", ""));
            self.out.push(if is_title {
                Line::Title(heading)
            } else {
                Line::Heading(heading)
            });
            return;
        }

        if emphasized {
            self.emphasis = true;
        }

        let after_hyphen = neighbors.previous.is_some_and(|p| hyphen_break(p).is_some());
        if !(after_hyphen && self.splice(text)) {
            self.pieces.push(text.to_string());
        }

        let terminal = self.patterns.terminal_punctuation.is_match(text);
        let next_opens_line = neighbors.next.is_some_and(|next| {
            next.chars().next().is_some_and(char::is_uppercase) || next.starts_with("<img ")
        });
        if (terminal || fragment.index < 3) && next_opens_line {
            self.flush();
        }
    }

    /// Join the last piece and `text` across a hyphenated line break.
    fn splice(&mut self, text: &str) -> bool {
        let Some(last) = self.pieces.last_mut() else {
            return false;
        };
        let Some(cut) = hyphen_break(last) else {
            return false;
        };
        last.truncate(cut);
        last.push_str(text);
        true
    }

    fn flush(&mut self) {
        if !self.pieces.is_empty() {
            let joined = self.pieces.join(" ");
            let line = joined.trim();
            let line = if self.emphasis {
                format!("<em>{line}</em>")
            } else {
                line.to_string()
            };
            self.out.push(Line::Text(line));
            self.pieces.clear();
            self.emphasis = false;
        }
        self.out.extend(self.images.drain(..).map(Line::Image));
    }
}

/// Merge fragments into lines with a fresh merger.
pub fn merge_fragments(fragments: &[Fragment<'_>], patterns: &Patterns) -> Vec<Line> {
    LineMerger::new(patterns).merge(fragments)
}

fn is_wrapped(text: &str, open: &str, close: &str) -> bool {
    text.len() >= open.len() + close.len() && text.starts_with(open) && text.ends_with(close)
}

fn is_image(text: &str) -> bool {
    text.starts_with("<img ") && text.ends_with('>')
}

/// Byte offset of a line-break hyphen: a word character, `-`, and at most
/// one trailing whitespace character.
fn hyphen_break(text: &str) -> Option<usize> {
    let text = match text.chars().last() {
        Some(c) if c.is_whitespace() => &text[..text.len() - c.len_utf8()],
        _ => text,
    };
    let stem = text.strip_suffix('-')?;
    let before = stem.chars().last()?;
    (before.is_alphanumeric() || before == '_').then_some(stem.len())
}

/// True when the text has at least one cased character and none in lowercase.
fn is_uppercase_text(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        cased |= c.is_uppercase();
    }
    cased
}

/// Uppercase the first letter of every word and lowercase the rest.
///
/// A word starts after any non-letter. Markup tags are copied unchanged.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    let mut previous_cased = false;

    for c in text.chars() {
        if in_tag {
            in_tag = c != '>';
            out.push(c);
            continue;
        }
        if c == '<' {
            in_tag = true;
            out.push(c);
            continue;
        }

        let cased = c.is_uppercase() || c.is_lowercase();
        if !cased {
            out.push(c);
        } else if previous_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        previous_cased = cased;
    }
    out
}
