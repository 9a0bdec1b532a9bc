//! Fragment splitting on paragraph boundaries.

use crate::model::Fragment;

/// Boundary between a closing and the immediately following opening paragraph tag.
pub const PARAGRAPH_BOUNDARY: &str = "</p><p>";

/// Split cleaned HTML into paragraph fragments.
///
/// No fragment is dropped: empty fragments are kept as boundary markers.
/// The first fragment loses its leading `<p>` and the last its trailing
/// `</p>`, when present.
pub fn split_fragments(html: &str) -> Vec<Fragment<'_>> {
    let mut parts: Vec<&str> = html.split(PARAGRAPH_BOUNDARY).collect();

    if let Some(first) = parts.first_mut() {
        let text = *first;
        if let Some(stripped) = text.trim_start().strip_prefix("<p>") {
            *first = stripped;
        }
    }
    if let Some(last) = parts.last_mut() {
        let text = *last;
        if let Some(stripped) = text.trim_end().strip_suffix("</p>") {
            *last = stripped;
        }
    }

    parts
        .into_iter()
        .enumerate()
        .map(|(index, text)| Fragment::new(index, text))
        .collect()
}
