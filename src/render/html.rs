//! HTML rendering.

use crate::model::Document;

/// Render a document as HTML, one block per line.
pub fn to_html(doc: &Document) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        out.push_str(&block.to_html());
        out.push('\n');
    }
    out
}
