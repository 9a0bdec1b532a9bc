//! Extraction of the leading metadata paragraphs.

use crate::model::Metadata;

use super::Patterns;

/// Split the leading metadata paragraphs off a cleaned document.
///
/// Each label (`Titel:`, `Jaar:`, `Omschrijving:`, `Categorie:`,
/// `Afkomstig uit:`) is matched case-insensitively, in that order, at the
/// start of the remaining text. Matched paragraphs are removed, missing
/// fields stay empty. Every `<p>Tekst:</p>` separator is removed as well.
pub fn extract_metadata(text: &str, patterns: &Patterns) -> (Metadata, String) {
    let mut values: [String; 5] = Default::default();
    let mut rest = text;

    for (value, regex) in values.iter_mut().zip(&patterns.metadata_fields) {
        if let Some(caps) = regex.captures(rest) {
            *value = caps[1].trim().to_string();
            rest = &rest[caps[0].len()..];
        }
    }

    let body = patterns.text_marker.replace_all(rest, "").into_owned();
    let [title, year, description, category, provenance] = values;
    let metadata = Metadata {
        title,
        year,
        description,
        category,
        provenance,
    };

    if !metadata.is_empty() {
        log::debug!("Extracted metadata for '{}'", metadata.title);
    }

    (metadata, body)
}
