//! JSON rendering for document metadata.

use crate::error::Result;
use crate::model::Metadata;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert document metadata to JSON.
pub fn to_json(metadata: &Metadata, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(metadata)?,
        JsonFormat::Compact => serde_json::to_string(metadata)?,
    };
    Ok(json)
}
