//! Converter for HTML produced by an upstream document converter.

use crate::error::{Error, Result};
use crate::pipeline::Pipeline;
use crate::render::RenderResult;
use std::fs;
use std::path::Path;

use super::{ConvertOptions, ConvertResult, DocumentConverter};

/// Converter for `.html` and `.htm` files.
///
/// Runs the restructuring pipeline and renders the result as HTML.
#[derive(Debug, Clone, Default)]
pub struct HtmlConverter {
    _private: (),
}

impl HtmlConverter {
    /// Create a new HTML converter.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn convert_str(
        &self,
        html: &str,
        stem: Option<&str>,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let pipeline = Pipeline::with_options(options.parse.clone(), options.render.clone());
        let doc = pipeline.run_document(html, stem)?;
        let rendered = RenderResult::from_document(&doc);

        let result =
            ConvertResult::new(rendered.content, rendered.metadata).with_stats(rendered.stats);
        Ok(match stem {
            Some(stem) => result.with_stem(stem),
            None => result,
        })
    }
}

impl DocumentConverter for HtmlConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn name(&self) -> &str {
        "html"
    }

    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let html = fs::read_to_string(path)?;
        let stem = path.file_stem().and_then(|s| s.to_str());
        log::debug!("Converting {}", path.display());
        self.convert_str(&html, stem, options)
    }

    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        let html = std::str::from_utf8(bytes)
            .map_err(|e| Error::Other(format!("Input is not valid UTF-8: {}", e)))?;
        self.convert_str(html, None, options)
    }
}
