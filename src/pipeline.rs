//! The restructuring pipeline for one document.

use crate::error::Result;
use crate::model::{Document, FootnoteReport, Metadata};
use crate::parser::{
    extract_metadata, merge_fragments, split_fragments, CleanupPipeline, ParseOptions, Patterns,
};
use crate::render::{link_footnotes, rewrite_images, tag_lines, RenderOptions};

/// Runs every stage over converter output.
///
/// Patterns and cleanup regexes are compiled once when the pipeline is built
/// and shared by every document it processes.
#[derive(Debug, Clone)]
pub struct Pipeline {
    patterns: Patterns,
    cleanup: CleanupPipeline,
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Pipeline {
    /// Create a pipeline with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default(), RenderOptions::default())
    }

    /// Create a pipeline with custom options.
    pub fn with_options(parse_options: ParseOptions, render_options: RenderOptions) -> Self {
        Self {
            patterns: Patterns::new(),
            cleanup: CleanupPipeline::new(parse_options.cleanup.clone()),
            parse_options,
            render_options,
        }
    }

    /// Get the parse options.
    pub fn parse_options(&self) -> &ParseOptions {
        &self.parse_options
    }

    /// Get the render options.
    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    /// Restructure a document.
    pub fn run(&self, html: &str) -> Result<Document> {
        self.run_document(html, None)
    }

    /// Restructure a document, resolving images under its own subdirectory.
    ///
    /// `stem` is the document name used for the per-document image directory.
    pub fn run_document(&self, html: &str, stem: Option<&str>) -> Result<Document> {
        let cleaned = self.cleanup.process(html);

        let (metadata, body) = if self.parse_options.extract_metadata {
            extract_metadata(&cleaned, &self.patterns)
        } else {
            (Metadata::default(), cleaned)
        };

        let fragments = split_fragments(&body);
        let lines = merge_fragments(&fragments, &self.patterns);
        let mut blocks = tag_lines(lines, &self.patterns, self.parse_options.error_mode)?;

        let footnotes = if self.render_options.link_footnotes {
            link_footnotes(&mut blocks, &self.patterns, self.parse_options.error_mode)?
        } else {
            FootnoteReport::default()
        };

        if let Some(base) = self.render_options.image_base_for(stem) {
            rewrite_images(&mut blocks, &base, &self.patterns)?;
        }

        log::debug!(
            "Restructured {} fragments into {} blocks ({} of {} footnotes linked)",
            fragments.len(),
            blocks.len(),
            footnotes.linked,
            footnotes.found
        );

        Ok(Document {
            metadata,
            blocks,
            footnotes,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ErrorMode;

    #[test]
    fn test_title_list_paragraph() {
        let doc = Pipeline::new()
            .run("<p>Title</p><p>1) First item.</p><p>2) Second item.</p><p>Plain text.</p>")
            .unwrap();

        assert_eq!(
            doc.lines(),
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
    fn test_footnotes_linked_with_tolerance() {
        let doc = Pipeline::new()
            .run(
                "<p>Title</p><p>Intro.</p><p>Second.</p><p>See note 3) for details.</p>\
                 <p>1) One.</p><p>2) Two.</p><p>3) Three.</p>",
            )
            .unwrap();

        let lines = doc.lines();
        assert_eq!(
            lines[3],
            "<p>See note <a href=\"#footnote-3\" title=\"Three.\">[3]</a> for details.</p>"
        );
        assert_eq!(
            lines[7],
            "<li id=\"footnote-3\" value=\"3\" style=\"list-style-type:decimal\">Three.</li>"
        );
        assert_eq!(doc.footnotes.skipped, 2);
    }

    #[test]
    fn test_footnotes_disabled() {
        let pipeline = Pipeline::with_options(
            ParseOptions::default(),
            RenderOptions::new().with_footnotes(false),
        );
        let doc = pipeline
            .run("<p>Title</p><p>Intro.</p><p>More.</p><p>See 1) here.</p><p>1) Note.</p>")
            .unwrap();

        assert!(doc.lines().iter().all(|l| !l.contains("href")));
        assert_eq!(doc.footnotes, FootnoteReport::default());
    }

    #[test]
    fn test_metadata_split_off() {
        let doc = Pipeline::new()
            .run("<p>Titel: Verslag</p><p>Jaar: 1990</p><p>Tekst:</p><p>Title</p><p>Body.</p>")
            .unwrap();

        assert_eq!(doc.metadata.title, "Verslag");
        assert_eq!(doc.metadata.year, "1990");
        assert_eq!(doc.lines()[0], "<h1>Title</h1>");
    }

    #[test]
    fn test_images_resolved_per_document() {
        let pipeline = Pipeline::with_options(
            ParseOptions::default(),
            RenderOptions::new().with_image_base("/static"),
        );
        let doc = pipeline
            .run_document("<p>Title</p><p><img src=\"image1.png\" /></p>", Some("report"))
            .unwrap();

        assert!(doc.lines()[1].contains("src=\"/static/report/image1.png\""));
    }

    #[test]
    fn test_lenient_mode_recovers() {
        let html = "<p>Title</p><p>XX) Odd marker.</p>";
        assert!(Pipeline::new().run(html).is_err());

        let pipeline = Pipeline::with_options(
            ParseOptions::new().with_error_mode(ErrorMode::Lenient),
            RenderOptions::default(),
        );
        let doc = pipeline.run(html).unwrap();
        assert_eq!(doc.lines()[1], "<p>XX) Odd marker.</p>");
    }
}
