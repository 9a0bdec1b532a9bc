//! # docreflow
//!
//! Restructure the flat HTML produced by document converters into semantic,
//! publishable HTML.
//!
//! Converters emit every visual line as its own `<p>` and know nothing about
//! sentences, lists or footnotes. This library reflows that output:
//!
//! - **Line merging**: fragments split mid-sentence or at hyphenated line
//!   breaks are joined back together
//! - **Headings and lists**: bold or uppercase lines become headings, and
//!   `1)`, `IV.`, `b)` and `[3]` markers become nested ordered lists
//! - **Footnotes**: references such as ` 3)` are linked to the trailing
//!   footnote list, tolerating a few unreferenced footnotes
//! - **Images**: image paths are rewritten to a publish location
//! - **Metadata**: leading `Titel:`/`Jaar:` paragraphs are split off as JSON
//!
//! ## Quick Start
//!
//! ```
//! let html = docreflow::to_html("<p>Title</p><p>1) First item.</p><p>Plain text.</p>")?;
//! assert!(html.starts_with("<h1>Title</h1>\n<ol>\n"));
//! # Ok::<(), docreflow::Error>(())
//! ```

pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod render;

// Re-export commonly used types
pub use convert::{ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter};
pub use error::{Error, Result};
pub use model::{Block, Document, FootnoteReport, Image, Line, ListItem, Metadata, NumberStyle};
pub use parser::{CleanupOptions, CleanupPreset, ErrorMode, ParseOptions};
pub use pipeline::Pipeline;
pub use render::{JsonFormat, ReflowStats, RenderOptions, RenderResult};

use std::path::Path;

/// Restructure converter output with default options.
///
/// # Example
///
/// ```
/// let doc = docreflow::process("<p>Title</p><p>Some text.</p>")?;
/// assert_eq!(doc.lines(), vec!["<h1>Title</h1>", "<p>Some text.</p>"]);
/// # Ok::<(), docreflow::Error>(())
/// ```
pub fn process(html: &str) -> Result<Document> {
    Pipeline::new().run(html)
}

/// Restructure converter output with custom options.
///
/// # Example
///
/// ```
/// use docreflow::{process_with_options, ParseOptions, RenderOptions};
///
/// let doc = process_with_options(
///     "<p>Title</p><p><img src=\"a.png\" /></p>",
///     ParseOptions::new().lenient(),
///     RenderOptions::new().with_image_base("/static"),
/// )?;
/// assert!(doc.lines()[1].contains("/static/a.png"));
/// # Ok::<(), docreflow::Error>(())
/// ```
pub fn process_with_options(
    html: &str,
    parse_options: ParseOptions,
    render_options: RenderOptions,
) -> Result<Document> {
    Pipeline::with_options(parse_options, render_options).run(html)
}

/// Restructure converter output and render it as HTML.
pub fn to_html(html: &str) -> Result<String> {
    let doc = process(html)?;
    Ok(render::to_html(&doc))
}

/// Convert a file with the default converters.
///
/// # Example
///
/// ```no_run
/// use docreflow::{convert_file, ConvertOptions};
///
/// let result = convert_file("report.html", &ConvertOptions::default())?;
/// println!("{}", result.content);
/// # Ok::<(), docreflow::Error>(())
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> Result<ConvertResult> {
    ConverterRegistry::with_defaults().convert(path.as_ref(), options)
}

/// Builder for restructuring documents.
///
/// # Example
///
/// ```no_run
/// use docreflow::Reflow;
///
/// let html = Reflow::new()
///     .lenient()
///     .with_image_base("/static/images")
///     .process_file("report.html")?
///     .to_html();
/// # Ok::<(), docreflow::Error>(())
/// ```
pub struct Reflow {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Reflow {
    /// Create a new Reflow builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Enable lenient mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parse_options = self.parse_options.sequential();
        self
    }

    /// Enable or disable metadata extraction.
    pub fn with_metadata(mut self, extract: bool) -> Self {
        self.parse_options = self.parse_options.with_metadata(extract);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.parse_options = self
            .parse_options
            .with_cleanup(CleanupOptions::from_preset(preset));
        self
    }

    /// Set the static image base path.
    pub fn with_image_base(mut self, base: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_image_base(base);
        self
    }

    /// Enable or disable footnote linking.
    pub fn with_footnotes(mut self, link: bool) -> Self {
        self.render_options = self.render_options.with_footnotes(link);
        self
    }

    /// Restructure converter output.
    pub fn process(self, html: &str) -> Result<ReflowResult> {
        self.process_named(html, None)
    }

    /// Restructure a file; its stem names the image subdirectory.
    pub fn process_file<P: AsRef<Path>>(self, path: P) -> Result<ReflowResult> {
        let path = path.as_ref();
        let html = std::fs::read_to_string(path)?;
        let stem = path.file_stem().and_then(|s| s.to_str());
        self.process_named(&html, stem)
    }

    fn process_named(self, html: &str, stem: Option<&str>) -> Result<ReflowResult> {
        let pipeline = Pipeline::with_options(self.parse_options, self.render_options);
        let document = pipeline.run_document(html, stem)?;
        Ok(ReflowResult { document })
    }
}

impl Default for Reflow {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of restructuring a document.
pub struct ReflowResult {
    /// The restructured document
    pub document: Document,
}

impl ReflowResult {
    /// Render as HTML.
    pub fn to_html(&self) -> String {
        render::to_html(&self.document)
    }

    /// Render the metadata as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document.metadata, format)
    }

    /// Collect statistics.
    pub fn stats(&self) -> ReflowStats {
        ReflowStats::from_document(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
