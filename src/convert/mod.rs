//! Document converter module providing a plugin architecture for input formats.
//!
//! Converters are registered by file extension. The registry dispatches
//! single conversions and batch conversions of whole directories.
//!
//! # Example
//!
//! ```no_run
//! use docreflow::convert::{ConverterRegistry, ConvertOptions};
//! use std::path::Path;
//!
//! fn main() -> docreflow::Result<()> {
//!     let registry = ConverterRegistry::with_defaults();
//!     let result = registry.convert(Path::new("report.html"), &ConvertOptions::default())?;
//!     println!("{}", result.content);
//!     Ok(())
//! }
//! ```

mod html;

pub use html::HtmlConverter;

use crate::error::{Error, Result};
use crate::model::Metadata;
use crate::parser::ParseOptions;
use crate::render::{to_json, ReflowStats, RenderOptions};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Parsing options
    pub parse: ParseOptions,

    /// Rendering options
    pub render: RenderOptions,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Restructured HTML
    pub content: String,

    /// Metadata split off the document
    pub metadata: Metadata,

    /// Reflow statistics
    pub stats: ReflowStats,

    /// Document name used for output files
    pub stem: Option<String>,
}

impl ConvertResult {
    /// Create a new conversion result.
    pub fn new(content: String, metadata: Metadata) -> Self {
        Self {
            content,
            metadata,
            stats: ReflowStats::default(),
            stem: None,
        }
    }

    /// Set reflow statistics.
    pub fn with_stats(mut self, stats: ReflowStats) -> Self {
        self.stats = stats;
        self
    }

    /// Set the document name.
    pub fn with_stem(mut self, stem: impl Into<String>) -> Self {
        self.stem = Some(stem.into());
        self
    }

    /// Write `<stem>.html` and `<stem>.json` into `dir`, creating it if needed.
    ///
    /// Returns the paths written.
    pub fn write_to(&self, dir: &Path, options: &RenderOptions) -> Result<(PathBuf, PathBuf)> {
        let stem = self
            .stem
            .as_deref()
            .ok_or_else(|| Error::Other("Conversion result has no document name".into()))?;

        fs::create_dir_all(dir)?;

        let html_path = dir.join(format!("{stem}.html"));
        fs::write(&html_path, &self.content)?;

        let json_path = dir.join(format!("{stem}.json"));
        fs::write(&json_path, to_json(&self.metadata, options.json_format)?)?;

        Ok((html_path, json_path))
    }
}

/// Trait for document converters.
///
/// Implement this trait to add support for a new input format.
pub trait DocumentConverter: Send + Sync {
    /// Get the supported file extensions for this converter.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["html"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this converter.
    fn name(&self) -> &str;

    /// Convert a file at the given path.
    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult>;

    /// Convert from bytes.
    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult>;

    /// Check if this converter supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for document converters.
///
/// The registry maps file extensions to converters and provides
/// convenient methods for converting documents.
pub struct ConverterRegistry {
    converters: HashMap<String, Arc<dyn DocumentConverter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            converters: HashMap::new(),
        }
    }

    /// Create a registry with default converters (HTML).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(HtmlConverter::new()));
        registry
    }

    /// Register a converter.
    ///
    /// The converter will be registered for all its supported extensions.
    pub fn register(&mut self, converter: Arc<dyn DocumentConverter>) {
        for ext in converter.supported_extensions() {
            self.converters
                .insert(ext.to_lowercase(), converter.clone());
        }
    }

    /// Get a converter by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentConverter>> {
        self.converters.get(&ext.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.converters.contains_key(&ext.to_lowercase())
    }

    /// Check if a path has a supported extension.
    pub fn supports_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.supports(ext))
    }

    /// Get all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.converters.keys().map(|s| s.as_str()).collect()
    }

    /// Convert a file using the appropriate converter.
    pub fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(format!("{} has no extension", path.display())))?;

        let converter = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))?;

        converter.convert(path, options)
    }

    /// Convert bytes using the specified extension to determine the converter.
    pub fn convert_bytes(
        &self,
        bytes: &[u8],
        ext: &str,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let converter = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))?;

        converter.convert_bytes(bytes, options)
    }

    /// List the supported files directly inside `dir`, sorted by path.
    pub fn collect_inputs(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && self.supports_path(&path) {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Convert many files, in parallel unless `options.parse.parallel` is off.
    ///
    /// Results keep the order of `paths`; a failing document does not stop
    /// the others. `on_done` is called once per document as it finishes.
    pub fn convert_batch<F>(
        &self,
        paths: &[PathBuf],
        options: &ConvertOptions,
        on_done: F,
    ) -> Vec<Result<ConvertResult>>
    where
        F: Fn(&Path) + Send + Sync,
    {
        let convert_one = |path: &PathBuf| {
            let result = self.convert(path, options);
            if let Err(ref e) = result {
                log::warn!("Failed to convert {}: {}", path.display(), e);
            }
            on_done(path);
            result
        };

        if options.parse.parallel {
            paths.par_iter().map(convert_one).collect()
        } else {
            paths.iter().map(convert_one).collect()
        }
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
