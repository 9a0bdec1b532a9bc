//! Rendering options and configuration.

/// Options for restructuring and rendering a document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Static path images are published under (e.g., "/static/images")
    pub image_base: Option<String>,

    /// Place each document's images in a subdirectory named after the document
    pub image_dir_per_document: bool,

    /// Link footnote references to the trailing footnote list
    pub link_footnotes: bool,

    /// JSON layout for metadata output
    pub json_format: super::JsonFormat,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the static image base path.
    pub fn with_image_base(mut self, base: impl Into<String>) -> Self {
        self.image_base = Some(base.into());
        self
    }

    /// Enable or disable per-document image subdirectories.
    pub fn with_image_dir_per_document(mut self, enabled: bool) -> Self {
        self.image_dir_per_document = enabled;
        self
    }

    /// Enable or disable footnote linking.
    pub fn with_footnotes(mut self, link: bool) -> Self {
        self.link_footnotes = link;
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: super::JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Image base path for a document with the given file stem.
    ///
    /// Returns `None` when images are left untouched.
    pub fn image_base_for(&self, stem: Option<&str>) -> Option<String> {
        let base = self.image_base.as_deref()?;
        match stem {
            Some(stem) if self.image_dir_per_document => {
                Some(super::images::join_path(base, stem))
            }
            _ => Some(base.to_string()),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            image_base: None,
            image_dir_per_document: true,
            link_footnotes: true,
            json_format: super::JsonFormat::Pretty,
        }
    }
}
