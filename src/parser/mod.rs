//! Reading converter output: cleanup, metadata, fragments and lines.

mod cleanup;
mod merger;
mod metadata;
mod options;
mod patterns;
mod splitter;

pub use cleanup::{CleanupOptions, CleanupPipeline, CleanupPreset};
pub use merger::{merge_fragments, LineMerger};
pub use metadata::extract_metadata;
pub use options::{ErrorMode, ParseOptions};
pub use patterns::Patterns;
pub use splitter::{split_fragments, PARAGRAPH_BOUNDARY};
