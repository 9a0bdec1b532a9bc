//! Restructuring merged lines into blocks and rendering them.

mod footnotes;
mod html;
mod images;
mod json;
mod options;
mod result;
mod tagger;

pub use footnotes::{collect_footnotes, link_footnotes, resolve_references, MAX_SKIPPED_FOOTNOTES};
pub use html::to_html;
pub use images::{join_path, rewrite_images};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::{ReflowStats, RenderResult};
pub use tagger::tag_lines;
