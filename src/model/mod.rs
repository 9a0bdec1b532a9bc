//! Document model types for restructured content.
//!
//! This module defines the intermediate representations passed between
//! pipeline stages: fragments and lines before tagging, blocks after it.

mod block;
mod document;
mod footnote;
mod line;
mod list;

pub use block::{Block, Image};
pub use document::{Document, Metadata};
pub use footnote::{footnote_anchor, FootnoteReport, FootnoteTable};
pub use line::{Fragment, Line};
pub use list::{ListContext, ListItem, ListTransition, NumberStyle};
