//! Page layout model.
//!
//! This module provides the geometry-carrying text model the classifier
//! works on:
//! - [`Span`]: atomic text run with a bounding box
//! - [`Line`]: spans forming one visual line
//! - [`Page`]: lines plus page size
//! - [`build_lines`]: baseline clustering of loose spans into lines

pub mod line_builder;
pub mod page;

// Re-export main types
pub use line_builder::build_lines;
pub use page::{Line, Page, Span};
