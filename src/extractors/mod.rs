//! Dimension, part-number and tolerance extraction.
//!
//! Lines flow through three stages: the [`Taxonomy`] decides what a piece of
//! text is, the [`LineClassifier`] decides which rules a line is subject to
//! based on where it sits on the page, and the [`Aggregator`] merges findings
//! from all pages into an [`ExtractionResult`].

pub mod aggregate;
pub mod classifier;
pub mod dimension;
pub mod finding;
pub mod patterns;

pub use aggregate::{Aggregator, ExtractionResult};
pub use classifier::LineClassifier;
pub use dimension::{extract_dimensions_from_pdf, DimensionExtractor};
pub use finding::{Category, Finding};
pub use patterns::{Rule, RuleMatch, Taxonomy};
