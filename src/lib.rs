//! # Dimension Oxide
//!
//! Dimension, part-number and tolerance extraction from mechanical drawings in PDF.
//!
//! ## How it works
//!
//! - **Spans to lines**: positioned text runs from `pdf_oxide` are grouped into visual lines
//! - **Region discovery**: title-block and material-table keywords locate the metadata tables,
//!   with a fixed bottom-right fallback for the title block
//! - **Classification**: drawing-area lines are labelled by an ordered pattern taxonomy
//!   (diameter, radius, angle, thread, fraction, linear); table lines yield part numbers and
//!   general tolerances
//! - **Aggregation**: dimensions are sorted and unique, part numbers and tolerances keep
//!   first-seen order
//!
//! ## Quick Start
//!
//! ```no_run
//! use dimension_oxide::converters::{render_console, write_report, REPORT_FILE_NAME};
//! use dimension_oxide::extract_dimensions_from_pdf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let result = extract_dimensions_from_pdf("PRT-044-0110-01.pdf")?;
//! print!("{}", render_console(&result));
//! write_report(&result, REPORT_FILE_NAME)?;
//! # Ok(())
//! # }
//! ```
//!
//! Regions, OCR diameter substitutes and the part-number pattern are all
//! configurable through [`ExtractionConfig`].
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Geometry and page model
pub mod geometry;
pub mod layout;

// Keyword search and region discovery
pub mod regions;
pub mod search;

// Classification and aggregation
pub mod extractors;

// Span sources
pub mod source;

// Output
pub mod converters;

pub use config::ExtractionConfig;
pub use error::{Error, Result};
pub use extractors::{
    extract_dimensions_from_pdf, Category, DimensionExtractor, ExtractionResult, Finding,
};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
