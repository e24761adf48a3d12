//! Output converters for extraction results.
//!
//! # Examples
//!
//! ```
//! use dimension_oxide::converters::render_report;
//! use dimension_oxide::ExtractionResult;
//!
//! let result = ExtractionResult {
//!     drawing_dimensions: vec!["60°".to_string()],
//!     ..Default::default()
//! };
//! let report = render_report(&result);
//! assert!(report.starts_with("Categorized Dimensions Report\n"));
//! assert!(report.ends_with("Total items extracted: 1\n"));
//! ```

pub mod report;

pub use report::{
    render_console, render_display, render_report, write_report, NOTHING_FOUND, REPORT_FILE_NAME,
};
