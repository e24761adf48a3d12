//! Text search over extracted page lines.
//!
//! This module provides regex-based search with position tracking,
//! returning a bounding box for each match. The region locator uses it for
//! case-insensitive literal keyword lookup.
//!
//! ## Example
//!
//! ```
//! use dimension_oxide::geometry::Rect;
//! use dimension_oxide::layout::{Line, Page, Span};
//! use dimension_oxide::search::{SearchOptions, TextSearcher};
//!
//! let page = Page::new(0, 600.0, 400.0)
//!     .with_line(Line::new(vec![Span::new("SCALE 1:2", Rect::new(400.0, 350.0, 90.0, 10.0))]));
//!
//! let options = SearchOptions::case_insensitive().with_literal(true);
//! let results = TextSearcher::search_page(&page, "scale", &options).unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].text, "SCALE");
//! ```

mod text_search;

pub use text_search::{SearchMatch, SearchOptions, TextSearcher};
