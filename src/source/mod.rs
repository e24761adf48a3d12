//! Page sources.
//!
//! The extractor never touches PDF internals directly. It asks a
//! [`SpanSource`] for the page count and for each page's lines, which keeps
//! the classification pipeline testable against hand-built pages.

mod pdf;

pub use pdf::{flip_span_box, PdfSpanSource};

use crate::error::{Error, Result};
use crate::layout::Page;

/// Anything that can hand out pages of positioned text.
pub trait SpanSource {
    /// Number of pages in the document.
    fn page_count(&mut self) -> Result<usize>;

    /// Lines and size of page `index` (zero-based), in top-down page space.
    fn page(&mut self, index: usize) -> Result<Page>;
}

/// A source backed by pages already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pages: Vec<Page>,
}

impl InMemorySource {
    /// Create a source over the given pages.
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }
}

impl SpanSource for InMemorySource {
    fn page_count(&mut self) -> Result<usize> {
        Ok(self.pages.len())
    }

    fn page(&mut self, index: usize) -> Result<Page> {
        self.pages
            .get(index)
            .cloned()
            .ok_or(Error::PageOutOfRange {
                page: index,
                count: self.pages.len(),
            })
    }
}
