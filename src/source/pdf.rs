//! PDF-backed span source.

use crate::config::{ExtractionConfig, LineAssemblyConfig};
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::layout::{build_lines, Page, Span};
use crate::source::SpanSource;
use pdf_oxide::editor::DocumentEditor;
use std::path::Path;

/// Reads spans from a PDF with `pdf_oxide` and assembles them into lines.
pub struct PdfSpanSource {
    editor: DocumentEditor,
    lines: LineAssemblyConfig,
}

impl PdfSpanSource {
    /// Open a PDF file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DocumentOpen`] when the file is missing, unreadable
    /// or not a PDF.
    pub fn open(path: impl AsRef<Path>, config: &ExtractionConfig) -> Result<Self> {
        let path = path.as_ref();
        let editor = DocumentEditor::open(path).map_err(|source| Error::DocumentOpen {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Opened {} ({} pages)", path.display(), editor.current_page_count());

        Ok(Self {
            editor,
            lines: config.lines,
        })
    }
}

impl SpanSource for PdfSpanSource {
    fn page_count(&mut self) -> Result<usize> {
        Ok(self.editor.current_page_count())
    }

    fn page(&mut self, index: usize) -> Result<Page> {
        let count = self.editor.current_page_count();
        if index >= count {
            return Err(Error::PageOutOfRange { page: index, count });
        }

        let media_box = self
            .editor
            .get_page_media_box(index)
            .map_err(|source| Error::Page { page: index, source })?;
        let raw = self
            .editor
            .source_mut()
            .extract_spans(index)
            .map_err(|source| Error::Page { page: index, source })?;

        let [llx, lly, urx, ury] = media_box;
        let width = (urx - llx).abs();
        let height = (ury - lly).abs();

        let spans: Vec<Span> = raw
            .into_iter()
            .map(|span| {
                let b = span.bbox;
                Span::new(span.text, flip_span_box(b.x, b.y, b.width, b.height, llx, ury))
            })
            .collect();
        log::trace!("Page {}: {} spans", index, spans.len());

        let mut page = Page::new(index, width, height);
        page.lines = build_lines(spans, &self.lines);
        Ok(page)
    }
}

/// Convert a bottom-up PDF box to the top-down page space used here.
///
/// `llx` and `ury` are the media box's left and top edges.
pub fn flip_span_box(x: f32, y: f32, width: f32, height: f32, llx: f32, ury: f32) -> Rect {
    Rect::new(x - llx, ury - (y + height), width, height)
}
