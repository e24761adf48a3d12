//! Page, line and span types consumed by the classifier.

use crate::geometry::{union_all, Point, Rect};
use crate::search::{SearchMatch, SearchOptions, TextSearcher};

/// An atomic run of text with its own bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    /// The text of the run
    pub text: String,
    /// Bounding box in page space
    pub bbox: Rect,
    /// Baseline start point
    pub origin: Point,
}

impl Span {
    /// Create a span whose origin is the bottom-left corner of its box.
    pub fn new(text: impl Into<String>, bbox: Rect) -> Self {
        Self {
            text: text.into(),
            origin: Point::new(bbox.left(), bbox.bottom()),
            bbox,
        }
    }
}

/// One visual text line: spans in reading order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Line {
    /// Spans, left to right
    pub spans: Vec<Span>,
}

impl Line {
    /// Create a line from its spans.
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Concatenated text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Union of all span boxes (empty boxes are ignored).
    pub fn bbox(&self) -> Rect {
        union_all(self.spans.iter().map(|s| &s.bbox))
    }
}

/// A page of lines with its size.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Zero-based page index within the document
    pub index: usize,
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
    /// Lines in extraction order
    pub lines: Vec<Line>,
}

impl Page {
    /// Create an empty page.
    pub fn new(index: usize, width: f32, height: f32) -> Self {
        Self {
            index,
            width,
            height,
            lines: Vec::new(),
        }
    }

    /// Builder-style helper to append a line.
    pub fn with_line(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }

    /// Bounding boxes of every case-insensitive occurrence of `needle`.
    pub fn search_for(&self, needle: &str) -> Vec<Rect> {
        let options = SearchOptions::case_insensitive().with_literal(true);
        // Literal patterns always compile.
        TextSearcher::search_page(self, needle, &options)
            .map(|matches| matches.into_iter().map(|m: SearchMatch| m.bbox).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_text_and_bbox() {
        let line = Line::new(vec![
            Span::new("8X ", Rect::new(10.0, 10.0, 15.0, 8.0)),
            Span::new("Ø.201", Rect::new(25.0, 9.0, 30.0, 10.0)),
        ]);
        assert_eq!(line.text(), "8X Ø.201");
        assert_eq!(line.bbox(), Rect::from_points(10.0, 9.0, 55.0, 19.0));
    }

    #[test]
    fn test_degenerate_span_does_not_grow_bbox() {
        let line = Line::new(vec![
            Span::new("", Rect::new(500.0, 500.0, 0.0, 0.0)),
            Span::new("4.50", Rect::new(10.0, 10.0, 20.0, 8.0)),
        ]);
        assert_eq!(line.bbox(), Rect::new(10.0, 10.0, 20.0, 8.0));
    }

    #[test]
    fn test_span_origin_is_baseline_left() {
        let span = Span::new("R2.250", Rect::new(3.0, 4.0, 10.0, 6.0));
        assert_eq!(span.origin, Point::new(3.0, 10.0));
    }
}
