//! Text search implementation with regex support.
//!
//! Searches run line by line over the concatenated span text, and each match
//! is mapped back to page space. Inside a span, glyph positions are not known,
//! so every character is given an equal share of the span width.

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::layout::{Page, Span};
use regex::{Regex, RegexBuilder};

/// A search result with position information.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchMatch {
    /// Index of the line (within the page) holding the match
    pub line: usize,
    /// The matched text
    pub text: String,
    /// Bounding box of the match on the page
    pub bbox: Rect,
}

/// Options for text search.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Case insensitive search
    pub case_insensitive: bool,
    /// Treat pattern as literal text (not regex)
    pub literal: bool,
}

impl SearchOptions {
    /// Enable case-insensitive search.
    pub fn case_insensitive() -> Self {
        Self {
            case_insensitive: true,
            ..Default::default()
        }
    }

    /// Treat pattern as literal text (escape regex special characters).
    pub fn with_literal(mut self, value: bool) -> Self {
        self.literal = value;
        self
    }
}

/// Text searcher over page lines.
pub struct TextSearcher;

impl TextSearcher {
    /// Search for a pattern on one page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if a non-literal pattern does not compile.
    pub fn search_page(
        page: &Page,
        pattern: &str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchMatch>> {
        let regex = Self::build_regex(pattern, options)?;
        let mut results = Vec::new();

        for (line_idx, line) in page.lines.iter().enumerate() {
            let (full_text, span_positions) = Self::build_text_with_positions(&line.spans);

            for mat in regex.find_iter(&full_text) {
                let bbox = Self::compute_match_bbox(
                    mat.start(),
                    mat.end(),
                    &line.spans,
                    &span_positions,
                );
                results.push(SearchMatch {
                    line: line_idx,
                    text: mat.as_str().to_string(),
                    bbox,
                });
            }
        }

        Ok(results)
    }

    /// Build regex from pattern and options.
    fn build_regex(pattern: &str, options: &SearchOptions) -> Result<Regex> {
        let pattern_str = if options.literal {
            regex::escape(pattern)
        } else {
            pattern.to_string()
        };

        RegexBuilder::new(&pattern_str)
            .case_insensitive(options.case_insensitive)
            .build()
            .map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Concatenate span texts, tracking `(start, end)` byte offsets per span.
    fn build_text_with_positions(spans: &[Span]) -> (String, Vec<(usize, usize)>) {
        let mut full_text = String::new();
        let mut positions = Vec::with_capacity(spans.len());

        for span in spans {
            let start = full_text.len();
            full_text.push_str(&span.text);
            positions.push((start, full_text.len()));
        }

        (full_text, positions)
    }

    /// Compute the bounding box of a match that may cover several spans.
    fn compute_match_bbox(
        match_start: usize,
        match_end: usize,
        spans: &[Span],
        span_positions: &[(usize, usize)],
    ) -> Rect {
        let mut combined = Rect::empty();

        for (span, &(span_start, span_end)) in spans.iter().zip(span_positions) {
            if span_start >= match_end || span_end <= match_start {
                continue;
            }

            let char_count = span.text.chars().count();
            if char_count == 0 {
                continue;
            }

            let local_start = match_start.max(span_start) - span_start;
            let local_end = match_end.min(span_end) - span_start;
            let c0 = span.text[..local_start].chars().count() as f32;
            let c1 = span.text[..local_end].chars().count() as f32;
            let char_width = span.bbox.width / char_count as f32;

            let piece = Rect::new(
                span.bbox.x + c0 * char_width,
                span.bbox.y,
                (c1 - c0) * char_width,
                span.bbox.height,
            );
            combined = combined.union(&piece);
        }

        combined
    }
}
