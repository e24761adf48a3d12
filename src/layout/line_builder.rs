//! Grouping of loose spans into visual lines.
//!
//! PDF producers emit text runs in arbitrary order and rarely mark line
//! breaks. Spans are first clustered into baseline bands, where a span joins
//! a band when its baseline is within tolerance of a neighbour already in it.
//! Each band is then ordered left to right and split wherever the horizontal
//! gap is too large, which keeps two dimension callouts that happen to be
//! vertically aligned apart.

use crate::config::LineAssemblyConfig;
use crate::layout::page::{Line, Span};
use std::cmp::Ordering;

fn cmp_f32(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn join_height(a: &Span, b: &Span) -> f32 {
    a.bbox.height.max(b.bbox.height).max(1.0)
}

/// Cluster spans whose baselines chain within tolerance.
///
/// Bands come out top to bottom. Span order inside a band is unspecified.
fn baseline_bands(mut spans: Vec<Span>, config: &LineAssemblyConfig) -> Vec<Vec<Span>> {
    spans.sort_by(|a, b| cmp_f32(a.origin.y, b.origin.y));

    let mut bands: Vec<Vec<Span>> = Vec::new();
    for span in spans {
        let joins = bands.last().and_then(|band| band.last()).is_some_and(|prev| {
            (span.origin.y - prev.origin.y).abs()
                <= config.baseline_tolerance * join_height(prev, &span)
        });
        match bands.last_mut() {
            Some(band) if joins => band.push(span),
            _ => bands.push(vec![span]),
        }
    }
    bands
}

/// Split one baseline band into lines, left to right.
fn split_band(mut band: Vec<Span>, config: &LineAssemblyConfig, lines: &mut Vec<Line>) {
    band.sort_by(|a, b| cmp_f32(a.bbox.x, b.bbox.x));

    let mut current: Vec<Span> = Vec::new();
    for mut span in band {
        if let Some(prev) = current.last() {
            let height = join_height(prev, &span);
            let gap = span.bbox.left() - prev.bbox.right();

            if gap <= config.max_gap * height {
                let needs_space = gap > config.word_gap * height
                    && !prev.text.ends_with(char::is_whitespace)
                    && !span.text.starts_with(char::is_whitespace);
                if needs_space {
                    span.text.insert(0, ' ');
                }
            } else {
                lines.push(Line::new(std::mem::take(&mut current)));
            }
        }
        current.push(span);
    }

    if !current.is_empty() {
        lines.push(Line::new(current));
    }
}

/// Group spans into lines.
///
/// Lines are returned top to bottom, spans inside a line left to right.
/// When two joined spans are separated by a visible gap and neither side
/// carries whitespace at the join, a single space is prepended to the later
/// span so `10-32` and `UNF` read as `10-32 UNF`.
pub fn build_lines(mut spans: Vec<Span>, config: &LineAssemblyConfig) -> Vec<Line> {
    spans.retain(|s| !s.text.is_empty());

    let mut lines = Vec::new();
    for band in baseline_bands(spans, config) {
        split_band(band, config, &mut lines);
    }

    log::trace!("Assembled {} lines", lines.len());
    lines
}
