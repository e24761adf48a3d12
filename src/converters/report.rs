//! Plain-text renderings of an [`ExtractionResult`].
//!
//! Three forms share the same numbered entries (`01. 4.50`,
//! `02. [Part Number] PRT-044-0110-01`) and differ in framing:
//!
//! - [`render_report`]: the report file, byte-for-byte stable
//! - [`render_console`]: the command-line listing
//! - [`render_display`]: compact text for a viewer, also covering errors

use crate::error::Result;
use crate::extractors::{ExtractionResult, Finding};
use std::fmt::Write as _;
use std::path::Path;

/// Default file name of the written report.
pub const REPORT_FILE_NAME: &str = "categorized_dimensions_report.txt";

/// Text shown by [`render_display`] for an empty result.
pub const NOTHING_FOUND: &str = "No dimensions, part numbers, or general tolerances found in this PDF.";

struct Section {
    title: &'static str,
    empty: &'static str,
    entries: Vec<String>,
}

fn labelled(findings: &[Finding]) -> Vec<String> {
    findings
        .iter()
        .map(|f| format!("[{}] {}", f.category.label(), f.text))
        .collect()
}

fn sections(result: &ExtractionResult) -> [Section; 3] {
    [
        Section {
            title: "Drawing Dimensions",
            empty: "No drawing dimensions found.",
            entries: result.drawing_dimensions.clone(),
        },
        Section {
            title: "Part Numbers",
            empty: "No part numbers found.",
            entries: labelled(&result.part_numbers),
        },
        Section {
            title: "General Tolerances",
            empty: "No general tolerances found.",
            entries: labelled(&result.general_tolerances),
        },
    ]
}

fn numbered(entries: &[String]) -> impl Iterator<Item = String> + '_ {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{:02}. {}", i + 1, entry))
}

/// Render the report file contents.
pub fn render_report(result: &ExtractionResult) -> String {
    let mut out = String::new();
    out.push_str("Categorized Dimensions Report\n");
    out.push_str(&"=".repeat(40));
    out.push_str("\n\n");

    for section in sections(result) {
        let _ = writeln!(out, "--- {} ---", section.title);
        if section.entries.is_empty() {
            let _ = writeln!(out, "{}", section.empty);
        }
        for line in numbered(&section.entries) {
            let _ = writeln!(out, "{}", line);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "Total items extracted: {}", result.total_items());
    out
}

/// Write the report to `path`, creating or truncating it.
pub fn write_report(result: &ExtractionResult, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, render_report(result))?;
    log::info!("Report written to {}", path.display());
    Ok(())
}

/// Render the listing printed by the command-line tool.
pub fn render_console(result: &ExtractionResult) -> String {
    let mut out = String::new();

    for section in sections(result) {
        let _ = write!(out, "\n--- {} ---\n\n", section.title);
        if section.entries.is_empty() {
            let _ = write!(out, "{}\n\n", section.empty);
        }
        for line in numbered(&section.entries) {
            let _ = writeln!(out, "{}", line);
        }
    }

    let _ = write!(out, "\nTotal items extracted: {}\n\n", result.total_items());
    out
}

/// Render an extraction outcome for display.
///
/// Empty sections are left out. Errors render as `Error: <message>`.
pub fn render_display(outcome: &Result<ExtractionResult>) -> String {
    let result = match outcome {
        Ok(result) => result,
        Err(e) => return format!("Error: {}", e),
    };

    let mut lines = Vec::new();
    for section in sections(result) {
        if section.entries.is_empty() {
            continue;
        }
        lines.push(format!("--- {} ---", section.title));
        lines.extend(numbered(&section.entries));
        lines.push(String::new());
    }

    if lines.is_empty() {
        return NOTHING_FOUND.to_string();
    }
    lines.join("\n")
}
