//! Integration tests for reading drawings through `pdf_oxide`.

use dimension_oxide::source::{PdfSpanSource, SpanSource};
use dimension_oxide::{extract_dimensions_from_pdf, Error, ExtractionConfig};
use pdf_oxide::api::Pdf;
use std::io::Write;

fn write_pdf(dir: &tempfile::TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("drawing.pdf");
    Pdf::from_text(text)
        .expect("Failed to create PDF")
        .save(&path)
        .expect("Failed to save PDF");
    path
}

#[test]
fn test_not_a_pdf() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"this is a plain text file, not a drawing").unwrap();

    let err = extract_dimensions_from_pdf(file.path()).unwrap_err();
    match err {
        Error::DocumentOpen { path, .. } => assert_eq!(path, file.path()),
        other => panic!("expected DocumentOpen, got {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let err = extract_dimensions_from_pdf("does-not-exist.pdf").unwrap_err();
    assert!(matches!(err, Error::DocumentOpen { .. }));
    assert!(err.to_string().contains("does-not-exist.pdf"));
}

#[test]
fn test_generated_pdf_pages() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_pdf(&dir, "R2.250");

    let mut source = PdfSpanSource::open(&path, &ExtractionConfig::default()).unwrap();
    assert_eq!(source.page_count().unwrap(), 1);

    let page = source.page(0).unwrap();
    assert!(page.width > 0.0 && page.height > 0.0);

    let count = source.page_count().unwrap();
    assert!(matches!(source.page(count), Err(Error::PageOutOfRange { .. })));
}

#[test]
fn test_generated_pdf_extraction_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_pdf(&dir, "R2.250");

    let first = extract_dimensions_from_pdf(&path).unwrap();
    let second = extract_dimensions_from_pdf(&path).unwrap();
    assert_eq!(first, second);
    assert!(first.drawing_dimensions.iter().any(|d| d.contains("R2.250")));
    assert!(first.part_numbers.is_empty());
}
