//! Extract dimensions from a drawing PDF
//!
//! Prints the categorized listing and writes `categorized_dimensions_report.txt`
//! to the current directory.
//!
//! Usage:
//!   cargo run --release --bin extract_dimensions
//!   cargo run --release --bin extract_dimensions -- path/to/drawing.pdf
//!
//! Set `DIMENSION_OXIDE_CONFIG` to a JSON file to override the extraction
//! configuration, and `RUST_LOG=debug` to see the located regions.

use dimension_oxide::converters::{render_console, write_report, REPORT_FILE_NAME};
use dimension_oxide::{DimensionExtractor, ExtractionConfig};
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_PDF: &str = "PRT-044-0110-01.pdf";
const CONFIG_ENV: &str = "DIMENSION_OXIDE_CONFIG";

fn load_config() -> dimension_oxide::Result<ExtractionConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            log::info!("Loading configuration from {}", PathBuf::from(&path).display());
            ExtractionConfig::from_file(path)
        },
        None => Ok(ExtractionConfig::default()),
    }
}

fn run(pdf_path: PathBuf) -> dimension_oxide::Result<()> {
    let extractor = DimensionExtractor::new(load_config()?)?;
    let result = extractor.extract_path(&pdf_path)?;

    print!("{}", render_console(&result));
    write_report(&result, REPORT_FILE_NAME)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let pdf_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PDF));

    match run(pdf_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
