//! Configuration for dimension extraction.
//!
//! Every knob has a default matching common ANSI/ISO title-block layouts, so
//! `ExtractionConfig::default()` is the normal entry point. A JSON file can
//! override any subset of fields; missing fields keep their defaults.

use crate::error::Result;
use crate::regions::Quadrant;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default part-number format (`PRT-###-####-##`).
pub const DEFAULT_PART_NUMBER_PATTERN: &str = r"PRT-[0-9]{3}-[0-9]{4}-[0-9]{2}";

/// Keyword search settings for one kind of region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionKeywords {
    /// Literal strings whose occurrences mark the region
    pub keywords: Vec<String>,
    /// Restrict hits to this quadrant of the page
    pub quadrant: Option<Quadrant>,
}

impl RegionKeywords {
    fn new(keywords: &[&str], quadrant: Quadrant) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            quadrant: Some(quadrant),
        }
    }
}

/// A rectangle expressed as fractions of the page size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageFraction {
    /// Left edge, fraction of page width
    pub x0: f32,
    /// Top edge, fraction of page height
    pub y0: f32,
    /// Right edge, fraction of page width
    pub x1: f32,
    /// Bottom edge, fraction of page height
    pub y1: f32,
}

/// Tolerances used when grouping PDF spans into visual lines.
///
/// All values are multiples of the span height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineAssemblyConfig {
    /// Maximum baseline difference for two spans to share a line
    pub baseline_tolerance: f32,
    /// Maximum horizontal gap before a new line is started
    pub max_gap: f32,
    /// Gap above which a space is inserted between joined spans
    pub word_gap: f32,
}

impl Default for LineAssemblyConfig {
    fn default() -> Self {
        Self {
            baseline_tolerance: 0.5,
            max_gap: 3.0,
            word_gap: 0.15,
        }
    }
}

/// Dimension extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Title-block keywords (searched in the bottom-right quadrant by default)
    pub title_block: RegionKeywords,
    /// Material/finish table keywords (bottom-left by default)
    pub material_table: RegionKeywords,
    /// Padding added around the union of keyword hits
    pub padding: f32,
    /// Title-block rectangle used when no keyword is found
    pub title_block_fallback: PageFraction,
    /// Characters accepted in place of a diameter glyph (OCR confusions)
    pub diameter_substitutes: Vec<char>,
    /// Regex for part numbers inside the title block
    pub part_number_pattern: String,
    /// Drop tolerance matches that fall inside a part number (`-044` in `PRT-044-...`)
    pub skip_tolerances_in_part_numbers: bool,
    /// Span-to-line grouping tolerances
    pub lines: LineAssemblyConfig,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            title_block: RegionKeywords::new(
                &["PRT-", "DRAWN BY", "APPROVED BY", "SCALE", "SHEET", "REV", "DWG NO."],
                Quadrant::BottomRight,
            ),
            material_table: RegionKeywords::new(
                &["MATERIAL", "FINISH", "EXTENSION", "TRAITEMENT DE SURFACE", "TREATMENT"],
                Quadrant::BottomLeft,
            ),
            padding: 10.0,
            title_block_fallback: PageFraction {
                x0: 0.60,
                y0: 0.75,
                x1: 0.95,
                y1: 0.95,
            },
            diameter_substitutes: vec!['0', 'O'],
            part_number_pattern: DEFAULT_PART_NUMBER_PATTERN.to_string(),
            skip_tolerances_in_part_numbers: true,
            lines: LineAssemblyConfig::default(),
        }
    }
}

impl ExtractionConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Set the region padding.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Replace the OCR diameter substitutes (empty disables the heuristic).
    pub fn with_diameter_substitutes(mut self, substitutes: Vec<char>) -> Self {
        self.diameter_substitutes = substitutes;
        self
    }

    /// Replace the part-number pattern.
    pub fn with_part_number_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.part_number_pattern = pattern.into();
        self
    }

    /// Keep or drop tolerance matches overlapping a part number.
    pub fn with_skip_tolerances_in_part_numbers(mut self, skip: bool) -> Self {
        self.skip_tolerances_in_part_numbers = skip;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keywords() {
        let config = ExtractionConfig::default();
        assert!(config.title_block.keywords.contains(&"DRAWN BY".to_string()));
        assert_eq!(config.title_block.quadrant, Some(Quadrant::BottomRight));
        assert_eq!(config.material_table.quadrant, Some(Quadrant::BottomLeft));
        assert_eq!(config.padding, 10.0);
        assert_eq!(config.diameter_substitutes, vec!['0', 'O']);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ExtractionConfig::from_json_str(
            r#"{ "padding": 4.0, "diameter_substitutes": [] }"#,
        )
        .unwrap();
        assert_eq!(config.padding, 4.0);
        assert!(config.diameter_substitutes.is_empty());
        assert_eq!(config.part_number_pattern, DEFAULT_PART_NUMBER_PATTERN);
        assert!(config.skip_tolerances_in_part_numbers);
        assert_eq!(config.lines, LineAssemblyConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let config = ExtractionConfig::default().with_padding(2.5);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(ExtractionConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_quadrant_names_in_json() {
        let config = ExtractionConfig::from_json_str(
            r#"{ "material_table": { "keywords": ["ALLOY"], "quadrant": null } }"#,
        )
        .unwrap();
        assert_eq!(config.material_table.keywords, vec!["ALLOY".to_string()]);
        assert_eq!(config.material_table.quadrant, None);

        let json = serde_json::to_string(&Quadrant::BottomRight).unwrap();
        assert_eq!(json, "\"bottom_right\"");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = ExtractionConfig::from_json_str("{ padding: }").unwrap_err();
        assert!(matches!(err, crate::error::Error::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dims.json");
        std::fs::write(&path, r#"{ "part_number_pattern": "DWG-[0-9]+" }"#).unwrap();
        let config = ExtractionConfig::from_file(&path).unwrap();
        assert_eq!(config.part_number_pattern, "DWG-[0-9]+");
    }
}
