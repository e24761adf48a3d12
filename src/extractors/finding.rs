//! Classified findings.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Diameter callout (`Ø.201`, `8X ⌀6`)
    Diameter,
    /// Radius callout (`R2.250`, `R17/32`)
    Radius,
    /// Angle (`60°`)
    Angle,
    /// Thread or bolt callout (`10-32 UNF`)
    Thread,
    /// Bare fraction (`3/16`)
    Fraction,
    /// Plain linear number (`4.50`, `10,06`)
    Linear,
    /// Part number from the title block
    PartNumber,
    /// General tolerance from the title block (`±0.005`)
    GeneralTolerance,
}

impl Category {
    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Diameter => "Diameter",
            Category::Radius => "Radius",
            Category::Angle => "Angle",
            Category::Thread => "Thread",
            Category::Fraction => "Fraction",
            Category::Linear => "Linear",
            Category::PartNumber => "Part Number",
            Category::GeneralTolerance => "General Tolerance",
        }
    }

    /// True for the six drawing-area dimension categories.
    pub fn is_dimension(&self) -> bool {
        !matches!(self, Category::PartNumber | Category::GeneralTolerance)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One classified line or token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Category decided by the taxonomy
    pub category: Category,
    /// Reported text: the whole line for dimensions, the match otherwise
    pub text: String,
    /// Captured value (number, fraction or code)
    pub value: Option<String>,
    /// Zero-based page index
    pub page: Option<usize>,
    /// Bounding box of the originating line
    pub bbox: Option<Rect>,
}

impl Finding {
    /// Create a finding with no location attached.
    pub fn new(category: Category, text: impl Into<String>, value: Option<String>) -> Self {
        Self {
            category,
            text: text.into(),
            value,
            page: None,
            bbox: None,
        }
    }

    /// Attach page index and bounding box.
    pub fn at(mut self, page: usize, bbox: Rect) -> Self {
        self.page = Some(page);
        self.bbox = Some(bbox);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Category::PartNumber.to_string(), "Part Number");
        assert_eq!(Category::GeneralTolerance.label(), "General Tolerance");
        assert_eq!(Category::Diameter.to_string(), "Diameter");
    }

    #[test]
    fn test_is_dimension() {
        assert!(Category::Linear.is_dimension());
        assert!(Category::Thread.is_dimension());
        assert!(!Category::PartNumber.is_dimension());
        assert!(!Category::GeneralTolerance.is_dimension());
    }

    #[test]
    fn test_at_sets_location() {
        let f = Finding::new(Category::Angle, "60°", Some("60".into()))
            .at(2, Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(f.page, Some(2));
        assert_eq!(f.bbox, Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
    }
}
