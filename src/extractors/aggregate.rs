//! Document-level collection of findings.

use crate::extractors::finding::{Category, Finding};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Categorized, deduplicated output of one extraction.
///
/// Drawing dimensions are whole line texts, unique and sorted in byte order.
/// Part numbers and tolerances are unique by text and keep the order in
/// which they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Drawing-area dimension lines
    pub drawing_dimensions: Vec<String>,
    /// Part numbers found in the title block
    pub part_numbers: Vec<Finding>,
    /// General tolerances found in the title block
    pub general_tolerances: Vec<Finding>,
}

impl ExtractionResult {
    /// True when nothing was found.
    pub fn is_empty(&self) -> bool {
        self.drawing_dimensions.is_empty()
            && self.part_numbers.is_empty()
            && self.general_tolerances.is_empty()
    }

    /// Sum of the three section sizes.
    pub fn total_items(&self) -> usize {
        self.drawing_dimensions.len() + self.part_numbers.len() + self.general_tolerances.len()
    }
}

/// Accumulates findings across pages.
#[derive(Debug, Default)]
pub struct Aggregator {
    dimensions: BTreeSet<String>,
    part_numbers: IndexMap<String, Finding>,
    tolerances: IndexMap<String, Finding>,
}

impl Aggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one finding.
    pub fn add(&mut self, finding: Finding) {
        if finding.category.is_dimension() {
            self.dimensions.insert(finding.text);
            return;
        }

        let seen = match finding.category {
            Category::PartNumber => &mut self.part_numbers,
            _ => &mut self.tolerances,
        };
        seen.entry(finding.text.clone()).or_insert(finding);
    }

    /// Add every finding from an iterator.
    pub fn extend<I: IntoIterator<Item = Finding>>(&mut self, findings: I) {
        for finding in findings {
            self.add(finding);
        }
    }

    /// Produce the final result.
    pub fn finish(self) -> ExtractionResult {
        ExtractionResult {
            drawing_dimensions: self.dimensions.into_iter().collect(),
            part_numbers: self.part_numbers.into_values().collect(),
            general_tolerances: self.tolerances.into_values().collect(),
        }
    }
}
