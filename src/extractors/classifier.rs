//! Region-gated line classification.
//!
//! A line whose box touches the title block or the material table is table
//! content and is only searched for part numbers and tolerances. Any other
//! line is drawing content and is reported whole, once, under the first
//! dimension rule it matches.

use crate::extractors::finding::{Category, Finding};
use crate::extractors::patterns::Taxonomy;
use crate::layout::Line;
use crate::regions::PageRegions;

/// Applies a [`Taxonomy`] to lines.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    taxonomy: Taxonomy,
    skip_tolerances_in_part_numbers: bool,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(Taxonomy::default())
    }
}

impl LineClassifier {
    /// Create a classifier over a taxonomy.
    ///
    /// Tolerance matches inside part numbers are skipped.
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self {
            taxonomy,
            skip_tolerances_in_part_numbers: true,
        }
    }

    /// Keep (`false`) or drop (`true`) tolerance matches overlapping a part number.
    pub fn with_skip_tolerances_in_part_numbers(mut self, skip: bool) -> Self {
        self.skip_tolerances_in_part_numbers = skip;
        self
    }

    /// Classify one line of page `page_index`.
    ///
    /// Whitespace-only lines and lines matching nothing yield no findings.
    pub fn classify(&self, line: &Line, page_index: usize, regions: &PageRegions) -> Vec<Finding> {
        let text = line.text();
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        let bbox = line.bbox();

        if regions.is_table_content(&bbox) {
            let findings = self.classify_table_text(text);
            log::trace!("Table line {:?}: {} findings", text, findings.len());
            return findings.into_iter().map(|f| f.at(page_index, bbox)).collect();
        }

        match self.classify_drawing_text(text) {
            Some(finding) => {
                log::trace!("Drawing line {:?}: {}", text, finding.category);
                vec![finding.at(page_index, bbox)]
            },
            None => {
                log::trace!("Drawing line {:?}: no dimension", text);
                Vec::new()
            },
        }
    }

    /// Drawing-area rule: the whole line, labelled by the first matching rule.
    pub fn classify_drawing_text(&self, text: &str) -> Option<Finding> {
        self.taxonomy
            .classify(text)
            .map(|(category, m)| Finding::new(category, text, m.value))
    }

    /// Title-block rule: every part number, then every tolerance. Tolerances
    /// inside a part number are left out unless the classifier keeps them.
    pub fn classify_table_text(&self, text: &str) -> Vec<Finding> {
        let part_numbers = self.taxonomy.part_numbers(text);

        let tolerances: Vec<Finding> = self
            .taxonomy
            .tolerances(text)
            .into_iter()
            .filter(|tol| {
                !self.skip_tolerances_in_part_numbers
                    || !part_numbers.iter().any(|pn| pn.overlaps(tol))
            })
            .map(|tol| Finding::new(Category::GeneralTolerance, tol.text.trim(), tol.value))
            .collect();

        part_numbers
            .into_iter()
            .map(|pn| {
                let value = pn.value.unwrap_or_else(|| pn.text.clone());
                Finding::new(Category::PartNumber, pn.text.trim(), Some(value))
            })
            .chain(tolerances)
            .collect()
    }
}
