//! Document-level dimension extraction.

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::extractors::aggregate::{Aggregator, ExtractionResult};
use crate::extractors::classifier::LineClassifier;
use crate::extractors::patterns::Taxonomy;
use crate::regions::PageRegions;
use crate::source::{PdfSpanSource, SpanSource};
use std::path::Path;

/// Extracts drawing dimensions, part numbers and general tolerances.
///
/// The extractor holds only immutable state (configuration and compiled
/// patterns), so one instance can be shared across threads. Every call
/// accumulates into its own [`Aggregator`].
///
/// # Examples
///
/// ```
/// use dimension_oxide::geometry::Rect;
/// use dimension_oxide::layout::{Line, Page, Span};
/// use dimension_oxide::source::InMemorySource;
/// use dimension_oxide::DimensionExtractor;
///
/// let page = Page::new(0, 1000.0, 800.0)
///     .with_line(Line::new(vec![Span::new("R2.250", Rect::new(100.0, 100.0, 40.0, 10.0))]));
/// let mut source = InMemorySource::new(vec![page]);
///
/// let result = DimensionExtractor::default().extract_from(&mut source).unwrap();
/// assert_eq!(result.drawing_dimensions, vec!["R2.250"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DimensionExtractor {
    config: ExtractionConfig,
    classifier: LineClassifier,
}

impl DimensionExtractor {
    /// Create an extractor for a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPattern`] when the part-number pattern
    /// does not compile.
    pub fn new(config: ExtractionConfig) -> Result<Self> {
        let classifier = LineClassifier::new(Taxonomy::new(&config)?)
            .with_skip_tolerances_in_part_numbers(config.skip_tolerances_in_part_numbers);
        Ok(Self { config, classifier })
    }

    /// Open a PDF and extract from all its pages.
    pub fn extract_path(&self, path: impl AsRef<Path>) -> Result<ExtractionResult> {
        let path = path.as_ref();
        log::info!("Extracting dimensions from {}", path.display());
        let mut source = PdfSpanSource::open(path, &self.config)?;
        self.extract_from(&mut source)
    }

    /// Extract from every page of a span source, in page order.
    pub fn extract_from<S: SpanSource>(&self, source: &mut S) -> Result<ExtractionResult> {
        let page_count = source.page_count()?;
        let mut aggregator = Aggregator::new();

        for index in 0..page_count {
            let page = source.page(index)?;
            let regions = PageRegions::locate(&page, &self.config);

            let mut found = 0;
            for line in &page.lines {
                let findings = self.classifier.classify(line, page.index, &regions);
                found += findings.len();
                aggregator.extend(findings);
            }
            log::debug!("Page {}: {} lines, {} findings", index, page.lines.len(), found);
        }

        let result = aggregator.finish();
        log::info!(
            "Extracted {} dimensions, {} part numbers, {} tolerances from {} pages",
            result.drawing_dimensions.len(),
            result.part_numbers.len(),
            result.general_tolerances.len(),
            page_count
        );
        Ok(result)
    }
}

/// Extract from a PDF with the default configuration.
pub fn extract_dimensions_from_pdf(path: impl AsRef<Path>) -> Result<ExtractionResult> {
    DimensionExtractor::default().extract_path(path)
}
