//! Title-block and material-table region discovery.
//!
//! A region is found by searching a page for keywords that typically label
//! the table (`DRAWN BY`, `SCALE`, `MATERIAL`, ...), keeping only hits in the
//! expected quadrant and taking the padded union of what remains. Everything
//! outside the located regions is drawing area.

use crate::config::{ExtractionConfig, PageFraction};
use crate::geometry::{union_all, Rect};
use crate::layout::Page;
use serde::{Deserialize, Serialize};

/// Quarter of a page, split at the page midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// Bottom half, left half
    BottomLeft,
    /// Bottom half, right half
    BottomRight,
}

impl Quadrant {
    /// Rectangle covered by this quadrant on a `width × height` page.
    pub fn rect(self, width: f32, height: f32) -> Rect {
        let mid_x = width * 0.5;
        let mid_y = height * 0.5;
        match self {
            Quadrant::BottomLeft => Rect::from_points(0.0, mid_y, mid_x, height),
            Quadrant::BottomRight => Rect::from_points(mid_x, mid_y, width, height),
        }
    }
}

/// Semantic role of a page region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionRole {
    /// Drawing metadata block (part number, scale, revision)
    TitleBlock,
    /// Material / finish / treatment table
    MaterialTable,
}

/// How a region was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionOrigin {
    /// Union of keyword hits
    Keywords,
    /// Static page-fraction rectangle
    Fallback,
}

/// A located page region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// What the region holds
    pub role: RegionRole,
    /// Rectangle in page space
    pub bbox: Rect,
    /// Whether it came from keywords or the fallback
    pub origin: RegionOrigin,
}

impl Region {
    /// True when `rect` overlaps this region.
    pub fn intersects(&self, rect: &Rect) -> bool {
        self.bbox.intersects(rect)
    }
}

/// Locate a region from keyword occurrences.
///
/// Returns `None` when no occurrence survives the quadrant filter. The result
/// only depends on the set of hit rectangles, not on keyword order.
///
/// # Examples
///
/// ```
/// use dimension_oxide::geometry::Rect;
/// use dimension_oxide::layout::{Line, Page, Span};
/// use dimension_oxide::regions::{locate, Quadrant};
///
/// let page = Page::new(0, 800.0, 600.0)
///     .with_line(Line::new(vec![Span::new("SCALE 1:1", Rect::new(600.0, 520.0, 90.0, 10.0))]));
///
/// let keywords = vec!["SCALE".to_string()];
/// let region = locate(&page, &keywords, Some(Quadrant::BottomRight), 10.0).unwrap();
/// assert_eq!(region, Rect::from_points(590.0, 510.0, 660.0, 540.0));
/// ```
pub fn locate(
    page: &Page,
    keywords: &[String],
    quadrant: Option<Quadrant>,
    padding: f32,
) -> Option<Rect> {
    let quadrant_rect = quadrant.map(|q| q.rect(page.width, page.height));

    let hits: Vec<Rect> = keywords
        .iter()
        .flat_map(|keyword| page.search_for(keyword))
        .filter(|hit| quadrant_rect.map_or(true, |q| hit.intersects(&q)))
        .collect();

    if hits.is_empty() {
        return None;
    }

    let union = union_all(&hits);
    if union.is_empty() {
        return None;
    }

    Some(union.padded_within(padding, page.width, page.height))
}

/// Rectangle covering the given fractions of a page.
pub fn fraction_rect(page: &Page, fraction: &PageFraction) -> Rect {
    Rect::from_points(
        page.width * fraction.x0,
        page.height * fraction.y0,
        page.width * fraction.x1,
        page.height * fraction.y1,
    )
}

/// Regions of one page used to gate classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRegions {
    /// Always present (keyword-derived or fallback)
    pub title_block: Region,
    /// Present only when its keywords were found
    pub material_table: Option<Region>,
}

impl PageRegions {
    /// Locate both regions on a page.
    pub fn locate(page: &Page, config: &ExtractionConfig) -> Self {
        let title_block = match locate(
            page,
            &config.title_block.keywords,
            config.title_block.quadrant,
            config.padding,
        ) {
            Some(bbox) => Region {
                role: RegionRole::TitleBlock,
                bbox,
                origin: RegionOrigin::Keywords,
            },
            None => Region {
                role: RegionRole::TitleBlock,
                bbox: fraction_rect(page, &config.title_block_fallback),
                origin: RegionOrigin::Fallback,
            },
        };

        let material_table = locate(
            page,
            &config.material_table.keywords,
            config.material_table.quadrant,
            config.padding,
        )
        .map(|bbox| Region {
            role: RegionRole::MaterialTable,
            bbox,
            origin: RegionOrigin::Keywords,
        });

        log::debug!(
            "Page {}: title block {:?} ({:?}), material table {:?}",
            page.index,
            title_block.bbox,
            title_block.origin,
            material_table.map(|r| r.bbox)
        );

        Self {
            title_block,
            material_table,
        }
    }

    /// True when `rect` falls in the title block or the material table.
    pub fn is_table_content(&self, rect: &Rect) -> bool {
        self.title_block.intersects(rect)
            || self.material_table.is_some_and(|table| table.intersects(rect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Line, Span};

    fn text_line(text: &str, x: f32, y: f32) -> Line {
        Line::new(vec![Span::new(text, Rect::new(x, y, text.chars().count() as f32 * 6.0, 10.0))])
    }

    fn page(lines: Vec<Line>) -> Page {
        let mut page = Page::new(0, 1000.0, 800.0);
        page.lines = lines;
        page
    }

    #[test]
    fn test_quadrant_rects() {
        assert_eq!(
            Quadrant::BottomRight.rect(1000.0, 800.0),
            Rect::from_points(500.0, 400.0, 1000.0, 800.0)
        );
        assert_eq!(
            Quadrant::BottomLeft.rect(1000.0, 800.0),
            Rect::from_points(0.0, 400.0, 500.0, 800.0)
        );
    }

    #[test]
    fn test_no_keywords_returns_none() {
        let p = page(vec![text_line("4.50", 100.0, 100.0)]);
        let keywords = vec!["SCALE".to_string()];
        assert!(locate(&p, &keywords, Some(Quadrant::BottomRight), 10.0).is_none());
    }

    #[test]
    fn test_hits_outside_quadrant_are_dropped() {
        // "SCALE" in the top-left note area must not pull the title block up.
        let p = page(vec![
            text_line("SCALE NOTE", 50.0, 50.0),
            text_line("SCALE 1:1", 700.0, 700.0),
        ]);
        let keywords = vec!["SCALE".to_string()];
        let region = locate(&p, &keywords, Some(Quadrant::BottomRight), 0.0).unwrap();
        assert_eq!(region, Rect::new(700.0, 700.0, 30.0, 10.0));
    }

    #[test]
    fn test_union_of_hits_is_padded_and_clamped() {
        let p = page(vec![
            text_line("DRAWN BY", 600.0, 700.0),
            text_line("REV", 990.0, 795.0),
        ]);
        let keywords = vec!["DRAWN BY".to_string(), "REV".to_string()];
        let region = locate(&p, &keywords, Some(Quadrant::BottomRight), 10.0).unwrap();
        assert_eq!(region, Rect::from_points(590.0, 690.0, 1000.0, 800.0));
    }

    #[test]
    fn test_keyword_order_does_not_matter() {
        let p = page(vec![
            text_line("DRAWN BY", 600.0, 700.0),
            text_line("SHEET 1", 850.0, 760.0),
        ]);
        let a = vec!["DRAWN BY".to_string(), "SHEET".to_string()];
        let b = vec!["SHEET".to_string(), "DRAWN BY".to_string()];
        assert_eq!(
            locate(&p, &a, Some(Quadrant::BottomRight), 10.0),
            locate(&p, &b, Some(Quadrant::BottomRight), 10.0)
        );
    }

    #[test]
    fn test_title_block_fallback() {
        let p = page(vec![text_line("R2.250", 100.0, 100.0)]);
        let regions = PageRegions::locate(&p, &ExtractionConfig::default());
        assert_eq!(regions.title_block.origin, RegionOrigin::Fallback);
        assert_eq!(
            regions.title_block.bbox,
            Rect::from_points(600.0, 600.0, 950.0, 760.0)
        );
        assert!(regions.material_table.is_none());
    }

    #[test]
    fn test_material_table_found_in_bottom_left() {
        let p = page(vec![
            text_line("MATERIAL: AL 6061-T6", 40.0, 700.0),
            text_line("FINISH: ANODIZE", 40.0, 720.0),
        ]);
        let regions = PageRegions::locate(&p, &ExtractionConfig::default());
        let table = regions.material_table.unwrap();
        assert_eq!(table.role, RegionRole::MaterialTable);
        assert_eq!(table.origin, RegionOrigin::Keywords);
        assert!(regions.is_table_content(&Rect::new(60.0, 710.0, 20.0, 5.0)));
        assert!(!regions.is_table_content(&Rect::new(300.0, 100.0, 20.0, 5.0)));
    }
}
