//! Dimension pattern taxonomy.
//!
//! Drawing text is lexically ambiguous: `2.250` may be a radius whose `R`
//! landed in another span, `0` may be a misread diameter glyph. Rules are
//! therefore ordered from most to least specific and the first rule that
//! matches anywhere in a line decides its category:
//!
//! 1. Diameter (`8X Ø.201`, `⌀6mm`, OCR substitutes such as `O2.13`)
//! 2. Radius (`R2.250`, `R17/32`)
//! 3. Angle (`60°`)
//! 4. Thread (`10-32 UNF`)
//! 5. Fraction (`3/16`)
//! 6. Linear (`4.50`, `1,500`, `.750`), only when not glued to letters or digits
//!
//! Part-number and general-tolerance rules are separate and only apply to
//! title-block text. All rules are case-insensitive.

use crate::config::ExtractionConfig;
use crate::error::{Error, Result};
use crate::extractors::finding::Category;
use lazy_static::lazy_static;
use regex::{Captures, Regex, RegexBuilder};

/// Optional unit suffix: inch marks, `in`, `mm`, `cm`.
const UNIT: &str = r#"(?:["'in]*|mm|cm)?"#;

/// Fraction, decimal/comma number, or leading-dot decimal.
const DIMENSION_VALUE: &str = r"[0-9]+/[0-9]+|[0-9]+[.,]?[0-9]*|[.,][0-9]+";

/// Glyphs that always denote a diameter.
const DIAMETER_GLYPHS: [char; 2] = ['Ø', '⌀'];

lazy_static! {
    /// Radius: `R` prefix, fraction first so `R17/32` keeps its denominator
    static ref RE_RADIUS: Regex =
        Regex::new(&format!(r"(?i)R\s*(?P<value>{}){}", DIMENSION_VALUE, UNIT)).unwrap();

    /// Angle: number followed by a degree mark
    static ref RE_ANGLE: Regex = Regex::new(r"(?i)(?P<value>[0-9]+[.,]?[0-9]*)\s*°").unwrap();

    /// Thread callout: `10-32`, optionally with a 2-4 letter class (`UNF`, `UNC`)
    static ref RE_THREAD: Regex =
        Regex::new(r"(?i)(?P<value>[0-9]+-[0-9]+(?:\s*[A-Z]{2,4})?)").unwrap();

    /// Bare fraction
    static ref RE_FRACTION: Regex =
        Regex::new(&format!(r"(?i)(?P<value>[0-9]+/[0-9]+){}", UNIT)).unwrap();

    /// Linear number, anchored: checked against candidate slices by `find_bounded`
    static ref RE_LINEAR_ANCHORED: Regex =
        Regex::new(&format!(r"(?i)^(?:(?P<value>[0-9]*[.,][0-9]+|[0-9]+){})$", UNIT)).unwrap();

    /// Signed tolerance: `±0.005`, `+0.010`, `- 1/64"`
    static ref RE_TOLERANCE: Regex = Regex::new(&format!(
        r"(?i)[+\-±]\s*(?P<value>[0-9]+[.,]?[0-9]*|[0-9]+/[0-9]+){}",
        UNIT
    ))
    .unwrap();

    /// Taxonomy built from the default configuration.
    pub static ref DEFAULT_TAXONOMY: Taxonomy = Taxonomy::new(&ExtractionConfig::default())
        .expect("default patterns compile");
}

/// How a rule searches its text.
#[derive(Debug, Clone)]
enum Matcher {
    /// Leftmost regex match anywhere
    Anywhere(Regex),
    /// Anchored regex over slices not adjacent to ASCII letters or digits
    Bounded(Regex),
}

/// A single match of a rule within a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// Byte offset of the match start
    pub start: usize,
    /// Byte offset one past the match end
    pub end: usize,
    /// The matched text
    pub text: String,
    /// The `value` capture, when the rule defines one
    pub value: Option<String>,
}

impl RuleMatch {
    fn from_captures(caps: &Captures<'_>, offset: usize) -> Option<Self> {
        let whole = caps.get(0)?;
        Some(Self {
            start: offset + whole.start(),
            end: offset + whole.end(),
            text: whole.as_str().to_string(),
            value: caps.name("value").map(|m| m.as_str().to_string()),
        })
    }

    /// True when the two matches share at least one byte.
    pub fn overlaps(&self, other: &RuleMatch) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A `(pattern, category)` pair.
#[derive(Debug, Clone)]
pub struct Rule {
    category: Category,
    matcher: Matcher,
}

impl Rule {
    fn anywhere(category: Category, regex: Regex) -> Self {
        Self {
            category,
            matcher: Matcher::Anywhere(regex),
        }
    }

    fn bounded(category: Category, anchored: Regex) -> Self {
        Self {
            category,
            matcher: Matcher::Bounded(anchored),
        }
    }

    /// Category this rule assigns.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Leftmost match in `text`.
    pub fn find(&self, text: &str) -> Option<RuleMatch> {
        match &self.matcher {
            Matcher::Anywhere(re) => re
                .captures(text)
                .and_then(|caps| RuleMatch::from_captures(&caps, 0)),
            Matcher::Bounded(re) => find_bounded(re, text),
        }
    }

    /// Every non-overlapping match in `text`, left to right.
    pub fn find_all(&self, text: &str) -> Vec<RuleMatch> {
        match &self.matcher {
            Matcher::Anywhere(re) => re
                .captures_iter(text)
                .filter_map(|caps| RuleMatch::from_captures(&caps, 0))
                .collect(),
            Matcher::Bounded(re) => {
                let mut matches = Vec::new();
                let mut offset = 0;
                while offset < text.len() {
                    let Some(m) = find_bounded_from(re, text, offset) else {
                        break;
                    };
                    offset = m.end.max(m.start + 1);
                    while !text.is_char_boundary(offset) {
                        offset += 1;
                    }
                    matches.push(m);
                }
                matches
            },
        }
    }
}

fn is_word_char(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_ascii_alphanumeric())
}

fn find_bounded(anchored: &Regex, text: &str) -> Option<RuleMatch> {
    find_bounded_from(anchored, text, 0)
}

/// Emulates `(?<![A-Za-z0-9])PATTERN(?![A-Za-z0-9])`.
///
/// Starts are tried left to right and, for each start, ends from longest to
/// shortest. A candidate slice is accepted when neither neighbour is an ASCII
/// letter or digit and the anchored pattern matches the whole slice.
fn find_bounded_from(anchored: &Regex, text: &str, from: usize) -> Option<RuleMatch> {
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();

    for (si, &start) in boundaries.iter().enumerate() {
        if start < from || start == text.len() {
            continue;
        }
        let first = text[start..].chars().next();
        if !first.is_some_and(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            continue;
        }
        if is_word_char(text[..start].chars().next_back()) {
            continue;
        }

        for &end in boundaries[si + 1..].iter().rev() {
            if is_word_char(text[end..].chars().next()) {
                continue;
            }
            if let Some(caps) = anchored.captures(&text[start..end]) {
                return RuleMatch::from_captures(&caps, start);
            }
        }
    }

    None
}

fn diameter_regex(substitutes: &[char]) -> Result<Regex> {
    let class: String = DIAMETER_GLYPHS
        .iter()
        .chain(substitutes)
        .map(|c| regex::escape(&c.to_string()))
        .collect();
    let pattern = format!(
        r"(?i)(?:\d*\s*X)?\s*[{}]\s*(?P<value>{}){}",
        class, DIMENSION_VALUE, UNIT
    );
    compile(&pattern)
}

fn compile(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// The ordered dimension rules plus the title-block rules.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    dimension_rules: Vec<Rule>,
    part_number: Rule,
    tolerance: Rule,
}

impl Taxonomy {
    /// Build the taxonomy for a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] when the configured part-number
    /// pattern does not compile.
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        let dimension_rules = vec![
            Rule::anywhere(Category::Diameter, diameter_regex(&config.diameter_substitutes)?),
            Rule::anywhere(Category::Radius, RE_RADIUS.clone()),
            Rule::anywhere(Category::Angle, RE_ANGLE.clone()),
            Rule::anywhere(Category::Thread, RE_THREAD.clone()),
            Rule::anywhere(Category::Fraction, RE_FRACTION.clone()),
            Rule::bounded(Category::Linear, RE_LINEAR_ANCHORED.clone()),
        ];

        Ok(Self {
            dimension_rules,
            part_number: Rule::anywhere(
                Category::PartNumber,
                compile(&config.part_number_pattern)?,
            ),
            tolerance: Rule::anywhere(Category::GeneralTolerance, RE_TOLERANCE.clone()),
        })
    }

    /// Dimension rules in evaluation order.
    pub fn dimension_rules(&self) -> &[Rule] {
        &self.dimension_rules
    }

    /// First dimension rule matching `text`, with its match.
    pub fn classify(&self, text: &str) -> Option<(Category, RuleMatch)> {
        self.dimension_rules()
            .iter()
            .find_map(|rule| rule.find(text).map(|m| (rule.category(), m)))
    }

    /// All part-number matches in `text`.
    pub fn part_numbers(&self, text: &str) -> Vec<RuleMatch> {
        self.part_number.find_all(text)
    }

    /// All general-tolerance matches in `text`.
    pub fn tolerances(&self, text: &str) -> Vec<RuleMatch> {
        self.tolerance.find_all(text)
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        DEFAULT_TAXONOMY.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_of(text: &str) -> Option<Category> {
        DEFAULT_TAXONOMY.classify(text).map(|(c, _)| c)
    }

    fn value_of(text: &str) -> Option<String> {
        DEFAULT_TAXONOMY.classify(text).and_then(|(_, m)| m.value)
    }

    #[test]
    fn test_rule_order() {
        let order: Vec<Category> = DEFAULT_TAXONOMY
            .dimension_rules()
            .iter()
            .map(Rule::category)
            .collect();
        assert_eq!(
            order,
            vec![
                Category::Diameter,
                Category::Radius,
                Category::Angle,
                Category::Thread,
                Category::Fraction,
                Category::Linear,
            ]
        );
    }

    #[test]
    fn test_diameter_with_multiplier() {
        assert_eq!(category_of("8X Ø.201"), Some(Category::Diameter));
        assert_eq!(value_of("8X Ø.201"), Some(".201".to_string()));
        assert_eq!(category_of("8X⌀.201"), Some(Category::Diameter));
        assert_eq!(category_of("Ø 12,5mm"), Some(Category::Diameter));
    }

    #[test]
    fn test_diameter_ocr_substitutes() {
        assert_eq!(category_of("O2.13"), Some(Category::Diameter));
        assert_eq!(value_of("O2.13"), Some("2.13".to_string()));
    }

    #[test]
    fn test_substitutes_can_be_disabled() {
        let config = ExtractionConfig::default().with_diameter_substitutes(Vec::new());
        let taxonomy = Taxonomy::new(&config).unwrap();
        assert_eq!(taxonomy.classify("1005").map(|(c, _)| c), Some(Category::Linear));
        assert_eq!(taxonomy.classify("O2.13").map(|(c, _)| c), Some(Category::Linear));
        assert_eq!(taxonomy.classify("Ø.201").map(|(c, _)| c), Some(Category::Diameter));

        assert_eq!(category_of("1005"), Some(Category::Diameter));
    }

    #[test]
    fn test_radius() {
        assert_eq!(category_of("R2.250"), Some(Category::Radius));
        assert_eq!(value_of("R17/32"), Some("17/32".to_string()));
    }

    #[test]
    fn test_angle() {
        assert_eq!(category_of("60°"), Some(Category::Angle));
        assert_eq!(value_of("45 °"), Some("45".to_string()));
    }

    #[test]
    fn test_thread() {
        assert_eq!(category_of("10-32 UNF"), Some(Category::Thread));
        assert_eq!(value_of("10-32 UNF"), Some("10-32 UNF".to_string()));
    }

    #[test]
    fn test_fraction() {
        assert_eq!(category_of("3/16"), Some(Category::Fraction));
        assert_eq!(value_of("1/2\""), Some("1/2".to_string()));
    }

    #[test]
    fn test_linear() {
        assert_eq!(category_of("4.50"), Some(Category::Linear));
        assert_eq!(value_of("4.50"), Some("4.50".to_string()));
        assert_eq!(value_of("1,125"), Some("1,125".to_string()));
        assert_eq!(value_of(".750"), Some(".750".to_string()));
    }

    #[test]
    fn test_zero_followed_by_digit_reads_as_substitute_diameter() {
        // `0` is a configured glyph substitute, so `100` carries a diameter.
        assert_eq!(category_of("100°"), Some(Category::Diameter));
        assert_eq!(category_of("1,500"), Some(Category::Diameter));
    }

    #[test]
    fn test_linear_unit_suffix() {
        assert_eq!(value_of("(5mm)"), Some("5".to_string()));
        assert_eq!(value_of("3in"), Some("3".to_string()));
    }

    #[test]
    fn test_linear_rejects_glued_tokens() {
        assert_eq!(category_of("ABC123"), None);
        assert_eq!(category_of("A12B"), None);
        assert_eq!(category_of("NOTES"), None);
        // A later standalone number still counts.
        assert_eq!(value_of("A12 3"), Some("3".to_string()));
    }

    #[test]
    fn test_bounded_find_all() {
        let rule = &DEFAULT_TAXONOMY.dimension_rules()[5];
        let values: Vec<String> = rule
            .find_all("4.50 X2 7 ab9 .25")
            .into_iter()
            .filter_map(|m| m.value)
            .collect();
        assert_eq!(values, vec!["4.50", "7", ".25"]);
    }

    #[test]
    fn test_part_numbers() {
        let found = DEFAULT_TAXONOMY.part_numbers("DWG NO. PRT-044-0110-01 REV A");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "PRT-044-0110-01");
        assert!(DEFAULT_TAXONOMY.part_numbers("prt-044-0110-01").len() == 1);
        assert!(DEFAULT_TAXONOMY.part_numbers("PRT-44-0110-01").is_empty());
    }

    #[test]
    fn test_tolerances_every_match() {
        let found = DEFAULT_TAXONOMY.tolerances("±0.005 +0.010 -0.002");
        let texts: Vec<&str> = found.iter().map(|m| m.text.as_str()).collect();
        let values: Vec<&str> = found.iter().filter_map(|m| m.value.as_deref()).collect();
        assert_eq!(texts, vec!["±0.005", "+0.010", "-0.002"]);
        assert_eq!(values, vec!["0.005", "0.010", "0.002"]);
    }

    #[test]
    fn test_invalid_part_number_pattern() {
        let config = ExtractionConfig::default().with_part_number_pattern("PRT-[");
        let err = Taxonomy::new(&config).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }

    #[test]
    fn test_rule_match_overlap() {
        let a = RuleMatch {
            start: 0,
            end: 15,
            text: String::new(),
            value: None,
        };
        let b = RuleMatch {
            start: 3,
            end: 7,
            text: String::new(),
            value: None,
        };
        let c = RuleMatch {
            start: 15,
            end: 20,
            text: String::new(),
            value: None,
        };
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }
}
