use crate::engine::{self, ExtractMetrics, PatternExtractor, PatternTable};
use crate::{Extract, ParsedResult};
use once_cell::sync::Lazy;
use std::time::Duration;

static DEFAULT_TABLE: Lazy<PatternTable> = Lazy::new(|| PatternTable::new(crate::rules::get()));

/// The built-in pattern table, compiled on first use and shared afterwards.
pub fn default_table() -> &'static PatternTable {
    &DEFAULT_TABLE
}

/// Result from [`parse_verbose`].
#[derive(Debug, Clone)]
pub struct ParseReport {
    /// The input after markup stripping and whitespace collapsing.
    pub normalized: String,
    pub result: ParsedResult,
    /// Normalization + extraction.
    pub elapsed: Duration,
    pub metrics: ExtractMetrics,
}

/// Normalize `text` and extract nutrient values with the default table.
///
/// # Example
/// ```
/// use nutrilabel::{Nutrient, parse};
///
/// let facts = parse("Calories 240<br/>Total Fat 8g");
/// assert_eq!(facts.amount(Nutrient::Calories), Some(240.0));
/// assert_eq!(facts.amount(Nutrient::TotalFat), Some(8.0));
/// ```
pub fn parse(text: &str) -> ParsedResult {
    PatternExtractor::new(default_table()).extract(&engine::normalize(text))
}

/// Like [`parse`], but also returns the normalized text and extraction metrics.
///
/// The plain [`parse`] path does not allocate these traces.
pub fn parse_verbose(text: &str) -> ParseReport {
    let start = std::time::Instant::now();
    let normalized = engine::normalize(text);
    let (result, metrics) = PatternExtractor::new(default_table()).extract_verbose(&normalized);
    ParseReport { normalized, result, elapsed: start.elapsed(), metrics }
}
