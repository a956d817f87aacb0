//! Extraction run metrics.
//!
//! Collected only by [`PatternExtractor::extract_verbose`](super::PatternExtractor::extract_verbose);
//! the plain `extract` path allocates none of this.

use crate::{Nutrient, NutrientValue};
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct ExtractMetrics {
    /// Total elapsed time for the extraction (scan + matching).
    pub total: Duration,
    /// Fields whose matchers were run.
    pub fields_considered: usize,
    /// Fields skipped by the phrase gate.
    pub fields_gated: usize,
    /// Regexes actually executed.
    pub matchers_run: usize,
    /// Matchers skipped because a required bucket was missing.
    pub matchers_gated: usize,
    /// One entry per field that was considered, in table order.
    pub traces: Vec<FieldTrace>,
}

/// What happened to one field.
#[derive(Debug, Clone)]
pub struct FieldTrace {
    pub nutrient: Nutrient,
    /// Matchers tried before one succeeded (or all failed).
    pub attempts: usize,
    /// Name of the winning matcher.
    pub matcher: Option<&'static str>,
    /// Text captured by the winning matcher, before conversion.
    pub capture: Option<String>,
    pub value: Option<NutrientValue>,
}
