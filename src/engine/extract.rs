//! Table-driven extraction.
//!
//! ```text
//! for field in table (in order):
//!     phrase gate ── miss ──▶ skip field
//!     for matcher in field (in order):
//!         bucket gate ── miss ──▶ next matcher
//!         regex capture ── none / unparsable ──▶ next matcher
//!         apply matcher conversion, store, stop this field
//! ```
//!
//! Absence of a field is not an error, and neither is a capture that fails to
//! parse: both simply fall through. Extraction is a pure function of the text
//! and the table, so running it twice yields the same result.

use super::metrics::{ExtractMetrics, FieldTrace};
use super::table::PatternTable;
use super::trigger::TriggerInfo;
use crate::rules::helpers::capture_value;
use crate::{NutrientValue, ParsedResult};
use std::time::Instant;

/// Turns normalized label text into a [`ParsedResult`].
///
/// This is the seam the triggers depend on; tests substitute counting or
/// canned implementations.
pub trait Extract {
    fn extract(&self, normalized: &str) -> ParsedResult;
}

impl<E: Extract + ?Sized> Extract for &E {
    fn extract(&self, normalized: &str) -> ParsedResult {
        (**self).extract(normalized)
    }
}

/// The pattern-table extractor.
#[derive(Debug, Clone, Copy)]
pub struct PatternExtractor<'t> {
    table: &'t PatternTable,
}

impl<'t> PatternExtractor<'t> {
    pub fn new(table: &'t PatternTable) -> Self {
        PatternExtractor { table }
    }

    pub fn table(&self) -> &'t PatternTable {
        self.table
    }

    /// Like [`Extract::extract`], but also returns gating counts, timings and
    /// a per-field trace.
    pub fn extract_verbose(&self, normalized: &str) -> (ParsedResult, ExtractMetrics) {
        self.run(normalized, true)
    }

    fn run(&self, text: &str, verbose: bool) -> (ParsedResult, ExtractMetrics) {
        let start = Instant::now();
        let trigger = TriggerInfo::scan(text);
        let mut metrics = ExtractMetrics::default();
        let mut result = ParsedResult::new();

        tracing::trace!(buckets = ?trigger.buckets, "trigger scan");

        for field in self.table.fields() {
            if !trigger.mentions(field) {
                metrics.fields_gated += 1;
                continue;
            }
            metrics.fields_considered += 1;

            let mut trace =
                FieldTrace { nutrient: field.nutrient, attempts: 0, matcher: None, capture: None, value: None };

            for matcher in &field.matchers {
                trace.attempts += 1;

                if !trigger.satisfies(matcher.buckets) {
                    metrics.matchers_gated += 1;
                    continue;
                }
                metrics.matchers_run += 1;

                let Some(raw) = matcher.regex.captures(text).and_then(|caps| caps.get(1)) else {
                    continue;
                };
                let Some(value) = capture_value(raw.as_str(), field.unit()) else {
                    tracing::debug!(
                        nutrient = %field.nutrient,
                        matcher = matcher.name,
                        capture = raw.as_str(),
                        "capture did not parse"
                    );
                    continue;
                };

                let value = match (value, matcher.conversion) {
                    (NutrientValue::Amount(v), Some(conversion)) => NutrientValue::Amount(conversion.apply(v)),
                    (value, _) => value,
                };

                tracing::trace!(nutrient = %field.nutrient, matcher = matcher.name, value = ?value, "matched");

                if verbose {
                    trace.matcher = Some(matcher.name);
                    trace.capture = Some(raw.as_str().to_string());
                    trace.value = Some(value.clone());
                }
                result.insert(field.nutrient, value);
                break;
            }

            if verbose {
                metrics.traces.push(trace);
            }
        }

        metrics.total = start.elapsed();
        tracing::debug!(
            matched = result.len(),
            considered = metrics.fields_considered,
            gated = metrics.fields_gated,
            regexes = metrics.matchers_run,
            "extraction finished"
        );

        (result, metrics)
    }
}

impl Extract for PatternExtractor<'_> {
    fn extract(&self, normalized: &str) -> ParsedResult {
        self.run(normalized, false).0
    }
}
