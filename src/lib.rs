extern crate self as nutrilabel;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[macro_use]
mod macros;
mod api;
mod clock;
mod engine;
mod nutrient;
mod pipeline;
mod render;
mod rules;
mod store;

pub use api::{ParseReport, default_table, parse, parse_verbose};
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{
    BucketMask, Cooldown, Extract, ExtractMetrics, FieldTrace, ParseState, PatternExtractor, PatternTable, SkipReason,
    normalize,
};
pub use nutrient::{Indent, Nutrient, Unit, UnknownNutrient};
pub use pipeline::{NutritionFacts, PipelineOptions, TriggerOutcome};
pub use render::{RenderOptions, render_panel};
pub use store::{CooldownStore, MemoryStore, RecordId, ResultStore, SourceStore, SourceText, StoreError};

// --- Parsed values ----------------------------------------------------------

/// A single extracted value.
///
/// Numeric fields hold an `Amount` in the unit of their [`Nutrient`]; the only
/// free-text field (`serving_size`) holds `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NutrientValue {
    Amount(f64),
    Text(String),
}

impl NutrientValue {
    pub fn as_amount(&self) -> Option<f64> {
        match self {
            NutrientValue::Amount(v) => Some(*v),
            NutrientValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            NutrientValue::Text(s) => Some(s),
            NutrientValue::Amount(_) => None,
        }
    }
}

impl fmt::Display for NutrientValue {
    /// Amounts print in their shortest form (`120`, `0.5`); no unit is attached.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NutrientValue::Amount(v) => f.write_str(&render::format_amount(*v)),
            NutrientValue::Text(s) => f.write_str(s),
        }
    }
}

/// Nutrient values recovered from one piece of label text.
///
/// Identifiers are unique; iteration follows [`Nutrient`] declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedResult {
    values: BTreeMap<Nutrient, NutrientValue>,
}

impl ParsedResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Insert a value, replacing any previous value for `nutrient`.
    pub fn insert(&mut self, nutrient: Nutrient, value: NutrientValue) {
        self.values.insert(nutrient, value);
    }

    pub fn get(&self, nutrient: Nutrient) -> Option<&NutrientValue> {
        self.values.get(&nutrient)
    }

    pub fn contains(&self, nutrient: Nutrient) -> bool {
        self.values.contains_key(&nutrient)
    }

    pub fn amount(&self, nutrient: Nutrient) -> Option<f64> {
        self.get(nutrient).and_then(NutrientValue::as_amount)
    }

    pub fn text(&self, nutrient: Nutrient) -> Option<&str> {
        self.get(nutrient).and_then(NutrientValue::as_text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, &NutrientValue)> {
        self.values.iter().map(|(n, v)| (*n, v))
    }
}

impl FromIterator<(Nutrient, NutrientValue)> for ParsedResult {
    fn from_iter<I: IntoIterator<Item = (Nutrient, NutrientValue)>>(iter: I) -> Self {
        ParsedResult { values: iter.into_iter().collect() }
    }
}

// --- Pattern table types ----------------------------------------------------

/// Multiplicative conversion applied to a captured amount.
///
/// Conversions belong to the matcher that captured the value, not to the field:
/// sodium's `Salt Ng` matcher converts, its `Sodium Nmg` matcher does not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConversion {
    /// Tag naming the unit the label was written in (e.g. `"salt_g"`).
    pub from: &'static str,
    pub factor: f64,
}

impl UnitConversion {
    pub fn apply(&self, value: f64) -> f64 {
        value * self.factor
    }
}

/// One candidate recognition pattern for a nutrient field.
///
/// The value is read from capture group 1 of `regex`. `buckets` lists coarse
/// input features the regex cannot match without (see [`BucketMask`]).
#[derive(Debug)]
pub struct Matcher {
    pub name: &'static str,
    pub regex: &'static Regex,
    pub buckets: BucketMask,
    pub conversion: Option<UnitConversion>,
}

/// A nutrient together with its ordered candidate matchers.
///
/// `phrases` gates the whole field: if none of them occurs in the lowercased
/// text, no matcher of the field can succeed and the field is skipped.
#[derive(Debug)]
pub struct NutrientField {
    pub nutrient: Nutrient,
    pub phrases: &'static [&'static str],
    pub matchers: Vec<Matcher>,
}

impl NutrientField {
    pub fn unit(&self) -> Unit {
        self.nutrient.unit()
    }
}
