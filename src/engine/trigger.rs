//! Trigger scanning (input pre-classification).
//!
//! One pass over the normalized text produces:
//!
//! - **Buckets** (`BucketMask`): cheap booleans such as "contains digits".
//!   Matchers whose bucket requirements are not met are skipped.
//! - **A folded copy** of the text (lowercase, single spaces) used for the
//!   per-field phrase gate.
//!
//! Both gates are necessary conditions of the regexes they guard, so a gated
//! skip always agrees with what running the regex would have found.

use super::table::BucketMask;
use crate::NutrientField;

/// Input characteristics detected from the normalized text.
#[derive(Debug, Clone)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
    folded: String,
}

impl TriggerInfo {
    pub fn scan(input: &str) -> Self {
        let folded = input.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        let mut buckets = BucketMask::empty();

        if folded.chars().any(char::is_numeric) {
            buckets |= BucketMask::HAS_DIGITS;
        }
        if folded.contains('<') {
            buckets |= BucketMask::HAS_LESS_THAN;
        }
        if folded.contains("kcal") {
            buckets |= BucketMask::HAS_KCAL;
        }

        TriggerInfo { buckets, folded }
    }

    /// True if any of the field's gating phrases occurs in the text.
    pub fn mentions(&self, field: &NutrientField) -> bool {
        field.phrases.iter().any(|p| self.folded.contains(p))
    }

    pub fn satisfies(&self, required: BucketMask) -> bool {
        self.buckets.contains(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_detects_buckets() {
        let info = TriggerInfo::scan("Energy 231kJ/55KCAL Fat <0.5g");
        assert!(info.satisfies(BucketMask::HAS_DIGITS | BucketMask::HAS_LESS_THAN | BucketMask::HAS_KCAL));

        let info = TriggerInfo::scan("Serving Size one bar");
        assert_eq!(info.buckets, BucketMask::empty());
        assert!(info.satisfies(BucketMask::empty()));
    }

    #[test]
    fn phrases_match_across_irregular_whitespace() {
        let table = crate::engine::PatternTable::new(crate::rules::get());
        let field = table.lookup(crate::Nutrient::SaturatedFat).unwrap();
        assert!(TriggerInfo::scan("SATURATED \t FAT 3g").mentions(field));
        assert!(TriggerInfo::scan("of which saturates 1g").mentions(field));
        assert!(!TriggerInfo::scan("Protein 3g").mentions(field));
    }
}
