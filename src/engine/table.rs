//! Pattern table compilation and indexing.
//!
//! The table is built once from `rules::get()` and never mutated afterwards.
//! Field order is preserved; the only index is a fixed array from
//! [`Nutrient`] to field position, so lookups never touch a `HashMap`.
//!
//! ## Invariants
//!
//! - Each nutrient appears at most once. A duplicate is a bug in the rule
//!   declarations, so [`PatternTable::new`] keeps the first and logs the rest.
//! - Matcher order inside a field is declaration order; nothing reorders it.

use crate::{Nutrient, NutrientField};

bitflags::bitflags! {
    /// Coarse features of the normalized text.
    ///
    /// A matcher declares the features its regex cannot match without; if the
    /// text lacks one of them the regex is not run at all.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        const HAS_DIGITS    = 1 << 0;
        const HAS_LESS_THAN = 1 << 1;
        const HAS_KCAL      = 1 << 2;
    }
}

/// Immutable, ordered pattern table.
#[derive(Debug)]
pub struct PatternTable {
    fields: Vec<NutrientField>,
    by_nutrient: Vec<Option<usize>>,
}

impl PatternTable {
    pub fn new(fields: Vec<NutrientField>) -> Self {
        let mut by_nutrient = vec![None; Nutrient::ALL.len()];
        let mut kept = Vec::with_capacity(fields.len());

        for field in fields {
            let slot = &mut by_nutrient[field.nutrient as usize];
            if slot.is_some() {
                tracing::warn!(nutrient = %field.nutrient, "duplicate field in pattern table; keeping the first");
                continue;
            }
            *slot = Some(kept.len());
            kept.push(field);
        }

        PatternTable { fields: kept, by_nutrient }
    }

    /// Fields in table order.
    pub fn fields(&self) -> &[NutrientField] {
        &self.fields
    }

    pub fn lookup(&self, nutrient: Nutrient) -> Option<&NutrientField> {
        self.by_nutrient[nutrient as usize].map(|idx| &self.fields[idx])
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total number of matchers across all fields.
    pub fn matcher_count(&self) -> usize {
        self.fields.iter().map(|f| f.matchers.len()).sum()
    }
}
