//! The nutrient pattern table.
//!
//! Each submodule declares the fields for one part of a label as tagged data
//! (`field!` / `matcher!`). Matchers are listed in priority order: US
//! "Nutrition Facts" wording first, then EU wording, then known typos from the
//! catalog sync. Within a field the first matcher that captures wins.

pub(crate) mod helpers;
pub(crate) mod macronutrients;
pub(crate) mod minerals;
pub(crate) mod serving;
pub(crate) mod vitamins;

#[cfg(test)]
mod tests;

use crate::NutrientField;

/// All fields, in table order.
pub fn get() -> Vec<NutrientField> {
    let mut fields = serving::get();
    fields.extend(macronutrients::get());
    fields.extend(vitamins::get());
    fields.extend(minerals::get());
    fields
}
