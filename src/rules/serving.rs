//! Serving information and energy.

use crate::{BucketMask, Nutrient, NutrientField};

/// Serving size is free text: everything after the label up to the lead word
/// of any other row, a `N%` column, or the end of the text.
fn field_serving_size() -> NutrientField {
    field! {
        nutrient: Nutrient::ServingSize,
        phrases: ["serving size"],
        matchers: [
            matcher! {
                name: "serving size",
                pattern: r"(?ix)
                    Serving\s+Size:?\s+([^<]+?)
                    (?:
                        \s+\d+%
                      | \s+(?:
                            Servings?\s+Per | About\s+\d | \d+\s+Servings? | Amount\s+Per
                          | Calories? | Energy | Total\s+(?:Fat|Carbohydrates?|Sugars?)
                          | Fat | Saturated | Trans | Cholesterol | Cholestrol | Sodium | Salt
                          | Carbohydrates? | Carbs | Dietary | Fib(?:er|re) | Sugars? | Added | Includes
                          | (?:-\s*)?of\s+which | Protein
                          | Vitamin | Ascorbic | Cholecalciferol | Thiamine? | Riboflavin | Niacin
                          | Pantothenic | Folate | Folic | Biotin | Choline
                          | Calcium | Iron | Potass?ium | Phosphorus | Magnesium | Zinc | Selenium
                          | Copper | Manganese | Chromium | Molybdenum | Chloride
                        )\b
                      | \s*$
                    )"
            },
        ],
    }
}

fn field_servings_per_container() -> NutrientField {
    field! {
        nutrient: Nutrient::ServingPerContainer,
        phrases: ["per container"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "servings per container N",
                pattern: r"(?i)Servings?\s+Per\s+Container:?\s+(?:About\s+)?(\d+(?:[.,]\d+)*)"
            },
            // 2016 FDA layout: "8 servings per container"
            matcher! {
                name: "N servings per container",
                pattern: r"(?i)(\d+(?:[.,]\d+)*)\s+Servings?\s+Per\s+Container"
            },
        ],
    }
}

fn field_calories() -> NutrientField {
    field! {
        nutrient: Nutrient::Calories,
        phrases: ["calorie", "energy"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "calories N",
                pattern: r"(?i)Calories:?\s+(\d+(?:[.,]\d+)*)"
            },
            matcher! {
                name: "calorie N (typo)",
                pattern: r"(?i)Calorie:?\s+(\d+(?:[.,]\d+)*)"
            },
            // EU: "Energy 231kJ/55kcal"
            matcher! {
                name: "energy NkJ/Nkcal",
                pattern: r"(?i)Energy:?\s+\d+(?:[.,]\d+)*\s*kJ\s*/\s*(\d+(?:[.,]\d+)*)\s*kcal",
                buckets: BucketMask::HAS_KCAL
            },
            matcher! {
                name: "energy Nkcal",
                pattern: r"(?i)Energy:?\s+(\d+(?:[.,]\d+)*)\s*kcal",
                buckets: BucketMask::HAS_KCAL
            },
        ],
    }
}

pub fn get() -> Vec<NutrientField> {
    vec![field_serving_size(), field_servings_per_container(), field_calories()]
}
