//! Fats, cholesterol, sodium, carbohydrates and protein.

use crate::{BucketMask, Nutrient, NutrientField};

fn field_total_fat() -> NutrientField {
    field! {
        nutrient: Nutrient::TotalFat,
        phrases: ["fat"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "total fat Ng",
                pattern: r"(?i)Total\s+Fat:?\s+(\d+(?:[.,]\d+)*)\s*g"
            },
            // A bare "Fat" never follows a word other than a unit or heading, so
            // "Saturated Fat 1g" is not the total. "Fat <0.5g" goes before the bare form.
            matcher! {
                name: "fat <Ng",
                pattern: r"(?ix)(?:^|[^A-Za-z\s]\s*|\b(?:g|mg|mcg|kcal|kJ|IU|serving|facts)\s+)
                    Fat:?\s+<\s*(\d+(?:[.,]\d+)*)\s*g",
                buckets: BucketMask::HAS_LESS_THAN
            },
            matcher! {
                name: "fat Ng",
                pattern: r"(?ix)(?:^|[^A-Za-z\s]\s*|\b(?:g|mg|mcg|kcal|kJ|IU|serving|facts)\s+)
                    Fat:?\s+(\d+(?:[.,]\d+)*)\s*g"
            },
        ],
    }
}

fn field_saturated_fat() -> NutrientField {
    field! {
        nutrient: Nutrient::SaturatedFat,
        phrases: ["saturate"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "saturated fat <Ng",
                pattern: r"(?i)Saturated\s+Fat:?\s+<\s*(\d+(?:[.,]\d+)*)\s*g",
                buckets: BucketMask::HAS_LESS_THAN
            },
            matcher! {
                name: "saturated fat Ng",
                pattern: r"(?i)Saturated\s+Fat:?\s+(\d+(?:[.,]\d+)*)\s*g"
            },
            // EU: "- of which saturates <0.1g"
            matcher! {
                name: "of which saturates <Ng",
                pattern: r"(?i)of\s+which\s+saturates:?\s+<\s*(\d+(?:[.,]\d+)*)\s*g",
                buckets: BucketMask::HAS_LESS_THAN
            },
            matcher! {
                name: "of which saturates Ng",
                pattern: r"(?i)of\s+which\s+saturates:?\s+(\d+(?:[.,]\d+)*)\s*g"
            },
        ],
    }
}

fn field_trans_fat() -> NutrientField {
    field! {
        nutrient: Nutrient::TransFat,
        phrases: ["trans"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "trans fat Ng",
                pattern: r"(?i)Trans\s+Fat:?\s+(\d+(?:[.,]\d+)*)\s*g"
            },
        ],
    }
}

fn field_cholesterol() -> NutrientField {
    field! {
        nutrient: Nutrient::Cholesterol,
        phrases: ["cholesterol", "cholestrol"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "cholesterol Nmg",
                pattern: r"(?i)Cholesterol:?\s+(\d+(?:[.,]\d+)*)\s*mg"
            },
            matcher! {
                name: "cholestrol Nmg (typo)",
                pattern: r"(?i)Cholestrol:?\s+(\d+(?:[.,]\d+)*)\s*mg"
            },
        ],
    }
}

/// Sodium in mg. EU labels declare salt in grams instead; 1g of salt carries
/// roughly 400mg of sodium.
fn field_sodium() -> NutrientField {
    field! {
        nutrient: Nutrient::Sodium,
        phrases: ["sodium", "salt"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "sodium Nmg",
                pattern: r"(?i)Sodium:?\s+(\d+(?:[.,]\d+)*)\s*mg"
            },
            matcher! {
                name: "sodium Ng",
                pattern: r"(?i)Sodium:?\s+(\d+(?:[.,]\d+)*)\s*g\b",
                convert: "sodium_g" * 1000.0
            },
            matcher! {
                name: "salt <Ng",
                pattern: r"(?i)Salt:?\s+<\s*(\d+(?:[.,]\d+)*)\s*g",
                buckets: BucketMask::HAS_LESS_THAN,
                convert: "salt_g" * 400.0
            },
            matcher! {
                name: "salt Ng",
                pattern: r"(?i)Salt:?\s+(\d+(?:[.,]\d+)*)\s*g",
                convert: "salt_g" * 400.0
            },
        ],
    }
}

fn field_carbohydrate() -> NutrientField {
    field! {
        nutrient: Nutrient::Carbohydrate,
        phrases: ["carb"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "total carbohydrate Ng",
                pattern: r"(?i)Total\s+Carbohydrates?:?\s+(\d+(?:[.,]\d+)*)\s*g"
            },
            matcher! {
                name: "carbohydrate <Ng",
                pattern: r"(?i)Carbohydrates?:?\s+<\s*(\d+(?:[.,]\d+)*)\s*g",
                buckets: BucketMask::HAS_LESS_THAN
            },
            // Airtable exports use the plural: "Carbohydrates 11g"
            matcher! {
                name: "carbohydrate Ng",
                pattern: r"(?i)Carbohydrates?:?\s+(\d+(?:[.,]\d+)*)\s*g"
            },
            matcher! {
                name: "carbs Ng",
                pattern: r"(?i)Carbs:?\s+(\d+(?:[.,]\d+)*)\s*g"
            },
        ],
    }
}

fn field_fiber() -> NutrientField {
    field! {
        nutrient: Nutrient::Fiber,
        phrases: ["fiber", "fibre"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "dietary fiber Ng",
                pattern: r"(?i)Dietary\s+Fiber:?\s+(\d+(?:[.,]\d+)*)\s*g"
            },
            matcher! {
                name: "fibre <Ng",
                pattern: r"(?i)Fib(?:er|re):?\s+<\s*(\d+(?:[.,]\d+)*)\s*g",
                buckets: BucketMask::HAS_LESS_THAN
            },
            matcher! {
                name: "fiber Ng",
                pattern: r"(?i)Fiber:?\s+(\d+(?:[.,]\d+)*)\s*g"
            },
            matcher! {
                name: "fibre Ng",
                pattern: r"(?i)Fibre:?\s+(\d+(?:[.,]\d+)*)\s*g"
            },
        ],
    }
}

fn field_sugar() -> NutrientField {
    field! {
        nutrient: Nutrient::Sugar,
        phrases: ["sugar"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "total sugars Ng",
                pattern: r"(?i)Total\s+Sugars?:?\s+(\d+(?:[.,]\d+)*)\s*g"
            },
            // EU: "- of which sugars 7.7g"
            matcher! {
                name: "of which sugars Ng",
                pattern: r"(?i)of\s+which\s+sugars:?\s+(\d+(?:[.,]\d+)*)\s*g"
            },
            matcher! {
                name: "sugars <Ng",
                pattern: r"(?i)Sugars:?\s+<\s*(\d+(?:[.,]\d+)*)\s*g",
                buckets: BucketMask::HAS_LESS_THAN
            },
            matcher! {
                name: "sugars Ng",
                pattern: r"(?i)Sugars:?\s+(\d+(?:[.,]\d+)*)\s*g"
            },
        ],
    }
}

fn field_added_sugars() -> NutrientField {
    field! {
        nutrient: Nutrient::AddedSugars,
        phrases: ["added sugar"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "includes Ng added sugars",
                pattern: r"(?i)Includes\s+(\d+(?:[.,]\d+)*)\s*g\s+Added\s+Sugars"
            },
            matcher! {
                name: "added sugars Ng",
                pattern: r"(?i)Added\s+Sugars:?\s+(\d+(?:[.,]\d+)*)\s*g"
            },
        ],
    }
}

fn field_protein() -> NutrientField {
    field! {
        nutrient: Nutrient::Protein,
        phrases: ["protein"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "protein <Ng",
                pattern: r"(?i)Protein:?\s+<\s*(\d+(?:[.,]\d+)*)\s*g",
                buckets: BucketMask::HAS_LESS_THAN
            },
            matcher! {
                name: "protein Ng",
                pattern: r"(?i)Protein:?\s+(\d+(?:[.,]\d+)*)\s*g"
            },
        ],
    }
}

pub fn get() -> Vec<NutrientField> {
    vec![
        field_total_fat(),
        field_saturated_fat(),
        field_trans_fat(),
        field_cholesterol(),
        field_sodium(),
        field_carbohydrate(),
        field_fiber(),
        field_sugar(),
        field_added_sugars(),
        field_protein(),
    ]
}
