use crate::{BucketMask, Nutrient, NutrientField};

fn field_calcium() -> NutrientField {
    field! {
        nutrient: Nutrient::Calcium,
        phrases: ["calcium"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! { name: "calcium Nmg", pattern: r"(?i)Calcium:?\s+(\d+(?:[.,]\d+)*)\s*mg" },
        ],
    }
}

fn field_iron() -> NutrientField {
    field! {
        nutrient: Nutrient::Iron,
        phrases: ["iron"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! { name: "iron Nmg", pattern: r"(?i)Iron:?\s+(\d+(?:[.,]\d+)*)\s*mg" },
        ],
    }
}

fn field_potassium() -> NutrientField {
    field! {
        nutrient: Nutrient::Potassium,
        phrases: ["potassium", "potasium"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! { name: "potassium Nmg", pattern: r"(?i)Potassium:?\s+(\d+(?:[.,]\d+)*)\s*mg" },
            matcher! { name: "potasium Nmg (typo)", pattern: r"(?i)Potasium:?\s+(\d+(?:[.,]\d+)*)\s*mg" },
        ],
    }
}

fn field_phosphorus() -> NutrientField {
    field! {
        nutrient: Nutrient::Phosphorus,
        phrases: ["phosphorus"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! { name: "phosphorus Nmg", pattern: r"(?i)Phosphorus:?\s+(\d+(?:[.,]\d+)*)\s*mg" },
        ],
    }
}

fn field_magnesium() -> NutrientField {
    field! {
        nutrient: Nutrient::Magnesium,
        phrases: ["magnesium"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! { name: "magnesium Nmg", pattern: r"(?i)Magnesium:?\s+(\d+(?:[.,]\d+)*)\s*mg" },
        ],
    }
}

fn field_zinc() -> NutrientField {
    field! {
        nutrient: Nutrient::Zinc,
        phrases: ["zinc"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! { name: "zinc Nmg", pattern: r"(?i)Zinc:?\s+(\d+(?:[.,]\d+)*)\s*mg" },
        ],
    }
}

fn field_selenium() -> NutrientField {
    field! {
        nutrient: Nutrient::Selenium,
        phrases: ["selenium"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! { name: "selenium Nmcg", pattern: r"(?i)Selenium:?\s+(\d+(?:[.,]\d+)*)\s*(?:mcg|µg|μg|ug)" },
        ],
    }
}

fn field_copper() -> NutrientField {
    field! {
        nutrient: Nutrient::Copper,
        phrases: ["copper"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! { name: "copper Nmg", pattern: r"(?i)Copper:?\s+(\d+(?:[.,]\d+)*)\s*mg" },
        ],
    }
}

fn field_manganese() -> NutrientField {
    field! {
        nutrient: Nutrient::Manganese,
        phrases: ["manganese"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! { name: "manganese Nmg", pattern: r"(?i)Manganese:?\s+(\d+(?:[.,]\d+)*)\s*mg" },
        ],
    }
}

fn field_chromium() -> NutrientField {
    field! {
        nutrient: Nutrient::Chromium,
        phrases: ["chromium"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! { name: "chromium Nmcg", pattern: r"(?i)Chromium:?\s+(\d+(?:[.,]\d+)*)\s*(?:mcg|µg|μg|ug)" },
        ],
    }
}

fn field_molybdenum() -> NutrientField {
    field! {
        nutrient: Nutrient::Molybdenum,
        phrases: ["molybdenum"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! { name: "molybdenum Nmcg", pattern: r"(?i)Molybdenum:?\s+(\d+(?:[.,]\d+)*)\s*(?:mcg|µg|μg|ug)" },
        ],
    }
}

fn field_chloride() -> NutrientField {
    field! {
        nutrient: Nutrient::Chloride,
        phrases: ["chloride"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! { name: "chloride Nmg", pattern: r"(?i)Chloride:?\s+(\d+(?:[.,]\d+)*)\s*mg" },
        ],
    }
}

pub fn get() -> Vec<NutrientField> {
    vec![
        field_calcium(),
        field_iron(),
        field_potassium(),
        field_phosphorus(),
        field_magnesium(),
        field_zinc(),
        field_selenium(),
        field_copper(),
        field_manganese(),
        field_chromium(),
        field_molybdenum(),
        field_chloride(),
    ]
}
