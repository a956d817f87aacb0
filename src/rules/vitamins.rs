use crate::{BucketMask, Nutrient, NutrientField};

fn field_vitamin_d() -> NutrientField {
    field! {
        nutrient: Nutrient::VitaminD,
        phrases: ["vitamin d", "cholecalciferol"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "vitamin d Nmcg",
                pattern: r"(?i)Vitamin\s+D3?:?\s+(\d+(?:[.,]\d+)*)\s*(?:mcg|µg|μg|ug)"
            },
            matcher! {
                name: "cholecalciferol Nmcg",
                pattern: r"(?i)Cholecalciferol:?\s+(\d+(?:[.,]\d+)*)\s*(?:mcg|µg|μg|ug)"
            },
        ],
    }
}

fn field_vitamin_a() -> NutrientField {
    field! {
        nutrient: Nutrient::VitaminA,
        phrases: ["vitamin a"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "vitamin a NIU",
                pattern: r"(?i)Vitamin\s+A:?\s+(\d+(?:[.,]\d+)*)\s*IU"
            },
        ],
    }
}

fn field_vitamin_c() -> NutrientField {
    field! {
        nutrient: Nutrient::VitaminC,
        phrases: ["vitamin c", "ascorbic"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "vitamin c Nmg",
                pattern: r"(?i)Vitamin\s+C:?\s+(\d+(?:[.,]\d+)*)\s*mg"
            },
            matcher! {
                name: "ascorbic acid Nmg",
                pattern: r"(?i)Ascorbic\s+Acid:?\s+(\d+(?:[.,]\d+)*)\s*mg"
            },
        ],
    }
}

fn field_vitamin_e() -> NutrientField {
    field! {
        nutrient: Nutrient::VitaminE,
        phrases: ["vitamin e"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "vitamin e NIU",
                pattern: r"(?i)Vitamin\s+E:?\s+(\d+(?:[.,]\d+)*)\s*IU"
            },
        ],
    }
}

fn field_vitamin_k() -> NutrientField {
    field! {
        nutrient: Nutrient::VitaminK,
        phrases: ["vitamin k"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "vitamin k Nmcg",
                pattern: r"(?i)Vitamin\s+K:?\s+(\d+(?:[.,]\d+)*)\s*(?:mcg|µg|μg|ug)"
            },
        ],
    }
}

fn field_vitamin_b1() -> NutrientField {
    field! {
        nutrient: Nutrient::VitaminB1,
        phrases: ["vitamin b1", "thiamin"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "vitamin b1 Nmg",
                pattern: r"(?i)Vitamin\s+B1:?\s+(\d+(?:[.,]\d+)*)\s*mg"
            },
            matcher! {
                name: "thiamin Nmg",
                pattern: r"(?i)Thiamine?:?\s+(\d+(?:[.,]\d+)*)\s*mg"
            },
        ],
    }
}

fn field_vitamin_b2() -> NutrientField {
    field! {
        nutrient: Nutrient::VitaminB2,
        phrases: ["vitamin b2", "riboflavin"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "vitamin b2 Nmg",
                pattern: r"(?i)Vitamin\s+B2:?\s+(\d+(?:[.,]\d+)*)\s*mg"
            },
            matcher! {
                name: "riboflavin Nmg",
                pattern: r"(?i)Riboflavin:?\s+(\d+(?:[.,]\d+)*)\s*mg"
            },
        ],
    }
}

fn field_vitamin_b3() -> NutrientField {
    field! {
        nutrient: Nutrient::VitaminB3,
        phrases: ["vitamin b3", "niacin"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "vitamin b3 Nmg",
                pattern: r"(?i)Vitamin\s+B3:?\s+(\d+(?:[.,]\d+)*)\s*mg"
            },
            matcher! {
                name: "niacin Nmg",
                pattern: r"(?i)Niacin:?\s+(\d+(?:[.,]\d+)*)\s*mg"
            },
        ],
    }
}

fn field_vitamin_b5() -> NutrientField {
    field! {
        nutrient: Nutrient::VitaminB5,
        phrases: ["vitamin b5", "pantothenic"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "vitamin b5 Nmg",
                pattern: r"(?i)Vitamin\s+B5:?\s+(\d+(?:[.,]\d+)*)\s*mg"
            },
            matcher! {
                name: "pantothenic acid Nmg",
                pattern: r"(?i)Pantothenic\s+Acid:?\s+(\d+(?:[.,]\d+)*)\s*mg"
            },
        ],
    }
}

fn field_vitamin_b6() -> NutrientField {
    field! {
        nutrient: Nutrient::VitaminB6,
        phrases: ["vitamin b6"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "vitamin b6 Nmg",
                pattern: r"(?i)Vitamin\s+B6:?\s+(\d+(?:[.,]\d+)*)\s*mg"
            },
        ],
    }
}

fn field_vitamin_b12() -> NutrientField {
    field! {
        nutrient: Nutrient::VitaminB12,
        phrases: ["vitamin b12"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "vitamin b12 Nmcg",
                pattern: r"(?i)Vitamin\s+B12:?\s+(\d+(?:[.,]\d+)*)\s*(?:mcg|µg|μg|ug)"
            },
        ],
    }
}

fn field_folate() -> NutrientField {
    field! {
        nutrient: Nutrient::Folate,
        phrases: ["folate", "folic"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "folate Nmcg",
                pattern: r"(?i)Folate:?\s+(\d+(?:[.,]\d+)*)\s*(?:mcg|µg|μg|ug)"
            },
            matcher! {
                name: "folic acid Nmcg",
                pattern: r"(?i)Folic\s+Acid:?\s+(\d+(?:[.,]\d+)*)\s*(?:mcg|µg|μg|ug)"
            },
        ],
    }
}

fn field_biotin() -> NutrientField {
    field! {
        nutrient: Nutrient::Biotin,
        phrases: ["biotin"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "biotin Nmcg",
                pattern: r"(?i)Biotin:?\s+(\d+(?:[.,]\d+)*)\s*(?:mcg|µg|μg|ug)"
            },
        ],
    }
}

fn field_choline() -> NutrientField {
    field! {
        nutrient: Nutrient::Choline,
        phrases: ["choline"],
        buckets: BucketMask::HAS_DIGITS,
        matchers: [
            matcher! {
                name: "choline Nmg",
                pattern: r"(?i)Choline:?\s+(\d+(?:[.,]\d+)*)\s*mg"
            },
        ],
    }
}

pub fn get() -> Vec<NutrientField> {
    vec![
        field_vitamin_d(),
        field_vitamin_a(),
        field_vitamin_c(),
        field_vitamin_e(),
        field_vitamin_k(),
        field_vitamin_b1(),
        field_vitamin_b2(),
        field_vitamin_b3(),
        field_vitamin_b5(),
        field_vitamin_b6(),
        field_vitamin_b12(),
        field_folate(),
        field_biotin(),
        field_choline(),
    ]
}
