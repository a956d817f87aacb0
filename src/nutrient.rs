//! Nutrient identifiers and their label metadata.
//!
//! [`Nutrient`] is the closed set of values the extractor knows how to recover.
//! The declaration order doubles as the display order of the rendered panel, so
//! a `BTreeMap<Nutrient, _>` iterates in label order for free.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit of measure a nutrient is reported in.
///
/// Values are never stored with a unit of their own: the unit always comes from
/// the nutrient they were matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Free text (serving size descriptions such as "2/3 cup (55g)").
    Text,
    /// Plain count (servings per container).
    Count,
    Kcal,
    Gram,
    Milligram,
    Microgram,
    InternationalUnit,
}

impl Unit {
    /// Suffix appended to amounts on the panel.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Text | Unit::Count | Unit::Kcal => "",
            Unit::Gram => "g",
            Unit::Milligram => "mg",
            Unit::Microgram => "mcg",
            Unit::InternationalUnit => "IU",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, Unit::Text)
    }
}

macro_rules! nutrients {
    ($( $variant:ident => $id:literal ),* $(,)?) => {
        /// A nutrient identifier (`sodium`, `vitamin_b12`, ...).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Nutrient {
            $( #[serde(rename = $id)] $variant ),*
        }

        impl Nutrient {
            /// Every nutrient, in declaration (display) order.
            pub const ALL: &'static [Nutrient] = &[ $( Nutrient::$variant ),* ];

            /// Stable snake_case identifier.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Nutrient::$variant => $id ),*
                }
            }
        }

        impl FromStr for Nutrient {
            type Err = UnknownNutrient;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $id => Ok(Nutrient::$variant), )*
                    _ => Err(UnknownNutrient(s.to_string())),
                }
            }
        }
    };
}

nutrients! {
    ServingSize => "serving_size",
    ServingPerContainer => "serving_per_container",
    Calories => "calories",
    TotalFat => "total_fat",
    SaturatedFat => "saturated_fat",
    TransFat => "trans_fat",
    Cholesterol => "cholesterol",
    Sodium => "sodium",
    Carbohydrate => "carbohydrate",
    Fiber => "fiber",
    Sugar => "sugar",
    AddedSugars => "added_sugars",
    Protein => "protein",
    VitaminD => "vitamin_d",
    VitaminA => "vitamin_a",
    VitaminC => "vitamin_c",
    VitaminE => "vitamin_e",
    VitaminK => "vitamin_k",
    VitaminB1 => "vitamin_b1",
    VitaminB2 => "vitamin_b2",
    VitaminB3 => "vitamin_b3",
    VitaminB5 => "vitamin_b5",
    VitaminB6 => "vitamin_b6",
    VitaminB12 => "vitamin_b12",
    Folate => "folate",
    Biotin => "biotin",
    Choline => "choline",
    Calcium => "calcium",
    Iron => "iron",
    Potassium => "potassium",
    Phosphorus => "phosphorus",
    Magnesium => "magnesium",
    Zinc => "zinc",
    Selenium => "selenium",
    Copper => "copper",
    Manganese => "manganese",
    Chromium => "chromium",
    Molybdenum => "molybdenum",
    Chloride => "chloride",
}

/// Error returned when parsing an unknown nutrient identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown nutrient identifier '{0}'")]
pub struct UnknownNutrient(pub String);

/// How a nutrient row is indented on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    None,
    /// "Saturated Fat" under "Total Fat", ...
    Sub,
    /// "Added Sugars" under "Total Sugars".
    SubSub,
}

impl Nutrient {
    pub fn unit(self) -> Unit {
        use Nutrient::*;
        match self {
            ServingSize => Unit::Text,
            ServingPerContainer => Unit::Count,
            Calories => Unit::Kcal,
            TotalFat | SaturatedFat | TransFat | Carbohydrate | Fiber | Sugar | AddedSugars | Protein => Unit::Gram,
            VitaminA | VitaminE => Unit::InternationalUnit,
            VitaminD | VitaminK | VitaminB12 | Folate | Biotin | Selenium | Chromium | Molybdenum => Unit::Microgram,
            Cholesterol | Sodium | VitaminC | VitaminB1 | VitaminB2 | VitaminB3 | VitaminB5 | VitaminB6 | Choline
            | Calcium | Iron | Potassium | Phosphorus | Magnesium | Zinc | Copper | Manganese | Chloride => {
                Unit::Milligram
            }
        }
    }

    /// Reference daily intake used for the %DV column, in [`Nutrient::unit`].
    ///
    /// `None` means the panel shows no percentage for this nutrient.
    pub fn daily_value(self) -> Option<f64> {
        use Nutrient::*;
        let dv = match self {
            TotalFat => 78.0,
            SaturatedFat => 20.0,
            Cholesterol => 300.0,
            Sodium => 2300.0,
            Carbohydrate => 275.0,
            Fiber => 28.0,
            AddedSugars => 50.0,
            Protein => 50.0,
            VitaminD => 20.0,
            VitaminA => 900.0,
            VitaminC => 90.0,
            VitaminE => 15.0,
            VitaminK => 120.0,
            VitaminB1 => 1.2,
            VitaminB2 => 1.3,
            VitaminB3 => 16.0,
            VitaminB5 => 5.0,
            VitaminB6 => 1.7,
            VitaminB12 => 2.4,
            Folate => 400.0,
            Biotin => 30.0,
            Choline => 550.0,
            Calcium => 1300.0,
            Iron => 18.0,
            Potassium => 4700.0,
            Phosphorus => 1250.0,
            Magnesium => 420.0,
            Zinc => 11.0,
            Selenium => 55.0,
            Copper => 0.9,
            Manganese => 2.3,
            Chromium => 35.0,
            Molybdenum => 45.0,
            Chloride => 2300.0,
            ServingSize | ServingPerContainer | Calories | TransFat | Sugar => return None,
        };
        Some(dv)
    }

    /// Human-readable panel label.
    pub fn label(self) -> &'static str {
        use Nutrient::*;
        match self {
            ServingSize => "Serving Size",
            ServingPerContainer => "Servings Per Container",
            Calories => "Calories",
            TotalFat => "Total Fat",
            SaturatedFat => "Saturated Fat",
            TransFat => "Trans Fat",
            Cholesterol => "Cholesterol",
            Sodium => "Sodium",
            Carbohydrate => "Total Carbohydrate",
            Fiber => "Dietary Fiber",
            Sugar => "Total Sugars",
            AddedSugars => "Added Sugars",
            Protein => "Protein",
            VitaminD => "Vitamin D (Cholecalciferol)",
            VitaminA => "Vitamin A",
            VitaminC => "Vitamin C",
            VitaminE => "Vitamin E",
            VitaminK => "Vitamin K",
            VitaminB1 => "Vitamin B1 (Thiamin)",
            VitaminB2 => "Vitamin B2 (Riboflavin)",
            VitaminB3 => "Vitamin B3 (Niacin)",
            VitaminB5 => "Vitamin B5 (Pantothenic Acid)",
            VitaminB6 => "Vitamin B6",
            VitaminB12 => "Vitamin B12",
            Folate => "Folate",
            Biotin => "Biotin",
            Choline => "Choline",
            Calcium => "Calcium",
            Iron => "Iron",
            Potassium => "Potassium",
            Phosphorus => "Phosphorus",
            Magnesium => "Magnesium",
            Zinc => "Zinc",
            Selenium => "Selenium",
            Copper => "Copper",
            Manganese => "Manganese",
            Chromium => "Chromium",
            Molybdenum => "Molybdenum",
            Chloride => "Chloride",
        }
    }

    /// Microdata property for the panel row. Vitamins and minerals use their
    /// camelCase names; servings per container has none.
    pub fn schema_prop(self) -> Option<&'static str> {
        use Nutrient::*;
        let prop = match self {
            ServingSize => "servingSize",
            Calories => "calories",
            TotalFat => "fatContent",
            SaturatedFat => "saturatedFatContent",
            TransFat => "transFatContent",
            Cholesterol => "cholesterolContent",
            Sodium => "sodiumContent",
            Carbohydrate => "carbohydrateContent",
            Fiber => "fiberContent",
            Sugar | AddedSugars => "sugarContent",
            Protein => "proteinContent",
            VitaminD => "vitaminD",
            VitaminA => "vitaminA",
            VitaminC => "vitaminC",
            VitaminE => "vitaminE",
            VitaminK => "vitaminK",
            VitaminB1 => "vitaminB1",
            VitaminB2 => "vitaminB2",
            VitaminB3 => "vitaminB3",
            VitaminB5 => "vitaminB5",
            VitaminB6 => "vitaminB6",
            VitaminB12 => "vitaminB12",
            Folate => "folate",
            Biotin => "biotin",
            Choline => "choline",
            Calcium => "calcium",
            Iron => "iron",
            Potassium => "potassium",
            Phosphorus => "phosphorus",
            Magnesium => "magnesium",
            Zinc => "zinc",
            Selenium => "selenium",
            Copper => "copper",
            Manganese => "manganese",
            Chromium => "chromium",
            Molybdenum => "molybdenum",
            Chloride => "chloride",
            ServingPerContainer => return None,
        };
        Some(prop)
    }

    pub fn indent(self) -> Indent {
        use Nutrient::*;
        match self {
            SaturatedFat | TransFat | Fiber | Sugar => Indent::Sub,
            AddedSugars => Indent::SubSub,
            _ => Indent::None,
        }
    }

    /// Whether the label is printed in bold (the top-level macronutrients).
    pub fn is_emphasized(self) -> bool {
        matches!(self, Nutrient::TotalFat | Nutrient::Carbohydrate | Nutrient::Protein)
    }

    /// Nutrients shown in the header block rather than as table rows.
    pub fn is_header(self) -> bool {
        matches!(self, Nutrient::ServingSize | Nutrient::ServingPerContainer | Nutrient::Calories)
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
