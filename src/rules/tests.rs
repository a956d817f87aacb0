use crate::{Nutrient, NutrientValue, parse};

#[test]
fn nutrient_examples_matching() {
    // Array of (nutrient, expected_amount, input_string)
    let cases: Vec<(Nutrient, f64, &str)> = vec![
        (Nutrient::ServingPerContainer, 8.0, "Servings Per Container 8"),
        (Nutrient::ServingPerContainer, 8.0, "Servings Per Container: About 8"),
        (Nutrient::ServingPerContainer, 2.5, "2.5 servings per container"),
        (Nutrient::Calories, 120.0, "Calories 120"),
        (Nutrient::Calories, 120.0, "CALORIES: 120"),
        (Nutrient::Calories, 90.0, "Calorie 90"),
        (Nutrient::Calories, 55.0, "Energy 231kJ/55kcal"),
        (Nutrient::Calories, 55.0, "Energy 231 kJ / 55 kcal"),
        (Nutrient::Calories, 55.0, "Energy 55kcal"),
        (Nutrient::Calories, 1200.0, "Calories 1,200"),
        (Nutrient::Calories, 2000.0, "Energy 8,400kJ/2,000kcal"),
        (Nutrient::TotalFat, 5.0, "Total Fat 5g"),
        (Nutrient::TotalFat, 0.5, "Fat <0.5g"),
        (Nutrient::TotalFat, 0.5, "Fat < 0.5 g"),
        (Nutrient::TotalFat, 3.2, "Fat 3.2g"),
        (Nutrient::TotalFat, 3.2, "fat: 3.2 g"),
        (Nutrient::TotalFat, 9.5, "Fat 9,5g"),
        (Nutrient::TotalFat, 9.5, "Fat 9.5g Saturated Fat <0.1g"),
        (Nutrient::TotalFat, 0.5, "Calories 5 Fat <0.5g"),
        (Nutrient::SaturatedFat, 1.0, "Saturated Fat 1g"),
        (Nutrient::SaturatedFat, 0.1, "Saturated Fat <0.1g"),
        (Nutrient::SaturatedFat, 0.1, "of which saturates <0.1g"),
        (Nutrient::SaturatedFat, 1.4, "- of which saturates 1.4g"),
        (Nutrient::TransFat, 0.0, "Trans Fat 0g"),
        (Nutrient::Cholesterol, 30.0, "Cholesterol 30mg"),
        (Nutrient::Cholesterol, 30.0, "Cholestrol 30mg"),
        (Nutrient::Sodium, 200.0, "Sodium 200mg"),
        (Nutrient::Sodium, 1200.0, "Sodium 1.2g"),
        (Nutrient::Sodium, 800.0, "Salt 2g"),
        (Nutrient::Sodium, 4.0, "Salt <0.01g"),
        (Nutrient::Sodium, 300.0, "Salt 0,75g"),
        (Nutrient::Sodium, 1250.0, "Sodium 1,250mg"),
        (Nutrient::Carbohydrate, 37.0, "Total Carbohydrate 37g"),
        (Nutrient::Carbohydrate, 37.0, "Total Carbohydrates 37g"),
        (Nutrient::Carbohydrate, 11.0, "Carbohydrates 11g"),
        (Nutrient::Carbohydrate, 11.0, "Carbohydrate: 11g"),
        (Nutrient::Carbohydrate, 9.0, "Carbs 9g"),
        (Nutrient::Carbohydrate, 1.0, "Carbohydrate <1g"),
        (Nutrient::Fiber, 4.0, "Dietary Fiber 4g"),
        (Nutrient::Fiber, 4.0, "Fiber 4g"),
        (Nutrient::Fiber, 2.1, "Fibre 2.1g"),
        (Nutrient::Fiber, 0.5, "Fibre <0.5g"),
        (Nutrient::Fiber, 0.5, "Dietary Fiber <0.5g"),
        (Nutrient::Sugar, 12.0, "Total Sugars 12g"),
        (Nutrient::Sugar, 7.7, "- of which sugars 7.7g"),
        (Nutrient::Sugar, 7.7, "Sugars 7.7g"),
        (Nutrient::Sugar, 0.5, "Sugars <0.5g"),
        (Nutrient::Sugar, 0.5, "- of which sugars <0.5g"),
        (Nutrient::AddedSugars, 10.0, "Includes 10g Added Sugars"),
        (Nutrient::AddedSugars, 10.0, "Added Sugars 10g"),
        (Nutrient::Protein, 3.0, "Protein 3g"),
        (Nutrient::Protein, 0.5, "Protein <0.5g"),
        (Nutrient::VitaminD, 2.0, "Vitamin D 2mcg"),
        (Nutrient::VitaminD, 25.0, "Vitamin D3 25µg"),
        (Nutrient::VitaminD, 5.0, "Cholecalciferol 5 mcg"),
        (Nutrient::VitaminA, 900.0, "Vitamin A 900IU"),
        (Nutrient::VitaminC, 60.0, "Vitamin C 60mg"),
        (Nutrient::VitaminC, 60.0, "Ascorbic Acid 60mg"),
        (Nutrient::VitaminE, 15.0, "Vitamin E 15 IU"),
        (Nutrient::VitaminK, 120.0, "Vitamin K 120mcg"),
        (Nutrient::VitaminB1, 1.2, "Vitamin B1 1.2mg"),
        (Nutrient::VitaminB1, 1.2, "Thiamin 1.2mg"),
        (Nutrient::VitaminB2, 1.3, "Riboflavin 1.3mg"),
        (Nutrient::VitaminB3, 16.0, "Niacin 16mg"),
        (Nutrient::VitaminB5, 5.0, "Pantothenic Acid 5mg"),
        (Nutrient::VitaminB6, 1.7, "Vitamin B6 1.7mg"),
        (Nutrient::VitaminB12, 2.4, "Vitamin B12 2.4mcg"),
        (Nutrient::Folate, 400.0, "Folate 400mcg"),
        (Nutrient::Folate, 400.0, "Folic Acid 400mcg"),
        (Nutrient::Biotin, 30.0, "Biotin 30mcg"),
        (Nutrient::Choline, 550.0, "Choline 550mg"),
        (Nutrient::Calcium, 260.0, "Calcium 260mg"),
        (Nutrient::Iron, 8.0, "Iron 8mg"),
        (Nutrient::Potassium, 240.0, "Potassium 240mg"),
        (Nutrient::Potassium, 240.0, "Potasium 240mg"),
        (Nutrient::Phosphorus, 100.0, "Phosphorus 100mg"),
        (Nutrient::Magnesium, 42.0, "Magnesium 42mg"),
        (Nutrient::Zinc, 1.1, "Zinc 1.1mg"),
        (Nutrient::Selenium, 5.5, "Selenium 5.5ug"),
        (Nutrient::Copper, 0.09, "Copper 0.09mg"),
        (Nutrient::Manganese, 0.23, "Manganese 0.23mg"),
        (Nutrient::Chromium, 35.0, "Chromium 35mcg"),
        (Nutrient::Molybdenum, 45.0, "Molybdenum 45μg"),
        (Nutrient::Chloride, 2300.0, "Chloride 2300mg"),
    ];

    let mut failures = Vec::new();
    for (nutrient, expected, input) in &cases {
        let got = parse(input).amount(*nutrient);
        let ok = got.is_some_and(|v| (v - expected).abs() < 1e-9);
        if !ok {
            failures.push(format!("{input:?}: expected {nutrient} = {expected}, got {got:?}"));
        }
    }
    assert!(failures.is_empty(), "{} of {} cases failed:\n{}", failures.len(), cases.len(), failures.join("\n"));
}

#[test]
fn serving_size_captures_free_text() {
    let cases: Vec<(&str, &str)> = vec![
        ("1 cup", "Serving Size 1 cup Calories 120"),
        ("2/3 cup (55g)", "Serving Size 2/3 cup (55g) Servings Per Container 8"),
        ("1 bar (40g)", "Serving Size: 1 bar (40g) 8 servings per container"),
        ("30g", "Serving size 30g Energy 500kJ/120kcal"),
        ("2 tbsp (32g)", "Serving Size 2 tbsp (32g)"),
        ("1 scoop", "Serving Size 1 scoop Amount Per Serving"),
        ("3 pieces", "Serving Size 3 pieces 5% Daily Value"),
        ("2 capsules", "Serving Size 2 capsules Vitamin C 500mg Zinc 10mg"),
        ("1 cup", "Serving Size 1 cup Saturated Fat 1g"),
        ("1 cup", "Serving Size 1 cup Dietary Fiber 4g"),
        ("2 tablets", "Serving Size 2 tablets Calcium 500mg"),
        ("1 bar", "Serving Size 1 bar - of which sugars 7g"),
    ];

    for (expected, input) in cases {
        assert_eq!(
            parse(input).get(Nutrient::ServingSize),
            Some(&NutrientValue::Text(expected.to_string())),
            "input: {input:?}"
        );
    }
}

#[test]
fn us_label_reads_every_line() {
    let label = "Nutrition Facts<br>8 servings per container<br>Serving size 2/3 cup (55g)<br>\
                 Amount per serving<br>Calories 230<br>Total Fat 8g 10%<br>Saturated Fat 1g 5%<br>\
                 Trans Fat 0g<br>Cholesterol 0mg 0%<br>Sodium 160mg 7%<br>Total Carbohydrate 37g 13%<br>\
                 Dietary Fiber 4g 14%<br>Total Sugars 12g<br>Includes 10g Added Sugars 20%<br>Protein 3g<br>\
                 Vitamin D 2mcg 10%<br>Calcium 260mg 20%<br>Iron 8mg 45%<br>Potassium 240mg 6%";
    let res = parse(label);

    let expected: Vec<(Nutrient, f64)> = vec![
        (Nutrient::ServingPerContainer, 8.0),
        (Nutrient::Calories, 230.0),
        (Nutrient::TotalFat, 8.0),
        (Nutrient::SaturatedFat, 1.0),
        (Nutrient::TransFat, 0.0),
        (Nutrient::Cholesterol, 0.0),
        (Nutrient::Sodium, 160.0),
        (Nutrient::Carbohydrate, 37.0),
        (Nutrient::Fiber, 4.0),
        (Nutrient::Sugar, 12.0),
        (Nutrient::AddedSugars, 10.0),
        (Nutrient::Protein, 3.0),
        (Nutrient::VitaminD, 2.0),
        (Nutrient::Calcium, 260.0),
        (Nutrient::Iron, 8.0),
        (Nutrient::Potassium, 240.0),
    ];
    for (nutrient, amount) in &expected {
        assert_eq!(res.amount(*nutrient), Some(*amount), "{nutrient}");
    }
    assert_eq!(res.text(Nutrient::ServingSize), Some("2/3 cup (55g)"));
    assert_eq!(res.len(), expected.len() + 1);
}

#[test]
fn eu_label_reads_every_line() {
    let label = "<p>Energy 1046kJ/250kcal</p><p>Fat 9.5g</p><p>- of which saturates 1.4g</p>\
                 <p>Carbohydrate 30g</p><p>- of which sugars 7.7g</p><p>Fibre 4.1g</p>\
                 <p>Protein 8.6g</p><p>Salt 0.75g</p>";
    let res = parse(label);

    assert_eq!(res.amount(Nutrient::Calories), Some(250.0));
    assert_eq!(res.amount(Nutrient::TotalFat), Some(9.5));
    assert_eq!(res.amount(Nutrient::SaturatedFat), Some(1.4));
    assert_eq!(res.amount(Nutrient::Carbohydrate), Some(30.0));
    assert_eq!(res.amount(Nutrient::Sugar), Some(7.7));
    assert_eq!(res.amount(Nutrient::Fiber), Some(4.1));
    assert_eq!(res.amount(Nutrient::Protein), Some(8.6));
    assert_eq!(res.amount(Nutrient::Sodium), Some(300.0));
}

#[test]
fn eu_decimal_commas_are_read() {
    let res = parse("Energy 1046kJ/250kcal Fat 9,5g - of which saturates 1,4g Salt 0,75g");
    assert_eq!(res.amount(Nutrient::Calories), Some(250.0));
    assert_eq!(res.amount(Nutrient::TotalFat), Some(9.5));
    assert_eq!(res.amount(Nutrient::SaturatedFat), Some(1.4));
    assert_eq!(res.amount(Nutrient::Sodium), Some(300.0));
}

#[test]
fn sub_rows_do_not_stand_in_for_totals() {
    let res = parse("Saturated Fat 1g");
    assert_eq!(res.amount(Nutrient::TotalFat), None);
    assert_eq!(res.amount(Nutrient::SaturatedFat), Some(1.0));

    assert_eq!(parse("Trans Fat 0g").amount(Nutrient::TotalFat), None);

    let res = parse("Fat 9.5g Saturated Fat <0.1g");
    assert_eq!(res.amount(Nutrient::TotalFat), Some(9.5));
    assert_eq!(res.amount(Nutrient::SaturatedFat), Some(0.1));
}

#[test]
fn text_without_label_values_yields_nothing() {
    let inputs = [
        "",
        "Delicious oat bar with honey",
        "Calories: unknown",
        "Contains 5 servings of joy",
        "Fat free!",
        // a run of separators is neither grouping nor a decimal comma
        "Calories 1,2,3",
    ];
    for input in inputs {
        assert!(parse(input).is_empty(), "input: {input:?}");
    }
}
