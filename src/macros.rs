#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare a [`Matcher`](crate::Matcher).
///
/// ```text
/// matcher! {
///     name: "salt g",
///     pattern: r"(?i)Salt\s+(\d+(?:[.,]\d+)*)\s*g",
///     buckets: BucketMask::HAS_DIGITS,   // optional
///     convert: "salt_g" * 400.0,         // optional
/// }
/// ```
#[macro_export]
macro_rules! matcher {
    (
        name: $name:expr,
        pattern: $pat:literal
        $(, buckets: $buckets:expr)?
        $(, convert: $from:literal * $factor:expr)?
        $(,)?
    ) => {
        $crate::Matcher {
            name: $name,
            regex: $crate::regex!($pat),
            buckets: { $crate::BucketMask::empty() $(| $buckets)? },
            conversion: { None $(.or(Some($crate::UnitConversion { from: $from, factor: $factor })))? },
        }
    };
}

/// Declare a [`NutrientField`](crate::NutrientField).
///
/// Field-level `buckets` are added to every matcher's own requirements.
#[macro_export]
macro_rules! field {
    (
        nutrient: $nutrient:expr,
        phrases: [ $($phrase:expr),* $(,)? ]
        $(, buckets: $buckets:expr)?
        , matchers: [ $($m:expr),* $(,)? ]
        $(,)?
    ) => {{
        let shared: $crate::BucketMask = { $crate::BucketMask::empty() $(| $buckets)? };
        $crate::NutrientField {
            nutrient: $nutrient,
            phrases: &[ $($phrase),* ],
            matchers: vec![ $($m),* ]
                .into_iter()
                .map(|mut m: $crate::Matcher| {
                    m.buckets |= shared;
                    m
                })
                .collect(),
        }
    }};
}
