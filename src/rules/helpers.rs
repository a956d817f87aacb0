use crate::{NutrientValue, Unit};

/// Parse a captured amount into `f64`.
///
/// `1,200` is read as a grouped thousand and `9,5` as a decimal comma. A comma
/// counts as grouping only when every group after it has three digits and the
/// number does not start with `0`.
///
/// Non-finite results count as a failed parse so the caller can fall through
/// to the next matcher.
pub fn parse_amount(s: &str) -> Option<f64> {
    let s = s.trim();
    let plain = if regex!(r"^[1-9]\d{0,2}(?:,\d{3})+(?:\.\d+)?$").is_match(s) {
        s.replace(',', "")
    } else {
        s.replacen(',', ".", 1)
    };
    plain.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Turn a raw capture into a value for a field measured in `unit`.
pub fn capture_value(raw: &str, unit: Unit) -> Option<NutrientValue> {
    if unit.is_numeric() {
        return parse_amount(raw).map(NutrientValue::Amount);
    }

    let text = raw.trim();
    if text.is_empty() { None } else { Some(NutrientValue::Text(text.to_string())) }
}
