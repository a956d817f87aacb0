//! Nutrition panel markup.
//!
//! The panel is a `<ul>` annotated with schema.org `NutritionInformation`
//! microdata. The header block (serving information and calories) is followed
//! by one row per present nutrient in [`Nutrient`] order, then a footnote.

use crate::{Indent, Nutrient, NutrientValue, ParsedResult};
use std::fmt::Write;

const DEFAULT_HEADING: &str = "Nutrition Facts";
const FOOTNOTE: &str = "* The % Daily Value (DV) tells you how much a nutrient in a serving of food contributes to a \
                        daily diet. 2,000 calories a day is used for general nutrition advice.";

/// Display options for [`render_panel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub heading: String,
    /// Adds the "Standard DV" column.
    pub show_daily_values: bool,
    /// Round %DV to whole percents instead of two decimals.
    pub round_daily_values: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { heading: DEFAULT_HEADING.to_string(), show_daily_values: true, round_daily_values: true }
    }
}

impl RenderOptions {
    /// Build options from shortcode-style attributes.
    ///
    /// Empty values keep the default. Flags accept `1/true/on/yes` and anything
    /// else is false. Unknown attributes are ignored.
    pub fn from_attrs<'a, I>(attrs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = RenderOptions::default();
        for (key, value) in attrs {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.trim() {
                "heading" => options.heading = value.to_string(),
                "show_daily_values" => options.show_daily_values = parse_flag(value),
                "round_daily_values" => options.round_daily_values = parse_flag(value),
                other => tracing::debug!(attribute = other, "ignoring unknown panel attribute"),
            }
        }
        options
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "on" | "yes")
}

/// Render `result` as panel markup. Returns `None` for an empty result.
pub fn render_panel(result: &ParsedResult, options: &RenderOptions) -> Option<String> {
    if result.is_empty() {
        return None;
    }

    let dv = options.show_daily_values;
    let mut out = String::new();
    out.push_str(r#"<div class="nflc std nutrition-section">"#);
    out.push_str(concat!(
        r#"<ul class="nutrition-table" itemprop="nutrition" itemscope "#,
        r#"itemtype="http://schema.org/NutritionInformation">"#,
    ));
    let _ = write!(out, r#"<li class="nt-header b-0"><h2 class="nt-title">{}</h2></li>"#, escape(&options.heading));

    if let Some(servings) = result.get(Nutrient::ServingPerContainer) {
        let _ = write!(
            out,
            concat!(
                r#"<li class="nt-row b-0 serving-per-cont">"#,
                r#"<span class="nt-label col-100">{} servings per container</span></li>"#,
            ),
            escape(&servings.to_string())
        );
    }

    if let Some(size) = result.get(Nutrient::ServingSize) {
        let _ = write!(
            out,
            concat!(
                r#"<li class="nt-row sep-10 serving-size"><span class="nt-label col-50">Serving Size</span>"#,
                r#"<span class="nt-value col-50" itemprop="servingSize">{}</span></li>"#,
            ),
            escape(&size.to_string())
        );
        out.push_str(concat!(
            r#"<li class="nt-row b-0 font-bold amount-per-serving sep-1">"#,
            r#"<span class="nt-label col-100">Amount per serving</span></li>"#,
        ));
    }

    if let Some(calories) = result.get(Nutrient::Calories) {
        let calories = escape(&calories.to_string());
        let (label_col, value_col) = if dv { (80, 20) } else { (70, 30) };
        let _ = write!(
            out,
            concat!(
                r#"<li class="nt-row font-bold calories sep-4"><span class="nt-label col-{label_col}">Calories</span>"#,
                r#"<span class="nt-value col-{value_col}">{calories}</span>"#,
                r#"<meta itemprop="calories" content="{calories}"></li>"#,
            ),
            label_col = label_col,
            value_col = value_col,
            calories = calories,
        );
    }

    if dv {
        out.push_str(concat!(
            r#"<li class="nt-row nt-head font-bold sep-1"><span class="nt-label nutrient-label col-40"></span>"#,
            r#"<span class="nt-label amount-label col-20"></span>"#,
            r#"<span class="nt-label sdv-label col-20">Standard DV</span>"#,
            r#"<span class="pdv-label col-20">% Daily Value*</span></li>"#,
        ));
    } else {
        out.push_str(concat!(
            r#"<li class="nt-head font-bold sep-1"><span class="nt-label nutrient-label col-40"></span>"#,
            r#"<span class="nt-label amount-label col-30"></span>"#,
            r#"<span class="pdv-label col-30">% Daily Value*</span></li>"#,
        ));
    }

    for (nutrient, value) in result.iter().filter(|(n, _)| !n.is_header()) {
        render_row(&mut out, nutrient, value, options);
    }

    out.push_str(r#"<li class="nt-sep sep-8"></li>"#);
    let _ = write!(out, r#"<li class="nt-footer b-0"><span class="nt-label col-100">{}</span></li>"#, escape(FOOTNOTE));
    out.push_str("</ul></div>");
    Some(out)
}

fn render_row(out: &mut String, nutrient: Nutrient, value: &NutrientValue, options: &RenderOptions) {
    let li_class = match nutrient.indent() {
        Indent::None => "",
        Indent::Sub => r#" class="nt-sublevel-1""#,
        Indent::SubSub => r#" class="nt-sublevel-2""#,
    };
    let label_class = if nutrient.is_emphasized() { " font-bold" } else { "" };
    let itemprop = nutrient.schema_prop().map(|p| format!(r#" itemprop="{p}""#)).unwrap_or_default();
    let unit = nutrient.unit().suffix();
    let amount = escape(&format!("{value}{unit}"));
    let percent = value
        .as_amount()
        .and_then(|v| percent_daily_value(nutrient, v, options.round_daily_values))
        .map(|p| format!("{}%", format_amount(p)))
        .unwrap_or_default();
    let label = escape(nutrient.label());

    if options.show_daily_values {
        let standard = nutrient.daily_value().map(|sv| format!("{}{unit}", format_amount(sv))).unwrap_or_default();
        let _ = write!(
            out,
            concat!(
                r#"<li{li_class}><span class="nt-label col-40{label_class}">{label}</span>"#,
                r#"<span class="nt-amount col-20"{itemprop}>{amount}</span>"#,
                r#"<span class="sdv-label col-20">{standard}</span>"#,
                r#"<span class="pdv-label col-20">{percent}</span></li>"#,
            ),
            li_class = li_class,
            label_class = label_class,
            label = label,
            itemprop = itemprop,
            amount = amount,
            standard = escape(&standard),
            percent = escape(&percent),
        );
    } else {
        let _ = write!(
            out,
            concat!(
                r#"<li{li_class}><span class="nt-label col-40{label_class}">{label}</span>"#,
                r#"<span class="nt-amount col-30"{itemprop}>{amount}</span>"#,
                r#"<span class="pdv-label col-30">{percent}</span></li>"#,
            ),
            li_class = li_class,
            label_class = label_class,
            label = label,
            itemprop = itemprop,
            amount = amount,
            percent = escape(&percent),
        );
    }
}

/// `value * 100 / daily value`, rounded to 0 or 2 decimals.
///
/// `None` when the nutrient has no daily value or the rounded percentage is 0.
pub(crate) fn percent_daily_value(nutrient: Nutrient, value: f64, round: bool) -> Option<f64> {
    let standard = nutrient.daily_value()?;
    let pct = value * 100.0 / standard;
    let pct = if round { pct.round() } else { (pct * 100.0).round() / 100.0 };
    (pct != 0.0).then_some(pct)
}

/// Shortest decimal form, with conversion noise (`0.30000000000000004`) removed.
pub(crate) fn format_amount(v: f64) -> String {
    let v = (v * 10_000.0).round() / 10_000.0;
    // avoid "-0"
    if v == 0.0 { "0".to_string() } else { v.to_string() }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}
