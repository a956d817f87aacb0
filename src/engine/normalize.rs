//! Text normalization.
//!
//! Label text arrives from the catalog sync with markup mixed in. Before any
//! matcher runs, the text goes through:
//!
//! ```text
//! raw ─▶ <br>, <br/>, <br /> → " "   (keep adjacent label lines apart)
//!     ─▶ strip remaining tags        (only tag-shaped runs: `<` + letter, `/` or `!`)
//!     ─▶ decode &nbsp; &lt; &gt; &amp;
//!     ─▶ collapse whitespace, trim
//! ```
//!
//! A bare `<` followed by a digit or space is label content ("Fat <0.5g"), not
//! markup, and survives.

/// Normalize raw label text into a single trimmed line without markup.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let text = regex!(r"(?i)<br\s*/?>").replace_all(raw, " ");
    let text = regex!(r"<(?:!--[\s\S]*?--|[/!]?[A-Za-z][^>]*)>").replace_all(&text, "");
    let text = decode_entities(&text);

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(s: &str) -> String {
    // `&amp;` last so "&amp;lt;" decodes to "&lt;" rather than "<".
    s.replace("&nbsp;", " ").replace("&#160;", " ").replace("&lt;", "<").replace("&gt;", ">").replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn break_tags_become_spaces() {
        assert_eq!(
            normalize("Calories 120<br>Total Fat 5g<br/>Sodium 200mg<br />Protein 3g"),
            "Calories 120 Total Fat 5g Sodium 200mg Protein 3g"
        );
        assert_eq!(normalize("Calories 120<BR>Protein 3g"), "Calories 120 Protein 3g");
    }

    #[test]
    fn other_markup_is_stripped() {
        assert_eq!(normalize("<p><strong>Calories</strong> 120</p>\n<p>Sodium 5mg</p>"), "Calories 120 Sodium 5mg");
        assert_eq!(normalize("Protein<!-- synced --> 3g"), "Protein 3g");
    }

    #[test]
    fn less_than_bounds_survive() {
        assert_eq!(normalize("Fat <0.5g<br>Salt < 0.01g"), "Fat <0.5g Salt < 0.01g");
        assert_eq!(normalize("Fat &lt;0.5g"), "Fat <0.5g");
    }

    #[test]
    fn whitespace_is_collapsed_and_trimmed() {
        assert_eq!(normalize("  Serving Size\t1 cup \r\n\r\n Calories&nbsp;120  "), "Serving Size 1 cup Calories 120");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" <br> "), "");
    }
}
