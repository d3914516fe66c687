//! Display formatting for report cells.

use sig_types::format_pt_date;

/// Replace the literal substrings "euros"/"euro" (case-insensitive) with
/// the currency sign. The amount itself is never parsed.
pub fn euro_substitution(value: &str) -> String {
    let replaced = replace_ci(value, "euros", "€");
    replace_ci(&replaced, "euro", "€")
}

/// Monetary cell: opaque value string with the €-substitution, or "N/A".
pub fn format_value(value: Option<&str>) -> String {
    match value {
        Some(v) => euro_substitution(v),
        None => "N/A".to_string(),
    }
}

/// Conclusion cell: `dd/mm/yyyy`, or "N/A" when absent.
pub fn format_conclusion(date: Option<&str>) -> String {
    match date {
        Some(d) => format_pt_date(d),
        None => "N/A".to_string(),
    }
}

/// Case-insensitive literal replacement. The needle is ASCII; the haystack
/// may not be, so the scan walks characters rather than bytes.
fn replace_ci(haystack: &str, needle: &str, replacement: &str) -> String {
    let needle: Vec<char> = needle.chars().collect();
    let chars: Vec<char> = haystack.chars().collect();
    let mut out = String::with_capacity(haystack.len());
    let mut i = 0;
    while i < chars.len() {
        let matches = i + needle.len() <= chars.len()
            && chars[i..i + needle.len()]
                .iter()
                .zip(&needle)
                .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()));
        if matches {
            out.push_str(replacement);
            i += needle.len();
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}
