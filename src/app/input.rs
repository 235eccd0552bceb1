//! Country name normalization.

/// Normalizes a submitted country name for matching.
///
/// Trims surrounding whitespace and lowercases. Returns `None` when the
/// field is missing or blank.
pub fn normalize_country_input(raw: Option<&str>) -> Option<String> {
    let normalized = raw?.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Uppercases the first character, leaving the rest untouched.
///
/// Used on already-lowercased input, so `"united kingdom"` becomes
/// `"United kingdom"`.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
