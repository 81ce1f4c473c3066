//! Rendering helpers shared by the recipe and meal-plan prompts.

use crate::domain::locale::Locale;

/// Joins restriction tags for a prompt line, or `"None"` when empty.
pub fn list_or_none(items: &[String]) -> String {
    let joined = items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    if joined.is_empty() {
        "None".to_string()
    } else {
        joined
    }
}

pub fn text_or_none(text: Option<&str>) -> &str {
    match text.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => "None",
    }
}

/// Extra instruction appended for non-English locales.
pub fn language_instruction(locale: Locale) -> Option<String> {
    (locale != Locale::En).then(|| {
        format!(
            "Write every human-readable text value in {}. Keep all JSON keys exactly as shown in English.",
            locale.language_name()
        )
    })
}
