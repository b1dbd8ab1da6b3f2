//! Small text cleanups shared by the presentation layer.

/// Strips the leading `<br>` the catalog likes to put in descriptions.
/// Only the first occurrence is removed; the rest of the markup is left
/// for the renderer.
#[must_use]
pub fn clean_description(description: Option<&str>) -> String {
    description.map_or_else(String::new, |text| text.replacen("<br>", "", 1))
}

/// Lowercases the string and capitalizes its first character, for enum
/// values like "CURRENT" shown as "Current".
#[must_use]
pub fn capitalize_first(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut chars = lowered.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
