use crate::constants::MAX_RAW_DISPLAY_LEN;

/// Truncate a raw wire value for inclusion in an error message.
/// Cuts on a char boundary and appends `...` when shortened.
pub fn truncate_for_display(raw: &str) -> String {
    match raw.char_indices().nth(MAX_RAW_DISPLAY_LEN) {
        Some((cut, _)) => format!("{}...", &raw[..cut]),
        None => raw.to_string(),
    }
}
