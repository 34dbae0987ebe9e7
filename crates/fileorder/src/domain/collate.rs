use std::cmp::Ordering;

/// Compares two display names the way a user expects a file browser
/// to sort them: case-insensitively, with a raw comparison breaking
/// case-only ties so the result stays deterministic.
pub fn compare_display_names(first: &str, second: &str) -> Ordering {
    first
        .to_lowercase()
        .cmp(&second.to_lowercase())
        .then_with(|| first.cmp(second))
}
