//! Tag list widget codec
//!
//! Tag columns are string arrays; the widget shows them as one
//! comma-separated line.

/// Split widget text on commas, trimming whitespace and dropping empties
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Join tags back into widget text
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}
