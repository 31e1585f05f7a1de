//! Turns raw model output into clean affirmation lines.

const LIST_MARKER: &str = "- ";

/// Splits `raw` into lines, trims them, drops blanks and strips a leading
/// `"- "` marker. Order is preserved.
pub fn parse_affirmations(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.strip_prefix(LIST_MARKER).unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
