/// Utility helpers used by all source adapters.
///
/// This module contains:
/// - The shared timestamp pattern
/// - Small line-oriented text helpers
///
/// IMPORTANT:
/// - No site-specific business logic should live here.
/// - This module must remain lightweight and deterministic.
///
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a "DD.MM.YYYY HH:MM" timestamp anywhere in a blob of
/// row text (e.g. "15.12.2025 14:36").
///
/// Capture groups:
/// - 1: calendar date
/// - 2: time of day
pub static DATE_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}\.\d{2}\.\d{4})\s+(\d{2}:\d{2})")
        .expect("timestamp pattern is valid")
});

/// First line of a text block, trimmed. `None` if the text has no
/// non-empty first line.
pub fn first_line(text: &str) -> Option<String> {
    let line = text.lines().next()?.trim();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

/// Last non-empty line of a text block, trimmed.
///
/// Used by the metal-trade adapter's region heuristic: the region
/// is conventionally the trailing line of the row text. The
/// heuristic is preserved as-is, fragile as it is, because the
/// site offers no structural marker for it.
pub fn last_nonempty_line(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .next_back()
        .map(str::to_string)
}
