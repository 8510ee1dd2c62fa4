//! Company code derivation from display names.

use regex::Regex;
use std::sync::OnceLock;

/// Derives a company code from a display name.
///
/// The name is lowercased and trimmed, every run of characters outside
/// `[a-z0-9]` becomes a single `_`, and separators at either end are removed.
/// Returns an empty string when the name holds no ASCII letters or digits.
pub fn slugify(name: &str) -> String {
    static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = SEPARATOR_REGEX.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap());

    let lowered = name.trim().to_lowercase();
    regex.replace_all(&lowered, "_").trim_matches('_').to_string()
}
