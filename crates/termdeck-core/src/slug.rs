//! Identifier-safe fragments derived from preset names.

/// Convert a human-readable name into a command identifier fragment.
///
/// The name is trimmed and lowercased, every run of characters outside
/// `[a-z0-9]` becomes a single `-`, and leading/trailing hyphens are dropped.
/// When nothing is left, `fallback` is returned unchanged.
///
/// Uniqueness is not guaranteed here; callers disambiguate.
pub fn slugify(name: &str, fallback: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug
    }
}
