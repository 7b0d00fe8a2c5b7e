//! Local filename sanitization.

/// Characters removed from display names before they become local filenames.
const STRIPPED: [char; 4] = [':', '?', '"', '/'];

/// Strips `:`, `?`, `"` and `/` from a display name.
///
/// Nothing else is touched, so distinct names can collapse to the same
/// filename (`"A: B"` and `"A B"`); the later download then overwrites the
/// earlier one.
pub fn sanitize_local_name(name: &str) -> String {
    name.chars().filter(|c| !STRIPPED.contains(c)).collect()
}
