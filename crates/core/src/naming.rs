//! Name normalization for uniqueness checks.
//!
//! Department names are unique once surrounding whitespace is stripped and
//! case is folded. The key is computed here and stored alongside the name,
//! so the database never has to fold case itself.

/// The name with surrounding Unicode whitespace removed.
pub fn trimmed(name: &str) -> &str {
    name.trim()
}

/// Comparison key for a department name: trimmed and lowercased.
pub fn name_key(name: &str) -> String {
    trimmed(name).to_lowercase()
}

/// A name is blank if nothing is left after trimming.
pub fn is_blank(name: &str) -> bool {
    trimmed(name).is_empty()
}
