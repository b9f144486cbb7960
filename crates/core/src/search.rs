//! Search helpers for the admin list views.
//!
//! List searches are case-insensitive substring matches (`ILIKE`). User input
//! is escaped so `%`, `_` and `\` match literally instead of acting as
//! wildcards.

/// Escape character used in every generated `ILIKE ... ESCAPE` clause.
pub const LIKE_ESCAPE: char = '\\';

/// Build an `ILIKE` pattern matching `term` anywhere in a column.
///
/// Returns `None` when the term is empty or whitespace-only, meaning "no
/// search filter".
pub fn contains_pattern(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}
