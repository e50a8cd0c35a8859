//! Identifier sanitation for rendered DDL.

/// Strip quote characters from an identifier.
///
/// Column names are interpolated bare into index DDL; removing `"`, `'`
/// and the MySQL backquote guarantees an embedded quote can never
/// terminate the statement early.
#[must_use]
pub fn strip_quotes(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '"' | '\'' | '`'))
        .collect()
}
