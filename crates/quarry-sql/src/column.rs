//! Qualification of caller-authored column expressions.

/// Qualifies a raw column expression with `table`.
///
/// The expression may carry an alias (`name as n`, in any letter case).
/// Function calls, quoted literals, `DISTINCT ...` and `UNCOMPRESS(...)` are
/// left unqualified, as are keys already prefixed with `table.`. An empty
/// `table` qualifies nothing.
pub fn normalize(column: &str, table: &str) -> String {
    let (key, alias) = split_alias(column);

    let prefix = if table.is_empty() {
        String::new()
    } else {
        format!("{table}.")
    };

    let key = if is_expression(column) || key.starts_with(&prefix) {
        key.to_string()
    } else {
        format!("{prefix}{key}")
    };

    match alias {
        Some(alias) => format!("{key} AS {alias}"),
        None => key,
    }
}

/// Splits `key AS alias` on the first ` as ` token, ignoring letter case.
fn split_alias(column: &str) -> (&str, Option<&str>) {
    const SEPARATOR: &str = " as ";

    let lower = column.to_ascii_lowercase();

    let Some(start) = lower.find(SEPARATOR) else {
        return (column.trim(), None);
    };

    let key = column[..start].trim();
    let rest = &column[start + SEPARATOR.len()..];

    // Anything after a second separator is dropped
    let alias = match lower[start + SEPARATOR.len()..].find(SEPARATOR) {
        Some(end) => &rest[..end],
        None => rest,
    };

    let alias = alias.trim();
    (key, (!alias.is_empty()).then_some(alias))
}

/// A parenthesis anywhere past the first character is the only signal for a
/// function call; a bare name such as `count` is still a column.
fn is_expression(column: &str) -> bool {
    let column = column.trim_start();

    column.starts_with("UNCOMPRESS")
        || column.starts_with('\'')
        || column.starts_with("DISTINCT")
        || column.find('(').is_some_and(|index| index > 0)
}
