/// Escapes a string for embedding between single quotes in a MySQL
/// statement. Backslashes, quotes and NUL bytes are backslash-escaped.
pub(crate) fn escape_string(src: &str) -> String {
    let mut dst = String::with_capacity(src.len());

    for ch in src.chars() {
        match ch {
            '\\' => dst.push_str("\\\\"),
            '\'' => dst.push_str("\\'"),
            '"' => dst.push_str("\\\""),
            '\0' => dst.push_str("\\0"),
            ch => dst.push(ch),
        }
    }

    dst
}

/// Replaces the characters that are significant in HTML with entities.
pub(crate) fn escape_html(src: &str) -> String {
    let mut dst = String::with_capacity(src.len());

    for ch in src.chars() {
        match ch {
            '&' => dst.push_str("&amp;"),
            '"' => dst.push_str("&quot;"),
            '\'' => dst.push_str("&#039;"),
            '<' => dst.push_str("&lt;"),
            '>' => dst.push_str("&gt;"),
            ch => dst.push(ch),
        }
    }

    dst
}
