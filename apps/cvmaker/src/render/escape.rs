//! HTML escaping for user-supplied text.
//!
//! Every string that ends up in the rendered CV goes through here first,
//! whatever the render path. This is a security invariant, not cosmetics.

/// Escapes `&`, `<`, `>`, `"` and `'` for safe embedding in element content.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Attribute-position variant: HTML escaping plus newline flattening.
pub fn escape_attr(input: &str) -> String {
    escape_html(input).replace('\n', " ")
}
