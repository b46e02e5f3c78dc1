//! String helpers exposed to the Java templates as minijinja filters.

use minijinja::Environment;

/// Register every helper on `env`. `capitalize` replaces the builtin.
pub fn register(env: &mut Environment<'_>) {
    env.add_filter("remove_double_quote", remove_double_quote);
    env.add_filter("escape_double_quote", escape_double_quote);
    env.add_filter("remove_line_break", remove_line_break);
    env.add_filter("trim_whitespace", trim_whitespace);
    env.add_filter("split_string", split_string);
    env.add_filter("capitalize", capitalize);
}

pub fn remove_double_quote(value: String) -> String {
    value.replace('"', "")
}

/// Escape `"` so the value can sit inside a Java string literal.
pub fn escape_double_quote(value: String) -> String {
    value.replace('"', "\\\"")
}

pub fn remove_line_break(value: String) -> String {
    value.replace(['\r', '\n'], "")
}

/// Collapse every run of whitespace into a single space.
pub fn trim_whitespace(value: String) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_space = false;
    for ch in value.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

/// Split on `separator` (default `,`) and trim each piece.
pub fn split_string(value: String, separator: Option<String>) -> Vec<String> {
    let separator = separator.unwrap_or_else(|| ",".to_string());
    value
        .split(separator.as_str())
        .map(|piece| piece.trim().to_string())
        .collect()
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(value: String) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}
