pub const DEFAULT_PREFIX: &str = "file";
pub const DEFAULT_EXTENSION: &str = "pdf";

pub fn sanitize_prefix(value: &str) -> String {
    let out = replace_disallowed(value.trim());
    let out = out.trim_end_matches([' ', '.']).to_string();
    if out.is_empty() {
        DEFAULT_PREFIX.to_string()
    } else {
        out
    }
}

/// Accepts `pdf` or `.pdf`.
pub fn sanitize_extension(value: &str) -> String {
    let out = replace_disallowed(value.trim().trim_start_matches('.'));
    let out = out.trim_end_matches([' ', '.']).to_string();
    if out.is_empty() {
        DEFAULT_EXTENSION.to_string()
    } else {
        out
    }
}

fn replace_disallowed(value: &str) -> String {
    value
        .chars()
        .map(|ch| if is_disallowed_char(ch) { '_' } else { ch })
        .collect()
}

fn is_disallowed_char(ch: char) -> bool {
    matches!(ch, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
        || ch == '\0'
        || ch.is_control()
}
