/// Escape a string for the PostgreSQL COPY text format: delimiter, newline,
/// carriage return and backslash must be backslash-escaped.
pub fn escape_copy_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\n' => escaped.push_str(r"\n"),
            '\r' => escaped.push_str(r"\r"),
            '\t' => escaped.push_str(r"\t"),
            '\\' => escaped.push_str(r"\\"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_copy_text_passthrough() {
        assert_eq!(escape_copy_text("JFK Airport"), "JFK Airport");
    }

    #[test]
    fn test_escape_copy_text_specials() {
        assert_eq!(escape_copy_text("a\tb"), r"a\tb");
        assert_eq!(escape_copy_text("line1\nline2"), r"line1\nline2");
        assert_eq!(escape_copy_text(r"back\slash"), r"back\\slash");
        assert_eq!(escape_copy_text("cr\rlf"), r"cr\rlf");
    }
}
