/// Escapes text for HTML bodies that travel through a single-quoted
/// AppleScript invocation: double quotes take a backslash, and each single
/// quote closes and reopens the surrounding shell quote (`'\''`).
pub fn script_quote(text: &str) -> String {
    text.replace('"', "\\\"").replace('\'', "'\\''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_quotes_gain_backslash() {
        assert_eq!(script_quote(r#"the "big" one"#), r#"the \"big\" one"#);
    }

    #[test]
    fn test_single_quotes_reopen_shell_quote() {
        assert_eq!(script_quote("tonight's show"), r"tonight'\''s show");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(script_quote("no quoting needed"), "no quoting needed");
    }
}
