// crates/cli/src/parsers.rs

/// Validate an output key for `key=value` records.
///
/// `$GITHUB_OUTPUT` keys may not be empty or contain `=`, `<` or line breaks.
pub fn parse_output_key(s: &str) -> Result<String, String> {
    let key = s.trim();
    if key.is_empty() {
        return Err("output key must not be empty".to_string());
    }
    if let Some(bad) = key.chars().find(|c| matches!(c, '=' | '<' | '\n' | '\r')) {
        return Err(format!("output key must not contain {bad:?}"));
    }
    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_keys() {
        assert_eq!(parse_output_key(" python_files ").unwrap(), "python_files");
    }

    #[test]
    fn rejects_reserved_characters() {
        assert!(parse_output_key("").is_err());
        assert!(parse_output_key("a=b").is_err());
        assert!(parse_output_key("a<<EOF").is_err());
        assert!(parse_output_key("a\nb").is_err());
    }
}
