//! GitHub workflow command formatting

/// Escape command data (percent-encoding the characters the runner parses)
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property value; `:` and `,` delimit properties
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

/// `::error::<message>`
pub fn error(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// `::add-mask::<secret>`
pub fn add_mask(secret: &str) -> String {
    format!("::add-mask::{}", escape_data(secret))
}

/// Legacy `::set-output name=<name>::<value>`, used when `GITHUB_OUTPUT` is unset
pub fn set_output(name: &str, value: &str) -> String {
    format!("::set-output name={}::{}", escape_property(name), escape_data(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_data() {
        assert_eq!(escape_data("100%\nok\r"), "100%25%0Aok%0D");
        assert_eq!(escape_data("a:b,c"), "a:b,c");
    }

    #[test]
    fn test_escape_property() {
        assert_eq!(escape_property("a:b,c"), "a%3Ab%2Cc");
    }

    #[test]
    fn test_error_is_single_line() {
        let line = error("linear-automation-actions error: first\nsecond");
        assert_eq!(line, "::error::linear-automation-actions error: first%0Asecond");
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_add_mask() {
        assert_eq!(add_mask("lin_api_x"), "::add-mask::lin_api_x");
    }

    #[test]
    fn test_set_output() {
        assert_eq!(
            set_output("postedOnLinearIssueId", "ENG-1"),
            "::set-output name=postedOnLinearIssueId::ENG-1"
        );
    }
}
