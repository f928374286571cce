//! Shared validation for command inputs

use url::Url;

use crate::error::{Result, WebfoldError};

/// Validate a technical name: lowercase letters, digits, and hyphens only
pub fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(WebfoldError::InvalidAppName {
            name: name.to_string(),
        })
    }
}

/// Validate that the URL is absolute and well-formed
pub fn validate_url(url: &str) -> Result<()> {
    Url::parse(url)
        .map(|_| ())
        .map_err(|_| WebfoldError::InvalidUrl {
            url: url.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_accepts_lowercase_alnum_hyphen() {
        assert!(validate_name("gmail").is_ok());
        assert!(validate_name("my-app-2").is_ok());
        assert!(validate_name("a").is_ok());
    }

    #[test]
    fn test_validate_name_rejects_bad_charsets() {
        assert!(validate_name("").is_err());
        assert!(validate_name("My App").is_err());
        assert!(validate_name("UPPER").is_err());
        assert!(validate_name("under_score").is_err());
        assert!(validate_name("dots.are.bad").is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://mail.google.com").is_ok());
        assert!(validate_url("http://localhost:8080/path").is_ok());
        assert!(validate_url("not a url").is_err());
        assert!(validate_url("example.com").is_err());
    }
}
