// Validation utilities module
// Provides custom validation functions for domain-specific rules

use regex::Regex;
use std::sync::OnceLock;
use validator::ValidationError;

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();

fn username_regex() -> &'static Regex {
    USERNAME_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_]{3,50}$").expect("username regex literal is valid")
    })
}

/// Validates that a username is 3-50 characters of letters, digits, or underscores
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username_regex().is_match(username) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_username"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames_are_accepted() {
        for username in ["alice01", "Bob_Smith", "abc", "a".repeat(50).as_str()] {
            assert!(
                validate_username(username).is_ok(),
                "expected '{}' to be valid",
                username
            );
        }
    }

    #[test]
    fn test_username_length_bounds() {
        assert!(validate_username("ab").is_err(), "2 chars is too short");
        assert!(
            validate_username(&"a".repeat(51)).is_err(),
            "51 chars is too long"
        );
    }

    #[test]
    fn test_username_charset_is_restricted() {
        for username in ["has space", "dash-ed", "dot.ted", "émile", "semi;colon"] {
            assert!(
                validate_username(username).is_err(),
                "expected '{}' to be rejected",
                username
            );
        }
    }
}
