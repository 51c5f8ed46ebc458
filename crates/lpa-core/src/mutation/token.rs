//! CSRF token read from the page.

use std::fmt;

/// Name of the hidden form field carrying the token.
pub const CSRF_FIELD_NAME: &str = "csrftoken";
/// Request header the token is sent in.
pub const CSRF_HEADER: &str = "x-csrftoken";

/// Non-empty CSRF token value.
#[derive(Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Returns `None` for an empty value (a field with no token is treated as absent).
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep tokens out of logs.
impl fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CsrfToken(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_is_absent() {
        assert!(CsrfToken::new("").is_none());
        assert_eq!(CsrfToken::new("abc").unwrap().as_str(), "abc");
    }

    #[test]
    fn debug_hides_value() {
        let token = CsrfToken::new("secret").unwrap();
        assert!(!format!("{token:?}").contains("secret"));
    }
}
