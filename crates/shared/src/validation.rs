//! Validation helpers for request payloads.
//!
//! These are plugged into `#[validate(custom(function = ...))]` attributes on
//! the domain request types.

use validator::ValidationError;

/// Rejects strings that are empty or whitespace only.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Restricts a link to the `http` and `https` schemes.
///
/// URL well-formedness is checked separately with `#[validate(url)]`; this
/// only rejects other schemes and embedded whitespace.
pub fn validate_http_scheme(link: &str) -> Result<(), ValidationError> {
    let has_scheme = link.starts_with("https://") || link.starts_with("http://");

    if has_scheme && !link.contains(char::is_whitespace) {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_link");
        err.message = Some("Link must be an http(s) URL".into());
        Err(err)
    }
}

/// Validates a platform label such as `Instagram` or `YouTube`.
///
/// Letters, digits, spaces, `.`, `-` and `_` are allowed.
pub fn validate_platform(platform: &str) -> Result<(), ValidationError> {
    let allowed = platform
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '.' | '-' | '_'));

    if allowed && !platform.trim().is_empty() {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_platform");
        err.message = Some(
            "Platform may only contain letters, digits, spaces, dots, hyphens and underscores"
                .into(),
        );
        Err(err)
    }
}
