use crate::error::SecurityError;
use crate::sanitize::sanitize_text;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Value for the `Content-Security-Policy` header of a served export
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
script-src 'self' 'unsafe-inline' 'unsafe-eval' https://fonts.googleapis.com; \
style-src 'self' 'unsafe-inline' https://fonts.googleapis.com; \
font-src 'self' https://fonts.gstatic.com data:; \
img-src 'self' data: https: blob:; \
connect-src 'self' https://api.vercel.com https://api.netlify.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormInputKind {
    #[default]
    Text,
    Email,
    Url,
}

pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Strip tags from a submitted form value and validate it for its kind
pub fn sanitize_form_input(input: &str, kind: FormInputKind) -> Result<String, SecurityError> {
    let sanitized = sanitize_text(input);

    match kind {
        FormInputKind::Email if !validate_email(&sanitized) => {
            Err(SecurityError::InvalidEmail(sanitized))
        }
        FormInputKind::Url if !sanitized.is_empty() && !sanitized.starts_with("http") => {
            Err(SecurityError::InvalidUrl(sanitized))
        }
        _ => Ok(sanitized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jane@example.com"));
        assert!(!validate_email("jane@example"));
        assert!(!validate_email("jane doe@example.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_form_input_kinds() {
        assert_eq!(sanitize_form_input(" <b>hi</b> ", FormInputKind::Text), Ok("hi".to_string()));
        assert_eq!(
            sanitize_form_input("<i>a@b.co</i>", FormInputKind::Email),
            Ok("a@b.co".to_string())
        );
        assert!(matches!(
            sanitize_form_input("nope", FormInputKind::Email),
            Err(SecurityError::InvalidEmail(_))
        ));
        assert!(matches!(
            sanitize_form_input("ftp://x", FormInputKind::Url),
            Err(SecurityError::InvalidUrl(_))
        ));
        assert_eq!(sanitize_form_input("", FormInputKind::Url), Ok(String::new()));
    }

    #[test]
    fn test_csp_directives() {
        assert!(CONTENT_SECURITY_POLICY.starts_with("default-src 'self';"));
        assert_eq!(CONTENT_SECURITY_POLICY.split("; ").count(), 6);
    }
}
