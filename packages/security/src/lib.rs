//! # Pagecraft Security
//!
//! Pure scrubbers applied to user-entered strings before they reach stored
//! props or exported markup. None of them fail: bad input degrades to a safe
//! value (`#`, a stripped string). Applying any of them twice gives the same
//! result as applying it once.

mod error;
mod forms;
mod sanitize;

pub use error::SecurityError;
pub use forms::{sanitize_form_input, validate_email, FormInputKind, CONTENT_SECURITY_POLICY};
pub use sanitize::{sanitize_css, sanitize_html, sanitize_props, sanitize_text, sanitize_url};
