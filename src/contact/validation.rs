//! Contact submission validation.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use super::ContactSubmission;

/// One character that is neither `@` nor whitespace, with whitespace as the
/// browser's `\s` defines it (U+FEFF included, U+0085 not).
macro_rules! not_space_or_at {
    () => {
        r"[^\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]"
    };
}

/// Accepted email shape: `local@domain.tld`, no whitespace, exactly one `@`.
pub const EMAIL_PATTERN: &str = concat!(
    "^",
    not_space_or_at!(),
    "+@",
    not_space_or_at!(),
    r"+\.",
    not_space_or_at!(),
    "+$"
);

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

const CODE_REQUIRED: &str = "required";
const CODE_EMAIL: &str = "email";

/// Contact submission errors.
///
/// The display text is the message shown to the visitor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A field was absent or empty.
    #[error("All fields are required")]
    MissingField,

    /// The email does not match [`EMAIL_PATTERN`].
    #[error("Invalid email address")]
    InvalidEmail,

    /// Unexpected server-side condition. The detail is for logs only.
    #[error("Something went wrong. Please try again.")]
    ServerFault(String),
}

impl From<ValidationErrors> for ContactError {
    fn from(errors: ValidationErrors) -> Self {
        let missing = errors
            .field_errors()
            .into_values()
            .flatten()
            .any(|e| e.code == CODE_REQUIRED);

        if missing {
            ContactError::MissingField
        } else {
            ContactError::InvalidEmail
        }
    }
}

/// Check an email address against [`EMAIL_PATTERN`].
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(CODE_REQUIRED)
            .with_message(ContactError::MissingField.to_string().into()));
    }
    Ok(())
}

fn email_format(value: &str) -> Result<(), ValidationError> {
    if !is_valid_email(value) {
        return Err(ValidationError::new(CODE_EMAIL)
            .with_message(ContactError::InvalidEmail.to_string().into()));
    }
    Ok(())
}

impl Validate for ContactSubmission {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = required(&self.name) {
            errors.add("name", e);
        }
        // Format is only checked once the address is present.
        if let Err(e) = required(&self.email).and_then(|_| email_format(&self.email)) {
            errors.add("email", e);
        }
        if let Err(e) = required(&self.message) {
            errors.add("message", e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl ContactSubmission {
    /// Validate and classify the first applicable error.
    ///
    /// A missing field wins over a malformed email.
    pub fn check(&self) -> Result<(), ContactError> {
        self.validate().map_err(ContactError::from)
    }
}
