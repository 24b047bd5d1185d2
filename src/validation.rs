// SPDX-License-Identifier: MPL-2.0
//! Sign-in and registration form checks.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Minimum password length, in UTF-16 code units.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Email shape: `local@domain.tld` without whitespace.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email regex should compile")
});

/// Returns true for `local@domain.tld` shaped input without whitespace.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Length is measured in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane (most emoji) counts twice.
#[must_use]
pub fn validate_password(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LEN
}

/// Form fields as entered. Absent and empty fields are not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidEmail,
    PasswordTooShort,
    PasswordMismatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValidationError::InvalidEmail => "Please enter a valid email address",
            ValidationError::PasswordTooShort => "Password must be at least 8 characters",
            ValidationError::PasswordMismatch => "Passwords do not match",
        })
    }
}

impl std::error::Error for ValidationError {}

fn filled(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Runs the email, password and confirmation checks in that order.
pub fn validate_form(form: &FormData) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if filled(&form.email).is_some_and(|email| !validate_email(email)) {
        errors.push(ValidationError::InvalidEmail);
    }
    if filled(&form.password).is_some_and(|password| !validate_password(password)) {
        errors.push(ValidationError::PasswordTooShort);
    }
    if filled(&form.confirm_password)
        .is_some_and(|confirm| form.password.as_deref() != Some(confirm))
    {
        errors.push(ValidationError::PasswordMismatch);
    }

    errors
}

/// Sign-in check: [`validate_form`], with email and password also required.
pub fn validate_sign_in(form: &FormData) -> Vec<ValidationError> {
    let mut errors = validate_form(form);
    if filled(&form.email).is_none() && !errors.contains(&ValidationError::InvalidEmail) {
        errors.insert(0, ValidationError::InvalidEmail);
    }
    if filled(&form.password).is_none() && !errors.contains(&ValidationError::PasswordTooShort) {
        let at = usize::from(errors.first() == Some(&ValidationError::InvalidEmail));
        errors.insert(at, ValidationError::PasswordTooShort);
    }
    errors
}
