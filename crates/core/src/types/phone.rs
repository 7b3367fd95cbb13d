//! Customer phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input contains no digits once sanitized.
    #[error("phone number must contain at least one digit")]
    NoDigits,
    /// The input is too long.
    #[error("phone number must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A customer phone number as typed into the checkout form.
///
/// Only digits, `+`, spaces and `-` are kept; anything else the customer
/// types is dropped, the same filtering the phone input applies as the
/// customer types.
///
/// ## Examples
///
/// ```
/// use royal_cafe_core::Phone;
///
/// assert_eq!(Phone::parse("+966 (55) 123-4567").unwrap().as_str(), "+966 55 123-4567");
/// assert!(Phone::parse("call me").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Maximum length of a sanitized phone number.
    pub const MAX_LENGTH: usize = 32;

    /// Strip every character that is not a digit, `+`, space, or `-`.
    #[must_use]
    pub fn sanitize(input: &str) -> String {
        input
            .chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-'))
            .collect()
    }

    /// Parse a `Phone` from free-form input.
    ///
    /// # Errors
    ///
    /// Returns an error if the sanitized input has no digits or is longer
    /// than [`Phone::MAX_LENGTH`].
    pub fn parse(input: &str) -> Result<Self, PhoneError> {
        let sanitized = Self::sanitize(input);
        let trimmed = sanitized.trim();

        if !trimmed.chars().any(|c| c.is_ascii_digit()) {
            return Err(PhoneError::NoDigits);
        }

        if trimmed.len() > Self::MAX_LENGTH {
            return Err(PhoneError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
