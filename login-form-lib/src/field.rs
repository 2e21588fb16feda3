//! Form fields and their prompt hints.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Hint shown while the username is invalid.
pub const USERNAME_PROMPT: &str = "Only letters and numbers 12 characters max and 8 min, no spaces";

/// Hint shown while the email is invalid.
pub const EMAIL_PROMPT: &str = "Enter a valid email address";

/// Hint shown while the password is invalid.
pub const PASSWORD_PROMPT: &str = "Must have 8 characters containing at least one number and one uppercase letter on one lowercase";

/// Hint shown while the confirmation does not match the password.
pub const CONFIRM_PASSWORD_PROMPT: &str = "Password fields to not match";

/// One of the four text inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields, in the order the form displays them.
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// The hint shown below the input while it is invalid.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Username => USERNAME_PROMPT,
            Self::Email => EMAIL_PROMPT,
            Self::Password => PASSWORD_PROMPT,
            Self::ConfirmPassword => CONFIRM_PASSWORD_PROMPT,
        }
    }

    /// Stable lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }

    /// Whether the raw text of this field should be kept out of logs.
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}' (expected username, email, password or confirm)")]
pub struct ParseFieldError(pub String);

impl FromStr for Field {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "username" => Ok(Self::Username),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "confirm" | "confirm_password" | "confirm-password" => Ok(Self::ConfirmPassword),
            _ => Err(ParseFieldError(s.to_string())),
        }
    }
}
