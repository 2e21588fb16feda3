//! Input filters applied by a view before text reaches the model.
//!
//! The model stores whatever it is given; these filters reproduce what the
//! form's inputs do to typed text (no uppercase or spaces in usernames,
//! passwords capped at eight characters).

use crate::field::Field;

/// Longest password the password input accepts.
pub const PASSWORD_MAX_CHARS: usize = 8;

/// Lower-case `raw` and trim surrounding whitespace.
pub fn normalize_username(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Keep at most the first [`PASSWORD_MAX_CHARS`] characters of `raw`.
pub fn cap_password(raw: &str) -> String {
    raw.chars().take(PASSWORD_MAX_CHARS).collect()
}

/// Per-field filtering policy of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputFilter {
    normalize_username: bool,
    cap_password: bool,
}

impl Default for InputFilter {
    fn default() -> Self {
        Self {
            normalize_username: true,
            cap_password: true,
        }
    }
}

impl InputFilter {
    /// Filter that passes every value through untouched.
    pub fn none() -> Self {
        Self {
            normalize_username: false,
            cap_password: false,
        }
    }

    /// Toggle username lower-casing and trimming.
    pub fn normalize_username(mut self, enabled: bool) -> Self {
        self.normalize_username = enabled;
        self
    }

    /// Toggle the password length cap.
    pub fn cap_password(mut self, enabled: bool) -> Self {
        self.cap_password = enabled;
        self
    }

    /// Transform `raw` the way the input for `field` would.
    ///
    /// The cap applies to the password input only; the confirmation input
    /// accepts any length.
    pub fn apply(&self, field: Field, raw: &str) -> String {
        match field {
            Field::Username if self.normalize_username => normalize_username(raw),
            Field::Password if self.cap_password => cap_password(raw),
            _ => raw.to_string(),
        }
    }
}
