//! The fixed rules of the login form.

use std::sync::LazyLock;

use super::FieldRule;

/// Word characters only, 8 to 12 of them.
const USERNAME_PATTERN: &str = r"^\w{8,12}$";

/// RFC 5322 derived address grammar: dot-atom or quoted local part, then a
/// dotted hostname or a bracketed address literal. Letters are spelled out
/// in both cases so that only ASCII letters match.
const EMAIL_PATTERN: &str = r#"^(?:(?:[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?\.)+[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?|[a-zA-Z0-9-]*[a-zA-Z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\]))$"#;

/// Exactly eight ASCII letters or digits.
const PASSWORD_PATTERN: &str = r"^[a-zA-Z0-9]{8}$";

pub static USERNAME: LazyLock<FieldRule> =
    LazyLock::new(|| FieldRule::new().pattern(USERNAME_PATTERN));

pub static EMAIL: LazyLock<FieldRule> =
    LazyLock::new(|| FieldRule::new().pattern(EMAIL_PATTERN));

// regex has no lookahead, so each required class is its own predicate.
pub static PASSWORD: LazyLock<FieldRule> = LazyLock::new(|| {
    FieldRule::new()
        .pattern(PASSWORD_PATTERN)
        .pattern("[a-z]")
        .pattern("[A-Z]")
        .pattern("[0-9]")
});

/// Whether `username` satisfies the username rule.
pub fn username_valid(username: &str) -> bool {
    USERNAME.check(username)
}

/// Whether `email` satisfies the email rule.
pub fn email_valid(email: &str) -> bool {
    EMAIL.check(email)
}

/// Whether `password` satisfies the password rule.
pub fn password_valid(password: &str) -> bool {
    PASSWORD.check(password)
}

/// Whether the confirmation matches the password exactly. Two empty
/// strings match.
pub fn confirm_valid(password: &str, confirm_password: &str) -> bool {
    password == confirm_password
}
