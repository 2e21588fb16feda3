//! Field validation for the login form.
//!
//! Each field has a [`FieldRule`]: a list of predicates that must all pass.
//! The confirmation field is the exception, since it compares two fields and
//! has no rule of its own. Prompts live on [`Field`](crate::Field).
//!
//! # Example
//!
//! ```
//! use login_form_lib::validation::{email_valid, password_valid, username_valid};
//!
//! assert!(username_valid("gooduser1"));
//! assert!(email_valid("user@example.com"));
//! assert!(!password_valid("abcdefg1"));
//! ```

mod result;
mod rule;
pub mod rules;

pub use result::{FieldError, ValidationResult};
pub use rule::FieldRule;
pub use rules::{confirm_valid, email_valid, password_valid, username_valid};
