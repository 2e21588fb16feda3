//! Validation model for a login/signup form.
//!
//! [`FormValidationModel`] owns the raw text of the username, email,
//! password and confirmation inputs and keeps a validity flag, a prompt and a
//! submit flag in sync with them. Views write text through the setters and
//! read the derived state back; [`filter::InputFilter`] holds the
//! transformations a view applies to typed text before handing it over.

pub mod field;
pub mod filter;
pub mod model;
pub mod validation;

pub use field::{Field, ParseFieldError};
pub use filter::InputFilter;
pub use model::{FormSnapshot, FormValidationModel, Submission, Validity};
pub use validation::{FieldError, ValidationResult};
