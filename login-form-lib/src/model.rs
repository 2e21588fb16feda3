//! The form's view-model.

use serde::Serialize;

use crate::field::Field;
use crate::validation::{self, FieldError, ValidationResult};

/// Validity of each field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Validity {
    pub username: bool,
    pub email: bool,
    pub password: bool,
    pub confirm: bool,
}

impl Validity {
    /// Validity of a single field.
    pub fn get(&self, field: Field) -> bool {
        match field {
            Field::Username => self.username,
            Field::Email => self.email,
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm,
        }
    }

    /// True when every field is valid.
    pub fn all(&self) -> bool {
        self.username && self.email && self.password && self.confirm
    }
}

/// Derived outputs of the form at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub validity: Validity,
    pub can_submit: bool,
    pub username_prompt: &'static str,
    pub email_prompt: &'static str,
    pub password_prompt: &'static str,
    pub confirm_password_prompt: &'static str,
}

/// What was submitted, captured before the form was cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub username: String,
    pub email: String,
}

/// Raw field text plus everything derived from it.
///
/// Every setter recomputes the flags that depend on the changed field and
/// the submit flag before returning, so readers never see a stale flag.
///
/// # Example
///
/// ```
/// use login_form_lib::FormValidationModel;
///
/// let mut form = FormValidationModel::new();
/// form.set_username("gooduser1");
/// form.set_email("user@example.com");
/// form.set_password("Abcdefg1");
/// form.set_confirm_password("Abcdefg1");
/// assert!(form.can_submit());
///
/// let submission = form.submit();
/// assert_eq!(submission.username, "gooduser1");
/// assert!(!form.can_submit());
/// ```
#[derive(Debug, Clone)]
pub struct FormValidationModel {
    username: String,
    email: String,
    password: String,
    confirm_password: String,
    validity: Validity,
    can_submit: bool,
}

impl Default for FormValidationModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FormValidationModel {
    /// Create an empty form.
    pub fn new() -> Self {
        let mut model = Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            validity: Validity::default(),
            can_submit: false,
        };
        // Two empty passwords match, so the confirm flag starts out true.
        model.recompute_all();
        model
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.set(Field::Username, value);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.set(Field::Email, value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.set(Field::Password, value);
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.set(Field::ConfirmPassword, value);
    }

    /// Replace the text of `field` and recompute what depends on it.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if field.is_secret() {
            log::trace!("set {} ({} chars)", field, value.chars().count());
        } else {
            log::trace!("set {} = {:?}", field, value);
        }

        *self.slot_mut(field) = value;

        let before = self.validity;
        match field {
            Field::Username => {
                self.validity.username = validation::username_valid(&self.username);
            }
            Field::Email => {
                self.validity.email = validation::email_valid(&self.email);
            }
            Field::Password => {
                self.validity.password = validation::password_valid(&self.password);
                self.validity.confirm = self.passwords_match();
            }
            Field::ConfirmPassword => {
                self.validity.confirm = self.passwords_match();
            }
        }
        self.refresh_can_submit(before);
    }

    /// Current raw text of `field`.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn username_valid(&self) -> bool {
        self.validity.username
    }

    pub fn email_valid(&self) -> bool {
        self.validity.email
    }

    pub fn password_valid(&self) -> bool {
        self.validity.password
    }

    pub fn confirm_valid(&self) -> bool {
        self.validity.confirm
    }

    /// True only while all four fields are valid.
    pub fn can_submit(&self) -> bool {
        self.can_submit
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn is_valid(&self, field: Field) -> bool {
        self.validity.get(field)
    }

    /// Prompt for `field`: empty while it is valid.
    pub fn prompt(&self, field: Field) -> &'static str {
        if self.is_valid(field) { "" } else { field.prompt() }
    }

    pub fn username_prompt(&self) -> &'static str {
        self.prompt(Field::Username)
    }

    pub fn email_prompt(&self) -> &'static str {
        self.prompt(Field::Email)
    }

    pub fn password_prompt(&self) -> &'static str {
        self.prompt(Field::Password)
    }

    pub fn confirm_password_prompt(&self) -> &'static str {
        self.prompt(Field::ConfirmPassword)
    }

    /// Every invalid field with its prompt, in form order.
    pub fn validate(&self) -> ValidationResult {
        Field::ALL
            .into_iter()
            .filter(|&field| !self.is_valid(field))
            .map(|field| FieldError {
                field,
                message: field.prompt(),
            })
            .collect::<Vec<_>>()
            .into()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            validity: self.validity,
            can_submit: self.can_submit,
            username_prompt: self.username_prompt(),
            email_prompt: self.email_prompt(),
            password_prompt: self.password_prompt(),
            confirm_password_prompt: self.confirm_password_prompt(),
        }
    }

    /// Log the login and clear the form.
    ///
    /// Does not check [`can_submit`](Self::can_submit); gating the action is
    /// up to the view.
    pub fn submit(&mut self) -> Submission {
        log::info!("Logging in {}.", self.username);
        if !self.can_submit {
            log::warn!("submit called while the form is invalid");
        }

        let submission = Submission {
            username: std::mem::take(&mut self.username),
            email: std::mem::take(&mut self.email),
        };
        self.reset();
        submission
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        self.username.clear();
        self.email.clear();
        self.password.clear();
        self.confirm_password.clear();
        self.recompute_all();
        log::debug!("form reset");
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }

    fn passwords_match(&self) -> bool {
        validation::confirm_valid(&self.password, &self.confirm_password)
    }

    fn recompute_all(&mut self) {
        self.validity = Validity {
            username: validation::username_valid(&self.username),
            email: validation::email_valid(&self.email),
            password: validation::password_valid(&self.password),
            confirm: self.passwords_match(),
        };
        self.can_submit = self.validity.all();
    }

    fn refresh_can_submit(&mut self, before: Validity) {
        for field in Field::ALL {
            let (was, now) = (before.get(field), self.validity.get(field));
            if was != now {
                log::debug!("{} is now {}", field, if now { "valid" } else { "invalid" });
            }
        }
        self.can_submit = self.validity.all();
    }
}
