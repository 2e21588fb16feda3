//! Tests for the form view-model.

use login_form_lib::field::{
    CONFIRM_PASSWORD_PROMPT, EMAIL_PROMPT, PASSWORD_PROMPT, USERNAME_PROMPT,
};
use login_form_lib::{Field, FormValidationModel, ValidationResult};

fn filled() -> FormValidationModel {
    let mut form = FormValidationModel::new();
    form.set_username("gooduser1");
    form.set_email("user@example.com");
    form.set_password("Abcdefg1");
    form.set_confirm_password("Abcdefg1");
    form
}

#[test]
fn test_new_form_cannot_submit() {
    let form = FormValidationModel::new();
    assert!(!form.username_valid());
    assert!(!form.email_valid());
    assert!(!form.password_valid());
    // Two empty passwords are equal.
    assert!(form.confirm_valid());
    assert!(!form.can_submit());
    assert_eq!(form.username_prompt(), USERNAME_PROMPT);
    assert_eq!(form.email_prompt(), EMAIL_PROMPT);
    assert_eq!(form.password_prompt(), PASSWORD_PROMPT);
    assert_eq!(form.confirm_password_prompt(), "");
}

#[test]
fn test_short_username_blocks_submit() {
    let mut form = FormValidationModel::new();
    form.set_username("joe");
    form.set_email("a@b.com");
    form.set_password("Abcdefg1");

    assert!(!form.username_valid());
    assert!(form.email_valid());
    assert!(form.password_valid());
    assert!(!form.can_submit());
}

#[test]
fn test_all_valid_enables_submit() {
    let form = filled();
    assert!(form.username_valid());
    assert!(form.email_valid());
    assert!(form.password_valid());
    assert!(form.confirm_valid());
    assert!(form.can_submit());
    assert_eq!(form.username_prompt(), "");
    assert_eq!(form.email_prompt(), "");
    assert_eq!(form.password_prompt(), "");
    assert_eq!(form.confirm_password_prompt(), "");
}

#[test]
fn test_mismatched_confirm_blocks_submit() {
    let mut form = filled();
    form.set_confirm_password("Abcdefg2");

    assert!(!form.confirm_valid());
    assert!(!form.can_submit());
    assert_eq!(form.confirm_password_prompt(), "Password fields to not match");
}

#[test]
fn test_password_change_updates_confirm() {
    let mut form = filled();
    form.set_password("Zbcdefg1");
    assert!(form.password_valid());
    assert!(!form.confirm_valid());
    assert!(!form.can_submit());

    form.set_confirm_password("Zbcdefg1");
    assert!(form.can_submit());
}

#[test]
fn test_any_invalid_field_drops_submit() {
    for field in Field::ALL {
        let mut form = filled();
        form.set(field, "x");
        assert!(!form.is_valid(field), "{field} should be invalid");
        assert!(!form.can_submit(), "{field} should block submit");
        assert_eq!(form.prompt(field), field.prompt());
    }
}

#[test]
fn test_setting_same_value_is_idempotent() {
    let mut form = filled();
    let before = form.snapshot();
    form.set_username("gooduser1");
    form.set_email("user@example.com");
    form.set_password("Abcdefg1");
    form.set_confirm_password("Abcdefg1");
    assert_eq!(form.snapshot(), before);

    let mut empty = FormValidationModel::new();
    let before = empty.snapshot();
    empty.set_email("");
    assert_eq!(empty.snapshot(), before);
}

#[test]
fn test_submit_resets_fields() {
    let mut form = filled();
    let submission = form.submit();

    assert_eq!(submission.username, "gooduser1");
    assert_eq!(submission.email, "user@example.com");
    for field in Field::ALL {
        assert_eq!(form.value(field), "");
    }
    assert!(!form.username_valid());
    assert!(!form.email_valid());
    assert!(!form.password_valid());
    assert!(!form.can_submit());
}

#[test]
fn test_submit_is_not_gated_by_model() {
    let mut form = FormValidationModel::new();
    form.set_username("joe");
    let submission = form.submit();
    assert_eq!(submission.username, "joe");
    assert_eq!(form.username(), "");
    assert!(!form.can_submit());
}

#[test]
fn test_reset_matches_submit() {
    let mut submitted = filled();
    submitted.submit();
    let mut reset = filled();
    reset.reset();

    assert_eq!(submitted.snapshot(), reset.snapshot());
    assert_eq!(reset.snapshot(), FormValidationModel::new().snapshot());
}

#[test]
fn test_model_stores_text_verbatim() {
    let mut form = FormValidationModel::new();
    form.set_username("  GoodUser1 ");
    form.set_password("Abcdefg123");
    assert_eq!(form.value(Field::Username), "  GoodUser1 ");
    assert_eq!(form.value(Field::Password), "Abcdefg123");
    assert!(!form.username_valid());
    assert!(!form.password_valid());
}

#[test]
fn test_validate_lists_invalid_fields_in_order() {
    let mut form = FormValidationModel::new();
    form.set_username("gooduser1");
    form.set_password("Abcdefg1");

    let result = form.validate();
    assert!(result.is_invalid());
    let fields: Vec<Field> = result.errors().iter().map(|e| e.field).collect();
    assert_eq!(fields, vec![Field::Email, Field::ConfirmPassword]);
    assert_eq!(result.first_invalid(), Some(Field::Email));
    assert_eq!(result.errors()[1].message, CONFIRM_PASSWORD_PROMPT);
}

#[test]
fn test_validate_valid_form() {
    let result = filled().validate();
    assert_eq!(result, ValidationResult::Valid);
    assert!(result.errors().is_empty());
    assert_eq!(result.first_invalid(), None);
}

#[test]
fn test_snapshot_serializes_without_raw_text() {
    let mut form = filled();
    form.set_confirm_password("Abcdefg2");

    let json = serde_json::to_value(form.snapshot()).unwrap();
    assert_eq!(json["can_submit"], false);
    assert_eq!(json["validity"]["confirm"], false);
    assert_eq!(json["validity"]["username"], true);
    assert_eq!(json["confirm_password_prompt"], CONFIRM_PASSWORD_PROMPT);
    assert!(!json.to_string().contains("Abcdefg"));
}

#[test]
fn test_non_ascii_email_blocks_submit() {
    let mut form = filled();
    form.set_email("user@\u{212A}elvin.com");
    assert!(!form.email_valid());
    assert!(!form.can_submit());
    assert_eq!(form.email_prompt(), EMAIL_PROMPT);
}
