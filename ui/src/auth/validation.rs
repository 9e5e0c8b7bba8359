//! Validation engine.
//!
//! Validates a raw input record against a resolved schema in one pass,
//! collecting every field error so the form can surface all of them at
//! once. A passing record is narrowed to the active fields and wrapped in
//! [`ValidatedSubmission`], the only payload type the service adapter
//! accepts.

use std::collections::BTreeMap;
use std::fmt;

use crate::auth::registry::{FieldName, FieldSchema, FormMode, Rule};
use crate::auth::types::FormInputRecord;

/// Outcome of validating one record against one schema. Exactly one
/// variant; a record is never partially valid.
pub enum ValidationOutcome {
    Valid(ValidatedSubmission),
    Invalid(BTreeMap<FieldName, String>),
}

/// A validated, normalized form payload: trimmed values narrowed to the
/// fields active for `mode`. Constructed only by [`validate`], so the
/// adapter can require it and no unvalidated data reaches the wire.
#[derive(Clone, PartialEq)]
pub struct ValidatedSubmission {
    mode: FormMode,
    values: BTreeMap<FieldName, String>,
}

impl ValidatedSubmission {
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Trimmed value of an active field; empty for fields outside the
    /// schema this submission was validated against.
    pub fn value(&self, name: FieldName) -> &str {
        self.values.get(&name).map(String::as_str).unwrap_or("")
    }

    pub fn fields(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.values.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// Credentials and profile data never belong in debug output.
impl fmt::Debug for ValidatedSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedSubmission")
            .field("mode", &self.mode)
            .field("fields", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Validate `record` against `schema`.
///
/// Only fields in the schema are evaluated; every active field is
/// required. Errors are collected across all fields rather than
/// short-circuiting on the first failure. On success the record is
/// narrowed to the active fields - inactive values are dropped so stale
/// data cannot cross a mode switch.
pub fn validate(record: &FormInputRecord, schema: &FieldSchema) -> ValidationOutcome {
    let mut errors: BTreeMap<FieldName, String> = BTreeMap::new();
    let mut normalized: BTreeMap<FieldName, String> = BTreeMap::new();

    for def in schema.fields() {
        let value = record.value(def.name).trim();

        if value.is_empty() {
            errors.insert(def.name, format!("{} is required", def.label));
            continue;
        }

        if let Some(message) = def
            .rules_for(schema.mode())
            .find_map(|rule| check_rule(rule, value, def.label))
        {
            errors.insert(def.name, message);
            continue;
        }

        normalized.insert(def.name, value.to_string());
    }

    if errors.is_empty() {
        ValidationOutcome::Valid(ValidatedSubmission {
            mode: schema.mode(),
            values: normalized,
        })
    } else {
        ValidationOutcome::Invalid(errors)
    }
}

fn check_rule(rule: &Rule, value: &str, label: &str) -> Option<String> {
    match rule {
        Rule::MinLength(min) => {
            if value.chars().count() < *min {
                Some(format!("{} must be at least {} characters", label, min))
            } else {
                None
            }
        }
        Rule::Email => {
            if is_email_shaped(value) {
                None
            } else {
                Some("Enter a valid email address".to_string())
            }
        }
        Rule::Digits { min, max } => {
            let all_digits = value.chars().all(|c| c.is_ascii_digit());
            let len = value.len();
            if all_digits && len >= *min && len <= *max {
                None
            } else if min == max {
                Some(format!("{} must be exactly {} digits", label, min))
            } else {
                Some(format!("{} must be {}-{} digits", label, min, max))
            }
        }
        Rule::IsoDate => {
            if is_iso_date_shaped(value) {
                None
            } else {
                Some(format!("{} must use the YYYY-MM-DD format", label))
            }
        }
    }
}

// Shape check only: exactly one @, non-empty local part, dotted domain.
fn is_email_shaped(value: &str) -> bool {
    let parts: Vec<&str> = value.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local_part = parts[0];
    let domain_part = parts[1];

    !local_part.is_empty() && domain_part.contains('.') && domain_part.len() > 2
}

fn is_iso_date_shaped(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    let digits_ok = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, b)| b.is_ascii_digit());
    if !digits_ok {
        return false;
    }

    let month: u32 = value[5..7].parse().unwrap_or(0);
    let day: u32 = value[8..10].parse().unwrap_or(0);
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::registry::resolve;

    fn sign_in_record(email: &str, password: &str) -> FormInputRecord {
        let mut record = FormInputRecord::default();
        record.set(FieldName::Email, email.to_string());
        record.set(FieldName::Password, password.to_string());
        record
    }

    fn filled_sign_up_record() -> FormInputRecord {
        let mut record = FormInputRecord::default();
        record.set(FieldName::FirstName, "Ada".to_string());
        record.set(FieldName::LastName, "Lovelace".to_string());
        record.set(FieldName::Address1, "12 Analytical Way".to_string());
        record.set(FieldName::City, "London".to_string());
        record.set(FieldName::State, "LN".to_string());
        record.set(FieldName::PostalCode, "11101".to_string());
        record.set(FieldName::DateOfBirth, "1990-12-10".to_string());
        record.set(FieldName::IdentityNumber, "1234".to_string());
        record.set(FieldName::Email, "ada@example.com".to_string());
        record.set(FieldName::Password, "secret-pass-1".to_string());
        record
    }

    #[test]
    fn valid_sign_in_record_passes() {
        let record = sign_in_record("a@b.com", "secret-pass-1");
        let schema = resolve(FormMode::SignIn);
        match validate(&record, &schema) {
            ValidationOutcome::Valid(submission) => {
                assert_eq!(submission.mode(), FormMode::SignIn);
                assert_eq!(submission.value(FieldName::Email), "a@b.com");
            }
            ValidationOutcome::Invalid(errors) => panic!("unexpected errors: {:?}", errors),
        }
    }

    #[test]
    fn empty_active_field_is_reported_alone() {
        // Scenario: email empty, password present but short is a separate
        // case; here only email should fail.
        let record = sign_in_record("", "long-enough-pw");
        let schema = resolve(FormMode::SignIn);
        match validate(&record, &schema) {
            ValidationOutcome::Invalid(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.contains_key(&FieldName::Email));
            }
            ValidationOutcome::Valid(_) => panic!("expected invalid"),
        }
    }

    #[test]
    fn all_field_errors_are_collected_in_one_pass() {
        let mut record = filled_sign_up_record();
        record.set(FieldName::Email, "not-an-email".to_string());
        record.set(FieldName::Password, "short".to_string());

        let schema = resolve(FormMode::SignUp);
        match validate(&record, &schema) {
            ValidationOutcome::Invalid(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.contains_key(&FieldName::Email));
                assert!(errors.contains_key(&FieldName::Password));
            }
            ValidationOutcome::Valid(_) => panic!("expected invalid"),
        }
    }

    #[test]
    fn sign_in_accepts_an_existing_short_password() {
        // Password strength applies where the password is created; an
        // account's current password is taken as-is at sign-in.
        let record = sign_in_record("a@b.com", "x");
        let schema = resolve(FormMode::SignIn);
        assert!(matches!(
            validate(&record, &schema),
            ValidationOutcome::Valid(_)
        ));
    }

    #[test]
    fn sign_up_enforces_password_strength() {
        let mut record = filled_sign_up_record();
        record.set(FieldName::Password, "short".to_string());

        let schema = resolve(FormMode::SignUp);
        match validate(&record, &schema) {
            ValidationOutcome::Invalid(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[&FieldName::Password].contains("at least 8"));
            }
            ValidationOutcome::Valid(_) => panic!("expected invalid"),
        }
    }

    #[test]
    fn inactive_fields_are_never_evaluated() {
        // Junk in sign-up-only fields must not affect sign-in validation.
        let mut record = sign_in_record("a@b.com", "secret-pass-1");
        record.set(FieldName::PostalCode, "not digits".to_string());
        record.set(FieldName::DateOfBirth, "garbage".to_string());

        let schema = resolve(FormMode::SignIn);
        match validate(&record, &schema) {
            ValidationOutcome::Valid(submission) => {
                // Narrowed: inactive fields are dropped, not carried along.
                assert_eq!(submission.value(FieldName::PostalCode), "");
                assert_eq!(submission.len(), 2);
            }
            ValidationOutcome::Invalid(errors) => panic!("unexpected errors: {:?}", errors),
        }
    }

    #[test]
    fn sign_up_with_all_fields_valid_passes() {
        let record = filled_sign_up_record();
        let schema = resolve(FormMode::SignUp);
        match validate(&record, &schema) {
            ValidationOutcome::Valid(submission) => {
                assert_eq!(submission.len(), 10);
                assert_eq!(submission.value(FieldName::City), "London");
            }
            ValidationOutcome::Invalid(errors) => panic!("unexpected errors: {:?}", errors),
        }
    }

    #[test]
    fn format_rules_reject_bad_values() {
        let mut record = filled_sign_up_record();
        record.set(FieldName::PostalCode, "12".to_string());
        record.set(FieldName::DateOfBirth, "12/10/1990".to_string());
        record.set(FieldName::IdentityNumber, "12345".to_string());

        let schema = resolve(FormMode::SignUp);
        match validate(&record, &schema) {
            ValidationOutcome::Invalid(errors) => {
                let keys: Vec<FieldName> = errors.keys().copied().collect();
                assert_eq!(
                    keys,
                    vec![
                        FieldName::PostalCode,
                        FieldName::DateOfBirth,
                        FieldName::IdentityNumber
                    ]
                );
            }
            ValidationOutcome::Valid(_) => panic!("expected invalid"),
        }
    }

    #[test]
    fn values_are_trimmed_on_the_way_through() {
        let record = sign_in_record("  a@b.com  ", " secret-pass-1 ");
        let schema = resolve(FormMode::SignIn);
        match validate(&record, &schema) {
            ValidationOutcome::Valid(submission) => {
                assert_eq!(submission.value(FieldName::Email), "a@b.com");
                assert_eq!(submission.value(FieldName::Password), "secret-pass-1");
            }
            ValidationOutcome::Invalid(errors) => panic!("unexpected errors: {:?}", errors),
        }
    }

    #[test]
    fn validation_is_idempotent() {
        let record = sign_in_record("not-an-email", "short");
        let schema = resolve(FormMode::SignIn);
        let first = match validate(&record, &schema) {
            ValidationOutcome::Invalid(errors) => errors,
            ValidationOutcome::Valid(_) => panic!("expected invalid"),
        };
        let second = match validate(&record, &schema) {
            ValidationOutcome::Invalid(errors) => errors,
            ValidationOutcome::Valid(_) => panic!("expected invalid"),
        };
        assert_eq!(first, second);
    }

    #[test]
    fn debug_output_never_contains_values() {
        let record = sign_in_record("ada@example.com", "secret-pass-1");
        let schema = resolve(FormMode::SignIn);
        if let ValidationOutcome::Valid(submission) = validate(&record, &schema) {
            let debug = format!("{:?}", submission);
            assert!(!debug.contains("secret-pass-1"));
            assert!(!debug.contains("ada@example.com"));
        } else {
            panic!("expected valid");
        }
    }

    #[test]
    fn email_shape_edge_cases() {
        assert!(is_email_shaped("a@b.co"));
        assert!(!is_email_shaped("a@b@c.com"));
        assert!(!is_email_shaped("@b.com"));
        assert!(!is_email_shaped("a@nodot"));
    }

    #[test]
    fn iso_date_shape_edge_cases() {
        assert!(is_iso_date_shaped("1990-12-10"));
        assert!(!is_iso_date_shaped("1990-13-10"));
        assert!(!is_iso_date_shaped("1990-00-10"));
        assert!(!is_iso_date_shaped("90-12-10"));
        assert!(!is_iso_date_shaped("1990/12/10"));
    }
}
