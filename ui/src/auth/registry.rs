//! Field schema registry and resolver.
//!
//! Declares the union of form fields across both modes once, as data.
//! Which fields a mode renders and validates is a lookup, never a branch:
//! `resolve(mode)` filters the registry in declaration order, and that
//! order is part of the observable contract because it drives rendered
//! field order.

use crate::components::inputs::InputType;

/// Selects which field set and which identity operation apply to a
/// single form instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    SignIn,
    SignUp,
}

impl FormMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMode::SignIn => "sign-in",
            FormMode::SignUp => "sign-up",
        }
    }

    /// Submit button label for this mode
    pub fn action_label(&self) -> &'static str {
        match self {
            FormMode::SignIn => "Sign In",
            FormMode::SignUp => "Sign Up",
        }
    }
}

/// Typed key for form values and field errors
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Address1,
    City,
    State,
    PostalCode,
    DateOfBirth,
    IdentityNumber,
    Email,
    Password,
}

impl FieldName {
    pub const ALL: [FieldName; 10] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Address1,
        FieldName::City,
        FieldName::State,
        FieldName::PostalCode,
        FieldName::DateOfBirth,
        FieldName::IdentityNumber,
        FieldName::Email,
        FieldName::Password,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Address1 => "address1",
            FieldName::City => "city",
            FieldName::State => "state",
            FieldName::PostalCode => "postalCode",
            FieldName::DateOfBirth => "dateOfBirth",
            FieldName::IdentityNumber => "identityNumber",
            FieldName::Email => "email",
            FieldName::Password => "password",
        }
    }
}

/// Format rules applied to a field's trimmed value after the implicit
/// non-empty check every active field carries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rule {
    MinLength(usize),
    Email,
    Digits { min: usize, max: usize },
    IsoDate,
}

/// One registry entry: everything the form needs to render and validate
/// a field, declared once at process start.
pub struct FieldDefinition {
    pub name: FieldName,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input: InputType,
    pub modes: &'static [FormMode],
    /// Applied in every mode the field is active in
    pub rules: &'static [Rule],
    /// Applied only at sign-up, where the value is being established
    pub sign_up_rules: &'static [Rule],
}

impl FieldDefinition {
    pub fn is_active(&self, mode: FormMode) -> bool {
        self.modes.contains(&mode)
    }

    pub fn rules_for(&self, mode: FormMode) -> impl Iterator<Item = &'static Rule> {
        let extra: &'static [Rule] = match mode {
            FormMode::SignUp => self.sign_up_rules,
            FormMode::SignIn => &[],
        };
        self.rules.iter().chain(extra.iter())
    }
}

const SIGN_UP_ONLY: &[FormMode] = &[FormMode::SignUp];
const BOTH_MODES: &[FormMode] = &[FormMode::SignIn, FormMode::SignUp];

/// Declaration order is render order.
static REGISTRY: [FieldDefinition; 10] = [
    FieldDefinition {
        name: FieldName::FirstName,
        label: "First Name",
        placeholder: "Enter your first name",
        input: InputType::Text,
        modes: SIGN_UP_ONLY,
        rules: &[],
        sign_up_rules: &[],
    },
    FieldDefinition {
        name: FieldName::LastName,
        label: "Last Name",
        placeholder: "Enter your last name",
        input: InputType::Text,
        modes: SIGN_UP_ONLY,
        rules: &[],
        sign_up_rules: &[],
    },
    FieldDefinition {
        name: FieldName::Address1,
        label: "Address",
        placeholder: "Enter your specific address",
        input: InputType::Text,
        modes: SIGN_UP_ONLY,
        rules: &[],
        sign_up_rules: &[],
    },
    FieldDefinition {
        name: FieldName::City,
        label: "City",
        placeholder: "Enter your city",
        input: InputType::Text,
        modes: SIGN_UP_ONLY,
        rules: &[],
        sign_up_rules: &[],
    },
    FieldDefinition {
        name: FieldName::State,
        label: "State",
        placeholder: "Enter your state",
        input: InputType::Text,
        modes: SIGN_UP_ONLY,
        rules: &[],
        sign_up_rules: &[],
    },
    FieldDefinition {
        name: FieldName::PostalCode,
        label: "Postal Code",
        placeholder: "Example: 11101",
        input: InputType::Text,
        modes: SIGN_UP_ONLY,
        rules: &[Rule::Digits { min: 5, max: 10 }],
        sign_up_rules: &[],
    },
    FieldDefinition {
        name: FieldName::DateOfBirth,
        label: "Date of Birth",
        placeholder: "YYYY-MM-DD",
        input: InputType::Text,
        modes: SIGN_UP_ONLY,
        rules: &[Rule::IsoDate],
        sign_up_rules: &[],
    },
    FieldDefinition {
        name: FieldName::IdentityNumber,
        label: "SSN (last 4)",
        placeholder: "Example: 1234",
        input: InputType::Text,
        modes: SIGN_UP_ONLY,
        rules: &[Rule::Digits { min: 4, max: 4 }],
        sign_up_rules: &[],
    },
    FieldDefinition {
        name: FieldName::Email,
        label: "Email",
        placeholder: "Enter your email",
        input: InputType::Email,
        modes: BOTH_MODES,
        rules: &[Rule::Email],
        sign_up_rules: &[],
    },
    FieldDefinition {
        name: FieldName::Password,
        label: "Password",
        placeholder: "Enter your password",
        input: InputType::Password,
        modes: BOTH_MODES,
        // An existing password is accepted as-is at sign-in; strength is
        // enforced where it is created.
        rules: &[],
        sign_up_rules: &[Rule::MinLength(8)],
    },
];

/// The resolved, mode-specific field set
pub struct FieldSchema {
    mode: FormMode,
    fields: Vec<&'static FieldDefinition>,
}

impl FieldSchema {
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn fields(&self) -> &[&'static FieldDefinition] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, name: FieldName) -> bool {
        self.fields.iter().any(|def| def.name == name)
    }
}

/// Resolve the concrete schema for a mode. Pure, cheap, and safe to call
/// on every render; every mode resolves to a non-empty schema.
pub fn resolve(mode: FormMode) -> FieldSchema {
    FieldSchema {
        mode,
        fields: REGISTRY.iter().filter(|def| def.is_active(mode)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_resolves_to_credential_fields_only() {
        let schema = resolve(FormMode::SignIn);
        let names: Vec<FieldName> = schema.fields().iter().map(|def| def.name).collect();
        assert_eq!(names, vec![FieldName::Email, FieldName::Password]);
    }

    #[test]
    fn sign_up_resolves_to_all_fields_in_declaration_order() {
        let schema = resolve(FormMode::SignUp);
        let names: Vec<FieldName> = schema.fields().iter().map(|def| def.name).collect();
        assert_eq!(names, FieldName::ALL.to_vec());
    }

    #[test]
    fn every_mode_resolves_non_empty() {
        assert!(!resolve(FormMode::SignIn).is_empty());
        assert!(!resolve(FormMode::SignUp).is_empty());
    }

    #[test]
    fn resolution_matches_declared_mode_sets_exactly() {
        for mode in [FormMode::SignIn, FormMode::SignUp] {
            let schema = resolve(mode);
            for def in &REGISTRY {
                assert_eq!(
                    schema.contains(def.name),
                    def.is_active(mode),
                    "field {:?} / mode {:?}",
                    def.name,
                    mode
                );
            }
        }
    }

    #[test]
    fn resolve_is_deterministic() {
        let first: Vec<FieldName> = resolve(FormMode::SignUp)
            .fields()
            .iter()
            .map(|def| def.name)
            .collect();
        let second: Vec<FieldName> = resolve(FormMode::SignUp)
            .fields()
            .iter()
            .map(|def| def.name)
            .collect();
        assert_eq!(first, second);
    }
}
