use std::collections::BTreeMap;
use std::sync::LazyLock;
use regex::Regex;
use crate::models::{Field, RegistrationDraft, Step};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", required_message(.0))]
    Required(Field),
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Please select a division")]
    DivisionNotSelected,
    #[error("You must agree to the terms and conditions")]
    TermsNotAccepted,
}

fn required_message(field: &Field) -> &'static str {
    match field {
        Field::TeamName => "Team name is required",
        Field::TeamLeader => "Team leader name is required",
        Field::Email => "Email is required",
        Field::Phone => "Phone number is required",
        Field::Organization => "Organization is required",
        Field::Location => "Location is required",
        Field::Experience => "Experience description is required",
        Field::Members => "Team member information is required",
        _ => "This field is required",
    }
}

/// Failing fields of one validation pass, at most one message per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// Drops the entry for `field`, returning whether one was present.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Basic `local@domain.tld` shape check. Matches anywhere in the input.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn require_text(value: &str, field: Field) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

pub fn validate_field(draft: &RegistrationDraft, field: Field) -> Result<(), ValidationError> {
    match field {
        Field::Email => {
            require_text(&draft.email, field)?;
            if !is_valid_email(&draft.email) {
                return Err(ValidationError::InvalidEmail);
            }
            Ok(())
        }
        Field::Division => draft.division.map(|_| ()).ok_or(ValidationError::DivisionNotSelected),
        Field::AgreeTerms => {
            if draft.agree_terms { Ok(()) } else { Err(ValidationError::TermsNotAccepted) }
        }
        Field::Expectations | Field::Newsletter => Ok(()),
        _ => require_text(draft.text(field).unwrap_or_default(), field),
    }
}

/// Checks only the fields that belong to `step`.
pub fn validate_step(draft: &RegistrationDraft, step: Step) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for &field in step.fields() {
        if let Err(error) = validate_field(draft, field) {
            errors.insert(field, error);
        }
    }
    errors
}
