use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::toast::ToastKind;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    pub name: String,
    pub value: String,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldInput {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required: false,
            kind: FieldKind::Text,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn email(mut self) -> Self {
        self.kind = FieldKind::Email;
        self
    }
}

/// Display strings are exactly what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(String),
    #[error("Please enter a valid email address")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    /// Fields that should carry the `error` class after this submit.
    pub flagged: BTreeSet<String>,
    /// Required fields that passed and should lose a stale `error` class.
    pub cleared: BTreeSet<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message surfaced to the user when validation fails.
    pub fn first_message(&self) -> Option<String> {
        self.errors.first().map(|e| e.to_string())
    }

    /// Folds this report into the set of fields currently marked as errors.
    pub fn apply_to(&self, marked: &mut BTreeSet<String>) {
        for name in &self.cleared {
            marked.remove(name);
        }
        marked.extend(self.flagged.iter().cloned());
    }
}

pub const SUCCESS_MESSAGE: &str = "Thank you for your message!";

/// What a submit does to the form and which toast it raises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub reset: bool,
    pub toast: ToastKind,
    pub message: String,
}

impl From<&ValidationReport> for SubmitOutcome {
    fn from(report: &ValidationReport) -> Self {
        match report.first_message() {
            None => Self {
                reset: true,
                toast: ToastKind::Success,
                message: SUCCESS_MESSAGE.to_string(),
            },
            Some(message) => Self {
                reset: false,
                toast: ToastKind::Error,
                message,
            },
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Checks required fields first, then email formats.
pub fn validate_form(fields: &[FieldInput]) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in fields.iter().filter(|f| f.required) {
        if field.value.trim().is_empty() {
            report
                .errors
                .push(ValidationError::Required(field.name.clone()));
            report.flagged.insert(field.name.clone());
        } else {
            report.cleared.insert(field.name.clone());
        }
    }

    for field in fields.iter().filter(|f| f.kind == FieldKind::Email) {
        if !field.value.is_empty() && !is_valid_email(&field.value) {
            report
                .errors
                .push(ValidationError::InvalidEmail(field.name.clone()));
            report.cleared.remove(&field.name);
            report.flagged.insert(field.name.clone());
        }
    }

    report
}
