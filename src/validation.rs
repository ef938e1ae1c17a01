//! Field-requirement rules for the two HR forms.
//!
//! Each form declares a fixed list of named fields with one rule apiece. Rules
//! are evaluated on a submission attempt and per field on blur; the result maps
//! field names to the message shown next to that field.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{InternshipApplication, OfferLetter, ResumeFile};

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles");
}

pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email";

/// The single check attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    /// Required and well-formed.
    Email,
    RequiredFile,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub rule: Rule,
    /// Message shown when the field is empty.
    pub message: &'static str,
}

impl FieldRule {
    const fn new(field: &'static str, rule: Rule, message: &'static str) -> Self {
        Self {
            field,
            rule,
            message,
        }
    }
}

/// Current value of a form field as seen by the rules.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(&'a str),
    File(Option<&'a ResumeFile>),
}

/// A form whose fields can be read and edited by name.
pub trait FormSchema: Clone + Default {
    fn rules() -> &'static [FieldRule];

    fn value(&self, field: &str) -> Option<FieldValue<'_>>;

    /// Returns `false` when `field` is not a text field of this form.
    fn set_text(&mut self, field: &str, value: String) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Field name to error message; empty when the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.insert(error.field, error.message);
    }

    pub fn set(&mut self, field: &str, message: Option<String>) {
        match message {
            Some(message) => {
                self.errors.insert(field.to_string(), message);
            }
            None => {
                self.errors.remove(field);
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, message)| format!("[{}] {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Validate that a string is not empty. Whitespace counts as a value.
pub fn validate_required(value: &str, field: &str, message: &str, errors: &mut FieldErrors) {
    if value.is_empty() {
        errors.add(ValidationError::new(field, message));
    }
}

/// Validate a required, well-formed email address.
pub fn validate_email(value: &str, field: &str, message: &str, errors: &mut FieldErrors) {
    if value.is_empty() {
        errors.add(ValidationError::new(field, message));
        return;
    }

    if !EMAIL_RE.is_match(value) {
        errors.add(ValidationError::new(field, INVALID_EMAIL_MESSAGE));
    }
}

fn check(rule: &FieldRule, value: FieldValue<'_>, errors: &mut FieldErrors) {
    match (rule.rule, value) {
        (Rule::Required, FieldValue::Text(text)) => {
            validate_required(text, rule.field, rule.message, errors)
        }
        (Rule::Email, FieldValue::Text(text)) => {
            validate_email(text, rule.field, rule.message, errors)
        }
        (Rule::RequiredFile, FieldValue::File(None)) => {
            errors.add(ValidationError::new(rule.field, rule.message))
        }
        (Rule::RequiredFile, FieldValue::File(Some(_))) => {}
        // A rule paired with the wrong kind of value never passes.
        _ => errors.add(ValidationError::new(rule.field, rule.message)),
    }
}

/// Run every rule of the form.
pub fn validate<F: FormSchema>(form: &F) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for rule in F::rules() {
        match form.value(rule.field) {
            Some(value) => check(rule, value, &mut errors),
            None => errors.add(ValidationError::new(rule.field, rule.message)),
        }
    }
    errors
}

/// Run the rule of a single field, as on blur. Unknown fields have no error.
pub fn validate_field<F: FormSchema>(form: &F, field: &str) -> Option<String> {
    let rule = F::rules().iter().find(|rule| rule.field == field)?;
    let mut errors = FieldErrors::new();
    match form.value(field) {
        Some(value) => check(rule, value, &mut errors),
        None => errors.add(ValidationError::new(rule.field, rule.message)),
    }
    errors.get(field).map(str::to_string)
}

const APPLICATION_RULES: &[FieldRule] = &[
    FieldRule::new("firstName", Rule::Required, "First name is required"),
    FieldRule::new("lastName", Rule::Required, "Last name is required"),
    FieldRule::new("email", Rule::Email, "Email is required"),
    FieldRule::new("phone", Rule::Required, "Phone number is required"),
    FieldRule::new("university", Rule::Required, "University is required"),
    FieldRule::new("major", Rule::Required, "Major is required"),
    FieldRule::new("graduationYear", Rule::Required, "Graduation year is required"),
    FieldRule::new("resume", Rule::RequiredFile, "Resume is required"),
    FieldRule::new("coverLetter", Rule::Required, "Cover letter is required"),
];

const OFFER_RULES: &[FieldRule] = &[
    FieldRule::new("candidateName", Rule::Required, "Candidate name is required"),
    FieldRule::new("position", Rule::Required, "Position is required"),
    FieldRule::new("startDate", Rule::Required, "Start date is required"),
    FieldRule::new("salary", Rule::Required, "Salary is required"),
    FieldRule::new("department", Rule::Required, "Department is required"),
    FieldRule::new("reportingManager", Rule::Required, "Reporting manager is required"),
    FieldRule::new("terms", Rule::Required, "Terms are required"),
];

impl InternshipApplication {
    fn text_field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "firstName" => Some(&mut self.first_name),
            "lastName" => Some(&mut self.last_name),
            "email" => Some(&mut self.email),
            "phone" => Some(&mut self.phone),
            "university" => Some(&mut self.university),
            "major" => Some(&mut self.major),
            "graduationYear" => Some(&mut self.graduation_year),
            "coverLetter" => Some(&mut self.cover_letter),
            _ => None,
        }
    }
}

impl FormSchema for InternshipApplication {
    fn rules() -> &'static [FieldRule] {
        APPLICATION_RULES
    }

    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        if field == "resume" {
            return Some(FieldValue::File(self.resume.as_ref()));
        }
        self.text_fields()
            .into_iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| FieldValue::Text(value))
    }

    fn set_text(&mut self, field: &str, value: String) -> bool {
        match self.text_field_mut(field) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

impl FormSchema for OfferLetter {
    fn rules() -> &'static [FieldRule] {
        OFFER_RULES
    }

    fn value(&self, field: &str) -> Option<FieldValue<'_>> {
        let value = match field {
            "candidateName" => &self.candidate_name,
            "position" => &self.position,
            "startDate" => &self.start_date,
            "salary" => &self.salary,
            "department" => &self.department,
            "reportingManager" => &self.reporting_manager,
            "terms" => &self.terms,
            _ => return None,
        };
        Some(FieldValue::Text(value))
    }

    fn set_text(&mut self, field: &str, value: String) -> bool {
        let slot = match field {
            "candidateName" => &mut self.candidate_name,
            "position" => &mut self.position,
            "startDate" => &mut self.start_date,
            "salary" => &mut self.salary,
            "department" => &mut self.department,
            "reportingManager" => &mut self.reporting_manager,
            "terms" => &mut self.terms,
            _ => return false,
        };
        *slot = value;
        true
    }
}
