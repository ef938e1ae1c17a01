//! Per-form state: current values, touched fields, field errors and the
//! submission lifecycle `Idle -> Submitting -> Succeeded | Failed`.

use std::collections::BTreeSet;
use std::future::Future;

use log::{debug, warn};

use crate::client::transport::{ClientError, OfferLetterOutcome};
use crate::client::UNEXPECTED_ERROR_MESSAGE;
use crate::models::{ApiResponse, InternshipApplication, OfferLetter, ResumeFile};
use crate::validation::{validate, validate_field, FieldErrors, FormSchema};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("form has validation errors: {0}")]
    Invalid(FieldErrors),
    #[error("a submission is already in progress")]
    InFlight,
    #[error(transparent)]
    Transport(#[from] ClientError),
}

/// A form that can be submitted, with the message shown when the server refuses without one.
pub trait SubmitForm: FormSchema {
    const FAILURE_MESSAGE: &'static str;
}

impl SubmitForm for InternshipApplication {
    const FAILURE_MESSAGE: &'static str = "Failed to submit application";
}

impl SubmitForm for OfferLetter {
    const FAILURE_MESSAGE: &'static str = "Failed to generate offer letter";
}

/// What a completed request tells the form.
pub trait SubmissionOutcome {
    fn succeeded(&self) -> bool;
    fn error_message(&self) -> Option<&str>;
}

impl<T> SubmissionOutcome for ApiResponse<T> {
    fn succeeded(&self) -> bool {
        self.success
    }

    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl SubmissionOutcome for OfferLetterOutcome {
    fn succeeded(&self) -> bool {
        self.is_success()
    }

    fn error_message(&self) -> Option<&str> {
        match self {
            OfferLetterOutcome::Pdf(_) => None,
            OfferLetterOutcome::Response(response) => response.error_message(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormState<F: SubmitForm> {
    initial: F,
    values: F,
    touched: BTreeSet<String>,
    errors: FieldErrors,
    status: SubmissionStatus,
}

impl<F: SubmitForm> Default for FormState<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: SubmitForm> FormState<F> {
    pub fn new() -> Self {
        Self::with_initial(F::default())
    }

    pub fn with_initial(initial: F) -> Self {
        Self {
            values: initial.clone(),
            initial,
            touched: BTreeSet::new(),
            errors: FieldErrors::new(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn values(&self) -> &F {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// The error displayed next to `field`: only once the field has been touched.
    pub fn visible_error(&self, field: &str) -> Option<&str> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    fn revalidate_if_touched(&mut self, field: &str) {
        if self.is_touched(field) {
            let message = validate_field(&self.values, field);
            self.errors.set(field, message);
        }
    }

    /// Returns `false` when `field` is not a text field of this form.
    pub fn set_text(&mut self, field: &str, value: impl Into<String>) -> bool {
        if !self.values.set_text(field, value.into()) {
            warn!("Ignoring edit of unknown field '{}'", field);
            return false;
        }
        self.revalidate_if_touched(field);
        true
    }

    pub fn blur(&mut self, field: &str) {
        self.touched.insert(field.to_string());
        let message = validate_field(&self.values, field);
        self.errors.set(field, message);
    }

    /// Validate everything and move to `Submitting`, handing out the values to send.
    pub fn begin_submit(&mut self) -> Result<F, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }

        for rule in F::rules() {
            self.touched.insert(rule.field.to_string());
        }
        self.errors = validate(&self.values);
        if !self.errors.is_empty() {
            debug!("Submission blocked by {} field error(s)", self.errors.len());
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        self.status = SubmissionStatus::Submitting;
        Ok(self.values.clone())
    }

    /// Apply the server's answer. Success resets the form; failure keeps the values.
    pub fn finish<R: SubmissionOutcome>(&mut self, outcome: &R) {
        if outcome.succeeded() {
            self.values = self.initial.clone();
            self.touched.clear();
            self.errors = FieldErrors::new();
            self.status = SubmissionStatus::Succeeded;
        } else {
            let message = outcome.error_message().unwrap_or(F::FAILURE_MESSAGE);
            self.status = SubmissionStatus::Failed(message.to_string());
        }
    }

    pub fn fail_transport(&mut self) {
        self.status = SubmissionStatus::Failed(UNEXPECTED_ERROR_MESSAGE.to_string());
    }

    /// Run `begin_submit`, the request and `finish`/`fail_transport` in sequence.
    /// `send` is not called when validation fails.
    pub async fn submit_with<R, Fut, S>(&mut self, send: S) -> Result<R, SubmitError>
    where
        S: FnOnce(F) -> Fut,
        Fut: Future<Output = Result<R, ClientError>>,
        R: SubmissionOutcome,
    {
        let snapshot = self.begin_submit()?;

        match send(snapshot).await {
            Ok(outcome) => {
                self.finish(&outcome);
                Ok(outcome)
            }
            Err(e) => {
                debug!("Submission transport failed: {:?}", e);
                self.fail_transport();
                Err(SubmitError::Transport(e))
            }
        }
    }
}

impl FormState<InternshipApplication> {
    pub fn set_resume(&mut self, resume: Option<ResumeFile>) {
        self.values.resume = resume;
        self.revalidate_if_touched("resume");
    }
}
