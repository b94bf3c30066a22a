//! Form submission state machine shared by the contact and recruitment pages.

use futures::future::BoxFuture;
use shared::forms::{ApplicationForm, ContactForm, ValidationError};
use tracing::{info, warn};

use crate::{faq::FaqAccordion, FormSubmitter, SubmitAck, SubmitError};

pub trait FormFields: Clone + Default + Send + Sync {
    fn validate(&self) -> Result<(), ValidationError>;
    fn success_message() -> &'static str;
    fn failure_prefix() -> &'static str;
    fn dispatch<'a>(
        &'a self,
        submitter: &'a dyn FormSubmitter,
    ) -> BoxFuture<'a, Result<SubmitAck, SubmitError>>;
}

impl FormFields for ContactForm {
    fn validate(&self) -> Result<(), ValidationError> {
        ContactForm::validate(self)
    }

    fn success_message() -> &'static str {
        "Thank you! Your message has been sent successfully."
    }

    fn failure_prefix() -> &'static str {
        "Failed to submit:"
    }

    fn dispatch<'a>(
        &'a self,
        submitter: &'a dyn FormSubmitter,
    ) -> BoxFuture<'a, Result<SubmitAck, SubmitError>> {
        submitter.submit_contact(self)
    }
}

impl FormFields for ApplicationForm {
    fn validate(&self) -> Result<(), ValidationError> {
        ApplicationForm::validate(self)
    }

    fn success_message() -> &'static str {
        "Application submitted successfully!"
    }

    fn failure_prefix() -> &'static str {
        "Submission failed:"
    }

    fn dispatch<'a>(
        &'a self,
        submitter: &'a dyn FormSubmitter,
    ) -> BoxFuture<'a, Result<SubmitAck, SubmitError>> {
        submitter.submit_application(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub tone: StatusTone,
    pub text: String,
}

impl StatusMessage {
    fn success(text: impl Into<String>) -> Self {
        Self {
            tone: StatusTone::Success,
            text: text.into(),
        }
    }

    fn failure(text: impl Into<String>) -> Self {
        Self {
            tone: StatusTone::Failure,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Settled(StatusMessage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt<F> {
    /// Validated snapshot to hand to the submitter.
    Ready(F),
    AlreadySubmitting,
    Invalid(ValidationError),
}

#[derive(Debug, Clone, Default)]
pub struct FormController<F: FormFields> {
    fields: F,
    status: SubmissionStatus,
}

impl<F: FormFields> FormController<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: F) -> Self {
        Self {
            fields,
            status: SubmissionStatus::Idle,
        }
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut F {
        &mut self.fields
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, SubmissionStatus::InFlight)
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        match &self.status {
            SubmissionStatus::Settled(message) => Some(message),
            _ => None,
        }
    }

    /// Validates and marks the form in flight. Nothing changes while a
    /// previous attempt is still in flight.
    pub fn begin_submit(&mut self) -> SubmitAttempt<F> {
        if self.is_submitting() {
            return SubmitAttempt::AlreadySubmitting;
        }
        if let Err(err) = self.fields.validate() {
            self.status = SubmissionStatus::Settled(StatusMessage::failure(err.to_string()));
            return SubmitAttempt::Invalid(err);
        }
        self.status = SubmissionStatus::InFlight;
        SubmitAttempt::Ready(self.fields.clone())
    }

    /// Settles an in-flight attempt. Success clears the fields.
    pub fn complete(&mut self, result: Result<SubmitAck, SubmitError>) {
        match result {
            Ok(ack) => {
                info!(detail = ?ack.detail, "form submitted");
                self.fields = F::default();
                self.status = SubmissionStatus::Settled(StatusMessage::success(F::success_message()));
            }
            Err(err) => {
                warn!(error = %err, "form submission failed");
                self.status = SubmissionStatus::Settled(StatusMessage::failure(format!(
                    "{} {err}",
                    F::failure_prefix()
                )));
            }
        }
    }

    /// Runs one full attempt. Returns whether the submitter was called.
    pub async fn submit(&mut self, submitter: &dyn FormSubmitter) -> bool {
        let SubmitAttempt::Ready(snapshot) = self.begin_submit() else {
            return false;
        };
        let result = snapshot.dispatch(submitter).await;
        self.complete(result);
        true
    }
}

/// Recruitment page state: the application form plus its FAQ.
#[derive(Debug, Clone, Default)]
pub struct RecruitmentState {
    pub form: FormController<ApplicationForm>,
    pub faq: FaqAccordion,
}

impl RecruitmentState {
    pub fn new(form: FormController<ApplicationForm>, faq: FaqAccordion) -> Self {
        Self { form, faq }
    }

    /// Submits the application; a successful submission also collapses the FAQ.
    pub async fn submit(&mut self, submitter: &dyn FormSubmitter) -> bool {
        let dispatched = self.form.submit(submitter).await;
        if matches!(self.form.message(), Some(msg) if msg.tone == StatusTone::Success) {
            self.faq.collapse();
        }
        dispatched
    }
}

#[cfg(test)]
#[path = "tests/forms_tests.rs"]
mod tests;
