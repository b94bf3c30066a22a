use super::*;
use async_trait::async_trait;
use shared::forms::ResumeFile;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct CountingSubmitter {
    calls: AtomicUsize,
    fail_with: Option<String>,
}

impl CountingSubmitter {
    fn failing(message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_with: Some(message.to_string()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn outcome(&self) -> Result<SubmitAck, SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(SubmitError::Rejected(message.clone())),
            None => Ok(SubmitAck::default()),
        }
    }
}

#[async_trait]
impl FormSubmitter for CountingSubmitter {
    async fn submit_contact(&self, _form: &ContactForm) -> Result<SubmitAck, SubmitError> {
        self.outcome()
    }

    async fn submit_application(&self, _form: &ApplicationForm) -> Result<SubmitAck, SubmitError> {
        self.outcome()
    }
}

fn filled_contact() -> ContactForm {
    ContactForm {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        message: "Looking for SAP talent".into(),
    }
}

fn filled_application() -> ApplicationForm {
    ApplicationForm {
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        email: "grace@example.com".into(),
        phone: String::new(),
        description: "Compilers".into(),
        resume: Some(ResumeFile {
            filename: "cv.pdf".into(),
            content_type: None,
            bytes: b"%PDF".to_vec(),
        }),
    }
}

#[tokio::test]
async fn empty_message_fails_without_network_call() {
    let submitter = CountingSubmitter::default();
    let mut controller = FormController::with_fields(ContactForm {
        message: String::new(),
        ..filled_contact()
    });

    assert!(!controller.submit(&submitter).await);
    assert_eq!(submitter.calls(), 0);
    let message = controller.message().expect("status");
    assert_eq!(message.tone, StatusTone::Failure);
    assert_eq!(message.text, "Please fill out Message.");
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn malformed_email_is_rejected_locally() {
    let submitter = CountingSubmitter::default();
    let mut controller = FormController::with_fields(ContactForm {
        email: "foo@bar".into(),
        ..filled_contact()
    });

    controller.submit(&submitter).await;
    assert_eq!(submitter.calls(), 0);
    assert_eq!(
        controller.message().map(|m| m.text.as_str()),
        Some("Please enter a valid email address.")
    );

    controller.fields_mut().email = "foo@bar.com".into();
    assert!(controller.submit(&submitter).await);
    assert_eq!(submitter.calls(), 1);
}

#[tokio::test]
async fn success_clears_fields_and_flag() {
    let submitter = CountingSubmitter::default();
    let mut controller = FormController::with_fields(filled_contact());

    assert!(controller.submit(&submitter).await);
    assert_eq!(controller.fields(), &ContactForm::default());
    assert!(!controller.is_submitting());
    assert_eq!(
        controller.message(),
        Some(&StatusMessage {
            tone: StatusTone::Success,
            text: "Thank you! Your message has been sent successfully.".into(),
        })
    );
}

#[tokio::test]
async fn failure_keeps_fields_and_prefixes_error() {
    let submitter = CountingSubmitter::failing("relay unavailable");
    let mut controller = FormController::with_fields(filled_application());

    assert!(controller.submit(&submitter).await);
    assert_eq!(controller.fields(), &filled_application());
    assert!(!controller.is_submitting());
    let message = controller.message().expect("status");
    assert_eq!(message.tone, StatusTone::Failure);
    assert_eq!(message.text, "Submission failed: relay unavailable");
}

#[test]
fn second_begin_while_in_flight_is_ignored() {
    let mut controller = FormController::with_fields(filled_contact());

    assert!(matches!(controller.begin_submit(), SubmitAttempt::Ready(_)));
    assert!(controller.is_submitting());
    assert_eq!(controller.begin_submit(), SubmitAttempt::AlreadySubmitting);

    controller.complete(Err(SubmitError::Transport("connection reset".into())));
    assert!(!controller.is_submitting());
    assert_eq!(
        controller.message().map(|m| m.text.as_str()),
        Some("Failed to submit: network error: connection reset")
    );
    assert!(matches!(controller.begin_submit(), SubmitAttempt::Ready(_)));
}

#[tokio::test]
async fn recruitment_success_collapses_faq() {
    let submitter = CountingSubmitter::default();
    let mut state = RecruitmentState::new(
        FormController::with_fields(filled_application()),
        FaqAccordion::with_expanded(Some(2)),
    );

    assert!(state.submit(&submitter).await);
    assert_eq!(state.faq.expanded(), None);
    assert_eq!(
        state.form.message().map(|m| m.text.as_str()),
        Some("Application submitted successfully!")
    );
}

#[tokio::test]
async fn recruitment_failure_keeps_faq_open() {
    let submitter = CountingSubmitter::failing("bad gateway");
    let mut state = RecruitmentState::new(
        FormController::with_fields(filled_application()),
        FaqAccordion::with_expanded(Some(1)),
    );

    state.submit(&submitter).await;
    assert_eq!(state.faq.expanded(), Some(1));
}
