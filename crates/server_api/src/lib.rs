use std::{collections::BTreeMap, sync::Arc};

use mail_relay::{MailRelay, RelayAttachment, RelayMessage, RelayReceipt};
use shared::{
    error::{ApiError, ErrorCode},
    forms::{ApplicationForm, ContactForm, ValidationError},
    protocol::field,
};
use tracing::{error, info, warn};
use uuid::Uuid;

pub const CONTACT_SUBJECT: &str = "Contact Form Submission";
pub const CONFIRMATION_SUBJECT: &str = "Thank you for applying to Fisker IT!";
pub const DELIVERED_MESSAGE: &str = "Submission received and emailed.";
pub const CONFIRMED_MESSAGE: &str =
    "Submission received and emailed; confirmation sent to applicant.";
pub const UNCONFIRMED_MESSAGE: &str =
    "Submission received and emailed, but the confirmation email failed.";
pub const SKIPPED_MESSAGE: &str = "Submission received (email not configured, so no email was sent).";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRef {
    pub service_id: String,
    pub template_id: String,
}

#[derive(Clone)]
pub struct ApiContext {
    pub relay: Arc<dyn MailRelay>,
    pub contact_template: TemplateRef,
    pub application_template: TemplateRef,
    /// Applicant acknowledgement sent after the application is relayed.
    pub confirmation_template: Option<TemplateRef>,
    pub recipient_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitAck {
    pub reference: Uuid,
    pub message: String,
    pub relayed: bool,
}

/// Subject of the recruiter email, naming the applicant.
pub fn application_subject(first_name: &str, last_name: &str) -> String {
    format!("New Application from {} {}", first_name.trim(), last_name.trim())
        .trim_end()
        .to_string()
}

pub async fn submit_contact(ctx: &ApiContext, form: &ContactForm) -> Result<SubmitAck, ApiError> {
    form.validate().map_err(rejected("contact"))?;

    let email = form.email.trim().to_string();
    let mut params = base_params(ctx, CONTACT_SUBJECT);
    params.insert(field::FIRST_NAME.into(), form.first_name.trim().to_string());
    params.insert(field::LAST_NAME.into(), form.last_name.trim().to_string());
    params.insert(field::EMAIL.into(), email.clone());
    params.insert(field::REPLY_TO.into(), email);
    params.insert(field::MESSAGE.into(), form.message.trim().to_string());

    let message = RelayMessage {
        service_id: ctx.contact_template.service_id.clone(),
        template_id: ctx.contact_template.template_id.clone(),
        params,
        attachment: None,
    };
    deliver(ctx, "contact", message).await
}

pub async fn submit_application(
    ctx: &ApiContext,
    form: &ApplicationForm,
) -> Result<SubmitAck, ApiError> {
    form.validate().map_err(rejected("application"))?;

    let email = form.email.trim().to_string();
    let subject = application_subject(&form.first_name, &form.last_name);
    let mut params = base_params(ctx, &subject);
    params.insert(field::FIRST_NAME.into(), form.first_name.trim().to_string());
    params.insert(field::LAST_NAME.into(), form.last_name.trim().to_string());
    params.insert(field::EMAIL.into(), email.clone());
    params.insert(field::REPLY_TO.into(), email);
    params.insert(field::PHONE.into(), form.phone.trim().to_string());
    params.insert(field::MESSAGE.into(), form.description.trim().to_string());

    let attachment = form.resume.as_ref().map(|resume| RelayAttachment {
        field_name: field::RESUME.to_string(),
        filename: resume.filename.trim().to_string(),
        content_type: resume.content_type.clone(),
        bytes: resume.bytes.clone(),
    });
    let message = RelayMessage {
        service_id: ctx.application_template.service_id.clone(),
        template_id: ctx.application_template.template_id.clone(),
        params,
        attachment,
    };
    let mut ack = deliver(ctx, "application", message).await?;
    if ack.relayed {
        if let Some(template) = &ctx.confirmation_template {
            ack.message = confirm_applicant(ctx, template, form, ack.reference).await;
        }
    }
    Ok(ack)
}

/// Sends the applicant acknowledgement. Failure is logged and reported in the
/// ack text; the application itself has already been delivered.
async fn confirm_applicant(
    ctx: &ApiContext,
    template: &TemplateRef,
    form: &ApplicationForm,
    reference: Uuid,
) -> String {
    let mut params = base_params(ctx, CONFIRMATION_SUBJECT);
    params.insert(field::TO_NAME.into(), form.first_name.trim().to_string());
    params.insert(field::TO_EMAIL.into(), form.email.trim().to_string());
    params.insert(field::FIRST_NAME.into(), form.first_name.trim().to_string());
    if let Some(resume) = &form.resume {
        params.insert(field::RESUME_NAME.into(), resume.filename.trim().to_string());
    }
    let message = RelayMessage {
        service_id: template.service_id.clone(),
        template_id: template.template_id.clone(),
        params,
        attachment: None,
    };
    match ctx.relay.send(message).await {
        Ok(_) => {
            info!(%reference, "applicant confirmation sent");
            CONFIRMED_MESSAGE.to_string()
        }
        Err(err) => {
            warn!(%reference, error = %err, "applicant confirmation failed");
            UNCONFIRMED_MESSAGE.to_string()
        }
    }
}

fn base_params(ctx: &ApiContext, subject: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    params.insert(field::SUBJECT.to_string(), subject.to_string());
    params.insert(field::TO_NAME.to_string(), ctx.recipient_name.clone());
    params
}

fn rejected(kind: &'static str) -> impl Fn(ValidationError) -> ApiError {
    move |err| {
        warn!(kind, error = %err, "submission rejected");
        ApiError::from(err)
    }
}

async fn deliver(
    ctx: &ApiContext,
    kind: &'static str,
    message: RelayMessage,
) -> Result<SubmitAck, ApiError> {
    let reference = Uuid::new_v4();
    match ctx.relay.send(message).await {
        Ok(RelayReceipt::Delivered) => {
            info!(kind, %reference, "submission relayed");
            Ok(SubmitAck {
                reference,
                message: DELIVERED_MESSAGE.to_string(),
                relayed: true,
            })
        }
        Ok(RelayReceipt::Skipped) => Ok(SubmitAck {
            reference,
            message: SKIPPED_MESSAGE.to_string(),
            relayed: false,
        }),
        Err(err) => {
            error!(kind, %reference, error = %err, "relay failed");
            Err(ApiError::new(ErrorCode::RelayFailed, err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mail_relay::{DisabledRelay, RelayError};
    use shared::forms::ResumeFile;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingRelay {
        sent: Mutex<Vec<RelayMessage>>,
        fail: bool,
        fail_template: Option<&'static str>,
    }

    #[async_trait]
    impl MailRelay for RecordingRelay {
        async fn send(&self, message: RelayMessage) -> Result<RelayReceipt, RelayError> {
            let failing = self.fail || self.fail_template == Some(message.template_id.as_str());
            self.sent.lock().await.push(message);
            if failing {
                return Err(RelayError::Rejected {
                    status: 412,
                    body: "service is inactive".into(),
                });
            }
            Ok(RelayReceipt::Delivered)
        }
    }

    fn context(relay: Arc<dyn MailRelay>) -> ApiContext {
        ApiContext {
            relay,
            contact_template: TemplateRef {
                service_id: "svc_contact".into(),
                template_id: "tpl_contact".into(),
            },
            application_template: TemplateRef {
                service_id: "svc_apply".into(),
                template_id: "tpl_apply".into(),
            },
            confirmation_template: None,
            recipient_name: "Fisker IT".into(),
        }
    }

    fn contact() -> ContactForm {
        ContactForm {
            first_name: " Ada ".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            message: "We need a data engineer.".into(),
        }
    }

    fn application() -> ApplicationForm {
        ApplicationForm {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@example.com".into(),
            phone: "555-0100".into(),
            description: "COBOL and compilers".into(),
            resume: Some(ResumeFile {
                filename: "grace.pdf".into(),
                content_type: Some("application/pdf".into()),
                bytes: b"%PDF".to_vec(),
            }),
        }
    }

    #[tokio::test]
    async fn contact_relays_trimmed_params_with_subject() {
        let relay = Arc::new(RecordingRelay::default());
        let ctx = context(relay.clone());

        let ack = submit_contact(&ctx, &contact()).await.expect("ack");
        assert!(ack.relayed);
        assert_eq!(ack.message, DELIVERED_MESSAGE);

        let sent = relay.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].template_id, "tpl_contact");
        assert_eq!(sent[0].params["first_name"], "Ada");
        assert_eq!(sent[0].params["subject"], CONTACT_SUBJECT);
        assert_eq!(sent[0].params["to_name"], "Fisker IT");
        assert!(sent[0].attachment.is_none());
    }

    #[tokio::test]
    async fn invalid_contact_never_reaches_relay() {
        let relay = Arc::new(RecordingRelay::default());
        let ctx = context(relay.clone());
        let form = ContactForm {
            message: "  ".into(),
            ..contact()
        };

        let err = submit_contact(&ctx, &form).await.expect_err("invalid");
        assert_eq!(err.code, ErrorCode::Validation);
        assert_eq!(err.message, "Please fill out Message.");
        assert!(relay.sent.lock().await.is_empty());
    }

    #[tokio::test]
    async fn application_attaches_resume_and_maps_description() {
        let relay = Arc::new(RecordingRelay::default());
        let ctx = context(relay.clone());

        submit_application(&ctx, &application()).await.expect("ack");

        let sent = relay.sent.lock().await;
        assert_eq!(sent[0].service_id, "svc_apply");
        assert_eq!(sent[0].params["message"], "COBOL and compilers");
        assert_eq!(sent[0].params["subject"], "New Application from Grace Hopper");
        assert_eq!(sent[0].params["reply_to"], "grace@example.com");
        let attachment = sent[0].attachment.as_ref().expect("resume");
        assert_eq!(attachment.field_name, "resume");
        assert_eq!(attachment.filename, "grace.pdf");
    }

    #[tokio::test]
    async fn relay_failure_maps_to_relay_failed() {
        let relay = Arc::new(RecordingRelay {
            fail: true,
            ..RecordingRelay::default()
        });
        let ctx = context(relay);

        let err = submit_application(&ctx, &application())
            .await
            .expect_err("relay down");
        assert_eq!(err.code, ErrorCode::RelayFailed);
        assert!(err.message.contains("service is inactive"));
    }

    #[tokio::test]
    async fn disabled_relay_still_accepts() {
        let ctx = context(Arc::new(DisabledRelay));
        let ack = submit_contact(&ctx, &contact()).await.expect("ack");
        assert!(!ack.relayed);
        assert_eq!(ack.message, SKIPPED_MESSAGE);
    }

    fn confirming_context(relay: Arc<dyn MailRelay>) -> ApiContext {
        ApiContext {
            confirmation_template: Some(TemplateRef {
                service_id: "svc_apply".into(),
                template_id: "tpl_confirm".into(),
            }),
            ..context(relay)
        }
    }

    #[test]
    fn application_subject_skips_missing_last_name() {
        assert_eq!(application_subject(" Grace ", ""), "New Application from Grace");
        assert_eq!(
            application_subject("Grace", "Hopper"),
            "New Application from Grace Hopper"
        );
    }

    #[tokio::test]
    async fn application_confirms_to_applicant() {
        let relay = Arc::new(RecordingRelay::default());
        let ctx = confirming_context(relay.clone());

        let ack = submit_application(&ctx, &application()).await.expect("ack");
        assert_eq!(ack.message, CONFIRMED_MESSAGE);

        let sent = relay.sent.lock().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].template_id, "tpl_apply");
        let confirmation = &sent[1];
        assert_eq!(confirmation.template_id, "tpl_confirm");
        assert_eq!(confirmation.params["subject"], CONFIRMATION_SUBJECT);
        assert_eq!(confirmation.params["to_email"], "grace@example.com");
        assert_eq!(confirmation.params["to_name"], "Grace");
        assert_eq!(confirmation.params["resume_name"], "grace.pdf");
        assert!(confirmation.attachment.is_none());
    }

    #[tokio::test]
    async fn failed_confirmation_keeps_application_accepted() {
        let relay = Arc::new(RecordingRelay {
            fail_template: Some("tpl_confirm"),
            ..RecordingRelay::default()
        });
        let ctx = confirming_context(relay.clone());

        let ack = submit_application(&ctx, &application()).await.expect("ack");
        assert!(ack.relayed);
        assert_eq!(ack.message, UNCONFIRMED_MESSAGE);
        assert_eq!(relay.sent.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn failed_application_skips_confirmation() {
        let relay = Arc::new(RecordingRelay {
            fail: true,
            ..RecordingRelay::default()
        });
        let ctx = confirming_context(relay.clone());

        submit_application(&ctx, &application())
            .await
            .expect_err("relay down");
        assert_eq!(relay.sent.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn contact_never_sends_confirmation() {
        let relay = Arc::new(RecordingRelay::default());
        let ctx = confirming_context(relay.clone());

        submit_contact(&ctx, &contact()).await.expect("ack");
        assert_eq!(relay.sent.lock().await.len(), 1);
    }
}
