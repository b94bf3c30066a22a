//! Multipart decoding for the two site forms. Wire names are mapped to typed
//! fields here and nowhere else.

use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
};
use shared::{
    forms::{ApplicationForm, ContactForm, ResumeFile, ValidationError},
    protocol::field,
};

const EMAIL_ALIAS: &str = "email";
const DESCRIPTION_ALIAS: &str = "description";
const CONTACT_TOO_LARGE: &str = "Message is too large to send.";

#[derive(Debug)]
pub(crate) struct FormPartsError {
    pub(crate) status: StatusCode,
    pub(crate) message: String,
}

impl FormPartsError {
    /// Replaces the parser's text when the body ran past the request cap.
    fn when_too_large(self, message: impl Into<String>) -> Self {
        if self.status == StatusCode::PAYLOAD_TOO_LARGE {
            Self {
                message: message.into(),
                ..self
            }
        } else {
            self
        }
    }
}

impl From<MultipartError> for FormPartsError {
    fn from(err: MultipartError) -> Self {
        Self {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

pub(crate) async fn read_contact(multipart: Multipart) -> Result<ContactForm, FormPartsError> {
    let mut form = ContactForm::default();
    read_contact_into(multipart, &mut form).await?;
    Ok(form)
}

/// Fills `form` part by part; fields read before an error are kept.
pub(crate) async fn read_contact_into(
    multipart: Multipart,
    form: &mut ContactForm,
) -> Result<(), FormPartsError> {
    fill_contact(multipart, form)
        .await
        .map_err(|err| err.when_too_large(CONTACT_TOO_LARGE))
}

async fn fill_contact(mut multipart: Multipart, form: &mut ContactForm) -> Result<(), FormPartsError> {
    while let Some(part) = multipart.next_field().await? {
        let name = part.name().unwrap_or_default().to_string();
        match name.as_str() {
            field::FIRST_NAME => form.first_name = part.text().await?,
            field::LAST_NAME => form.last_name = part.text().await?,
            field::EMAIL | EMAIL_ALIAS => form.email = part.text().await?,
            field::MESSAGE => form.message = part.text().await?,
            _ => {}
        }
    }
    Ok(())
}

pub(crate) async fn read_application(
    multipart: Multipart,
) -> Result<ApplicationForm, FormPartsError> {
    let mut form = ApplicationForm::default();
    read_application_into(multipart, &mut form).await?;
    Ok(form)
}

/// Like [`read_contact_into`]; an overflowing body reports the resume as too large.
pub(crate) async fn read_application_into(
    multipart: Multipart,
    form: &mut ApplicationForm,
) -> Result<(), FormPartsError> {
    fill_application(multipart, form)
        .await
        .map_err(|err| err.when_too_large(ValidationError::ResumeTooLarge.to_string()))
}

async fn fill_application(
    mut multipart: Multipart,
    form: &mut ApplicationForm,
) -> Result<(), FormPartsError> {
    while let Some(part) = multipart.next_field().await? {
        let name = part.name().unwrap_or_default().to_string();
        match name.as_str() {
            field::FIRST_NAME => form.first_name = part.text().await?,
            field::LAST_NAME => form.last_name = part.text().await?,
            field::EMAIL | EMAIL_ALIAS => form.email = part.text().await?,
            field::PHONE => form.phone = part.text().await?,
            field::MESSAGE | DESCRIPTION_ALIAS => form.description = part.text().await?,
            field::RESUME => {
                let filename = part.file_name().unwrap_or_default().to_string();
                let content_type = part.content_type().map(str::to_string);
                let bytes = part.bytes().await?.to_vec();
                // Browsers send an empty unnamed part when no file was chosen.
                if !filename.trim().is_empty() || !bytes.is_empty() {
                    form.resume = Some(ResumeFile {
                        filename,
                        content_type,
                        bytes,
                    });
                }
            }
            _ => {}
        }
    }
    Ok(())
}
