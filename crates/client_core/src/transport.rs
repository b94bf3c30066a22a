use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use shared::{
    forms::{ApplicationForm, ContactForm},
    protocol::{application_api_route, contact_api_route, field, SubmitResponse},
};

use crate::{FormSubmitter, SubmitAck, SubmitError};

/// Posts forms to the site's JSON submission API.
#[derive(Clone)]
pub struct HttpFormSubmitter {
    http: Client,
    server_url: String,
}

impl HttpFormSubmitter {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_client(http: Client, server_url: impl Into<String>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        Self { http, server_url }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    async fn post(&self, route: &str, form: Form) -> Result<SubmitAck, SubmitError> {
        let response = self
            .http
            .post(format!("{}{route}", self.server_url))
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        let parsed: Option<SubmitResponse> = serde_json::from_str(&body).ok();

        match parsed {
            Some(reply) if status.is_success() && reply.success => Ok(SubmitAck {
                detail: reply.message,
            }),
            Some(reply) => Err(SubmitError::Rejected(
                reply
                    .error
                    .unwrap_or_else(|| format!("server answered {status}")),
            )),
            None => Err(SubmitError::Rejected(format!("server answered {status}"))),
        }
    }
}

#[async_trait]
impl FormSubmitter for HttpFormSubmitter {
    async fn submit_contact(&self, form: &ContactForm) -> Result<SubmitAck, SubmitError> {
        let body = Form::new()
            .text(field::FIRST_NAME, form.first_name.clone())
            .text(field::LAST_NAME, form.last_name.clone())
            .text(field::EMAIL, form.email.clone())
            .text(field::MESSAGE, form.message.clone());
        self.post(contact_api_route(), body).await
    }

    async fn submit_application(&self, form: &ApplicationForm) -> Result<SubmitAck, SubmitError> {
        let mut body = Form::new()
            .text(field::FIRST_NAME, form.first_name.clone())
            .text(field::LAST_NAME, form.last_name.clone())
            .text(field::EMAIL, form.email.clone())
            .text(field::PHONE, form.phone.clone())
            .text(field::MESSAGE, form.description.clone());
        if let Some(resume) = &form.resume {
            let mut part = Part::bytes(resume.bytes.clone()).file_name(resume.filename.clone());
            if let Some(content_type) = resume.content_type.as_deref() {
                part = part.mime_str(content_type)?;
            }
            body = body.part(field::RESUME, part);
        }
        self.post(application_api_route(), body).await
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
