use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayAttachment {
    pub field_name: String,
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayMessage {
    pub service_id: String,
    pub template_id: String,
    pub params: BTreeMap<String, String>,
    pub attachment: Option<RelayAttachment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayReceipt {
    Delivered,
    /// The relay is not configured; nothing left the process.
    Skipped,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("email relay rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("email relay unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid attachment: {0}")]
    Attachment(String),
}

#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(&self, message: RelayMessage) -> Result<RelayReceipt, RelayError>;

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Accepts every message without delivering it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRelay;

#[async_trait]
impl MailRelay for DisabledRelay {
    async fn send(&self, message: RelayMessage) -> Result<RelayReceipt, RelayError> {
        warn!(
            template_id = %message.template_id,
            "email relay not configured; message dropped"
        );
        Ok(RelayReceipt::Skipped)
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    pub endpoint: Url,
    pub public_key: String,
    pub private_key: Option<String>,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a BTreeMap<String, String>,
}

pub struct EmailJsRelay {
    http: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsRelay {
    pub fn new(config: EmailJsConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: EmailJsConfig) -> Self {
        Self { http, config }
    }

    fn api_url(&self, path: &str) -> String {
        format!(
            "{}/api/v1.0/email/{path}",
            self.config.endpoint.as_str().trim_end_matches('/')
        )
    }

    fn multipart_form(&self, message: RelayMessage) -> Result<Form, RelayError> {
        let mut form = Form::new()
            .text("service_id", message.service_id)
            .text("template_id", message.template_id)
            .text("user_id", self.config.public_key.clone());
        if let Some(token) = &self.config.private_key {
            form = form.text("accessToken", token.clone());
        }
        for (key, value) in message.params {
            form = form.text(key, value);
        }
        if let Some(file) = message.attachment {
            let mut part = Part::bytes(file.bytes).file_name(file.filename);
            if let Some(content_type) = file.content_type.as_deref() {
                part = part
                    .mime_str(content_type)
                    .map_err(|e| RelayError::Attachment(e.to_string()))?;
            }
            form = form.part(file.field_name, part);
        }
        Ok(form)
    }
}

#[async_trait]
impl MailRelay for EmailJsRelay {
    async fn send(&self, message: RelayMessage) -> Result<RelayReceipt, RelayError> {
        let template_id = message.template_id.clone();
        let response = if message.attachment.is_some() {
            let form = self.multipart_form(message)?;
            self.http
                .post(self.api_url("send-form"))
                .multipart(form)
                .send()
                .await?
        } else {
            let body = SendRequest {
                service_id: &message.service_id,
                template_id: &message.template_id,
                user_id: &self.config.public_key,
                access_token: self.config.private_key.as_deref(),
                template_params: &message.params,
            };
            self.http
                .post(self.api_url("send"))
                .json(&body)
                .send()
                .await?
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        info!(%template_id, "email relayed");
        Ok(RelayReceipt::Delivered)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
