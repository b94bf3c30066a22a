use std::{collections::HashMap, fs, path::Path, sync::Arc};

use anyhow::Context;
use mail_relay::{DisabledRelay, EmailJsConfig, EmailJsRelay, MailRelay, DEFAULT_EMAILJS_ENDPOINT};
use serde::Deserialize;
use server_api::{ApiContext, TemplateRef};
use tracing::{info, warn};
use url::Url;

pub const SETTINGS_FILE: &str = "site.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub emailjs_endpoint: String,
    pub emailjs_public_key: Option<String>,
    pub emailjs_private_key: Option<String>,
    pub contact_service_id: String,
    pub contact_template_id: String,
    pub application_service_id: String,
    pub application_template_id: String,
    /// Service for the applicant confirmation; the application service when unset.
    pub confirmation_service_id: Option<String>,
    pub confirmation_template_id: Option<String>,
    pub recipient_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            emailjs_endpoint: DEFAULT_EMAILJS_ENDPOINT.into(),
            emailjs_public_key: None,
            emailjs_private_key: None,
            contact_service_id: String::new(),
            contact_template_id: String::new(),
            application_service_id: String::new(),
            application_template_id: String::new(),
            confirmation_service_id: None,
            confirmation_template_id: None,
            recipient_name: "Fisker IT".into(),
        }
    }
}

impl Settings {
    /// Relay settings that must be present before any email can be sent.
    pub fn missing_relay_settings(&self) -> Vec<&'static str> {
        [
            ("EMAILJS_PUBLIC_KEY", self.emailjs_public_key.as_deref().unwrap_or_default()),
            ("APP__CONTACT_SERVICE_ID", self.contact_service_id.as_str()),
            ("APP__CONTACT_TEMPLATE_ID", self.contact_template_id.as_str()),
            ("APP__APPLICATION_SERVICE_ID", self.application_service_id.as_str()),
            ("APP__APPLICATION_TEMPLATE_ID", self.application_template_id.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn relay(&self) -> anyhow::Result<Arc<dyn MailRelay>> {
        let missing = self.missing_relay_settings();
        let public_key = match self.emailjs_public_key.clone() {
            Some(key) if missing.is_empty() => key,
            _ => {
                warn!(
                    missing = %missing.join(", "),
                    "email relay not configured; submissions will be accepted without email"
                );
                return Ok(Arc::new(DisabledRelay));
            }
        };
        let endpoint = Url::parse(&self.emailjs_endpoint)
            .with_context(|| format!("invalid email relay endpoint '{}'", self.emailjs_endpoint))?;
        info!(%endpoint, "email relay configured");
        Ok(Arc::new(EmailJsRelay::new(EmailJsConfig {
            endpoint,
            public_key,
            private_key: self.emailjs_private_key.clone(),
        })))
    }

    pub fn api_context(&self) -> anyhow::Result<ApiContext> {
        Ok(ApiContext {
            relay: self.relay()?,
            contact_template: TemplateRef {
                service_id: self.contact_service_id.clone(),
                template_id: self.contact_template_id.clone(),
            },
            application_template: TemplateRef {
                service_id: self.application_service_id.clone(),
                template_id: self.application_template_id.clone(),
            },
            confirmation_template: self.confirmation_template(),
            recipient_name: self.recipient_name.clone(),
        })
    }

    fn confirmation_template(&self) -> Option<TemplateRef> {
        let template_id = self.confirmation_template_id.clone()?;
        let service_id = self
            .confirmation_service_id
            .clone()
            .unwrap_or_else(|| self.application_service_id.clone());
        Some(TemplateRef {
            service_id,
            template_id,
        })
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then flat keys from `path`, then environment overrides.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<HashMap<String, String>>(&raw) {
            Ok(file_cfg) => apply_file(&mut settings, &file_cfg),
            Err(error) => warn!(path = %path.display(), %error, "ignoring unreadable settings file"),
        }
    }

    if let Some(v) = env("SITE_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }
    if let Some(v) = env("EMAILJS_ENDPOINT") {
        settings.emailjs_endpoint = v;
    }
    if let Some(v) = non_empty(env("EMAILJS_PUBLIC_KEY")) {
        settings.emailjs_public_key = Some(v);
    }
    if let Some(v) = non_empty(env("EMAILJS_PRIVATE_KEY")) {
        settings.emailjs_private_key = Some(v);
    }
    if let Some(v) = env("APP__CONTACT_SERVICE_ID") {
        settings.contact_service_id = v;
    }
    if let Some(v) = env("APP__CONTACT_TEMPLATE_ID") {
        settings.contact_template_id = v;
    }
    if let Some(v) = env("APP__APPLICATION_SERVICE_ID") {
        settings.application_service_id = v;
    }
    if let Some(v) = env("APP__APPLICATION_TEMPLATE_ID") {
        settings.application_template_id = v;
    }
    if let Some(v) = non_empty(env("APP__CONFIRMATION_SERVICE_ID")) {
        settings.confirmation_service_id = Some(v);
    }
    if let Some(v) = non_empty(env("APP__CONFIRMATION_TEMPLATE_ID")) {
        settings.confirmation_template_id = Some(v);
    }
    if let Some(v) = env("APP__RECIPIENT_NAME") {
        settings.recipient_name = v;
    }

    settings
}

fn apply_file(settings: &mut Settings, file_cfg: &HashMap<String, String>) {
    if let Some(v) = file_cfg.get("bind_addr") {
        settings.server_bind = v.clone();
    }
    if let Some(v) = file_cfg.get("emailjs_endpoint") {
        settings.emailjs_endpoint = v.clone();
    }
    if let Some(v) = non_empty(file_cfg.get("emailjs_public_key").cloned()) {
        settings.emailjs_public_key = Some(v);
    }
    if let Some(v) = non_empty(file_cfg.get("emailjs_private_key").cloned()) {
        settings.emailjs_private_key = Some(v);
    }
    if let Some(v) = file_cfg.get("contact_service_id") {
        settings.contact_service_id = v.clone();
    }
    if let Some(v) = file_cfg.get("contact_template_id") {
        settings.contact_template_id = v.clone();
    }
    if let Some(v) = file_cfg.get("application_service_id") {
        settings.application_service_id = v.clone();
    }
    if let Some(v) = file_cfg.get("application_template_id") {
        settings.application_template_id = v.clone();
    }
    if let Some(v) = non_empty(file_cfg.get("confirmation_service_id").cloned()) {
        settings.confirmation_service_id = Some(v);
    }
    if let Some(v) = non_empty(file_cfg.get("confirmation_template_id").cloned()) {
        settings.confirmation_template_id = Some(v);
    }
    if let Some(v) = file_cfg.get("recipient_name") {
        settings.recipient_name = v.clone();
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
