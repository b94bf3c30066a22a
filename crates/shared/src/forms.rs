//! Typed form records and the validation rules shared by the browser-facing
//! controllers and the submission API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_RESUME_BYTES: usize = 8 * 1024 * 1024;
pub const MAX_FILENAME_BYTES: usize = 180;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill out {}.", join_labels(.0))]
    MissingFields(Vec<&'static str>),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please attach your resume.")]
    MissingResume,
    #[error("Resume exceeds {} bytes.", MAX_RESUME_BYTES)]
    ResumeTooLarge,
    #[error("Resume filename is too long.")]
    FilenameTooLong,
    #[error("Resume filename must not contain path separators.")]
    FilenameHasPathSeparator,
}

/// `local@domain.tld`: no whitespace, a single `@`, and a dot inside the
/// domain with text on both sides.
pub fn is_valid_email(raw: &str) -> bool {
    let value = raw.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx + 1 < domain.len())
}

fn join_labels(labels: &[&str]) -> String {
    match labels {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

fn missing(required: &[(&'static str, &str)]) -> Result<(), ValidationError> {
    let labels: Vec<&'static str> = required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect();
    if labels.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(labels))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        missing(&[
            ("First Name", self.first_name.as_str()),
            ("Email", self.email.as_str()),
            ("Message", self.message.as_str()),
        ])?;
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name = self.filename.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingResume);
        }
        if name.len() > MAX_FILENAME_BYTES {
            return Err(ValidationError::FilenameTooLong);
        }
        if name.contains('/') || name.contains('\\') {
            return Err(ValidationError::FilenameHasPathSeparator);
        }
        if self.bytes.len() > MAX_RESUME_BYTES {
            return Err(ValidationError::ResumeTooLarge);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub description: String,
    pub resume: Option<ResumeFile>,
}

impl ApplicationForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        missing(&[
            ("First Name", self.first_name.as_str()),
            ("Last Name", self.last_name.as_str()),
            ("Email", self.email.as_str()),
            ("Description", self.description.as_str()),
        ])?;
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        self.resume
            .as_ref()
            .ok_or(ValidationError::MissingResume)?
            .validate()
    }
}
