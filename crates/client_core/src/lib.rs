use async_trait::async_trait;
use shared::forms::{ApplicationForm, ContactForm};
use thiserror::Error;

pub mod carousel;
pub mod faq;
pub mod forms;
pub mod navigation;
pub mod timeline;
pub mod transport;

pub use carousel::Carousel;
pub use faq::FaqAccordion;
pub use forms::{
    FormController, FormFields, RecruitmentState, StatusMessage, StatusTone, SubmissionStatus,
    SubmitAttempt,
};
pub use navigation::{EffectQueue, MemoryPageStore, NavEffect, NavigationEffects, Navigator, PageStore};
pub use timeline::{scroll_progress, RevealTracker, ScrollMetrics, ScrollProgress};
pub use transport::HttpFormSubmitter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitAck {
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

/// Delivers a validated form to whatever accepts submissions.
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    async fn submit_contact(&self, form: &ContactForm) -> Result<SubmitAck, SubmitError>;
    async fn submit_application(&self, form: &ApplicationForm) -> Result<SubmitAck, SubmitError>;
}
