use async_trait::async_trait;
use client_core::{FormSubmitter, SubmitAck, SubmitError};
use server_api::{submit_application, submit_contact, ApiContext};
use shared::forms::{ApplicationForm, ContactForm};

/// Feeds the page form controllers straight into the submission API, so HTML
/// posts and JSON posts share one relay path.
pub(crate) struct DirectSubmitter<'a> {
    api: &'a ApiContext,
}

impl<'a> DirectSubmitter<'a> {
    pub(crate) fn new(api: &'a ApiContext) -> Self {
        Self { api }
    }
}

#[async_trait]
impl FormSubmitter for DirectSubmitter<'_> {
    async fn submit_contact(&self, form: &ContactForm) -> Result<SubmitAck, SubmitError> {
        submit_contact(self.api, form)
            .await
            .map(|ack| SubmitAck {
                detail: Some(ack.message),
            })
            .map_err(|err| SubmitError::Rejected(err.message))
    }

    async fn submit_application(&self, form: &ApplicationForm) -> Result<SubmitAck, SubmitError> {
        submit_application(self.api, form)
            .await
            .map(|ack| SubmitAck {
                detail: Some(ack.message),
            })
            .map_err(|err| SubmitError::Rejected(err.message))
    }
}
