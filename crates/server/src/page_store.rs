//! Cookie-backed storage for the current page identifier.

use axum::http::{header, HeaderMap, HeaderValue};
use client_core::PageStore;
use shared::domain::{PageId, PAGE_STORAGE_KEY};

const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CookiePageStore {
    loaded: Option<String>,
    saved: Option<PageId>,
}

impl CookiePageStore {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        let loaded = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|raw| raw.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == PAGE_STORAGE_KEY)
            .map(|(_, value)| value.trim().to_string());
        Self {
            loaded,
            saved: None,
        }
    }

    /// `Set-Cookie` value for a page saved during this request.
    pub(crate) fn set_cookie(&self) -> Option<HeaderValue> {
        let page = self.saved?;
        HeaderValue::from_str(&format!(
            "{PAGE_STORAGE_KEY}={page}; Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax"
        ))
        .ok()
    }
}

impl PageStore for CookiePageStore {
    fn load(&self) -> Option<String> {
        self.loaded.clone()
    }

    fn save(&mut self, page: PageId) {
        self.loaded = Some(page.as_str().to_string());
        self.saved = Some(page);
    }
}
