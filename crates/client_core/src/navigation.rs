//! Root navigation container: owns the current page, persists it, and asks
//! the effect layer to scroll.

use std::time::Duration;

use shared::domain::{PageId, OUR_STORY_ANCHOR};
use tracing::debug;

/// Delay before scrolling to the story anchor after swapping pages, so the
/// new page is laid out first.
pub const OUR_STORY_SCROLL_DELAY: Duration = Duration::from_millis(200);

/// Durable storage for the current page identifier.
pub trait PageStore {
    /// Raw stored identifier; `None` when absent or unreadable.
    fn load(&self) -> Option<String>;
    fn save(&mut self, page: PageId);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPageStore {
    value: Option<String>,
}

impl MemoryPageStore {
    pub fn with_value(raw: impl Into<String>) -> Self {
        Self {
            value: Some(raw.into()),
        }
    }
}

impl PageStore for MemoryPageStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, page: PageId) {
        self.value = Some(page.as_str().to_string());
    }
}

pub trait NavigationEffects {
    fn scroll_to_top(&mut self);
    fn scroll_to_anchor(&mut self, anchor: &'static str);
    fn schedule_anchor_scroll(&mut self, anchor: &'static str, delay: Duration);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    ScrollToTop,
    ScrollToAnchor(&'static str),
    ScheduleAnchorScroll {
        anchor: &'static str,
        delay: Duration,
    },
}

/// Records requested effects in order so a renderer can replay them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectQueue {
    effects: Vec<NavEffect>,
}

impl EffectQueue {
    pub fn effects(&self) -> &[NavEffect] {
        &self.effects
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Anchor the viewport should end on, if any effect targets one after
    /// the last scroll to top.
    pub fn last_anchor(&self) -> Option<&'static str> {
        self.effects.iter().rev().find_map(|effect| match effect {
            NavEffect::ScrollToTop => Some(None),
            NavEffect::ScrollToAnchor(anchor)
            | NavEffect::ScheduleAnchorScroll { anchor, .. } => Some(Some(*anchor)),
        })?
    }
}

impl NavigationEffects for EffectQueue {
    fn scroll_to_top(&mut self) {
        self.effects.push(NavEffect::ScrollToTop);
    }

    fn scroll_to_anchor(&mut self, anchor: &'static str) {
        self.effects.push(NavEffect::ScrollToAnchor(anchor));
    }

    fn schedule_anchor_scroll(&mut self, anchor: &'static str, delay: Duration) {
        self.effects
            .push(NavEffect::ScheduleAnchorScroll { anchor, delay });
    }
}

pub struct Navigator<S: PageStore> {
    current: PageId,
    store: S,
}

impl<S: PageStore> Navigator<S> {
    /// Reads the persisted page once; anything unrecognized yields the default.
    pub fn restore(store: S) -> Self {
        let current = store
            .load()
            .map(|raw| PageId::parse_or_default(&raw))
            .unwrap_or_default();
        Self { current, store }
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Applies a navigation request. Returns whether the current page changed.
    pub fn request(&mut self, target: PageId, effects: &mut impl NavigationEffects) -> bool {
        if target == PageId::OurStory {
            if self.current == PageId::OurStory {
                debug!("already on story page; scrolling to anchor");
                effects.scroll_to_anchor(OUR_STORY_ANCHOR);
                return false;
            }
            self.apply(target, effects);
            effects.schedule_anchor_scroll(OUR_STORY_ANCHOR, OUR_STORY_SCROLL_DELAY);
            return true;
        }

        if target == self.current {
            return false;
        }
        self.apply(target, effects);
        true
    }

    /// Like [`Navigator::request`] for untyped payloads; unknown identifiers
    /// navigate to the default page.
    pub fn request_raw(&mut self, raw: &str, effects: &mut impl NavigationEffects) -> bool {
        self.request(PageId::parse_or_default(raw), effects)
    }

    fn apply(&mut self, page: PageId, effects: &mut impl NavigationEffects) {
        debug!(from = %self.current, to = %page, "page change");
        self.current = page;
        self.store.save(page);
        effects.scroll_to_top();
    }
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
