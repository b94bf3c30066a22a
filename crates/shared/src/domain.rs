use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key under which the current page identifier is persisted.
pub const PAGE_STORAGE_KEY: &str = "currentPage";

/// Anchor scrolled to when the "Our Story" entry is requested.
pub const OUR_STORY_ANCHOR: &str = "our-story";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PageId {
    #[default]
    #[serde(rename = "home")]
    Home,
    #[serde(rename = "services")]
    Services,
    #[serde(rename = "recruitment")]
    Recruitment,
    #[serde(rename = "about/story")]
    OurStory,
    #[serde(rename = "contact")]
    Contact,
}

impl PageId {
    /// Navigation order used by the header and footer.
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::Services,
        PageId::Recruitment,
        PageId::OurStory,
        PageId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Services => "services",
            PageId::Recruitment => "recruitment",
            PageId::OurStory => "about/story",
            PageId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::Services => "Services",
            PageId::Recruitment => "Recruitment",
            PageId::OurStory => "Our Story",
            PageId::Contact => "Contact Us",
        }
    }

    /// Unrecognized identifiers resolve to the default page.
    pub fn parse_or_default(raw: &str) -> PageId {
        raw.parse().unwrap_or_default()
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page identifier '{0}'")]
pub struct UnknownPage(pub String);

impl FromStr for PageId {
    type Err = UnknownPage;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == raw.trim())
            .ok_or_else(|| UnknownPage(raw.to_string()))
    }
}
