//! Tool catalog model: the records served by the directory API, the category
//! taxonomy, and the rules that turn a response into the cards on screen.

pub mod category;
pub mod display;

use serde::{Deserialize, Deserializer, Serialize};

pub use category::{Category, CATEGORIES};
pub use display::{select_for_display, DisplayPolicy};

/// Image shown when a tool has no screenshot.
pub const DEFAULT_SCREENSHOT: &str = "/default-screenshot.png";

/// One curated AI tool as returned by `GET /api/tools`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub short_description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source_url: String,
    #[serde(default)]
    pub screenshot_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Highlight flag assigned client-side to one tool per fetch.
    #[serde(skip)]
    pub certified: bool,
}

impl Tool {
    /// Screenshot URL, or the placeholder when missing or blank.
    pub fn screenshot(&self) -> &str {
        match self.screenshot_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_SCREENSHOT,
        }
    }

    /// Category label for the card badge, if the API supplied one.
    pub fn badge(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// Text columns may come back as `null`; treat them as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The "New Tools" / "Top Tools" toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    New,
    Top,
}

impl SortMode {
    pub const ALL: [SortMode; 2] = [SortMode::New, SortMode::Top];

    /// Value of the `filter` query parameter.
    pub fn as_query(self) -> &'static str {
        match self {
            SortMode::New => "new",
            SortMode::Top => "top",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::New => "New Tools",
            SortMode::Top => "Top Tools",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortMode::New => SortMode::Top,
            SortMode::Top => SortMode::New,
        }
    }
}
