/// Playable item domain type
use crate::types::ItemId;
use serde::{Deserialize, Serialize};

/// A track entry that can be queued and played
///
/// Supplied by the catalog and never mutated by the playback controller.
/// At least one of the locators is normally present; items with neither are
/// still accepted and left for the playback adapter to reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayableItem {
    /// Unique item identifier (generated when a catalog entry has none)
    #[serde(default = "ItemId::generate")]
    pub id: ItemId,

    /// Display title
    pub title: String,

    /// Artwork reference (URL or asset path)
    #[serde(default)]
    pub artwork: String,

    /// Direct audio resource locator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,

    /// Fallback video/embed locator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl PlayableItem {
    /// Create an item with no media locators
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artwork: String::new(),
            audio_url: None,
            video_url: None,
        }
    }

    /// Set the artwork reference
    pub fn with_artwork(mut self, artwork: impl Into<String>) -> Self {
        self.artwork = artwork.into();
        self
    }

    /// Set the direct audio locator
    pub fn with_audio(mut self, url: impl Into<String>) -> Self {
        self.audio_url = Some(url.into());
        self
    }

    /// Set the video/embed fallback locator
    pub fn with_video(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    /// Locator the adapter should load: direct audio first, embed second
    pub fn playback_locator(&self) -> Option<&str> {
        self.audio_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.video_url.as_deref().filter(|url| !url.trim().is_empty()))
    }

    /// Whether any usable locator exists
    pub fn has_media(&self) -> bool {
        self.playback_locator().is_some()
    }

    /// Same identity as another item (title and locators ignored)
    pub fn same_item(&self, other: &PlayableItem) -> bool {
        self.id == other.id
    }
}
