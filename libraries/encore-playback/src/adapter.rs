//! Playback adapter seam
//!
//! The adapter owns real media I/O (an audio element, an embed player, a
//! native decoder). It receives commands derived from controller state and
//! reports back through [`AdapterEvent`]s.

use crate::error::{PlaybackError, Result};
use crate::events::PlaybackEvent;
use crate::types::PlaybackState;
use encore_core::{ItemId, PlayableItem};
use serde::{Deserialize, Serialize};

/// Platform-specific media player
///
/// Implementors must tolerate being told to load a new item while a previous
/// load is still in flight; abandoning stale loads is their job.
pub trait PlaybackAdapter: Send {
    /// Load the item's media (audio locator first, embed fallback)
    fn load(&mut self, item: &PlayableItem) -> Result<()>;

    /// Start or resume output
    fn play(&mut self) -> Result<()>;

    /// Pause output
    fn pause(&mut self) -> Result<()>;

    /// Jump to position in the loaded item
    fn seek_to(&mut self, seconds: f64) -> Result<()>;
}

/// Reports flowing from the adapter back into the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AdapterEvent {
    /// Periodic position tick
    Progress { seconds: f64 },

    /// Media length became known
    Duration { seconds: f64 },

    /// Current item played to the end
    Ended,

    /// Current item could not be played
    Error { message: String },
}

/// Adapter for hosts whose real player lives elsewhere
///
/// The server uses this: the browser owns the media element and reports
/// back over HTTP, so there is nothing to drive in-process.
#[derive(Debug, Default)]
pub struct DetachedAdapter;

impl PlaybackAdapter for DetachedAdapter {
    fn load(&mut self, item: &PlayableItem) -> Result<()> {
        tracing::debug!("Detached adapter: client should load {}", item.id);
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        Ok(())
    }

    fn seek_to(&mut self, _seconds: f64) -> Result<()> {
        Ok(())
    }
}

/// Mirrors controller state onto an adapter
///
/// Loads on every track change (including restarting the same item), forwards
/// each seek once, then reconciles the play/pause flag against what the
/// adapter was last told. A failed load pauses whatever was still playing
/// and leaves the adapter untouched until the next successful load.
#[derive(Debug, Default)]
pub(crate) struct AdapterSync {
    // Item the adapter holds media for; None after a failed load
    loaded: Option<ItemId>,
    playing: bool,
}

impl AdapterSync {
    /// Apply drained events, then reconcile the transport flag
    ///
    /// On failure returns the id of the item the adapter choked on.
    pub(crate) fn apply(
        &mut self,
        events: &[PlaybackEvent],
        state: &PlaybackState,
        adapter: &mut dyn PlaybackAdapter,
    ) -> std::result::Result<(), (ItemId, PlaybackError)> {
        let Some(item) = state.current_item.as_ref() else {
            return Ok(());
        };
        let fail = |err| (item.id.clone(), err);

        let reload = events
            .iter()
            .any(|event| matches!(event, PlaybackEvent::TrackChanged { .. }));

        if reload {
            let was_playing = std::mem::replace(&mut self.playing, false);

            let loaded = if item.has_media() {
                adapter.load(item)
            } else {
                Err(PlaybackError::NoLocator(item.id.to_string()))
            };

            if let Err(err) = loaded {
                // The previous item stays in the adapter; silence it
                let silenced = !was_playing
                    || adapter
                        .pause()
                        .map_err(|pause_err| {
                            tracing::warn!("Adapter refused pause after failed load: {}", pause_err);
                        })
                        .is_ok();

                if silenced {
                    self.loaded = None;
                } else {
                    self.playing = true;
                }
                return Err(fail(err));
            }

            self.loaded = Some(item.id.clone());
        }

        if self.loaded.is_none() {
            return Ok(());
        }

        for event in events {
            if let PlaybackEvent::SeekRequested { seconds, .. } = event {
                adapter.seek_to(*seconds).map_err(fail)?;
            }
        }

        if state.is_playing != self.playing {
            if state.is_playing {
                adapter.play().map_err(fail)?;
            } else {
                adapter.pause().map_err(fail)?;
            }
            self.playing = state.is_playing;
        }

        Ok(())
    }
}
