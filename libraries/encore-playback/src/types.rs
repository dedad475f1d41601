//! Core types for playback management

use crate::error::{PlaybackError, Result};
use encore_core::{ItemId, PlayableItem};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Now-playing record owned by the queue controller
///
/// Renderers only ever see this through a shared reference or a
/// [`PlaybackSnapshot`]; every mutation goes through the controller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Item currently loaded (held by value, queue contents may change)
    pub current_item: Option<PlayableItem>,

    /// Position of the current item in the queue (`None` when empty)
    pub current_index: Option<usize>,

    /// Transport flag
    pub is_playing: bool,

    /// Shuffle mode flag (affects only the next pick)
    pub is_shuffle_enabled: bool,

    /// Playback position reported by the adapter
    pub progress_seconds: f64,

    /// Track length reported by the adapter
    pub duration_seconds: f64,

    /// One-shot seek instruction for the adapter
    pub pending_seek_seconds: Option<f64>,
}

/// Identifies one seek request
///
/// Each `seek` call gets a fresh pulse; clearing with a stale pulse is a
/// no-op so a newer seek keeps its full window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeekPulse(pub u64);

/// Read-only copy of the controller state for subscribers
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    #[serde(flatten)]
    pub state: PlaybackState,

    /// Queue item ids in traversal order
    pub queue: Vec<ItemId>,
}

impl PlaybackSnapshot {
    /// Id of the current item, if any
    pub fn current_id(&self) -> Option<&ItemId> {
        self.state.current_item.as_ref().map(|item| &item.id)
    }
}

/// Configuration for the queue controller and its host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Progress beyond which "previous" restarts the track (default: 3.0)
    pub restart_threshold_secs: f64,

    /// How long a pending seek stays visible (default: 50ms)
    pub seek_pulse_ms: u64,

    /// Delay before skipping an item the adapter failed on (default: 1500ms)
    pub error_skip_delay_ms: u64,

    /// Initial shuffle flag (default: false)
    pub shuffle: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            restart_threshold_secs: 3.0,
            seek_pulse_ms: 50,
            error_skip_delay_ms: 1500,
            shuffle: false,
        }
    }
}

impl PlaybackConfig {
    /// How long a seek stays published
    pub fn seek_pulse(&self) -> Duration {
        Duration::from_millis(self.seek_pulse_ms)
    }

    /// Wait before skipping an unplayable item
    pub fn error_skip_delay(&self) -> Duration {
        Duration::from_millis(self.error_skip_delay_ms)
    }

    /// Reject values that would make the transport behave nonsensically
    pub fn validate(&self) -> Result<()> {
        if !self.restart_threshold_secs.is_finite() || self.restart_threshold_secs < 0.0 {
            return Err(PlaybackError::InvalidConfig(format!(
                "restart threshold must be a non-negative number of seconds, got {}",
                self.restart_threshold_secs
            )));
        }

        if self.seek_pulse_ms == 0 {
            return Err(PlaybackError::InvalidConfig(
                "seek pulse must be at least 1ms".to_string(),
            ));
        }

        Ok(())
    }
}
