//! Playback Events
//!
//! Event-based communication for subscribers and the playback adapter.
//! The controller records events as it mutates state; the host drains them
//! after every operation and fans them out. Events are emitted for:
//! - Track changes (including restarting the same item)
//! - Play/pause flips
//! - Queue replacement and growth
//! - Seek pulses (requested and cleared)
//! - Adapter progress and duration reports

use crate::types::SeekPulse;
use encore_core::ItemId;
use serde::{Deserialize, Serialize};

/// Events emitted by the queue controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackEvent {
    /// Current item was (re)loaded; progress is back at zero
    TrackChanged {
        /// ID of the new current item
        item_id: ItemId,
        /// Position in the queue
        index: usize,
        /// ID of the item that was current before (may equal `item_id`)
        previous_item_id: Option<ItemId>,
    },

    /// Transport flag changed
    PlayStateChanged {
        /// New value of the flag
        is_playing: bool,
    },

    /// Shuffle flag changed
    ShuffleChanged {
        /// New value of the flag
        enabled: bool,
    },

    /// Queue contents were replaced wholesale
    QueueReplaced {
        /// New queue length
        length: usize,
    },

    /// An unknown item was appended to the queue
    QueueExtended {
        /// ID of the appended item
        item_id: ItemId,
        /// New queue length
        length: usize,
    },

    /// Seek instruction published for the adapter
    SeekRequested {
        /// Target position
        seconds: f64,
        /// Pulse that will clear it
        pulse: SeekPulse,
    },

    /// Seek instruction withdrawn (consumed or not)
    SeekCleared {
        /// Pulse that was cleared
        pulse: SeekPulse,
    },

    /// Adapter reported a new position
    ProgressReported {
        /// Position in seconds, unvalidated
        seconds: f64,
    },

    /// Adapter reported the track length
    DurationReported {
        /// Length in seconds, unvalidated
        seconds: f64,
    },
}

impl PlaybackEvent {
    /// High-frequency adapter reports, usually not worth logging
    pub fn is_report(&self) -> bool {
        matches!(
            self,
            PlaybackEvent::ProgressReported { .. } | PlaybackEvent::DurationReported { .. }
        )
    }
}
