//! Playback queue controller - core state machine
//!
//! Owns the now-playing state and is the only mutation surface for it.
//! States are implicit: empty queue, loaded-paused, loaded-playing.
//! None of the operations fail; unknown items and empty queues degrade to
//! permissive fallbacks or no-ops.

use crate::{
    events::PlaybackEvent,
    queue::Queue,
    shuffle::pick_shuffled_index,
    types::{PlaybackConfig, PlaybackSnapshot, PlaybackState, SeekPulse},
};
use encore_core::{ItemId, PlayableItem};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Central now-playing state machine
///
/// Transport operations:
/// - `select_and_play` - play an item, optionally from a new queue
/// - `toggle_play` - flip play/pause
/// - `advance` / `retreat` - next / previous (with restart threshold)
/// - `toggle_shuffle` - affects only how `advance` picks
/// - `seek` - publish a short-lived seek pulse for the adapter
///
/// Adapter reports arrive through `report_progress` and `report_duration`.
pub struct PlaybackQueueController {
    state: PlaybackState,
    queue: Queue,
    config: PlaybackConfig,

    // Pulse of the seek currently published, if any
    seek_pulse: Option<SeekPulse>,
    next_pulse: u64,

    rng: StdRng,

    // Event queue for subscribers and the adapter
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackQueueController {
    /// Create a controller with an empty queue
    pub fn new(config: PlaybackConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a controller with a deterministic shuffle sequence
    pub fn with_seed(config: PlaybackConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: PlaybackConfig, rng: StdRng) -> Self {
        let state = PlaybackState {
            is_shuffle_enabled: config.shuffle,
            ..PlaybackState::default()
        };

        Self {
            state,
            queue: Queue::new(),
            config,
            seek_pulse: None,
            next_pulse: 0,
            rng,
            pending_events: Vec::new(),
        }
    }

    // ===== Transport =====

    /// Play `item`, optionally replacing the queue first
    ///
    /// - Non-empty `new_queue`: becomes the queue; the item's position in it
    ///   (first match, or 0 if absent) becomes the current index.
    /// - Otherwise an empty queue becomes `[item]`; a non-empty queue is
    ///   searched by id and the item appended if missing.
    ///
    /// Selecting the item that is already current toggles play/pause and
    /// keeps the progress.
    pub fn select_and_play(&mut self, item: PlayableItem, new_queue: Option<Vec<PlayableItem>>) {
        let already_current = self
            .state
            .current_item
            .as_ref()
            .is_some_and(|current| current.same_item(&item));

        let index = match new_queue.filter(|queue| !queue.is_empty()) {
            Some(queue) => {
                self.queue.replace(queue);
                self.emit(PlaybackEvent::QueueReplaced {
                    length: self.queue.len(),
                });
                self.queue.position_of(&item.id).unwrap_or(0)
            }
            None if self.queue.is_empty() => {
                self.queue.replace(vec![item.clone()]);
                self.emit(PlaybackEvent::QueueReplaced { length: 1 });
                0
            }
            None => match self.queue.position_of(&item.id) {
                Some(index) => index,
                None => {
                    let index = self.queue.push(item.clone());
                    self.emit(PlaybackEvent::QueueExtended {
                        item_id: item.id.clone(),
                        length: self.queue.len(),
                    });
                    index
                }
            },
        };

        self.state.current_index = Some(index);

        if already_current {
            self.toggle_play();
        } else {
            self.load(item, index);
        }
    }

    /// Flip play/pause
    ///
    /// With nothing loaded the flag stays false.
    pub fn toggle_play(&mut self) {
        if self.state.current_item.is_none() {
            return;
        }
        self.set_playing(!self.state.is_playing);
    }

    /// Move to the next item (wrapping), or a shuffled pick
    ///
    /// No-op on an empty queue. Always starts playback of the chosen item,
    /// even if it is the item already current.
    pub fn advance(&mut self) {
        let current = self.state.current_index;
        let next = if self.state.is_shuffle_enabled {
            pick_shuffled_index(&mut self.rng, self.queue.len(), current)
        } else {
            self.queue.next_index(current)
        };

        if let Some(index) = next {
            self.load_index(index);
        }
    }

    /// Go to previous item
    ///
    /// If more than the restart threshold into the current item, seeks back
    /// to 0 instead and leaves the index alone. Otherwise moves one position
    /// back (wrapping) and starts playback.
    pub fn retreat(&mut self) {
        if self.state.progress_seconds > self.config.restart_threshold_secs {
            self.seek(0.0);
            return;
        }

        if let Some(index) = self.queue.previous_index(self.state.current_index) {
            self.load_index(index);
        }
    }

    /// Flip shuffle mode
    ///
    /// The queue order is never touched; only the next `advance` pick changes.
    pub fn toggle_shuffle(&mut self) {
        self.state.is_shuffle_enabled = !self.state.is_shuffle_enabled;
        self.emit(PlaybackEvent::ShuffleChanged {
            enabled: self.state.is_shuffle_enabled,
        });
    }

    // ===== Seek =====

    /// Publish a seek instruction for the adapter
    ///
    /// The instruction is fire-and-forget: the host clears it with
    /// [`clear_seek`](Self::clear_seek) after `seek_pulse` whether or not the
    /// adapter ever read it.
    pub fn seek(&mut self, seconds: f64) -> SeekPulse {
        let pulse = SeekPulse(self.next_pulse);
        self.next_pulse += 1;

        self.state.pending_seek_seconds = Some(seconds);
        self.seek_pulse = Some(pulse);
        self.emit(PlaybackEvent::SeekRequested { seconds, pulse });

        pulse
    }

    /// Withdraw the seek instruction published with `pulse`
    ///
    /// Returns false (and changes nothing) if a newer seek replaced it or it
    /// was already cleared.
    pub fn clear_seek(&mut self, pulse: SeekPulse) -> bool {
        if self.seek_pulse != Some(pulse) {
            return false;
        }

        self.seek_pulse = None;
        self.state.pending_seek_seconds = None;
        self.emit(PlaybackEvent::SeekCleared { pulse });
        true
    }

    // ===== Adapter reports =====

    /// Adapter position report (no validation, NaN passes through)
    pub fn report_progress(&mut self, seconds: f64) {
        self.state.progress_seconds = seconds;
        self.emit(PlaybackEvent::ProgressReported { seconds });
    }

    /// Adapter duration report (no validation, NaN passes through)
    pub fn report_duration(&mut self, seconds: f64) {
        self.state.duration_seconds = seconds;
        self.emit(PlaybackEvent::DurationReported { seconds });
    }

    // ===== State Queries =====

    /// Full now-playing record
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Item currently loaded, if any
    pub fn current_item(&self) -> Option<&PlayableItem> {
        self.state.current_item.as_ref()
    }

    /// Id of the current item
    pub fn current_id(&self) -> Option<&ItemId> {
        self.state.current_item.as_ref().map(|item| &item.id)
    }

    /// Position of the current item in the queue
    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index
    }

    /// Whether playback is running
    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Whether advance picks a random item
    pub fn is_shuffle_enabled(&self) -> bool {
        self.state.is_shuffle_enabled
    }

    /// Last reported position
    pub fn progress_seconds(&self) -> f64 {
        self.state.progress_seconds
    }

    /// Last reported length of the current item
    pub fn duration_seconds(&self) -> f64 {
        self.state.duration_seconds
    }

    /// Seek target while its pulse is live
    pub fn pending_seek_seconds(&self) -> Option<f64> {
        self.state.pending_seek_seconds
    }

    /// Pulse of the currently published seek
    pub fn seek_pulse(&self) -> Option<SeekPulse> {
        self.seek_pulse
    }

    /// Queue items in traversal order
    pub fn queue(&self) -> &[PlayableItem] {
        self.queue.items()
    }

    /// Number of queued items
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Active settings
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Copy of the state for subscribers
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            state: self.state.clone(),
            queue: self.queue.ids(),
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns every event recorded since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    fn load_index(&mut self, index: usize) {
        if let Some(item) = self.queue.get(index).cloned() {
            self.state.current_index = Some(index);
            self.load(item, index);
        }
    }

    /// Make `item` current, reset progress and start playing
    fn load(&mut self, item: PlayableItem, index: usize) {
        let previous_item_id = self.state.current_item.take().map(|prev| prev.id);
        let item_id = item.id.clone();

        self.state.current_item = Some(item);
        self.state.progress_seconds = 0.0;

        self.emit(PlaybackEvent::TrackChanged {
            item_id,
            index,
            previous_item_id,
        });
        self.set_playing(true);
    }

    fn set_playing(&mut self, is_playing: bool) {
        if self.state.is_playing != is_playing {
            self.state.is_playing = is_playing;
            self.emit(PlaybackEvent::PlayStateChanged { is_playing });
        }
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }
}

impl Default for PlaybackQueueController {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}
