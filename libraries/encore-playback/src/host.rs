//! Playback host
//!
//! Process-wide store around a single [`PlaybackQueueController`]. Every
//! operation takes the lock, mutates the controller, then flushes:
//! 1. drained events drive the adapter and timers
//! 2. events are broadcast to event subscribers
//! 3. a fresh snapshot is published to state subscribers
//!
//! Two timers run as spawned tasks that re-enter through the same lock:
//! the seek pulse (clears a pending seek after `seek_pulse`) and the error
//! skip (advances past an item the adapter failed on after
//! `error_skip_delay`). Both must be used from within a tokio runtime.

use crate::{
    adapter::{AdapterEvent, AdapterSync, PlaybackAdapter},
    controller::PlaybackQueueController,
    error::Result,
    events::PlaybackEvent,
    types::{PlaybackConfig, PlaybackSnapshot, SeekPulse},
};
use encore_core::{ItemId, PlayableItem};
use std::sync::Arc;
use tokio::sync::{broadcast, watch, Mutex};

/// Capacity of the event fan-out; slow subscribers see `Lagged`
const EVENT_CHANNEL_CAPACITY: usize = 256;

struct HostInner {
    controller: PlaybackQueueController,
    adapter: Box<dyn PlaybackAdapter>,
    sync: AdapterSync,
}

struct Shared {
    config: PlaybackConfig,
    snapshots: watch::Sender<PlaybackSnapshot>,
    events: broadcast::Sender<PlaybackEvent>,
}

/// Shared handle to the now-playing store
///
/// Cheap to clone; all clones drive the same controller.
#[derive(Clone)]
pub struct PlayerHost {
    inner: Arc<Mutex<HostInner>>,
    shared: Arc<Shared>,
}

impl PlayerHost {
    /// Create a host with an empty queue
    pub fn new(config: PlaybackConfig, adapter: Box<dyn PlaybackAdapter>) -> Result<Self> {
        config.validate()?;
        let controller = PlaybackQueueController::new(config.clone());
        Ok(Self::from_controller(controller, adapter))
    }

    /// Wrap an existing controller (e.g. one with a seeded shuffle)
    pub fn from_controller(
        controller: PlaybackQueueController,
        adapter: Box<dyn PlaybackAdapter>,
    ) -> Self {
        let config = controller.config().clone();
        let (snapshots, _) = watch::channel(controller.snapshot());
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        tracing::info!(
            "Playback host ready (seek pulse {:?}, error skip {:?})",
            config.seek_pulse(),
            config.error_skip_delay()
        );

        Self {
            inner: Arc::new(Mutex::new(HostInner {
                controller,
                adapter,
                sync: AdapterSync::default(),
            })),
            shared: Arc::new(Shared {
                config,
                snapshots,
                events,
            }),
        }
    }

    // ===== Transport =====

    /// Play an item, optionally replacing the queue
    pub async fn select_and_play(&self, item: PlayableItem, new_queue: Option<Vec<PlayableItem>>) {
        self.apply(|c| c.select_and_play(item, new_queue)).await;
    }

    /// Flip between playing and paused
    pub async fn toggle_play(&self) {
        self.apply(PlaybackQueueController::toggle_play).await;
    }

    /// Move to the next item (random when shuffling)
    pub async fn advance(&self) {
        self.apply(PlaybackQueueController::advance).await;
    }

    /// Restart the current item or step back one
    pub async fn retreat(&self) {
        self.apply(PlaybackQueueController::retreat).await;
    }

    /// Flip shuffle mode
    pub async fn toggle_shuffle(&self) {
        self.apply(PlaybackQueueController::toggle_shuffle).await;
    }

    /// Publish a seek; it is withdrawn after the seek pulse regardless
    pub async fn seek(&self, seconds: f64) -> SeekPulse {
        self.apply(|c| c.seek(seconds)).await
    }

    // ===== Adapter reports =====

    /// Record the adapter's playback position
    pub async fn report_progress(&self, seconds: f64) {
        self.apply(|c| c.report_progress(seconds)).await;
    }

    /// Record the current item's length
    pub async fn report_duration(&self, seconds: f64) {
        self.apply(|c| c.report_duration(seconds)).await;
    }

    /// Route an adapter report
    ///
    /// `Ended` advances immediately; `Error` schedules a skip of the failing
    /// item after the configured delay. The skip is dropped if another item
    /// became current meanwhile. A pause during the delay does not cancel it,
    /// and the next item starts playing like any other advance.
    pub async fn handle_adapter_event(&self, event: AdapterEvent) {
        match event {
            AdapterEvent::Progress { seconds } => self.report_progress(seconds).await,
            AdapterEvent::Duration { seconds } => self.report_duration(seconds).await,
            AdapterEvent::Ended => {
                tracing::debug!("Adapter reported end of track");
                self.advance().await;
            }
            AdapterEvent::Error { message } => {
                let failed = self.inner.lock().await.controller.current_id().cloned();
                match failed {
                    Some(id) => {
                        tracing::warn!("Playback error on {}: {}", id, message);
                        self.schedule_error_skip(id);
                    }
                    None => tracing::warn!("Playback error with nothing loaded: {}", message),
                }
            }
        }
    }

    // ===== Subscriptions =====

    /// Current state copy
    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.shared.snapshots.borrow().clone()
    }

    /// Subscribe to state snapshots (latest value wins)
    pub fn subscribe(&self) -> watch::Receiver<PlaybackSnapshot> {
        self.shared.snapshots.subscribe()
    }

    /// Subscribe to discrete events
    pub fn subscribe_events(&self) -> broadcast::Receiver<PlaybackEvent> {
        self.shared.events.subscribe()
    }

    /// Active settings
    pub fn config(&self) -> &PlaybackConfig {
        &self.shared.config
    }

    // ===== Internal =====

    async fn apply<T>(&self, op: impl FnOnce(&mut PlaybackQueueController) -> T) -> T {
        let mut inner = self.inner.lock().await;
        let out = op(&mut inner.controller);
        self.flush(&mut inner);
        out
    }

    fn flush(&self, inner: &mut HostInner) {
        let events = inner.controller.drain_events();
        if events.is_empty() {
            return;
        }

        for event in &events {
            if !event.is_report() {
                tracing::debug!(?event, "Playback event");
            }
            if let PlaybackEvent::SeekRequested { pulse, .. } = event {
                self.schedule_seek_clear(*pulse);
            }
        }

        let HostInner {
            controller,
            adapter,
            sync,
        } = inner;
        if let Err((id, err)) = sync.apply(&events, controller.state(), &mut **adapter) {
            tracing::warn!("Adapter rejected {}: {}", id, err);
            self.schedule_error_skip(id);
        }

        for event in events {
            // No receivers is fine
            let _ = self.shared.events.send(event);
        }
        self.shared.snapshots.send_replace(controller.snapshot());
    }

    fn schedule_seek_clear(&self, pulse: SeekPulse) {
        let host = self.clone();
        let delay = self.shared.config.seek_pulse();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let cleared = host.apply(|c| c.clear_seek(pulse)).await;
            if !cleared {
                tracing::trace!("Seek pulse {:?} superseded", pulse);
            }
        });
    }

    fn schedule_error_skip(&self, failed: ItemId) {
        let host = self.clone();
        let delay = self.shared.config.error_skip_delay();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            host.apply(|c| {
                // User may have moved on while we waited
                if c.current_id() == Some(&failed) {
                    tracing::info!("Skipping unplayable item {}", failed);
                    c.advance();
                } else {
                    tracing::debug!("Error skip for {} dropped, item no longer current", failed);
                }
            })
            .await;
        });
    }
}
