//! Encore - Playback Management
//!
//! Platform-agnostic now-playing management for the Encore archive player.
//!
//! This crate provides:
//! - Queue controller (select/play, toggle, next, previous, shuffle, seek)
//! - Restart-on-previous threshold
//! - Anti-repeat shuffle pick (queue order is never changed)
//! - Fire-and-forget seek pulses
//! - Event log for subscribers
//! - Async host with snapshot/event subscriptions and adapter driving
//!
//! # Architecture
//!
//! `encore-playback` does no media I/O:
//! - [`PlaybackQueueController`] is a synchronous state machine with no
//!   fallible operations
//! - [`PlayerHost`] owns one controller per process, serialises access and
//!   runs the seek-pulse and error-skip timers on tokio
//! - Real playback is provided by a [`PlaybackAdapter`] implementation
//!
//! # Example: Controller
//!
//! ```rust
//! use encore_core::PlayableItem;
//! use encore_playback::{PlaybackConfig, PlaybackQueueController};
//!
//! let mut controller = PlaybackQueueController::new(PlaybackConfig::default());
//!
//! let a = PlayableItem::new("a", "Opening").with_audio("a.mp3");
//! let b = PlayableItem::new("b", "Encore").with_audio("b.mp3");
//!
//! controller.select_and_play(a.clone(), Some(vec![a, b]));
//! assert!(controller.is_playing());
//!
//! controller.advance();
//! assert_eq!(controller.current_index(), Some(1));
//!
//! controller.advance(); // wraps
//! assert_eq!(controller.current_index(), Some(0));
//! ```
//!
//! # Example: Host
//!
//! ```rust,no_run
//! use encore_core::PlayableItem;
//! use encore_playback::{AdapterEvent, DetachedAdapter, PlaybackConfig, PlayerHost};
//!
//! # async fn run() -> encore_playback::Result<()> {
//! let host = PlayerHost::new(PlaybackConfig::default(), Box::new(DetachedAdapter))?;
//! let mut updates = host.subscribe();
//!
//! host.select_and_play(PlayableItem::new("a", "Opening").with_audio("a.mp3"), None)
//!     .await;
//! host.handle_adapter_event(AdapterEvent::Progress { seconds: 12.0 }).await;
//!
//! updates.changed().await.ok();
//! println!("{:?}", updates.borrow().state.progress_seconds);
//! # Ok(())
//! # }
//! ```

mod adapter;
mod controller;
mod error;
pub mod events;
mod host;
mod queue;
mod shuffle;
pub mod types;

// Public exports
pub use adapter::{AdapterEvent, DetachedAdapter, PlaybackAdapter};
pub use controller::PlaybackQueueController;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use host::PlayerHost;
pub use shuffle::pick_shuffled_index;
pub use types::{PlaybackConfig, PlaybackSnapshot, PlaybackState, SeekPulse};
