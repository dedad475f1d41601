//! Encore Core
//!
//! Platform-agnostic domain types shared by the Encore archive player.
//!
//! This crate provides:
//! - **Domain Types**: `PlayableItem`, `ItemId`
//! - **Catalog**: the ordered song listing that feeds playback queues
//! - **Error Handling**: unified `EncoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use encore_core::{Catalog, ItemId, PlayableItem};
//!
//! let catalog = Catalog::from_items(vec![
//!     PlayableItem::new("a", "Opening").with_audio("https://cdn.example/a.mp3"),
//!     PlayableItem::new("b", "Encore").with_video("https://video.example/embed/b"),
//! ])
//! .unwrap();
//!
//! let queue = catalog.resolve(&[ItemId::new("b"), ItemId::new("a")]).unwrap();
//! assert_eq!(queue[0].title, "Encore");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use catalog::Catalog;
pub use error::{EncoreError, Result};
pub use types::{ItemId, PlayableItem};
