//! A headless windowing engine for effectively unbounded, variable-height
//! media lists.
//!
//! The engine maintains a small arena of window slots (two by default) over a
//! conceptually continuous list: slot positions and heights derive from
//! per-item layout that streams in asynchronously, the visible window tracks
//! scroll and resize events, and the materialized item count grows in fixed
//! quanta as the user approaches the end of it ("infinite scroll").
//!
//! It is UI-agnostic. A rendering layer is expected to provide:
//! - container geometry and raw scroll offsets
//! - item load completions (intrinsic width/height) from its data source
//!
//! and consumes segment descriptors, the total list height, and planned load
//! requests in return. Pixel decoding, transport, and visual chrome are all
//! external collaborators.
//!
//! For presentation-side helpers (window-jump masking, a framework-neutral
//! controller), see the `lightbox-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod error;
mod fenwick;
mod growth;
mod layout;
mod loader;
mod options;
mod segments;
mod types;
mod viewport;
mod watch;


pub use engine::Engine;
pub use error::ConfigError;
pub use options::{
    DEFAULT_ESTIMATE_HEIGHT, DEFAULT_GROWTH_THRESHOLD, DEFAULT_RESIZE_SETTLE_DELAY_MS,
    DEFAULT_SEGMENT_SLOTS, EngineOptions, EstimatePolicy,
};
pub use types::{ContentRect, ItemLayout, SegmentDescriptor, StateKey};
pub use watch::{Interest, ItemInterest, WatchCallback, WatcherId};
