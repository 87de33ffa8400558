//! Adapter utilities for the `lightbox` crate.
//!
//! The `lightbox` crate is UI-agnostic and focuses on the core windowing
//! math and state. This crate provides small, framework-neutral helpers
//! commonly needed by render layers:
//!
//! - A controller that forwards UI events and drives timers per frame
//! - Glide-based masking of window-slot jumps (optional; adapter-driven)
//!
//! This crate is intentionally framework-agnostic (no DOM/GPU bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod glide;

#[cfg(test)]
mod tests;

pub use controller::{Controller, DEFAULT_JUMP_DURATION_MS};
pub use glide::{Easing, SlotGlide};
