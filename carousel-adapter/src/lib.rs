//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the interaction state. This crate provides
//! small, framework-neutral helpers commonly needed by adapters:
//!
//! - A controller wiring gestures, geometry, deferred loads and a render target together
//! - Tween-based snap animations (adapter-driven, sampled per frame)
//! - Lightbox (expanded view) state
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod lightbox;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{Controller, RenderTarget};
pub use lightbox::{Lightbox, LightboxEntry};
pub use tween::{Easing, Tween};
