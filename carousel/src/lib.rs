//! A headless interaction engine for touch-driven horizontal carousels.
//!
//! For adapter-level utilities (controller, snap tweens, lightbox), see the `carousel-adapter`
//! crate.
//!
//! This crate holds the stateful parts of a gallery/slider: cumulative item offsets with
//! offset → item lookup, a translation engine that turns pan deltas into translations with
//! rubber-band resistance past the edges and snap decisions at gesture end, and a coordinator
//! that gates re-measurement on deferred resources (e.g. lazily loaded images).
//!
//! It is UI-agnostic. A TUI/GUI/DOM layer is expected to provide:
//! - a normalized pan-gesture stream (cumulative `delta_x`, plus a final event)
//! - container and item widths, re-reported after layout changes
//! - a render target that applies (optionally animated) translations
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod error;
mod geometry;
mod key;
mod lazy;
mod offsets;
mod options;
mod state;
mod types;


pub use engine::TranslationEngine;
pub use error::{CarouselError, InvalidInput};
pub use geometry::{FixedGeometry, GeometryProvider};
pub use key::ResourceKey;
pub use lazy::{
    Completion, LazyLoadCoordinator, LoadEventCallback, ResourceDescriptor, ResourceLoader,
};
pub use offsets::ItemOffsetIndex;
pub use options::{
    DEFAULT_RESISTANCE_LEVEL, DEFAULT_SNAP_DURATION_MS, SliderEventCallback, SliderOptions,
};
pub use state::{LoadPhase, LoadProgress, SliderState};
pub use types::{
    Boundary, BoundaryContact, ItemDimensions, LoadEvent, PanDelta, Snap, SliderEvent,
    Translation,
};
