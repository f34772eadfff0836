use alloc::sync::Arc;

use crate::SliderEvent;

/// Divisor floor of the resistance curve applied past a boundary.
pub const DEFAULT_RESISTANCE_LEVEL: f64 = 15.0;

/// Default duration handed to the animation driver for snaps.
pub const DEFAULT_SNAP_DURATION_MS: u64 = 300;

/// The listener registered on a [`crate::TranslationEngine`].
pub type SliderEventCallback = Arc<dyn Fn(&SliderEvent) + Send + Sync>;

/// Configuration for [`crate::TranslationEngine`].
///
/// Every engine takes its own value at construction; `SliderOptions::new()` builds a fresh one
/// each call, so instances never share a mutable default.
pub struct SliderOptions {
    /// Resistance past a boundary: a step `d` moves the content by
    /// `d / (|d| / content_width + resistance_level)`.
    ///
    /// Must be finite and greater than zero; the engine refuses to build otherwise.
    pub resistance_level: f64,

    /// Whether a gesture that ends inside the travel range snaps to an item.
    ///
    /// When disabled, only boundary snap-back happens and the content otherwise stays where it
    /// was released.
    pub snap_to_items: bool,

    /// Duration the render target should use when animating a snap.
    pub snap_duration_ms: u64,

    /// Optional listener for [`SliderEvent`]s.
    pub on_event: Option<SliderEventCallback>,
}

impl Clone for SliderOptions {
    fn clone(&self) -> Self {
        Self {
            resistance_level: self.resistance_level,
            snap_to_items: self.snap_to_items,
            snap_duration_ms: self.snap_duration_ms,
            on_event: self.on_event.clone(),
        }
    }
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderOptions {
    pub fn new() -> Self {
        Self {
            resistance_level: DEFAULT_RESISTANCE_LEVEL,
            snap_to_items: true,
            snap_duration_ms: DEFAULT_SNAP_DURATION_MS,
            on_event: None,
        }
    }

    pub fn with_resistance_level(mut self, resistance_level: f64) -> Self {
        self.resistance_level = resistance_level;
        self
    }

    pub fn with_snap_to_items(mut self, snap_to_items: bool) -> Self {
        self.snap_to_items = snap_to_items;
        self
    }

    pub fn with_snap_duration_ms(mut self, snap_duration_ms: u64) -> Self {
        self.snap_duration_ms = snap_duration_ms;
        self
    }

    pub fn with_on_event(
        mut self,
        on_event: Option<impl Fn(&SliderEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_event = on_event.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for SliderOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SliderOptions")
            .field("resistance_level", &self.resistance_level)
            .field("snap_to_items", &self.snap_to_items)
            .field("snap_duration_ms", &self.snap_duration_ms)
            .field("on_event", &self.on_event.is_some())
            .finish()
    }
}
