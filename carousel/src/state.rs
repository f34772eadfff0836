use crate::BoundaryContact;

/// A serializable snapshot of the engine's mutable state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderState {
    /// Translation currently applied to the content. Always `<= 0`.
    pub current_x: f64,
    /// Last cumulative delta seen in the current gesture; `0` between gestures.
    pub previous_delta: f64,
    pub container_width: f64,
    pub content_width: f64,
    pub boundary: BoundaryContact,
}

impl SliderState {
    /// Farthest left the content can travel without overshooting.
    pub fn min_x(&self) -> f64 {
        -(self.content_width - self.container_width).max(0.0)
    }
}

/// Where a [`crate::LazyLoadCoordinator`] is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadPhase {
    /// Not started yet.
    #[default]
    Idle,
    /// Started with nothing to load; never fires.
    Inert,
    /// Loads triggered, completions outstanding.
    Loading,
    /// `Ready` was fired. Terminal.
    Complete,
}

/// Loaded/total counters for a coordinator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadProgress {
    pub loaded: usize,
    pub total: usize,
}

impl LoadProgress {
    pub fn is_done(&self) -> bool {
        self.total > 0 && self.loaded == self.total
    }
}
