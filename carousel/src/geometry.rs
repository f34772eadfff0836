use alloc::vec::Vec;

/// Reports the measured layout of a carousel.
///
/// The engine never detects layout changes on its own: adapters call
/// [`crate::TranslationEngine::remeasure`] after a resize or after deferred content loaded.
pub trait GeometryProvider {
    /// Inner width of the visible container.
    fn container_inner_width(&self) -> f64;

    /// Widths of the items in display order.
    fn item_widths(&self) -> Vec<f64>;
}

/// A fixed layout, handy for tests and for adapters that measure up front.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedGeometry {
    pub container_width: f64,
    pub item_widths: Vec<f64>,
}

impl FixedGeometry {
    pub fn new(container_width: f64, item_widths: impl Into<Vec<f64>>) -> Self {
        Self {
            container_width,
            item_widths: item_widths.into(),
        }
    }
}

impl GeometryProvider for FixedGeometry {
    fn container_inner_width(&self) -> f64 {
        self.container_width
    }

    fn item_widths(&self) -> Vec<f64> {
        self.item_widths.clone()
    }
}
