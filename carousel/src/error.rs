/// Why the geometry or options handed to the carousel were rejected.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidInput {
    #[error("at least one item width is required")]
    NoItems,
    #[error("width of item {index} must be finite and non-negative (got {width})")]
    BadWidth { index: usize, width: f64 },
    #[error("container width must be finite and non-negative (got {width})")]
    BadContainerWidth { width: f64 },
    #[error("resistance level must be finite and greater than zero (got {level})")]
    BadResistanceLevel { level: f64 },
}

/// Errors surfaced by the carousel core.
///
/// Construction failures are fatal to the component: callers are expected to abort
/// initialization rather than keep a partially interactive carousel around.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum CarouselError {
    /// `ItemOffsetIndex::build` received unusable widths.
    #[error("invalid item widths: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// The engine could not be initialized from its geometry.
    #[error("carousel construction failed: {0}")]
    Construction(#[source] InvalidInput),

    /// An item index outside `[0, count)` was requested.
    #[error("item index {index} is out of range (count={count})")]
    IndexOutOfRange { index: usize, count: usize },
}

impl CarouselError {
    /// Re-labels a build failure as a construction failure.
    pub(crate) fn into_construction(self) -> Self {
        match self {
            Self::InvalidInput(reason) => Self::Construction(reason),
            other => other,
        }
    }
}
