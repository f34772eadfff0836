/// Geometry of one carousel item along the horizontal axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDimensions {
    pub width: f64,
    /// Sum of the widths of all preceding items.
    pub x_offset: f64,
}

impl ItemDimensions {
    pub fn end(&self) -> f64 {
        self.x_offset + self.width
    }

    /// Half-open containment: `x_offset <= offset < end()`.
    pub fn contains(&self, offset: f64) -> bool {
        self.x_offset <= offset && offset < self.end()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    Left,
    Right,
}

/// Which travel boundaries the latest boundary check tripped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryContact {
    pub left: bool,
    pub right: bool,
}

impl BoundaryContact {
    pub const NONE: Self = Self {
        left: false,
        right: false,
    };

    pub fn any(&self) -> bool {
        self.left || self.right
    }

    /// The boundary a snap-back returns to. Right wins when both are set.
    pub fn snap_boundary(&self) -> Option<Boundary> {
        if self.right {
            Some(Boundary::Right)
        } else if self.left {
            Some(Boundary::Left)
        } else {
            None
        }
    }
}

/// One normalized event from the gesture source.
///
/// `delta_x` is cumulative since the start of the gesture, as reported by pan recognizers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanDelta {
    pub delta_x: f64,
    pub is_final: bool,
}

impl PanDelta {
    pub fn moving(delta_x: f64) -> Self {
        Self {
            delta_x,
            is_final: false,
        }
    }

    pub fn end(delta_x: f64) -> Self {
        Self {
            delta_x,
            is_final: true,
        }
    }
}

/// A command for the render target.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Translation {
    pub x: f64,
    /// `true` for snaps: the render target should animate towards `x`.
    pub animated: bool,
}

impl Translation {
    pub fn immediate(x: f64) -> Self {
        Self { x, animated: false }
    }

    pub fn animated(x: f64) -> Self {
        Self { x, animated: true }
    }
}

/// Why a gesture ended where it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Snap {
    /// Returned inside the travel range after overshooting a boundary.
    Back(Boundary),
    /// Aligned the start of an item with the container's left edge.
    Item(usize),
    /// Item snapping is disabled; the content stays where it was released.
    Released,
}

/// Signals emitted by [`crate::TranslationEngine`] to its registered listener.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SliderEvent {
    /// A pan step crossed a boundary and was resisted.
    ResistedMove {
        raw_x: f64,
        x: f64,
        contact: BoundaryContact,
    },
    /// A gesture end (or programmatic navigation) settled on `x`.
    Snapped { x: f64, snap: Snap },
}

/// Signals emitted by [`crate::LazyLoadCoordinator`] to its registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadEvent {
    /// Loads were triggered; `pending` resources are outstanding.
    Loading { pending: usize },
    /// Every resource finished loading. Fired exactly once.
    Ready,
}
