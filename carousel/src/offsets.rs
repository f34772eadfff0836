use alloc::vec::Vec;

use crate::{CarouselError, InvalidInput, ItemDimensions};

/// Cumulative x-offsets over an ordered sequence of item widths.
///
/// The index is immutable: a re-measurement builds a new one and swaps it in wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemOffsetIndex {
    items: Vec<ItemDimensions>,
    total_width: f64,
}

impl ItemOffsetIndex {
    /// Builds the index from widths in display order.
    ///
    /// Fails when `widths` is empty or contains a negative or non-finite width.
    pub fn build(widths: impl IntoIterator<Item = f64>) -> Result<Self, CarouselError> {
        let widths = widths.into_iter();
        let mut items = Vec::with_capacity(widths.size_hint().0);
        let mut x_offset = 0.0;
        for (index, width) in widths.enumerate() {
            if !width.is_finite() || width < 0.0 {
                return Err(InvalidInput::BadWidth { index, width }.into());
            }
            items.push(ItemDimensions { width, x_offset });
            x_offset += width;
        }
        if items.is_empty() {
            return Err(InvalidInput::NoItems.into());
        }
        Ok(Self {
            items,
            total_width: x_offset,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; an index cannot be built over zero items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_width(&self) -> f64 {
        self.total_width
    }

    pub fn as_slice(&self) -> &[ItemDimensions] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDimensions> {
        self.items.iter()
    }

    pub fn offset_of(&self, index: usize) -> Result<ItemDimensions, CarouselError> {
        self.items
            .get(index)
            .copied()
            .ok_or(CarouselError::IndexOutOfRange {
                index,
                count: self.items.len(),
            })
    }

    /// Returns the item that owns `absolute_offset` (a distance from the start of the content).
    ///
    /// Items are scanned front to back, advancing while an item still starts at or before the
    /// offset, so:
    /// - an offset inside `[x_offset, x_offset + width)` resolves to that item,
    /// - `0` always resolves to the first item,
    /// - offsets past the last item resolve to the last item,
    /// - negative offsets resolve to the first item.
    pub fn item_at(&self, absolute_offset: f64) -> usize {
        if absolute_offset == 0.0 {
            return 0;
        }
        // Offsets are non-decreasing, so this is the count of items starting at or before the
        // offset.
        let started = self
            .items
            .partition_point(|item| item.x_offset <= absolute_offset);
        started.saturating_sub(1)
    }
}
