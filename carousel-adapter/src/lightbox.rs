use alloc::string::String;
use alloc::vec::Vec;

use carousel::{CarouselError, ResourceDescriptor};

/// One slide of the expanded view.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightboxEntry {
    /// Full-size source for the expanded view.
    pub source_ref: String,
    pub caption: Option<String>,
}

impl LightboxEntry {
    pub fn new(source_ref: impl Into<String>) -> Self {
        Self {
            source_ref: source_ref.into(),
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Open/closed state of the expanded lightbox view.
///
/// Building and showing the markup is the adapter's job; this only tracks which entry (if any)
/// is on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lightbox {
    entries: Vec<LightboxEntry>,
    active: Option<usize>,
}

impl Lightbox {
    pub fn new(entries: impl IntoIterator<Item = LightboxEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            active: None,
        }
    }

    /// One entry per resource, in order, without captions.
    pub fn from_resources<K>(resources: &[ResourceDescriptor<K>]) -> Self {
        Self::new(
            resources
                .iter()
                .map(|r| LightboxEntry::new(r.source_ref.clone())),
        )
    }

    pub fn entries(&self) -> &[LightboxEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_entry(&self) -> Option<&LightboxEntry> {
        self.entries.get(self.active?)
    }

    /// Opens on the first entry. Returns `false` when there is nothing to show.
    pub fn open(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.active.get_or_insert(0);
        true
    }

    pub fn open_at(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.entries.len() {
            return Err(CarouselError::IndexOutOfRange {
                index,
                count: self.entries.len(),
            });
        }
        self.active = Some(index);
        Ok(())
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    /// Moves to the next entry, stopping at the last one. `None` while closed.
    pub fn show_next(&mut self) -> Option<usize> {
        let last = self.entries.len().checked_sub(1)?;
        let active = self.active.as_mut()?;
        *active = (*active + 1).min(last);
        Some(*active)
    }

    /// Moves to the previous entry, stopping at the first one. `None` while closed.
    pub fn show_previous(&mut self) -> Option<usize> {
        let active = self.active.as_mut()?;
        *active = active.saturating_sub(1);
        Some(*active)
    }
}
