/// A contiguous run of items rendered together at one vertical position.
///
/// The rendering surface mounts items `[start, start + count)` inside a
/// single positioned container at `offset`, `pixel_height` tall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentDescriptor {
    /// First item index covered by this segment.
    pub start: usize,
    /// Number of items covered.
    pub count: usize,
    /// Vertical pixel position of the segment's first item.
    pub offset: u64,
    /// Sum of the member items' heights, estimates included.
    pub pixel_height: u64,
}

impl SegmentDescriptor {
    /// Exclusive end index.
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.count)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end()
    }
}

/// The scroll container's content box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentRect {
    pub width: u32,
    pub height: u32,
}

/// Measured intrinsic size of a loaded item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemLayout {
    pub width: u32,
    pub height: u32,
}

/// Fine-grained invalidation keys for the engine's observable state.
///
/// Watchers subscribe to exactly the keys they read (see
/// [`crate::Engine::watch`]); events that only dirty other keys never reach
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateKey {
    /// The materialized item count grew.
    ViewCount,
    /// Container dimensions changed.
    Viewport,
    /// The cached scroll offset changed.
    ScrollOffset,
    /// The transient resizing flag toggled.
    Resizing,
    /// One or more segment descriptors changed.
    Segments,
    /// The total scrollable height changed.
    ListHeight,
    /// A single item loaded, failed, or was re-measured.
    Item(usize),
}
