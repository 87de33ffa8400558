use alloc::vec::Vec;

use crate::fenwick::Fenwick;
use crate::{EstimatePolicy, ItemLayout};

/// Owns per-item geometry and the derived cumulative offsets.
///
/// Heights are placeholder estimates until an item's intrinsic size is
/// recorded. Entries are permanent for the session: a load completing after
/// its item scrolled away is still recorded. Cumulative sums live in a
/// Fenwick tree so offset queries and corrections stay cheap under
/// scroll-rate recomputation.
#[derive(Clone, Debug)]
pub(crate) struct LayoutStore {
    widths: Vec<u32>,
    heights: Vec<u32>,
    loaded: Vec<bool>,
    sums: Fenwick,
    estimate: EstimatePolicy,
    loaded_count: u64,
    loaded_height_total: u64,
}

impl LayoutStore {
    pub(crate) fn new(estimate: EstimatePolicy, len: usize) -> Self {
        let mut store = Self {
            widths: Vec::new(),
            heights: Vec::new(),
            loaded: Vec::new(),
            sums: Fenwick::new(0),
            estimate,
            loaded_count: 0,
            loaded_height_total: 0,
        };
        store.ensure_len(len);
        store
    }

    pub(crate) fn len(&self) -> usize {
        self.heights.len()
    }

    /// Appends placeholder entries so the store covers `[0, new_len)`.
    ///
    /// The estimate is sampled per appended index and frozen until the item
    /// is measured.
    pub(crate) fn ensure_len(&mut self, new_len: usize) {
        self.widths.reserve(new_len.saturating_sub(self.widths.len()));
        self.heights
            .reserve(new_len.saturating_sub(self.heights.len()));
        while self.heights.len() < new_len {
            let height = self
                .estimate
                .sample(self.loaded_count, self.loaded_height_total);
            self.widths.push(0);
            self.heights.push(height);
            self.loaded.push(false);
            self.sums.push_value(height as u64);
        }
    }

    /// Records an item's measured size, returning the height delta applied
    /// to cumulative sums (`0` when idempotent or out of range).
    ///
    /// Re-recording a different height shifts every later cumulative value
    /// by exactly the delta; earlier offsets are untouched.
    pub(crate) fn record(&mut self, index: usize, width: u32, height: u32) -> i64 {
        if index >= self.heights.len() {
            return 0;
        }
        self.widths[index] = width;

        let cur = self.heights[index];
        let delta = height as i64 - cur as i64;
        if !self.loaded[index] {
            self.loaded[index] = true;
            self.loaded_count += 1;
            self.loaded_height_total = self.loaded_height_total.saturating_add(height as u64);
        } else if delta != 0 {
            self.loaded_height_total = self.loaded_height_total.saturating_add_signed(delta);
        }

        if delta == 0 {
            return 0;
        }
        self.heights[index] = height;
        self.sums.add(index, delta);
        delta
    }

    pub(crate) fn is_loaded(&self, index: usize) -> bool {
        self.loaded.get(index).copied().unwrap_or(false)
    }

    /// Current height for an index: the measurement when loaded, otherwise
    /// the frozen estimate.
    pub(crate) fn height(&self, index: usize) -> Option<u32> {
        self.heights.get(index).copied()
    }

    /// Measured intrinsic size; `None` until the item loads.
    pub(crate) fn item_layout(&self, index: usize) -> Option<ItemLayout> {
        self.is_loaded(index).then(|| ItemLayout {
            width: self.widths[index],
            height: self.heights[index],
        })
    }

    /// Cumulative height of items `[0, index)`.
    pub(crate) fn offset_of(&self, index: usize) -> u64 {
        self.sums.prefix_sum(index)
    }

    /// Summed heights of items `[start, end)`.
    pub(crate) fn span(&self, start: usize, end: usize) -> u64 {
        self.sums
            .prefix_sum(end)
            .saturating_sub(self.sums.prefix_sum(start))
    }

    pub(crate) fn total_height(&self) -> u64 {
        self.sums.total()
    }

    /// Maps a pixel offset to the item occupying it (clamped to the last
    /// index). `None` only when the store is empty.
    pub(crate) fn index_at(&self, offset: u64) -> Option<usize> {
        let len = self.heights.len();
        if len == 0 {
            return None;
        }
        Some(self.sums.lower_bound(offset).min(len - 1))
    }
}
