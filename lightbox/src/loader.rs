use alloc::vec::Vec;

use crate::layout::LayoutStore;
use crate::segments::SegmentArena;

/// Ensures each item inside a live segment has exactly one in-flight or
/// completed load.
///
/// The pending guard is an explicit state transition set synchronously when
/// an index is first planned, so duplicate requests are impossible even
/// though the fetch itself completes asynchronously elsewhere. Failures
/// clear the guard but park the index: it stays suppressed while still
/// observed, and becomes eligible again once it leaves the live segments.
#[derive(Clone, Debug, Default)]
pub(crate) struct LoadScheduler {
    pending: Vec<bool>,
    parked: Vec<usize>,
}

impl LoadScheduler {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            pending: alloc::vec![false; len],
            parked: Vec::new(),
        }
    }

    pub(crate) fn ensure_len(&mut self, new_len: usize) {
        if self.pending.len() < new_len {
            self.pending.resize(new_len, false);
        }
    }

    pub(crate) fn is_pending(&self, index: usize) -> bool {
        self.pending.get(index).copied().unwrap_or(false)
    }

    /// Plans loads for every unloaded, unguarded index inside the live
    /// segments, pushing the chosen indices onto `out`.
    pub(crate) fn plan(&mut self, arena: &SegmentArena, layout: &LayoutStore, out: &mut Vec<usize>) {
        // A parked index that dropped out of the window becomes retryable.
        self.parked.retain(|&index| arena.contains(index));

        for segment in arena.slots() {
            for index in segment.start..segment.end() {
                if layout.is_loaded(index) || self.is_pending(index) {
                    continue;
                }
                if self.parked.contains(&index) {
                    continue;
                }
                self.pending[index] = true;
                out.push(index);
            }
        }
    }

    /// Clears the guard after a completed load.
    pub(crate) fn complete(&mut self, index: usize) {
        if let Some(pending) = self.pending.get_mut(index) {
            *pending = false;
        }
        self.parked.retain(|&parked| parked != index);
    }

    /// Clears the guard after a failed load and parks the index.
    pub(crate) fn fail(&mut self, index: usize) {
        let Some(pending) = self.pending.get_mut(index) else {
            return;
        };
        *pending = false;
        if !self.parked.contains(&index) {
            self.parked.push(index);
        }
    }
}
