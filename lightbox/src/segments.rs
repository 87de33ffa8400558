use alloc::vec::Vec;

use crate::SegmentDescriptor;
use crate::layout::LayoutStore;

/// Result of a re-windowing pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Rewindow {
    /// Some slot descriptor differs from the previous pass.
    pub(crate) changed: bool,
    /// Slot 0 was re-assigned to an index range disjoint from its previous
    /// one: the window teleported rather than slid.
    pub(crate) jumped: bool,
}

/// An arena of window slots over the item list.
///
/// Slot ranges are always adjacent (`slot[i + 1]` starts where `slot[i]`
/// ends), so they are disjoint and their union is contiguous and gap-free by
/// construction. Two regimes:
///
/// - *base split*, while the viewport is unmeasured: slot 0 holds the first
///   request quantum, the final slot the remaining tail, so every
///   materialized item is covered.
/// - *re-windowed*, once coverage is known: slot 0 tracks the buffered
///   visible range and each following slot takes up to one quantum more.
#[derive(Clone, Debug)]
pub(crate) struct SegmentArena {
    slots: Vec<SegmentDescriptor>,
}

impl SegmentArena {
    pub(crate) fn new(slot_count: usize) -> Self {
        Self {
            slots: alloc::vec![SegmentDescriptor::default(); slot_count],
        }
    }

    pub(crate) fn slots(&self) -> &[SegmentDescriptor] {
        &self.slots
    }

    pub(crate) fn contains(&self, index: usize) -> bool {
        self.slots.iter().any(|slot| slot.contains(index))
    }

    /// Recomputes every slot from the current layout and viewport coverage.
    ///
    /// `coverage` is the buffered visible index range `[start, end)`, or
    /// `None` while the viewport has no measured height.
    pub(crate) fn rewindow(
        &mut self,
        layout: &LayoutStore,
        coverage: Option<(usize, usize)>,
        view_count: usize,
        items_per_request: usize,
    ) -> Rewindow {
        let prev_head = self.slots[0];
        let slot_count = self.slots.len();
        let mut changed = false;
        let mut cursor = 0usize;

        for slot in 0..slot_count {
            let (start, end) = if view_count == 0 {
                (0, 0)
            } else {
                match coverage {
                    None => {
                        if slot == 0 {
                            (0, items_per_request.min(view_count))
                        } else if slot == slot_count - 1 {
                            (cursor, view_count)
                        } else {
                            (cursor, cursor.saturating_add(items_per_request).min(view_count))
                        }
                    }
                    Some((cov_start, cov_end)) => {
                        if slot == 0 {
                            (cov_start.min(view_count), cov_end.min(view_count))
                        } else {
                            (cursor, cursor.saturating_add(items_per_request).min(view_count))
                        }
                    }
                }
            };
            cursor = end;

            let desc = SegmentDescriptor {
                start,
                count: end - start,
                offset: layout.offset_of(start),
                pixel_height: layout.span(start, end),
            };
            if self.slots[slot] != desc {
                self.slots[slot] = desc;
                changed = true;
            }
        }

        let head = self.slots[0];
        let jumped = changed
            && !prev_head.is_empty()
            && !head.is_empty()
            && (head.start >= prev_head.end() || head.end() <= prev_head.start);
        Rewindow { changed, jumped }
    }
}
