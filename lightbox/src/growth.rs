/// Monotonic view-count growth in fixed request quanta.
///
/// The view count bounds which items exist for loading purposes. It starts
/// at a configured value, grows by `items_per_request` whenever the observed
/// coverage approaches the last materialized index, never exceeds the
/// dataset ceiling, and never shrinks within a session.
///
/// `highest_observed` is fed from the buffered visible coverage, not from
/// the segment arena. The arena's tail slot always ends at the last
/// materialized index while the viewport is unmeasured, so keying growth to
/// segment ranges would grow without bound before the first scroll; keying
/// it to what the user can actually see keeps growth demand-driven.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GrowthController {
    view_count: usize,
    items_per_request: usize,
    threshold: usize,
    ceiling: Option<usize>,
}

impl GrowthController {
    pub(crate) fn new(
        initial: usize,
        items_per_request: usize,
        threshold: usize,
        ceiling: Option<usize>,
    ) -> Self {
        let view_count = match ceiling {
            Some(ceiling) => initial.min(ceiling),
            None => initial,
        };
        Self {
            view_count,
            items_per_request,
            threshold,
            ceiling,
        }
    }

    pub(crate) fn view_count(&self) -> usize {
        self.view_count
    }

    /// Updates the dataset ceiling. The view count never shrinks, so a
    /// ceiling below the current count only stops further growth.
    pub(crate) fn set_ceiling(&mut self, ceiling: Option<usize>) {
        self.ceiling = ceiling;
    }

    /// Grows by one quantum when `highest_observed` is within the threshold
    /// of the last materialized index. Returns `true` when growth occurred.
    pub(crate) fn maybe_grow(&mut self, highest_observed: usize) -> bool {
        if self.view_count == 0 {
            return false;
        }
        if highest_observed.saturating_add(self.threshold) < self.view_count - 1 {
            return false;
        }
        let target = self.view_count.saturating_add(self.items_per_request);
        let next = match self.ceiling {
            Some(ceiling) => target.min(ceiling),
            None => target,
        };
        if next <= self.view_count {
            return false;
        }
        self.view_count = next;
        true
    }
}
