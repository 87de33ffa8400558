use alloc::sync::Arc;
use alloc::vec::Vec;
use core::mem;

use crate::growth::GrowthController;
use crate::layout::LayoutStore;
use crate::loader::LoadScheduler;
use crate::segments::SegmentArena;
use crate::viewport::ViewportTracker;
use crate::watch::Watchers;
use crate::{
    ConfigError, ContentRect, EngineOptions, Interest, ItemLayout, SegmentDescriptor, StateKey,
    WatcherId,
};

/// A headless windowing engine for variable-height media lists.
///
/// The engine is single-threaded and event-driven: collaborators submit
/// scroll samples, resize geometry, and load completions, and read segment
/// descriptors, the total list height, and the planned load requests back.
/// All mutations happen synchronously inside the handler that received the
/// event; the only asynchronous boundary is the item fetch itself, which is
/// fire-and-forget from the engine's perspective and re-enters through
/// [`Self::complete_load`] / [`Self::fail_load`].
///
/// Every event runs the same closed loop: grow the view count if the
/// buffered coverage approaches its end, re-window the segment arena, then
/// plan loads for newly observed items. Each recomputation is driven by a
/// discrete event, so the loop cannot recurse.
///
/// For presentation-side transitions (window-jump masking), see the
/// `lightbox-adapter` crate.
#[derive(Clone, Debug)]
pub struct Engine {
    options: EngineOptions,
    layout: LayoutStore,
    viewport: ViewportTracker,
    arena: SegmentArena,
    loader: LoadScheduler,
    growth: GrowthController,
    watchers: Watchers,
    requests: Vec<usize>,
    dirty: Vec<StateKey>,
    batch_depth: usize,
    window_jumped: bool,
}

impl Engine {
    /// Creates an engine from validated options.
    ///
    /// The initial load plan (covering the base segment split) is queued
    /// immediately; drain it with [`Self::drain_load_requests`].
    pub fn new(options: EngineOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        lbdebug!(
            items_per_request = options.items_per_request,
            initial_view_count = options.initial_view_count,
            buffer_margin = options.buffer_margin,
            "Engine::new"
        );
        let growth = GrowthController::new(
            options.initial_view_count,
            options.items_per_request,
            options.growth_threshold,
            options.total_items,
        );
        let view_count = growth.view_count();
        let mut engine = Self {
            layout: LayoutStore::new(options.estimate, view_count),
            viewport: ViewportTracker::new(options.resize_settle_delay_ms),
            arena: SegmentArena::new(options.segment_slots),
            loader: LoadScheduler::new(view_count),
            growth,
            watchers: Watchers::new(),
            requests: Vec::new(),
            dirty: Vec::new(),
            batch_depth: 0,
            window_jumped: false,
            options,
        };
        engine.recompute();
        // Nothing can be watching yet.
        engine.dirty.clear();
        engine.window_jumped = false;
        Ok(engine)
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    // ---- inbound events -------------------------------------------------

    /// Applies a raw scroll sample.
    ///
    /// Offsets beyond the scrollable range are the caller's to clamp; see
    /// [`Self::handle_scroll_clamped`] for the convenience entry point.
    pub fn handle_scroll(&mut self, offset: u64) {
        if !self.viewport.on_scroll(offset) {
            return;
        }
        lbtrace!(offset, "handle_scroll");
        self.mark(StateKey::ScrollOffset);
        self.recompute();
        self.flush();
    }

    /// Applies a scroll sample clamped to the scrollable range.
    pub fn handle_scroll_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.handle_scroll(clamped);
    }

    /// Applies a container resize event.
    ///
    /// `is_resizing` raises immediately and settles through [`Self::tick`]
    /// once the configured delay passes without further resize events. A
    /// resize reporting unchanged dimensions only restarts the settle
    /// deadline; it does not re-run layout.
    pub fn handle_resize(&mut self, width: u32, height: u32, now_ms: u64) {
        let was_resizing = self.viewport.is_resizing();
        let changed = self.viewport.on_resize(width, height, now_ms);
        lbtrace!(width, height, now_ms, changed, "handle_resize");
        if !was_resizing {
            self.mark(StateKey::Resizing);
        }
        if changed {
            self.mark(StateKey::Viewport);
            self.recompute();
        }
        self.flush();
    }

    /// Samples debounce deadlines.
    ///
    /// Returns `true` when `is_resizing` settled back to `false` during this
    /// call.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.viewport.update_settle(now_ms) {
            lbtrace!(now_ms, "resize settled");
            self.mark(StateKey::Resizing);
            self.flush();
            return true;
        }
        false
    }

    /// Records a completed item load.
    ///
    /// Idempotent for repeated identical sizes; a differing height shifts
    /// every later cumulative offset by exactly the delta. Out-of-range
    /// indices are ignored. An index that already scrolled out of every live
    /// segment is still recorded (layout entries are permanent), but only
    /// forces a re-window when segment positions actually shifted.
    pub fn complete_load(&mut self, index: usize, width: u32, height: u32) {
        if index >= self.view_count() {
            lbwarn!(
                index,
                view_count = self.view_count(),
                "complete_load: out-of-range index ignored"
            );
            return;
        }
        lbtrace!(index, width, height, "complete_load");
        self.loader.complete(index);
        let delta = self.layout.record(index, width, height);
        self.mark(StateKey::Item(index));
        if delta != 0 {
            self.mark(StateKey::ListHeight);
            self.recompute();
        }
        self.flush();
    }

    /// Records a failed item load.
    ///
    /// The item stays unloaded and absent from rendered output; it is not
    /// retried until it leaves and re-enters a live segment. Out-of-range
    /// indices are ignored.
    pub fn fail_load(&mut self, index: usize) {
        if index >= self.view_count() {
            lbwarn!(
                index,
                view_count = self.view_count(),
                "fail_load: out-of-range index ignored"
            );
            return;
        }
        lbdebug!(index, "fail_load");
        self.loader.fail(index);
        self.mark(StateKey::Item(index));
        self.flush();
    }

    /// Supplies the true dataset size, capping future view-count growth.
    ///
    /// The view count itself never shrinks within a session.
    pub fn set_total_items(&mut self, total_items: Option<usize>) {
        self.growth.set_ceiling(total_items);
    }

    /// Coalesces several updates into a single watcher flush.
    ///
    /// Recommended when one frame delivers scroll, resize, and load events
    /// together and the notification callback drives rendering.
    pub fn batch(&mut self, f: impl FnOnce(&mut Self)) {
        self.batch_depth = self.batch_depth.saturating_add(1);
        f(self);
        debug_assert!(self.batch_depth > 0, "batch depth underflow");
        self.batch_depth = self.batch_depth.saturating_sub(1);
        self.flush();
    }

    // ---- outbound surface -----------------------------------------------

    /// Current window slots.
    ///
    /// Slot 0 tracks the buffered viewport once geometry is known; the
    /// remaining slots cover the following request quanta. Ranges are
    /// adjacent, disjoint, and gap-free.
    pub fn segments(&self) -> &[SegmentDescriptor] {
        self.arena.slots()
    }

    pub fn segment(&self, slot: usize) -> Option<&SegmentDescriptor> {
        self.arena.slots().get(slot)
    }

    /// Total scrollable height, estimates included. Unaffected by scrolling;
    /// moves only with view-count growth and layout corrections.
    pub fn current_list_height(&self) -> u64 {
        self.layout.total_height()
    }

    /// Whether a resize burst is in progress. Consumers use this to suppress
    /// expensive interaction (hover tracking and the like) until geometry
    /// settles.
    pub fn is_resizing(&self) -> bool {
        self.viewport.is_resizing()
    }

    /// Number of items currently materialized for loading purposes.
    pub fn view_count(&self) -> usize {
        self.growth.view_count()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.viewport.scroll_offset()
    }

    pub fn content_rect(&self) -> ContentRect {
        ContentRect {
            width: self.viewport.width(),
            height: self.viewport.height(),
        }
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.layout.is_loaded(index)
    }

    /// Current height for an index: the measurement when loaded, otherwise
    /// the frozen estimate. `None` past the materialized range.
    pub fn item_height(&self, index: usize) -> Option<u32> {
        self.layout.height(index)
    }

    /// Cumulative height of items before `index`; the item's vertical
    /// position in list space.
    pub fn item_offset(&self, index: usize) -> Option<u64> {
        (index < self.layout.len()).then(|| self.layout.offset_of(index))
    }

    /// Measured intrinsic size, `None` until the item loads.
    pub fn item_layout(&self, index: usize) -> Option<ItemLayout> {
        self.layout.item_layout(index)
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.current_list_height()
            .saturating_sub(self.viewport.height() as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// Takes the flag raised when slot 0 was re-assigned to a disjoint index
    /// range. Adapters run a short masking interpolation for that case
    /// instead of the usual zero-duration position update.
    pub fn take_window_jump(&mut self) -> bool {
        mem::take(&mut self.window_jumped)
    }

    /// Drains planned load requests, invoking `f` once per index.
    ///
    /// Each index is planned at most once while its load is pending or
    /// completed, regardless of how many recomputations observe it.
    pub fn drain_load_requests(&mut self, mut f: impl FnMut(usize)) {
        for index in self.requests.drain(..) {
            f(index);
        }
    }

    /// Drains planned load requests into `out` (clears `out` first).
    pub fn collect_load_requests(&mut self, out: &mut Vec<usize>) {
        out.clear();
        out.append(&mut self.requests);
    }

    /// Registers a watcher for the given interest set.
    ///
    /// The callback fires after each event flush whose dirty keys intersect
    /// the interest; it observes the engine read-only.
    pub fn watch(
        &mut self,
        interest: Interest,
        callback: impl Fn(&Engine, &[StateKey]) + Send + Sync + 'static,
    ) -> WatcherId {
        self.watchers.subscribe(interest, Arc::new(callback))
    }

    pub fn unwatch(&mut self, id: WatcherId) -> bool {
        self.watchers.unsubscribe(id)
    }

    // ---- internals ------------------------------------------------------

    fn mark(&mut self, key: StateKey) {
        if !self.dirty.contains(&key) {
            self.dirty.push(key);
        }
    }

    fn flush(&mut self) {
        if self.batch_depth > 0 || self.dirty.is_empty() {
            return;
        }
        let mut dirty = mem::take(&mut self.dirty);
        dirty.sort_unstable();
        let this = &*self;
        this.watchers.publish(this, &dirty);
        dirty.clear();
        self.dirty = dirty; // reuse the allocation
    }

    /// Buffered visible index range, or `None` while the viewport has no
    /// measured height.
    fn coverage(&self) -> Option<(usize, usize)> {
        let view_count = self.growth.view_count();
        let height = self.viewport.height();
        if view_count == 0 || height == 0 {
            return None;
        }
        let buffer = self.options.buffer_margin as u64;
        let scroll = self.viewport.scroll_offset();
        let start_px = scroll.saturating_sub(buffer);
        let end_px = scroll
            .saturating_add(height as u64)
            .saturating_add(buffer);
        let start = self.layout.index_at(start_px)?;
        let end = self.layout.index_at(end_px.saturating_sub(1))? + 1;
        Some((start, end.min(view_count)))
    }

    fn sync_len(&mut self) {
        let view_count = self.growth.view_count();
        self.layout.ensure_len(view_count);
        self.loader.ensure_len(view_count);
    }

    fn recompute(&mut self) {
        // Growth first: the buffered coverage may already touch the end of
        // the materialized range, in which case more items are requested
        // before the slots are re-windowed. Terminates because coverage is
        // bounded by the (growing) list height at a fixed scroll offset.
        loop {
            let Some((_, end)) = self.coverage() else {
                break;
            };
            if !self.growth.maybe_grow(end.saturating_sub(1)) {
                break;
            }
            lbdebug!(view_count = self.growth.view_count(), "view count grown");
            self.sync_len();
            self.mark(StateKey::ViewCount);
            self.mark(StateKey::ListHeight);
        }

        let coverage = self.coverage();
        let outcome = self.arena.rewindow(
            &self.layout,
            coverage,
            self.growth.view_count(),
            self.options.items_per_request,
        );
        if outcome.changed {
            self.mark(StateKey::Segments);
        }
        if outcome.jumped {
            lbdebug!("window jump");
            self.window_jumped = true;
        }
        self.loader.plan(&self.arena, &self.layout, &mut self.requests);
    }
}
