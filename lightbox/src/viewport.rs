/// Cached viewport geometry plus the transient resize-settle state.
///
/// The settle "timer" is a deadline sampled by the engine's `tick`, not a
/// registered callback: a new resize replaces the pending deadline (debounce,
/// never stacked), and dropping the engine drops the deadline with it, so
/// nothing can fire after teardown.
#[derive(Clone, Debug)]
pub(crate) struct ViewportTracker {
    width: u32,
    height: u32,
    scroll_offset: u64,
    is_resizing: bool,
    settle_at_ms: Option<u64>,
    settle_delay_ms: u64,
}

impl ViewportTracker {
    pub(crate) fn new(settle_delay_ms: u64) -> Self {
        Self {
            width: 0,
            height: 0,
            scroll_offset: 0,
            is_resizing: false,
            settle_at_ms: None,
            settle_delay_ms,
        }
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub(crate) fn is_resizing(&self) -> bool {
        self.is_resizing
    }

    /// Applies a resize event.
    ///
    /// Returns `true` when the cached dimensions actually changed. A resize
    /// reporting identical dimensions restarts the settle deadline but must
    /// not trigger a re-layout; frame-timing jitter produces plenty of those.
    pub(crate) fn on_resize(&mut self, width: u32, height: u32, now_ms: u64) -> bool {
        self.is_resizing = true;
        self.settle_at_ms = Some(now_ms.saturating_add(self.settle_delay_ms));
        if self.width == width && self.height == height {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    /// Applies a scroll sample. Returns `true` when the offset changed. This
    /// path fires at scroll rate and does no layout work.
    pub(crate) fn on_scroll(&mut self, offset: u64) -> bool {
        if self.scroll_offset == offset {
            return false;
        }
        self.scroll_offset = offset;
        true
    }

    /// Samples the settle deadline. Returns `true` when the resizing flag
    /// was cleared by this call.
    pub(crate) fn update_settle(&mut self, now_ms: u64) -> bool {
        if !self.is_resizing {
            return false;
        }
        let Some(at) = self.settle_at_ms else {
            return false;
        };
        if now_ms < at {
            return false;
        }
        self.is_resizing = false;
        self.settle_at_ms = None;
        true
    }
}
