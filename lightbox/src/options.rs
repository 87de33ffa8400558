use crate::ConfigError;

/// Default placeholder height for unloaded items, in pixels.
pub const DEFAULT_ESTIMATE_HEIGHT: u32 = 160;

/// Default debounce delay before `is_resizing` settles back to `false`.
pub const DEFAULT_RESIZE_SETTLE_DELAY_MS: u64 = 1000;

/// Default distance (in items) from the end of the materialized range at
/// which another growth quantum is requested.
pub const DEFAULT_GROWTH_THRESHOLD: usize = 10;

/// Default number of window slots.
pub const DEFAULT_SEGMENT_SLOTS: usize = 2;

/// Placeholder-height policy for not-yet-loaded items.
///
/// An estimate is sampled once when an index is first materialized and frozen
/// until the item is measured. This keeps cumulative heights incremental and
/// deterministic for a given event sequence. `Fixed` makes corrections
/// predictable; `RunningAverage` converges toward the real height
/// distribution as loads complete, shrinking scroll jumps on correction for
/// later quanta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EstimatePolicy {
    /// Every unloaded item is assumed to be this many pixels tall.
    Fixed(u32),
    /// The mean height of already-loaded items; `seed` before any load.
    RunningAverage { seed: u32 },
}

impl EstimatePolicy {
    pub(crate) fn sample(&self, loaded_count: u64, loaded_height_total: u64) -> u32 {
        match *self {
            Self::Fixed(px) => px,
            Self::RunningAverage { seed } => {
                if loaded_count == 0 {
                    seed
                } else {
                    (loaded_height_total / loaded_count).max(1) as u32
                }
            }
        }
    }

    fn base_height(&self) -> u32 {
        match *self {
            Self::Fixed(px) => px,
            Self::RunningAverage { seed } => seed,
        }
    }
}

impl Default for EstimatePolicy {
    fn default() -> Self {
        Self::Fixed(DEFAULT_ESTIMATE_HEIGHT)
    }
}

/// Configuration for [`crate::Engine`].
///
/// Plain data: construct with the three required knobs, refine with the
/// `with_*` builders, and hand it to [`crate::Engine::new`], which validates
/// it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineOptions {
    /// Growth quantum for the view count and base size of segment 0.
    pub items_per_request: usize,
    /// Item count materialized before any growth tick.
    pub initial_view_count: usize,
    /// Pixels rendered outside the visible viewport to mask load latency.
    pub buffer_margin: u32,
    /// Debounce delay before `is_resizing` settles back to `false`.
    pub resize_settle_delay_ms: u64,
    /// How close (in items) the buffered visible coverage may get to the last
    /// materialized index before another growth quantum is requested.
    pub growth_threshold: usize,
    /// Number of window slots. Two reproduces the classic double-buffered
    /// segment layout; more slots shorten the per-slot tail.
    pub segment_slots: usize,
    /// Placeholder-height policy for unloaded items.
    pub estimate: EstimatePolicy,
    /// Ceiling for view-count growth: the true dataset size, when known.
    pub total_items: Option<usize>,
}

impl EngineOptions {
    pub fn new(items_per_request: usize, initial_view_count: usize, buffer_margin: u32) -> Self {
        Self {
            items_per_request,
            initial_view_count,
            buffer_margin,
            resize_settle_delay_ms: DEFAULT_RESIZE_SETTLE_DELAY_MS,
            growth_threshold: DEFAULT_GROWTH_THRESHOLD,
            segment_slots: DEFAULT_SEGMENT_SLOTS,
            estimate: EstimatePolicy::default(),
            total_items: None,
        }
    }

    pub fn with_resize_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.resize_settle_delay_ms = delay_ms;
        self
    }

    pub fn with_growth_threshold(mut self, growth_threshold: usize) -> Self {
        self.growth_threshold = growth_threshold;
        self
    }

    pub fn with_segment_slots(mut self, segment_slots: usize) -> Self {
        self.segment_slots = segment_slots;
        self
    }

    pub fn with_estimate(mut self, estimate: EstimatePolicy) -> Self {
        self.estimate = estimate;
        self
    }

    pub fn with_total_items(mut self, total_items: Option<usize>) -> Self {
        self.total_items = total_items;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items_per_request == 0 {
            return Err(ConfigError::ZeroItemsPerRequest);
        }
        if self.buffer_margin == 0 {
            return Err(ConfigError::ZeroBufferMargin);
        }
        if self.estimate.base_height() == 0 {
            return Err(ConfigError::ZeroEstimateHeight);
        }
        if self.segment_slots < 2 {
            return Err(ConfigError::TooFewSegmentSlots);
        }
        Ok(())
    }
}
