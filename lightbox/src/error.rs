use core::fmt;

/// Rejected configuration.
///
/// A zero quantum or margin is a programmer error: it is reported at
/// construction time rather than silently clamped at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `items_per_request` must be at least 1.
    ZeroItemsPerRequest,
    /// `buffer_margin` must be at least 1 px.
    ZeroBufferMargin,
    /// The estimate policy would produce zero-height placeholders, making
    /// pixel-to-index lookup degenerate.
    ZeroEstimateHeight,
    /// The window arena needs at least two slots.
    TooFewSegmentSlots,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroItemsPerRequest => f.write_str("items_per_request must be at least 1"),
            Self::ZeroBufferMargin => f.write_str("buffer_margin must be at least 1 px"),
            Self::ZeroEstimateHeight => f.write_str("estimate height must be at least 1 px"),
            Self::TooFewSegmentSlots => f.write_str("segment_slots must be at least 2"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
