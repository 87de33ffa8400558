use lightbox::SegmentDescriptor;

// Fixed-point progress unit: one glide runs from 0 to SCALE.
const SCALE: u64 = 1024;

/// Eases one window slot's presented offset toward the engine's position
/// after a window jump.
///
/// Progress runs on integer fixed-point in 1/1024 steps, so sampling is
/// deterministic across platforms and carries no float state between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotGlide {
    pub from: u64,
    pub to: u64,
    pub started_at_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl SlotGlide {
    pub fn start(from: u64, to: u64, now_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            started_at_ms: now_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.started_at_ms) >= self.duration_ms
    }

    /// Presented offset at `now_ms`, clamped to the endpoints.
    pub fn offset_at(&self, now_ms: u64) -> u64 {
        let p = self.progress(now_ms) as i128;
        let from = self.from as i128;
        let span = self.to as i128 - from;
        (from + span * p / SCALE as i128).max(0) as u64
    }

    /// Writes the presented offset for `now_ms` into a slot descriptor.
    pub fn apply(&self, now_ms: u64, segment: &mut SegmentDescriptor) {
        segment.offset = self.offset_at(now_ms);
    }

    /// Redirects an in-flight glide toward a new engine offset, departing
    /// from wherever the slot is presented right now.
    pub fn retarget(&mut self, now_ms: u64, new_to: u64) {
        self.from = self.offset_at(now_ms);
        self.to = new_to;
        self.started_at_ms = now_ms;
    }

    fn progress(&self, now_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.started_at_ms);
        if elapsed >= self.duration_ms {
            return SCALE;
        }
        let t = (elapsed as u128 * SCALE as u128 / self.duration_ms as u128) as u64;
        self.easing.apply(t)
    }
}

/// Interpolation curve for a slot glide, evaluated in fixed-point progress
/// units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// Hermite smoothstep; eases both ends of the glide.
    #[default]
    Smooth,
}

impl Easing {
    fn apply(self, t: u64) -> u64 {
        match self {
            Self::Linear => t,
            Self::Smooth => {
                // 3t^2 - 2t^3, kept in 1/SCALE units throughout.
                let t = t as u128;
                let s = SCALE as u128;
                ((3 * t * t * s - 2 * t * t * t) / (s * s)) as u64
            }
        }
    }
}
