use alloc::vec::Vec;

use lightbox::{ConfigError, Engine, EngineOptions, SegmentDescriptor};

use crate::{Easing, SlotGlide};

/// Default duration for masking a window jump, in milliseconds.
pub const DEFAULT_JUMP_DURATION_MS: u64 = 120;

/// A framework-neutral controller that wraps a [`lightbox::Engine`] and
/// smooths window-slot jumps for presentation.
///
/// When the engine teleports its head slot to a distant range (a fast scroll
/// or a programmatic jump), the raw offsets snap. The controller glides each
/// slot's presented offset from where it last drew to where the engine put
/// it, so the render layer can keep drawing from [`Controller::segments`]
/// without its own animation state.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` / `on_resize` when UI events occur
/// - `complete_load` / `fail_load` when the data source responds
/// - `tick(now_ms)` each frame (for jump glides and resize settling)
#[derive(Clone, Debug)]
pub struct Controller {
    engine: Engine,
    glides: Vec<Option<SlotGlide>>,
    presented: Vec<SegmentDescriptor>,
    jump_duration_ms: u64,
    easing: Easing,
}

impl Controller {
    pub fn new(options: EngineOptions) -> Result<Self, ConfigError> {
        Ok(Self::from_engine(Engine::new(options)?))
    }

    pub fn from_engine(engine: Engine) -> Self {
        let slots = engine.segments().len();
        let mut controller = Self {
            engine,
            glides: alloc::vec![None; slots],
            presented: Vec::with_capacity(slots),
            jump_duration_ms: DEFAULT_JUMP_DURATION_MS,
            easing: Easing::default(),
        };
        controller.presented.extend_from_slice(controller.engine.segments());
        controller
    }

    pub fn with_jump_duration_ms(mut self, duration_ms: u64) -> Self {
        self.jump_duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn into_engine(self) -> Engine {
        self.engine
    }

    /// Segment descriptors with presentation offsets. Identical to the
    /// engine's own while no jump glide is active.
    pub fn segments(&self) -> &[SegmentDescriptor] {
        &self.presented
    }

    pub fn is_animating(&self) -> bool {
        self.glides.iter().any(Option::is_some)
    }

    pub fn cancel_animation(&mut self) {
        for glide in &mut self.glides {
            *glide = None;
        }
        self.presented.clear();
        self.presented.extend_from_slice(self.engine.segments());
    }

    /// Call this when the UI reports a scroll offset change.
    pub fn on_scroll(&mut self, offset: u64, now_ms: u64) {
        self.engine.handle_scroll_clamped(offset);
        self.refresh(now_ms);
    }

    /// Call this when the UI reports new container dimensions.
    pub fn on_resize(&mut self, width: u32, height: u32, now_ms: u64) {
        self.engine.handle_resize(width, height, now_ms);
        self.refresh(now_ms);
    }

    pub fn complete_load(&mut self, index: usize, width: u32, height: u32, now_ms: u64) {
        self.engine.complete_load(index, width, height);
        self.refresh(now_ms);
    }

    pub fn fail_load(&mut self, index: usize, now_ms: u64) {
        self.engine.fail_load(index);
        self.refresh(now_ms);
    }

    pub fn drain_load_requests(&mut self, f: impl FnMut(usize)) {
        self.engine.drain_load_requests(f);
    }

    /// Advances timers and active jump glides. Returns `true` while an
    /// animation is still running and another frame is wanted.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.engine.tick(now_ms);
        self.refresh(now_ms);

        let mut animating = false;
        for slot in 0..self.glides.len() {
            if self.glides[slot].is_some_and(|g| g.is_done(now_ms)) {
                self.glides[slot] = None;
            }
            if let Some(glide) = self.glides[slot] {
                if let Some(segment) = self.presented.get_mut(slot) {
                    glide.apply(now_ms, segment);
                }
                animating = true;
            }
        }
        animating
    }

    /// Resyncs presented segments with the engine, starting or retargeting
    /// jump glides as needed.
    fn refresh(&mut self, now_ms: u64) {
        let jumped = self.engine.take_window_jump();
        let segments = self.engine.segments();
        self.glides.resize(segments.len(), None);

        for (slot, segment) in segments.iter().enumerate() {
            let previous = self.presented.get(slot).copied();
            let mut next = *segment;

            if jumped {
                let from = match previous {
                    Some(p) if !p.is_empty() => p.offset,
                    _ => segment.offset,
                };
                if from != segment.offset {
                    let glide = SlotGlide::start(
                        from,
                        segment.offset,
                        now_ms,
                        self.jump_duration_ms,
                        self.easing,
                    );
                    glide.apply(now_ms, &mut next);
                    self.glides[slot] = Some(glide);
                } else {
                    self.glides[slot] = None;
                }
            } else if let Some(glide) = &mut self.glides[slot] {
                if glide.to != segment.offset {
                    glide.retarget(now_ms, segment.offset);
                }
                glide.apply(now_ms, &mut next);
            }

            match self.presented.get_mut(slot) {
                Some(existing) => *existing = next,
                None => self.presented.push(next),
            }
        }
        self.presented.truncate(segments.len());
    }
}
