use crate::*;

use alloc::vec::Vec;
use lightbox::{EngineOptions, EstimatePolicy, SegmentDescriptor};

fn controller() -> Controller {
    Controller::new(
        EngineOptions::new(50, 150, 200).with_estimate(EstimatePolicy::Fixed(100)),
    )
    .unwrap()
}

#[test]
fn presented_segments_follow_scroll_without_lag() {
    let mut c = controller();
    c.on_resize(800, 600, 0);
    assert_eq!(c.segments(), c.engine().segments());

    // A sliding scroll keeps the head slot overlapping: no glide, no lag.
    c.on_scroll(200, 16);
    assert!(!c.is_animating());
    assert_eq!(c.segments(), c.engine().segments());
    assert!(!c.tick(32));
    assert_eq!(c.segments(), c.engine().segments());
}

#[test]
fn window_jump_interpolates_presented_offsets() {
    let mut c = controller();
    c.on_resize(800, 600, 0);
    c.on_scroll(200, 0);

    c.on_scroll(10_000, 1000);
    assert!(c.is_animating());
    let target = c.engine().segments()[0].offset;
    assert_eq!(target, 9800);
    // At the jump instant the slot still draws from its old position.
    assert_eq!(c.segments()[0].offset, 0);

    assert!(c.tick(1070));
    let midway = c.segments()[0].offset;
    assert!(midway > 0 && midway < target);

    assert!(!c.tick(1000 + DEFAULT_JUMP_DURATION_MS + 50));
    assert!(!c.is_animating());
    assert_eq!(c.segments(), c.engine().segments());
}

#[test]
fn cancel_animation_snaps_to_engine_offsets() {
    let mut c = controller();
    c.on_resize(800, 600, 0);
    c.on_scroll(10_000, 0);
    assert!(c.is_animating());

    c.cancel_animation();
    assert!(!c.is_animating());
    assert_eq!(c.segments(), c.engine().segments());
}

#[test]
fn resize_settle_runs_through_tick() {
    let mut c = controller();
    c.on_resize(800, 600, 0);
    assert!(c.engine().is_resizing());
    c.tick(500);
    assert!(c.engine().is_resizing());
    c.tick(1500);
    assert!(!c.engine().is_resizing());
}

#[test]
fn load_events_keep_presented_segments_in_sync() {
    let mut c = controller();
    c.on_resize(800, 600, 0);

    let mut requests = Vec::new();
    c.drain_load_requests(|index| requests.push(index));
    assert!(!requests.is_empty());

    for index in requests {
        c.complete_load(index, 640, 100 + (index as u32 % 60), 0);
    }
    assert_eq!(c.segments(), c.engine().segments());

    let summed: u64 = (0..c.engine().view_count())
        .map(|i| c.engine().item_height(i).unwrap() as u64)
        .sum();
    assert_eq!(c.engine().current_list_height(), summed);
}

#[test]
fn glide_sampling_is_monotonic_and_clamped() {
    let glide = SlotGlide::start(100, 1100, 0, 100, Easing::Smooth);
    let mut last = 0;
    for now in [0u64, 10, 25, 50, 75, 100, 200] {
        let v = glide.offset_at(now);
        assert!(v >= last);
        last = v;
    }
    assert_eq!(glide.offset_at(0), 100);
    // Smoothstep crosses the midpoint exactly halfway through.
    assert_eq!(glide.offset_at(50), 600);
    assert_eq!(glide.offset_at(100), 1100);
    assert_eq!(glide.offset_at(u64::MAX), 1100);
    assert!(glide.is_done(100));
    assert!(!glide.is_done(99));
}

#[test]
fn glide_can_move_offsets_downward() {
    let glide = SlotGlide::start(1000, 0, 0, 100, Easing::Linear);
    assert_eq!(glide.offset_at(0), 1000);
    assert_eq!(glide.offset_at(50), 500);
    assert_eq!(glide.offset_at(100), 0);
}

#[test]
fn apply_touches_only_the_presented_offset() {
    let glide = SlotGlide::start(0, 1000, 0, 100, Easing::Linear);
    let mut segment = SegmentDescriptor {
        start: 48,
        count: 10,
        offset: 0,
        pixel_height: 1000,
    };
    glide.apply(25, &mut segment);
    assert_eq!(segment.offset, 250);
    assert_eq!((segment.start, segment.count, segment.pixel_height), (48, 10, 1000));
}

#[test]
fn retarget_starts_from_the_presented_position() {
    let mut glide = SlotGlide::start(0, 1000, 0, 100, Easing::Linear);
    let midway = glide.offset_at(50);
    glide.retarget(50, 200);
    assert_eq!(glide.from, midway);
    assert_eq!(glide.to, 200);
    assert_eq!(glide.offset_at(50), midway);
    assert_eq!(glide.offset_at(150), 200);
}
