// Example: minimal event loop against a fake data source.
use lightbox::{ConfigError, Engine, EngineOptions, EstimatePolicy};

fn main() -> Result<(), ConfigError> {
    let mut engine = Engine::new(
        EngineOptions::new(50, 150, 200).with_estimate(EstimatePolicy::Fixed(120)),
    )?;
    engine.handle_resize(800, 600, 0);

    // Answer the initial load plan with synthetic intrinsic sizes.
    let mut requests = Vec::new();
    engine.collect_load_requests(&mut requests);
    println!("planned {} loads", requests.len());
    for index in requests {
        engine.complete_load(index, 640, 80 + ((index as u32 * 37) % 160));
    }
    println!("list_height={}", engine.current_list_height());

    for offset in [0u64, 2_000, 8_000] {
        engine.handle_scroll_clamped(offset);
        println!("scroll_offset={}", engine.scroll_offset());
        for segment in engine.segments() {
            println!(
                "  slot [{}, {}) at y={} ({}px)",
                segment.start,
                segment.end(),
                segment.offset,
                segment.pixel_height
            );
        }
    }
    Ok(())
}
