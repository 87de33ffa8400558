// Example: view-count growth while paging toward the end of the list.
use lightbox::{ConfigError, Engine, EngineOptions, EstimatePolicy, Interest};

fn main() -> Result<(), ConfigError> {
    let mut engine = Engine::new(
        EngineOptions::new(50, 150, 200)
            .with_estimate(EstimatePolicy::RunningAverage { seed: 150 })
            .with_total_items(Some(420)),
    )?;

    engine.watch(Interest::default().with_view_count(), |engine, _| {
        println!("grew to view_count={}", engine.view_count());
    });

    engine.handle_resize(800, 600, 0);
    loop {
        // Serve whatever the scheduler planned, then jump to the bottom.
        engine.drain_load_requests(|index| {
            println!("load {index}");
        });
        let before = engine.view_count();
        engine.handle_scroll_clamped(engine.max_scroll_offset());
        if engine.view_count() == before {
            break;
        }
    }
    println!(
        "settled at view_count={} list_height={}",
        engine.view_count(),
        engine.current_list_height()
    );
    Ok(())
}
