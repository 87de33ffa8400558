// Example: masking a window jump with the controller's slot glides.
use lightbox::{ConfigError, EngineOptions, EstimatePolicy};
use lightbox_adapter::Controller;

fn main() -> Result<(), ConfigError> {
    let mut c = Controller::new(
        EngineOptions::new(50, 150, 200).with_estimate(EstimatePolicy::Fixed(100)),
    )?;
    c.on_resize(800, 600, 0);
    c.drain_load_requests(|_| {});

    // Teleport far down the list. The engine snaps; the presentation eases.
    c.on_scroll(10_000, 1_000);
    println!("engine slot 0 at y={}", c.engine().segments()[0].offset);

    let mut now = 1_000;
    loop {
        let animating = c.tick(now);
        println!("t={now} presented slot 0 at y={}", c.segments()[0].offset);
        if !animating {
            break;
        }
        now += 16;
    }
    Ok(())
}
