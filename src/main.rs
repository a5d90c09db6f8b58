use anyhow::Result;
use stagger_config::StaggerConfig;
use stagger_scene::reveal::RevealCoordinator;
use stagger_scene::{Element, ElementStyle, Scene};
use std::time::{Duration, Instant};

/// Vertical offset the sample elements start from, matching a page
/// style of `transform: translateY(24px)`.
const HIDDEN_OFFSET_Y: f64 = 24.0;

const TICK: Duration = Duration::from_millis(16);

fn sample_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add(Element::new("heading", "h1"));
    for i in 0..6 {
        scene.add(
            Element::new(format!("product-{i}"), "li")
                .with_class("product")
                .with_style(ElementStyle::hidden(HIDDEN_OFFSET_Y)),
        );
    }
    scene
}

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let config = StaggerConfig::load();
    let mut scene = sample_scene();

    let mut coordinator = RevealCoordinator::new();
    let id = coordinator.start_reveal(&mut scene, &config.reveal.selector, config.reveal.delay_ms)?;
    log::info!(
        "started reveal {:?}: selector {} / delay {}ms",
        id,
        config.reveal.selector,
        config.reveal.delay_ms
    );

    // Tick loop standing in for the host's frame clock.
    let mut last = Instant::now();
    loop {
        for event in coordinator.drain_events() {
            log::info!("{event:?}");
        }
        if !coordinator.is_active(id) {
            break;
        }

        std::thread::sleep(TICK);
        let now = Instant::now();
        let delta_ms = now.duration_since(last).as_secs_f32() * 1000.0;
        last = now;
        coordinator.update(&mut scene, delta_ms);
    }

    log::info!("reveal complete, {} elements in scene", scene.len());
    Ok(())
}
