//! Scripted drive of the slider engine.
//!
//! Replays a press / drag / release sequence against a stepped slider and a
//! continuous range slider, logging every emission. Run with
//! `RUST_LOG=trace` to also see the drag-session transitions.

use glissade::{
    HandleSide, Px, PxPosition, PxSize, PointerSurface, SliderConfigBuilder, SliderEngine,
    SliderValue, TrackGeometry,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Stands in for the platform's global pointer event source.
struct LoggingSurface {
    name: &'static str,
}

impl PointerSurface for LoggingSurface {
    fn subscribe(&mut self) {
        info!(slider = self.name, "global move/up listeners attached");
    }

    fn unsubscribe(&mut self) {
        info!(slider = self.name, "global move/up listeners detached");
    }
}

fn drive_single() {
    let config = SliderConfigBuilder::default()
        .min(0.0)
        .max(100.0)
        .step(10.0)
        .build()
        .expect("static config");

    let mut engine = SliderEngine::new(config, SliderValue::Single(50.0))
        .on_change(|value| info!(?value, "volume emitted"));
    engine.set_surface(Box::new(LoggingSurface { name: "volume" }));

    let track = TrackGeometry::new(PxPosition::ZERO, PxSize::new(Px(200), Px(20)));

    // Press at 53% of the track: snaps back to the current value, no emission.
    engine.pointer_down(&track, PxPosition::new(Px(106), Px(10)), None);
    // Drag to 57%: snaps to 60 and emits.
    engine.pointer_move(&track, PxPosition::new(Px(114), Px(10)));
    // Drag far past the end: saturates at 100.
    engine.pointer_move(&track, PxPosition::new(Px(900), Px(10)));
    engine.pointer_up();

    info!(value = ?engine.value(), layout = ?engine.compute_layout(), "volume settled");
}

fn drive_range() {
    let config = SliderConfigBuilder::default()
        .min(0.0)
        .max(1.0)
        .range(true)
        .build()
        .expect("static config");

    let mut engine = SliderEngine::new(config, SliderValue::pair(0.2, 0.8))
        .on_change(|value| info!(?value, "band emitted"));
    engine.set_surface(Box::new(LoggingSurface { name: "band" }));

    let track = TrackGeometry::new(PxPosition::ZERO, PxSize::new(Px(200), Px(20)));

    // Grab the low handle and drag it past the high one; it clamps there.
    engine.pointer_down(&track, PxPosition::new(Px(50), Px(10)), Some(HandleSide::Low));
    engine.pointer_move(&track, PxPosition::new(Px(190), Px(10)));
    engine.pointer_up();

    // A bare-track press moves whichever handle is closer.
    engine.pointer_down(&track, PxPosition::new(Px(20), Px(10)), None);
    engine.pointer_up();

    info!(value = ?engine.value(), layout = ?engine.compute_layout(), "band settled");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    drive_single();
    drive_range();
}
