//! Scripted walkthrough of a slider driven by a simulated clock.
//!
//! Every surface command is logged through `tracing`; run with
//! `RUST_LOG=simple_slider=trace` to see the core's own decisions as well.

mod surface;

use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use simple_slider::{ActiveSlide, ConfigError, Instant, Px, Slider, SliderConfig, SlidesPerView};
use tracing::info;

pub use surface::LogSurface;

/// Runs the walkthrough.
///
/// # Errors
///
/// Returns the [`ConfigError`] of a rejected slider config.
pub fn run() -> Result<(), ConfigError> {
    init_tracing();

    let changes = Arc::new(Mutex::new(Vec::<ActiveSlide>::new()));
    let config = {
        let changes = Arc::clone(&changes);
        SliderConfig::default()
            .speed(Duration::from_millis(300))
            .delay(Duration::from_millis(2000))
            .autoplay(true)
            .slides_per_view(SlidesPerView::fixed(1).breakpoint(Px::new(768), 2))
            .on_init(|| info!("slider ready"))
            .on_change(move |slide| changes.lock().push(slide))
    };

    let t0 = Instant::now();
    let at = |millis: u64| t0 + Duration::from_millis(millis);
    let mut slider = Slider::new(config, 4, Px::new(0), LogSurface::default(), t0)?;

    info!("container gets its first width");
    slider.on_resize(Px::new(480));

    info!("next button");
    slider.on_advance_requested(at(100));
    run_until(&mut slider, at(500));

    info!("drag left past the threshold");
    slider.on_drag_start(Px::new(400));
    for x in [380, 340, 290] {
        slider.on_drag_move(Px::new(x), false, at(600));
    }
    slider.on_drag_end(at(650));
    run_until(&mut slider, at(1000));

    info!("short drag over a link snaps back");
    slider.on_drag_start(Px::new(200));
    slider.on_drag_move(Px::new(230), true, at(1100));
    slider.on_drag_end(at(1150));
    info!(
        "click after drag suppressed: {}",
        slider.take_click_suppression()
    );

    info!("bullet 0");
    slider.on_bullet_clicked(0, at(1500));
    run_until(&mut slider, at(2000));

    info!("window widens past the breakpoint");
    slider.on_resize(Px::new(1024));

    info!("autoplay runs for a while");
    run_until(&mut slider, at(9000));

    info!("page hidden");
    slider.on_visibility_change(true, at(9000));
    run_until(&mut slider, at(20_000));
    slider.on_visibility_change(false, at(20_000));
    run_until(&mut slider, at(23_000));

    info!(
        "settled on slide {} after {} changes",
        slider.index(),
        changes.lock().len()
    );
    info!("{} surface commands issued", slider.surface().commands());
    Ok(())
}

/// Fires every slider timer up to `end`, as a host event loop would.
fn run_until(slider: &mut Slider<LogSurface>, end: Instant) {
    while let Some(deadline) = slider.next_deadline().filter(|&at| at <= end) {
        slider.poll(deadline);
    }
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,simple_slider=info,simple_slider_example=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
