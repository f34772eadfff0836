use carousel::{FixedGeometry, PanDelta, ResourceDescriptor, SliderOptions};
use carousel_adapter::{Controller, Easing, Lightbox};

fn main() -> Result<(), carousel::CarouselError> {
    // Example: a controller rendering into a closure, with tween-driven snaps.
    //
    // An adapter would:
    // - forward pan events from its gesture recognizer
    // - call tick(now_ms) in a frame loop while is_animating()
    // - re-measure once deferred images have loaded
    let resources: Vec<_> = (0..4usize)
        .map(|i| ResourceDescriptor::new(i, format!("/gallery/{i}.jpg")))
        .collect();
    let lightbox = Lightbox::from_resources(&resources);

    let mut c = Controller::new(
        SliderOptions::new().with_snap_duration_ms(240),
        &FixedGeometry::new(360.0, [300.0, 300.0, 300.0, 300.0]),
        resources,
        |x: f64, animated: bool| println!("translate3d({x:.1}px, 0, 0) animated={animated}"),
    )?
    .with_easing(Easing::EaseOutCubic);

    let mut now_ms = 0u64;
    for delta in [-20.0, -60.0, -110.0] {
        c.on_pan(PanDelta::moving(delta), now_ms)?;
        now_ms += 16;
    }
    c.on_pan(PanDelta::end(-110.0), now_ms)?;

    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
    }
    println!(
        "settled on item {} of {} (lightbox entries: {})",
        c.engine().current_item(),
        c.engine().item_count(),
        lightbox.len()
    );
    Ok(())
}
