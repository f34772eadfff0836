// Example: feeding a pan gesture through the engine and printing translation commands.
use carousel::{FixedGeometry, PanDelta, SliderEvent, SliderOptions, TranslationEngine};

fn main() -> Result<(), carousel::CarouselError> {
    let geometry = FixedGeometry::new(300.0, [200.0, 200.0, 200.0]);
    let options = SliderOptions::new().with_on_event(Some(|e: &SliderEvent| {
        println!("  event: {e:?}");
    }));
    let mut engine = TranslationEngine::new(options, &geometry)?;

    // A drag that runs past the right edge, then lets go.
    for delta in [-50.0, -150.0, -250.0, -350.0, -420.0] {
        let t = engine.pan(PanDelta::moving(delta))?;
        println!(
            "delta={delta} -> x={:.2} boundary={:?}",
            t.x,
            engine.boundary()
        );
    }
    let t = engine.pan(PanDelta::end(-420.0))?;
    println!("release -> x={} animated={}", t.x, t.animated);

    // A short drag to the right snaps to the owning item.
    engine.pan(PanDelta::moving(60.0))?;
    let t = engine.pan(PanDelta::end(60.0))?;
    println!(
        "release -> x={} item={}",
        t.x,
        engine.current_item()
    );

    Ok(())
}
