// Example: gating re-measurement on deferred image loads.
use carousel::{
    Completion, FixedGeometry, LazyLoadCoordinator, LoadEvent, ResourceDescriptor,
    SliderOptions, TranslationEngine,
};

fn main() -> Result<(), carousel::CarouselError> {
    // Before images load, every slide reports a placeholder width.
    let mut engine = TranslationEngine::new(
        SliderOptions::new(),
        &FixedGeometry::new(320.0, [40.0, 40.0, 40.0]),
    )?;

    let mut loads = LazyLoadCoordinator::new((0..3u32).map(|i| {
        ResourceDescriptor::new(i, format!("https://cdn.example.com/slide-{i}.jpg"))
    }))
    .with_on_event(Some(|e: &LoadEvent| println!("  event: {e:?}")));

    let mut in_flight = Vec::new();
    loads.start(&mut |r: &ResourceDescriptor<u32>| {
        println!("load {}", r.source_ref);
        in_flight.push(r.id);
    });

    // Completions arrive out of order, one of them twice.
    for id in [2, 0, 2, 1] {
        match loads.complete(&id) {
            Completion::Ready => {
                engine.remeasure(&FixedGeometry::new(320.0, [480.0, 360.0, 400.0]))?;
                println!(
                    "ready: content_width={} items={}",
                    engine.content_width(),
                    engine.item_count()
                );
            }
            other => println!("complete({id}) -> {other:?}"),
        }
    }
    println!("requested={in_flight:?}");

    Ok(())
}
