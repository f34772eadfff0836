use crate::*;

use alloc::format;
use alloc::vec::Vec;
use carousel::{
    CarouselError, Completion, FixedGeometry, InvalidInput, LoadPhase, PanDelta,
    ResourceDescriptor, SliderOptions, Translation,
};

#[derive(Debug, Default)]
struct Recorder {
    frames: Vec<(f64, bool)>,
}

impl RenderTarget for Recorder {
    fn apply_translation(&mut self, x: f64, animated: bool) {
        self.frames.push((x, animated));
    }
}

fn controller() -> Controller<Recorder> {
    Controller::new(
        SliderOptions::new(),
        &FixedGeometry::new(300.0, [200.0, 200.0, 200.0]),
        Vec::<ResourceDescriptor<usize>>::new(),
        Recorder::default(),
    )
    .unwrap()
}

#[test]
fn tween_lands_exactly_on_target() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
    ] {
        let tween = Tween::new(-69.25, -300.0, 100, 300, easing);
        assert_eq!(tween.sample(100), -69.25);
        let mut last = tween.sample(100);
        for now_ms in (116..400).step_by(16) {
            let x = tween.sample(now_ms);
            assert!(x <= last, "{easing:?} moved backwards at {now_ms}");
            assert!(x >= -300.0);
            last = x;
        }
        assert!(tween.is_done(400));
        assert_eq!(tween.sample(400), -300.0);
    }
}

#[test]
fn tween_retarget_starts_from_current_position() {
    let mut tween = Tween::new(0.0, -200.0, 0, 100, Easing::Linear);
    tween.retarget(50, -400.0, 100);
    assert_eq!(tween.from, -100.0);
    assert_eq!(tween.to, -400.0);
    assert_eq!(tween.start_ms, 50);
    assert_eq!(tween.sample(150), -400.0);
}

#[test]
fn controller_renders_drag_then_animates_snap_back() {
    let mut c = controller();

    assert_eq!(
        c.on_pan(PanDelta::moving(-50.0), 0).unwrap(),
        Translation::immediate(-50.0)
    );
    let resisted = c.on_pan(PanDelta::moving(-350.0), 10).unwrap();
    assert!(resisted.x < -50.0 && resisted.x > -350.0);
    assert_eq!(c.displayed_x(), resisted.x);

    let release = c.on_pan(PanDelta::end(-350.0), 20).unwrap();
    assert_eq!(release, Translation::animated(-300.0));
    assert!(c.is_animating());
    // Nothing is rendered until the first tick.
    assert_eq!(c.render().frames.len(), 2);

    assert_eq!(c.tick(20), Some(resisted.x));
    let mid = c.tick(170).unwrap();
    assert!(mid < resisted.x && mid > -300.0);
    assert_eq!(c.tick(320), Some(-300.0));
    assert!(!c.is_animating());
    assert_eq!(c.tick(400), None);

    let frames = &c.render().frames;
    assert_eq!(frames[0], (-50.0, false));
    assert_eq!(frames.last().copied(), Some((-300.0, true)));
    assert!(frames[2..].iter().all(|&(_, animated)| animated));
    assert_eq!(c.engine().current_x(), -300.0);
}

#[test]
fn new_gesture_completes_running_snap_first() {
    let mut c = controller();
    c.on_pan(PanDelta::moving(-120.0), 0).unwrap();
    c.on_pan(PanDelta::end(-120.0), 16).unwrap();
    c.tick(32);
    assert!(c.is_animating());

    let t = c.on_pan(PanDelta::moving(10.0), 48).unwrap();
    assert!(!c.is_animating());
    assert_eq!(t, Translation::immediate(-190.0));

    let frames = &c.render().frames;
    let n = frames.len();
    assert_eq!(frames[n - 2], (-200.0, false));
    assert_eq!(frames[n - 1], (-190.0, false));
}

#[test]
fn controller_go_to_item_animates() {
    let mut c = controller().with_easing(Easing::Linear);
    assert_eq!(c.go_to_item(1, 0).unwrap(), Translation::animated(-200.0));
    assert_eq!(c.tick(150), Some(-100.0));
    assert_eq!(c.tick(300), Some(-200.0));
    assert_eq!(c.engine().current_item(), 1);
    assert_eq!(
        c.go_to_item(9, 400),
        Err(CarouselError::IndexOutOfRange { index: 9, count: 3 })
    );
}

#[test]
fn controller_construction_fails_without_items() {
    let err = Controller::new(
        SliderOptions::new(),
        &FixedGeometry::new(300.0, Vec::<f64>::new()),
        Vec::<ResourceDescriptor<usize>>::new(),
        Recorder::default(),
    )
    .unwrap_err();
    assert_eq!(err, CarouselError::Construction(InvalidInput::NoItems));
}

#[test]
fn last_load_triggers_remeasure() {
    let mut c = Controller::new(
        SliderOptions::new(),
        &FixedGeometry::new(320.0, [40.0, 40.0, 40.0]),
        (0..3usize).map(|i| ResourceDescriptor::new(i, format!("/img/{i}.jpg"))),
        Recorder::default(),
    )
    .unwrap();
    let loaded = FixedGeometry::new(320.0, [480.0, 360.0, 400.0]);

    let mut requested = Vec::new();
    assert_eq!(
        c.start_loading(&mut |r: &ResourceDescriptor<usize>| requested.push(r.id)),
        LoadPhase::Loading
    );
    assert_eq!(requested, [0, 1, 2]);
    assert!(c.loads().is_loading());

    c.on_pan(PanDelta::moving(-10.0), 0).unwrap();
    assert!(matches!(
        c.on_resource_loaded(&2, &loaded).unwrap(),
        Completion::Pending(_)
    ));
    assert_eq!(c.on_resource_loaded(&2, &loaded).unwrap(), Completion::Ignored);
    c.on_resource_loaded(&0, &loaded).unwrap();
    assert_eq!(c.engine().content_width(), 120.0);

    assert_eq!(c.on_resource_loaded(&1, &loaded).unwrap(), Completion::Ready);
    assert_eq!(c.engine().content_width(), 1240.0);
    // The drag in progress is untouched by the re-measurement.
    assert_eq!(c.engine().previous_delta(), -10.0);
    assert_eq!(
        c.on_pan(PanDelta::moving(-110.0), 16).unwrap(),
        Translation::immediate(-110.0)
    );
}

#[test]
fn resize_updates_geometry() {
    let mut c = controller();
    c.on_resize(&FixedGeometry::new(600.0, [200.0, 200.0, 200.0]))
        .unwrap();
    assert_eq!(c.engine().container_width(), 600.0);
    assert!(
        c.on_resize(&FixedGeometry::new(600.0, Vec::<f64>::new()))
            .is_err()
    );
    assert_eq!(c.engine().item_count(), 3);
}

#[test]
fn closure_render_target() {
    let mut xs = Vec::new();
    {
        let mut c: Controller<_> = Controller::new(
            SliderOptions::new(),
            &FixedGeometry::new(300.0, [200.0, 200.0]),
            Vec::<ResourceDescriptor<usize>>::new(),
            |x: f64, _animated: bool| xs.push(x),
        )
        .unwrap();
        c.on_pan(PanDelta::moving(-30.0), 0).unwrap();
        c.on_pan(PanDelta::moving(-60.0), 16).unwrap();
    }
    assert_eq!(xs, [-30.0, -60.0]);
}

#[test]
fn lightbox_navigation() {
    let mut lb = Lightbox::new([
        LightboxEntry::new("/full/0.jpg").with_caption("Harbour"),
        LightboxEntry::new("/full/1.jpg"),
        LightboxEntry::new("/full/2.jpg"),
    ]);
    assert!(!lb.is_open());
    assert_eq!(lb.show_next(), None);

    assert!(lb.open());
    assert_eq!(lb.active_index(), Some(0));
    assert_eq!(
        lb.active_entry().and_then(|e| e.caption.as_deref()),
        Some("Harbour")
    );
    assert_eq!(lb.show_next(), Some(1));
    assert_eq!(lb.show_next(), Some(2));
    assert_eq!(lb.show_next(), Some(2));
    assert_eq!(lb.show_previous(), Some(1));

    lb.close();
    assert!(!lb.is_open());
    assert_eq!(lb.show_previous(), None);

    assert_eq!(
        lb.open_at(3),
        Err(CarouselError::IndexOutOfRange { index: 3, count: 3 })
    );
    lb.open_at(2).unwrap();
    assert_eq!(lb.active_entry().map(|e| e.source_ref.as_str()), Some("/full/2.jpg"));
}

#[test]
fn empty_lightbox_stays_closed() {
    let mut lb = Lightbox::from_resources::<u32>(&[]);
    assert!(lb.is_empty());
    assert!(!lb.open());
    assert!(!lb.is_open());

    let lb = Lightbox::from_resources(&[
        ResourceDescriptor::new(1u32, "/a.jpg"),
        ResourceDescriptor::new(2u32, "/b.jpg"),
    ]);
    assert_eq!(lb.len(), 2);
    assert_eq!(lb.entries()[1].source_ref, "/b.jpg");
}
