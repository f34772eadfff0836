use carousel::{
    CarouselError, Completion, GeometryProvider, LazyLoadCoordinator, LoadPhase, PanDelta,
    ResourceDescriptor, ResourceKey, ResourceLoader, SliderOptions, Translation,
    TranslationEngine,
};

use crate::{Easing, Tween};

/// Whatever shows the carousel content: a CSS transform, a scroll offset, a GPU layer.
pub trait RenderTarget {
    /// Moves the content to `x`. `animated` is `true` for frames of a snap animation.
    fn apply_translation(&mut self, x: f64, animated: bool);
}

impl<F: FnMut(f64, bool)> RenderTarget for F {
    fn apply_translation(&mut self, x: f64, animated: bool) {
        self(x, animated)
    }
}

/// A framework-neutral controller that wires a [`TranslationEngine`] and a
/// [`LazyLoadCoordinator`] to a render target.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_pan` for every event from the gesture recognizer
/// - `on_resize` after layout changes
/// - `on_resource_loaded` when a deferred resource finished loading
/// - `tick(now_ms)` each frame/timer tick while a snap animation runs
///
/// Snaps are not stepped by the engine: the controller starts one [`Tween`] per target and
/// writes its samples to the render target from `tick`.
#[derive(Clone, Debug)]
pub struct Controller<R, K = usize> {
    engine: TranslationEngine,
    loads: LazyLoadCoordinator<K>,
    render: R,
    tween: Option<Tween>,
    easing: Easing,
    displayed_x: f64,
}

impl<R: RenderTarget, K: ResourceKey> Controller<R, K> {
    /// Builds the engine from `geometry` and collects the deferred `resources`.
    ///
    /// Fails when the geometry has no items; the carousel should then not be made interactive
    /// at all.
    pub fn new(
        options: SliderOptions,
        geometry: &impl GeometryProvider,
        resources: impl IntoIterator<Item = ResourceDescriptor<K>>,
        render: R,
    ) -> Result<Self, CarouselError> {
        Ok(Self::from_parts(
            TranslationEngine::new(options, geometry)?,
            LazyLoadCoordinator::new(resources),
            render,
        ))
    }

    pub fn from_parts(engine: TranslationEngine, loads: LazyLoadCoordinator<K>, render: R) -> Self {
        let displayed_x = engine.translation_x();
        Self {
            engine,
            loads,
            render,
            tween: None,
            easing: Easing::default(),
            displayed_x,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn engine(&self) -> &TranslationEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut TranslationEngine {
        &mut self.engine
    }

    pub fn loads(&self) -> &LazyLoadCoordinator<K> {
        &self.loads
    }

    pub fn loads_mut(&mut self) -> &mut LazyLoadCoordinator<K> {
        &mut self.loads
    }

    pub fn render(&self) -> &R {
        &self.render
    }

    pub fn render_mut(&mut self) -> &mut R {
        &mut self.render
    }

    pub fn into_parts(self) -> (TranslationEngine, LazyLoadCoordinator<K>, R) {
        (self.engine, self.loads, self.render)
    }

    /// The last translation written to the render target.
    pub fn displayed_x(&self) -> f64 {
        self.displayed_x
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Jumps an in-flight snap animation to its target.
    pub fn finish_animation(&mut self) {
        if let Some(tween) = self.tween.take() {
            self.show(tween.to, false);
        }
    }

    fn show(&mut self, x: f64, animated: bool) {
        self.displayed_x = x;
        self.render.apply_translation(x, animated);
    }

    /// Forwards one gesture event to the engine and renders the result.
    ///
    /// A gesture that starts while a snap is still animating first completes that snap, so the
    /// content never jumps between the animated position and the engine's position.
    pub fn on_pan(&mut self, event: PanDelta, now_ms: u64) -> Result<Translation, CarouselError> {
        self.finish_animation();
        let translation = self.engine.pan(event)?;
        self.apply(translation, now_ms);
        Ok(translation)
    }

    /// Snaps to item `index` (see [`TranslationEngine::go_to_item`]).
    pub fn go_to_item(&mut self, index: usize, now_ms: u64) -> Result<Translation, CarouselError> {
        self.finish_animation();
        let translation = self.engine.go_to_item(index)?;
        self.apply(translation, now_ms);
        Ok(translation)
    }

    fn apply(&mut self, translation: Translation, now_ms: u64) {
        if translation.animated {
            let duration_ms = self.engine.options().snap_duration_ms;
            self.animate_to(translation.x, duration_ms, now_ms);
        } else {
            self.show(translation.x, false);
        }
    }

    /// Starts (or retargets) the snap animation towards `target_x`.
    pub fn animate_to(&mut self, target_x: f64, duration_ms: u64, now_ms: u64) {
        match &mut self.tween {
            Some(tween) => tween.retarget(now_ms, target_x, duration_ms),
            None => {
                self.tween = Some(Tween::new(
                    self.displayed_x,
                    target_x,
                    now_ms,
                    duration_ms,
                    self.easing,
                ));
            }
        }
    }

    /// Advances the snap animation.
    ///
    /// Returns the translation written this tick, or `None` when nothing is animating.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let tween = self.tween?;
        let x = tween.sample(now_ms);
        self.show(x, true);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(x)
    }

    /// Re-measures after a layout change. Safe in the middle of a drag.
    pub fn on_resize(&mut self, geometry: &impl GeometryProvider) -> Result<(), CarouselError> {
        self.engine.remeasure(geometry)
    }

    /// Triggers the deferred loads.
    pub fn start_loading(&mut self, loader: &mut impl ResourceLoader<K>) -> LoadPhase {
        self.loads.start(loader)
    }

    /// Records a finished load; the one that completes the set re-measures `geometry`.
    pub fn on_resource_loaded(
        &mut self,
        id: &K,
        geometry: &impl GeometryProvider,
    ) -> Result<Completion, CarouselError> {
        let completion = self.loads.complete(id);
        if completion == Completion::Ready {
            self.engine.remeasure(geometry)?;
        }
        Ok(completion)
    }
}
