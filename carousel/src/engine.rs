use alloc::sync::Arc;

use crate::offsets::ItemOffsetIndex;
use crate::{
    Boundary, BoundaryContact, CarouselError, GeometryProvider, InvalidInput, PanDelta, Snap,
    SliderEvent, SliderOptions, SliderState, Translation,
};

/// Result of one step of the pan calculation.
#[derive(Clone, Copy, Debug)]
struct Step {
    raw_x: f64,
    x: f64,
    contact: BoundaryContact,
}

/// Turns a stream of pan deltas into translations for the carousel content.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter feeds it normalized pan events and geometry.
/// - It answers with [`Translation`] commands for the render target.
///
/// While a gesture is live every step is applied immediately. Past a travel boundary the step is
/// resisted, and the decision where to settle is only taken once, when the gesture ends: back
/// inside the boundary, or onto the start of an item.
///
/// Geometry updates ([`Self::remeasure`]) only touch the widths and the offset index, so they are
/// safe to apply between any two pan events, including in the middle of a drag.
#[derive(Clone, Debug)]
pub struct TranslationEngine {
    options: SliderOptions,
    offsets: ItemOffsetIndex,

    /// Settled translation, updated at gesture end and on snaps.
    current_x: f64,
    /// Last translation handed to the render target.
    live_x: f64,
    previous_delta: f64,

    container_width: f64,
    content_width: f64,
    boundary: BoundaryContact,
}

impl TranslationEngine {
    /// Creates an engine from the current layout reported by `geometry`.
    ///
    /// Fails with [`CarouselError::Construction`] when there are no items, a width is unusable,
    /// or the resistance level is not a positive finite number.
    pub fn new(
        options: SliderOptions,
        geometry: &impl GeometryProvider,
    ) -> Result<Self, CarouselError> {
        Self::from_widths(
            options,
            geometry.container_inner_width(),
            geometry.item_widths(),
        )
    }

    pub fn from_widths(
        options: SliderOptions,
        container_width: f64,
        item_widths: impl IntoIterator<Item = f64>,
    ) -> Result<Self, CarouselError> {
        validate_resistance_level(options.resistance_level).map_err(CarouselError::Construction)?;
        let container_width =
            validate_container_width(container_width).map_err(CarouselError::Construction)?;
        let offsets =
            ItemOffsetIndex::build(item_widths).map_err(CarouselError::into_construction)?;
        cdebug!(
            items = offsets.len(),
            container_width,
            content_width = offsets.total_width(),
            "TranslationEngine::new"
        );
        Ok(Self {
            content_width: offsets.total_width(),
            container_width,
            offsets,
            options,
            current_x: 0.0,
            live_x: 0.0,
            previous_delta: 0.0,
            boundary: BoundaryContact::NONE,
        })
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    /// Registers the listener for [`SliderEvent`]s, replacing any previous one.
    pub fn set_on_event(
        &mut self,
        on_event: Option<impl Fn(&SliderEvent) + Send + Sync + 'static>,
    ) {
        self.options.on_event = on_event.map(|f| Arc::new(f) as _);
    }

    fn notify(&self, event: SliderEvent) {
        if let Some(cb) = &self.options.on_event {
            cb(&event);
        }
    }

    pub fn offsets(&self) -> &ItemOffsetIndex {
        &self.offsets
    }

    pub fn item_count(&self) -> usize {
        self.offsets.len()
    }

    pub fn current_x(&self) -> f64 {
        self.current_x
    }

    /// The translation most recently handed to the render target.
    ///
    /// Equals [`Self::current_x`] between gestures; during a drag it follows the finger
    /// (including resisted overshoot past the left edge, where it is briefly positive).
    pub fn translation_x(&self) -> f64 {
        self.live_x
    }

    pub fn previous_delta(&self) -> f64 {
        self.previous_delta
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    pub fn boundary(&self) -> BoundaryContact {
        self.boundary
    }

    pub fn state(&self) -> SliderState {
        SliderState {
            current_x: self.current_x,
            previous_delta: self.previous_delta,
            container_width: self.container_width,
            content_width: self.content_width,
            boundary: self.boundary,
        }
    }

    /// The item whose start is at or left of the container's left edge.
    pub fn current_item(&self) -> usize {
        self.offsets.item_at(-self.current_x)
    }

    /// Re-queries `geometry` and swaps in a fresh offset index.
    ///
    /// On failure the previous geometry stays in place.
    pub fn remeasure(&mut self, geometry: &impl GeometryProvider) -> Result<(), CarouselError> {
        self.set_geometry(geometry.container_inner_width(), geometry.item_widths())
    }

    pub fn set_geometry(
        &mut self,
        container_width: f64,
        item_widths: impl IntoIterator<Item = f64>,
    ) -> Result<(), CarouselError> {
        let container_width = validate_container_width(container_width)?;
        let offsets = ItemOffsetIndex::build(item_widths)?;
        cdebug!(
            items = offsets.len(),
            container_width,
            content_width = offsets.total_width(),
            "TranslationEngine::set_geometry"
        );
        self.container_width = container_width;
        self.content_width = offsets.total_width();
        self.offsets = offsets;
        Ok(())
    }

    /// Dispatches one event from the gesture source.
    pub fn pan(&mut self, event: PanDelta) -> Result<Translation, CarouselError> {
        if !event.delta_x.is_finite() {
            cwarn!(delta_x = event.delta_x, "pan: ignoring non-finite delta");
            if event.is_final {
                // The gesture still ends; settle on the last usable delta.
                return self.end_gesture(self.previous_delta);
            }
            return Ok(Translation::immediate(self.live_x));
        }
        if event.is_final {
            self.end_gesture(event.delta_x)
        } else {
            Ok(self.drag(event.delta_x))
        }
    }

    /// Applies a continuous pan step. `delta_x` is cumulative since the gesture started.
    pub fn drag(&mut self, delta_x: f64) -> Translation {
        let step = self.next_step(delta_x);
        ctrace!(
            delta_x,
            raw_x = step.raw_x,
            x = step.x,
            left = step.contact.left,
            right = step.contact.right,
            "drag"
        );
        self.live_x = step.x;
        if step.contact.any() {
            self.notify(SliderEvent::ResistedMove {
                raw_x: step.raw_x,
                x: step.x,
                contact: step.contact,
            });
        }
        Translation::immediate(step.x)
    }

    /// Finishes the current gesture and settles the content.
    ///
    /// Returns an animated translation to the settled position. `previous_delta` is reset on
    /// every path, including the error path.
    pub fn end_gesture(&mut self, delta_x: f64) -> Result<Translation, CarouselError> {
        let settled = self.settle(delta_x);
        self.previous_delta = 0.0;
        settled
    }

    fn settle(&mut self, delta_x: f64) -> Result<Translation, CarouselError> {
        if self.boundary.any() {
            return Ok(self.snap_back());
        }

        let reached = self.next_step(delta_x);
        if reached.contact.any() {
            return Ok(self.snap_back());
        }

        if !self.options.snap_to_items {
            return Ok(self.settle_at(reached.x, Snap::Released, false));
        }

        let owning = self.offsets.item_at(-reached.x);
        let selected = if delta_x < 0.0 { owning + 1 } else { owning };
        if selected >= self.offsets.len() {
            // Dragged into a last item wider than the container: there is no next item to
            // align, so settle on the right edge.
            ctrace!(owning, "settle: no item after the last one");
            self.boundary = BoundaryContact {
                left: false,
                right: true,
            };
            return Ok(self.snap_back());
        }
        let target = -self.offsets.offset_of(selected)?.x_offset;
        ctrace!(owning, selected, target, "settle: snap to item");
        self.snap_to(target, selected)
    }

    /// Snaps to the start of item `index`, falling back to a snap-back when that position
    /// overshoots a boundary (e.g. the last items of a carousel wider than its container).
    pub fn go_to_item(&mut self, index: usize) -> Result<Translation, CarouselError> {
        let target = -self.offsets.offset_of(index)?.x_offset;
        self.snap_to(target, index)
    }

    fn snap_to(&mut self, target: f64, index: usize) -> Result<Translation, CarouselError> {
        self.boundary = self.check_boundary(target);
        if self.boundary.any() {
            return Ok(self.snap_back());
        }
        Ok(self.settle_at(target, Snap::Item(index), true))
    }

    fn snap_back(&mut self) -> Translation {
        let boundary = self.boundary.snap_boundary().unwrap_or(Boundary::Left);
        let target = match boundary {
            Boundary::Left => 0.0,
            // Content narrower than the container has no right travel: this clamps to 0.
            Boundary::Right => self.state().min_x(),
        };
        ctrace!(?boundary, target, "snap_back");
        self.reset_boundary();
        self.settle_at(target, Snap::Back(boundary), true)
    }

    fn reset_boundary(&mut self) {
        self.boundary = BoundaryContact::NONE;
    }

    fn settle_at(&mut self, x: f64, snap: Snap, animated: bool) -> Translation {
        self.current_x = x;
        self.live_x = x;
        self.notify(SliderEvent::Snapped { x, snap });
        Translation { x, animated }
    }

    fn check_boundary(&self, x: f64) -> BoundaryContact {
        BoundaryContact {
            left: self.container_width > self.content_width || x > 0.0,
            right: x.abs() + self.container_width > self.content_width,
        }
    }

    fn next_step(&mut self, delta_x: f64) -> Step {
        let step = delta_x - self.previous_delta;
        let raw_x = self.live_x + step;
        self.boundary = self.check_boundary(raw_x);

        let x = if self.boundary.any() {
            self.live_x + step / (self.stretch(delta_x) + self.options.resistance_level)
        } else {
            raw_x
        };

        self.previous_delta = delta_x;
        Step {
            raw_x,
            x,
            contact: self.boundary,
        }
    }

    fn stretch(&self, delta_x: f64) -> f64 {
        if self.content_width > 0.0 {
            delta_x.abs() / self.content_width
        } else {
            0.0
        }
    }
}

fn validate_container_width(width: f64) -> Result<f64, InvalidInput> {
    if width.is_finite() && width >= 0.0 {
        Ok(width)
    } else {
        Err(InvalidInput::BadContainerWidth { width })
    }
}

fn validate_resistance_level(level: f64) -> Result<(), InvalidInput> {
    if level.is_finite() && level > 0.0 {
        Ok(())
    } else {
        Err(InvalidInput::BadResistanceLevel { level })
    }
}
