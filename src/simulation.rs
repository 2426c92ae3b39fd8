//! Frame-driven tick loop tying the model, input and drawing together.

use crate::config::{Bounds, ModelConfig};
use crate::float::Float;
use crate::interaction::{InputQueue, InteractionController, PointerEvent};
use crate::model::Model;
use crate::observer::StepObserver;
use crate::render::RenderSurface;

/// A running session: one model, one pointer, one rectangle.
///
/// The host calls [`push_event`](Self::push_event) from its input callbacks
/// and [`tick`](Self::tick) once per display refresh, re-scheduling itself
/// after each call. Nothing happens between ticks; queued events are
/// applied at the start of the next one.
pub struct Simulation<F: Float> {
    model: Model<F>,
    controller: InteractionController<F>,
    input: InputQueue<F>,
    bounds: Bounds<F>,
}

impl<F: Float> Simulation<F> {
    pub fn new(config: ModelConfig<F>, bounds: Bounds<F>) -> Self {
        Simulation {
            model: Model::new(config),
            controller: InteractionController::new(),
            input: InputQueue::new(),
            bounds,
        }
    }

    pub fn with_controller(mut self, controller: InteractionController<F>) -> Self {
        self.controller = controller;
        self
    }

    pub fn push_event(&mut self, event: PointerEvent<F>) {
        self.input.push(event);
    }

    /// Run one frame.
    ///
    /// Applies queued pointer events, steps the model, then redraws: clear,
    /// status line and rings, springs and particles.
    pub fn tick<S, O>(&mut self, surface: &mut S, observer: &mut O)
    where
        S: RenderSurface<F>,
        O: StepObserver,
    {
        for event in self.input.drain() {
            self.controller.handle(event, &mut self.model);
        }

        self.model.update(&self.bounds, observer);

        surface.clear(self.bounds);
        self.controller.draw_overlay(surface, &self.model);
        self.model.draw(surface);
    }

    pub fn model(&self) -> &Model<F> { &self.model }
    pub fn model_mut(&mut self) -> &mut Model<F> { &mut self.model }
    pub fn controller(&self) -> &InteractionController<F> { &self.controller }
    pub fn controller_mut(&mut self) -> &mut InteractionController<F> { &mut self.controller }
    pub fn bounds(&self) -> Bounds<F> { self.bounds }

    /// Resize the rectangle, e.g. after the host surface changed size.
    pub fn set_bounds(&mut self, bounds: Bounds<F>) {
        self.bounds = bounds;
    }

    pub fn pending_events(&self) -> usize {
        self.input.len()
    }
}
