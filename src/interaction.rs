//! Pointer-driven picking and dragging.
//!
//! Hosts push [`PointerEvent`]s into an [`InputQueue`] whenever the platform
//! delivers them. The tick driver drains the queue at the start of each tick
//! and feeds the events to the [`InteractionController`], so the model only
//! ever has one writer at a time.

use crate::float::Float;
use crate::model::Model;
use crate::render::{Color, RenderSurface};
use crate::vec::Vec2;
use alloc::collections::VecDeque;
use alloc::format;

/// Pick radius used for highlighting and selection when none is configured.
pub const DEFAULT_PICK_RADIUS: f32 = 10.0;

/// Gap between a particle's edge and its highlight/selection ring.
const RING_GAP: f32 = 5.0;

/// Where the status line (pointer coordinates) is drawn.
const STATUS_ORIGIN: (f32, f32) = (20.0, 20.0);

/// A pointer event in screen coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent<F: Float> {
    /// The pointer moved to `(x, y)`, `(dx, dy)` since the previous move.
    Move { x: F, y: F, dx: F, dy: F },
    /// The button went down at `(x, y)`.
    Down { x: F, y: F },
    /// The button was released.
    Up,
}

/// FIFO of pointer events awaiting the next tick.
#[derive(Clone, Debug, Default)]
pub struct InputQueue<F: Float> {
    events: VecDeque<PointerEvent<F>>,
}

impl<F: Float> InputQueue<F> {
    pub fn new() -> Self {
        InputQueue { events: VecDeque::new() }
    }

    pub fn push(&mut self, event: PointerEvent<F>) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove and yield every queued event, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = PointerEvent<F>> + '_ {
        self.events.drain(..)
    }
}

/// Tracks the pointer and which particle it highlights, selects or drags.
///
/// Particle references are indices into the model, which never removes
/// particles, so they stay valid for the session.
#[derive(Clone, Debug)]
pub struct InteractionController<F: Float> {
    pointer: Vec2<F>,
    origin: Vec2<F>,
    pick_radius: F,
    highlight: Option<usize>,
    select: Option<usize>,
    drag: Option<usize>,
}

impl<F: Float> InteractionController<F> {
    pub fn new() -> Self {
        InteractionController {
            pointer: Vec2::zero(),
            origin: Vec2::zero(),
            pick_radius: F::from_f32(DEFAULT_PICK_RADIUS),
            highlight: None,
            select: None,
            drag: None,
        }
    }

    pub fn with_pick_radius(mut self, pick_radius: F) -> Self {
        self.pick_radius = pick_radius;
        self
    }

    /// Screen position of the surface's top-left corner.
    pub fn set_origin(&mut self, origin: Vec2<F>) {
        self.origin = origin;
    }

    pub fn pointer(&self) -> Vec2<F> { self.pointer }
    pub fn highlighted(&self) -> Option<usize> { self.highlight }
    pub fn selected(&self) -> Option<usize> { self.select }
    pub fn dragged(&self) -> Option<usize> { self.drag }

    /// Apply one pointer event to the controller and the model.
    pub fn handle(&mut self, event: PointerEvent<F>, model: &mut Model<F>) {
        match event {
            PointerEvent::Move { x, y, dx, dy } => {
                self.pointer = Vec2::new(x, y) - self.origin;
                self.highlight = model.locate(self.pointer, self.pick_radius);
                if let Some(i) = self.drag {
                    if let Some(p) = model.particle_mut(i) {
                        p.drag_by(Vec2::new(dx, dy));
                    }
                }
            }
            PointerEvent::Down { x, y } => {
                // An Up can be lost when the button is released off-surface.
                if let Some(i) = self.drag.take() {
                    if let Some(p) = model.particle_mut(i) {
                        p.release();
                    }
                }
                self.pointer = Vec2::new(x, y) - self.origin;
                self.select = model.locate(self.pointer, self.pick_radius);
                self.drag = self.select;
                if let Some(i) = self.drag {
                    log::debug!("dragging particle {}", i);
                }
            }
            PointerEvent::Up => {
                if let Some(i) = self.drag.take() {
                    if let Some(p) = model.particle_mut(i) {
                        p.release();
                    }
                    log::debug!("released particle {}", i);
                }
            }
        }
    }

    /// Draw the pointer status line and the highlight/selection rings.
    pub fn draw_overlay<S: RenderSurface<F>>(&self, surface: &mut S, model: &Model<F>) {
        let (sx, sy) = STATUS_ORIGIN;
        let status = format!("{}", self.pointer);
        surface.draw_text(&status, F::from_f32(sx), F::from_f32(sy), Color::Black);

        let gap = F::from_f32(RING_GAP);
        if let Some(p) = self.highlight.and_then(|i| model.particle(i)) {
            surface.stroke_circle(p.pos, p.radius + gap, Color::Grey);
        }
        if let Some(p) = self.select.and_then(|i| model.particle(i)) {
            surface.stroke_circle(p.pos, p.radius + gap, Color::Black);
        }
    }
}

impl<F: Float> Default for InteractionController<F> {
    fn default() -> Self {
        Self::new()
    }
}
