use sproing::{
    scene, Bounds, CommandBuffer, ModelConfig, NoOpStepObserver, PointerEvent, Simulation, Vec2,
};
use wasm_bindgen::prelude::*;

// ---- Constructor Demo ----

/// The spinning braced square, driven from JavaScript.
///
/// JS forwards canvas mouse events to `pointer_*`, calls `frame()` from
/// `requestAnimationFrame` and replays the returned command stream.
#[wasm_bindgen]
pub struct ConstructorDemo {
    sim: Simulation<f32>,
    frame: CommandBuffer<f32>,
}

#[wasm_bindgen]
impl ConstructorDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        let bounds = Bounds::from_size(width, height);
        let mut sim = Simulation::new(ModelConfig::new(), bounds);
        scene::square(sim.model_mut(), bounds.center(), 100.0, 5.0);
        ConstructorDemo {
            sim,
            frame: CommandBuffer::new(),
        }
    }

    /// Screen position of the canvas' top-left corner.
    pub fn set_origin(&mut self, left: f32, top: f32) {
        self.sim.controller_mut().set_origin(Vec2::new(left, top));
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.sim.set_bounds(Bounds::from_size(width, height));
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, dx: f32, dy: f32) {
        self.sim.push_event(PointerEvent::Move { x, y, dx, dy });
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.sim.push_event(PointerEvent::Down { x, y });
    }

    pub fn pointer_up(&mut self) {
        self.sim.push_event(PointerEvent::Up);
    }

    /// Step once and return the frame as `[opcode, color, args...]` records.
    ///
    /// Opcodes: 0 clear(l, t, r, b), 1 disc(x, y, r), 2 square(x, y, half),
    /// 3 ring(x, y, r), 4 line(ax, ay, bx, by, width). Colors: 0 black, 1 grey.
    pub fn frame(&mut self) -> Vec<f32> {
        self.frame.reset();
        self.sim.tick(&mut self.frame, &mut NoOpStepObserver);
        self.frame.to_f32_stream()
    }

    /// Pointer status line from the last frame.
    pub fn status_text(&self) -> String {
        self.frame.texts().collect::<Vec<_>>().join("\n")
    }

    pub fn particle_count(&self) -> usize {
        self.sim.model().particle_count()
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        let pos = self.sim.model().positions();
        let mut out = Vec::with_capacity(pos.len() * 2);
        for p in &pos {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }
}

// ---- Lattice Demo ----

/// A lattice hanging from its top corners.
#[wasm_bindgen]
pub struct LatticeDemo {
    sim: Simulation<f32>,
    frame: CommandBuffer<f32>,
}

#[wasm_bindgen]
impl LatticeDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, cols: usize, rows: usize, spacing: f32) -> Self {
        let bounds = Bounds::from_size(width, height);
        let config = ModelConfig::new().with_damping(0.98).with_gravity(Vec2::new(0.0, 0.2));
        let mut sim = Simulation::new(config, bounds);
        let first = scene::lattice(sim.model_mut(), Vec2::new(40.0, 40.0), cols, rows, spacing, 3.0);
        let last_in_row = first + cols.max(1) - 1;
        for i in [first, last_in_row] {
            if let Some(p) = sim.model_mut().particle_mut(i) {
                p.pin();
            }
        }
        LatticeDemo {
            sim,
            frame: CommandBuffer::new(),
        }
    }

    pub fn set_origin(&mut self, left: f32, top: f32) {
        self.sim.controller_mut().set_origin(Vec2::new(left, top));
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, dx: f32, dy: f32) {
        self.sim.push_event(PointerEvent::Move { x, y, dx, dy });
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.sim.push_event(PointerEvent::Down { x, y });
    }

    pub fn pointer_up(&mut self) {
        self.sim.push_event(PointerEvent::Up);
    }

    pub fn frame(&mut self) -> Vec<f32> {
        self.frame.reset();
        self.sim.tick(&mut self.frame, &mut NoOpStepObserver);
        self.frame.to_f32_stream()
    }
}
