//! Interactive 2D mass-spring simulation.
//!
//! `sproing` models point masses joined by linear springs, stepped once per
//! display frame with semi-implicit Euler, confined to a rectangle with
//! restitution and surface friction, and draggable with a pointer.
//!
//! # Features
//!
//! - **Spring graph**: particles and springs in arenas, each spring shared by
//!   both endpoints' adjacency lists
//! - **Per-tick step**: force accumulation, integration, per-axis wall contact
//! - **Direct drag**: pointer events queued and applied at the start of a tick
//! - **Host-agnostic drawing**: the `RenderSurface` trait, plus a recording
//!   `CommandBuffer`
//! - **Observable**: monitor ticks via the `StepObserver` trait or the `log` facade
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use sproing::{Bounds, CommandBuffer, ModelConfig, NoOpStepObserver, Simulation, Vec2};
//!
//! let bounds = Bounds::from_size(400.0f32, 300.0);
//! let mut sim = Simulation::new(ModelConfig::new(), bounds);
//! sproing::scene::square(sim.model_mut(), bounds.center(), 100.0, 5.0);
//!
//! let mut frame = CommandBuffer::new();
//! sim.tick(&mut frame, &mut NoOpStepObserver);
//! assert_eq!(frame.line_count(), 6);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod spring;
pub mod particle;
pub mod model;
pub mod render;
pub mod interaction;
pub mod scene;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use spring::{Spring, SpringId};
pub use particle::{Link, Particle};
pub use model::{Edge, Model, Wall};
pub use render::{Color, CommandBuffer, DrawCommand, RenderSurface};
pub use interaction::{InputQueue, InteractionController, PointerEvent};
pub use simulation::Simulation;
pub use config::{Bounds, ModelConfig};
pub use observer::{LogObserver, NoOpStepObserver, StepObserver};
pub use error::ModelError;
