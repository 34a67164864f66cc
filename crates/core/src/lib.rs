//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the runner model and the per-tick update.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same runners
//! - **Testable**: Every step is a plain function over owned state
//! - **Portable**: Can run headless (tests, benches) or behind any renderer
//!
//! # Module Structure
//!
//! - [`sprites`]: Runner artwork and the immutable category → animation catalog
//! - [`runner`]: Runner entity, frame cycling, movement and wrap-around
//! - [`sim`]: Simulation state (runners + terminal size), population and resize
//! - [`rng`]: Explicitly seeded LCG used for spawning
//!
//! # Example
//!
//! ```
//! use tui_runners_core::{Simulation, SimpleRng, SpriteCatalog};
//!
//! let catalog = SpriteCatalog::builtin();
//! let mut rng = SimpleRng::new(12345);
//! let mut sim = Simulation::populate(&catalog, &mut rng);
//!
//! sim.resize(80, 24);
//! let before = sim.runners()[0].position().x;
//! sim.tick();
//! assert!(sim.runners()[0].position().x > before);
//! ```
//!
//! # Timing
//!
//! The host calls [`Simulation::tick`](sim::Simulation::tick) once every
//! `TICK_MS` (100ms). Velocities are in cells per tick.

pub mod rng;
pub mod runner;
pub mod sim;
pub mod sprites;

pub use tui_runners_types as types;

pub use rng::SimpleRng;
pub use runner::{advance_all, Runner};
pub use sim::Simulation;
pub use sprites::{builtin_art, Animation, Frame, SpriteCatalog, PLACEHOLDER_GLYPH};
