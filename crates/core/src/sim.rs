//! Simulation state: the runner collection plus the current terminal size.
//!
//! Created once at startup from a seeded [`SimpleRng`], advanced once per tick,
//! and dropped at exit.

use tracing::debug;

use crate::rng::SimpleRng;
use crate::runner::{advance_all, Runner};
use crate::sprites::SpriteCatalog;
use crate::types::{
    AdaptiveColor, Position, RunnerCategory, COLOR_MAX, COLOR_MIN, MAX_RUNNERS, MAX_VELOCITY,
    MIN_RUNNERS, MIN_VELOCITY, REFERENCE_HEIGHT, START_X_SPAN, START_Y_SPAN,
};

#[derive(Debug, Clone, Default)]
pub struct Simulation {
    runners: Vec<Runner>,
    width: u16,
    height: u16,
}

impl Simulation {
    /// Empty simulation with an unknown (zero) terminal size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulation with explicit runners, mostly for tests and benches.
    pub fn with_runners(runners: Vec<Runner>, width: u16, height: u16) -> Self {
        Self {
            runners,
            width,
            height,
        }
    }

    /// Spawn `MIN_RUNNERS..=MAX_RUNNERS` runners with random attributes.
    pub fn populate(catalog: &SpriteCatalog, rng: &mut SimpleRng) -> Self {
        let count = rng.next_between(MIN_RUNNERS, MAX_RUNNERS);
        let runners: Vec<Runner> = (0..count).map(|id| spawn_runner(id, catalog, rng)).collect();
        debug!(count = runners.len(), "populated simulation");
        Self {
            runners,
            width: 0,
            height: 0,
        }
    }

    pub fn runners(&self) -> &[Runner] {
        &self.runners
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// True once the host has reported a non-empty terminal.
    pub fn has_size(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Record a new terminal size and pull runners that would hang off the
    /// bottom back onto the screen.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;

        for runner in &mut self.runners {
            let art_h = runner.art_height() as f64;
            if runner.position().y + art_h >= f64::from(height) {
                let y = (f64::from(height) - art_h - 1.0).max(0.0);
                runner.set_row(y);
            }
        }
        debug!(width, height, "resized simulation");
    }

    /// Advance every runner by one tick.
    pub fn tick(&mut self) {
        advance_all(&mut self.runners, self.width);
    }
}

fn spawn_runner(id: u32, catalog: &SpriteCatalog, rng: &mut SimpleRng) -> Runner {
    let category = RunnerCategory::from_index(rng.next_range(RunnerCategory::COUNT as u32) as usize);
    let animation = catalog.lookup(category).clone();
    let art_h = animation.height() as i64;

    let mut y = i64::from(rng.next_between(1, START_Y_SPAN));
    if y + art_h > i64::from(REFERENCE_HEIGHT) {
        y = i64::from(REFERENCE_HEIGHT) - art_h;
    }
    let y = y.max(0);

    let x = rng.next_range(START_X_SPAN);
    let velocity = MIN_VELOCITY + rng.next_f64() * (MAX_VELOCITY - MIN_VELOCITY);
    let color = AdaptiveColor::new(random_color(rng), random_color(rng));

    Runner::new(
        id,
        category,
        Position::new(f64::from(x), y as f64),
        velocity,
        color,
        animation,
    )
}

fn random_color(rng: &mut SimpleRng) -> u8 {
    COLOR_MIN + rng.next_range(u32::from(COLOR_MAX - COLOR_MIN)) as u8
}
