//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, host loop).
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Animation timer interval |
//!
//! # Spawn Parameters
//!
//! Runners are created once at startup with randomized attributes:
//!
//! - **Count**: `MIN_RUNNERS..=MAX_RUNNERS` (3 to 8)
//! - **Velocity**: `MIN_VELOCITY..MAX_VELOCITY` cells per tick (0.5 to 2.0)
//! - **Start column**: `0..START_X_SPAN`
//! - **Start row**: `1..=START_Y_SPAN`, pulled up to fit a `REFERENCE_HEIGHT` terminal
//! - **Colors**: ANSI 256 palette indexes in `COLOR_MIN..COLOR_MAX`
//!
//! # Examples
//!
//! ```
//! use tui_runners_types::{AdaptiveColor, RunnerCategory, Theme};
//!
//! assert_eq!(RunnerCategory::from_index(7), RunnerCategory::TrailRunner);
//! assert_eq!(RunnerCategory::TenKRunner.to_string(), "TenKRunner");
//!
//! let color = AdaptiveColor::new(21, 226);
//! assert_eq!(color.resolve(Theme::Light), 21);
//! assert_eq!(color.resolve(Theme::Dark), 226);
//! ```

use std::fmt;

/// Animation timer interval in milliseconds.
pub const TICK_MS: u32 = 100;

/// Fewest runners spawned at startup.
pub const MIN_RUNNERS: u32 = 3;

/// Most runners spawned at startup.
pub const MAX_RUNNERS: u32 = 8;

/// Slowest spawn velocity (cells per tick).
pub const MIN_VELOCITY: f64 = 0.5;

/// Upper bound (exclusive) of spawn velocity (cells per tick).
pub const MAX_VELOCITY: f64 = 2.0;

/// Start columns are drawn from `0..START_X_SPAN`.
pub const START_X_SPAN: u32 = 10;

/// Start rows are drawn from `1..=START_Y_SPAN`.
pub const START_Y_SPAN: u32 = 20;

/// Terminal height assumed before the first resize event.
pub const REFERENCE_HEIGHT: u16 = 24;

/// First palette index used for runner colors (skips the 16 system colors).
pub const COLOR_MIN: u8 = 16;

/// Palette indexes are drawn from `COLOR_MIN..COLOR_MAX`.
pub const COLOR_MAX: u8 = 246;

/// Status line shown until the terminal reports a usable size.
pub const PLACEHOLDER_STATUS: &str = "Initializing or terminal size too small...";

/// The six runner categories.
///
/// Each category has its own animation in the sprite catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RunnerCategory {
    Jogger,
    TrailRunner,
    Marathoner,
    CrewRunner,
    UltraRunner,
    TenKRunner,
}

impl RunnerCategory {
    /// All categories in declaration order.
    pub const ALL: [RunnerCategory; 6] = [
        RunnerCategory::Jogger,
        RunnerCategory::TrailRunner,
        RunnerCategory::Marathoner,
        RunnerCategory::CrewRunner,
        RunnerCategory::UltraRunner,
        RunnerCategory::TenKRunner,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// Map any index onto a category (wraps modulo [`Self::COUNT`]).
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    pub fn name(self) -> &'static str {
        match self {
            RunnerCategory::Jogger => "Jogger",
            RunnerCategory::TrailRunner => "TrailRunner",
            RunnerCategory::Marathoner => "Marathoner",
            RunnerCategory::CrewRunner => "CrewRunner",
            RunnerCategory::UltraRunner => "UltraRunner",
            RunnerCategory::TenKRunner => "TenKRunner",
        }
    }
}

impl fmt::Display for RunnerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position in terminal cell coordinates.
///
/// Floating point so that sub-cell velocities accumulate. `x` goes negative
/// while a sprite is entering from the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Cell column the position falls in (`floor(x)`).
    pub fn col(&self) -> i32 {
        self.x.floor() as i32
    }

    /// Cell row the position falls in (`floor(y)`).
    pub fn row(&self) -> i32 {
        self.y.floor() as i32
    }
}

/// Terminal background brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// A light/dark pair of ANSI 256-color palette indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveColor {
    pub light: u8,
    pub dark: u8,
}

impl AdaptiveColor {
    pub const fn new(light: u8, dark: u8) -> Self {
        Self { light, dark }
    }

    /// Pick the variant for the given background.
    pub fn resolve(self, theme: Theme) -> u8 {
        match theme {
            Theme::Light => self.light,
            Theme::Dark => self.dark,
        }
    }
}
