//! RunnerView: composites a `core::Simulation` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Simulation;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::text::encode_text;
use crate::types::{Theme, PLACEHOLDER_STATUS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Viewport matching the simulation's last known terminal size.
    pub fn of(sim: &Simulation) -> Self {
        Self::new(sim.width(), sim.height())
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Draws every runner's current frame, later runners on top.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunnerView {
    theme: Theme,
}

impl RunnerView {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Render the simulation into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, sim: &Simulation, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let theme = self.theme;
        for runner in sim.runners() {
            let Some(frame) = runner.current_frame() else {
                continue;
            };
            let style = CellStyle::fg(runner.color().resolve(theme));
            let pos = runner.position();
            let (col, row) = (pos.col(), pos.row());
            if col >= i32::from(viewport.width) {
                continue;
            }

            for (line_idx, line) in frame.lines().iter().enumerate() {
                let y = row.saturating_add(line_idx as i32);
                if y < 0 || y >= i32::from(viewport.height) {
                    continue;
                }
                fb.put_str(col, y, line, style);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, sim: &Simulation, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(sim, viewport, &mut fb);
        fb
    }

    /// Render the simulation at its own terminal size as a styled text block.
    ///
    /// Returns the placeholder status line until the size is known.
    pub fn render_text(&self, sim: &Simulation) -> String {
        let viewport = Viewport::of(sim);
        if viewport.is_empty() {
            return PLACEHOLDER_STATUS.to_string();
        }
        encode_text(&self.render(sim, viewport))
    }
}
