//! Runner entity and the per-tick simulation step.

use crate::sprites::{Animation, Frame};
use crate::types::{AdaptiveColor, Position, RunnerCategory};

/// One animated sprite crossing the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Runner {
    id: u32,
    category: RunnerCategory,
    pos: Position,
    velocity: f64,
    frame_index: usize,
    color: AdaptiveColor,
    animation: Animation,
}

impl Runner {
    pub fn new(
        id: u32,
        category: RunnerCategory,
        pos: Position,
        velocity: f64,
        color: AdaptiveColor,
        animation: Animation,
    ) -> Self {
        Self {
            id,
            category,
            pos,
            velocity,
            frame_index: 0,
            color,
            animation,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn category(&self) -> RunnerCategory {
        self.category
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn color(&self) -> AdaptiveColor {
        self.color
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Frame to draw this tick. `None` only for an empty animation.
    pub fn current_frame(&self) -> Option<&Frame> {
        self.animation.frame(self.frame_index)
    }

    /// Display width used by the wrap rule (1 when the art is unusable).
    pub fn art_width(&self) -> usize {
        self.current_frame().map(Frame::lead_width).unwrap_or(1)
    }

    /// Line count of the first frame.
    pub fn art_height(&self) -> usize {
        self.animation.height()
    }

    /// Move vertically. Only the host's resize handling does this.
    pub(crate) fn set_row(&mut self, y: f64) {
        self.pos.y = y;
    }

    /// Step the animation one frame, wrapping modulo the frame count.
    pub fn next_frame(&mut self) {
        let count = self.animation.len();
        if count == 0 {
            return;
        }
        self.frame_index = (self.frame_index + 1) % count;
    }

    /// Advance one tick: move by `velocity`, step the frame, and wrap to the
    /// left edge (fully off-screen) once past `term_width`.
    ///
    /// The wrap offset uses the width of the frame just stepped to.
    pub fn advance(&mut self, term_width: u16) {
        self.pos.x += self.velocity;
        self.next_frame();

        if self.pos.x > f64::from(term_width) {
            self.pos.x = -(self.art_width() as f64);
        }
    }
}

/// Advance every runner by one tick. Order is irrelevant; runners don't interact.
pub fn advance_all(runners: &mut [Runner], term_width: u16) {
    for runner in runners {
        runner.advance(term_width);
    }
}
