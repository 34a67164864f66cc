//! Terminal rendering module.
//!
//! Composites runners into a simple framebuffer that can be flushed to a
//! terminal backend or serialized to a text block. It avoids widget/layout
//! toolkits: the whole screen is one grid of styled cells.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep compositing pure so it can be asserted on cell by cell
//! - Handle wide glyphs (emoji) without shifting the rest of a row

pub mod fb;
pub mod renderer;
pub mod runner_view;
pub mod text;
pub mod theme;

pub use tui_runners_core as core;
pub use tui_runners_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use runner_view::{RunnerView, Viewport};
pub use text::{encode_text, plain_text};
pub use theme::{detect_theme, theme_from_colorfgbg};
