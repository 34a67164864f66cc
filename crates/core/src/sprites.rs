//! Sprites module - runner artwork and the category → animation catalog
//!
//! Each category owns a cyclic animation: an ordered list of frames, each frame
//! an ordered list of text lines. Lines need not share a width.
//!
//! The catalog is built once at startup and never mutated. Lookups are total:
//! a missing or degenerate entry resolves to a shared single-glyph placeholder.

use std::collections::HashMap;
use std::sync::Arc;

use unicode_width::UnicodeWidthStr;

use crate::types::RunnerCategory;

/// Raw artwork: frames of lines.
pub type Art = &'static [&'static [&'static str]];

/// Glyph used when a category has no usable artwork.
pub const PLACEHOLDER_GLYPH: &str = "?";

const JOGGER_ART: Art = &[
    &[" J ", "/|\\", "/ \\"],
    &[" J ", "\\|/", "\\ /"],
];

const TRAIL_RUNNER_ART: Art = &[
    &[" T ", "~|~", "/^\\"],
    &[" T ", "~|~", "\\^/"],
];

const MARATHONER_ART: Art = &[
    &[" M ", "-|-", "/ \\"],
    &[" M ", "-|-", "\\ /"],
];

const CREW_RUNNER_ART: Art = &[
    &[" C ", "\\O/", " > >"],
    &[" C ", "/O\\", "< <"],
];

const ULTRA_RUNNER_ART: Art = &[
    &[" U ", "o|o", "_/\\_"],
    &[" U ", "o|o", "\\/_/"],
];

const TEN_K_RUNNER_ART: Art = &[
    &[" 10K ", " /|>", " / >"],
    &[" 10K ", "<|\\ ", "< \\ "],
];

/// Built-in artwork for a category.
pub fn builtin_art(category: RunnerCategory) -> Art {
    match category {
        RunnerCategory::Jogger => JOGGER_ART,
        RunnerCategory::TrailRunner => TRAIL_RUNNER_ART,
        RunnerCategory::Marathoner => MARATHONER_ART,
        RunnerCategory::CrewRunner => CREW_RUNNER_ART,
        RunnerCategory::UltraRunner => ULTRA_RUNNER_ART,
        RunnerCategory::TenKRunner => TEN_K_RUNNER_ART,
    }
}

/// One still image of an animation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of text lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Display width of the first line, or 1 when there is nothing to measure.
    ///
    /// This is the width used by the wrap-around rule.
    pub fn lead_width(&self) -> usize {
        match self.lines.first().map(|l| UnicodeWidthStr::width(l.as_str())) {
            Some(w) if w > 0 => w,
            _ => 1,
        }
    }
}

/// A cyclic sequence of frames, shared between the catalog and runners.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Arc<[Frame]>,
}

impl Animation {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames: frames.into(),
        }
    }

    /// Build an animation from static artwork.
    pub fn from_art(art: Art) -> Self {
        Self::new(art.iter().map(|lines| Frame::new(lines.iter().copied())).collect())
    }

    /// Single frame, single line: `"?"`.
    pub fn placeholder() -> Self {
        Self::new(vec![Frame::new([PLACEHOLDER_GLYPH])])
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Height of the first frame (0 for an empty animation).
    pub fn height(&self) -> usize {
        self.frames.first().map(Frame::height).unwrap_or(0)
    }

    /// True when the animation cannot be drawn: no frames, or a first frame with no lines.
    pub fn is_degenerate(&self) -> bool {
        self.frames.first().map(Frame::is_empty).unwrap_or(true)
    }

    /// True when both handles share the same frame storage.
    pub fn ptr_eq(&self, other: &Animation) -> bool {
        Arc::ptr_eq(&self.frames, &other.frames)
    }
}

impl PartialEq for Animation {
    fn eq(&self, other: &Self) -> bool {
        self.frames == other.frames
    }
}

impl Eq for Animation {}

/// Immutable lookup from runner category to animation.
#[derive(Debug, Clone)]
pub struct SpriteCatalog {
    entries: HashMap<RunnerCategory, Animation>,
    placeholder: Animation,
}

impl SpriteCatalog {
    /// Catalog with the built-in artwork for every category.
    pub fn builtin() -> Self {
        Self::from_entries(
            RunnerCategory::ALL
                .iter()
                .map(|&cat| (cat, Animation::from_art(builtin_art(cat)))),
        )
    }

    /// Catalog from arbitrary entries. Degenerate animations are dropped so that
    /// their lookups fall back to the placeholder.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (RunnerCategory, Animation)>,
    {
        let entries = entries
            .into_iter()
            .filter(|(_, anim)| !anim.is_degenerate())
            .collect();
        Self {
            entries,
            placeholder: Animation::placeholder(),
        }
    }

    /// Animation for a category, or the placeholder on a miss.
    pub fn lookup(&self, category: RunnerCategory) -> &Animation {
        self.entries.get(&category).unwrap_or(&self.placeholder)
    }

    pub fn placeholder(&self) -> &Animation {
        &self.placeholder
    }

    /// Number of categories with real artwork.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SpriteCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
