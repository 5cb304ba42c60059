//! Drawing context - the ambient style threaded through a render

use std::fmt;

use crate::color::Color;

use super::defaults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        })
    }
}

/// Outline style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub color: Color,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: defaults::STROKE_WIDTH,
            color: defaults::STROKE_COLOR,
            cap: defaults::LINE_CAP,
            join: defaults::LINE_JOIN,
        }
    }
}

/// Fill and stroke applied to every primitive beneath the point where it
/// was set. `None` means that aspect is not painted at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingContext {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl Default for DrawingContext {
    /// Black one-unit lines, no fill.
    fn default() -> Self {
        Self {
            fill: defaults::FILL,
            stroke: Some(Stroke::default()),
        }
    }
}

impl DrawingContext {
    pub fn new(fill: Option<Color>, stroke: Option<Stroke>) -> Self {
        Self { fill, stroke }
    }

    pub fn with_fill(&self, color: Color) -> DrawingContext {
        DrawingContext {
            fill: Some(color),
            ..*self
        }
    }

    pub fn without_fill(&self) -> DrawingContext {
        DrawingContext {
            fill: None,
            ..*self
        }
    }

    pub fn with_stroke(&self, stroke: Stroke) -> DrawingContext {
        DrawingContext {
            stroke: Some(stroke),
            ..*self
        }
    }

    pub fn without_stroke(&self) -> DrawingContext {
        DrawingContext {
            stroke: None,
            ..*self
        }
    }

    /// Recolor the stroke, turning it back on with defaults if it was off.
    pub fn with_line_color(&self, color: Color) -> DrawingContext {
        let stroke = self.stroke.unwrap_or_default();
        self.with_stroke(Stroke { color, ..stroke })
    }

    /// Resize the stroke, turning it back on with defaults if it was off.
    pub fn with_line_width(&self, width: f64) -> DrawingContext {
        let stroke = self.stroke.unwrap_or_default();
        self.with_stroke(Stroke { width, ..stroke })
    }
}
