//! The drawing sink the renderer targets, and a recording implementation.

use std::fmt;

use super::context::{LineCap, LineJoin};

/// A 2D vector drawing surface in device space (y grows downward).
///
/// Mirrors the path API of an HTML canvas: a path is built between
/// `begin_path` and `close_path`, then painted with `fill` and/or `stroke`
/// using the most recently set style.
pub trait Canvas {
    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Angles in radians, measured clockwise on screen from the +x axis.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_fill_style(&mut self, color: &str);
    fn fill(&mut self);
    fn set_stroke_style(&mut self, color: &str, width: f64, cap: LineCap, join: LineJoin);
    fn stroke(&mut self);
}

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    ClosePath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    SetFillStyle(String),
    Fill,
    SetStrokeStyle {
        color: String,
        width: f64,
        cap: LineCap,
        join: LineJoin,
    },
    Stroke,
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::BeginPath => write!(f, "begin_path"),
            DrawCommand::ClosePath => write!(f, "close_path"),
            DrawCommand::MoveTo { x, y } => write!(f, "move_to {} {}", fmt_num(*x), fmt_num(*y)),
            DrawCommand::LineTo { x, y } => write!(f, "line_to {} {}", fmt_num(*x), fmt_num(*y)),
            DrawCommand::Arc {
                cx,
                cy,
                radius,
                start,
                end,
            } => write!(
                f,
                "arc {} {} {} {} {}",
                fmt_num(*cx),
                fmt_num(*cy),
                fmt_num(*radius),
                fmt_num(*start),
                fmt_num(*end)
            ),
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "rect {} {} {} {}",
                fmt_num(*x),
                fmt_num(*y),
                fmt_num(*width),
                fmt_num(*height)
            ),
            DrawCommand::SetFillStyle(color) => write!(f, "fill_style {}", color),
            DrawCommand::Fill => write!(f, "fill"),
            DrawCommand::SetStrokeStyle {
                color,
                width,
                cap,
                join,
            } => write!(
                f,
                "stroke_style {} {} {} {}",
                color,
                fmt_num(*width),
                cap,
                join
            ),
            DrawCommand::Stroke => write!(f, "stroke"),
        }
    }
}

/// A canvas that records every call, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandLog {
    commands: Vec<DrawCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for CommandLog {
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.commands.push(DrawCommand::Arc {
            cx,
            cy,
            radius,
            start,
            end,
        });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands
            .push(DrawCommand::SetFillStyle(color.to_string()));
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn set_stroke_style(&mut self, color: &str, width: f64, cap: LineCap, join: LineJoin) {
        self.commands.push(DrawCommand::SetStrokeStyle {
            color: color.to_string(),
            width,
            cap,
            join,
        });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
}

/// One command per line.
impl fmt::Display for CommandLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            writeln!(f, "{}", command)?;
        }
        Ok(())
    }
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    // Trig noise like sin(PI) would otherwise print as 1.22465e-16
    if value.abs() < 1e-9 || !value.is_finite() {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if !s.contains('.') {
        return s;
    }
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
