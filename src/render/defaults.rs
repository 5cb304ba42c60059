//! Base style applied at the root of every render

use crate::color::Color;

use super::context::{LineCap, LineJoin};

pub const STROKE_WIDTH: f64 = 1.0;
pub const STROKE_COLOR: Color = Color::BLACK;
pub const LINE_CAP: LineCap = LineCap::Butt;
pub const LINE_JOIN: LineJoin = LineJoin::Miter;
pub const FILL: Option<Color> = None;
