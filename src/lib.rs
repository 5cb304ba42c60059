//! A declarative 2D image algebra.
//!
//! Values describe shapes and how they compose (overlay, beside, above,
//! translation, style transforms). The renderer walks that description,
//! computing bounding boxes and child draw origins, and issues primitive
//! path calls to any [`Canvas`].
//!
//! ```
//! use limner::{Image, CommandLog, Point, draw, rgb};
//!
//! let picture = Image::circle(10.0)
//!     .beside(Image::rectangle(20.0, 40.0))
//!     .fill_color(rgb(255, 0, 0));
//!
//! let mut log = CommandLog::new();
//! draw(&picture, Point::new(100.0, 100.0), &mut log);
//! assert!(!log.is_empty());
//! ```

use pest_derive::Parser;

pub mod color;
pub mod errors;
pub mod image;
pub mod layout;
mod log;
pub mod parse;
pub mod render;
pub mod shapes;
pub mod types;

#[derive(Parser)]
#[grammar = "color.pest"]
pub struct ColorParser;

pub use color::{Color, hsl, hsla, rgb, rgba};
pub use errors::ParseError;
pub use image::{Drawable, Image};
pub use layout::BoundingBox;
pub use parse::parse_color;
pub use render::canvas::{Canvas, CommandLog, DrawCommand};
pub use render::context::{DrawingContext, LineCap, LineJoin, Stroke};
pub use render::{draw, render};
pub use shapes::{Circle, Primitive, Rectangle, Shape, Triangle};
pub use types::{Angle, Normalized, Offset, Point, UnsignedByte};
