//! Rendering an image tree onto a canvas
//!
//! This module is organized into submodules:
//! - `defaults`: Base style constants
//! - `context`: DrawingContext, the ambient fill/stroke style
//! - `canvas`: The Canvas sink trait and a recording implementation
//!
//! The traversal is depth-first and fully deterministic: overlapping shapes
//! occlude in exactly the order they are visited.

pub mod canvas;
pub mod context;
pub mod defaults;

use crate::image::Image;
use crate::layout::{above_origins, beside_origins};
use crate::log::{debug, trace};
use crate::shapes::{Primitive, Shape};
use crate::types::Point;

use canvas::Canvas;
use context::DrawingContext;

/// Render `image` with the default style, its origin placed at `center`.
pub fn draw(image: &Image, center: Point, canvas: &mut dyn Canvas) {
    debug!(x = center.x, y = center.y, "drawing image");
    render(image, center, &DrawingContext::default(), canvas);
}

/// Render `image` with its local origin at device point `origin`.
pub fn render(image: &Image, origin: Point, context: &DrawingContext, canvas: &mut dyn Canvas) {
    match image {
        Image::Shape(shape) => {
            trace!(x = origin.x, y = origin.y, ?shape, "shape");
            draw_shape(shape, origin, context, canvas);
        }
        Image::Overlay { top, bottom } => {
            render(bottom, origin, context, canvas);
            render(top, origin, context, canvas);
        }
        Image::Beside { left, right } => {
            let (lb, rb) = (left.bounding_box(), right.bounding_box());
            let parent = lb.beside(&rb);
            let (lo, ro) = beside_origins(origin, &parent, &lb, &rb);
            trace!(width = parent.width(), "beside");
            render(left, lo, context, canvas);
            render(right, ro, context, canvas);
        }
        Image::Above { top, bottom } => {
            let (tb, bb) = (top.bounding_box(), bottom.bounding_box());
            let parent = tb.above(&bb);
            let (to, bo) = above_origins(origin, &parent, &tb, &bb);
            trace!(height = parent.height(), "above");
            render(top, to, context, canvas);
            render(bottom, bo, context, canvas);
        }
        Image::At { offset, inner } => {
            render(inner, origin + offset.to_device(), context, canvas);
        }
        Image::ContextTransform { transform, inner } => {
            let styled = (transform.as_ref())(context);
            render(inner, origin, &styled, canvas);
        }
        Image::Drawable(drawable) => {
            render(&drawable.draw(), origin, context, canvas);
        }
    }
}

/// Build the shape's path, then fill and stroke it if the context asks.
fn draw_shape(shape: &Primitive, origin: Point, context: &DrawingContext, canvas: &mut dyn Canvas) {
    canvas.begin_path();
    shape.trace(origin, canvas);
    canvas.close_path();

    if let Some(fill) = context.fill {
        canvas.set_fill_style(&fill.to_string());
        canvas.fill();
    }
    if let Some(stroke) = context.stroke {
        canvas.set_stroke_style(
            &stroke.color.to_string(),
            stroke.width,
            stroke.cap,
            stroke.join,
        );
        canvas.stroke();
    }
}
