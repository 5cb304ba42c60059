//! Primitive shapes.
//!
//! Each shape is its own type that knows how to:
//! - Report its bounding box (always centered on its local origin)
//! - Trace its outline onto a [`Canvas`] around a device-space origin
//!
//! Path bracketing (`begin_path`/`close_path`) and painting belong to the
//! renderer; shapes only emit the moves in between.

use std::f64::consts::TAU;

use enum_dispatch::enum_dispatch;
use glam::dvec2;

use crate::layout::BoundingBox;
use crate::render::canvas::Canvas;
use crate::types::Point;

/// Common behavior for all primitive shapes
#[enum_dispatch]
pub trait Shape {
    /// Extent around the shape's own origin
    fn bounding_box(&self) -> BoundingBox;

    /// Emit the outline, centered on `origin`
    fn trace(&self, origin: Point, canvas: &mut dyn Canvas);
}

/// A circle of the given radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::centered(self.radius * 2.0, self.radius * 2.0)
    }

    fn trace(&self, origin: Point, canvas: &mut dyn Canvas) {
        canvas.arc(origin.x, origin.y, self.radius, 0.0, TAU);
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Rectangle {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::centered(self.width, self.height)
    }

    fn trace(&self, origin: Point, canvas: &mut dyn Canvas) {
        canvas.rect(
            origin.x - self.width / 2.0,
            origin.y - self.height / 2.0,
            self.width,
            self.height,
        );
    }
}

/// An isosceles triangle, apex up, base along the bottom edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub width: f64,
    pub height: f64,
}

impl Triangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Shape for Triangle {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::centered(self.width, self.height)
    }

    fn trace(&self, origin: Point, canvas: &mut dyn Canvas) {
        let center = origin.to_dvec2();
        let half = dvec2(self.width / 2.0, self.height / 2.0);

        // Device space: +y is down, so the apex sits at -half.y
        let base_left = center + dvec2(-half.x, half.y);
        let apex = center - dvec2(0.0, half.y);
        let base_right = center + half;

        canvas.move_to(base_left.x, base_left.y);
        canvas.line_to(apex.x, apex.y);
        canvas.line_to(base_right.x, base_right.y);
    }
}

/// A closed set of primitive shapes
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Circle(Circle),
    Rectangle(Rectangle),
    Triangle(Triangle),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::canvas::{CommandLog, DrawCommand};

    #[test]
    fn circle_traces_full_arc() {
        let mut log = CommandLog::new();
        Circle::new(5.0).trace(Point::new(10.0, 20.0), &mut log);
        assert_eq!(
            log.commands(),
            &[DrawCommand::Arc {
                cx: 10.0,
                cy: 20.0,
                radius: 5.0,
                start: 0.0,
                end: TAU,
            }]
        );
    }

    #[test]
    fn rectangle_traces_from_top_left() {
        let mut log = CommandLog::new();
        Rectangle::new(8.0, 4.0).trace(Point::new(0.0, 0.0), &mut log);
        assert_eq!(
            log.commands(),
            &[DrawCommand::Rect {
                x: -4.0,
                y: -2.0,
                width: 8.0,
                height: 4.0,
            }]
        );
    }

    #[test]
    fn triangle_apex_is_up_on_screen() {
        let mut log = CommandLog::new();
        Triangle::new(6.0, 4.0).trace(Point::new(10.0, 10.0), &mut log);
        assert_eq!(
            log.commands(),
            &[
                DrawCommand::MoveTo { x: 7.0, y: 12.0 },
                DrawCommand::LineTo { x: 10.0, y: 8.0 },
                DrawCommand::LineTo { x: 13.0, y: 12.0 },
            ]
        );
    }

    #[test]
    fn primitive_dispatches_to_shape() {
        let shape: Primitive = Circle::new(3.0).into();
        assert_eq!(shape.bounding_box(), BoundingBox::centered(6.0, 6.0));
        let shape: Primitive = Rectangle::new(2.0, 9.0).into();
        assert_eq!(shape.bounding_box().height(), 9.0);
    }
}
