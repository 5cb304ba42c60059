//! Bounding boxes and child draw origins.
//!
//! Boxes are in image space: relative to the node's own origin, with y
//! growing upward, so `top > bottom` for anything with height. Draw origins
//! are device space (y grows downward); the helpers here do the flip.
//!
//! Nothing is cached on the tree. [`Image::bounding_box`] recomputes from the
//! leaves on every call.

use crate::image::Image;
use crate::shapes::Shape;
use crate::types::{Offset, Point};

/// Axis-aligned extent of an image around its local origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BoundingBox {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl BoundingBox {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        BoundingBox {
            left,
            right,
            top,
            bottom,
        }
    }

    /// A `width` x `height` box centered on the origin.
    pub fn centered(width: f64, height: f64) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        BoundingBox {
            left: -hw,
            right: hw,
            top: hh,
            bottom: -hh,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Per-edge union of two boxes sharing an origin.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            left: self.left.min(other.left),
            right: self.right.max(other.right),
            top: self.top.max(other.top),
            bottom: self.bottom.min(other.bottom),
        }
    }

    /// Shift by an image-space offset (positive `dy` moves up).
    pub fn translate(&self, offset: Offset) -> BoundingBox {
        BoundingBox {
            left: self.left + offset.dx,
            right: self.right + offset.dx,
            top: self.top + offset.dy,
            bottom: self.bottom + offset.dy,
        }
    }

    /// The box of `self` placed to the left of `right`.
    pub fn beside(&self, right: &BoundingBox) -> BoundingBox {
        BoundingBox::centered(
            self.width() + right.width(),
            self.height().max(right.height()),
        )
    }

    /// The box of `self` stacked on top of `bottom`.
    pub fn above(&self, bottom: &BoundingBox) -> BoundingBox {
        BoundingBox::centered(
            self.width().max(bottom.width()),
            self.height() + bottom.height(),
        )
    }
}

impl Image {
    /// Extent of this image around its local origin.
    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Image::Shape(shape) => shape.bounding_box(),
            Image::Overlay { top, bottom } => top.bounding_box().union(&bottom.bounding_box()),
            Image::Beside { left, right } => left.bounding_box().beside(&right.bounding_box()),
            Image::Above { top, bottom } => top.bounding_box().above(&bottom.bounding_box()),
            Image::At { offset, inner } => inner.bounding_box().translate(*offset),
            Image::ContextTransform { inner, .. } => inner.bounding_box(),
            Image::Drawable(drawable) => drawable.draw().bounding_box(),
        }
    }
}

/// Draw origins of the two children of a `Beside` drawn at `origin`.
///
/// `parent` must be `left.beside(right)`. Both children keep the parent's y.
pub fn beside_origins(
    origin: Point,
    parent: &BoundingBox,
    left: &BoundingBox,
    right: &BoundingBox,
) -> (Point, Point) {
    let left_x = origin.x + parent.left + left.width() / 2.0;
    let right_x = origin.x + parent.right - right.width() / 2.0;
    (Point::new(left_x, origin.y), Point::new(right_x, origin.y))
}

/// Draw origins of the two children of an `Above` drawn at `origin`.
///
/// `parent` must be `top.above(bottom)`. Both children keep the parent's x.
/// Image-space `top` maps to the smaller device y.
pub fn above_origins(
    origin: Point,
    parent: &BoundingBox,
    top: &BoundingBox,
    bottom: &BoundingBox,
) -> (Point, Point) {
    let top_y = origin.y - parent.top + top.height() / 2.0;
    let bottom_y = origin.y - parent.bottom - bottom.height() / 2.0;
    (Point::new(origin.x, top_y), Point::new(origin.x, bottom_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(r: f64) -> Image {
        Image::circle(r)
    }

    #[test]
    fn circle_box_is_symmetric() {
        let bb = circle(10.0).bounding_box();
        assert_eq!(bb, BoundingBox::new(-10.0, 10.0, 10.0, -10.0));
        assert_eq!(bb.width(), 20.0);
        assert_eq!(bb.height(), 20.0);
    }

    #[test]
    fn rectangle_and_triangle_boxes() {
        assert_eq!(
            Image::rectangle(30.0, 10.0).bounding_box(),
            BoundingBox::centered(30.0, 10.0)
        );
        assert_eq!(
            Image::triangle(8.0, 6.0).bounding_box(),
            BoundingBox::new(-4.0, 4.0, 3.0, -3.0)
        );
    }

    #[test]
    fn beside_adds_widths_and_maxes_heights() {
        let image = circle(10.0).beside(circle(20.0));
        let bb = image.bounding_box();
        assert_eq!(bb.width(), 60.0);
        assert_eq!(bb.height(), 40.0);
        assert_eq!(bb.left, -30.0);
        assert_eq!(bb.right, 30.0);
    }

    #[test]
    fn beside_additivity_over_mixed_shapes() {
        let shapes = [
            circle(3.0),
            Image::rectangle(7.0, 2.0),
            Image::triangle(4.0, 9.0),
            circle(1.0).at(5.0, 5.0),
            Image::rectangle(2.0, 2.0).on(circle(4.0)),
        ];
        for l in &shapes {
            for r in &shapes {
                let (lb, rb) = (l.bounding_box(), r.bounding_box());
                let bb = l.clone().beside(r.clone()).bounding_box();
                assert_eq!(bb.width(), lb.width() + rb.width());
                assert_eq!(bb.height(), lb.height().max(rb.height()));
            }
        }
    }

    #[test]
    fn above_adds_heights_and_maxes_widths() {
        let bb = Image::rectangle(10.0, 4.0)
            .above(Image::rectangle(6.0, 8.0))
            .bounding_box();
        assert_eq!(bb.width(), 10.0);
        assert_eq!(bb.height(), 12.0);
        assert_eq!(bb.top, 6.0);
        assert_eq!(bb.bottom, -6.0);
    }

    #[test]
    fn overlay_is_per_edge_union() {
        let a = circle(5.0).at(10.0, 0.0);
        let b = Image::rectangle(4.0, 30.0);
        let expected = a.bounding_box().union(&b.bounding_box());
        let bb = a.on(b).bounding_box();
        assert_eq!(bb, expected);
        assert_eq!(bb, BoundingBox::new(-2.0, 15.0, 15.0, -15.0));
    }

    #[test]
    fn at_translates_inner_box() {
        let bb = circle(2.0).at(3.0, -1.0).bounding_box();
        assert_eq!(bb, BoundingBox::new(1.0, 5.0, 1.0, -3.0));
    }

    #[test]
    fn style_does_not_change_geometry() {
        let plain = Image::triangle(5.0, 5.0).beside(circle(1.0));
        let styled = plain.clone().line_width(12.0).no_fill();
        assert_eq!(styled.bounding_box(), plain.bounding_box());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let image = circle(3.0)
            .above(Image::rectangle(1.0, 9.0))
            .beside(circle(2.0).at(1.0, 1.0));
        assert_eq!(image.bounding_box(), image.bounding_box());
    }

    #[test]
    fn deep_nesting() {
        let mut image = circle(1.0);
        for _ in 0..200 {
            image = image.beside(circle(1.0));
        }
        assert_eq!(image.bounding_box().width(), 402.0);
        assert_eq!(image.bounding_box().height(), 2.0);
    }

    #[test]
    fn beside_origins_match_worked_example() {
        let l = BoundingBox::centered(20.0, 20.0);
        let r = BoundingBox::centered(40.0, 40.0);
        let parent = l.beside(&r);
        let origin = Point::new(100.0, 50.0);
        let (lo, ro) = beside_origins(origin, &parent, &l, &r);
        assert_eq!(lo, Point::new(80.0, 50.0));
        assert_eq!(ro, Point::new(110.0, 50.0));
    }

    #[test]
    fn above_origins_put_top_child_higher_on_screen() {
        let t = BoundingBox::centered(10.0, 4.0);
        let b = BoundingBox::centered(6.0, 8.0);
        let parent = t.above(&b);
        let (to, bo) = above_origins(Point::new(0.0, 100.0), &parent, &t, &b);
        assert_eq!(to, Point::new(0.0, 96.0));
        assert_eq!(bo, Point::new(0.0, 102.0));
        assert!(to.y < bo.y);
    }
}
