//! The image tree.
//!
//! An [`Image`] is an immutable description: primitive shapes at the leaves,
//! combinators and style wrappers above them. Every builder returns a new
//! tree; children are reference counted so cloning and sharing subtrees is
//! cheap.

use std::fmt;
use std::rc::Rc;

use crate::color::Color;
use crate::render::context::DrawingContext;
use crate::shapes::{Circle, Primitive, Rectangle, Triangle};
use crate::types::Offset;

/// Rewrites the ambient style for a subtree.
pub type StyleTransform = dyn Fn(&DrawingContext) -> DrawingContext;

/// Anything that can produce an [`Image`] on demand.
///
/// This is the open extension point: user types implement it to plug derived
/// or lazily built shapes into a tree without touching [`Image`] itself.
pub trait Drawable {
    fn draw(&self) -> Image;
}

#[derive(Clone)]
pub enum Image {
    Shape(Primitive),
    /// `top` is painted after `bottom`; both share one origin.
    Overlay { top: Rc<Image>, bottom: Rc<Image> },
    /// Side by side, vertically centered on each other.
    Beside { left: Rc<Image>, right: Rc<Image> },
    /// Stacked, horizontally centered on each other.
    Above { top: Rc<Image>, bottom: Rc<Image> },
    /// `inner` moved by an image-space offset (positive `dy` is up).
    At { offset: Offset, inner: Rc<Image> },
    ContextTransform {
        transform: Rc<StyleTransform>,
        inner: Rc<Image>,
    },
    Drawable(Rc<dyn Drawable>),
}

impl Image {
    pub fn circle(radius: f64) -> Image {
        Image::Shape(Circle::new(radius).into())
    }

    pub fn rectangle(width: f64, height: f64) -> Image {
        Image::Shape(Rectangle::new(width, height).into())
    }

    pub fn triangle(width: f64, height: f64) -> Image {
        Image::Shape(Triangle::new(width, height).into())
    }

    pub fn drawable(drawable: impl Drawable + 'static) -> Image {
        Image::Drawable(Rc::new(drawable))
    }

    /// `self` drawn on top of `bottom`.
    pub fn on(self, bottom: Image) -> Image {
        Image::Overlay {
            top: Rc::new(self),
            bottom: Rc::new(bottom),
        }
    }

    /// `self` drawn underneath `top`.
    pub fn under(self, top: Image) -> Image {
        top.on(self)
    }

    pub fn beside(self, right: Image) -> Image {
        Image::Beside {
            left: Rc::new(self),
            right: Rc::new(right),
        }
    }

    pub fn above(self, bottom: Image) -> Image {
        Image::Above {
            top: Rc::new(self),
            bottom: Rc::new(bottom),
        }
    }

    pub fn at(self, dx: f64, dy: f64) -> Image {
        Image::At {
            offset: Offset::new(dx, dy),
            inner: Rc::new(self),
        }
    }

    pub fn transform(self, f: impl Fn(&DrawingContext) -> DrawingContext + 'static) -> Image {
        Image::ContextTransform {
            transform: Rc::new(f),
            inner: Rc::new(self),
        }
    }

    pub fn fill_color(self, color: Color) -> Image {
        self.transform(move |ctx| ctx.with_fill(color))
    }

    pub fn line_color(self, color: Color) -> Image {
        self.transform(move |ctx| ctx.with_line_color(color))
    }

    pub fn line_width(self, width: f64) -> Image {
        self.transform(move |ctx| ctx.with_line_width(width))
    }

    pub fn no_fill(self) -> Image {
        self.transform(DrawingContext::without_fill)
    }

    pub fn no_line(self) -> Image {
        self.transform(DrawingContext::without_stroke)
    }
}

impl From<Primitive> for Image {
    fn from(shape: Primitive) -> Self {
        Image::Shape(shape)
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Image::Shape(shape) => f.debug_tuple("Shape").field(shape).finish(),
            Image::Overlay { top, bottom } => f
                .debug_struct("Overlay")
                .field("top", top)
                .field("bottom", bottom)
                .finish(),
            Image::Beside { left, right } => f
                .debug_struct("Beside")
                .field("left", left)
                .field("right", right)
                .finish(),
            Image::Above { top, bottom } => f
                .debug_struct("Above")
                .field("top", top)
                .field("bottom", bottom)
                .finish(),
            Image::At { offset, inner } => f
                .debug_struct("At")
                .field("offset", offset)
                .field("inner", inner)
                .finish(),
            Image::ContextTransform { inner, .. } => f
                .debug_struct("ContextTransform")
                .field("inner", inner)
                .finish_non_exhaustive(),
            Image::Drawable(_) => f.write_str("Drawable(..)"),
        }
    }
}
