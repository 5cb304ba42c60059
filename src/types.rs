//! Strongly-typed numeric primitives (zero-cost newtypes).
//!
//! Every constructor canonicalizes its input instead of failing: out-of-range
//! values are clipped, angles wrap, and NaN collapses to zero. Arithmetic on
//! two clipped values hands back a raw `f64`; the caller re-clips.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use glam::{DVec2, dvec2};

/// Clamp into `[lo, hi]`, mapping NaN to `lo`.
#[inline]
fn clip(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        lo
    } else {
        value.clamp(lo, hi)
    }
}

/// A real number in `[0, 1]`: saturation, lightness, alpha.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Normalized(f64);

impl Normalized {
    pub const ZERO: Normalized = Normalized(0.0);
    pub const ONE: Normalized = Normalized(1.0);

    /// Clip `value` into `[0, 1]`.
    #[inline]
    pub fn new(value: f64) -> Self {
        Normalized(clip(value, 0.0, 1.0))
    }

    /// Interpret `value` as a percentage, so `50.0` becomes `0.5`.
    #[inline]
    pub fn from_percentage(value: f64) -> Self {
        Self::new(value / 100.0)
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_percentage(self) -> f64 {
        self.0 * 100.0
    }

    /// Linear scaling onto the byte range, rounded to the nearest step.
    #[inline]
    pub fn to_unsigned_byte(self) -> UnsignedByte {
        UnsignedByte::from_f64(self.0 * 255.0)
    }
}

impl Add for Normalized {
    type Output = f64;

    fn add(self, rhs: Normalized) -> f64 {
        self.0 + rhs.0
    }
}

impl Sub for Normalized {
    type Output = f64;

    fn sub(self, rhs: Normalized) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Normalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An 8-bit channel value in `[0, 255]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct UnsignedByte(u8);

impl UnsignedByte {
    pub const MIN: UnsignedByte = UnsignedByte(0);
    pub const MAX: UnsignedByte = UnsignedByte(255);

    /// Wrap a raw channel byte. Always in range.
    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        UnsignedByte(value)
    }

    /// Clip an integer into `[0, 255]`.
    #[inline]
    pub fn new(value: i32) -> Self {
        UnsignedByte(value.clamp(0, 255) as u8)
    }

    /// Round and clip a real number into `[0, 255]`.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        UnsignedByte(clip(value.round(), 0.0, 255.0) as u8)
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn to_normalized(self) -> Normalized {
        Normalized::new(f64::from(self.0) / 255.0)
    }
}

impl From<u8> for UnsignedByte {
    fn from(value: u8) -> Self {
        UnsignedByte(value)
    }
}

impl From<Normalized> for UnsignedByte {
    fn from(value: Normalized) -> Self {
        value.to_unsigned_byte()
    }
}

impl fmt::Display for UnsignedByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An angle, stored canonically in degrees within `[0, 360)`.
///
/// Addition, subtraction and negation all wrap, so `10° + 355°` is `5°`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    /// Wrap `degrees` into `[0, 360)`.
    pub fn degrees(degrees: f64) -> Self {
        if !degrees.is_finite() {
            return Angle::ZERO;
        }
        let wrapped = degrees.rem_euclid(360.0);
        // rem_euclid rounds tiny negative inputs up to exactly 360.0
        if wrapped >= 360.0 {
            Angle::ZERO
        } else {
            Angle(wrapped)
        }
    }

    pub fn radians(radians: f64) -> Self {
        Self::degrees(radians.to_degrees())
    }

    /// One turn is a full revolution.
    pub fn turns(turns: f64) -> Self {
        Self::degrees(turns * 360.0)
    }

    #[inline]
    pub fn to_degrees(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Fraction of a full turn, in `[0, 1)`.
    #[inline]
    pub fn to_turns(self) -> f64 {
        self.0 / 360.0
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::degrees(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::degrees(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::degrees(-self.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// A position in device space (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn to_dvec2(self) -> DVec2 {
        dvec2(self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

/// A displacement vector, not an absolute position. `Point + Offset = Point`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Offset { dx, dy }
    }

    /// Reinterpret an image-space offset (y up) as a device-space one (y down).
    pub fn to_device(self) -> Offset {
        Offset {
            dx: self.dx,
            dy: -self.dy,
        }
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset {
            dx: self.dx + rhs.dx,
            dy: self.dy + rhs.dy,
        }
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        Offset {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, rhs: Offset) -> Point {
        Point {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

impl Sub<Point> for Point {
    type Output = Offset;

    fn sub(self, rhs: Point) -> Offset {
        Offset {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}
