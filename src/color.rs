//! Color model: two closed representations and lossless-as-possible
//! conversion between them.
//!
//! All derived operations (spin, lighten, saturate, fade...) go through
//! [`Color::to_hsla`], adjust exactly one field, and return an HSLA value.
//! The representation changes even when the input was RGBA.

use std::fmt;

use crate::types::{Angle, Normalized, UnsignedByte};

/// An immutable color value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgba {
        r: UnsignedByte,
        g: UnsignedByte,
        b: UnsignedByte,
        a: Normalized,
    },
    Hsla {
        h: Angle,
        s: Normalized,
        l: Normalized,
        a: Normalized,
    },
}

/// Build an RGBA color, clipping every channel.
pub fn rgba(r: i32, g: i32, b: i32, a: f64) -> Color {
    Color::Rgba {
        r: UnsignedByte::new(r),
        g: UnsignedByte::new(g),
        b: UnsignedByte::new(b),
        a: Normalized::new(a),
    }
}

/// Opaque RGBA color.
pub fn rgb(r: i32, g: i32, b: i32) -> Color {
    rgba(r, g, b, 1.0)
}

/// Build an HSLA color from a hue in degrees and fractional s/l/a.
pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> Color {
    Color::Hsla {
        h: Angle::degrees(h),
        s: Normalized::new(s),
        l: Normalized::new(l),
        a: Normalized::new(a),
    }
}

/// Opaque HSLA color.
pub fn hsl(h: f64, s: f64, l: f64) -> Color {
    hsla(h, s, l, 1.0)
}

impl Color {
    pub const BLACK: Color = Color::Rgba {
        r: UnsignedByte::MIN,
        g: UnsignedByte::MIN,
        b: UnsignedByte::MIN,
        a: Normalized::ONE,
    };

    pub const WHITE: Color = Color::Rgba {
        r: UnsignedByte::MAX,
        g: UnsignedByte::MAX,
        b: UnsignedByte::MAX,
        a: Normalized::ONE,
    };

    pub fn is_rgba(&self) -> bool {
        matches!(self, Color::Rgba { .. })
    }

    pub fn is_hsla(&self) -> bool {
        matches!(self, Color::Hsla { .. })
    }

    /// Alpha, whichever representation holds it.
    pub fn alpha(&self) -> Normalized {
        match *self {
            Color::Rgba { a, .. } => a,
            Color::Hsla { a, .. } => a,
        }
    }

    /// Convert to the perceptual representation. Identity on HSLA.
    pub fn to_hsla(&self) -> Color {
        match *self {
            Color::Hsla { .. } => *self,
            Color::Rgba { .. } => {
                let (h, s, l, a) = self.hsla_components();
                Color::Hsla { h, s, l, a }
            }
        }
    }

    /// Convert to the additive representation. Identity on RGBA.
    pub fn to_rgba(&self) -> Color {
        match *self {
            Color::Rgba { .. } => *self,
            Color::Hsla { .. } => {
                let (r, g, b, a) = self.rgba_components();
                Color::Rgba { r, g, b, a }
            }
        }
    }

    fn hsla_components(&self) -> (Angle, Normalized, Normalized, Normalized) {
        match *self {
            Color::Hsla { h, s, l, a } => (h, s, l, a),
            Color::Rgba { r, g, b, a } => {
                let r = r.to_normalized().get();
                let g = g.to_normalized().get();
                let b = b.to_normalized().get();

                let c_max = r.max(g).max(b);
                let c_min = r.min(g).min(b);
                let delta = c_max - c_min;

                let l = Normalized::new((c_max + c_min) / 2.0);
                let s = if delta == 0.0 {
                    Normalized::ZERO
                } else {
                    Normalized::new(delta / (1.0 - (2.0 * l.get() - 1.0).abs()))
                };

                // Achromatic input takes the red branch with a zero numerator:
                // hue is determinate (0°) but unobservable since s == 0.
                let degrees = if delta == 0.0 {
                    0.0
                } else if c_max == r {
                    60.0 * ((g - b) / delta)
                } else if c_max == g {
                    60.0 * ((b - r) / delta + 2.0)
                } else {
                    60.0 * ((r - g) / delta + 4.0)
                };

                (Angle::degrees(degrees), s, l, a)
            }
        }
    }

    fn rgba_components(&self) -> (UnsignedByte, UnsignedByte, UnsignedByte, Normalized) {
        match *self {
            Color::Rgba { r, g, b, a } => (r, g, b, a),
            Color::Hsla { h, s, l, a } => {
                if s.get() == 0.0 {
                    let gray = l.to_unsigned_byte();
                    return (gray, gray, gray, a);
                }

                let (s, l) = (s.get(), l.get());
                let q = if l < 0.5 {
                    l * (1.0 + s)
                } else {
                    l + s - l * s
                };
                let p = 2.0 * l - q;
                let third = Angle::degrees(120.0);

                (
                    hue_to_channel(p, q, h + third).to_unsigned_byte(),
                    hue_to_channel(p, q, h).to_unsigned_byte(),
                    hue_to_channel(p, q, h - third).to_unsigned_byte(),
                    a,
                )
            }
        }
    }

    /// Red channel of the RGBA projection.
    pub fn red(&self) -> UnsignedByte {
        self.rgba_components().0
    }

    pub fn green(&self) -> UnsignedByte {
        self.rgba_components().1
    }

    pub fn blue(&self) -> UnsignedByte {
        self.rgba_components().2
    }

    /// Hue of the HSLA projection.
    pub fn hue(&self) -> Angle {
        self.hsla_components().0
    }

    pub fn saturation(&self) -> Normalized {
        self.hsla_components().1
    }

    pub fn lightness(&self) -> Normalized {
        self.hsla_components().2
    }

    /// Rotate the hue. Wraps rather than clips.
    pub fn spin(&self, angle: Angle) -> Color {
        let (h, s, l, a) = self.hsla_components();
        Color::Hsla {
            h: h + angle,
            s,
            l,
            a,
        }
    }

    /// Add `amount` to lightness.
    pub fn lighten(&self, amount: f64) -> Color {
        let (h, s, l, a) = self.hsla_components();
        Color::Hsla {
            h,
            s,
            l: Normalized::new(l.get() + amount),
            a,
        }
    }

    pub fn darken(&self, amount: f64) -> Color {
        self.lighten(-amount)
    }

    /// Add `amount` to saturation.
    pub fn saturate(&self, amount: f64) -> Color {
        let (h, s, l, a) = self.hsla_components();
        Color::Hsla {
            h,
            s: Normalized::new(s.get() + amount),
            l,
            a,
        }
    }

    pub fn desaturate(&self, amount: f64) -> Color {
        self.saturate(-amount)
    }

    /// Add `amount` to alpha.
    pub fn fade_in(&self, amount: f64) -> Color {
        let (h, s, l, a) = self.hsla_components();
        Color::Hsla {
            h,
            s,
            l,
            a: Normalized::new(a.get() + amount),
        }
    }

    pub fn fade_out(&self, amount: f64) -> Color {
        self.fade_in(-amount)
    }

    /// Loose equality for colors that went through a representation change.
    ///
    /// Both sides are compared as RGBA: each color channel may differ by at
    /// most one step and alpha by less than 0.1.
    pub fn approx_eq(&self, other: &Color) -> bool {
        let (r1, g1, b1, a1) = self.rgba_components();
        let (r2, g2, b2, a2) = other.rgba_components();
        let close = |x: UnsignedByte, y: UnsignedByte| x.get().abs_diff(y.get()) < 2;
        close(r1, r2) && close(g1, g2) && close(b1, b2) && (a1 - a2).abs() < 0.1
    }
}

/// One channel of the HSL -> RGB conversion, evaluated at `hue` as a
/// fraction of a turn.
fn hue_to_channel(p: f64, q: f64, hue: Angle) -> Normalized {
    let t = hue.to_turns();
    let value = if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    };
    Normalized::new(value)
}

/// Round for display so conversions don't print float noise.
fn rounded(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// CSS-compatible serialization: `rgba(R, G, B, A)` or `hsla(H, S%, L%, A)`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgba { r, g, b, a } => {
                write!(f, "rgba({}, {}, {}, {})", r, g, b, rounded(a.get(), 3))
            }
            Color::Hsla { h, s, l, a } => {
                // Rounding can land on 360, which wraps back to 0
                let hue = Angle::degrees(rounded(h.to_degrees(), 2));
                write!(
                    f,
                    "hsla({}, {}%, {}%, {})",
                    hue.to_degrees(),
                    rounded(s.to_percentage(), 2),
                    rounded(l.to_percentage(), 2),
                    rounded(a.get(), 3)
                )
            }
        }
    }
}
