//! Parse CSS-style color strings into [`Color`] values.
//!
//! Accepts the same forms [`Color`]'s `Display` produces, plus `rgb()`,
//! `hsl()`, `#hex` and a handful of names. Numeric values are canonicalized
//! exactly as the constructors do, so only syntax can fail.

use std::str::FromStr;

use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;

use crate::color::Color;
use crate::errors::{ParseError, named_source};
use crate::types::{Angle, Normalized, UnsignedByte};
use crate::{ColorParser, Rule};

/// Parse a color string.
pub fn parse_color(source: &str) -> Result<Color, ParseError> {
    let mut pairs = ColorParser::parse(Rule::color, source).map_err(|e| {
        let (start, end) = match e.location {
            InputLocation::Pos(pos) => (pos, pos),
            InputLocation::Span(span) => span,
        };
        ParseError::Syntax {
            src: named_source(source),
            span: (start..end).into(),
            message: e.variant.message().into_owned(),
        }
    })?;

    let body = pairs
        .next()
        .and_then(|color| color.into_inner().next())
        .ok_or_else(|| syntax(source, &(0..source.len()), "empty color"))?;

    match body.as_rule() {
        Rule::rgb | Rule::rgba => parse_rgb(source, body),
        Rule::hsl | Rule::hsla => parse_hsl(source, body),
        Rule::hex => parse_hex(source, body),
        Rule::name => parse_name(source, body),
        rule => Err(syntax(source, &span_of(&body), &format!("unexpected {:?}", rule))),
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

fn span_of(pair: &Pair<Rule>) -> std::ops::Range<usize> {
    let span = pair.as_span();
    span.start()..span.end()
}

fn syntax(source: &str, span: &std::ops::Range<usize>, message: &str) -> ParseError {
    ParseError::Syntax {
        src: named_source(source),
        span: span.clone().into(),
        message: message.to_string(),
    }
}

fn invalid_number(source: &str, pair: &Pair<Rule>, message: String) -> ParseError {
    ParseError::InvalidNumber {
        message,
        src: named_source(source),
        span: span_of(pair).into(),
    }
}

/// Collect the numeric arguments of a functional form. Percentages come back
/// as fractions.
fn arguments(source: &str, pair: Pair<Rule>) -> Result<Vec<f64>, ParseError> {
    let mut values = Vec::new();
    for arg in pair.into_inner() {
        match arg.as_rule() {
            Rule::number => values.push(number(source, &arg)?),
            Rule::percent => {
                let inner = arg
                    .clone()
                    .into_inner()
                    .next()
                    .ok_or_else(|| invalid_number(source, &arg, "missing value".into()))?;
                values.push(number(source, &inner)? / 100.0);
            }
            _ => {}
        }
    }
    Ok(values)
}

fn number(source: &str, pair: &Pair<Rule>) -> Result<f64, ParseError> {
    pair.as_str()
        .parse::<f64>()
        .map_err(|e| invalid_number(source, pair, e.to_string()))
}

fn parse_rgb(source: &str, pair: Pair<Rule>) -> Result<Color, ParseError> {
    let span = span_of(&pair);
    let (r, g, b, a) = match arguments(source, pair)?.as_slice() {
        [r, g, b] => (*r, *g, *b, 1.0),
        [r, g, b, a] => (*r, *g, *b, *a),
        _ => return Err(syntax(source, &span, "expected 3 or 4 components")),
    };
    Ok(Color::Rgba {
        r: UnsignedByte::from_f64(r),
        g: UnsignedByte::from_f64(g),
        b: UnsignedByte::from_f64(b),
        a: Normalized::new(a),
    })
}

fn parse_hsl(source: &str, pair: Pair<Rule>) -> Result<Color, ParseError> {
    let span = span_of(&pair);
    let (h, s, l, a) = match arguments(source, pair)?.as_slice() {
        [h, s, l] => (*h, *s, *l, 1.0),
        [h, s, l, a] => (*h, *s, *l, *a),
        _ => return Err(syntax(source, &span, "expected 3 or 4 components")),
    };
    Ok(Color::Hsla {
        h: Angle::degrees(h),
        s: Normalized::new(s),
        l: Normalized::new(l),
        a: Normalized::new(a),
    })
}

fn parse_hex(source: &str, pair: Pair<Rule>) -> Result<Color, ParseError> {
    let digits = pair.as_str().trim_start_matches('#');
    let value = u32::from_str_radix(digits, 16)
        .map_err(|e| invalid_number(source, &pair, e.to_string()))?;

    let channel = |shift: u32, bits: u32| -> UnsignedByte {
        let mask = (1 << bits) - 1;
        let raw = (value >> shift) & mask;
        // Short form repeats each nibble: #abc == #aabbcc
        let expanded = if bits == 4 { raw * 17 } else { raw };
        UnsignedByte::from_u8(expanded as u8)
    };

    let (r, g, b) = if digits.len() == 3 {
        (channel(8, 4), channel(4, 4), channel(0, 4))
    } else {
        (channel(16, 8), channel(8, 8), channel(0, 8))
    };
    Ok(Color::Rgba {
        r,
        g,
        b,
        a: Normalized::ONE,
    })
}

fn parse_name(source: &str, pair: Pair<Rule>) -> Result<Color, ParseError> {
    let name = pair.as_str().to_ascii_lowercase();
    let rgb = |r: u8, g: u8, b: u8| Color::Rgba {
        r: UnsignedByte::from_u8(r),
        g: UnsignedByte::from_u8(g),
        b: UnsignedByte::from_u8(b),
        a: Normalized::ONE,
    };
    let color = match name.as_str() {
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "red" => rgb(255, 0, 0),
        "green" => rgb(0, 128, 0),
        "blue" => rgb(0, 0, 255),
        "yellow" => rgb(255, 255, 0),
        "cyan" | "aqua" => rgb(0, 255, 255),
        "magenta" | "fuchsia" => rgb(255, 0, 255),
        "orange" => rgb(255, 165, 0),
        "purple" => rgb(128, 0, 128),
        "gray" | "grey" => rgb(128, 128, 128),
        "transparent" => Color::Rgba {
            r: UnsignedByte::MIN,
            g: UnsignedByte::MIN,
            b: UnsignedByte::MIN,
            a: Normalized::ZERO,
        },
        _ => {
            return Err(ParseError::UnknownName {
                name: pair.as_str().to_string(),
                src: named_source(source),
                span: span_of(&pair).into(),
            });
        }
    };
    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{hsla, rgb, rgba};

    #[test]
    fn parse_rgba_form() {
        let c: Color = "rgba(255, 0, 10, 0.5)".parse().unwrap();
        assert_eq!(c, rgba(255, 0, 10, 0.5));
    }

    #[test]
    fn parse_rgb_form_without_spaces() {
        assert_eq!(parse_color("rgb(1,2,3)").unwrap(), rgb(1, 2, 3));
    }

    #[test]
    fn parse_hsla_form() {
        let c = parse_color("hsla(180, 50%, 25%, 1)").unwrap();
        assert_eq!(c, hsla(180.0, 0.5, 0.25, 1.0));
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        let c = parse_color("  HSL( 120 , 100% , 50% )\n").unwrap();
        assert_eq!(c, hsla(120.0, 1.0, 0.5, 1.0));
        assert_eq!(parse_color("RED").unwrap(), rgb(255, 0, 0));
    }

    #[test]
    fn parse_clips_out_of_range_values() {
        assert_eq!(
            parse_color("rgba(300, -5, 12.4, 7)").unwrap(),
            rgba(255, 0, 12, 1.0)
        );
        assert_eq!(
            parse_color("hsl(-90, 150%, 50%)").unwrap(),
            hsla(270.0, 1.0, 0.5, 1.0)
        );
    }

    #[test]
    fn parse_hex_forms() {
        assert_eq!(parse_color("#ff8000").unwrap(), rgb(255, 128, 0));
        assert_eq!(parse_color("#F80").unwrap(), rgb(255, 136, 0));
    }

    #[test]
    fn display_parses_back() {
        let colors = [
            rgba(12, 200, 99, 0.25),
            hsla(33.5, 0.4, 0.9, 0.75),
            rgb(255, 0, 0).to_hsla(),
            Color::WHITE,
        ];
        for c in colors {
            let back = parse_color(&c.to_string()).unwrap();
            assert!(c.approx_eq(&back), "{c} parsed back as {back}");
        }
    }

    #[test]
    fn unknown_name_is_reported() {
        let ParseError::UnknownName { name, .. } = parse_color("chartreuse").unwrap_err() else {
            panic!("expected an unknown-name error");
        };
        assert_eq!(name, "chartreuse");
    }

    #[test]
    fn syntax_errors_are_reported() {
        let inputs = [
            "rgb(1, 2)",
            "rgba(1, 2, 3",
            "#abcd",
            "hsl(10, 20, 30)",
            "",
            "rgb(1, 2, 3) x",
        ];
        for bad in inputs {
            let err = parse_color(bad).unwrap_err();
            assert!(
                matches!(err, ParseError::Syntax { .. }),
                "{bad:?} gave {err:?}"
            );
        }
    }
}
