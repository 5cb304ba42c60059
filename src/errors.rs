//! Error types with rich diagnostics using miette
//!
//! The color and layout core is total; only parsing color strings can fail.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Wrap a color string for diagnostic display.
pub(crate) fn named_source(source: &str) -> NamedSource<String> {
    NamedSource::new("<color>", source.to_string())
}

/// Errors that occur while parsing a color string
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("invalid color syntax")]
    #[diagnostic(
        code(limner::parse::syntax),
        help("expected rgb(), rgba(), hsl(), hsla(), a #rgb/#rrggbb hex value, or a color name")
    )]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },

    #[error("unknown color name: {name}")]
    #[diagnostic(code(limner::parse::unknown_name))]
    UnknownName {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a known color")]
        span: SourceSpan,
    },

    #[error("invalid number: {message}")]
    #[diagnostic(code(limner::parse::invalid_number))]
    InvalidNumber {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid number")]
        span: SourceSpan,
    },
}
