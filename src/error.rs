//! Typed errors for the DASH2 codec and nibble interleaver.
//!
//! The library boundary returns `Result<_, Dash2Error>`; the CLI binaries wrap
//! these in `anyhow::Result` and attach filename/offset context before
//! printing a diagnostic and exiting.

use std::fmt;
use std::io;

/// Error taxonomy for the core codecs (spec §7).
#[derive(Debug)]
pub enum Dash2Error {
    /// Malformed container: bad `timEnum`, bad `bitfieldSize`, non-decimal
    /// basename prefix, or a truncated DASH2 bitstream.
    InputFormat(String),
    /// Filesystem failure.
    Io(io::Error),
    /// Combine was given two inputs of unequal length.
    SizeMismatch { a: usize, b: usize },
}

impl fmt::Display for Dash2Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dash2Error::InputFormat(msg) => write!(f, "invalid input format: {msg}"),
            Dash2Error::Io(e) => write!(f, "I/O error: {e}"),
            Dash2Error::SizeMismatch { a, b } => {
                write!(f, "size mismatch: {a} words vs {b} words")
            }
        }
    }
}

impl std::error::Error for Dash2Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Dash2Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Dash2Error {
    fn from(e: io::Error) -> Self {
        Dash2Error::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, Dash2Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_readable() {
        let e = Dash2Error::InputFormat("bad timEnum".into());
        assert_eq!(format!("{e}"), "invalid input format: bad timEnum");

        let e = Dash2Error::SizeMismatch { a: 4, b: 5 };
        assert_eq!(format!("{e}"), "size mismatch: 4 words vs 5 words");
    }

    #[test]
    fn io_error_converts_via_from() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let e: Dash2Error = io_err.into();
        assert!(matches!(e, Dash2Error::Io(_)));
    }
}
