//! DASH2 codec and font nibble-interleaver for a legacy game disc's assets.
//!
//! Three core modules — [`bitstream`], [`lz`], [`dash2`] — implement the
//! LZSS-style compressed container; [`nibble`] and [`tim`] implement the
//! font-splitting/TIM-wrapping half of the toolkit. [`cli`], [`io`], and
//! [`timefn`] are the ambient driver layer consumed by the `melttim` and
//! `fonttool` binaries under `src/bin/`.

pub mod bitstream;
pub mod cli;
pub mod dash2;
pub mod error;
pub mod io;
pub mod lz;
pub mod nibble;
pub mod tim;
pub mod timefn;

pub use dash2::{decode, decode_with_leading_header, encode, encode_and_patch_header};
pub use error::{Dash2Error, Result};
