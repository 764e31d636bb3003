//! DASH2 codec: MELT_TIM header access plus the LZSS-style encode/decode pair.

pub mod decode;
pub mod encode;
pub mod header;

pub use decode::{decode, decode_with_leading_header};
pub use encode::{encode, encode_and_patch_header};
pub use header::{read_decode_params, DecodeParams, HEADER_SIZE, TIM_ENUM_DASH2};
