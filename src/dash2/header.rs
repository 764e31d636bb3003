//! MELT_TIM header field access (spec §3).
//!
//! The header is a fixed 0x30-byte blob, little-endian throughout, of which
//! only four fields are semantically live; everything else is opaque
//! pass-through that must round-trip untouched through a decompress/compress
//! cycle. Grounded on `jafreck-lz4r/src/frame/header.rs`'s
//! `read_le32`/`write_le32` helper style, with exact field offsets from
//! `original_source/src/MELTTIMTool.c`'s `MELT_TIMHeader`/`unpack_data`.

use crate::error::{Dash2Error, Result};

/// Fixed size of a MELT_TIM header slice.
pub const HEADER_SIZE: usize = 0x30;

const OFFSET_TIM_ENUM: usize = 0x00;
const OFFSET_DECOMPRESSED_SIZE: usize = 0x04;
const OFFSET_BITFIELD_SIZE: usize = 0x24;

/// `timEnum` value identifying a DASH2-compressed TIM.
pub const TIM_ENUM_DASH2: u32 = 3;

#[inline]
fn read_le32(src: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        src[offset],
        src[offset + 1],
        src[offset + 2],
        src[offset + 3],
    ])
}

#[inline]
fn write_le32(dst: &mut [u8], offset: usize, value: u32) {
    dst[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

#[inline]
fn read_le16(src: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([src[offset], src[offset + 1]])
}

#[inline]
fn write_le16(dst: &mut [u8], offset: usize, value: u16) {
    dst[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

/// The two fields the decoder reads, validated against [`TIM_ENUM_DASH2`] and
/// the bitfield-size invariant from spec §3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeParams {
    pub decompressed_size: u32,
    pub bitfield_size: u16,
}

/// Reads and validates the live decode-relevant fields from a 0x30-byte
/// header slice.
///
/// Returns `Dash2Error::InputFormat` if `timEnum != 3`, if `bitfieldSize ==
/// 0`, or if `bitfieldSize` is not a multiple of 4.
pub fn read_decode_params(header: &[u8]) -> Result<DecodeParams> {
    if header.len() < HEADER_SIZE {
        return Err(Dash2Error::InputFormat(format!(
            "header slice too short: {} bytes, need {HEADER_SIZE}",
            header.len()
        )));
    }

    let tim_enum = read_le32(header, OFFSET_TIM_ENUM);
    if tim_enum != TIM_ENUM_DASH2 {
        return Err(Dash2Error::InputFormat(format!(
            "not a compressed TIM: timEnum={tim_enum}, expected {TIM_ENUM_DASH2}"
        )));
    }

    let decompressed_size = read_le32(header, OFFSET_DECOMPRESSED_SIZE);
    let bitfield_size = read_le16(header, OFFSET_BITFIELD_SIZE);

    if bitfield_size == 0 {
        return Err(Dash2Error::InputFormat("bitfieldSize is zero".into()));
    }
    if bitfield_size % 4 != 0 {
        return Err(Dash2Error::InputFormat(format!(
            "bitfieldSize {bitfield_size} is not a multiple of 4"
        )));
    }

    Ok(DecodeParams {
        decompressed_size,
        bitfield_size,
    })
}

/// Patches `decompressedSize` (offset 0x04) and `bitfieldSize` (offset 0x24)
/// into a mutable 0x30-byte header slice, leaving every other byte
/// untouched. Used by the encoder to write back the sibling `HEADER.BIN`
/// slice.
pub fn patch_encode_fields(header: &mut [u8], decompressed_size: u32, bitfield_size: u16) {
    debug_assert!(header.len() >= HEADER_SIZE);
    write_le32(header, OFFSET_DECOMPRESSED_SIZE, decompressed_size);
    write_le16(header, OFFSET_BITFIELD_SIZE, bitfield_size);
}
