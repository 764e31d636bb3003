//! DASH2 encoder (spec §4.3, "Encoding").
//!
//! Grounded bit-exactly on `original_source/src/MELTTIMTool.c`'s
//! `compress_data`. The reference's `payload` `BitStream` is used there only
//! as a growing raw-byte buffer (never `add_bits`); this port uses a plain
//! `Vec<u8>` for it and reserves [`BitStream`](crate::bitstream::BitStream)
//! for the bit-selector stream, which is the only one that actually packs
//! bits.

use crate::bitstream::BitStream;
use crate::dash2::header::{patch_encode_fields, HEADER_SIZE};
use crate::error::{Dash2Error, Result};
use crate::lz::{find_match, MAX_UNCODED, WINDOW_SIZE};

const RESET_SENTINEL: u16 = 0xFFFF;

/// Encodes `src` as a DASH2 bitstream.
///
/// Returns `(bitfield_bytes, payload_bytes)`: the finalized bit-selector
/// block (always a multiple of 4 bytes) and the raw payload block. The
/// caller is responsible for patching a sibling header slice's
/// `decompressedSize`/`bitfieldSize` fields (see [`encode_and_patch_header`])
/// and for concatenating `header || bitfield_bytes || payload_bytes` for
/// on-disk storage.
///
/// Preserved reference quirks (spec §9): the window-reset bit is emitted
/// *after* the payload word that first crosses `next_reset`; matches of odd
/// length are found by [`find_match`] but always fall through to a literal
/// emission (the `ml % 2 == 0` guard), which is required to keep the
/// payload cursor's 2-byte stride aligned with the decoder.
///
/// Rejects odd-length input as `Dash2Error::InputFormat` — see spec §9
/// Redesign Flags (the reference implementation's odd-tail literal path is a
/// latent bug never exercised by real disc assets).
pub fn encode(src: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut bits = BitStream::new();
    let mut payload: Vec<u8> = Vec::new();

    let mut pos = 0usize;
    let mut next_reset = WINDOW_SIZE;

    while pos < src.len() {
        let m = find_match(src, pos, src.len());

        if let Some((match_pos, match_len)) = m {
            if match_len >= MAX_UNCODED && match_len % 2 == 0 {
                bits.add_bits(1, 1);
                let offset13 = (match_pos & 0x1FFF) as u16;
                let length3 = ((match_len / 2) - 2) as u16;
                let word = (offset13 << 3) | (length3 & 0x07);
                payload.extend_from_slice(&word.to_le_bytes());
                pos += match_len;
            } else {
                pos = emit_literal(&mut bits, &mut payload, src, pos);
            }
        } else {
            pos = emit_literal(&mut bits, &mut payload, src, pos);
        }

        if pos >= next_reset {
            bits.add_bits(1, 1);
            payload.extend_from_slice(&RESET_SENTINEL.to_le_bytes());
            next_reset += WINDOW_SIZE;
        }
    }

    bits.finalize();
    (bits.into_bytes(), payload)
}

/// Emits one literal word (2 bytes, or 1 on the odd final byte) and returns
/// the advanced position. Preserved verbatim from the reference's odd-tail
/// path (never exercised once callers reject odd-length input up front).
fn emit_literal(bits: &mut BitStream, payload: &mut Vec<u8>, src: &[u8], pos: usize) -> usize {
    bits.add_bits(0, 1);
    if pos + 1 < src.len() {
        let word = (src[pos] as u16) | ((src[pos + 1] as u16) << 8);
        payload.extend_from_slice(&word.to_le_bytes());
        pos + 2
    } else {
        payload.push(src[pos]);
        pos + 1
    }
}

/// Encodes `src` and produces the final on-disk blob: the patched 0x30-byte
/// header (preserving every opaque byte of `header_template`), followed by
/// the finalized bitfield block and the payload block.
///
/// Rejects odd-length `src` per the Redesign Flag in spec §9.
pub fn encode_and_patch_header(src: &[u8], header_template: &[u8]) -> Result<Vec<u8>> {
    if header_template.len() < HEADER_SIZE {
        return Err(Dash2Error::InputFormat(format!(
            "header slice too short: {} bytes, need {HEADER_SIZE}",
            header_template.len()
        )));
    }
    if src.len() % 2 != 0 {
        return Err(Dash2Error::InputFormat(
            "odd-length input is not supported".into(),
        ));
    }

    let (bitfield, payload) = encode(src);
    let bit_len: u16 = bitfield
        .len()
        .try_into()
        .map_err(|_| Dash2Error::InputFormat("bitfield too large to encode in u16".into()))?;

    let mut header = header_template[..HEADER_SIZE].to_vec();
    patch_encode_fields(&mut header, src.len() as u32, bit_len);

    let mut out = Vec::with_capacity(HEADER_SIZE + bitfield.len() + payload.len());
    out.extend_from_slice(&header);
    out.extend_from_slice(&bitfield);
    out.extend_from_slice(&payload);
    Ok(out)
}
