//! DASH2 decoder (spec §4.3, "Decoding").
//!
//! Grounded bit-exactly on `original_source/src/MELTTIMTool.c`'s
//! `decompress_data`, restructured as a safe, `Vec`-based, `Result`-returning
//! function in the style of `jafreck-lz4r/src/block/decompress_core.rs`.

use crate::dash2::header::{read_decode_params, HEADER_SIZE};
use crate::error::{Dash2Error, Result};
use crate::lz::WINDOW_SIZE;

const RESET_SENTINEL: u16 = 0xFFFF;

/// Decodes a DASH2 compressed stream.
///
/// `compressed` is the bitfield block followed by the payload block (i.e.
/// everything *after* the 0x30-byte MELT_TIM header). `header` is the
/// sibling 0x30-byte header slice supplying `decompressedSize` and
/// `bitfieldSize`.
///
/// Returns `Dash2Error::InputFormat` if the header is malformed, or if the
/// bitfield is exhausted before `decompressedSize` bytes have been produced
/// (a redesign over the reference implementation, which silently returns a
/// short buffer — see spec §9 Redesign Flags).
pub fn decode(compressed: &[u8], header: &[u8]) -> Result<Vec<u8>> {
    let params = read_decode_params(header)?;
    let decompressed_size = params.decompressed_size as usize;
    let bitfield_size = params.bitfield_size as usize;

    if decompressed_size == 0 {
        return Ok(Vec::new());
    }

    if compressed.len() < bitfield_size {
        return Err(Dash2Error::InputFormat(
            "compressed stream shorter than bitfieldSize".into(),
        ));
    }

    let mut buffer = vec![0u8; decompressed_size];
    let mut destination = 0usize;
    let mut window = 0usize;
    let mut payload_offset = bitfield_size;
    let total_bits = bitfield_size * 8;

    'bits: for i in 0..total_bits {
        if destination >= decompressed_size {
            break;
        }

        let word_idx = i / 32;
        let bit_in_word = 31 - (i % 32);
        let word_off = word_idx * 4;
        if word_off + 4 > compressed.len() {
            return Err(Dash2Error::InputFormat(
                "truncated DASH2 stream: bitfield word out of range".into(),
            ));
        }
        let bitfield_word = u32::from_le_bytes([
            compressed[word_off],
            compressed[word_off + 1],
            compressed[word_off + 2],
            compressed[word_off + 3],
        ]);
        let bit = (bitfield_word >> bit_in_word) & 1;

        if payload_offset + 2 > compressed.len() {
            return Err(Dash2Error::InputFormat(
                "truncated DASH2 stream: payload word out of range".into(),
            ));
        }
        let word = u16::from_le_bytes([compressed[payload_offset], compressed[payload_offset + 1]]);

        if bit == 0 {
            // Literal.
            buffer[destination] = (word & 0xFF) as u8;
            buffer[destination + 1] = (word >> 8) as u8;
            destination += 2;
        } else if word == RESET_SENTINEL {
            // Window reset sentinel: no bytes emitted.
            window += WINDOW_SIZE;
        } else {
            // Back-reference.
            let offset13 = ((word >> 3) & 0x1FFF) as usize;
            let length3 = (word & 0x07) as usize;
            let count = length3 + 2;
            let mut src = window + offset13;

            for _ in 0..count {
                if destination >= decompressed_size {
                    break 'bits;
                }
                if src + 2 > buffer.len() {
                    return Err(Dash2Error::InputFormat(
                        "back-reference reads past initialized output".into(),
                    ));
                }
                let packed = u16::from_le_bytes([buffer[src], buffer[src + 1]]);
                buffer[destination] = (packed & 0xFF) as u8;
                buffer[destination + 1] = (packed >> 8) as u8;
                src += 2;
                destination += 2;
            }
        }

        payload_offset += 2;
    }

    if destination < decompressed_size {
        return Err(Dash2Error::InputFormat(format!(
            "truncated DASH2 stream: produced {destination} of {decompressed_size} bytes"
        )));
    }

    Ok(buffer)
}

/// Convenience wrapper over [`decode`] for callers holding the header and
/// compressed stream concatenated as they appear on disk (header first).
pub fn decode_with_leading_header(blob: &[u8]) -> Result<Vec<u8>> {
    if blob.len() < HEADER_SIZE {
        return Err(Dash2Error::InputFormat("blob shorter than header".into()));
    }
    let (header, compressed) = blob.split_at(HEADER_SIZE);
    decode(compressed, header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dash2::encode::encode;

    fn header_template(decompressed_size: u32, bitfield_size: u16) -> Vec<u8> {
        let mut h = vec![0u8; HEADER_SIZE];
        h[0..4].copy_from_slice(&3u32.to_le_bytes());
        h[4..8].copy_from_slice(&decompressed_size.to_le_bytes());
        h[0x24..0x26].copy_from_slice(&bitfield_size.to_le_bytes());
        h
    }

    #[test]
    fn empty_input_decodes_to_empty_regardless_of_bitfield() {
        // S1
        let header = header_template(0, 4);
        let compressed = vec![0xFFu8; 4];
        let out = decode(&compressed, &header).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn single_literal_round_trips() {
        // S2
        let src = [0xABu8, 0xCD];
        let mut header = header_template(0, 0);
        let (bits, payload) = encode(&src);
        header[4..8].copy_from_slice(&(src.len() as u32).to_le_bytes());
        header[0x24..0x26].copy_from_slice(&(bits.len() as u16).to_le_bytes());

        assert_eq!(payload, vec![0xAB, 0xCD]);
        assert_eq!(bits, vec![0x00, 0x00, 0x00, 0x00]);

        let mut compressed = bits;
        compressed.extend_from_slice(&payload);
        let out = decode(&compressed, &header).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn rejects_truncated_bitfield() {
        let header = header_template(4, 4);
        // Claims 4 decompressed bytes but gives no payload at all.
        let compressed = vec![0x00u8; 4];
        assert!(decode(&compressed, &header).is_err());
    }
}
