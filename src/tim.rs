//! TIM (PlayStation texture image) header synthesis (spec §4.5).
//!
//! Grounded on `original_source/src/FontTool.c`'s `create_tim_header`; constants are
//! fixed for this asset set and are not derived from input.

use crate::error::{Dash2Error, Result};

/// Size of a palette blob accepted by [`synthesize_header`].
pub const PALETTE_SIZE: usize = 256;
/// Size of the synthesized header.
pub const HEADER_SIZE: usize = 288;

const TIM_MAGIC: u32 = 0x0000_0010;
const COLOR_DEPTH: u32 = 0x0000_0008;
const CLUT_LEN: u32 = 0x0000_010C;
const COLORS_PER_CLUT: u16 = 0x0010;
const CLUT_COUNT: u16 = 0x0008;
const IMAGE_LEN: u32 = 0x0000_800C;
const IMAGE_WIDTH: u16 = 0x0040;
const IMAGE_HEIGHT: u16 = 0x0100;

const OFFSET_PALETTE: usize = 0x14;
const OFFSET_IMAGE_LEN: usize = 0x114;

/// Builds a 288-byte TIM header wrapping `palette` (exactly [`PALETTE_SIZE`] bytes).
///
/// Returns `Dash2Error::InputFormat` if `palette.len() != PALETTE_SIZE`.
pub fn synthesize_header(palette: &[u8]) -> Result<Vec<u8>> {
    if palette.len() != PALETTE_SIZE {
        return Err(Dash2Error::InputFormat(format!(
            "palette must be exactly {PALETTE_SIZE} bytes, got {}",
            palette.len()
        )));
    }

    let mut header = vec![0u8; HEADER_SIZE];
    header[0x00..0x04].copy_from_slice(&TIM_MAGIC.to_le_bytes());
    header[0x04..0x08].copy_from_slice(&COLOR_DEPTH.to_le_bytes());
    header[0x08..0x0C].copy_from_slice(&CLUT_LEN.to_le_bytes());
    header[0x0C..0x0E].copy_from_slice(&0u16.to_le_bytes()); // palette VRAM X
    header[0x0E..0x10].copy_from_slice(&0u16.to_le_bytes()); // palette VRAM Y
    header[0x10..0x12].copy_from_slice(&COLORS_PER_CLUT.to_le_bytes());
    header[0x12..0x14].copy_from_slice(&CLUT_COUNT.to_le_bytes());
    header[OFFSET_PALETTE..OFFSET_PALETTE + PALETTE_SIZE].copy_from_slice(palette);
    header[OFFSET_IMAGE_LEN..OFFSET_IMAGE_LEN + 4].copy_from_slice(&IMAGE_LEN.to_le_bytes());
    header[0x118..0x11A].copy_from_slice(&0u16.to_le_bytes()); // image VRAM X
    header[0x11A..0x11C].copy_from_slice(&0u16.to_le_bytes()); // image VRAM Y
    header[0x11C..0x11E].copy_from_slice(&IMAGE_WIDTH.to_le_bytes());
    header[0x11E..0x120].copy_from_slice(&IMAGE_HEIGHT.to_le_bytes());

    Ok(header)
}

/// Builds a complete TIM file blob: the synthesized header followed by `image_payload`.
pub fn wrap_image(palette: &[u8], image_payload: &[u8]) -> Result<Vec<u8>> {
    let mut out = synthesize_header(palette)?;
    out.extend_from_slice(image_payload);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_palette_size() {
        assert!(synthesize_header(&[0u8; 255]).is_err());
        assert!(synthesize_header(&[0u8; 257]).is_err());
    }

    #[test]
    fn s6_header_layout() {
        let palette: Vec<u8> = (0..PALETTE_SIZE as u32).map(|i| (i % 256) as u8).collect();
        let header = synthesize_header(&palette).unwrap();
        assert_eq!(header.len(), HEADER_SIZE);

        assert_eq!(u32::from_le_bytes(header[0x00..0x04].try_into().unwrap()), 0x10);
        assert_eq!(u32::from_le_bytes(header[0x08..0x0C].try_into().unwrap()), 0x010C);
        assert_eq!(
            u32::from_le_bytes(header[0x114..0x118].try_into().unwrap()),
            0x800C
        );
        assert_eq!(u16::from_le_bytes(header[0x11C..0x11E].try_into().unwrap()), 0x0040);
        assert_eq!(u16::from_le_bytes(header[0x11E..0x120].try_into().unwrap()), 0x0100);

        assert_eq!(&header[0x14..0x114], palette.as_slice());
    }

    #[test]
    fn wrap_image_appends_payload_after_header() {
        let palette = [0xAAu8; PALETTE_SIZE];
        let payload = [0x01u8, 0x02, 0x03];
        let blob = wrap_image(&palette, &payload).unwrap();
        assert_eq!(blob.len(), HEADER_SIZE + payload.len());
        assert_eq!(&blob[HEADER_SIZE..], &payload);
    }
}
