//! `fonttool` driver glue: font `combine`/`split` file plumbing (spec §6).
//!
//! Grounded on `original_source/src/FontTool.c`'s `main` (`combine`/`split`
//! branches) and `append_palette`, restructured in the "read whole file, call
//! the core codec, write whole file" shape of `jafreck-lz4r/src/io`.

use std::fs;
use std::path::Path;

use anyhow::{bail, ensure, Context, Result};

use crate::cli::constants::{FONT1_TIM_NAME, FONT2_TIM_NAME, INIT_CLT_NAME, INIT_PIX_NAME};
use crate::nibble::{combine, split};
use crate::tim::{wrap_image, PALETTE_SIZE};

/// Reads a little-endian `u32` at `offset` within `path`.
fn read_u32_at(path: &Path, offset: u64) -> Result<u32> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let offset = offset as usize;
    ensure!(
        bytes.len() >= offset + 4,
        "{} is too short to read a u32 at offset {offset:#x}",
        path.display()
    );
    Ok(u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap()))
}

fn bytes_to_u32_words(bytes: &[u8]) -> Result<Vec<u32>> {
    ensure!(
        bytes.len() % 4 == 0,
        "byte slice length {} is not a multiple of 4",
        bytes.len()
    );
    Ok(bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes(c.try_into().unwrap()))
        .collect())
}

fn u32_words_to_bytes(words: &[u32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(words.len() * 4);
    for w in words {
        out.extend_from_slice(&w.to_le_bytes());
    }
    out
}

/// Runs `fonttool combine <a> <b> <out>`.
///
/// Both inputs are skipped past a fixed `0x14`-byte header plus a variable
/// skip read from offset `0x08` as a little-endian `u32`, then nibble-combined.
pub fn combine_files(a_path: &Path, b_path: &Path, out_path: &Path) -> Result<()> {
    let skip_a = read_u32_at(a_path, 0x08)? as u64 + 0x14;
    let skip_b = read_u32_at(b_path, 0x08)? as u64 + 0x14;

    let bytes_a = fs::read(a_path).with_context(|| format!("reading {}", a_path.display()))?;
    let bytes_b = fs::read(b_path).with_context(|| format!("reading {}", b_path.display()))?;

    ensure!(
        (bytes_a.len() as u64) >= skip_a,
        "{} is shorter than its own skip offset",
        a_path.display()
    );
    ensure!(
        (bytes_b.len() as u64) >= skip_b,
        "{} is shorter than its own skip offset",
        b_path.display()
    );

    let words_a = bytes_to_u32_words(&bytes_a[skip_a as usize..])?;
    let words_b = bytes_to_u32_words(&bytes_b[skip_b as usize..])?;

    let combined = combine(&words_a, &words_b)?;

    fs::write(out_path, u32_words_to_bytes(&combined))
        .with_context(|| format!("writing {}", out_path.display()))?;
    Ok(())
}

/// Runs `fonttool split <folder>`.
///
/// Reads `<folder>/0000_INIT.PIX` fully, nibble-splits into `FONT1.TIM` and
/// `FONT2.TIM` under `out_dir` (the original tool writes these relative to its
/// current directory; this driver takes `out_dir` explicitly so callers and
/// tests don't depend on process-global state), then wraps each with a TIM
/// header synthesized from the 256-byte palette at `<folder>/0001_INIT.CLT`.
pub fn split_folder(folder: &Path, out_dir: &Path) -> Result<(std::path::PathBuf, std::path::PathBuf)> {
    let pix_path = folder.join(INIT_PIX_NAME);
    let combined_bytes =
        fs::read(&pix_path).with_context(|| format!("reading {}", pix_path.display()))?;
    let combined_words = bytes_to_u32_words(&combined_bytes)?;

    let (words_a, words_b) = split(&combined_words);

    let clt_path = folder.join(INIT_CLT_NAME);
    let clt_bytes =
        fs::read(&clt_path).with_context(|| format!("reading {}", clt_path.display()))?;
    if clt_bytes.len() < PALETTE_SIZE {
        bail!(
            "{} is shorter than the expected {PALETTE_SIZE}-byte palette",
            clt_path.display()
        );
    }
    let palette = &clt_bytes[..PALETTE_SIZE];

    let tim1 = wrap_image(palette, &u32_words_to_bytes(&words_a))?;
    let tim2 = wrap_image(palette, &u32_words_to_bytes(&words_b))?;

    let font1_path = out_dir.join(FONT1_TIM_NAME);
    let font2_path = out_dir.join(FONT2_TIM_NAME);
    fs::write(&font1_path, &tim1)
        .with_context(|| format!("writing {}", font1_path.display()))?;
    fs::write(&font2_path, &tim2)
        .with_context(|| format!("writing {}", font2_path.display()))?;

    Ok((font1_path, font2_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn init_pix_blob(words: &[u32]) -> Vec<u8> {
        u32_words_to_bytes(words)
    }

    #[test]
    fn combine_round_trips_with_split() {
        let dir = tempdir().unwrap();

        let words_a: Vec<u32> = vec![0x3333_3333, 0x0000_0000, 0x1111_1111 & 0x3333_3333];
        let words_b: Vec<u32> = vec![0x0000_0000, 0x3333_3333, 0x2222_2222 & 0x3333_3333];

        // Build synthetic "font" files with a 0x14-byte fixed header + 4-byte
        // variable skip field at 0x08 (value = 0, i.e. no extra skip) followed
        // by the payload words.
        let mut file_a = vec![0u8; 0x14];
        file_a[0x08..0x0C].copy_from_slice(&0u32.to_le_bytes());
        file_a.extend_from_slice(&init_pix_blob(&words_a));

        let mut file_b = vec![0u8; 0x14];
        file_b[0x08..0x0C].copy_from_slice(&0u32.to_le_bytes());
        file_b.extend_from_slice(&init_pix_blob(&words_b));

        let a_path = dir.path().join("A.PIX");
        let b_path = dir.path().join("B.PIX");
        let out_path = dir.path().join("OUT.PIX");
        fs::write(&a_path, &file_a).unwrap();
        fs::write(&b_path, &file_b).unwrap();

        combine_files(&a_path, &b_path, &out_path).unwrap();

        let combined_bytes = fs::read(&out_path).unwrap();
        let combined_words = bytes_to_u32_words(&combined_bytes).unwrap();
        let (sa, sb) = split(&combined_words);
        assert_eq!(sa, words_a);
        assert_eq!(sb, words_b);
    }

    #[test]
    fn split_writes_wrapped_tim_files() {
        let dir = tempdir().unwrap();
        let out_dir = tempdir().unwrap();

        let combined: Vec<u32> = vec![0x9999_9999, 0x0000_0000, 0xFFFF_FFFF];
        fs::write(dir.path().join(INIT_PIX_NAME), init_pix_blob(&combined)).unwrap();
        fs::write(dir.path().join(INIT_CLT_NAME), vec![0x55u8; PALETTE_SIZE]).unwrap();

        let (font1, font2) = split_folder(dir.path(), out_dir.path()).unwrap();
        let tim1 = fs::read(&font1).unwrap();
        let tim2 = fs::read(&font2).unwrap();

        assert_eq!(tim1.len(), crate::tim::HEADER_SIZE + combined.len() * 4);
        assert_eq!(tim2.len(), crate::tim::HEADER_SIZE + combined.len() * 4);
        assert_eq!(&tim1[0x14..0x114], &[0x55u8; PALETTE_SIZE][..]);
    }
}
