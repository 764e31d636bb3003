//! `melttim` driver glue: header-slice extraction, decode/encode dispatch,
//! `HEADER.BIN` patch-back (spec §6).
//!
//! Grounded on `original_source/src/MELTTIMTool.c`'s `decompress_file`/
//! `compress_file`, restructured in the "read whole file, call the core codec,
//! write whole file" shape of `jafreck-lz4r/src/io/compress_frame.rs` /
//! `decompress_frame.rs`, returning `anyhow::Result` with `.context(...)` at
//! each fallible filesystem step.

use std::fs;
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};

use crate::cli::constants::HEADER_FILE_NAME;
use crate::cli::naming::{derive_pix_output_name, dirname, header_offset_for, last_name_from_path};
use crate::dash2::header::HEADER_SIZE;
use crate::dash2::{decode, encode_and_patch_header};

/// Resolves the sibling `HEADER.BIN` path for an input file at `input_path`.
fn header_path_for(input_path: &Path) -> PathBuf {
    Path::new(dirname(&input_path.to_string_lossy())).join(HEADER_FILE_NAME)
}

/// Reads the `HEADER_SIZE`-byte header slice at `offset` within `header_path`.
fn read_header_slice(header_path: &Path, offset: u32) -> Result<Vec<u8>> {
    use std::io::Read;
    let mut file = fs::File::open(header_path)
        .with_context(|| format!("opening {}", header_path.display()))?;
    file.seek(SeekFrom::Start(offset as u64))
        .with_context(|| format!("seeking {} to offset {offset}", header_path.display()))?;
    let mut buf = vec![0u8; HEADER_SIZE];
    file.read_exact(&mut buf)
        .with_context(|| format!("reading header slice from {}", header_path.display()))?;
    Ok(buf)
}

/// Writes `data` back into `header_path` at `offset`, leaving the rest of the file
/// untouched.
fn patch_header_slice(header_path: &Path, offset: u32, data: &[u8]) -> Result<()> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .open(header_path)
        .with_context(|| format!("opening {} for writing", header_path.display()))?;
    file.seek(SeekFrom::Start(offset as u64))
        .with_context(|| format!("seeking {} to offset {offset}", header_path.display()))?;
    file.write_all(data)
        .with_context(|| format!("writing header slice into {}", header_path.display()))?;
    Ok(())
}

/// Runs `melttim d <input_file> [<output_folder>]`.
///
/// Extracts the sibling header slice, decodes `input_file`, and writes the
/// decompressed payload to `<output_folder>/<BASENAME>.PIX` (or `./<BASENAME>.PIX`
/// if no output folder is given).
pub fn decompress_file(input_path: &Path, output_folder: Option<&Path>) -> Result<PathBuf> {
    let basename = last_name_from_path(&input_path.to_string_lossy()).to_string();
    let header_offset = header_offset_for(&basename)?;

    let header_path = header_path_for(input_path);
    let header = read_header_slice(&header_path, header_offset)?;

    let compressed = fs::read(input_path)
        .with_context(|| format!("reading {}", input_path.display()))?;

    let decompressed = decode(&compressed, &header)?;

    let output_name = derive_pix_output_name(&basename);
    let output_path = match output_folder {
        Some(folder) => folder.join(&output_name),
        None => PathBuf::from(&output_name),
    };

    fs::write(&output_path, &decompressed)
        .with_context(|| format!("writing {}", output_path.display()))?;

    Ok(output_path)
}

/// Runs `melttim c <input_file> <original_output_path>`.
///
/// Resolves `HEADER.BIN` from `original_output_path`'s directory, encodes
/// `input_file`, writes the bit+payload portion to `original_output_path`, and
/// patches `HEADER.BIN` at the basename-prefix offset with the freshly computed
/// `decompressedSize`/`bitfieldSize`.
pub fn compress_file(input_path: &Path, original_output_path: &Path) -> Result<()> {
    let basename = last_name_from_path(&original_output_path.to_string_lossy()).to_string();
    let header_offset = header_offset_for(&basename)?;

    let header_path = header_path_for(original_output_path);
    let header_template = read_header_slice(&header_path, header_offset)?;

    let src = fs::read(input_path)
        .with_context(|| format!("reading {}", input_path.display()))?;

    let blob = encode_and_patch_header(&src, &header_template)?;
    ensure!(blob.len() >= HEADER_SIZE, "encoded blob shorter than header");

    let (patched_header, rest) = blob.split_at(HEADER_SIZE);
    patch_header_slice(&header_path, header_offset, patched_header)?;

    fs::write(original_output_path, rest)
        .with_context(|| format!("writing {}", original_output_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dash2::header::TIM_ENUM_DASH2;
    use tempfile::tempdir;

    fn blank_header_blob() -> Vec<u8> {
        let mut h = vec![0u8; HEADER_SIZE];
        h[0..4].copy_from_slice(&TIM_ENUM_DASH2.to_le_bytes());
        h
    }

    #[test]
    fn round_trips_via_filesystem() {
        let dir = tempdir().unwrap();
        let header_path = dir.path().join("HEADER.BIN");
        fs::write(&header_path, blank_header_blob()).unwrap();

        let src = [0xAAu8, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF];
        let input_path = dir.path().join("0000_FOO.BIN");
        fs::write(&input_path, &src).unwrap();
        let output_path = dir.path().join("0000_FOO.BIN"); // encode writes back in place

        compress_file(&input_path, &output_path).unwrap();

        let decoded_path = decompress_file(&output_path, Some(dir.path())).unwrap();
        assert_eq!(decoded_path.file_name().unwrap(), "0000_FOO.PIX");
        let decoded = fs::read(&decoded_path).unwrap();
        assert_eq!(decoded, src);
    }

    #[test]
    fn rejects_non_decimal_prefix() {
        let dir = tempdir().unwrap();
        let input_path = dir.path().join("FOOO_BAR.BIN");
        fs::write(&input_path, [0u8; 4]).unwrap();
        assert!(decompress_file(&input_path, None).is_err());
    }
}
