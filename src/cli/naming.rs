//! Filename derivation helpers shared by both CLI binaries (spec §4.7/§6).
//!
//! `last_name_from_path` is kept verbatim from `jafreck-lz4r/src/cli/arg_utils.rs`.
//! `dirname`, `header_offset_for`, and `derive_pix_output_name` are new, grounded
//! on `original_source/src/MELTTIMTool.c`'s `main()` (basename-prefix parsing) and
//! its `to_uppercase`/`remove_extension`/`get_dirname` helpers.

use crate::dash2::header::HEADER_SIZE;
use crate::error::{Dash2Error, Result};

/// Returns the last path component of `path`, handling both `/` and `\` separators.
pub fn last_name_from_path(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match after_slash.rfind('\\') {
        Some(pos) => &after_slash[pos + 1..],
        None => after_slash,
    }
}

/// Returns the directory portion of `path`, or `"."` if `path` has no separator.
///
/// Equivalent to C `get_dirname`.
pub fn dirname(path: &str) -> &str {
    let slash = path.rfind('/');
    let backslash = path.rfind('\\');
    match slash.into_iter().chain(backslash).max() {
        Some(pos) => &path[..pos],
        None => ".",
    }
}

/// Parses the first four characters of `basename` as an ASCII-decimal prefix and
/// returns the corresponding byte offset into `HEADER.BIN` (`prefix * HEADER_SIZE`).
///
/// Equivalent to C `main`'s `input_file_prefix`/`atoi` dance. Returns
/// `Dash2Error::InputFormat` if fewer than four characters are available or any
/// of them is not an ASCII digit.
pub fn header_offset_for(basename: &str) -> Result<u32> {
    let prefix: Vec<char> = basename.chars().take(4).collect();
    if prefix.len() < 4 || !prefix.iter().all(|c| c.is_ascii_digit()) {
        return Err(Dash2Error::InputFormat(
            "input file name prefix is not a decimal number".into(),
        ));
    }
    let prefix_str: String = prefix.into_iter().collect();
    let prefix_value: u32 = prefix_str
        .parse()
        .map_err(|_| Dash2Error::InputFormat("input file name prefix is not a decimal number".into()))?;
    Ok(prefix_value * HEADER_SIZE as u32)
}

/// Derives the decompressed output filename from an input basename: strips the
/// extension, uppercases, appends `.PIX`.
///
/// Equivalent to C `main`'s `remove_extension` + `to_uppercase` + `.PIX` append.
pub fn derive_pix_output_name(basename: &str) -> String {
    let stem = match basename.rfind('.') {
        Some(pos) if pos != 0 => &basename[..pos],
        _ => basename,
    };
    format!("{}.PIX", stem.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_name_from_path_unix() {
        assert_eq!(last_name_from_path("/a/b/c"), "c");
    }

    #[test]
    fn last_name_from_path_windows() {
        assert_eq!(last_name_from_path("a\\b"), "b");
    }

    #[test]
    fn last_name_from_path_no_separator() {
        assert_eq!(last_name_from_path("file.txt"), "file.txt");
    }

    #[test]
    fn last_name_from_path_mixed() {
        assert_eq!(last_name_from_path("a/b\\c"), "c");
    }

    #[test]
    fn dirname_unix() {
        assert_eq!(dirname("/a/b/c.PIX"), "/a/b");
    }

    #[test]
    fn dirname_no_separator_defaults_to_dot() {
        assert_eq!(dirname("c.PIX"), ".");
    }

    #[test]
    fn header_offset_for_valid_prefix() {
        assert_eq!(header_offset_for("0007_FOO.BIN").unwrap(), 7 * HEADER_SIZE as u32);
    }

    #[test]
    fn header_offset_for_rejects_non_decimal_prefix() {
        assert!(header_offset_for("FOO0_BAR.BIN").is_err());
    }

    #[test]
    fn header_offset_for_rejects_short_basename() {
        assert!(header_offset_for("00").is_err());
    }

    #[test]
    fn derive_pix_output_name_strips_and_uppercases() {
        assert_eq!(derive_pix_output_name("0012_foo.bin"), "0012_FOO.PIX");
    }

    #[test]
    fn derive_pix_output_name_no_extension() {
        assert_eq!(derive_pix_output_name("0012_foo"), "0012_FOO.PIX");
    }
}
