//! Program identity, fixed filenames, and verbosity-gated diagnostic macros,
//! shared by both CLI binaries.
//!
//! Grounded on `jafreck-lz4r/src/cli/constants.rs`: the atomic display-level
//! global and the `displaylevel!`/`display!`/`end_process!` macro triplet are
//! kept verbatim in spirit; LZ4-specific globals (`LZ4C_LEGACY_COMMANDS`,
//! `IO_MT`, `WELCOME_MESSAGE_FMT`) have no counterpart in this spec and are
//! dropped.

use std::sync::atomic::{AtomicU32, Ordering};

pub const MELTTIM_NAME: &str = "melttim";
pub const FONTTOOL_NAME: &str = "fonttool";

/// Fixed sibling index filename consulted for every decode/encode.
pub const HEADER_FILE_NAME: &str = "HEADER.BIN";
/// Fixed split-output filenames (spec §6, `fonttool split`).
pub const FONT1_TIM_NAME: &str = "FONT1.TIM";
pub const FONT2_TIM_NAME: &str = "FONT2.TIM";
/// Fixed input filenames under a font asset folder.
pub const INIT_PIX_NAME: &str = "0000_INIT.PIX";
pub const INIT_CLT_NAME: &str = "0001_INIT.CLT";

/// Extension applied to decompressed DASH2 output (spec §6).
pub const PIX_EXTENSION: &str = ".PIX";

// Display level global (`jafreck-lz4r/src/cli/constants.rs` line ~40).
//
// 0 = no output; 1 = errors only; 2 = normal (default); 3 = verbose.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stdout — equivalent to C `DISPLAYOUT(...)`.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr — equivalent to C `DISPLAY(...)`.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level` — equivalent to C `DISPLAYLEVEL(l, ...)`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

/// Terminate the process with an error code after printing a diagnostic.
/// Equivalent to the C `END_PROCESS(error, ...)` macro from both original tools' `main()`.
///
/// Usage: `end_process!(exit_code, "message {}", arg)`
#[macro_export]
macro_rules! end_process {
    ($error:expr, $($arg:tt)*) => {{
        if $crate::cli::constants::display_level() >= 1 {
            eprint!("Error {} : ", $error);
            eprint!($($arg)*);
            eprint!("\n");
        }
        std::process::exit($error as i32);
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_filenames() {
        assert_eq!(HEADER_FILE_NAME, "HEADER.BIN");
        assert_eq!(FONT1_TIM_NAME, "FONT1.TIM");
        assert_eq!(FONT2_TIM_NAME, "FONT2.TIM");
        assert_eq!(INIT_PIX_NAME, "0000_INIT.PIX");
        assert_eq!(INIT_CLT_NAME, "0001_INIT.CLT");
        assert_eq!(PIX_EXTENSION, ".PIX");
    }

    #[test]
    fn display_level_default_and_roundtrip() {
        let prev = display_level();
        set_display_level(3);
        assert_eq!(display_level(), 3);
        set_display_level(prev);
    }
}
