//! Filesystem driver glue for both CLI binaries (spec §6).

pub mod fonttool;
pub mod melttim;
