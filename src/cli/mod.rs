//! CLI-facing plumbing shared by the `melttim` and `fonttool` binaries:
//! constants/macros (verbosity, fixed filenames) and filename derivation.

pub mod constants;
pub mod naming;
