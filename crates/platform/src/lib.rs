//! Target platform identifiers for modcfg
//!
//! This crate provides the typed vocabulary the build orchestrator uses to
//! describe build targets:
//! - Target platform identifiers (e.g., "linuxbsd", "windows")
//! - CPU architecture identifiers (e.g., "x86_64", "arm64")

mod platform;

pub use platform::{Arch, Platform};
