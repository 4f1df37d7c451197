//! modcfg-lib: build-time module selection
//!
//! This crate provides the types the engine's build orchestrator uses to
//! decide which modules participate in a build:
//! - `BuildEnv`: the per-build configuration descriptor
//! - `ModuleConfig`: the capability surface every module exposes
//! - `ModuleRegistry`: predicate evaluation and configure dispatch
//! - `modules`: the built-in module configurations

pub mod env;
pub mod module;
pub mod modules;
pub mod registry;

pub use env::BuildEnv;
pub use module::ModuleConfig;
pub use registry::{ModuleRegistry, RegistryError, Selection};
