//! The build-configuration capability every module exposes.

use crate::env::BuildEnv;

/// Build-configuration surface of a pluggable engine module.
///
/// The orchestrator calls [`can_build`](ModuleConfig::can_build) while
/// deciding which modules to compile into a build, then calls
/// [`configure`](ModuleConfig::configure) on each selected module before any
/// sources are processed.
pub trait ModuleConfig {
  /// Module name, matching its directory name in the engine tree.
  fn name(&self) -> &str;

  /// Whether this module can be built for the given environment.
  ///
  /// `platform` is the target identifier the orchestrator is currently
  /// resolving. Callers always pass the same string stored under `env`'s
  /// `platform` key, so predicates are free to ignore it and decide from
  /// `env` alone.
  fn can_build(&self, env: &BuildEnv, platform: &str) -> bool;

  /// Module-specific build setup, run after selection.
  ///
  /// Defaults to a no-op; most modules have nothing to configure.
  fn configure(&self, env: &BuildEnv) {
    let _ = env;
  }
}
