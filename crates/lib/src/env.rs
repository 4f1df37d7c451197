//! The build environment descriptor.
//!
//! The orchestrator constructs one `BuildEnv` per build invocation and hands
//! every module a shared read-only view of it. Modules read the `platform`
//! and `arch` keys (plus their own option keys) and never write back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use modcfg_platform::{Arch, Platform};

/// Key holding the requested target platform identifier.
pub const KEY_PLATFORM: &str = "platform";

/// Key holding the requested CPU architecture identifier.
pub const KEY_ARCH: &str = "arch";

/// The per-build configuration mapping owned by the orchestrator.
///
/// Stored as an ordered map so serialized descriptors are deterministic and
/// diffable across builds.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildEnv {
  options: BTreeMap<String, String>,
}

impl BuildEnv {
  /// Create a descriptor with the two keys every build carries.
  pub fn new(platform: &str, arch: &str) -> Self {
    let mut options = BTreeMap::new();
    options.insert(KEY_PLATFORM.to_string(), platform.to_string());
    options.insert(KEY_ARCH.to_string(), arch.to_string());
    Self { options }
  }

  /// Add an orchestrator option (builder style).
  pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.options.insert(key.into(), value.into());
    self
  }

  /// Look up an option by key.
  pub fn get(&self, key: &str) -> Option<&str> {
    self.options.get(key).map(String::as_str)
  }

  /// The requested target platform identifier.
  ///
  /// A missing key resolves to `""`, which matches no platform. Populating
  /// the key is the orchestrator's contract, not validated here.
  pub fn platform(&self) -> &str {
    self.get(KEY_PLATFORM).unwrap_or("")
  }

  /// The requested CPU architecture identifier.
  ///
  /// A missing key resolves to `""`, which matches no architecture.
  pub fn arch(&self) -> &str {
    self.get(KEY_ARCH).unwrap_or("")
  }

  /// Typed view of the `platform` key.
  pub fn target_platform(&self) -> Option<Platform> {
    Platform::parse(self.platform())
  }

  /// Typed view of the `arch` key.
  pub fn target_arch(&self) -> Option<Arch> {
    Arch::parse(self.arch())
  }

  /// Interpret an option as a boolean build flag.
  ///
  /// Follows the orchestrator's vocabulary: `yes`/`true`/`1` are true,
  /// `no`/`false`/`0` are false. Absent keys and other values are `None`.
  pub fn flag(&self, key: &str) -> Option<bool> {
    match self.get(key)? {
      "yes" | "true" | "1" => Some(true),
      "no" | "false" | "0" => Some(false),
      _ => None,
    }
  }
}
