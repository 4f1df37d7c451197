//! Build configuration for the Discord Rich Presence module.

use modcfg_platform::{Arch, Platform};

use crate::env::BuildEnv;
use crate::module::ModuleConfig;

/// Discord Rich Presence integration.
///
/// Built for desktop x86_64 targets only: the native presence library it
/// links against ships for linuxbsd and windows, nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscordRpc;

impl ModuleConfig for DiscordRpc {
  fn name(&self) -> &str {
    "discord_rpc"
  }

  // Decides from env alone; the requested target is the same string, so the
  // platform argument stays unused.
  fn can_build(&self, env: &BuildEnv, _platform: &str) -> bool {
    let desktop = matches!(
      env.target_platform(),
      Some(Platform::LinuxBsd | Platform::Windows)
    );
    desktop && env.target_arch() == Some(Arch::X86_64)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn can_build(platform: &str, arch: &str) -> bool {
    let env = BuildEnv::new(platform, arch);
    DiscordRpc.can_build(&env, env.platform())
  }

  #[test]
  fn builds_on_desktop_x86_64() {
    assert!(can_build("linuxbsd", "x86_64"));
    assert!(can_build("windows", "x86_64"));
  }

  #[test]
  fn rejects_other_platforms() {
    assert!(!can_build("macos", "x86_64"));
    assert!(!can_build("android", "x86_64"));
    assert!(!can_build("ios", "x86_64"));
    assert!(!can_build("web", "x86_64"));
    assert!(!can_build("not-a-platform", "x86_64"));
    assert!(!can_build("", "x86_64"));
  }

  #[test]
  fn rejects_other_architectures() {
    assert!(!can_build("linuxbsd", "arm64"));
    assert!(!can_build("windows", "x86_32"));
    assert!(!can_build("linuxbsd", ""));
  }

  #[test]
  fn platform_argument_is_ignored() {
    // The predicate reads env only; a mismatched argument changes nothing
    let env = BuildEnv::new("windows", "x86_64");
    assert!(DiscordRpc.can_build(&env, "macos"));
    assert!(DiscordRpc.can_build(&env, ""));

    let env = BuildEnv::new("macos", "x86_64");
    assert!(!DiscordRpc.can_build(&env, "windows"));
  }
}
