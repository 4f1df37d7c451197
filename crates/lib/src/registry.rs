//! Module selection.
//!
//! The registry holds every module's build configuration and replays the
//! orchestrator's selection pass: consult each capability predicate against
//! the build environment, then run the configure hook of each module that
//! made the cut. The result is a [`Selection`] report the orchestrator can
//! log, persist, or diff against a previous build.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::env::BuildEnv;
use crate::module::ModuleConfig;
use crate::modules;

/// Errors that can occur while assembling a registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
  /// Two modules registered under the same name.
  #[error("module '{0}' is already registered")]
  DuplicateModule(String),
}

/// Outcome of evaluating every registered module against one environment.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
  /// Modules whose predicate held, in registration order.
  pub enabled: Vec<String>,
  /// Modules ruled out by their predicate or by a per-module opt-out.
  pub skipped: Vec<String>,
}

impl Selection {
  /// Whether the named module is part of the build.
  pub fn is_enabled(&self, name: &str) -> bool {
    self.enabled.iter().any(|n| n == name)
  }
}

/// Registry of module build configurations.
///
/// Modules are evaluated in registration order, once per build invocation.
#[derive(Default)]
pub struct ModuleRegistry {
  modules: Vec<Box<dyn ModuleConfig>>,
}

impl ModuleRegistry {
  /// Create an empty registry.
  pub fn new() -> Self {
    Self::default()
  }

  /// Registry pre-seeded with the built-in modules.
  pub fn with_builtin() -> Self {
    let mut registry = Self::new();
    for module in modules::builtin() {
      registry
        .register(module)
        .expect("built-in module names are unique");
    }
    registry
  }

  /// Register a module's build configuration.
  pub fn register(&mut self, module: Box<dyn ModuleConfig>) -> Result<(), RegistryError> {
    if self.modules.iter().any(|m| m.name() == module.name()) {
      return Err(RegistryError::DuplicateModule(module.name().to_string()));
    }
    self.modules.push(module);
    Ok(())
  }

  /// Iterate over the registered modules in registration order.
  pub fn modules(&self) -> impl Iterator<Item = &dyn ModuleConfig> {
    self.modules.iter().map(|m| m.as_ref())
  }

  /// Evaluate every module against `env` and configure the selected ones.
  ///
  /// A module is skipped when the orchestrator option
  /// `module_<name>_enabled` is set to a falsy value, or when its
  /// `can_build` predicate rejects the environment. Forcing the option to a
  /// truthy value does not bypass the predicate: a target the module cannot
  /// build for stays excluded.
  pub fn resolve(&self, env: &BuildEnv) -> Selection {
    let mut selection = Selection::default();

    for module in &self.modules {
      let name = module.name();

      if env.flag(&format!("module_{name}_enabled")) == Some(false) {
        debug!(module = name, "disabled by build option");
        selection.skipped.push(name.to_string());
        continue;
      }

      // The calling convention: the predicate receives env's own platform
      if module.can_build(env, env.platform()) {
        debug!(
          module = name,
          platform = env.platform(),
          arch = env.arch(),
          "module enabled"
        );
        module.configure(env);
        selection.enabled.push(name.to_string());
      } else {
        debug!(
          module = name,
          platform = env.platform(),
          arch = env.arch(),
          "module not buildable for target"
        );
        selection.skipped.push(name.to_string());
      }
    }

    info!(
      enabled = selection.enabled.len(),
      skipped = selection.skipped.len(),
      "module selection complete"
    );
    selection
  }
}
