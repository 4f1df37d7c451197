//! Built-in module configurations.

pub mod discord_rpc;

pub use discord_rpc::DiscordRpc;

use crate::module::ModuleConfig;

/// The built-in module set, in registration order.
pub fn builtin() -> Vec<Box<dyn ModuleConfig>> {
  vec![Box::new(DiscordRpc)]
}
