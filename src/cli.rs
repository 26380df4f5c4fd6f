//! Clap adapter for tagconf.
//!
//! Compiled only when the `clap` Cargo feature is enabled (on by default).
//! Embed [`ConfigArgs`] in your clap derive to get `config list|env|save`
//! subcommands, then call [`ConfigArgs::into_action()`] and hand the result to
//! [`TagconfBuilder::handle()`](crate::TagconfBuilder::handle).

use clap::{Args, Subcommand};

use crate::types::ConfigAction;

/// Clap-derived args for the `config` subcommand group.
///
/// ```ignore
/// #[derive(Subcommand)]
/// enum Commands {
///     Config(ConfigArgs),
/// }
/// ```
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigSubcommand>,
}

/// Available config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show all resolved values, keyed by environment variable name.
    List,
    /// List the environment variables the config reads, with defaults.
    Env,
    /// Write the resolved configuration back to the existing config file.
    Save,
}

impl ConfigArgs {
    /// Convert clap-parsed args into a framework-agnostic `ConfigAction`.
    ///
    /// Bare `config` (no subcommand) maps to `ConfigAction::List`.
    pub fn into_action(self) -> ConfigAction {
        match self.action {
            None | Some(ConfigSubcommand::List) => ConfigAction::List,
            Some(ConfigSubcommand::Env) => ConfigAction::Usage,
            Some(ConfigSubcommand::Save) => ConfigAction::Save,
        }
    }
}
