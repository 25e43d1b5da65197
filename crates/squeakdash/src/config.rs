//! CLI configuration: thin wrapper around `squeakdash_config` shared types.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--host, --port, --timeout).

use squeakdash_config::ConfigError;
use squeakdash_core::AdminConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use squeakdash_config::{Config, Profile, config_path, load_config, save_config};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    config.profile_name(global.profile.as_deref()).to_owned()
}

/// Comma-separated profile names for help text.
pub fn available_profiles(config: &Config) -> String {
    let mut names: Vec<_> = config.profiles.keys().map(String::as_str).collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort_unstable();
    names.join(", ")
}

/// Translate config + global flags into an `AdminConfig`.
///
/// Flag overrides take priority over profile values. An unknown profile is
/// only an error when `--host` doesn't say where to go instead.
pub fn resolve_admin_config(global: &GlobalOpts, config: &Config) -> Result<AdminConfig, CliError> {
    let name = active_profile_name(global, config);
    let mut profile = match config.profile(&name) {
        Ok(profile) => profile,
        Err(ConfigError::UnknownProfile { .. }) if global.host.is_some() => Profile::default(),
        Err(ConfigError::UnknownProfile { name }) => {
            return Err(CliError::ProfileNotFound {
                name,
                available: available_profiles(config),
            });
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(ref host) = global.host {
        profile.host.clone_from(host);
    }
    if let Some(port) = global.port {
        profile.port = port;
    }
    if global.timeout.is_some() {
        profile.timeout = global.timeout;
    }

    Ok(squeakdash_config::profile_to_admin_config(
        &profile,
        &config.defaults,
    )?)
}
