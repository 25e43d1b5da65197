//! Config subcommand handlers.

use std::io::IsTerminal;

use dialoguer::Input;

use squeakdash_core::DEFAULT_ADMIN_PORT;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

use super::util::prompt_err;

// ── Helpers ─────────────────────────────────────────────────────────

/// Ask for the admin host unless it was given on the command line.
fn admin_host(flag: Option<String>) -> Result<String, CliError> {
    if let Some(host) = flag {
        return Ok(host);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::Validation {
            field: "admin-host".into(),
            reason: "required when not running interactively".into(),
        });
    }
    Input::new()
        .with_prompt("Admin service host")
        .default("127.0.0.1".into())
        .interact_text()
        .map_err(prompt_err)
}

fn render_config(cfg: &Config, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Table | OutputFormat::Plain => Ok(toml::to_string_pretty(cfg)?),
        OutputFormat::Json | OutputFormat::JsonCompact => {
            output::render_single(format, cfg, |_| String::new(), |_| String::new())
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init {
            name,
            admin_host: host,
            admin_port,
        } => {
            let mut cfg = config::load_config()?;
            let name = name.unwrap_or_else(|| "default".into());
            let host = admin_host(host)?;
            if host.trim().is_empty() {
                return Err(CliError::Validation {
                    field: "admin-host".into(),
                    reason: "must not be empty".into(),
                });
            }

            let first = cfg.profiles.is_empty();
            cfg.profiles.insert(
                name.clone(),
                Profile {
                    host,
                    port: admin_port.unwrap_or(DEFAULT_ADMIN_PORT),
                    timeout: None,
                },
            );
            if first {
                cfg.default_profile = Some(name.clone());
            }

            let path = config::save_config(&cfg)?;
            output::success(
                &format!("Profile '{name}' written to {}", path.display()),
                global.color,
                global.quiet,
            );
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = render_config(&cfg, global.output)?;
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = config::load_config()?;
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: squeakdash config init");
                return Ok(());
            }
            let active = config::active_profile_name(global, &cfg);
            let mut names: Vec<_> = cfg.profiles.keys().collect();
            names.sort_unstable();
            let out = names
                .into_iter()
                .map(|name| {
                    if *name == active {
                        format!("{name} *")
                    } else {
                        name.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config()?;
            if !cfg.profiles.contains_key(&name) {
                return Err(CliError::ProfileNotFound {
                    available: config::available_profiles(&cfg),
                    name,
                });
            }
            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            output::success(
                &format!("Default profile set to '{name}'"),
                global.color,
                global.quiet,
            );
            Ok(())
        }
    }
}
