// cli.rs - commands for inspecting the resolved expiry settings
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;

use crate::cfg;
use crate::core;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Rendering settings failed")]
    RenderFailed { #[source] source: cfg::SettingsError },

    #[error("Expiry of a {kind} token issued at {issued_at} is out of range")]
    ExpiryOutOfRange { kind: core::TokenKind, issued_at: DateTime<Utc> },
}

#[derive(Debug, Parser)]
#[command(name = "jwt-expiry")]
#[command(about = "Load and inspect access/refresh token expiry settings", long_about = None)]
pub struct Cli {
    /// Directory holding the configs.*.toml files (defaults to APP_CONFIG_DIR or `.`)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Run environment selecting configs.{env}.toml (defaults to APP_RUN_ENV or `production`)
    #[arg(long, global = true)]
    pub run_env: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Load and validate the settings
    Check,

    /// Print the resolved settings
    Show {
        #[arg(long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,
    },

    /// Print when a token issued now would expire
    Expires {
        #[arg(long, value_enum, default_value_t = core::TokenKind::Access)]
        kind: core::TokenKind,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Toml,
    Json,
}

impl Cli {
    #[must_use]
    pub fn settings_source(&self) -> cfg::SettingsSource {
        let mut source = cfg::SettingsSource::from_env();
        if let Some(config_dir) = &self.config_dir {
            source = source.with_config_dir(config_dir);
        }
        if let Some(run_env) = &self.run_env {
            source = source.with_run_env(run_env);
        }
        source
    }

    #[must_use]
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Check)
    }
}

/// Runs `command` against the startup context and returns the text to print, if any.
pub fn run_command(command: &Command, context: &core::Context, now: DateTime<Utc>) -> Result<Option<String>, CliError> {
    match command {
        Command::Check => {
            tracing::info!("✅ settings are valid");
            Ok(None)
        }
        Command::Show { format } => {
            let rendered = match format {
                OutputFormat::Toml => context.settings.to_toml_string(),
                OutputFormat::Json => context.settings.to_json_string(),
            }
            .map_err(|source| CliError::RenderFailed { source })?;
            Ok(Some(rendered))
        }
        Command::Expires { kind } => {
            let expires_at = context
                .expiry
                .expires_at(*kind, now)
                .ok_or(CliError::ExpiryOutOfRange { kind: *kind, issued_at: now })?;
            Ok(Some(expires_at.to_rfc3339()))
        }
    }
}
