use std::error::Error;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app;
use crate::cfg;
use crate::core;

/// Application-level error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigLoadingFailed(#[from] cfg::SettingsError),

    #[error("CLI error: {0}")]
    CliOperationFailed(#[from] app::CliError),
}

/// Runs the CLI and exits the process with status 1 on any error.
pub fn run(cli: &app::Cli) {
    if let Err(e) = run_app(cli) {
        eprintln!("❌ {e}\n");

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("Caused by: {err}");
            source = err.source();
        }

        std::process::exit(1);
    }
}

fn run_app(cli: &app::Cli) -> Result<(), AppError> {
    let loaded = cfg::AppSettings::load_with_metadata(&cli.settings_source())?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&loaded.data.log.directives))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("🔧 loaded settings");
    tracing::info!("   app_env: {}", loaded.metadata.app_run_env);
    tracing::info!("   cfg_dir: {}", loaded.metadata.config_dir);
    tracing::info!("   logging: {}", loaded.data.log.directives);
    for path in &loaded.metadata.applied_files {
        tracing::debug!("   applied: {}", path.to_string_lossy());
    }

    let context = core::Context::new(loaded.data)?;

    if let Some(output) = app::run_command(&cli.command(), &context, chrono::Utc::now())? {
        println!("{output}");
    }

    Ok(())
}
