use std::collections::HashMap;
use std::fs;

use chrono::{TimeZone, Utc};
use clap::Parser;

use crate::app::*;
use crate::cfg;
use crate::core;

fn test_context() -> core::ArcContext {
    let settings = cfg::AppSettings::from_toml_str(
        "[jwt.expire-days]\naccess-token = 15\nrefresh-token = 30\n",
    )
    .unwrap();
    core::Context::new(settings).unwrap()
}

#[test]
fn test_parse_defaults_to_check() {
    let cli = Cli::try_parse_from(["jwt-expiry"]).unwrap();
    assert!(matches!(cli.command(), Command::Check));
    assert!(cli.config_dir.is_none());
    assert!(cli.run_env.is_none());
}

#[test]
fn test_parse_global_overrides() {
    let cli = Cli::try_parse_from(["jwt-expiry", "show", "--format", "json", "--run-env", "staging"]).unwrap();
    assert_eq!(cli.run_env.as_deref(), Some("staging"));
    assert!(matches!(cli.command(), Command::Show { format: OutputFormat::Json }));
}

#[test]
fn test_settings_source_applies_flag_overrides() {
    let dir = std::env::temp_dir().join(format!("jwt_expiry_cli_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("configs.staging.toml"),
        "[jwt.expire-days]\naccess-token = 2\nrefresh-token = 14\n",
    )
    .unwrap();

    let dir_arg = dir.to_string_lossy().to_string();
    let cli = Cli::try_parse_from(["jwt-expiry", "--config-dir", &dir_arg, "--run-env", "staging", "check"]).unwrap();
    let source = cli.settings_source();
    assert_eq!(source.config_dir, dir);
    assert_eq!(source.run_env, "staging");
    assert_eq!(
        source.layer_files(),
        [
            dir.join("configs.default.toml"),
            dir.join("configs.staging.toml"),
            dir.join("configs.local.toml"),
        ]
    );

    let loaded = cfg::AppSettings::load_with_metadata(&source.with_env_vars(HashMap::new()));
    let _ = fs::remove_dir_all(&dir);

    let loaded = loaded.unwrap();
    assert_eq!(loaded.data.jwt.expire_days.access_token, 2);
    assert_eq!(loaded.data.jwt.expire_days.refresh_token, 14);
    assert_eq!(loaded.metadata.applied_files, vec![dir.join("configs.staging.toml")]);
}

#[test]
fn test_parse_expires_kind() {
    let cli = Cli::try_parse_from(["jwt-expiry", "expires", "--kind", "refresh"]).unwrap();
    assert!(matches!(cli.command(), Command::Expires { kind: core::TokenKind::Refresh }));
}

#[test]
fn test_check_prints_nothing() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let output = run_command(&Command::Check, &test_context(), now).unwrap();
    assert!(output.is_none());
}

#[test]
fn test_show_renders_toml_and_json() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let context = test_context();

    let toml_out = run_command(&Command::Show { format: OutputFormat::Toml }, &context, now)
        .unwrap()
        .unwrap();
    assert!(toml_out.contains("refresh-token = 30"), "{toml_out}");

    let json_out = run_command(&Command::Show { format: OutputFormat::Json }, &context, now)
        .unwrap()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json_out).unwrap();
    assert_eq!(value["jwt"]["expire-days"]["access-token"], 15);
}

#[test]
fn test_expires_prints_rfc3339_instant() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let output = run_command(&Command::Expires { kind: core::TokenKind::Access }, &test_context(), now)
        .unwrap()
        .unwrap();
    assert_eq!(output, "2024-01-16T00:00:00+00:00");
}
