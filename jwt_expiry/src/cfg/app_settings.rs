use std::{
    collections::HashMap,
    env,
    path::{Path, PathBuf},
};

use config::{Case, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::cfg;
use crate::core;

pub const ENV_PREFIX: &str = "APP";
pub const DEFAULT_RUN_ENV: &str = "production";

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AppSettings {
    #[serde(default)]
    pub log: cfg::LogSettings,

    pub jwt: cfg::JwtSettings,
}

/// Settings together with where they were loaded from.
#[derive(Clone, Debug)]
pub struct SettingsWithMetadata {
    pub data: AppSettings,
    pub metadata: SettingsMetadata,
}

#[derive(Clone, Debug)]
pub struct SettingsMetadata {
    pub app_run_env: String,
    pub config_dir: String,
    pub applied_files: Vec<PathBuf>,
}

/// Inputs of a settings load.
#[derive(Clone, Debug)]
pub struct SettingsSource {
    pub config_dir: PathBuf,
    pub run_env: String,

    /// Environment variables to bind. `None` reads the process environment.
    pub env_vars: Option<HashMap<String, String>>,
}

#[derive(Default, Serialize)]
struct DefaultLayer {
    log: cfg::LogSettings,
}

impl SettingsSource {
    /// Resolves the config directory and run environment from `APP_CONFIG_DIR`
    /// and `APP_RUN_ENV`, after loading a `.env` file if there is one.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let config_dir = env::var("APP_CONFIG_DIR").map_or_else(|_| PathBuf::from("."), PathBuf::from);
        let run_env = env::var("APP_RUN_ENV").unwrap_or_else(|_| DEFAULT_RUN_ENV.to_string());
        Self {
            config_dir,
            run_env,
            env_vars: None,
        }
    }

    #[must_use]
    pub fn with_config_dir(mut self, config_dir: impl Into<PathBuf>) -> Self {
        self.config_dir = config_dir.into();
        self
    }

    #[must_use]
    pub fn with_run_env(mut self, run_env: impl Into<String>) -> Self {
        self.run_env = run_env.into();
        self
    }

    #[must_use]
    pub fn with_env_vars(mut self, env_vars: HashMap<String, String>) -> Self {
        self.env_vars = Some(env_vars);
        self
    }

    /// Config files in the order they are layered, lowest precedence first.
    #[must_use]
    pub fn layer_files(&self) -> [PathBuf; 3] {
        [
            self.config_dir.join("configs.default.toml"),
            self.config_dir.join(format!("configs.{}.toml", self.run_env)),
            self.config_dir.join("configs.local.toml"),
        ]
    }
}

impl AppSettings {
    /// Loads settings from the process environment and the config files it points at.
    pub fn new() -> Result<Self, cfg::SettingsError> {
        Self::load(&SettingsSource::from_env())
    }

    pub fn load(source: &SettingsSource) -> Result<Self, cfg::SettingsError> {
        Self::load_with_metadata(source).map(|loaded| loaded.data)
    }

    pub fn load_with_metadata(source: &SettingsSource) -> Result<SettingsWithMetadata, cfg::SettingsError> {
        // Layer 0: built-in defaults
        let mut builder = config::Config::builder().add_source(default_layer()?);

        // Layers 1-3: default, environment-specific and local config files
        let mut applied_files = Vec::new();
        for path in source.layer_files() {
            if path.exists() {
                tracing::debug!("applying config layer {}", path.to_string_lossy());
                builder = builder.add_source(File::from(path.clone()));
                applied_files.push(path);
            }
        }

        // Layer 4: environment variables, e.g. APP_JWT__EXPIRE_DAYS__ACCESS_TOKEN
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .convert_case(Case::Kebab)
                .try_parsing(true)
                .source(source.env_vars.clone()),
        );

        let data = builder.build()?.try_deserialize::<Self>()?;
        let metadata = SettingsMetadata {
            app_run_env: source.run_env.clone(),
            config_dir: canonical_dir(&source.config_dir),
            applied_files,
        };
        Ok(SettingsWithMetadata { data, metadata })
    }

    /// Binds settings from a single TOML document, without reading files or the environment.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, cfg::SettingsError> {
        let settings = config::Config::builder()
            .add_source(default_layer()?)
            .add_source(File::from_str(toml_str, FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?;
        Ok(settings)
    }

    /// Validates the bound day counts into the immutable expiry value.
    pub fn token_expiry(&self) -> Result<core::TokenExpiry, cfg::SettingsError> {
        core::TokenExpiry::try_from(&self.jwt.expire_days)
    }

    pub fn to_toml_string(&self) -> Result<String, cfg::SettingsError> {
        toml::to_string(self).map_err(|e| cfg::SettingsError::SerializationFailed(e.to_string()))
    }

    pub fn to_json_string(&self) -> Result<String, cfg::SettingsError> {
        serde_json::to_string_pretty(self).map_err(|e| cfg::SettingsError::SerializationFailed(e.to_string()))
    }
}

fn default_layer() -> Result<File<config::FileSourceString, FileFormat>, cfg::SettingsError> {
    let default_toml = toml::to_string(&DefaultLayer::default())
        .map_err(|e| cfg::SettingsError::SerializationFailed(format!("defaults: {e}")))?;
    Ok(File::from_str(&default_toml, FileFormat::Toml))
}

fn canonical_dir(path: &Path) -> String {
    path.canonicalize()
        .ok()
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}
