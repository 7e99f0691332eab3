use thiserror::Error;

#[rustfmt::skip]
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A required key is missing, a value has the wrong type, or a source could not be read.
    #[error("Failed to bind configuration")]
    BindingFailed { #[from] source: config::ConfigError },

    #[error("Invalid expiry for `{key}`: {value} days (expected a positive day count)")]
    InvalidExpiry { key: &'static str, value: i64 },

    #[error("Failed to serialize settings: {0}")]
    SerializationFailed(String),
}
