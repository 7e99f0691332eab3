use crate::cfg;
use crate::core;

pub type ArcContext = std::sync::Arc<Context>;

/// Startup state handed to every component that needs the expiry settings.
#[derive(Clone, Debug)]
pub struct Context {
    pub expiry: core::TokenExpiry,
    pub settings: cfg::AppSettings,
}

impl Context {
    pub fn new(settings: cfg::AppSettings) -> Result<ArcContext, cfg::SettingsError> {
        let expiry = settings.token_expiry()?;
        Ok(Self { expiry, settings }.into())
    }
}
