use chrono::{DateTime, TimeDelta, Utc};

use crate::cfg;
use crate::core::TokenKind;

/// Validated access and refresh token lifetimes, in whole days.
///
/// Built once at startup and never modified afterwards. Both day counts are
/// positive and representable as a [`TimeDelta`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenExpiry {
    access_token_days: i64,
    refresh_token_days: i64,
}

impl TokenExpiry {
    pub fn new(access_token_days: i64, refresh_token_days: i64) -> Result<Self, cfg::SettingsError> {
        validate_days(cfg::ACCESS_TOKEN_KEY, access_token_days)?;
        validate_days(cfg::REFRESH_TOKEN_KEY, refresh_token_days)?;

        if refresh_token_days < access_token_days {
            tracing::warn!(
                access_token_days,
                refresh_token_days,
                "refresh tokens expire before access tokens"
            );
        }

        tracing::info!(access_token_days, refresh_token_days, "token expiry configured");
        Ok(Self {
            access_token_days,
            refresh_token_days,
        })
    }

    #[must_use]
    pub const fn access_token_days(&self) -> i64 {
        self.access_token_days
    }

    #[must_use]
    pub const fn refresh_token_days(&self) -> i64 {
        self.refresh_token_days
    }

    #[must_use]
    pub const fn days(&self, kind: TokenKind) -> i64 {
        match kind {
            TokenKind::Access => self.access_token_days,
            TokenKind::Refresh => self.refresh_token_days,
        }
    }

    #[must_use]
    pub fn ttl(&self, kind: TokenKind) -> TimeDelta {
        // checked in `new`
        TimeDelta::try_days(self.days(kind)).unwrap_or(TimeDelta::MAX)
    }

    /// Expiration instant of a token of `kind` issued at `issued_at`.
    ///
    /// Returns `None` if the instant falls outside the range `DateTime<Utc>` can hold.
    #[must_use]
    pub fn expires_at(&self, kind: TokenKind, issued_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        issued_at.checked_add_signed(self.ttl(kind))
    }
}

impl TryFrom<&cfg::ExpireDaysSettings> for TokenExpiry {
    type Error = cfg::SettingsError;

    fn try_from(settings: &cfg::ExpireDaysSettings) -> Result<Self, Self::Error> {
        Self::new(settings.access_token, settings.refresh_token)
    }
}

fn validate_days(key: &'static str, value: i64) -> Result<(), cfg::SettingsError> {
    if value <= 0 || TimeDelta::try_days(value).is_none() {
        return Err(cfg::SettingsError::InvalidExpiry { key, value });
    }
    Ok(())
}
