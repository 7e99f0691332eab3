use serde::{Deserialize, Serialize};

use crate::cfg;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct JwtSettings {
    pub expire_days: cfg::ExpireDaysSettings,
}
