use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LogSettings {
    #[serde(default = "default_directives")]
    pub directives: String,
}

fn default_directives() -> String {
    "info,jwt_expiry=debug".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            directives: default_directives(),
        }
    }
}
