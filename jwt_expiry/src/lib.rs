#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]

pub mod cfg {
    mod app_settings;
    mod expire_days_settings;
    mod jwt_settings;
    mod log_settings;
    mod settings_error;

    pub use app_settings::*;
    pub use expire_days_settings::*;
    pub use jwt_settings::*;
    pub use log_settings::*;
    pub use settings_error::*;
}

pub mod core {
    mod context;
    mod token_expiry;
    mod token_kind;

    pub use context::*;
    pub use token_expiry::*;
    pub use token_kind::*;
}

pub mod app {
    mod cli;
    mod startup;

    pub use cli::*;
    pub use startup::*;
}
