#![deny(clippy::all)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::todo)]
#![allow(missing_docs)]

use clap::Parser;

use jwt_expiry::app;

fn main() {
    let cli = app::Cli::parse();
    app::run(&cli);
}
