#[macro_use]
extern crate lazy_static;

pub mod graphics;
pub mod interface;
pub mod scenes;

use env_logger::{Env, Target};

use interface::cli::cli_main;

fn main() {
    // Diagnostics go to stdout, where the original tutorials printed them.
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();

    cli_main();
}
