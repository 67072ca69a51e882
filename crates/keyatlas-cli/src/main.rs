//! keyatlas CLI: the `keyatlas` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    commands::build::run(cli);
}
