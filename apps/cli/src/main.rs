//! entitydoc CLI — markdown generation for entity records.
//!
//! Renders project, task, and step TOML records into markdown documents,
//! with comments, images, and whole directories embedded inline.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
