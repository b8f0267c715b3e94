use anyhow::{Context, Result};
use clap::Parser;
use vip_translate::config_file::load_canonical;
use vip_translate::inspect::render_config;

mod check_cmd;
mod cli;
mod path_guard;
mod promote_cmd;
mod translate_cmd;

use cli::{Cli, Command, InspectArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Translate(args) => translate_cmd::run_translate(args),
        Command::Promote(args) => promote_cmd::run_promote(args),
        Command::Check(args) => check_cmd::run_check(args),
        Command::Inspect(args) => run_inspect(args),
    }
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let config = load_canonical(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    print!("{}", render_config(&config));
    Ok(())
}
