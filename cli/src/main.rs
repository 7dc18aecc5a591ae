mod cli;
mod context;
mod entry;
mod error;
mod format;
mod init;
mod progress;
mod release;
mod show;
mod tag;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use context::CommandContext;
use std::process;

fn main() {
    let cli = Cli::parse();
    let ctx = CommandContext::new(cli.path, cli.verbose, cli.yes);

    let result = match &cli.command {
        Commands::Init => init::execute(&ctx),
        Commands::Format => format::execute(&ctx),
        Commands::Show(args) => show::execute(&ctx, args),
        Commands::Tag(args) => tag::execute(&ctx, args),
        Commands::Entry(args) => entry::execute(&ctx, args),
        Commands::Release(args) => release::execute(&ctx, args),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
