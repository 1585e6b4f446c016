use clap::Parser;

/// `mktree` takes no options; clap only supplies `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(
    name = "mktree",
    version,
    about = "Create the project layout in the current directory, skipping anything that already exists"
)]
pub struct Cli {}

pub fn parse() -> Cli {
    Cli::parse()
}
