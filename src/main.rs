use anyhow::Result;

use film_club_stats::cli::{Cli, Command};
use film_club_stats::{handle_films, handle_member, handle_upnext, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Member { name } => handle_member(&cli.data_dir, name),
        Command::Films(args) => handle_films(&cli.data_dir, args),
        Command::UpNext => handle_upnext(&cli.data_dir),
    }
}
