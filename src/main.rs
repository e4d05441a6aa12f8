use clap::Parser;

use runnerdeck::cli::{Cli, Commands, PlayArgs};

mod commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = runnerdeck::logging::init(cli.log_file.as_deref()) {
        eprintln!("Warning: {:#}", e);
    }

    let result = match cli.command {
        None => commands::play::handle(&PlayArgs::default()),
        Some(Commands::Play(args)) => commands::play::handle(&args),
        Some(Commands::Frame(args)) => commands::frame::handle(&args),
        Some(Commands::Timeline(args)) => commands::timeline::handle(&args),
        Some(Commands::Config(command)) => commands::config::handle(command),
        Some(Commands::Completions { shell }) => commands::handle_completions(shell),
    };

    if let Err(e) = result {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
