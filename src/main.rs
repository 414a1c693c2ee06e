//! mondayop - export and batch-update monday.com users and teams

use std::io;

use clap::{CommandFactory, Parser};
use log::LevelFilter;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::{Cli, Commands, GlobalOptions, TeamCommands, UserCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("mondayop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::User(user_cmd) => match user_cmd {
            UserCommands::Export {
                source,
                output,
                include_enabled,
                page_size,
            } => cli::user::export(&opts, source, output, include_enabled, page_size).await,
            UserCommands::SetType {
                csv,
                user_type,
                dry_run,
                yes,
            } => cli::user::set_type(&opts, csv, user_type, dry_run, yes).await,
        },
        Commands::Team(team_cmd) => match team_cmd {
            TeamCommands::Export { output } => cli::team::export(&opts, output).await,
            TeamCommands::ExportScim {
                include_members,
                output,
                page_size,
            } => cli::team::export_scim(&opts, include_members, output, page_size).await,
        },
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "mondayop", &mut io::stdout());
            Ok(())
        }
    }
}
