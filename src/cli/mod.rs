//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod context;
pub mod handlers;
pub mod init;
pub mod prompt;
pub mod status;
pub mod team;
pub mod user;

pub use args::{GlobalOptions, OutputFormat, UserSource};
pub use context::CommandContext;

/// mondayop - export and batch-update monday.com users and teams
#[derive(Parser, Debug)]
#[command(name = "mondayop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "MONDAYOP_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "MONDAYOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Path to the file holding the API token
    #[arg(long, global = true, env = "MONDAYOP_TOKEN_FILE", hide_env = true)]
    pub token_file: Option<String>,

    /// Account subdomain (the `acme` in acme.monday.com)
    #[arg(long, global = true, env = "MONDAYOP_DOMAIN", hide_env = true)]
    pub domain: Option<String>,

    /// GraphQL endpoint override
    #[arg(long, global = true, env = "MONDAYOP_API_URL", hide = true)]
    pub api_url: Option<String>,

    /// SCIM base URL override (instead of deriving it from --domain)
    #[arg(long, global = true, env = "MONDAYOP_SCIM_URL", hide = true)]
    pub scim_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "MONDAYOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save domain and token location to the config file
    Init,

    /// Show resolved configuration
    Status,

    /// Display version information
    Version,

    /// Export and update users
    #[command(subcommand)]
    User(UserCommands),

    /// Export teams
    #[command(subcommand)]
    Team(TeamCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   mondayop completion bash > /etc/bash_completion.d/mondayop
  zsh:    mondayop completion zsh > \"${fpath[1]}/_mondayop\"
  fish:   mondayop completion fish > ~/.config/fish/completions/mondayop.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Export users to CSV
    #[command(after_help = "EXAMPLES:\n  \
            mondayop user export                          # GraphQL -> users.csv\n  \
            mondayop user export --include-enabled        # Add the enabled column\n  \
            mondayop user export --source scim            # SCIM -> monday_users.csv\n  \
            mondayop user export -o /tmp/all-users.csv")]
    Export {
        /// API to read users from
        #[arg(long, value_enum, default_value = "graphql")]
        source: UserSource,

        /// Output CSV path (default depends on --source)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Add the `enabled` column (always present for --source scim)
        #[arg(long)]
        include_enabled: bool,

        /// Users requested per SCIM page
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Set the user type of every user listed in a CSV file
    #[command(after_help = "EXAMPLES:\n  \
            mondayop user set-type --csv user_ids.csv             # Set to viewer\n  \
            mondayop user set-type --csv ids.csv --user-type member\n  \
            mondayop user set-type --csv ids.csv --dry-run        # Preview only\n  \
            mondayop user set-type --csv ids.csv --yes            # No confirmation\n\n\
            The CSV needs a `user_id` header column.")]
    SetType {
        /// CSV file with a `user_id` column
        #[arg(long, short = 'c')]
        csv: Option<PathBuf>,

        /// User type to apply (default from config, else `viewer`)
        #[arg(long, short = 't')]
        user_type: Option<String>,

        /// List the users that would be updated without calling the API
        #[arg(long, short = 'n')]
        dry_run: bool,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Team subcommands
#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    /// Export teams and members via GraphQL, one row per member
    Export {
        /// Output CSV path
        #[arg(long, short = 'o', default_value = "monday_standard_teams.csv")]
        output: PathBuf,
    },

    /// Export SCIM groups (teams)
    #[command(after_help = "EXAMPLES:\n  \
            mondayop team export-scim --domain acme\n  \
            mondayop team export-scim --include-members\n  \
            mondayop team export-scim --include-members=false")]
    ExportScim {
        /// Add a column with member names joined by "; "
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        include_members: Option<bool>,

        /// Output CSV path
        #[arg(long, short = 'o', default_value = "monday_teams.csv")]
        output: PathBuf,

        /// Groups requested per SCIM page
        #[arg(long)]
        page_size: Option<usize>,
    },
}
