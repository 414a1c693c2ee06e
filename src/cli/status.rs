//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::client::{DEFAULT_API_URL, scim_url_for_domain};
use crate::config::token::expand_home;
use crate::config::{Config, load_token};
use crate::error::{ConfigError, Error, Result};

/// Run the status command to display the resolved configuration
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "mondayop Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            config
        }
        Err(Error::Config(ConfigError::NotFound)) => {
            println!(
                "{} Config file not found ({})",
                "○".dimmed(),
                config_path.display()
            );
            println!("  → Run 'mondayop init' to create one");
            Config::default()
        }
        Err(e) => return Err(e),
    };
    println!();

    let domain = opts.domain.clone().or_else(|| config.domain.clone());
    match &domain {
        Some(domain) => println!("{} Domain: {}", "✓".green(), domain.bold()),
        None => println!("{} Domain not configured", "✗".red()),
    }

    let token_path = opts.token_file.clone().or_else(|| config.token_path.clone());
    match &token_path {
        Some(path) => match load_token(expand_home(path)) {
            Ok(_) => println!("{} Token file: {}", "✓".green(), path),
            Err(e) => println!("{} Token file: {} ({})", "✗".red(), path, e),
        },
        None => println!("{} Token file not configured", "✗".red()),
    }

    let api_url = opts
        .api_url
        .clone()
        .or_else(|| config.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    println!("{} GraphQL endpoint: {}", "○".dimmed(), api_url.cyan());

    let scim_url = opts
        .scim_url
        .clone()
        .or_else(|| config.scim_url.clone())
        .or_else(|| domain.as_deref().map(scim_url_for_domain));
    match scim_url {
        Some(url) => println!("{} SCIM endpoint: {}", "○".dimmed(), url.cyan()),
        None => println!("{} SCIM endpoint: needs a domain", "○".dimmed()),
    }

    println!();
    println!(
        "Preferences: page size {}, user type {}",
        config.preferences.page_size,
        config.preferences.user_type.bold()
    );
    println!();

    Ok(())
}
