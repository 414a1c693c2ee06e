//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::cli::prompt::is_interactive;
use crate::config::token::expand_home;
use crate::config::{Config, load_token};
use crate::error::{ConfigError, Result};

/// Ask for a value, offering `current` as the default answer.
///
/// A flag value skips the prompt. Without a terminal, `current` is used as is.
fn ask(flag: Option<String>, current: Option<String>, what: &'static str, prompt: &str) -> Result<String> {
    if let Some(v) = flag.filter(|v| !v.trim().is_empty()) {
        return Ok(v.trim().to_string());
    }

    if !is_interactive() {
        return current.ok_or(ConfigError::Missing(what).into());
    }

    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt);
    if let Some(current) = current {
        input = input.default(current);
    }

    let answer = input.interact_text()?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(ConfigError::Missing(what).into());
    }
    Ok(answer.to_string())
}

/// Run the init command
///
/// Existing preferences and endpoint overrides in the config file are kept;
/// only the domain and token location are replaced.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to mondayop!".bold().green());
    println!("Let's set up your monday.com configuration.\n");

    let mut config = Config::load_or_default_at(opts.config_ref())?;

    let domain = ask(
        opts.domain.clone(),
        config.domain.clone(),
        "domain",
        "Your monday.com domain (the part before .monday.com)",
    )?;

    let token_path = ask(
        opts.token_file.clone(),
        config.token_path.clone(),
        "token file",
        "Path to your monday.com API token file",
    )?;

    // Fail before saving if the token cannot be read
    load_token(expand_home(&token_path))?;
    println!("{} Token file readable", "✓".green());

    config.domain = Some(domain);
    config.token_path = Some(token_path);
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "mondayop status".cyan());
    println!("  {} - Export all users", "mondayop user export".cyan());

    Ok(())
}
