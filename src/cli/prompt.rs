//! Interactive prompts
//!
//! Prompts only fill in values that were not supplied as flags, environment
//! variables, or config entries, and only when stdin is a terminal.

use std::io::IsTerminal;

use dialoguer::{Confirm, Input, theme::ColorfulTheme};

use crate::error::{ConfigError, Result};

/// Whether prompts can be shown
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Use `value` if present and non-blank, otherwise ask for it.
///
/// `what` names the value in the error returned when prompting is impossible.
pub fn value_or_prompt(value: Option<String>, what: &'static str, prompt: &str) -> Result<String> {
    resolve_value(value, what, is_interactive(), || {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()?;
        Ok(input)
    })
}

/// Use `value` if given, otherwise ask a yes/no question.
///
/// Without a terminal the `default` answer is used.
pub fn confirm_or_prompt(value: Option<bool>, prompt: &str, default: bool) -> Result<bool> {
    if let Some(v) = value {
        return Ok(v);
    }
    if !is_interactive() {
        return Ok(default);
    }

    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn resolve_value<F>(value: Option<String>, what: &'static str, interactive: bool, ask: F) -> Result<String>
where
    F: FnOnce() -> Result<String>,
{
    if let Some(v) = value {
        let v = v.trim();
        if !v.is_empty() {
            return Ok(v.to_string());
        }
    }

    if !interactive {
        return Err(ConfigError::Missing(what).into());
    }

    let answer = ask()?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(ConfigError::Missing(what).into());
    }
    Ok(answer.to_string())
}
