//! User commands: export and batch user-type update

use std::io::{ErrorKind, IsTerminal};
use std::path::{Path, PathBuf};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use crate::cli::args::{GlobalOptions, UserSource};
use crate::cli::handlers::finish_export;
use crate::cli::prompt::{confirm_or_prompt, is_interactive, value_or_prompt};
use crate::cli::{CommandContext, OutputFormat};
use crate::client::{GraphQlApi, ScimApi, fetch_all_scim};
use crate::error::{Error, Result};
use crate::models::rows::users_document;
use crate::models::{PatchOutcome, PatchOutcomeDisplay, PatchSummary};
use crate::output::{CsvDocument, Formattable};

/// Column holding user ids in the batch input CSV
pub const USER_ID_COLUMN: &str = "user_id";

// ============================================================================
// Export
// ============================================================================

/// Fetch users over GraphQL and map them to the export document.
pub async fn graphql_users_document<C>(client: &C, include_enabled: bool) -> Result<CsvDocument>
where
    C: GraphQlApi + ?Sized,
{
    let users = client.list_users().await?;
    debug!("Fetched {} users over GraphQL", users.len());
    users_document(users, include_enabled)
}

/// Fetch every SCIM user page and map them to the export document.
pub async fn scim_users_document<C>(client: &C, page_size: usize) -> Result<CsvDocument>
where
    C: ScimApi + ?Sized,
{
    let users = fetch_all_scim(page_size, |page| async move {
        client.list_users_page(&page).await
    })
    .await?;
    users_document(users, true)
}

/// Run `user export`
pub async fn export(
    opts: &GlobalOptions,
    source: UserSource,
    output: Option<PathBuf>,
    include_enabled: bool,
    page_size: Option<usize>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let output = output.unwrap_or_else(|| PathBuf::from(source.default_output()));

    let doc = match source {
        UserSource::Graphql => {
            let client = ctx.graphql_client()?;
            graphql_users_document(&client, include_enabled).await?
        }
        UserSource::Scim => {
            let page_size = ctx.page_size(page_size)?;
            let client = ctx.scim_client()?;
            scim_users_document(&client, page_size).await?
        }
    };

    finish_export(ctx.format, "Users", &doc, &output)?;
    Ok(())
}

// ============================================================================
// Batch user-type update
// ============================================================================

/// Read user ids from the `user_id` column of a CSV file.
///
/// Values are trimmed; blank cells are kept so every data row still gets an
/// outcome.
pub fn read_user_ids(path: &Path) -> Result<Vec<String>> {
    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(e) => {
            if let csv::ErrorKind::Io(io) = e.kind() {
                if io.kind() == ErrorKind::NotFound {
                    return Err(Error::CsvNotFound(path.to_path_buf()));
                }
            }
            return Err(e.into());
        }
    };

    let column = reader
        .headers()?
        .iter()
        .position(|h| h.trim() == USER_ID_COLUMN)
        .ok_or_else(|| {
            Error::Other(format!(
                "CSV file {} has no `{}` column",
                path.display(),
                USER_ID_COLUMN
            ))
        })?;

    let mut ids = Vec::new();
    for record in reader.records() {
        let record = record?;
        ids.push(record.get(column).unwrap_or_default().trim().to_string());
    }
    Ok(ids)
}

/// Patch every user in order, one request per id.
///
/// A failed row never stops later rows; the result has one outcome per id.
/// `on_outcome` sees each outcome as soon as its request finishes.
pub async fn patch_user_types<C, F>(
    client: &C,
    user_ids: &[String],
    user_type: &str,
    mut on_outcome: F,
) -> Vec<PatchOutcome>
where
    C: ScimApi + ?Sized,
    F: FnMut(&PatchOutcome),
{
    let mut outcomes = Vec::with_capacity(user_ids.len());

    for (idx, user_id) in user_ids.iter().enumerate() {
        let row = idx + 1;
        let outcome = if user_id.is_empty() {
            PatchOutcome::failed(
                row,
                user_id,
                &Error::Other(format!("row {} has an empty {}", row, USER_ID_COLUMN)),
            )
        } else {
            match client.set_user_type(user_id, user_type).await {
                Ok(()) => PatchOutcome::updated(row, user_id),
                Err(e) => {
                    debug!("PATCH for user {} failed: {}", user_id, e);
                    PatchOutcome::failed(row, user_id, &e)
                }
            }
        };

        on_outcome(&outcome);
        outcomes.push(outcome);
    }

    outcomes
}

fn outcome_line(outcome: &PatchOutcome) -> String {
    if outcome.is_success() {
        format!("{} {}", "✓".green(), outcome.message())
    } else {
        format!("{} {}", "✗".red(), outcome.message())
    }
}

/// Run `user set-type`
pub async fn set_type(
    opts: &GlobalOptions,
    csv_path: Option<PathBuf>,
    user_type: Option<String>,
    dry_run: bool,
    yes: bool,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let user_type = ctx.user_type(user_type)?;

    let csv_path = match csv_path {
        Some(p) => p,
        None => PathBuf::from(value_or_prompt(
            None,
            "CSV file",
            "Path to the CSV file with user ids (e.g. user_ids.csv)",
        )?),
    };

    let user_ids = read_user_ids(&csv_path)?;
    debug!("Read {} user ids from {}", user_ids.len(), csv_path.display());

    if dry_run {
        eprintln!("{}", "DRY RUN - no changes will be made".yellow());
        eprintln!();
        eprintln!(
            "Would set userType to \"{}\" for {} user(s):",
            user_type.bold(),
            user_ids.len()
        );
        for id in &user_ids {
            eprintln!("  • {}", if id.is_empty() { "(empty)" } else { id.as_str() });
        }
        return Ok(());
    }

    if user_ids.is_empty() {
        eprintln!("No user ids found in {}", csv_path.display());
        return Ok(());
    }

    if !yes {
        let proceed = confirm_or_prompt(
            None,
            &format!(
                "Set userType to \"{}\" for {} user(s)?",
                user_type,
                user_ids.len()
            ),
            !is_interactive(),
        )?;
        if !proceed {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    let client = ctx.scim_client()?;
    let format = ctx.format;

    let progress = (format == OutputFormat::Pretty && std::io::stderr().is_terminal()).then(|| {
        let pb = ProgressBar::new(user_ids.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{bar:30} {pos}/{len} users")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    });

    let outcomes = patch_user_types(&client, &user_ids, &user_type, |outcome| {
        if format != OutputFormat::Pretty {
            return;
        }
        let line = outcome_line(outcome);
        match &progress {
            Some(pb) => {
                pb.println(line);
                pb.inc(1);
            }
            None => println!("{}", line),
        }
    })
    .await;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let summary = PatchSummary::from_outcomes(&outcomes);
    match format {
        OutputFormat::Pretty => {
            println!();
            println!(
                "{} updated, {} failed ({} total)",
                summary.updated.to_string().green(),
                summary.failed.to_string().red(),
                summary.total
            );
        }
        OutputFormat::Table => {
            let display: Vec<PatchOutcomeDisplay> =
                outcomes.iter().map(PatchOutcomeDisplay::from).collect();
            display.print(format)?;
            eprintln!(
                "{} updated, {} failed ({} total)",
                summary.updated, summary.failed, summary.total
            );
        }
        OutputFormat::Json => {
            println!(
                "{}",
                crate::output::json::format_json(&serde_json::json!({
                    "summary": summary,
                    "outcomes": outcomes,
                }))?
            );
        }
    }

    Ok(())
}
