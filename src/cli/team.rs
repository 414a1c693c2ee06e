//! Team export commands

use std::path::PathBuf;

use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::finish_export;
use crate::cli::prompt::confirm_or_prompt;
use crate::client::{GraphQlApi, ScimApi, fetch_all_scim};
use crate::error::Result;
use crate::models::rows::{scim_teams_document, team_members_document};
use crate::output::CsvDocument;

/// Fetch teams over GraphQL and flatten them to (team, member) rows.
pub async fn team_members<C>(client: &C) -> Result<CsvDocument>
where
    C: GraphQlApi + ?Sized,
{
    let teams = client.list_teams().await?;
    debug!("Fetched {} teams over GraphQL", teams.len());
    team_members_document(&teams)
}

/// Fetch every SCIM group page and map each group to one row.
pub async fn scim_teams<C>(client: &C, page_size: usize, include_members: bool) -> Result<CsvDocument>
where
    C: ScimApi + ?Sized,
{
    let groups = fetch_all_scim(page_size, |page| async move {
        client.list_groups_page(&page).await
    })
    .await?;
    scim_teams_document(&groups, include_members)
}

/// Run `team export`
pub async fn export(opts: &GlobalOptions, output: PathBuf) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.graphql_client()?;

    let doc = team_members(&client).await?;
    finish_export(ctx.format, "Team members", &doc, &output)?;
    Ok(())
}

/// Run `team export-scim`
pub async fn export_scim(
    opts: &GlobalOptions,
    include_members: Option<bool>,
    output: PathBuf,
    page_size: Option<usize>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let include_members = confirm_or_prompt(
        include_members,
        "Do you want to include team members in the export?",
        false,
    )?;
    let page_size = ctx.page_size(page_size)?;
    let client = ctx.scim_client()?;

    let doc = scim_teams(&client, page_size, include_members).await?;
    finish_export(ctx.format, "Teams", &doc, &output)?;
    Ok(())
}
