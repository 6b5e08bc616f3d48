use crate::activity;
use crate::config::Config;
use crate::console::Palette;
use crate::error::Result;
use crate::github::GitHubApi;
use crate::members;
use crate::precheck::{self, RatePolicy};
use crate::report;
use chrono::Utc;
use std::io::Write;
use tracing::{info, warn};

/// Runs the whole report against `api`, writing to `out`.
///
/// Returns the number of users listed. A critical quota ends the run before
/// any member or event request is made.
pub async fn run<A: GitHubApi, W: Write>(
    api: &A,
    config: &Config,
    out: &mut W,
    palette: &Palette,
) -> Result<usize> {
    let policy = RatePolicy::from(config);
    precheck::check_rate_limit(api, &policy, Utc::now(), out, palette).await?;

    let membership = members::enumerate_all(api, &config.orgs).await;
    if membership.is_empty() {
        warn!("no members found in {} orgs", config.orgs.len());
    }
    info!(
        "{} unique members across {} orgs",
        membership.len(),
        config.orgs.len()
    );

    let results =
        activity::fetch_latest(api, membership.usernames(), config.max_concurrency).await;
    let entries = report::build_report(&membership, results);
    info!("{} members with public activity", entries.len());

    report::write_report(out, &entries, Utc::now(), config.name_width)?;
    Ok(entries.len())
}
