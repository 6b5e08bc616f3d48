use crate::github::GitHubApi;
use chrono::{DateTime, FixedOffset};
use futures::future::join_all;
use futures::stream::{self, StreamExt};
use tracing::debug;

pub type LastActivity = DateTime<FixedOffset>;

/// Creation time of the first event in the user's public feed.
///
/// The feed is taken as newest-first. Errors and empty feeds both yield `None`.
async fn latest_for<A: GitHubApi>(api: &A, username: &str) -> (String, Option<LastActivity>) {
    let latest = match api.public_events(username).await {
        Ok(events) => events.first().map(|e| e.created_at),
        Err(e) => {
            debug!("no activity for {username}: {e}");
            None
        }
    };
    (username.to_string(), latest)
}

/// One lookup per username, all against the same client.
///
/// With `max_concurrency` unset every request is in flight at once. Results
/// come back in input order, each tagged with its username.
pub async fn fetch_latest<A: GitHubApi>(
    api: &A,
    usernames: &[String],
    max_concurrency: Option<usize>,
) -> Vec<(String, Option<LastActivity>)> {
    match max_concurrency {
        Some(limit) if limit > 0 => {
            stream::iter(usernames)
                .map(|u| latest_for(api, u))
                .buffered(limit)
                .collect()
                .await
        }
        _ => join_all(usernames.iter().map(|u| latest_for(api, u))).await,
    }
}
