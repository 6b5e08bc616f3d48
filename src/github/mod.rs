pub mod client;
pub mod types;

use crate::error::Result;
use types::{Member, PublicEvent, RateLimitSnapshot};

pub const PER_PAGE: u8 = 100;

/// The three read-only GitHub calls the report is built from.
///
/// Implemented by [`client::GitHubClient`] for real runs and by an in-memory
/// fake in tests. Every method maps a non-success response to `Err`.
#[allow(async_fn_in_trait)]
pub trait GitHubApi {
    async fn rate_limit(&self) -> Result<RateLimitSnapshot>;

    /// One page (1-based) of an organization's member list, `PER_PAGE` per page.
    async fn org_members_page(&self, org: &str, page: u32) -> Result<Vec<Member>>;

    /// A user's public event feed, newest first as returned by GitHub.
    async fn public_events(&self, username: &str) -> Result<Vec<PublicEvent>>;
}
