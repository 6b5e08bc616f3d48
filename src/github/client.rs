use crate::error::{ActivityError, Result};
use crate::github::types::{Member, PublicEvent, RateLimitSnapshot};
use crate::github::{GitHubApi, PER_PAGE};
use chrono::DateTime;
use http::header::{HeaderName, ACCEPT};
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

#[derive(Clone)]
pub struct GitHubClient {
    octo: Octocrab,
}

impl GitHubClient {
    pub fn new(token: &str, api_base: &str) -> Result<Self> {
        let octo = Octocrab::builder()
            .base_uri(api_base)
            .map_err(|e| ActivityError::Config(format!("invalid api_base {api_base}: {e}")))?
            .personal_token(token.to_string())
            .add_header(ACCEPT, ACCEPT_GITHUB_JSON.to_string())
            .add_header(
                HeaderName::from_static("x-github-api-version"),
                API_VERSION.to_string(),
            )
            // a failed lookup drops its unit of data, it is never retried
            .add_retry_config(RetryConfig::None)
            .build()
            .map_err(|e| ActivityError::GitHub(e.to_string()))?;

        Ok(Self { octo })
    }
}

impl GitHubApi for GitHubClient {
    async fn rate_limit(&self) -> Result<RateLimitSnapshot> {
        let limits = self.octo.ratelimit().get().await?;
        let core = limits.resources.core;
        Ok(RateLimitSnapshot {
            remaining: core.remaining as u64,
            reset: DateTime::from_timestamp(core.reset as i64, 0).unwrap_or_default(),
        })
    }

    async fn org_members_page(&self, org: &str, page: u32) -> Result<Vec<Member>> {
        let result = self
            .octo
            .orgs(org)
            .list_members()
            .per_page(PER_PAGE)
            .page(page)
            .send()
            .await?;

        Ok(result
            .items
            .into_iter()
            .map(|author| Member {
                login: author.login,
            })
            .collect())
    }

    async fn public_events(&self, username: &str) -> Result<Vec<PublicEvent>> {
        let events: Vec<PublicEvent> = self
            .octo
            .get(format!("/users/{username}/events/public"), None::<&()>)
            .await?;
        Ok(events)
    }
}
