#![cfg(test)]

use crate::error::{ActivityError, Result};
use crate::github::types::{Member, PublicEvent, RateLimitSnapshot};
use crate::github::GitHubApi;
use chrono::{DateTime, FixedOffset, Utc};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory GitHub that records every call it serves.
///
/// Organization pages past the configured ones are empty. A `None` page or a
/// user registered through `with_failing_events` answers with an error.
#[derive(Default)]
pub struct FakeGitHub {
    rate: Option<RateLimitSnapshot>,
    pages: HashMap<String, Vec<Option<Vec<String>>>>,
    events: HashMap<String, Option<Vec<DateTime<FixedOffset>>>>,
    pub calls: RefCell<Vec<String>>,
    in_flight: Cell<usize>,
    pub peak_in_flight: Cell<usize>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, remaining: u64) -> Self {
        self.rate = Some(RateLimitSnapshot {
            remaining,
            reset: Utc::now() + chrono::Duration::minutes(30),
        });
        self
    }

    pub fn with_org<S: Into<String>>(mut self, org: &str, pages: Vec<Vec<S>>) -> Self {
        self.pages.insert(
            org.to_string(),
            pages
                .into_iter()
                .map(|p| Some(p.into_iter().map(Into::into).collect()))
                .collect(),
        );
        self
    }

    pub fn with_failing_page(mut self, org: &str) -> Self {
        self.pages.entry(org.to_string()).or_default().push(None);
        self
    }

    pub fn with_events(mut self, user: &str, created_at: &[&str]) -> Self {
        let parsed = created_at.iter().map(|s| ts(s)).collect();
        self.events.insert(user.to_string(), Some(parsed));
        self
    }

    pub fn with_failing_events(mut self, user: &str) -> Self {
        self.events.insert(user.to_string(), None);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl GitHubApi for FakeGitHub {
    async fn rate_limit(&self) -> Result<RateLimitSnapshot> {
        self.record("rate_limit".to_string());
        self.rate
            .ok_or_else(|| ActivityError::GitHub("503 Service Unavailable".to_string()))
    }

    async fn org_members_page(&self, org: &str, page: u32) -> Result<Vec<Member>> {
        self.record(format!("members:{org}:{page}"));
        let idx = page.saturating_sub(1) as usize;
        match self.pages.get(org).and_then(|pages| pages.get(idx)) {
            Some(Some(logins)) => Ok(logins
                .iter()
                .map(|l| Member { login: l.clone() })
                .collect()),
            Some(None) => Err(ActivityError::GitHub("502 Bad Gateway".to_string())),
            None => Ok(Vec::new()),
        }
    }

    async fn public_events(&self, username: &str) -> Result<Vec<PublicEvent>> {
        self.record(format!("events:{username}"));
        self.in_flight.set(self.in_flight.get() + 1);
        self.peak_in_flight
            .set(self.peak_in_flight.get().max(self.in_flight.get()));
        tokio::task::yield_now().await;
        self.in_flight.set(self.in_flight.get() - 1);

        match self.events.get(username) {
            Some(Some(times)) => Ok(times
                .iter()
                .map(|t| PublicEvent { created_at: *t })
                .collect()),
            Some(None) => Err(ActivityError::GitHub("404 Not Found".to_string())),
            None => Ok(Vec::new()),
        }
    }
}

pub fn ts(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

pub fn logins(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}{i}")).collect()
}
