use crate::config::Config;
use crate::console::Palette;
use crate::error::{ActivityError, Result};
use crate::github::types::RateLimitSnapshot;
use crate::github::GitHubApi;
use crate::report::naturaltime;
use chrono::{DateTime, Utc};
use std::io::Write;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaStatus {
    Healthy,
    Low,
    Critical,
}

#[derive(Debug, Clone, Copy)]
pub struct RatePolicy {
    pub warn_below: u64,
    pub abort_below: u64,
    /// Abort when the rate limit itself cannot be read.
    pub strict: bool,
}

impl Default for RatePolicy {
    fn default() -> Self {
        Self {
            warn_below: 100,
            abort_below: 10,
            strict: false,
        }
    }
}

impl From<&Config> for RatePolicy {
    fn from(config: &Config) -> Self {
        Self {
            warn_below: config.warn_threshold,
            abort_below: config.abort_threshold,
            strict: config.strict_rate_check,
        }
    }
}

pub fn classify(remaining: u64, policy: &RatePolicy) -> QuotaStatus {
    if remaining < policy.abort_below {
        QuotaStatus::Critical
    } else if remaining < policy.warn_below {
        QuotaStatus::Low
    } else {
        QuotaStatus::Healthy
    }
}

/// Reads the core quota once and decides whether the run may continue.
///
/// Writes the summary (and any warning or abort line) to `out`, colored
/// through `palette`. Returns `ActivityError::RateLimited` when quota is
/// critical, in which case the caller must not issue any further request.
pub async fn check_rate_limit<A: GitHubApi, W: Write>(
    api: &A,
    policy: &RatePolicy,
    now: DateTime<Utc>,
    out: &mut W,
    palette: &Palette,
) -> Result<Option<RateLimitSnapshot>> {
    let snapshot = match api.rate_limit().await {
        Ok(s) => s,
        Err(e) if policy.strict => return Err(ActivityError::RateCheckFailed(e.to_string())),
        Err(e) => {
            warn!("rate limit check failed, continuing without it: {e}");
            return Ok(None);
        }
    };

    let resets = naturaltime(now.signed_duration_since(snapshot.reset));
    writeln!(out, "Rate limit remaining: {}", snapshot.remaining)?;
    writeln!(out, "Rate limit resets {resets}")?;

    match classify(snapshot.remaining, policy) {
        QuotaStatus::Healthy => {}
        QuotaStatus::Low => {
            writeln!(out, "{}", palette.warn(&low_quota_warning(snapshot.remaining)))?;
        }
        QuotaStatus::Critical => {
            writeln!(out, "{}", palette.warn(&low_quota_warning(snapshot.remaining)))?;
            writeln!(out, "{}", palette.error("Aborting due to very low rate limit"))?;
            return Err(ActivityError::RateLimited {
                remaining: snapshot.remaining,
                resets,
            });
        }
    }

    Ok(Some(snapshot))
}

fn low_quota_warning(remaining: u64) -> String {
    format!("Warning: Low rate limit ({remaining} remaining)")
}
