use crate::activity::LastActivity;
use crate::members::Membership;
use chrono::{DateTime, TimeDelta, Utc};
use itertools::Itertools;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub username: String,
    pub last_activity: LastActivity,
    pub orgs: Vec<String>,
}

/// Users with a known last activity, most recent first.
///
/// The sort is stable, so equal timestamps keep the order of `results`.
pub fn build_report(
    membership: &Membership,
    results: Vec<(String, Option<LastActivity>)>,
) -> Vec<ReportEntry> {
    let mut entries: Vec<ReportEntry> = results
        .into_iter()
        .filter_map(|(username, last)| {
            let last_activity = last?;
            let orgs = membership.orgs_of(&username).to_vec();
            Some(ReportEntry {
                username,
                last_activity,
                orgs,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));
    entries
}

pub fn render_line(entry: &ReportEntry, now: DateTime<Utc>, name_width: usize) -> String {
    let local_now = now.with_timezone(entry.last_activity.offset());
    let ago = naturaltime(local_now.signed_duration_since(entry.last_activity));
    format!(
        "{}: Last activity {ago} in orgs: {}",
        pad_to_width(&entry.username, name_width),
        entry.orgs.iter().join(", ")
    )
}

pub fn write_report<W: Write>(
    out: &mut W,
    entries: &[ReportEntry],
    now: DateTime<Utc>,
    name_width: usize,
) -> std::io::Result<()> {
    for entry in entries {
        writeln!(out, "{}", render_line(entry, now, name_width))?;
    }
    Ok(())
}

fn pad_to_width(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(fill))
}

/// Human description of how long ago `delta` was; negative deltas lie in the future.
pub fn naturaltime(delta: TimeDelta) -> String {
    let span = duration_phrase(delta.abs());
    match span {
        None => "now".to_string(),
        Some(p) if delta < TimeDelta::zero() => format!("in {p}"),
        Some(p) => format!("{p} ago"),
    }
}

fn duration_phrase(d: TimeDelta) -> Option<String> {
    let secs = d.num_seconds();
    let days = d.num_days();
    let (n, unit) = if secs == 0 {
        return None;
    } else if secs < 60 {
        (secs, "second")
    } else if d.num_minutes() < 60 {
        (d.num_minutes(), "minute")
    } else if d.num_hours() < 24 {
        (d.num_hours(), "hour")
    } else if days < 30 {
        (days, "day")
    } else if days < 365 {
        (days / 30, "month")
    } else {
        (days / 365, "year")
    };

    Some(match (n, unit) {
        (1, "hour") => "an hour".to_string(),
        (1, u) => format!("a {u}"),
        (n, u) => format!("{n} {u}s"),
    })
}
