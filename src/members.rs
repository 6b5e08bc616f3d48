use crate::github::GitHubApi;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Username to organizations, both kept in first-seen order.
#[derive(Debug, Default)]
pub struct Membership {
    users: Vec<String>,
    orgs: HashMap<String, Vec<String>>,
}

impl Membership {
    pub fn record(&mut self, login: &str, org: &str) {
        match self.orgs.get_mut(login) {
            Some(orgs) => {
                if !orgs.iter().any(|o| o == org) {
                    orgs.push(org.to_string());
                }
            }
            None => {
                self.users.push(login.to_string());
                self.orgs.insert(login.to_string(), vec![org.to_string()]);
            }
        }
    }

    pub fn usernames(&self) -> &[String] {
        &self.users
    }

    pub fn orgs_of(&self, login: &str) -> &[String] {
        self.orgs.get(login).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Pages through an organization's members until an empty page.
///
/// A failed page ends the listing early; whatever was collected before it is
/// returned.
pub async fn enumerate_org<A: GitHubApi>(api: &A, org: &str) -> Vec<String> {
    let mut members = Vec::new();

    for page in 1u32.. {
        match api.org_members_page(org, page).await {
            Ok(items) if items.is_empty() => break,
            Ok(items) => members.extend(items.into_iter().map(|m| m.login)),
            Err(e) => {
                warn!("error fetching members for {org} (page {page}): {e}");
                break;
            }
        }
    }

    debug!("{org}: {} members", members.len());
    members
}

pub async fn enumerate_all<A: GitHubApi>(api: &A, orgs: &[String]) -> Membership {
    let mut membership = Membership::default();
    for org in orgs {
        for login in enumerate_org(api, org).await {
            membership.record(&login, org);
        }
    }
    membership
}
