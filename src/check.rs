use std::collections::BTreeSet;
use tracing::{info, warn};

use crate::config::ListConfig;
use crate::majordomo::{MajordomoClient, MembershipSource};
use crate::nagios::CheckResult;

/// A monitored list: the members it should have and where to ask for the ones it does have.
pub struct MailingList {
    name: String,
    members: BTreeSet<String>,
    source: Box<dyn MembershipSource>,
}

impl MailingList {
    pub fn new(
        name: impl Into<String>,
        members: BTreeSet<String>,
        source: Box<dyn MembershipSource>,
    ) -> Self {
        Self {
            name: name.into(),
            members,
            source,
        }
    }

    pub fn from_config(config: ListConfig, http: reqwest::Client) -> Self {
        let client =
            MajordomoClient::new(http, config.host, config.name.as_str(), config.password);
        Self::new(config.name, config.members, Box::new(client))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compare current membership against the expected set.
    ///
    /// Unexpected members are CRITICAL and take precedence over missing ones,
    /// which are a WARNING. Fetch failures are reported as CRITICAL.
    pub async fn check(&self) -> CheckResult {
        let current = match self.source.fetch_current_subscribers().await {
            Ok(current) => current,
            Err(e) => {
                warn!(list = %self.name, error = %e, "membership fetch failed");
                return CheckResult::critical(format!(
                    "Exception trying to check list {}: {}",
                    self.name, e
                ));
            }
        };

        let unexpected = join(current.difference(&self.members));
        if !unexpected.is_empty() {
            info!(list = %self.name, %unexpected, "unexpected members");
            return CheckResult::critical(format!(
                "List {} should not have member(s) {}.",
                self.name, unexpected
            ));
        }

        let missing = join(self.members.difference(&current));
        if !missing.is_empty() {
            info!(list = %self.name, %missing, "missing members");
            return CheckResult::warning(format!(
                "List {} is missing member(s) {}.",
                self.name, missing
            ));
        }

        info!(list = %self.name, members = self.members.len(), "membership matches");
        CheckResult::ok(format!("List {}, {} members", self.name, self.members.len()))
    }
}

fn join<'a>(addresses: impl Iterator<Item = &'a String>) -> String {
    addresses.map(String::as_str).collect::<Vec<_>>().join(", ")
}
