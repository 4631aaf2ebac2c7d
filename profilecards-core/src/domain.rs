//! Domain entities for profilecards.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bytes per language as reported for a single repository.
pub type LanguageBytes = BTreeMap<String, u64>;

/// Bytes per language summed across every repository that reported data.
pub type LanguageTotals = BTreeMap<String, u64>;

/// A repository owned by the profile being rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name without the owner prefix.
    pub name: String,
    /// Login of the owning account.
    pub owner: String,
    /// Stargazer count.
    pub stars: u64,
    /// Whether the repository is a fork.
    pub fork: bool,
}

impl Repository {
    /// The `owner/name` identifier.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// A contributor entry for a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// Account login.
    pub login: String,
}

/// Result of a pull request search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestSearch {
    /// Total number of matching pull requests.
    pub total_count: u64,
    /// `owner/name` identifiers of repositories the pull requests target.
    pub repositories: BTreeSet<String>,
}

/// Time window (and optional author filter) for commit counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitWindow {
    /// Only commits after this instant are counted.
    pub since: DateTime<Utc>,
    /// Restrict to commits authored by this login.
    pub author: Option<String>,
}

/// One row of the normalized language breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedEntry {
    /// Language name, or `Other` for the collapsed bucket.
    pub label: String,
    /// Share of the total in `[0, 100]`, unrounded.
    pub percentage: f64,
    /// Exact byte count behind the share.
    pub bytes: u64,
}

impl NormalizedEntry {
    /// Percentage formatted for display with two decimals.
    pub fn display_percentage(&self) -> String {
        format!("{:.2}%", self.percentage)
    }
}

/// Raw activity counters for a profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCounters {
    /// Stars summed across owned repositories.
    pub stars: u64,
    /// Commits in the selected year.
    pub commits: u64,
    /// Pull requests opened in the selected year.
    pub pull_requests: u64,
    /// Issues opened in the selected year.
    pub issues: u64,
    /// Distinct repositories contributed to.
    pub contributed_repos: u64,
}
