//! Collection pass over a [`ProfileSource`].
//!
//! Repositories are visited one at a time in the order given. Per-repository
//! failures are logged and the repository contributes nothing; only the
//! caller's repository listing can abort a run.

use std::collections::BTreeSet;

use chrono::{DateTime, TimeZone, Utc};
use log::{debug, info, warn};

use crate::domain::{ActivityCounters, CommitWindow, LanguageBytes, LanguageTotals, Repository};
use crate::error::{ProfileCardsError, Result};
use crate::languages::aggregate;
use crate::source::ProfileSource;

/// Fetch language maps for every repository, skipping failures.
pub fn collect_language_maps<S>(source: &S, repos: &[Repository]) -> Vec<LanguageBytes>
where
    S: ProfileSource + ?Sized,
{
    let mut maps = Vec::with_capacity(repos.len());
    for repo in repos {
        match source.repository_languages(&repo.owner, &repo.name) {
            Ok(map) => {
                debug!("{}: {} languages", repo.full_name(), map.len());
                maps.push(map);
            }
            Err(err) => warn!("skipping languages of {}: {err}", repo.full_name()),
        }
    }
    maps
}

/// Fetch and sum language bytes across repositories.
pub fn collect_language_totals<S>(source: &S, repos: &[Repository]) -> LanguageTotals
where
    S: ProfileSource + ?Sized,
{
    let maps = collect_language_maps(source, repos);
    info!("language data from {}/{} repositories", maps.len(), repos.len());
    aggregate(maps)
}

/// Gather activity counters for `username` during `year`.
pub fn collect_activity<S>(
    source: &S,
    username: &str,
    repos: &[Repository],
    year: i32,
) -> Result<ActivityCounters>
where
    S: ProfileSource + ?Sized,
{
    let window = CommitWindow {
        since: year_start(year)?,
        author: Some(username.to_string()),
    };

    let stars = repos
        .iter()
        .fold(0u64, |acc, repo| acc.saturating_add(repo.stars));
    let commits = count_commits(source, repos, &window);

    let pr_search = match source.search_pull_requests(&pull_request_query(username, year)) {
        Ok(search) => search,
        Err(err) => {
            warn!("pull request search failed: {err}");
            Default::default()
        }
    };
    let issues = match source.search_issue_count(&issue_query(username, year)) {
        Ok(count) => count,
        Err(err) => {
            warn!("issue search failed: {err}");
            0
        }
    };

    let mut contributed = contributor_repositories(source, username, repos);
    contributed.extend(
        pr_search
            .repositories
            .iter()
            .map(|full_name| full_name.to_lowercase()),
    );

    let counters = ActivityCounters {
        stars,
        commits,
        pull_requests: pr_search.total_count,
        issues,
        contributed_repos: contributed.len() as u64,
    };
    info!(
        "activity for {username} in {year}: {} stars, {} commits, {} PRs, {} issues, {} repos",
        counters.stars,
        counters.commits,
        counters.pull_requests,
        counters.issues,
        counters.contributed_repos
    );
    Ok(counters)
}

/// Midnight UTC on January 1st of `year`.
pub fn year_start(year: i32) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| ProfileCardsError::Other(format!("invalid year: {year}")))
}

/// Search query for pull requests opened by `username` in `year`.
pub fn pull_request_query(username: &str, year: i32) -> String {
    format!("type:pr author:{username} created:{year}-01-01..{year}-12-31")
}

/// Search query for issues opened by `username` in `year`.
pub fn issue_query(username: &str, year: i32) -> String {
    format!("type:issue author:{username} created:{year}-01-01..{year}-12-31")
}

fn count_commits<S>(source: &S, repos: &[Repository], window: &CommitWindow) -> u64
where
    S: ProfileSource + ?Sized,
{
    let mut total = 0u64;
    for repo in repos {
        match source.commit_count_since(&repo.owner, &repo.name, window) {
            Ok(count) => total = total.saturating_add(count),
            Err(err) => warn!("skipping commits of {}: {err}", repo.full_name()),
        }
    }
    total
}

fn contributor_repositories<S>(source: &S, username: &str, repos: &[Repository]) -> BTreeSet<String>
where
    S: ProfileSource + ?Sized,
{
    let mut found = BTreeSet::new();
    for repo in repos {
        match source.list_contributors(&repo.owner, &repo.name) {
            Ok(contributors) => {
                if contributors
                    .iter()
                    .any(|contributor| contributor.login.eq_ignore_ascii_case(username))
                {
                    found.insert(repo.full_name().to_lowercase());
                }
            }
            Err(err) => warn!("skipping contributors of {}: {err}", repo.full_name()),
        }
    }
    found
}
