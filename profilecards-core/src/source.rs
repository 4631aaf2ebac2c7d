//! Remote data source abstraction.

use crate::domain::{CommitWindow, Contributor, LanguageBytes, PullRequestSearch, Repository};
use crate::error::Result;

/// Operations the card pipeline needs from the hosting platform.
///
/// Implementations own transport, authentication, and pagination. A failed
/// call for a single repository is reported as an error and the collection
/// pass decides whether it is fatal.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileSource {
    /// Owned, non-fork repositories of `owner`, de-duplicated.
    fn list_repositories(&self, owner: &str) -> Result<Vec<Repository>>;
    /// Bytes per language for one repository.
    fn repository_languages(&self, owner: &str, repo: &str) -> Result<LanguageBytes>;
    /// Approximate number of commits inside `window`.
    fn commit_count_since(&self, owner: &str, repo: &str, window: &CommitWindow) -> Result<u64>;
    /// Total hits of an issue search query.
    fn search_issue_count(&self, query: &str) -> Result<u64>;
    /// Total hits of a pull request search plus the repositories they target.
    fn search_pull_requests(&self, query: &str) -> Result<PullRequestSearch>;
    /// Contributors of one repository.
    fn list_contributors(&self, owner: &str, repo: &str) -> Result<Vec<Contributor>>;
}
