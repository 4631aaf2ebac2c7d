//! GitHub REST client backing the card pipeline.

use std::cell::RefCell;
use std::collections::BTreeSet;

use chrono::SecondsFormat;
use log::{debug, warn};
use profilecards_core::{
    CommitWindow, Contributor, LanguageBytes, ProfileCardsError, ProfileSource, PullRequestSearch,
    Repository, Result,
};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::LINK;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Default REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = "profilecards";

const PER_PAGE: usize = 100;
// The search API stops returning results after 1000 hits.
const MAX_SEARCH_PAGES: u32 = 10;

/// GitHub API client implementation.
///
/// A rejected token is dropped on the first 401 and every later request of
/// the run is sent anonymously.
#[derive(Debug)]
pub struct GitHubApiClient {
    base_url: String,
    token: RefCell<Option<String>>,
    client: Client,
    user_agent: String,
}

#[derive(Debug, Deserialize)]
struct RepositoryPayload {
    name: String,
    owner: OwnerPayload,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    fork: bool,
}

#[derive(Debug, Deserialize)]
struct OwnerPayload {
    login: String,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    login: String,
}

#[derive(Debug, Deserialize)]
struct ContributorPayload {
    #[serde(default)]
    login: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchPayload {
    total_count: u64,
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    repository_url: Option<String>,
}

impl GitHubApiClient {
    /// Build a client; an empty token counts as no token.
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        let token = token
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Self {
            base_url: base_url.into(),
            token: RefCell::new(token),
            client: Client::new(),
            user_agent: user_agent.into(),
        }
    }

    /// Whether requests still carry the token.
    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = format!("{}{path}", self.base_url.trim_end_matches('/'));
        let token = self.token.borrow().clone();
        let response = self.send(&url, query, token.as_deref())?;
        if response.status() == StatusCode::UNAUTHORIZED && token.is_some() {
            warn!("GitHub rejected the token, continuing without authentication");
            self.token.replace(None);
            let retry = self.send(&url, query, None)?;
            return check_status(retry, path);
        }
        check_status(response, path)
    }

    fn send(&self, url: &str, query: &[(&str, String)], token: Option<&str>) -> Result<Response> {
        debug!("GET {url}");
        let mut request = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/vnd.github+json")
            .query(query);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request
            .send()
            .map_err(|err| ProfileCardsError::Other(format!("github request failed: {err}")))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        decode(self.get(path, query)?)
    }

    fn list_repository_pages(
        &self,
        path: &str,
        extra: &[(&str, String)],
    ) -> Result<Vec<RepositoryPayload>> {
        let mut all = Vec::new();
        let mut page = 1u32;
        loop {
            let mut query = extra.to_vec();
            query.push(("per_page", PER_PAGE.to_string()));
            query.push(("page", page.to_string()));
            let batch: Vec<RepositoryPayload> = self.get_json(path, &query)?;
            let last = batch.len() < PER_PAGE;
            all.extend(batch);
            if last {
                return Ok(all);
            }
            page += 1;
        }
    }

    /// Whether the token belongs to `owner`; private repositories are only
    /// listed for the account the token was issued to.
    fn token_owned_by(&self, owner: &str) -> Result<bool> {
        match self.get_json::<UserPayload>("/user", &[]) {
            Ok(user) => Ok(user.login.eq_ignore_ascii_case(owner)),
            Err(ProfileCardsError::Unauthorized) => Ok(false),
            Err(err) => Err(err),
        }
    }
}

impl ProfileSource for GitHubApiClient {
    fn list_repositories(&self, owner: &str) -> Result<Vec<Repository>> {
        let public_path = format!("/users/{owner}/repos");
        let public_query = [("type", "owner".to_string())];
        let payloads = if self.is_authenticated() && self.token_owned_by(owner)? {
            let owned_query = [("affiliation", "owner".to_string())];
            match self.list_repository_pages("/user/repos", &owned_query) {
                Ok(payloads) => payloads,
                Err(ProfileCardsError::Unauthorized) => {
                    self.list_repository_pages(&public_path, &public_query)?
                }
                Err(err) => return Err(err),
            }
        } else {
            self.list_repository_pages(&public_path, &public_query)?
        };

        let mut seen = BTreeSet::new();
        let repos: Vec<Repository> = payloads
            .into_iter()
            .filter(|payload| !payload.fork)
            .map(|payload| Repository {
                name: payload.name,
                owner: payload.owner.login,
                stars: payload.stargazers_count,
                fork: false,
            })
            .filter(|repo| seen.insert(repo.full_name().to_lowercase()))
            .collect();
        debug!("{owner} owns {} non-fork repositories", repos.len());
        Ok(repos)
    }

    fn repository_languages(&self, owner: &str, repo: &str) -> Result<LanguageBytes> {
        self.get_json(&format!("/repos/{owner}/{repo}/languages"), &[])
    }

    fn commit_count_since(&self, owner: &str, repo: &str, window: &CommitWindow) -> Result<u64> {
        let mut query = vec![
            (
                "since",
                window.since.to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
            ("per_page", "1".to_string()),
        ];
        if let Some(author) = &window.author {
            query.push(("author", author.clone()));
        }
        let response = self.get(&format!("/repos/{owner}/{repo}/commits"), &query)?;
        let last = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(last_page);
        if let Some(count) = last {
            return Ok(count);
        }
        let commits: Vec<serde_json::Value> = decode(response)?;
        Ok(commits.len() as u64)
    }

    fn search_issue_count(&self, query: &str) -> Result<u64> {
        let payload: SearchPayload = self.get_json(
            "/search/issues",
            &[("q", query.to_string()), ("per_page", "1".to_string())],
        )?;
        Ok(payload.total_count)
    }

    fn search_pull_requests(&self, query: &str) -> Result<PullRequestSearch> {
        let mut search = PullRequestSearch::default();
        for page in 1..=MAX_SEARCH_PAGES {
            let fetched_page: Result<SearchPayload> = self.get_json(
                "/search/issues",
                &[
                    ("q", query.to_string()),
                    ("per_page", PER_PAGE.to_string()),
                    ("page", page.to_string()),
                ],
            );
            let payload = match fetched_page {
                Ok(payload) => payload,
                Err(err) if page == 1 => return Err(err),
                Err(err) => {
                    warn!("pull request search stopped at page {page}: {err}");
                    break;
                }
            };
            search.total_count = payload.total_count;
            let fetched = payload.items.len();
            search.repositories.extend(
                payload
                    .items
                    .iter()
                    .filter_map(|item| item.repository_url.as_deref())
                    .filter_map(repository_from_url),
            );
            if fetched < PER_PAGE || (page as usize) * PER_PAGE >= payload.total_count as usize {
                break;
            }
        }
        Ok(search)
    }

    fn list_contributors(&self, owner: &str, repo: &str) -> Result<Vec<Contributor>> {
        let path = format!("/repos/{owner}/{repo}/contributors");
        let mut contributors = Vec::new();
        let mut page = 1u32;
        loop {
            let response = self.get(
                &path,
                &[
                    ("per_page", PER_PAGE.to_string()),
                    ("page", page.to_string()),
                ],
            )?;
            // Empty repositories answer 204 with no body.
            if response.status() == StatusCode::NO_CONTENT {
                return Ok(contributors);
            }
            let batch: Vec<ContributorPayload> = decode(response)?;
            let last = batch.len() < PER_PAGE;
            contributors.extend(
                batch
                    .into_iter()
                    .filter_map(|payload| payload.login)
                    .map(|login| Contributor { login }),
            );
            if last {
                return Ok(contributors);
            }
            page += 1;
        }
    }
}

fn check_status(response: Response, path: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match status {
        StatusCode::UNAUTHORIZED => Err(ProfileCardsError::Unauthorized),
        StatusCode::NOT_FOUND => Err(ProfileCardsError::NotFound(path.to_string())),
        _ => {
            let message = response.text().unwrap_or_default();
            Err(ProfileCardsError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json()
        .map_err(|err| ProfileCardsError::Other(format!("github response decode failed: {err}")))
}

/// Page number of the `rel="last"` entry of a `Link` header.
fn last_page(link: &str) -> Option<u64> {
    let entry = link.split(',').find(|part| part.contains("rel=\"last\""))?;
    let start = entry.find('<')? + 1;
    let end = entry.find('>')?;
    let url = entry.get(start..end)?;
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("page="))
        .and_then(|value| value.parse().ok())
}

/// `owner/name` from an API repository URL.
fn repository_from_url(url: &str) -> Option<String> {
    let (_, rest) = url.split_once("/repos/")?;
    let mut parts = rest.trim_end_matches('/').splitn(2, '/');
    let owner = parts.next().filter(|part| !part.is_empty())?;
    let name = parts.next().filter(|part| !part.is_empty())?;
    Some(format!("{owner}/{name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use httpmock::Method::GET;
    use httpmock::MockServer;
    use httpmock::prelude::HttpMockRequest;
    use serde_json::json;

    fn client(server: &MockServer, token: Option<&str>) -> GitHubApiClient {
        GitHubApiClient::new(
            server.url(""),
            token.map(str::to_string),
            "profilecards-test",
        )
    }

    fn without_authorization(request: &HttpMockRequest) -> bool {
        request.headers.as_ref().is_none_or(|headers| {
            headers
                .iter()
                .all(|(name, _)| !name.eq_ignore_ascii_case("authorization"))
        })
    }

    fn repo_json(owner: &str, name: &str, stars: u64, fork: bool) -> serde_json::Value {
        json!({
            "name": name,
            "owner": {"login": owner},
            "stargazers_count": stars,
            "fork": fork,
        })
    }

    #[test]
    fn last_page_reads_link_header() {
        let link = "<https://api.github.com/repositories/1/commits?per_page=1&page=2>; rel=\"next\", \
                    <https://api.github.com/repositories/1/commits?per_page=1&page=57>; rel=\"last\"";
        assert_eq!(last_page(link), Some(57));
        assert_eq!(
            last_page("<https://api.github.com/x?page=2>; rel=\"next\""),
            None
        );
        assert_eq!(last_page(""), None);
    }

    #[test]
    fn repository_from_url_extracts_full_name() {
        assert_eq!(
            repository_from_url("https://api.github.com/repos/rust-lang/rust"),
            Some("rust-lang/rust".to_string())
        );
        assert_eq!(repository_from_url("https://api.github.com/users/octo"), None);
        assert_eq!(repository_from_url("https://api.github.com/repos/octo"), None);
    }

    #[test]
    fn empty_token_is_anonymous() {
        let client = GitHubApiClient::new(DEFAULT_API_URL, Some("  ".to_string()), "ua");
        assert!(!client.is_authenticated());
    }

    #[test]
    fn anonymous_listing_filters_forks_and_duplicates() {
        let server = MockServer::start();
        let repos = server.mock(|when, then| {
            when.method(GET)
                .path("/users/octo/repos")
                .query_param("page", "1")
                .header("user-agent", "profilecards-test");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    repo_json("octo", "cards", 12, false),
                    repo_json("octo", "forked", 3, true),
                    repo_json("octo", "Cards", 12, false),
                    repo_json("octo", "tools", 1, false),
                ]));
        });

        let repos_found = client(&server, None)
            .list_repositories("octo")
            .expect("list repositories");
        let names: Vec<_> = repos_found.iter().map(|repo| repo.name.as_str()).collect();
        assert_eq!(names, vec!["cards", "tools"]);
        assert_eq!(repos_found[0].stars, 12);
        assert!(repos_found.iter().all(|repo| !repo.fork));
        repos.assert();
    }

    #[test]
    fn listing_pages_until_short_page() {
        let server = MockServer::start();
        let full_page: Vec<_> = (0..PER_PAGE)
            .map(|i| repo_json("octo", &format!("repo{i}"), 0, false))
            .collect();
        let first = server.mock(|when, then| {
            when.method(GET)
                .path("/users/octo/repos")
                .query_param("page", "1");
            then.status(200).json_body(json!(full_page));
        });
        let second = server.mock(|when, then| {
            when.method(GET)
                .path("/users/octo/repos")
                .query_param("page", "2");
            then.status(200)
                .json_body(json!([repo_json("octo", "last", 0, false)]));
        });

        let repos = client(&server, None)
            .list_repositories("octo")
            .expect("list repositories");
        assert_eq!(repos.len(), PER_PAGE + 1);
        first.assert();
        second.assert();
    }

    #[test]
    fn authenticated_listing_uses_user_endpoint() {
        let server = MockServer::start();
        let viewer = server.mock(|when, then| {
            when.method(GET).path("/user");
            then.status(200).json_body(json!({"login": "Octo"}));
        });
        let owned = server.mock(|when, then| {
            when.method(GET)
                .path("/user/repos")
                .query_param("affiliation", "owner")
                .header("authorization", "Bearer secret");
            then.status(200)
                .json_body(json!([repo_json("octo", "private-repo", 2, false)]));
        });

        let client = client(&server, Some("secret"));
        let repos = client.list_repositories("octo").expect("list repositories");
        assert_eq!(repos[0].name, "private-repo");
        assert!(client.is_authenticated());
        viewer.assert();
        owned.assert();
    }

    #[test]
    fn token_of_another_account_lists_public_repositories() {
        let server = MockServer::start();
        let viewer = server.mock(|when, then| {
            when.method(GET).path("/user");
            then.status(200).json_body(json!({"login": "someone-else"}));
        });
        let owned = server.mock(|when, then| {
            when.method(GET).path("/user/repos");
            then.status(200)
                .json_body(json!([repo_json("someone-else", "secret", 1, false)]));
        });
        let public = server.mock(|when, then| {
            when.method(GET)
                .path("/users/octo/repos")
                .header("authorization", "Bearer secret");
            then.status(200)
                .json_body(json!([repo_json("octo", "cards", 3, false)]));
        });

        let client = client(&server, Some("secret"));
        let repos = client.list_repositories("octo").expect("list repositories");
        let names: Vec<_> = repos.iter().map(|repo| repo.name.as_str()).collect();
        assert_eq!(names, vec!["cards"]);
        assert!(client.is_authenticated());
        viewer.assert();
        owned.assert_hits(0);
        public.assert();
    }

    #[test]
    fn token_of_another_account_still_reports_missing_user() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/user");
            then.status(200).json_body(json!({"login": "someone-else"}));
        });
        let missing = server.mock(|when, then| {
            when.method(GET).path("/users/ghost/repos");
            then.status(404).json_body(json!({"message": "Not Found"}));
        });

        let err = client(&server, Some("secret"))
            .list_repositories("ghost")
            .unwrap_err();
        assert!(err.is_fatal());
        missing.assert();
    }

    #[test]
    fn rejected_token_downgrades_to_public_listing() {
        let server = MockServer::start();
        let rejected = server.mock(|when, then| {
            when.method(GET).path("/user");
            then.status(401).body("Bad credentials");
        });
        let owned = server.mock(|when, then| {
            when.method(GET).path("/user/repos");
            then.status(200).json_body(json!([]));
        });
        let public = server.mock(|when, then| {
            when.method(GET)
                .path("/users/octo/repos")
                .matches(without_authorization);
            then.status(200)
                .json_body(json!([repo_json("octo", "cards", 5, false)]));
        });

        let client = client(&server, Some("expired"));
        let repos = client.list_repositories("octo").expect("list repositories");
        assert_eq!(repos.len(), 1);
        assert!(!client.is_authenticated());
        // Once with the token, once anonymously.
        rejected.assert_hits(2);
        owned.assert_hits(0);
        public.assert();
    }

    #[test]
    fn rejected_token_retries_repository_request_anonymously() {
        let server = MockServer::start();
        let with_token = server.mock(|when, then| {
            when.method(GET)
                .path("/repos/octo/cards/languages")
                .header_exists("authorization");
            then.status(401).body("Bad credentials");
        });
        let anonymous = server.mock(|when, then| {
            when.method(GET)
                .path("/repos/octo/cards/languages")
                .matches(without_authorization);
            then.status(200).json_body(json!({"Rust": 4096}));
        });

        let client = client(&server, Some("expired"));
        let bytes = client
            .repository_languages("octo", "cards")
            .expect("languages");
        assert_eq!(bytes, LanguageBytes::from([("Rust".to_string(), 4096)]));
        assert!(!client.is_authenticated());
        with_token.assert();
        anonymous.assert();

        client
            .repository_languages("octo", "cards")
            .expect("second call");
        with_token.assert();
        anonymous.assert_hits(2);
    }

    #[test]
    fn missing_account_is_not_found() {
        let server = MockServer::start();
        let missing = server.mock(|when, then| {
            when.method(GET).path("/users/ghost/repos");
            then.status(404).json_body(json!({"message": "Not Found"}));
        });

        let err = client(&server, None)
            .list_repositories("ghost")
            .unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("/users/ghost/repos"));
        missing.assert();
    }

    #[test]
    fn other_statuses_map_to_api_errors() {
        let server = MockServer::start();
        let limited = server.mock(|when, then| {
            when.method(GET).path("/repos/octo/cards/languages");
            then.status(403).body("rate limited");
        });

        let err = client(&server, None)
            .repository_languages("octo", "cards")
            .unwrap_err();
        match err {
            ProfileCardsError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "rate limited");
            }
            other => panic!("unexpected error: {other}"),
        }
        limited.assert();
    }

    #[test]
    fn languages_decode_into_byte_map() {
        let server = MockServer::start();
        let languages = server.mock(|when, then| {
            when.method(GET).path("/repos/octo/cards/languages");
            then.status(200)
                .json_body(json!({"Rust": 12000, "Shell": 300}));
        });

        let bytes = client(&server, None)
            .repository_languages("octo", "cards")
            .expect("languages");
        assert_eq!(bytes.get("Rust"), Some(&12000));
        assert_eq!(bytes.get("Shell"), Some(&300));
        languages.assert();
    }

    #[test]
    fn commit_count_prefers_last_link_page() {
        let server = MockServer::start();
        let link = format!(
            "<{}/repos/octo/cards/commits?per_page=1&page=2>; rel=\"next\", <{}/repos/octo/cards/commits?per_page=1&page=42>; rel=\"last\"",
            server.base_url(),
            server.base_url()
        );
        let commits = server.mock(|when, then| {
            when.method(GET)
                .path("/repos/octo/cards/commits")
                .query_param("since", "2024-01-01T00:00:00Z")
                .query_param("author", "octo")
                .query_param("per_page", "1");
            then.status(200)
                .header("Link", link.as_str())
                .json_body(json!([{"sha": "abc"}]));
        });

        let window = CommitWindow {
            since: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            author: Some("octo".to_string()),
        };
        let count = client(&server, None)
            .commit_count_since("octo", "cards", &window)
            .expect("commit count");
        assert_eq!(count, 42);
        commits.assert();
    }

    #[test]
    fn commit_count_without_link_counts_items() {
        let server = MockServer::start();
        let commits = server.mock(|when, then| {
            when.method(GET).path("/repos/octo/cards/commits");
            then.status(200).json_body(json!([{"sha": "abc"}]));
        });

        let window = CommitWindow {
            since: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            author: None,
        };
        let count = client(&server, None)
            .commit_count_since("octo", "cards", &window)
            .expect("commit count");
        assert_eq!(count, 1);
        commits.assert();
    }

    #[test]
    fn issue_search_returns_total_count() {
        let server = MockServer::start();
        let search = server.mock(|when, then| {
            when.method(GET)
                .path("/search/issues")
                .query_param("q", "type:issue author:octo created:2024-01-01..2024-12-31");
            then.status(200)
                .json_body(json!({"total_count": 17, "items": []}));
        });

        let count = client(&server, None)
            .search_issue_count("type:issue author:octo created:2024-01-01..2024-12-31")
            .expect("issue count");
        assert_eq!(count, 17);
        search.assert();
    }

    #[test]
    fn pull_request_search_collects_target_repositories() {
        let server = MockServer::start();
        let search = server.mock(|when, then| {
            when.method(GET).path("/search/issues");
            then.status(200).json_body(json!({
                "total_count": 3,
                "items": [
                    {"repository_url": "https://api.github.com/repos/rust-lang/rust"},
                    {"repository_url": "https://api.github.com/repos/rust-lang/rust"},
                    {"repository_url": "https://api.github.com/repos/octo/cards"},
                ],
            }));
        });

        let result = client(&server, None)
            .search_pull_requests("type:pr author:octo")
            .expect("pr search");
        assert_eq!(result.total_count, 3);
        let repos: Vec<_> = result.repositories.iter().map(String::as_str).collect();
        assert_eq!(repos, vec!["octo/cards", "rust-lang/rust"]);
        search.assert();
    }

    #[test]
    fn pull_request_search_keeps_pages_fetched_before_a_failure() {
        let server = MockServer::start();
        let items: Vec<_> = (0..PER_PAGE)
            .map(|i| {
                let url = format!("https://api.github.com/repos/org/repo{i}");
                json!({ "repository_url": url })
            })
            .collect();
        let first = server.mock(|when, then| {
            when.method(GET)
                .path("/search/issues")
                .query_param("page", "1");
            then.status(200)
                .json_body(json!({"total_count": 150, "items": items}));
        });
        let second = server.mock(|when, then| {
            when.method(GET)
                .path("/search/issues")
                .query_param("page", "2");
            then.status(403).body("secondary rate limit");
        });

        let result = client(&server, None)
            .search_pull_requests("type:pr author:octo")
            .expect("partial pr search");
        assert_eq!(result.total_count, 150);
        assert_eq!(result.repositories.len(), PER_PAGE);
        first.assert();
        second.assert();
    }

    #[test]
    fn pull_request_search_fails_when_first_page_fails() {
        let server = MockServer::start();
        let failing = server.mock(|when, then| {
            when.method(GET).path("/search/issues");
            then.status(422).body("validation failed");
        });

        let err = client(&server, None)
            .search_pull_requests("type:pr author:octo")
            .unwrap_err();
        assert!(matches!(err, ProfileCardsError::Api { status: 422, .. }));
        failing.assert();
    }

    #[test]
    fn contributors_handle_no_content() {
        let server = MockServer::start();
        let empty = server.mock(|when, then| {
            when.method(GET).path("/repos/octo/empty/contributors");
            then.status(204);
        });

        let contributors = client(&server, None)
            .list_contributors("octo", "empty")
            .expect("contributors");
        assert!(contributors.is_empty());
        empty.assert();
    }

    #[test]
    fn contributors_skip_anonymous_entries() {
        let server = MockServer::start();
        let listed = server.mock(|when, then| {
            when.method(GET).path("/repos/octo/cards/contributors");
            then.status(200).json_body(json!([
                {"login": "octo", "contributions": 10},
                {"type": "Anonymous", "contributions": 2},
            ]));
        });

        let contributors = client(&server, None)
            .list_contributors("octo", "cards")
            .expect("contributors");
        assert_eq!(
            contributors,
            vec![Contributor {
                login: "octo".to_string()
            }]
        );
        listed.assert();
    }
}
