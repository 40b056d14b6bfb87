//! Provides a GitHub client and a repository search query builder.
//!
//! The client is only ever constructed and turned into a prepared search: no query is
//! executed. Construction still validates the configured credentials, so `GET /`
//! doubles as a health check for them.

use crate::cli::GitHubSettings;
use crate::error::{AppError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use tracing::{debug, error};

const GITHUB_API_BASE: &str = "https://api.github.com";

/// An authenticated (or anonymous) GitHub API client.
pub struct GitHubClient {
    #[allow(dead_code)] // Held for future searches; nothing is executed yet
    client: Client,
    base_url: String,
}

impl GitHubClient {
    /// Builds a client from the configured settings.
    ///
    /// Fails when a credential cannot be carried in an HTTP header.
    pub fn new(settings: &GitHubSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("trends-service"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        if let Some(auth) = authorization(settings) {
            let mut value = HeaderValue::from_str(&auth).map_err(|e| {
                error!("GitHub credentials cannot form an Authorization header: {}", e);
                AppError::GitHubClient(format!("invalid credentials: {}", e))
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        } else {
            debug!("No GitHub credentials configured, using anonymous client");
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::GitHubClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: GITHUB_API_BASE.to_string(),
        })
    }

    /// Starts a repository search query.
    pub fn search_repositories(&self) -> RepositorySearch<'_> {
        RepositorySearch {
            client: self,
            terms: Vec::new(),
            sort: None,
        }
    }
}

/// Token auth wins over basic auth; a login without a password is ignored.
fn authorization(settings: &GitHubSettings) -> Option<String> {
    if let Some(token) = &settings.token {
        return Some(format!("Bearer {}", token));
    }
    match (&settings.login, &settings.password) {
        (Some(login), Some(password)) => Some(format!(
            "Basic {}",
            STANDARD.encode(format!("{}:{}", login, password))
        )),
        _ => None,
    }
}

/// Builder for a `/search/repositories` request.
pub struct RepositorySearch<'a> {
    client: &'a GitHubClient,
    terms: Vec<String>,
    sort: Option<String>,
}

impl<'a> RepositorySearch<'a> {
    /// Adds a free-form search term or qualifier (e.g. `stars:>100`).
    pub fn q(mut self, term: &str) -> Self {
        self.terms.push(term.to_string());
        self
    }

    /// Sorts results by `stars`, `forks`, `help-wanted-issues` or `updated`.
    pub fn sort(mut self, field: &str) -> Self {
        self.sort = Some(field.to_string());
        self
    }

    /// The fully encoded request URL this search would hit.
    pub fn url(&self) -> String {
        let mut url = format!(
            "{}/search/repositories?q={}",
            self.client.base_url,
            urlencoding::encode(&self.terms.join(" "))
        );
        if let Some(sort) = &self.sort {
            url.push_str("&sort=");
            url.push_str(&urlencoding::encode(sort));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(
        login: Option<&str>,
        password: Option<&str>,
        token: Option<&str>,
    ) -> GitHubSettings {
        GitHubSettings {
            login: login.map(String::from),
            password: password.map(String::from),
            token: token.map(String::from),
        }
    }

    #[test]
    fn builds_anonymous_client() {
        assert!(GitHubClient::new(&settings(None, None, None)).is_ok());
    }

    #[test]
    fn prefers_token_over_basic_auth() {
        let auth = authorization(&settings(Some("octocat"), Some("pw"), Some("ghp_abc")));
        assert_eq!(auth.as_deref(), Some("Bearer ghp_abc"));

        let basic = authorization(&settings(Some("octocat"), Some("pw"), None));
        assert_eq!(basic.as_deref(), Some("Basic b2N0b2NhdDpwdw=="));

        assert!(authorization(&settings(Some("octocat"), None, None)).is_none());
    }

    #[test]
    fn malformed_credentials_fail_construction() {
        let result = GitHubClient::new(&settings(None, None, Some("bad\ntoken")));
        assert!(matches!(result, Err(AppError::GitHubClient(_))));
    }

    #[test]
    fn search_url_encodes_terms() {
        let client = GitHubClient::new(&settings(None, None, None)).unwrap();
        let url = client
            .search_repositories()
            .q("trends")
            .q("stars:>100")
            .sort("stars")
            .url();

        assert_eq!(
            url,
            "https://api.github.com/search/repositories?q=trends%20stars%3A%3E100&sort=stars"
        );
    }
}
