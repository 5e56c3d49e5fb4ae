use crate::error::{Result, ShowcaseError};
use crate::types::{Contributor, GitHubRepo};
use reqwest::{Client, Response};
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

const API_BASE_URL: &str = "https://api.github.com";
const MAX_RETRIES: u32 = 3;
const MAX_TOP_CONTRIBUTORS: usize = 10;

/// Client for the public GitHub REST API.
///
/// Runs unauthenticated by default; a token raises the rate limit but is
/// never required.
pub struct GitHubClient {
    client: Client,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("Repo Showcase Server/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient { client, token })
    }

    async fn make_request(&self, url: &str) -> Result<Response> {
        let mut retries = 0;

        loop {
            let mut request = self
                .client
                .get(url)
                .header("Accept", "application/vnd.github.v3+json");

            if let Some(token) = &self.token {
                request = request.header("Authorization", format!("token {}", token));
            }

            let response = request.send().await?;

            match response.status() {
                reqwest::StatusCode::OK => {
                    return Ok(response);
                }
                reqwest::StatusCode::NOT_FOUND => {
                    return Err(ShowcaseError::NotFound(format!(
                        "Resource not found: {}",
                        url
                    )));
                }
                reqwest::StatusCode::FORBIDDEN => {
                    let remaining = response
                        .headers()
                        .get("X-RateLimit-Remaining")
                        .and_then(|h| h.to_str().ok())
                        .and_then(|s| s.parse::<u32>().ok());

                    if remaining == Some(0) {
                        return Err(ShowcaseError::UpstreamError(
                            "GitHub API rate limit exceeded".to_string(),
                        ));
                    }

                    let error_text = response.text().await.unwrap_or_default();
                    return Err(ShowcaseError::UpstreamError(format!(
                        "Forbidden: {}",
                        error_text
                    )));
                }
                status if status.is_server_error() && retries < MAX_RETRIES => {
                    warn!("GitHub API server error ({}). Retrying in 2 seconds...", status);
                    sleep(Duration::from_secs(2)).await;
                    retries += 1;
                    continue;
                }
                status => {
                    let error_text = response.text().await.unwrap_or_default();
                    return Err(ShowcaseError::UpstreamError(format!(
                        "API request failed with status {}: {}",
                        status, error_text
                    )));
                }
            }
        }
    }

    /// Fetch repository metadata (name, description, star count).
    pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<GitHubRepo> {
        let url = format!("{}/repos/{}/{}", API_BASE_URL, owner, repo);
        let response = self.make_request(&url).await?;
        let repo_data: GitHubRepo = response.json().await?;
        Ok(repo_data)
    }

    /// Fetch the repository's contributor list (first page, GitHub default
    /// ordering).
    pub async fn get_contributors(&self, owner: &str, repo: &str) -> Result<Vec<Contributor>> {
        let url = format!("{}/repos/{}/{}/contributors", API_BASE_URL, owner, repo);
        let response = self.make_request(&url).await?;
        let contributors: Vec<Contributor> = response.json().await?;
        Ok(contributors)
    }
}

/// Select the top contributors by contribution count.
///
/// Sorts descending before truncating to ten, so the highest-contribution
/// logins survive regardless of the order GitHub returned them in.
pub fn top_contributors(mut contributors: Vec<Contributor>) -> Vec<String> {
    contributors.sort_by(|a, b| b.contributions.cmp(&a.contributions));
    contributors
        .into_iter()
        .take(MAX_TOP_CONTRIBUTORS)
        .map(|c| c.login)
        .collect()
}
