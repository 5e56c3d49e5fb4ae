use reqwest::Client;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::error;

use crate::error::{Result, ShowcaseError};
use crate::github::{top_contributors, GitHubClient};
use crate::models::{EntryResponse, RenderedCard};
use crate::types::{Contributor, GitHubRepo};

/// Extract the entry id from a share-link path such as `/r/abc123`.
pub fn extract_entry_id(path: &str) -> &str {
    let trimmed = match path.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("/r/") => &path[3..],
        _ => path,
    };
    trimmed.strip_prefix('/').unwrap_or(trimmed)
}

/// Fetch repository metadata and the contributor list in parallel.
///
/// Both requests are started together and awaited jointly; if either fails
/// the combined fetch fails. The cancellation token aborts the pair when the
/// owning view goes away.
pub async fn fetch_repo_data(
    github: &GitHubClient,
    username: &str,
    repository: &str,
    cancel: &CancellationToken,
) -> Result<(GitHubRepo, Vec<Contributor>)> {
    tokio::select! {
        _ = cancel.cancelled() => Err(ShowcaseError::UpstreamError(
            "showcase load cancelled".to_string(),
        )),
        result = async {
            futures::try_join!(
                github.get_repository(username, repository),
                github.get_contributors(username, repository),
            )
        } => result,
    }
}

/// Merge a customization entry with live GitHub data into a card.
pub fn build_card(
    entry: EntryResponse,
    repo: GitHubRepo,
    contributors: Vec<Contributor>,
) -> RenderedCard {
    RenderedCard {
        username: entry.username,
        repository: entry.repository,
        avatar: entry.avatar,
        color: entry.color,
        star_count: repo.stargazers_count,
        repo_description: repo.description.unwrap_or_default(),
        repo_display_name: repo.name,
        top_contributors: top_contributors(contributors),
    }
}

/// Client-side showcase load protocol: read the entry record, then query
/// GitHub, then merge. Any failure along the way collapses into `None`,
/// which renders as the terminal "no data" state.
pub struct ShowcaseLoader {
    http: Client,
    entry_base_url: String,
    github: GitHubClient,
}

impl ShowcaseLoader {
    pub fn new(entry_base_url: impl Into<String>, github_token: Option<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            entry_base_url: entry_base_url.into(),
            github: GitHubClient::new(github_token)?,
        })
    }

    pub async fn load(&self, id: &str, cancel: &CancellationToken) -> Option<RenderedCard> {
        match self.try_load(id, cancel).await {
            Ok(card) => Some(card),
            Err(e) => {
                error!("Failed to load showcase card for {}: {}", id, e);
                None
            }
        }
    }

    async fn try_load(&self, id: &str, cancel: &CancellationToken) -> Result<RenderedCard> {
        let entry = tokio::select! {
            _ = cancel.cancelled() => Err(ShowcaseError::UpstreamError(
                "showcase load cancelled".to_string(),
            )),
            entry = self.fetch_entry(id) => entry,
        }?;

        let (repo, contributors) =
            fetch_repo_data(&self.github, &entry.username, &entry.repository, cancel).await?;

        Ok(build_card(entry, repo, contributors))
    }

    async fn fetch_entry(&self, id: &str) -> Result<EntryResponse> {
        let url = format!("{}/repo/{}", self.entry_base_url, id);
        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ShowcaseError::NotFound(format!("No entry for id {}", id)));
        }

        Ok(response.json().await?)
    }
}

/// Render a card as HTML. Pure function of the card data.
pub fn render_card(card: &RenderedCard) -> String {
    let color = if card.color.is_empty() {
        "black"
    } else {
        card.color.as_str()
    };

    let contributors: String = card
        .top_contributors
        .iter()
        .map(|name| format!("      <li class=\"contributor\">{}</li>\n", escape_html(name)))
        .collect();

    format!(
        concat!(
            "<div id=\"repo-showcase-container\" class=\"card-container\" ",
            "style=\"box-shadow: 0 0 5px 5px {color}; color: {color}\">\n",
            "  <div class=\"flex align-items-center\">\n",
            "    <img src=\"{avatar}\" alt=\"avatar\" class=\"avatar avatar-thumb\" />\n",
            "    <h1>{username} / {repository}</h1>\n",
            "  </div>\n",
            "  <div class=\"info-container\">\n",
            "    <h2>{description}</h2>\n",
            "  </div>\n",
            "  <h3>{stars} ⭐</h3>\n",
            "  <p>Top contributors:</p>\n",
            "  <ul class=\"contributors-list\">\n",
            "{contributors}",
            "  </ul>\n",
            "  <a class=\"github-button\" style=\"color: {color}\" ",
            "href=\"https://github.com/{owner}/{repo_title}\" ",
            "target=\"_blank\" rel=\"noopener noreferrer\">Star the repository</a>\n",
            "</div>\n"
        ),
        color = escape_html(color),
        avatar = escape_html(&card.avatar),
        username = escape_html(&card.username),
        repository = escape_html(&card.repository),
        description = escape_html(&card.repo_description),
        stars = card.star_count,
        contributors = contributors,
        owner = escape_html(&card.username),
        repo_title = escape_html(&card.repo_display_name),
    )
}

/// Terminal state shown when the record or either GitHub fetch fails.
pub fn render_no_data() -> String {
    "<div id=\"repo-showcase-container\" class=\"card-container\">\
     no repository data found</div>\n"
        .to_string()
}

/// Wrap card markup in a minimal page shell for server-side rendering.
pub fn render_page(inner: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "  <meta charset=\"utf-8\" />\n",
            "  <title>Repo Showcase</title>\n",
            "</head>\n",
            "<body>\n",
            "{}",
            "</body>\n",
            "</html>\n"
        ),
        inner
    )
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
