use serde::Deserialize;

// GitHub API response structures
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contributor {
    pub login: String,
    pub contributions: u64,
}
