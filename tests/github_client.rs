use repo_showcase_server::error::ShowcaseError;
use repo_showcase_server::github::{top_contributors, GitHubClient};
use repo_showcase_server::types::{Contributor, GitHubRepo};

#[tokio::test]
async fn test_github_client_creation() {
    assert!(GitHubClient::new(None).is_ok());
    assert!(GitHubClient::new(Some("test_token".to_string())).is_ok());
}

#[test]
fn test_repo_response_parsing() {
    let json = r#"{
        "name": "hello-world",
        "full_name": "octo/hello-world",
        "description": "demo",
        "stargazers_count": 42,
        "forks_count": 7
    }"#;

    let repo: GitHubRepo = serde_json::from_str(json).expect("failed to parse repo");
    assert_eq!(repo.name, "hello-world");
    assert_eq!(repo.description.as_deref(), Some("demo"));
    assert_eq!(repo.stargazers_count, 42);
}

#[test]
fn test_repo_response_with_null_description() {
    let json = r#"{"name": "hello-world", "description": null, "stargazers_count": 0}"#;

    let repo: GitHubRepo = serde_json::from_str(json).expect("failed to parse repo");
    assert!(repo.description.is_none());
}

#[test]
fn test_contributors_response_parsing() {
    let json = r#"[
        {"login": "alice", "contributions": 120, "type": "User"},
        {"login": "bob", "contributions": 3, "type": "User"}
    ]"#;

    let contributors: Vec<Contributor> =
        serde_json::from_str(json).expect("failed to parse contributors");
    assert_eq!(contributors.len(), 2);
    assert_eq!(contributors[0].login, "alice");
    assert_eq!(contributors[0].contributions, 120);
}

#[test]
fn test_top_contributors_sorts_descending_then_truncates() {
    let contributors: Vec<Contributor> = (1..=12)
        .map(|i| Contributor {
            login: format!("user{}", i),
            contributions: i,
        })
        .collect();

    let top = top_contributors(contributors);
    assert_eq!(top.len(), 10);
    assert_eq!(top[0], "user12");
    assert_eq!(top[9], "user3");
}

#[test]
fn test_top_contributors_with_fewer_than_ten() {
    let contributors = vec![
        Contributor {
            login: "bob".to_string(),
            contributions: 3,
        },
        Contributor {
            login: "alice".to_string(),
            contributions: 120,
        },
    ];

    let top = top_contributors(contributors);
    assert_eq!(top, vec!["alice".to_string(), "bob".to_string()]);
}

#[tokio::test]
#[ignore = "Requires network access to the GitHub API"]
async fn test_get_repository_live() {
    let client = GitHubClient::new(None).expect("failed to create client");

    let repo = client
        .get_repository("rust-lang", "rust")
        .await
        .expect("failed to get repository");

    assert_eq!(repo.name, "rust");
    assert!(repo.stargazers_count > 0);
}

#[tokio::test]
#[ignore = "Requires network access to the GitHub API"]
async fn test_repository_not_found_live() {
    let client = GitHubClient::new(None).expect("failed to create client");

    let result = client
        .get_repository("nonexistent-owner-xyz", "nonexistent-repository-xyz")
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        ShowcaseError::NotFound(_) => {}
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}
