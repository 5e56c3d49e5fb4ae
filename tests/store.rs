mod common;

use common::TestContext;
use repo_showcase_server::models::{LookupOutcome, NewEntry};
use repo_showcase_server::store::is_well_formed_id;

fn sample_entry() -> NewEntry {
    NewEntry {
        username: "octo".to_string(),
        repository: "hello-world".to_string(),
        color: "#ff0000".to_string(),
        avatar: "https://x/1.jpg".to_string(),
    }
}

#[tokio::test]
async fn test_create_then_read_round_trip() {
    let ctx = TestContext::new().await.expect("failed to create test context");

    let id = ctx
        .store
        .create_entry(sample_entry())
        .await
        .expect("failed to create entry");

    assert!(!id.is_empty());
    assert!(is_well_formed_id(&id));

    let outcome = ctx.store.get_entry(&id).await.expect("failed to read entry");
    match outcome {
        LookupOutcome::Found(record) => {
            assert_eq!(record.id.key().to_string(), id);
            assert_eq!(record.username, "octo");
            assert_eq!(record.repository, "hello-world");
            assert_eq!(record.color, "#ff0000");
            assert_eq!(record.avatar, "https://x/1.jpg");
        }
        other => panic!("Expected Found, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_identical_payloads_get_distinct_ids() {
    let ctx = TestContext::new().await.expect("failed to create test context");

    let first = ctx
        .store
        .create_entry(sample_entry())
        .await
        .expect("failed to create first entry");
    let second = ctx
        .store
        .create_entry(sample_entry())
        .await
        .expect("failed to create second entry");

    assert_ne!(first, second);

    // The first record is untouched by the second insert
    match ctx.store.get_entry(&first).await.expect("failed to read entry") {
        LookupOutcome::Found(record) => {
            assert_eq!(record.username, "octo");
            assert_eq!(record.repository, "hello-world");
        }
        other => panic!("Expected Found, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_read_of_never_created_id_is_not_found() {
    let ctx = TestContext::new().await.expect("failed to create test context");

    let outcome = ctx
        .store
        .get_entry("zzz999")
        .await
        .expect("lookup should not error");
    assert!(matches!(outcome, LookupOutcome::NotFound));
}

#[tokio::test]
async fn test_malformed_id_is_a_distinct_outcome() {
    let ctx = TestContext::new().await.expect("failed to create test context");

    for bad_id in ["", "not a valid id!", "a/b", "⟨weird⟩"] {
        let outcome = ctx
            .store
            .get_entry(bad_id)
            .await
            .expect("lookup should not error");
        assert!(
            matches!(outcome, LookupOutcome::InvalidId),
            "expected InvalidId for {:?}",
            bad_id
        );
    }
}

#[tokio::test]
async fn test_empty_fields_are_stored_as_is() {
    let ctx = TestContext::new().await.expect("failed to create test context");

    // The service performs no validation; the form is responsible for
    // required fields
    let entry = NewEntry {
        username: String::new(),
        repository: String::new(),
        color: "#2e7eff".to_string(),
        avatar: String::new(),
    };

    let id = ctx
        .store
        .create_entry(entry)
        .await
        .expect("failed to create entry");

    match ctx.store.get_entry(&id).await.expect("failed to read entry") {
        LookupOutcome::Found(record) => {
            assert!(record.username.is_empty());
            assert!(record.repository.is_empty());
            assert!(record.avatar.is_empty());
        }
        other => panic!("Expected Found, got: {:?}", other),
    }
}

#[test]
fn test_well_formed_id_rules() {
    assert!(is_well_formed_id("abc123"));
    assert!(is_well_formed_id("ABC123xyz"));
    assert!(!is_well_formed_id(""));
    assert!(!is_well_formed_id("abc-123"));
    assert!(!is_well_formed_id("abc 123"));
}
