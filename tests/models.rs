use chrono::Utc;
use repo_showcase_server::models::{
    CreateEntryResponse, CustomizationRecord, EntryResponse, NewEntry, DEFAULT_COLOR,
};
use surrealdb::sql::Datetime;
use surrealdb::RecordId;

#[test]
fn test_new_entry_defaults() {
    let entry = NewEntry::default();
    assert!(entry.username.is_empty());
    assert!(entry.repository.is_empty());
    assert!(entry.avatar.is_empty());
    assert_eq!(entry.color, DEFAULT_COLOR);
}

#[test]
fn test_new_entry_color_defaults_when_absent_from_json() {
    let entry: NewEntry = serde_json::from_str(
        r#"{"username": "octo", "repository": "hello-world", "avatar": "https://x/1.jpg"}"#,
    )
    .expect("failed to parse entry");

    assert_eq!(entry.color, DEFAULT_COLOR);
}

#[test]
fn test_new_entry_missing_fields_deserialize_as_empty() {
    let entry: NewEntry = serde_json::from_str("{}").expect("failed to parse entry");
    assert!(entry.username.is_empty());
    assert!(entry.repository.is_empty());
    assert!(entry.avatar.is_empty());
    assert_eq!(entry.color, DEFAULT_COLOR);
}

#[test]
fn test_entry_response_from_record() {
    let record = CustomizationRecord {
        id: RecordId::from(("entry", "abc123")),
        username: "octo".to_string(),
        repository: "hello-world".to_string(),
        color: "#ff0000".to_string(),
        avatar: "https://x/1.jpg".to_string(),
        created_at: Datetime::from(Utc::now()),
    };

    let response = EntryResponse::from(record);
    assert_eq!(response.id, "abc123");
    assert_eq!(response.username, "octo");
    assert_eq!(response.repository, "hello-world");
    assert_eq!(response.color, "#ff0000");
    assert_eq!(response.avatar, "https://x/1.jpg");
}

#[test]
fn test_entry_response_wire_shape_uses_underscore_id() {
    let response = EntryResponse {
        id: "abc123".to_string(),
        username: "octo".to_string(),
        repository: "hello-world".to_string(),
        color: "#ff0000".to_string(),
        avatar: "https://x/1.jpg".to_string(),
    };

    let json = serde_json::to_value(&response).expect("failed to serialize");
    assert_eq!(json["_id"], serde_json::json!("abc123"));
    assert!(json.get("id").is_none());
}

#[test]
fn test_create_entry_response_wire_shape() {
    let json = serde_json::to_string(&CreateEntryResponse {
        new_id: "abc123".to_string(),
    })
    .expect("failed to serialize");

    assert_eq!(json, r#"{"newId":"abc123"}"#);
}
