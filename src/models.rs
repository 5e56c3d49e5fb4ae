use serde::{Deserialize, Serialize};
use surrealdb::sql::Datetime;
use surrealdb::RecordId;

/// Accent color applied when a submission leaves the color unset.
pub const DEFAULT_COLOR: &str = "#2e7eff";

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// Incoming customization fields from the creation form.
///
/// The service performs no field validation beyond requiring well-formed
/// JSON; empty fields are stored as-is (the form disables submission until
/// the required fields are filled).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewEntry {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub repository: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub avatar: String,
}

impl Default for NewEntry {
    fn default() -> Self {
        Self {
            username: String::new(),
            repository: String::new(),
            color: default_color(),
            avatar: String::new(),
        }
    }
}

/// Customization record as stored in SurrealDB.
///
/// Records are immutable once created; no update or delete path exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomizationRecord {
    pub id: RecordId,
    pub username: String,
    pub repository: String,
    pub color: String,
    pub avatar: String,
    pub created_at: Datetime,
}

/// Wire shape of `GET /repo/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub repository: String,
    pub color: String,
    pub avatar: String,
}

impl From<CustomizationRecord> for EntryResponse {
    fn from(record: CustomizationRecord) -> Self {
        Self {
            id: record.id.key().to_string(),
            username: record.username,
            repository: record.repository,
            color: record.color,
            avatar: record.avatar,
        }
    }
}

/// Wire shape of a successful `POST /create-entry`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEntryResponse {
    #[serde(rename = "newId")]
    pub new_id: String,
}

/// Outcome of an entry lookup.
///
/// A malformed id and a valid-but-absent id are distinct outcomes rather
/// than a single error path.
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    Found(CustomizationRecord),
    NotFound,
    InvalidId,
}

/// Fully merged card data, derived fresh on every showcase load.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard {
    pub username: String,
    pub repository: String,
    pub avatar: String,
    pub color: String,
    pub star_count: u32,
    pub repo_description: String,
    pub repo_display_name: String,
    pub top_contributors: Vec<String>,
}
