use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use surrealdb::engine::any::Any;
use surrealdb::opt::auth::Root;
use surrealdb::sql::Datetime;
use surrealdb::{RecordId, Surreal};
use tracing::{debug, info};

use crate::error::ShowcaseError;
use crate::models::{CustomizationRecord, LookupOutcome, NewEntry};

pub const ENTRY_TABLE: &str = "entry";

#[derive(Debug, Serialize)]
struct EntryRow {
    username: String,
    repository: String,
    color: String,
    avatar: String,
    created_at: Datetime,
}

#[derive(Clone, Debug)]
pub struct EntryStore {
    pub db: Surreal<Any>,
}

impl EntryStore {
    /// Create a new store handle against a SurrealDB endpoint.
    pub async fn new(
        connection_url: &str,
        username: &str,
        password: &str,
        namespace: &str,
        database: &str,
    ) -> Result<Self> {
        info!("Connecting to SurrealDB at {}", connection_url);

        let db: Surreal<Any> = Surreal::init();

        db.connect(connection_url)
            .await
            .context("Failed to connect to SurrealDB")?;

        // Embedded engines (mem://, file://) run without authentication
        if !username.is_empty() {
            db.signin(Root { username, password })
                .await
                .context("Failed to authenticate with SurrealDB")?;
        }

        db.use_ns(namespace)
            .use_db(database)
            .await
            .context("Failed to select namespace and database")?;

        info!("Successfully connected to SurrealDB");
        Ok(Self { db })
    }

    /// In-memory store backed by the embedded engine, used by tests and
    /// local development.
    pub async fn memory() -> Result<Self> {
        Self::new("mem://", "", "", "showcase", "cards").await
    }

    /// Insert a new customization record and return its generated id.
    ///
    /// The id is generated by SurrealDB on insert; records are never
    /// mutated or deleted afterwards.
    pub async fn create_entry(
        &self,
        entry: NewEntry,
    ) -> std::result::Result<String, ShowcaseError> {
        let row = EntryRow {
            username: entry.username,
            repository: entry.repository,
            color: entry.color,
            avatar: entry.avatar,
            created_at: Datetime::from(Utc::now()),
        };

        let created: Option<CustomizationRecord> = self
            .db
            .create(ENTRY_TABLE)
            .content(row)
            .await
            .map_err(|e| ShowcaseError::PersistenceError(format!("Failed to insert entry: {}", e)))?;

        let record = created.ok_or_else(|| {
            ShowcaseError::PersistenceError("Insert returned no record".to_string())
        })?;

        let id = record.id.key().to_string();
        debug!("Created entry {} for {}/{}", id, record.username, record.repository);
        Ok(id)
    }

    /// Look up a customization record by its public id.
    ///
    /// A malformed id and an absent record are distinct outcomes so callers
    /// can signal them differently.
    pub async fn get_entry(
        &self,
        id: &str,
    ) -> std::result::Result<LookupOutcome, ShowcaseError> {
        if !is_well_formed_id(id) {
            return Ok(LookupOutcome::InvalidId);
        }

        let record_id = RecordId::from((ENTRY_TABLE, id));
        let record: Option<CustomizationRecord> = self
            .db
            .select(record_id)
            .await
            .map_err(|e| ShowcaseError::PersistenceError(format!("Failed to read entry: {}", e)))?;

        Ok(match record {
            Some(record) => LookupOutcome::Found(record),
            None => LookupOutcome::NotFound,
        })
    }
}

/// Generated ids are plain ASCII alphanumeric strings; anything else can
/// never match a record.
pub fn is_well_formed_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}
