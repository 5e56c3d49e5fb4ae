use reqwest::Client;
use std::time::Duration;

use crate::error::{Result, ShowcaseError};
use crate::models::{CreateEntryResponse, NewEntry, DEFAULT_COLOR};

const AVATAR_CANDIDATE_COUNT: u32 = 8;

/// The fixed set of preset avatars offered by the creation form.
pub fn avatar_candidates() -> Vec<String> {
    (1..=AVATAR_CANDIDATE_COUNT)
        .map(|id| format!("https://randomuser.me/api/portraits/thumb/lego/{}.jpg", id))
        .collect()
}

/// Creation form state machine.
///
/// All fields are independently editable; submission is disabled until
/// username, repository and avatar are non-empty (color always carries the
/// default, so it never blocks). A successful submit stores the returned id
/// and clears the fields back to defaults; a failed submit leaves the state
/// untouched so the user can retry.
#[derive(Debug, Clone)]
pub struct CardForm {
    pub username: String,
    pub repository: String,
    pub color: String,
    pub avatar: String,
    link: Option<String>,
}

impl Default for CardForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            repository: String::new(),
            color: DEFAULT_COLOR.to_string(),
            avatar: String::new(),
            link: None,
        }
    }
}

impl CardForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_repository(&mut self, repository: impl Into<String>) {
        self.repository = repository.into();
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Single-select avatar choice: picking the current avatar again is a
    /// no-op, picking a different one replaces it.
    pub fn select_avatar(&mut self, url: impl Into<String>) {
        self.avatar = url.into();
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.username.is_empty() || self.repository.is_empty() || self.avatar.is_empty()
    }

    /// The four fields packaged for `POST /create-entry`.
    pub fn payload(&self) -> NewEntry {
        NewEntry {
            username: self.username.clone(),
            repository: self.repository.clone(),
            color: self.color.clone(),
            avatar: self.avatar.clone(),
        }
    }

    /// Apply a successful submission: remember the generated id and clear
    /// the fields so another link can be created.
    pub fn complete(&mut self, id: impl Into<String>) {
        self.link = Some(id.into());
        self.reset_fields();
    }

    fn reset_fields(&mut self) {
        self.username.clear();
        self.repository.clear();
        self.color = DEFAULT_COLOR.to_string();
        self.avatar.clear();
    }

    /// Id of the last successfully created entry, if any.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Submit the form through the given client.
    pub async fn submit(&mut self, client: &FormClient) -> Result<String> {
        if self.is_submit_disabled() {
            return Err(ShowcaseError::ValidationError(
                "username, repository and avatar are required".to_string(),
            ));
        }

        let id = client.create_entry(&self.payload()).await?;
        self.complete(id.clone());
        Ok(id)
    }
}

/// HTTP client for the entry service, used by the creation form.
pub struct FormClient {
    http: Client,
    base_url: String,
}

impl FormClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub async fn create_entry(&self, entry: &NewEntry) -> Result<String> {
        let response = self
            .http
            .post(format!("{}/create-entry", self.base_url))
            .json(entry)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ShowcaseError::UpstreamError(format!(
                "Something went wrong with your entry, status: {}",
                response.status().as_u16()
            )));
        }

        let data: CreateEntryResponse = response.json().await?;
        Ok(data.new_id)
    }

    /// Shareable URL for a generated entry id.
    pub fn share_link(&self, id: &str) -> String {
        format!("{}/r/{}", self.base_url, id)
    }
}
