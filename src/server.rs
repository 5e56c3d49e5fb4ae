use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::github::GitHubClient;
use crate::models::{CreateEntryResponse, EntryResponse, LookupOutcome, NewEntry, RenderedCard};
use crate::pool::SurrealPool;
use crate::showcase::{build_card, fetch_repo_data, render_card, render_no_data, render_page};

/// Shared state for the entry service handlers.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: Arc<SurrealPool>,
    pub github: Arc<GitHubClient>,
}

/// Build the entry service router.
///
/// `POST /create-entry` and `GET /repo/{id}` form the record API;
/// `GET /r/{id}` renders the showcase card server-side; everything else
/// falls back to the static single-page frontend.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    let index = PathBuf::from(static_dir).join("index.html");
    let spa = ServeDir::new(static_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .route("/create-entry", post(create_entry))
        .route("/repo/:id", get(get_entry))
        .route("/r/:id", get(show_card))
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Insert a new customization record and return its generated id.
///
/// No field validation happens here; the form enforces required fields
/// before submitting. Store failures surface as a bare 500.
async fn create_entry(
    State(state): State<AppState>,
    Json(entry): Json<NewEntry>,
) -> impl IntoResponse {
    let store = match state.db_pool.get().await {
        Ok(store) => store,
        Err(e) => {
            error!("error getting db connection: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match store.create_entry(entry).await {
        Ok(id) => (StatusCode::CREATED, Json(CreateEntryResponse { new_id: id })).into_response(),
        Err(e) => {
            error!("error creating db entry: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Look up a record by id. A malformed id is a 400, an absent record a 404.
async fn get_entry(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let store = match state.db_pool.get().await {
        Ok(store) => store,
        Err(e) => {
            error!("error getting db connection: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match store.get_entry(&id).await {
        Ok(LookupOutcome::Found(record)) => {
            (StatusCode::OK, Json(EntryResponse::from(record))).into_response()
        }
        Ok(LookupOutcome::NotFound) => StatusCode::NOT_FOUND.into_response(),
        Ok(LookupOutcome::InvalidId) => StatusCode::BAD_REQUEST.into_response(),
        Err(e) => {
            error!("error getting db entry: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Render the showcase card for a share link.
///
/// Any failure (missing record, GitHub error) collapses into the terminal
/// "no data" page, matching the client-side view.
async fn show_card(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let cancel = CancellationToken::new();
    let body = match load_card(&state, &id, &cancel).await {
        Some(card) => render_page(&render_card(&card)),
        None => render_page(&render_no_data()),
    };
    Html(body)
}

async fn load_card(state: &AppState, id: &str, cancel: &CancellationToken) -> Option<RenderedCard> {
    let store = match state.db_pool.get().await {
        Ok(store) => store,
        Err(e) => {
            error!("error getting db connection: {}", e);
            return None;
        }
    };

    let record = match store.get_entry(id).await {
        Ok(LookupOutcome::Found(record)) => record,
        Ok(_) => return None,
        Err(e) => {
            error!("error getting db entry: {}", e);
            return None;
        }
    };

    let entry = EntryResponse::from(record);
    match fetch_repo_data(&state.github, &entry.username, &entry.repository, cancel).await {
        Ok((repo, contributors)) => Some(build_card(entry, repo, contributors)),
        Err(e) => {
            error!("error fetching GitHub data for {}: {}", id, e);
            None
        }
    }
}
