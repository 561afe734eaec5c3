//! User CRUD handlers
//!
//! Each handler decodes the request, makes exactly one repository call, and
//! encodes the result. Every failure becomes a 500 via [`Error`].

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use crate::{
    error::{Error, Result},
    models::{User, UserId, UserPayload},
    repository::UserRepository,
    state::AppState,
};

/// Parse the `{id}` path segment
fn parse_id(raw: &str) -> Result<UserId> {
    raw.parse().map_err(|e: std::num::ParseIntError| Error::InvalidId {
        id: raw.to_string(),
        reason: e.to_string(),
    })
}

/// List all users
#[instrument(skip(state))]
pub async fn list_users<R: UserRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<User>>> {
    let users = state.users().list_users().await?;
    tracing::debug!("Listed {} users", users.len());
    Ok(Json(users))
}

/// Get a user by id
#[instrument(skip(state))]
pub async fn get_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    let id = parse_id(&id)?;
    let user = state.users().get_user(id).await?;
    Ok(Json(user))
}

/// Create a user from a `{name, email}` body
#[instrument(skip(state, body))]
pub async fn create_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<Json<User>> {
    let payload = UserPayload::from_body_lenient(&body);
    let user = state.users().create_user(payload).await?;
    tracing::info!("Created user {}", user.id);
    Ok(Json(user))
}

/// Overwrite a user's name and email
#[instrument(skip(state, body))]
pub async fn update_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    let payload = UserPayload::from_body_lenient(&body);
    state.users().update_user(id, payload).await?;
    Ok(StatusCode::OK)
}

/// Delete a user
#[instrument(skip(state))]
pub async fn delete_user<R: UserRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    state.users().delete_user(id).await?;
    Ok(StatusCode::OK)
}
