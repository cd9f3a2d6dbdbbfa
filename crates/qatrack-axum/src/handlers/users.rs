//! User handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::{ProgressSummaryDto, UserDto};
use crate::error::HttpError;
use crate::extract::CallerId;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserDto>>, HttpError> {
    let users = state.core.roles().list().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// The caller's own profile and role.
pub async fn me(
    State(state): State<AppState>,
    CallerId(caller): CallerId,
) -> Result<Json<UserDto>, HttpError> {
    Ok(Json(state.core.roles().resolve(&caller).await?.into()))
}

/// Completion summary over enabled tests.
pub async fn progress_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProgressSummaryDto>, HttpError> {
    Ok(Json(state.core.progress().summary_for(&id).await?.into()))
}
