//! Progress handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use crate::dto::{ProgressDto, ProgressQuery, UpsertProgressRequest};
use crate::error::HttpError;
use crate::extract::{ApiJson, CallerId};
use crate::state::AppState;

/// All progress records, newest first; `?userId=` narrows to one user.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> Result<Json<Vec<ProgressDto>>, HttpError> {
    let tracker = state.core.progress();
    let records = match query.user_id.as_deref() {
        Some(user_id) => tracker.list_for(user_id).await?,
        None => tracker.list().await?,
    };
    Ok(Json(records.into_iter().map(ProgressDto::from).collect()))
}

/// Record the caller's progress on a test.
pub async fn upsert(
    State(state): State<AppState>,
    CallerId(caller): CallerId,
    Path(test_id): Path<String>,
    ApiJson(req): ApiJson<UpsertProgressRequest>,
) -> Result<Json<ProgressDto>, HttpError> {
    let (completed, notes) = req.into_parts()?;
    let record = state
        .core
        .gate()
        .upsert_progress(&caller, &test_id, completed, &notes)
        .await?;
    Ok(Json(record.into()))
}
