//! Test case handlers - catalog, assignment and the disabled flag.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::{CardLinkDto, CreateTestRequest, SetDisabledRequest, TestDto};
use crate::error::HttpError;
use crate::extract::{ApiJson, CallerId};
use crate::state::AppState;

/// List all test cases.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TestDto>>, HttpError> {
    let tests = state.core.catalog().list().await?;
    Ok(Json(tests.into_iter().map(TestDto::from).collect()))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TestDto>, HttpError> {
    Ok(Json(state.core.catalog().get(&id).await?.into()))
}

/// Create a test case (admin only).
pub async fn create(
    State(state): State<AppState>,
    CallerId(caller): CallerId,
    ApiJson(req): ApiJson<CreateTestRequest>,
) -> Result<(StatusCode, Json<TestDto>), HttpError> {
    let new_test = req.into_new_test()?;
    let created = state.core.gate().create_test(&caller, &new_test).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Claim a test for the caller.
pub async fn assign(
    State(state): State<AppState>,
    CallerId(caller): CallerId,
    Path(id): Path<String>,
) -> Result<Json<TestDto>, HttpError> {
    Ok(Json(state.core.gate().assign_test(&caller, &id).await?.into()))
}

/// Release a test held by the caller.
pub async fn unassign(
    State(state): State<AppState>,
    CallerId(caller): CallerId,
    Path(id): Path<String>,
) -> Result<Json<TestDto>, HttpError> {
    Ok(Json(state.core.gate().unassign_test(&caller, &id).await?.into()))
}

/// Toggle the disabled flag, or set it when the body names a value.
pub async fn disabled(
    State(state): State<AppState>,
    CallerId(caller): CallerId,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<TestDto>, HttpError> {
    let req = SetDisabledRequest::from_body(&body)?;
    let gate = state.core.gate();
    let test = match req.disabled {
        Some(target) => gate.set_disabled(&caller, &id, target).await?,
        None => gate.toggle_disabled(&caller, &id).await?,
    };
    Ok(Json(test.into()))
}

/// Cached tracker cards linked to a test.
pub async fn cards(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CardLinkDto>>, HttpError> {
    let cards = state.core.cards().list(&id).await?;
    Ok(Json(cards.into_iter().map(CardLinkDto::from).collect()))
}
