use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::{
    dto::{
        check_in::{
            CheckInHistoryResponse, CheckInResponse, CreateCheckInRequest, UserMetricsResponse,
        },
        common::PageParams,
    },
    services::{CheckInInput, CheckInService},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

fn service(state: &AppState) -> CheckInService<'_> {
    CheckInService::new(state.check_ins.as_ref(), state.gyms.as_ref())
}

#[utoipa::path(
    post,
    path = "/api/check-ins",
    request_body = CreateCheckInRequest,
    responses(
        (status = 201, description = "Checked in successfully", body = CheckInResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing user identity"),
        (status = 404, description = "Gym not found"),
        (status = 409, description = "Too far from the gym or already checked in today")
    ),
    tag = "check-ins"
)]
pub async fn check_in(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<CreateCheckInRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let input = CheckInInput {
        gym_id: req.gym_id,
        user_id,
        user_latitude: req.latitude,
        user_longitude: req.longitude,
    };
    let check_in = service(&state)
        .check_in(input, Utc::now().naive_utc())
        .await?;

    Ok((StatusCode::CREATED, Json(CheckInResponse::from(check_in))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/check-ins/history",
    params(PageParams),
    responses(
        (status = 200, description = "A page of the user's check-ins", body = CheckInHistoryResponse),
        (status = 400, description = "Invalid page"),
        (status = 401, description = "Missing user identity")
    ),
    tag = "check-ins"
)]
pub async fn get_check_in_history(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(params): Query<PageParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let check_ins = service(&state).history(user_id, params.page).await?;

    Ok(Json(CheckInHistoryResponse::from(check_ins)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/check-ins/metrics",
    responses(
        (status = 200, description = "Check-in count for the user", body = UserMetricsResponse),
        (status = 401, description = "Missing user identity")
    ),
    tag = "check-ins"
)]
pub async fn get_user_metrics(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Response, WebError> {
    let check_ins_count = service(&state).metrics(user_id).await?;

    Ok(Json(UserMetricsResponse { check_ins_count }).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/check-ins/{check_in_id}/validate",
    params(
        ("check_in_id" = Uuid, Path, description = "Check-in ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Check-in validated"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Check-in not found"),
        (status = 409, description = "Validation window elapsed")
    ),
    tag = "check-ins"
)]
pub async fn validate_check_in(
    State(state): State<AppState>,
    Path(check_in_id): Path<Uuid>,
) -> Result<Response, WebError> {
    service(&state)
        .validate(check_in_id, Utc::now().naive_utc())
        .await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
