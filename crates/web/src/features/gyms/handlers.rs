use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::gym::{CreateGymRequest, GymListResponse, GymResponse, NearbyGymsQuery, SearchGymsQuery},
    geo::Coordinate,
    services::GymService,
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/gyms",
    request_body = CreateGymRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Gym registered successfully", body = GymResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "gyms"
)]
pub async fn create_gym(
    State(state): State<AppState>,
    Json(req): Json<CreateGymRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let gym = GymService::new(state.gyms.as_ref()).create(req.into()).await?;

    Ok((StatusCode::CREATED, Json(GymResponse::from(gym))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/gyms/search",
    params(SearchGymsQuery),
    responses(
        (status = 200, description = "Gyms whose title matches the query", body = GymListResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 401, description = "Missing user identity")
    ),
    tag = "gyms"
)]
pub async fn search_gyms(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<SearchGymsQuery>,
) -> Result<Response, WebError> {
    query.validate()?;

    let gyms = GymService::new(state.gyms.as_ref())
        .search(&query.q, query.page)
        .await?;

    Ok(Json(GymListResponse::from(gyms)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/gyms/nearby",
    params(NearbyGymsQuery),
    responses(
        (status = 200, description = "Gyms within 10 km of the user", body = GymListResponse),
        (status = 400, description = "Invalid coordinates"),
        (status = 401, description = "Missing user identity")
    ),
    tag = "gyms"
)]
pub async fn fetch_nearby_gyms(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<NearbyGymsQuery>,
) -> Result<Response, WebError> {
    query.validate()?;

    let gyms = GymService::new(state.gyms.as_ref())
        .fetch_nearby(Coordinate::new(query.latitude, query.longitude))
        .await?;

    Ok(Json(GymListResponse::from(gyms)).into_response())
}
