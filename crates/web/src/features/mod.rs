use axum::Router;

use crate::state::AppState;

pub mod check_ins;
pub mod gyms;

/// All API routes, nested under `/api`.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/gyms", gyms::routes::routes(state.api_keys.clone()))
        .nest("/check-ins", check_ins::routes::routes(state.api_keys.clone()));

    Router::new().nest("/api", api).with_state(state)
}
