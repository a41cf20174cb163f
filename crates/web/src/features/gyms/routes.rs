use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{create_gym, fetch_nearby_gyms, search_gyms};
use crate::middleware::auth::{ApiKeys, require_api_key};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_gym))
        .route_layer(middleware::from_fn_with_state(api_keys, require_api_key));

    Router::new()
        .route("/search", get(search_gyms))
        .route("/nearby", get(fetch_nearby_gyms))
        .merge(protected)
}
