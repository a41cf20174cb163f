use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use super::handlers::{check_in, get_check_in_history, get_user_metrics, validate_check_in};
use crate::middleware::auth::{ApiKeys, require_api_key};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/:check_in_id/validate", patch(validate_check_in))
        .route_layer(middleware::from_fn_with_state(api_keys, require_api_key));

    Router::new()
        .route("/", post(check_in))
        .route("/history", get(get_check_in_history))
        .route("/metrics", get(get_user_metrics))
        .merge(protected)
}
