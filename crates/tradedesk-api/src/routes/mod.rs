mod health;
mod views;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/v1/views", get(views::config))
        .route("/v1/views/{key}", get(views::get_view))
        .route("/v1/views/{key}/data", post(views::view_data))
}
