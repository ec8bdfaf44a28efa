use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/readings",
            get(handlers::list_readings).post(handlers::add_reading),
        )
        .route("/api/readings/:id", delete(handlers::delete_reading))
        .route("/api/report", get(handlers::export_report))
        .route(
            "/api/settings",
            get(handlers::get_settings).put(handlers::update_settings),
        )
        .route("/api/settings/test", post(handlers::send_test_message))
        .route("/api/events", get(handlers::events))
        .with_state(state)
}
